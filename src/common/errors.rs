use core::str::Utf8Error;

/// An error returned when a sequence of path fragments cannot be resolved.
///
/// This `enum` is created by the [`resolve`] method on [`Resolver`].
/// See its documentation for more.
///
/// [`Resolver`]: crate::Resolver
/// [`resolve`]: crate::Resolver::resolve
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// Fragment at `index` was not a valid UTF-8 string
    #[error("paths[{index}] is not a valid UTF-8 string")]
    InvalidFragment {
        index: usize,
        #[source]
        source: Utf8Error,
    },
}

impl ResolveError {
    /// Returns the position of the fragment that caused the error
    pub fn index(&self) -> usize {
        match self {
            Self::InvalidFragment { index, .. } => *index,
        }
    }
}

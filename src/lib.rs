#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

#[doc = include_str!("../README.md")]
#[cfg(all(doctest, feature = "std"))]
pub struct ReadmeDoctests;

extern crate alloc;

mod no_std_compat {
    pub use alloc::{
        borrow::Cow,
        format,
        string::String,
        vec::Vec,
    };
}

mod common;
mod env;
mod windows;

pub use common::*;
pub use env::*;
pub use windows::*;

/// Contains constants associated with Windows path strings.
pub mod constants {
    pub use super::windows::constants::*;
}

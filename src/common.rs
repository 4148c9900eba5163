mod errors;
mod normalize;
mod separator;

pub use errors::*;
pub use normalize::*;
pub use separator::*;

pub mod error;
pub use error::*;

pub mod roster;
pub use roster::*;

pub mod round;
pub use round::*;

pub mod constants;
pub mod limits;

pub use constants::*;
pub use limits::Limits;

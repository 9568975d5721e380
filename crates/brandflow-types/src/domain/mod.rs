pub mod mode;
pub mod tag;

pub use mode::*;
pub use tag::*;

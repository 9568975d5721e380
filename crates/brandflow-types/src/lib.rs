pub mod column;
pub mod domain;
pub mod error;
pub mod filter;
pub mod metric;
pub mod product;

pub use column::*;
pub use domain::*;
pub use error::{Error, Result};
pub use filter::*;
pub use metric::*;
pub use product::*;

mod definition;
mod operator;
mod value;

pub use definition::*;
pub use operator::*;
pub use value::*;

//! Rule text parsing and validation.

mod parser;
mod validate;

pub use parser::parse;
pub use validate::validate;

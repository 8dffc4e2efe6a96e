//! Rule text serialization.

mod serializer;

pub use serializer::serialize;

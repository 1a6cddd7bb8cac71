pub mod serializer;
mod writer;

pub use serializer::*;

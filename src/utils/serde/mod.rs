mod string_deserializer;
pub use string_deserializer::*;

mod u64_deserializer;
pub use u64_deserializer::*;

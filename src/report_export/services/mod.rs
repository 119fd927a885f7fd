pub mod field_extractor;

pub use field_extractor::FieldExtractor;

mod fields;
mod parser;

pub use fields::{FieldDefinition, FieldSet};
pub use parser::parse_labels;

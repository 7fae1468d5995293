mod decode;
mod primitive_schema;
mod schema;

pub(crate) use decode::parse_schema_document;
pub(crate) use primitive_schema::PrimitiveDocument;
pub use schema::{Column, Measure, Relationship, Schema, Table};

/// Name of the schema document inside a template archive.
pub const SCHEMA_FILE_NAME: &str = "DataModelSchema";

mod archive;
mod documenter;
mod errors;
mod options;
mod render;
mod schema;
mod tests;

pub use documenter::Documenter;
pub use errors::{Error, ErrorKind};
pub use options::Options;
pub use render::Render;
pub use schema::{Column, Measure, Relationship, Schema, Table, SCHEMA_FILE_NAME};

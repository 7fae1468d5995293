use std::fs;
use std::path::Path;

use crate::archive::ExtractDir;
use crate::errors::{Error, ErrorKind};
use crate::render::Render;
use crate::schema::{self, Schema, SCHEMA_FILE_NAME};
use crate::Options;

pub struct Documenter {
    options: Options,
}

impl Documenter {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// Runs the whole pipeline against one template archive and returns the
    /// Markdown report. The extraction directory is removed on every path
    /// out of this function, success or failure.
    pub fn document(&self, archive_path: &Path) -> Result<String, Error> {
        let extracted = ExtractDir::extract(archive_path, &self.options.extract_dir)?;
        let schema_path = extracted.path().join(SCHEMA_FILE_NAME);
        if !schema_path.is_file() {
            return Err(Error::new(ErrorKind::SchemaFileMissing(
                extracted.path().to_path_buf(),
            )));
        }
        let bytes =
            fs::read(&schema_path).map_err(|e| Error::new(ErrorKind::Io(e.to_string())))?;
        let document = schema::parse_schema_document(&bytes)?;
        Ok(Schema::from(document).render())
    }
}

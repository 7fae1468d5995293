use std::path::Path;

use crate::schema::SCHEMA_FILE_NAME;

pub fn archive_not_found(path: &Path) -> String {
    format!("Template archive `{}` not found.", path.display())
}

pub fn archive_invalid(detail: &str) -> String {
    format!("Template archive is not a readable ZIP file: {detail}")
}

pub fn schema_file_missing(dir: &Path) -> String {
    format!(
        "No `{SCHEMA_FILE_NAME}` file found in `{}`.",
        dir.display()
    )
}

pub fn schema_undecodable() -> String {
    format!("Failed to decode `{SCHEMA_FILE_NAME}` under any supported encoding.")
}

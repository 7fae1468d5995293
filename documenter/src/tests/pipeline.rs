use std::path::{Path, PathBuf};

use tempfile::tempdir;

use crate::schema::SCHEMA_FILE_NAME;
use crate::{Documenter, ErrorKind, Options};

use super::test_utils::write_archive;

const MINIMAL_SCHEMA: &str = r#"{
    "model": {
        "tables": [
            {
                "name": "Sales",
                "description": "Fact table",
                "columns": [
                    {
                        "name": "Amount",
                        "dataType": "decimal",
                        "description": "Line total",
                        "isHidden": false,
                        "isUnique": false
                    }
                ],
                "measures": [
                    {"name": "Total Sales", "expression": "SUM(Sales[Amount])"}
                ]
            }
        ],
        "relationships": [
            {
                "fromTable": "Sales",
                "fromColumn": "ProductId",
                "toTable": "Product",
                "toColumn": "Id",
                "cardinality": "manyToOne"
            }
        ]
    }
}"#;

struct Setup {
    archive: PathBuf,
    extract_dir: PathBuf,
    documenter: Documenter,
}

/// Builds an archive holding `schema_bytes` under the schema file name,
/// with extraction pointed inside `dir` so that runs stay isolated.
fn setup(dir: &Path, schema_bytes: &[u8]) -> Setup {
    let archive = dir.join("model.pbit");
    write_archive(&archive, SCHEMA_FILE_NAME, schema_bytes);
    let extract_dir = dir.join("extract");
    let documenter = Documenter::new(Options {
        extract_dir: extract_dir.clone(),
    });
    Setup {
        archive,
        extract_dir,
        documenter,
    }
}

#[test]
fn test_minimal_archive_renders_expected_report() {
    let dir = tempdir().unwrap();
    let s = setup(dir.path(), MINIMAL_SCHEMA.as_bytes());
    let report = s.documenter.document(&s.archive).unwrap();

    assert!(report.starts_with("# Power BI Model Documentation\n\n## Tables\n"));
    assert!(report.contains("### Sales\n*Description*: Fact table\n"));
    assert!(report.contains("| Amount | decimal | Line total | false | false |\n"));
    assert!(report.contains("- **Total Sales**: `SUM(Sales[Amount])`\n"));
    assert!(report.contains("| Sales | ProductId | Product | Id | manyToOne |\n"));
}

#[test]
fn test_missing_optional_fields_render_defaults() {
    let dir = tempdir().unwrap();
    let schema = r#"{"model": {"tables": [{"columns": [{}], "measures": [{}]}], "relationships": [{}]}}"#;
    let s = setup(dir.path(), schema.as_bytes());
    let report = s.documenter.document(&s.archive).unwrap();

    assert!(report.contains("### N/A\n*Description*: \n"));
    assert!(report.contains("| N/A | unknown |  | false | false |\n"));
    assert!(report.contains("- **N/A**: ``\n"));
    assert!(report.contains("| N/A | N/A | N/A | N/A | N/A |\n"));
}

#[test]
fn test_utf16_schema_document_is_accepted() {
    let dir = tempdir().unwrap();
    let mut bytes = vec![0xff, 0xfe];
    for unit in MINIMAL_SCHEMA.encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    let s = setup(dir.path(), &bytes);
    let report = s.documenter.document(&s.archive).unwrap();
    assert!(report.contains("### Sales\n"));
}

#[test]
fn test_missing_schema_file() {
    let dir = tempdir().unwrap();
    let archive = dir.path().join("model.pbit");
    write_archive(&archive, "Report/Layout", b"{}");
    let extract_dir = dir.path().join("extract");
    let documenter = Documenter::new(Options {
        extract_dir: extract_dir.clone(),
    });

    let err = documenter.document(&archive).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::SchemaFileMissing(_)));
    assert!(!extract_dir.exists());
}

#[test]
fn test_undecodable_schema_file() {
    let dir = tempdir().unwrap();
    let s = setup(dir.path(), &[0xff, 0xfe, 0xff]);

    let err = s.documenter.document(&s.archive).unwrap_err();
    assert_eq!(*err.kind(), ErrorKind::SchemaUndecodable);
    assert!(!s.extract_dir.exists());
}

#[test]
fn test_archive_not_found() {
    let dir = tempdir().unwrap();
    let documenter = Documenter::new(Options {
        extract_dir: dir.path().join("extract"),
    });

    let err = documenter.document(&dir.path().join("nope.pbit")).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::ArchiveNotFound(_)));
}

#[test]
fn test_invalid_archive() {
    let dir = tempdir().unwrap();
    let archive = dir.path().join("not-a-zip.pbit");
    std::fs::write(&archive, "plain text").unwrap();
    let extract_dir = dir.path().join("extract");
    let documenter = Documenter::new(Options {
        extract_dir: extract_dir.clone(),
    });

    let err = documenter.document(&archive).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::ArchiveInvalid(_)));
    assert!(!extract_dir.exists());
}

#[test]
fn test_output_is_idempotent() {
    let dir = tempdir().unwrap();
    let s = setup(dir.path(), MINIMAL_SCHEMA.as_bytes());
    let first = s.documenter.document(&s.archive).unwrap();
    let second = s.documenter.document(&s.archive).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_extraction_directory_removed_on_success() {
    let dir = tempdir().unwrap();
    let s = setup(dir.path(), MINIMAL_SCHEMA.as_bytes());
    s.documenter.document(&s.archive).unwrap();
    assert!(!s.extract_dir.exists());
}

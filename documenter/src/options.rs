use std::path::PathBuf;

/// Default directory that archive contents are unpacked into, relative to
/// the working directory. Two runs sharing this directory at the same time
/// will interfere with each other; callers that need isolation should set
/// their own `extract_dir`.
pub const DEFAULT_EXTRACT_DIR: &str = "temp_pbit_extract";

pub struct Options {
    /// Where the archive is unpacked while a report is being produced. The
    /// directory is removed again before the run finishes.
    pub extract_dir: PathBuf,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            extract_dir: PathBuf::from(DEFAULT_EXTRACT_DIR),
        }
    }
}

use clap::Parser;
use pbidoc::{Documenter, Options};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

/// Power BI template documenter
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the .pbit template archive
    archive: PathBuf,
    /// Path the Markdown report is written to
    #[arg(short, long, default_value = "pbi_documentation.md")]
    output: PathBuf,
    /// Directory the archive is unpacked into while the report is produced
    #[arg(long)]
    extract_dir: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Cli::parse();
    let mut options = Options::default();
    if let Some(dir) = args.extract_dir {
        options.extract_dir = dir;
    }

    let report = match Documenter::new(options).document(&args.archive) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(e.kind().exit_code());
        }
    };
    if let Err(e) = fs::write(&args.output, report) {
        eprintln!("error: {e}");
        return ExitCode::from(1);
    }
    println!("Documentation written to {}", args.output.display());
    ExitCode::SUCCESS
}

//! Command-line interface for treescribe.
//!
//! Scans a root directory, writes the tree and file contents report to a file
//! and optionally echoes either part to the terminal.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::exit;
use treescribe::ignore_file::default_ignore_patterns;
use treescribe::output::{self, DEFAULT_OUTPUT_FILE};
use treescribe::{ScribeBuilder, ScribeError, ScribeOptions, ScribeResult, scribe, validate_root};

/// treescribe — directory tree and file contents in one report
#[derive(Parser)]
#[command(name = "treescribe", version, about, long_about = None)]
struct Cli {
    /// Root directory to scan (default: current working directory)
    #[arg(short, long)]
    root: Option<PathBuf>,

    /// Output file name
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Include patterns (e.g. "*.py", "src/"); can be repeated
    #[arg(short, long = "include")]
    include: Vec<String>,

    /// Exclude patterns (e.g. "build/", "*.tmp"); can be repeated
    #[arg(short, long = "exclude")]
    exclude: Vec<String>,

    /// Do not write to a file
    #[arg(short, long)]
    no_file: bool,

    /// Print directory structure to terminal
    #[arg(short = 't', long)]
    print_tree: bool,

    /// Print file contents to terminal
    #[arg(short = 'c', long)]
    print_content: bool,

    /// Ignore pattern file (default: .trscrignore next to the executable,
    /// else the built-in patterns)
    #[arg(long, conflicts_with = "no_ignore_file")]
    ignore_file: Option<PathBuf>,

    /// Do not load any ignore pattern file
    #[arg(long)]
    no_ignore_file: bool,

    /// Format of the written report
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

impl From<OutputFormat> for output::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => output::OutputFormat::Text,
            OutputFormat::Json => output::OutputFormat::Json,
        }
    }
}

impl Cli {
    fn into_options(self) -> Result<(ScribeOptions, Settings), ScribeError> {
        let root = match self.root {
            Some(root) => root,
            None => std::env::current_dir().map_err(|e| ScribeError::io(".", e))?,
        };
        validate_root(&root)?;

        let mut builder = ScribeBuilder::new(root)
            .include_patterns(self.include)
            .ignore_patterns(self.exclude);

        if let Some(path) = self.ignore_file {
            builder = builder.ignore_file(path)?;
        } else if !self.no_ignore_file {
            builder = builder.base_ignore_patterns(default_ignore_patterns()?);
        }

        let settings = Settings {
            output: (!self.no_file).then_some(self.output),
            format: self.format.into(),
            print_tree: self.print_tree,
            print_content: self.print_content,
        };
        Ok((builder.build(), settings))
    }
}

struct Settings {
    output: Option<PathBuf>,
    format: output::OutputFormat,
    print_tree: bool,
    print_content: bool,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        exit(1);
    }
}

fn run(cli: Cli) -> Result<(), ScribeError> {
    let (options, settings) = cli.into_options()?;
    let result = scribe(&options)?;
    output_result(&result, &settings)
}

fn output_result(result: &ScribeResult, settings: &Settings) -> Result<(), ScribeError> {
    if let Some(path) = &settings.output {
        output::write_result_to_file(result, settings.format, path)?;
        println!("Done. See {}", path.display());
    }
    if settings.print_tree {
        println!("{}", output::format_tree(result));
    }
    if settings.print_content {
        println!("{}", output::format_contents(result));
    }
    Ok(())
}

//! # codecount
//!
//! A CLI tool that counts significant lines of code per file and per language.
//!
//! ## Overview
//!
//! codecount is built on top of codecountlib. It walks a folder, keeps files whose
//! extension is known (or explicitly requested), and counts lines that are neither
//! blank nor comments.
//!
//! ## Usage
//!
//! ```bash
//! # Summary of the current directory
//! codecount
//!
//! # Only Python and C# files in a given folder
//! codecount --folder ~/src/app --query .py,.cs
//!
//! # Per-file table with bare file names, no summary
//! codecount --showfileinfo --shortfilenames --showsummary false
//!
//! # Custom language table, machine-readable output
//! codecount --languages langs.json --output json
//! ```

mod render;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use codecountlib::{count_directory, ExtensionIndex, FileLabel, FilterConfig, Report, Views};

/// How the report is written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Table,
    Json,
}

/// Boolean option that accepts `--flag`, `--flag true` and `--flag false`
fn bool_arg(name: &'static str, default: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .value_name("BOOL")
        .num_args(0..=1)
        .default_value(default)
        .default_missing_value("true")
        .value_parser(value_parser!(bool))
        .help(help)
}

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("codecount")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Count lines of code per file and per language, skipping blanks and comments")
        .arg(
            Arg::new("query")
                .short('q')
                .long("query")
                .help("Comma-separated extensions to count, e.g. \".py,.cs\" (default: all known)"),
        )
        .arg(
            Arg::new("folder")
                .short('f')
                .long("folder")
                .value_parser(value_parser!(PathBuf))
                .help("Folder to scan (defaults to current directory)"),
        )
        .arg(bool_arg("showfileinfo", "false", "Print the per-file table"))
        .arg(bool_arg("showsummary", "true", "Print the per-language summary table"))
        .arg(bool_arg(
            "shortfilenames",
            "false",
            "Show bare file names instead of paths relative to the folder",
        ))
        .arg(
            Arg::new("languages")
                .short('l')
                .long("languages")
                .value_parser(value_parser!(PathBuf))
                .help("JSON file mapping languages to extensions (replaces the built-in table)"),
        )
        .arg(
            Arg::new("exclude")
                .short('e')
                .long("exclude")
                .action(ArgAction::Append)
                .help("Exclude files matching glob pattern (can be specified multiple times)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["table", "json"])
                .default_value("table")
                .help("Output format"),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .action(ArgAction::SetTrue)
                .help("Exit with an error status if any file or folder could not be read"),
        )
}

/// Extract the report views from matches
fn extract_views(matches: &ArgMatches) -> Views {
    Views::none()
        .with_files(matches.get_flag("showfileinfo"))
        .with_summary(matches.get_flag("showsummary"))
}

fn extract_output(matches: &ArgMatches) -> OutputFormat {
    match matches.get_one::<String>("output").map(String::as_str) {
        Some("json") => OutputFormat::Json,
        _ => OutputFormat::Table,
    }
}

/// Build filter config from matches
fn build_filter(matches: &ArgMatches) -> Result<FilterConfig, anyhow::Error> {
    let query = matches
        .get_one::<String>("query")
        .map(String::as_str)
        .unwrap_or_default();
    let mut filter = FilterConfig::new().query(query);

    if let Some(excludes) = matches.get_many::<String>("exclude") {
        for pattern in excludes {
            filter = filter.exclude(pattern)?;
        }
    }

    Ok(filter)
}

/// Load the language table, from `--languages` if given
fn load_index(path: Option<&Path>) -> Result<ExtensionIndex, anyhow::Error> {
    let index = match path {
        Some(path) => ExtensionIndex::from_file(path)
            .with_context(|| format!("failed to load languages from '{}'", path.display()))?,
        None => ExtensionIndex::builtin().context("failed to load built-in languages")?,
    };
    Ok(index)
}

fn resolve_folder(matches: &ArgMatches) -> Result<PathBuf, anyhow::Error> {
    match matches.get_one::<PathBuf>("folder") {
        Some(folder) => Ok(folder.clone()),
        None => std::env::current_dir().context("failed to determine the current directory"),
    }
}

/// Run one count and print the report; returns the exit status
fn run(matches: &ArgMatches) -> Result<ExitCode, anyhow::Error> {
    let index = load_index(matches.get_one::<PathBuf>("languages").map(PathBuf::as_path))?;
    let filter = build_filter(matches)?;
    let folder = resolve_folder(matches)?;
    let views = extract_views(matches);
    let label = FileLabel::from_short(matches.get_flag("shortfilenames"));
    let strict = matches.get_flag("strict");

    let query = matches
        .get_one::<String>("query")
        .map(|q| q.trim())
        .unwrap_or_default();
    if query.is_empty() {
        eprintln!("No query specified, counting all files...");
    } else {
        eprintln!("Query: {query}");
    }

    let result = count_directory(&folder, &index, &filter)?;
    eprintln!("Found {} files...", result.file_count());

    for diagnostic in &result.diagnostics {
        eprintln!("{}", render::render_diagnostic(diagnostic));
    }

    let report = Report::from_result(&result, views, label);
    match extract_output(matches) {
        OutputFormat::Table => print!("{}", render::render_report(&report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    if strict && result.has_diagnostics() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    match run(&matches) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

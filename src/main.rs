//! `php-array-sort`: sort the keys of a PHP array literal from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Sort a literal from stdin, print to stdout
//! echo "['b' => 1, 'a' => 2]" | php-array-sort
//!
//! # Read from a file, write to another
//! php-array-sort -i config.txt -o sorted.txt
//!
//! # Rewrite a file in place
//! php-array-sort -i config.txt --in-place
//!
//! # Fail when the input is not already sorted
//! php-array-sort -i config.txt --check
//!
//! # Dump the sorted tree as JSON
//! php-array-sort --json < config.txt
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default `warn`); logs go to stderr.

use anyhow::{Context, Result};
use clap::Parser;
use php_array_sorter::{KeyOrder, Options, QuoteScan};
use std::io::{self, Read};
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "php-array-sort",
    version,
    about = "Sort PHP array literals by key, recursively"
)]
struct Cli {
    /// Input file (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,

    /// Output file (writes to stdout if omitted)
    #[arg(short, long, conflicts_with = "in_place")]
    output: Option<String>,

    /// Replace the input file with the sorted literal
    #[arg(long, requires = "input")]
    in_place: bool,

    /// Spaces per indentation level
    #[arg(long, default_value_t = 4)]
    indent: usize,

    /// Compare keys by code point instead of the locale-style order
    #[arg(long)]
    bytewise: bool,

    /// Let a backslash keep a quote inside its string while scanning
    #[arg(long)]
    escape_aware: bool,

    /// Print the sorted tree as JSON instead of a literal
    #[arg(long, conflicts_with = "check")]
    json: bool,

    /// Exit with status 1 if the input is not already sorted; writes nothing
    #[arg(long)]
    check: bool,
}

impl Cli {
    fn options(&self) -> Options {
        let key_order = if self.bytewise {
            KeyOrder::Bytewise
        } else {
            KeyOrder::Locale
        };
        let quote_scan = if self.escape_aware {
            QuoteScan::BackslashEscapes
        } else {
            QuoteScan::Naive
        };

        Options::new()
            .with_indent(self.indent)
            .with_key_order(key_order)
            .with_quote_scan(quote_scan)
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(err) => {
            eprintln!("Error sorting array: {:#}", err);
            process::exit(1);
        }
    }
}

/// Returns `Ok(false)` when `--check` finds an unsorted input.
fn run(cli: &Cli) -> Result<bool> {
    let options = cli.options();
    let text = read_input(cli.input.as_deref())?;
    tracing::debug!(bytes = text.len(), "read input");

    if cli.check {
        let sorted = php_array_sorter::is_canonical(&text, &options)?;
        if !sorted {
            eprintln!("{}: not sorted", cli.input.as_deref().unwrap_or("<stdin>"));
        }
        return Ok(sorted);
    }

    let output = if cli.json {
        let value = php_array_sorter::parse_with_options(&text, &options)?;
        let value = php_array_sorter::sort_with_options(value, &options);
        serde_json::to_string_pretty(&value).context("Failed to encode tree as JSON")?
    } else {
        php_array_sorter::sort_literal_with_options(&text, &options)?
    };

    let target = if cli.in_place {
        cli.input.as_deref()
    } else {
        cli.output.as_deref()
    };
    write_output(target, &output)?;
    Ok(true)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, format!("{}\n", content))
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use checklist_core::{hasher, reshaper, IdStrategy, Mode};

/// Exit code for successful runs
const EXIT_OK: i32 = 0;
/// Exit code for records that do not fit the selected mode
const EXIT_MALFORMED: i32 = 1;
/// Exit code for I/O and JSON syntax errors
const EXIT_ERROR: i32 = 2;

/// Checklist — category record normalizer
///
/// Reshape category records into uniform item lists and compute entry ids.
#[derive(Parser)]
#[command(name = "checklist", version, about, long_about = None)]
struct Cli {
    /// Log filter used when RUST_LOG is unset (e.g. "debug", "checklist_core=trace")
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add totalCount and itemData to every category in a JSON file
    Reshape {
        /// Path to a JSON array of categories ("-" for stdin)
        file: PathBuf,
        /// Mode tag: items, bosses or Walkthrough (unknown tags pass through)
        #[arg(long, short)]
        mode: String,
        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
        /// Write to a file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Compute the 8-character id for one or more strings
    Hash {
        /// Text to hash
        #[arg(required = true)]
        text: Vec<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List supported mode tags
    Modes,

    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let exit_code = match cli.command {
        Commands::Reshape {
            file,
            mode,
            pretty,
            output,
        } => cmd_reshape(&file, &mode, pretty, output.as_deref()),
        Commands::Hash { text, json } => cmd_hash(&text, json),
        Commands::Modes => cmd_modes(),
        Commands::Version => {
            println!(
                "checklist {} (checklist-core {})",
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_VERSION")
            );
            EXIT_OK
        }
    };

    process::exit(exit_code);
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

// ── Commands ──────────────────────────────────────────────

fn cmd_reshape(file: &Path, tag: &str, pretty: bool, output: Option<&Path>) -> i32 {
    let source = match read_input(file) {
        Ok(s) => s,
        Err(e) => {
            report(&format!("cannot read {}: {}", file.display(), e));
            return EXIT_ERROR;
        }
    };

    let doc: serde_json::Value = match serde_json::from_str(&source) {
        Ok(doc) => doc,
        Err(e) => {
            report(&format!("invalid JSON in {}: {}", file.display(), e));
            return EXIT_ERROR;
        }
    };

    if Mode::from_tag(tag).is_none() {
        info!(tag, "unrecognized mode, output equals input");
    }

    let reshaped = match reshaper::reshape_value(doc, tag) {
        Ok(v) => v,
        Err(e) => {
            report(&e.to_string());
            return if e.is_malformed_record() {
                EXIT_MALFORMED
            } else {
                EXIT_ERROR
            };
        }
    };

    let rendered = if pretty {
        serde_json::to_string_pretty(&reshaped)
    } else {
        serde_json::to_string(&reshaped)
    };
    let rendered = match rendered {
        Ok(s) => s,
        Err(e) => {
            report(&format!("cannot serialize output: {}", e));
            return EXIT_ERROR;
        }
    };

    match output {
        Some(path) => {
            if let Err(e) = fs::write(path, rendered + "\n") {
                report(&format!("cannot write {}: {}", path.display(), e));
                return EXIT_ERROR;
            }
            debug!(path = %path.display(), "output written");
        }
        None => println!("{}", rendered),
    }
    EXIT_OK
}

fn cmd_hash(texts: &[String], json: bool) -> i32 {
    if json {
        let map: serde_json::Map<String, serde_json::Value> = texts
            .iter()
            .map(|t| (t.clone(), serde_json::Value::String(hasher::hash(t))))
            .collect();
        println!("{}", serde_json::Value::Object(map));
    } else {
        for text in texts {
            println!("{}  {}", hasher::hash(text), text);
        }
    }
    EXIT_OK
}

fn cmd_modes() -> i32 {
    for mode in Mode::ALL {
        let ids = match mode.id_strategy() {
            IdStrategy::Verbatim => "verbatim",
            IdStrategy::Hashed => "hashed",
        };
        println!(
            "{} field: {:<8} ids: {}",
            format!("{:<12}", mode.tag()).bold(),
            mode.source_field(),
            ids
        );
    }
    EXIT_OK
}

// ── Helpers ───────────────────────────────────────────────

fn read_input(file: &Path) -> io::Result<String> {
    if file == Path::new("-") {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        fs::read_to_string(file)
    }
}

fn report(message: &str) {
    eprintln!("{} {}", "error:".red().bold(), message);
}

//! arcflow CLI — command-line wrapper around the arc-flow graph crates.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "arcflow", version, about = "Arc-flow graph tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse an .afg file and print summary statistics
    Inspect {
        /// Input .afg file
        input: PathBuf,
        /// Fail if the declared vertex count disagrees with the arc list
        #[arg(long)]
        strict: bool,
    },
    /// Emit a render plan for an .afg file to stdout
    Export {
        /// Input .afg file
        input: PathBuf,
        /// Output format (dot, json)
        #[arg(long, default_value = "dot")]
        format: String,
        /// Attach label text to colored edges
        #[arg(long)]
        show_labels: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = run(cli);
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Inspect { input, strict } => commands::inspect::run(&input, strict),
        Commands::Export {
            input,
            format,
            show_labels,
        } => commands::export::run(&input, &format, show_labels),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;

    const SAMPLE: &str = "IDS: 5 6 7 #GRAPH_BEGIN# NBTYPES: 1 S: 0 Ts: 3 \
                          LOSS: 99 NV: 3 NA: 2 0 1 0 1 3 99 #GRAPH_END#";

    fn sample_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        file
    }

    #[test]
    fn inspect_reads_sample() {
        let file = sample_file();
        commands::inspect::run(file.path(), false).unwrap();
    }

    #[test]
    fn inspect_strict_accepts_consistent_count() {
        let file = sample_file();
        commands::inspect::run(file.path(), true).unwrap();
    }

    #[test]
    fn inspect_strict_rejects_bad_count() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.replace("NV: 3", "NV: 8").as_bytes())
            .unwrap();
        assert!(commands::inspect::run(file.path(), true).is_err());
        // Lenient mode shrugs it off.
        assert!(commands::inspect::run(file.path(), false).is_ok());
    }

    #[test]
    fn inspect_missing_file_fails() {
        assert!(commands::inspect::run(std::path::Path::new("/no/such.afg"), false).is_err());
    }

    #[test]
    fn export_dot_and_json_succeed() {
        let file = sample_file();
        commands::export::run(file.path(), "dot", false).unwrap();
        commands::export::run(file.path(), "json", true).unwrap();
    }

    #[test]
    fn export_unknown_format_fails() {
        let file = sample_file();
        assert!(commands::export::run(file.path(), "svg", false).is_err());
    }
}

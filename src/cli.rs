use crate::io::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "stabilitymap")]
#[command(about = "Component instability, abstractness and dependency-direction analyzer", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    /// -v: info, -vv: debug, -vvv: trace. RUST_LOG is used when absent.
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze components described in a class facts JSON file
    Analyze {
        /// Facts file: [{"name": ..., "classes": [{"qualified_name", "imports", "is_abstract"}]}]
        facts: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Scan a directory of Java components and analyze them
    Scan {
        /// Directory whose immediate sub-directories are the components
        path: PathBuf,

        /// Source root inside each component directory (default: src/main/java)
        #[arg(long = "source-dir")]
        source_dir: Option<String>,

        /// Also write the extracted class facts to facts.json
        #[arg(long = "emit-facts")]
        emit_facts: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Write a default .stabilitymap.toml
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,

        /// Directory to create the file in
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },
}

#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Directory receiving mainsequence.csv, components.dot and report.json
    #[arg(short, long = "output-dir", default_value = ".")]
    pub output_dir: PathBuf,

    /// Summary format on stdout
    #[arg(short, long, value_enum, default_value = "terminal")]
    pub format: OutputFormat,

    /// Components whose violations are reported with class-level detail
    #[arg(long = "detail", value_delimiter = ',')]
    pub detail: Vec<String>,

    /// Graph title
    #[arg(long)]
    pub title: Option<String>,

    /// Compute everything on the current thread
    #[arg(long = "no-parallel")]
    pub no_parallel: bool,

    /// Exit with status 2 when a stability-direction violation is found
    #[arg(long = "fail-on-violation")]
    pub fail_on_violation: bool,

    /// Disable colored output
    #[arg(long)]
    pub plain: bool,

    /// Configuration file (default: nearest .stabilitymap.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_analyze_with_flags() {
        let cli = Cli::parse_from([
            "stabilitymap",
            "-vv",
            "analyze",
            "facts.json",
            "--output-dir",
            "out",
            "--detail",
            "core,api",
            "--fail-on-violation",
        ]);

        assert_eq!(cli.verbosity, 2);
        match cli.command {
            Commands::Analyze { facts, output } => {
                assert_eq!(facts, PathBuf::from("facts.json"));
                assert_eq!(output.output_dir, PathBuf::from("out"));
                assert_eq!(output.detail, vec!["core", "api"]);
                assert!(output.fail_on_violation);
                assert_eq!(output.format, OutputFormat::Terminal);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_scan_defaults() {
        let cli = Cli::parse_from(["stabilitymap", "scan", "repo", "--format", "json"]);

        match cli.command {
            Commands::Scan {
                path,
                source_dir,
                emit_facts,
                output,
            } => {
                assert_eq!(path, PathBuf::from("repo"));
                assert_eq!(source_dir, None);
                assert!(!emit_facts);
                assert_eq!(output.output_dir, PathBuf::from("."));
                assert_eq!(output.format, OutputFormat::Json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}

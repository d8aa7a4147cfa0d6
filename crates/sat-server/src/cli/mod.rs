use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for the `satwatch` binary.
#[derive(Debug, Parser)]
#[command(
    name = "satwatch",
    version,
    about = "Space-Track critical data extractor"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (defaults to ./satwatch.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP service.
    Serve {
        /// Bind address (overrides server.host)
        #[arg(long)]
        host: Option<String>,
        /// Port (overrides server.port)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run one extraction, write a snapshot and print statistics.
    Extract {
        /// Snapshot root directory (overrides output.root_dir)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_overrides_parse() {
        let cli = Cli::try_parse_from(["satwatch", "serve", "--host", "127.0.0.1", "--port", "9000"])
            .expect("cli should parse");
        match cli.command {
            Commands::Serve { host, port } => {
                assert_eq!(host.as_deref(), Some("127.0.0.1"));
                assert_eq!(port, Some(9000));
            }
            Commands::Extract { .. } => panic!("expected serve"),
        }
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["satwatch", "extract", "--verbose", "--config", "prod.toml"])
            .expect("cli should parse");
        assert!(cli.verbose);
        assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("prod.toml")));
        assert!(matches!(cli.command, Commands::Extract { output_dir: None }));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        assert!(Cli::try_parse_from(["satwatch", "-q", "-v", "extract"]).is_err());
    }
}

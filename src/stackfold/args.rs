use clap::{Parser, Subcommand};
use std::path::PathBuf;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("STACKFOLD_BUILD"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "stackfold", version, long_version = LONG_VERSION)]
#[command(about = "Compose a service's addons into a deployable template", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root (defaults to the current directory)
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    pub workspace: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compose the addons of a service into a single template
    #[command(alias = "t")]
    Template {
        /// Service whose addons directory is composed
        service: String,

        /// Write the template to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Pass one template entry per file instead of per line
        #[arg(long)]
        blocks: bool,

        /// Fold files in filename order regardless of listing order
        #[arg(long)]
        sorted: bool,
    },

    /// Show the files of a service's addons directory and what each contributes
    #[command(alias = "ls")]
    List {
        /// Service whose addons directory is listed
        service: String,
    },

    /// Show or change configuration
    Config {
        /// Config key (addons-dir, listing-order, split-mode)
        key: Option<String>,

        /// New value for the key
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_template_flags() {
        let cli = Cli::try_parse_from([
            "stackfold", "-C", "/tmp/ws", "template", "api", "--blocks", "-o", "out.yml",
        ])
        .unwrap();
        assert_eq!(cli.workspace, Some(PathBuf::from("/tmp/ws")));
        match cli.command {
            Commands::Template {
                service,
                output,
                blocks,
                sorted,
            } => {
                assert_eq!(service, "api");
                assert_eq!(output, Some(PathBuf::from("out.yml")));
                assert!(blocks);
                assert!(!sorted);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn list_alias_and_global_flags() {
        let cli = Cli::try_parse_from(["stackfold", "ls", "api", "--no-color", "-v"]).unwrap();
        assert!(cli.no_color);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::List { ref service } if service == "api"));
    }

    #[test]
    fn template_requires_a_service() {
        assert!(Cli::try_parse_from(["stackfold", "template"]).is_err());
    }
}

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Laptop CO2 Impact Calculator - compare new and refurbished laptops
#[derive(Parser, Debug)]
#[command(name = "laptop-co2")]
#[command(about = "Search laptops and compare the CO2 impact of new and refurbished models")]
#[command(version)]
pub struct Cli {
    /// Path to a JSON configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every laptop in the catalog
    Catalog {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Search laptops by model or manufacturer
    Search {
        /// Case-insensitive text to look for
        term: String,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Compare a selection of laptops by id
    Compare {
        /// Laptop ids, in selection order (see `catalog`)
        #[arg(required = true)]
        ids: Vec<String>,
        /// Print JSON instead of the text report
        #[arg(long)]
        json: bool,
    },
    /// Write the default configuration to a file
    InitConfig {
        /// Destination path
        path: PathBuf,
    },
    /// Validate a configuration file
    Validate {
        /// Path to configuration file to validate
        path: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_command_launches_tui() {
        let cli = Cli::try_parse_from(["laptop-co2"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_compare_requires_ids() {
        assert!(Cli::try_parse_from(["laptop-co2", "compare"]).is_err());

        let cli = Cli::try_parse_from(["laptop-co2", "compare", "4", "9", "--json"]).unwrap();
        match cli.command {
            Some(Commands::Compare { ids, json }) => {
                assert_eq!(ids, vec!["4", "9"]);
                assert!(json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_config_flag() {
        let cli =
            Cli::try_parse_from(["laptop-co2", "search", "dell", "--config", "c.json"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("c.json")));
        assert!(matches!(
            cli.command,
            Some(Commands::Search { ref term, json: false }) if term == "dell"
        ));
    }
}

//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for vehicle-advisor
#[derive(Parser, Debug)]
#[command(name = "vehicle-advisor")]
#[command(author, version, about = "Vehicle shopping advisor backed by specialist agents")]
#[command(long_about = r#"
Vehicle Advisor answers shopping questions against a dealership inventory.

A manager agent searches the inventory and consults specialists (budget,
family, luxury, eco) in parallel when a question touches their area.
Slow or failing model calls are retried; the answer is never an error.

Configuration files are loaded from (in priority order):
1. VEHICLE_ADVISOR_<SECTION>__<KEY>         Environment variables
2. --config <path>                          Explicit config file
3. ./advisor.toml                           Project-level config
4. ~/.config/vehicle-advisor/config.toml    Global config

Example:
  vehicle-advisor "I need a cheap electric car for my family"
  vehicle-advisor --search "red Toyota under 30000"
  vehicle-advisor --classify "a safe hybrid SUV"
  vehicle-advisor --chat
"#)]
pub struct Cli {
    /// The question to ask (not required in chat mode)
    pub query: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Print the specialist categories detected in QUERY and exit
    #[arg(long, requires = "query")]
    pub classify: bool,

    /// Run the free-text inventory filter locally (no model call) and exit
    #[arg(long, value_name = "TEXT")]
    pub search: Option<String>,

    /// Write the built-in fleet to the inventory path and exit
    #[arg(long)]
    pub seed_inventory: bool,

    /// Reload the inventory, print its summary and exit
    #[arg(long)]
    pub inventory: bool,

    /// Inventory file (overrides `inventory.path`)
    #[arg(long, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

/// What a parsed command line asks for, first match wins
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliMode {
    ShowConfig,
    SeedInventory,
    Inventory,
    Search(String),
    Classify(String),
    Chat,
    Ask(String),
    /// Nothing to do: no query and no mode flag
    Usage,
}

impl Cli {
    pub fn mode(&self) -> CliMode {
        if self.show_config {
            return CliMode::ShowConfig;
        }
        if self.seed_inventory {
            return CliMode::SeedInventory;
        }
        if self.inventory {
            return CliMode::Inventory;
        }
        if let Some(text) = &self.search {
            return CliMode::Search(text.clone());
        }
        let query = self.query.as_deref().map(str::trim).filter(|q| !q.is_empty());
        match query {
            Some(q) if self.classify => CliMode::Classify(q.to_string()),
            _ if self.chat => CliMode::Chat,
            Some(q) => CliMode::Ask(q.to_string()),
            None => CliMode::Usage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("vehicle-advisor").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_plain_query() {
        let cli = parse(&["cheap SUV"]);
        assert_eq!(cli.mode(), CliMode::Ask("cheap SUV".to_string()));
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_no_arguments() {
        assert_eq!(parse(&[]).mode(), CliMode::Usage);
        assert_eq!(parse(&["   "]).mode(), CliMode::Usage);
    }

    #[test]
    fn test_chat() {
        assert_eq!(parse(&["--chat"]).mode(), CliMode::Chat);
        assert_eq!(parse(&["-c", "-q"]).mode(), CliMode::Chat);
    }

    #[test]
    fn test_classify_requires_query() {
        assert!(Cli::try_parse_from(["vehicle-advisor", "--classify"]).is_err());
        assert_eq!(
            parse(&["--classify", "safe hybrid"]).mode(),
            CliMode::Classify("safe hybrid".to_string())
        );
    }

    #[test]
    fn test_search_and_overrides() {
        let cli = parse(&["--search", "red Toyota", "--data", "fleet.json", "-vv"]);
        assert_eq!(cli.mode(), CliMode::Search("red Toyota".to_string()));
        assert_eq!(cli.data, Some(PathBuf::from("fleet.json")));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_mode_priority() {
        assert_eq!(
            parse(&["--show-config", "--inventory", "q"]).mode(),
            CliMode::ShowConfig
        );
        assert_eq!(
            parse(&["--seed-inventory", "--inventory"]).mode(),
            CliMode::SeedInventory
        );
    }
}

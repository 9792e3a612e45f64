//! CLI argument parsing for basket

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    /// Level-wise candidate generation (default)
    Apriori,
    /// Prefix tree with recursive conditional mining
    FpGrowth,
    /// Run both and check that they agree
    Both,
}

/// How dataset tokens are parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ItemKind {
    /// Any whitespace-free token (default)
    Text,
    /// Unsigned integers; other tokens are skipped
    Integer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "basket")]
#[command(version)]
#[command(about = "Frequent itemset mining with Apriori and FP-Growth", long_about = None)]
pub struct Cli {
    /// Dataset with one transaction per line, items separated by whitespace
    #[arg(value_name = "DATASET")]
    pub dataset: PathBuf,

    /// Minimum number of transactions an itemset must appear in
    #[arg(short = 's', long = "min-support", value_name = "COUNT")]
    pub min_support: Option<usize>,

    /// Mining algorithm
    #[arg(short, long, value_enum, default_value = "apriori")]
    pub algorithm: Algorithm,

    /// Largest itemset size to mine
    #[arg(long = "max-level", value_name = "K")]
    pub max_level: Option<usize>,

    /// Item type of the dataset tokens
    #[arg(long = "items", value_enum, default_value = "text")]
    pub items: ItemKind,

    /// Output format
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// TOML file with mining settings; command-line flags take precedence
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the FP-tree header table and node chains
    #[arg(long = "tree")]
    pub tree: bool,

    /// Log progress to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["basket", "data.dat"]);
        assert_eq!(cli.dataset, PathBuf::from("data.dat"));
        assert_eq!(cli.algorithm, Algorithm::Apriori);
        assert_eq!(cli.items, ItemKind::Text);
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(cli.min_support.is_none());
        assert!(!cli.tree);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_fp_growth_flags() {
        let cli = Cli::parse_from([
            "basket",
            "-a",
            "fp-growth",
            "-s",
            "3",
            "--max-level",
            "4",
            "--tree",
            "data.dat",
        ]);
        assert_eq!(cli.algorithm, Algorithm::FpGrowth);
        assert_eq!(cli.min_support, Some(3));
        assert_eq!(cli.max_level, Some(4));
        assert!(cli.tree);
    }

    #[test]
    fn test_cli_integer_items_json() {
        let cli = Cli::parse_from(["basket", "--items", "integer", "--format", "json", "x"]);
        assert_eq!(cli.items, ItemKind::Integer);
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_cli_requires_dataset() {
        assert!(Cli::try_parse_from(["basket"]).is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_algorithm() {
        assert!(Cli::try_parse_from(["basket", "-a", "eclat", "x"]).is_err());
    }
}

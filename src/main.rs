use std::fmt::Display;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use basket::cli::{Algorithm, Cli, ItemKind, OutputFormat};
use basket::{report, Apriori, FileSource, FpGrowth, FrequentLevels, Item, LevelSummary, MiningConfig};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for progress output
fn init_tracing(verbose: bool) {
    if verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Config file values overridden by command-line flags
fn resolve_config(cli: &Cli) -> Result<MiningConfig> {
    let mut config = match &cli.config {
        Some(path) => MiningConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => match cli.min_support {
            Some(min_support) => MiningConfig::new(min_support),
            None => bail!("a support threshold is required: pass --min-support or --config"),
        },
    };

    if let Some(min_support) = cli.min_support {
        config.min_support = min_support;
    }
    if let Some(max_level) = cli.max_level {
        config.max_level = Some(max_level);
    }
    config.validate()?;
    Ok(config)
}

fn emit<T>(
    cli: &Cli,
    levels: &FrequentLevels<T>,
    transactions: usize,
    summaries: Option<&[LevelSummary]>,
) -> Result<()>
where
    T: Item + Display + Serialize,
{
    match cli.format {
        OutputFormat::Json => {
            println!("{}", report::levels_to_json(levels, transactions)?);
        }
        OutputFormat::Text => {
            println!("Transactions: {}", transactions);
            if let Some(summaries) = summaries {
                print!("{}", report::render_summaries(summaries));
            }
            print!("{}", report::render_levels(levels));
        }
    }
    Ok(())
}

fn print_tree<T: Item + Display>(cli: &Cli, tree: &basket::FpTree<T>) {
    if cli.tree && cli.format == OutputFormat::Text {
        print!("{}", report::render_header_table(tree));
        println!("_______________");
        print!("{}", report::render_chains(tree));
    }
}

fn run<T>(cli: &Cli, config: MiningConfig) -> Result<()>
where
    T: Item + FromStr + Display + Serialize,
{
    let mut source: FileSource<T> = FileSource::new(&cli.dataset);

    match cli.algorithm {
        Algorithm::Apriori => {
            let run = Apriori::new(config).run(&mut source)?;
            emit(cli, &run.levels, run.transactions, Some(run.summaries.as_slice()))
        }
        Algorithm::FpGrowth => {
            let run = FpGrowth::new(config).run(&mut source)?;
            print_tree(cli, &run.tree);
            emit(cli, &run.levels, run.transactions, None)
        }
        Algorithm::Both => {
            let min_support = config.min_support;
            let apriori = Apriori::new(config.clone()).run(&mut source)?;
            let fp = FpGrowth::new(config).run(&mut source)?;
            print_tree(cli, &fp.tree);
            emit(cli, &apriori.levels, apriori.transactions, Some(apriori.summaries.as_slice()))?;

            // At threshold 0 apriori also keeps candidates no transaction contains.
            let agree = if min_support == 0 {
                apriori.levels.supported() == fp.levels.supported()
            } else {
                apriori.levels == fp.levels
            };
            if !agree {
                bail!(
                    "apriori found {} itemsets but fp-growth found {}",
                    apriori.levels.total_itemsets(),
                    fp.levels.total_itemsets()
                );
            }
            if cli.format == OutputFormat::Text {
                if min_support == 0 {
                    println!("apriori and fp-growth agree on itemsets with non-zero support");
                } else {
                    println!("apriori and fp-growth agree");
                }
            }
            Ok(())
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = resolve_config(&cli)?;
    match cli.items {
        ItemKind::Text => run::<String>(&cli, config),
        ItemKind::Integer => run::<u64>(&cli, config),
    }
}

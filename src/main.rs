//! Chromatic Calculator - CLI
//!
//! Estimates how much currency it takes to re-roll an item's socket colors into
//! a target combination, for plain chromatic orbs and every crafting bench option.

use anyhow::Result;
use chromatic_calc::{
    commands::{ChromaticConfig, ItemConfig, run_chances, run_chromatic},
    core::{AttributeRequirements, ConfidenceLevel, MAX_SOCKETS},
    output::{print_chances_report, print_chromatic_report},
};
use clap::{Args, Parser, Subcommand};
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "chromatic_calc",
    about = "Socket color re-roll cost calculator (closed-form, no simulation)",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank crafting options for reaching a target color combination
    Chromatic {
        /// Target colors, e.g. 2R2G2B (unlisted colors default to 0)
        colors: String,

        #[command(flatten)]
        item: ItemArgs,

        /// Confidence level used for ranking: 50, 66, 80, 90, 95 or 99
        #[arg(long, default_value_t = ConfidenceLevel::default().percent())]
        sort_by: u8,
    },

    /// Show per-socket color chances for an item
    Chances {
        #[command(flatten)]
        item: ItemArgs,
    },
}

#[derive(Args)]
struct ItemArgs {
    /// Number of sockets on the item
    #[arg(short, long)]
    sockets: u8,

    /// Maximum sockets the item base can have
    #[arg(long, default_value_t = MAX_SOCKETS)]
    max_sockets: u8,

    /// Strength requirement
    #[arg(long = "str", default_value_t = 0)]
    strength: u32,

    /// Dexterity requirement
    #[arg(long = "dex", default_value_t = 0)]
    dexterity: u32,

    /// Intelligence requirement
    #[arg(long = "int", default_value_t = 0)]
    intelligence: u32,
}

impl From<ItemArgs> for ItemConfig {
    fn from(args: ItemArgs) -> Self {
        Self {
            sockets: args.sockets,
            max_sockets: args.max_sockets,
            requirements: AttributeRequirements::new(
                args.strength,
                args.dexterity,
                args.intelligence,
            ),
        }
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Chromatic {
            colors,
            item,
            sort_by,
        } => run_chromatic_command(item.into(), colors, sort_by),
        Commands::Chances { item } => run_chances_command(item.into()),
    }
}

fn run_chromatic_command(item: ItemConfig, colors: String, sort_by: u8) -> Result<()> {
    let mut config = ChromaticConfig::new(item, colors);
    config.sort_by = sort_by;

    let report = run_chromatic(config)?;
    print_chromatic_report(&report);
    Ok(())
}

fn run_chances_command(item: ItemConfig) -> Result<()> {
    let report = run_chances(item)?;
    print_chances_report(&report);
    Ok(())
}

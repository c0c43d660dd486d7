//! optcg - build One Piece TCG decks from a catalog snapshot

use clap::{Parser, Subcommand};
use optcg_deckbuilder::catalog::unwrap_list;
use optcg_deckbuilder::{
    build_deck_with, default_catalog_path, format_deck_listing, format_leaders, format_summary,
    list_leaders, normalize_card, validate_identifier, CardSource, DeckRules, DeckSummary,
    SnapshotSource, Style,
};
use std::path::PathBuf;

/// One Piece TCG deck builder
#[derive(Parser, Debug)]
#[command(name = "optcg")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the catalog snapshot (JSON export of all set cards)
    #[arg(short, long, global = true, default_value_os_t = default_catalog_path())]
    catalog: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a 50-card deck for a leader
    Build {
        /// Leader card id (e.g., OP14-079)
        #[arg(short, long)]
        leader: String,

        /// Deck style: aggro, midrange or control
        #[arg(short, long, default_value = "control", value_parser = parse_style)]
        style: Style,
    },
    /// List every leader in the catalog
    Leaders,
    /// Print all normalized printings of a card
    Inspect {
        /// Card id (e.g., OP14-079)
        card_id: String,
    },
}

fn parse_style(s: &str) -> Result<Style, String> {
    Style::parse(s).ok_or_else(|| format!("unknown style '{s}' (expected aggro, midrange or control)"))
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let source = SnapshotSource::from_path(&args.catalog)?;

    match args.command {
        Command::Build { leader, style } => {
            let deck = build_deck_with(&source, &leader, style, &DeckRules::default())?;
            println!("{}", format_deck_listing(&deck));
            print!("{}", format_summary(&DeckSummary::from_deck(&deck)));
        }
        Command::Leaders => {
            let leaders = list_leaders(&source)?;
            print!("{}", format_leaders(&leaders));
        }
        Command::Inspect { card_id } => {
            let id = validate_identifier(&card_id)?;
            let raw = source.fetch_card(&id)?;
            for printing in unwrap_list(&raw)?.iter().filter(|v| v.is_object()) {
                println!("{}", serde_json::to_string_pretty(&normalize_card(printing))?);
            }
        }
    }
    Ok(())
}

fn main() {
    // Initialize logger. Set RUST_LOG environment variable to control log level.
    // Examples: RUST_LOG=info, RUST_LOG=warn, RUST_LOG=optcg_deckbuilder=debug
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        log::error!("Application error: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

//! Deck Price - MTG decklist pricing from Cardmarket listings
//!
//! Looks up a single card, or prices a whole decklist file and writes the
//! report next to it.

use clap::Parser;
use deck_price::{
    single_card_message, CardmarketClient, DeckPricer, OwnedInventory, PricingOptions,
};
use mtg_common::{load_decklist, ConditionGrade};
use std::path::{Path, PathBuf};

/// Price a card or a decklist using Cardmarket seller listings
#[derive(Parser, Debug)]
#[command(name = "deck_price")]
#[command(version, about, long_about = None)]
struct Args {
    /// Card name, or a decklist file ending in .txt
    #[arg(required = true, num_args = 1..)]
    query: Vec<String>,

    /// Worst acceptable condition: m, nm, ex, g, lp, pl, po (or full name)
    #[arg(short, long, default_value_t = ConditionGrade::Played)]
    condition: ConditionGrade,

    /// Leave decklist comments out of the report
    #[arg(long, default_value_t = false)]
    plain: bool,

    /// Price the full deck, ignoring owned cards
    #[arg(long, default_value_t = false)]
    full: bool,

    /// Owned cards, same format as a decklist
    #[arg(long, default_value = "owned.txt")]
    owned: PathBuf,

    /// Report file (default: <deck>_myprice.txt or <deck>_fullprice.txt)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Copies to quote for a single card
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    copies: u32,
}

/// `deck.txt` -> `deck_myprice.txt` (or `deck_fullprice.txt` with `--full`)
fn default_report_path(deck: &Path, full: bool) -> PathBuf {
    let stem = deck
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let suffix = if full { "fullprice" } else { "myprice" };
    deck.with_file_name(format!("{stem}_{suffix}.txt"))
}

fn main() {
    // Initialize logging. Set RUST_LOG to control the level, e.g. RUST_LOG=debug
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let query = args.query.join(" ");

    let options = PricingOptions {
        min_condition: args.condition,
        include_comments: !args.plain,
        use_owned: !args.full,
    };

    let client = match CardmarketClient::new() {
        Ok(client) => client,
        Err(e) => {
            log::error!("Failed to create HTTP client: {}", e);
            std::process::exit(1);
        }
    };

    if query.ends_with(".txt") {
        price_decklist(&client, Path::new(&query), &args, options);
    } else {
        println!("Searching...");
        let pricer = DeckPricer::new(&client, options);
        let quote = pricer.quote_card(&query, args.copies);
        println!("{}", single_card_message(&quote));
    }
}

fn price_decklist(client: &CardmarketClient, deck: &Path, args: &Args, options: PricingOptions) {
    let entries = load_decklist(deck);

    let owned = if options.use_owned {
        OwnedInventory::from_entries(&load_decklist(&args.owned))
    } else {
        OwnedInventory::default()
    };
    log::info!("Owned inventory: {} cards", owned.len());

    let report_path = args
        .output
        .clone()
        .unwrap_or_else(|| default_report_path(deck, args.full));

    println!("Calculating total price for decklist...");
    let report = DeckPricer::new(client, options)
        .with_owned(owned)
        .price_deck(&entries);

    if let Err(e) = report.write_to(&report_path) {
        log::error!("Failed to write {}: {}", report_path.display(), e);
        std::process::exit(1);
    }

    println!(
        "Process completed! Results are in {}",
        report_path.display()
    );
}

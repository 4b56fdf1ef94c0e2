use std::process::ExitCode;

use clap::Parser;

use xwordbuild::{BuilderConfig, CrosswordBuilder, Direction};

/// Build a crossword from a list of words
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The words to place, longest first after ranking (2 to 15 letters, A-Z only)
    #[arg(required = true)]
    words: Vec<String>,

    /// Width and height of the square grid
    #[arg(short, long, default_value_t = xwordbuild::GRID_SIZE)]
    grid_size: usize,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    xwordbuild::logging::init_logger(cli.debug || std::env::var("XWORDBUILD_DEBUG").is_ok());

    let builder = CrosswordBuilder::new(BuilderConfig::with_grid_size(cli.grid_size));
    let construction = match builder.build(cli.words.as_slice()) {
        Ok(construction) => construction,
        Err(e) => {
            eprintln!("Error: {}", e.display_detailed());
            return ExitCode::FAILURE;
        }
    };

    println!("{}", construction.grid);
    println!();

    // Positions are printed 1-based, rows first.
    for placement in construction.ledger.in_clue_order() {
        let direction = match placement.direction {
            Direction::Across => "Across",
            Direction::Down => "Down",
        };
        println!(
            "{:2},{:2} {:<7} {}",
            placement.row() + 1,
            placement.col() + 1,
            direction,
            construction.words[placement.word_id].as_str()
        );
    }

    for word in construction.skipped_words() {
        eprintln!("Could not place word: {}", word.as_str());
    }

    ExitCode::SUCCESS
}

//! CLI blackjack demo.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjlite::{Card, Hand, RoundOutcome, RoundState, Session, SessionOptions, Suit};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(about = "Play single-player blackjack in the terminal")]
struct Args {
    /// Seed for the shuffle RNG (defaults to the current time).
    #[arg(long)]
    seed: Option<u64>,

    /// Dealer hits on soft 17.
    #[arg(long)]
    hit_soft_17: bool,

    /// End the round as soon as the player busts.
    #[arg(long)]
    end_on_bust: bool,

    /// Log engine events at debug level.
    #[arg(long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    let options = SessionOptions::default()
        .with_stand_on_soft(!args.hit_soft_17)
        .with_end_turn_on_bust(args.end_on_bust);
    let mut session = Session::new(options, seed);

    println!("Welcome to Blackjack (type 'q' to quit)");

    loop {
        match prompt_line("[d]eal or [q]uit: ").as_str() {
            "d" | "deal" | "" => {}
            "q" | "quit" => {
                println!("Goodbye.");
                return;
            }
            _ => {
                println!("Unknown command.");
                continue;
            }
        }

        if let Err(err) = session.start_round() {
            println!("Deal error: {err}");
            continue;
        }

        while session.state() == RoundState::PlayerTurn {
            print_table(&session);

            let result = match prompt_line("[h]it or [s]tand: ").as_str() {
                "h" | "hit" => session.hit().map(|card| println!("You draw {card}.")),
                "s" | "stand" => session.stand().map(|drawn| {
                    if !drawn.is_empty() {
                        println!("Dealer draws {} card(s).", drawn.len());
                    }
                }),
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            if let Err(err) = result {
                println!("Action error: {err}");
                break;
            }
        }

        print_table(&session);
        println!("Game over. Dealer's final hand value: {}", session.dealer_value());

        match session.settle() {
            Ok(result) => {
                let verdict = match result.outcome {
                    RoundOutcome::Win => colorize("You win.", "32"),
                    RoundOutcome::Lose => colorize("You lose.", "31"),
                    RoundOutcome::Push => colorize("Push.", "33"),
                };
                println!("{verdict}");
            }
            Err(err) => println!("Settle error: {err}"),
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => return String::from("q"),
        Ok(_) => {}
    }
    input.trim().to_lowercase()
}

fn print_table(session: &Session) {
    println!("\nDeck: {} cards remaining", session.cards_remaining());
    println!(
        "Player's hand: {} (value {})",
        format_hand(session.player_hand()),
        session.player_value()
    );
    println!(
        "Dealer's hand: {} (value {})",
        format_hand(session.dealer_hand()),
        session.dealer_value()
    );
    println!();
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}

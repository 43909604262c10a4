//! Interactive Matatu CLI: human vs CPU, with stake bookkeeping per hand.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use matatu::{Action, Card, Game, GameOptions, Rank, Suit, choose_action};

const HUMAN: usize = 0;
const CPU: usize = 1;

fn main() {
    println!("Matatu - 1 vs CPU (type 'q' to quit)");

    let mut seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut balance: i64 = 1000;
    let mut stake: i64 = 50;

    println!("Starting balance: {balance}. Default stake per hand: {stake}.");

    loop {
        println!("\n--- New hand ---");
        println!("Stake: {stake} | Balance: {balance}");

        let mut game = match Game::new(GameOptions::default(), seed) {
            Ok(game) => game,
            Err(err) => {
                println!("Deal error: {err}");
                return;
            }
        };
        seed = seed.wrapping_add(1);

        while game.winner.is_none() {
            if game.current_player == HUMAN {
                if !human_turn(&mut game) {
                    println!("Goodbye.");
                    return;
                }
            } else {
                cpu_turn(&mut game);
            }
        }

        if game.winner == Some(HUMAN) {
            balance += stake;
            println!("You win! +{stake}. Balance: {balance}");
        } else {
            balance -= stake;
            println!("CPU wins. -{stake}. Balance: {balance}");
        }

        let input = prompt_line("Enter 's <amount>' to set the stake, 'q' to quit, or Enter to continue: ");
        if input == "q" || input == "quit" {
            println!("Goodbye.");
            return;
        }
        if let Some(amount) = input.strip_prefix("s ") {
            match amount.trim().parse::<i64>() {
                Ok(value) if value > 0 => stake = value,
                _ => println!("Invalid amount; keeping the previous stake."),
            }
        }
    }
}

/// Runs one human decision. Returns `false` when the player quits.
fn human_turn(game: &mut Game) -> bool {
    if game.awaiting_declare == Some(HUMAN) {
        let Some(suit) = prompt_suit() else {
            return false;
        };
        if let Err(err) = game.apply(Action::Declare(suit)) {
            println!("{err}");
        }
        return true;
    }

    print_table(game);

    let plays = game.legal_plays(HUMAN);
    if plays.is_empty() {
        if game.pending_draw > 0 {
            println!("You must draw {}.", game.pending_draw);
        }
        let input = prompt_line("Press Enter to draw... ");
        if input == "q" || input == "quit" {
            return false;
        }
        if let Err(err) = game.apply(Action::Draw) {
            println!("{err}");
        }
        return true;
    }

    println!(
        "Legal plays: {} | enter a card (e.g. 8H), 'draw', or 'cut'",
        format_cards(&plays)
    );
    loop {
        let input = prompt_line("> ");
        match input.as_str() {
            "q" | "quit" => return false,
            "draw" => {
                if let Err(err) = game.apply(Action::Draw) {
                    println!("{err}");
                    continue;
                }
                return true;
            }
            "cut" => {
                if let Err(err) = game.apply(Action::Cut) {
                    println!("Invalid cut: {err}");
                    continue;
                }
                return true;
            }
            token => {
                let Ok(card) = token.to_uppercase().parse::<Card>() else {
                    println!("Invalid input. Try again.");
                    continue;
                };
                if !plays.contains(&card) {
                    println!("{} is not a legal play.", format_card(card));
                    continue;
                }
                // House rule, enforced at the table rather than by the
                // engine: an eight or a jack may not be the last card.
                if game.hands[HUMAN].len() == 1
                    && matches!(card.rank, Rank::Eight | Rank::Jack)
                {
                    println!("Cannot finish on an 8 or a J. Choose another card.");
                    continue;
                }
                if let Err(err) = game.apply(Action::Play {
                    card,
                    declared_suit: None,
                }) {
                    println!("{err}");
                    continue;
                }
                return true;
            }
        }
    }
}

/// Runs one CPU decision.
fn cpu_turn(game: &mut Game) {
    let mut action = choose_action(game, CPU);

    // Same house rule as the human side: rather than finish on an eight or
    // a jack, the CPU draws.
    if let Action::Play { card, .. } = action {
        if game.hands[CPU].len() == 1 && matches!(card.rank, Rank::Eight | Rank::Jack) {
            action = Action::Draw;
        }
    }

    narrate(game, action);
    if let Err(err) = game.apply(action) {
        println!("CPU error: {err}");
    }
}

fn narrate(game: &Game, action: Action) {
    match action {
        Action::Play { card, .. } => println!("CPU plays {}.", format_card(card)),
        Action::Draw => {
            let count = if game.pending_draw > 0 {
                game.pending_draw
            } else {
                1
            };
            println!("CPU draws {count}.");
        }
        Action::Pass => println!("CPU passes."),
        Action::Cut => println!("CPU cuts!"),
        Action::Declare(suit) => println!("CPU declares {suit}."),
    }
}

fn print_table(game: &Game) {
    let declared = game
        .declared_suit
        .map_or_else(|| "-".to_string(), |s| s.to_string());
    println!(
        "\nTop: {} | Cut suit: {} | Pending draw: {} | Declared suit: {} | Stock: {}",
        format_card(game.top_discard()),
        game.cut_suit,
        game.pending_draw,
        declared,
        game.stock.len()
    );
    println!("CPU holds {} card(s).", game.hands[CPU].len());
    println!("Your hand: {}", format_cards(game.hands[HUMAN].cards()));
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

/// Prompts for a suit. Returns `None` when the player quits.
fn prompt_suit() -> Option<Suit> {
    loop {
        let input = prompt_line("Choose suit [C/D/H/S]: ");
        if input == "q" || input == "quit" {
            return None;
        }
        if let Ok(suit) = input.to_uppercase().parse::<Suit>() {
            return Some(suit);
        }
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: Card) -> String {
    let code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), code)
}

fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|&c| format_card(c))
        .collect::<Vec<_>>()
        .join(" ")
}

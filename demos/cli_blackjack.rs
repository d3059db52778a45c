//! Terminal blackjack demo.
//!
//! Stands in for the excluded graphical presentation layer: it drives the
//! engine through its triggers and re-renders the full observable state
//! after every action.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use chipjack::{Card, Game, GameOptions, GameState, HitOutcome, QuizOutcome, RoundOutcome, Suit};

fn main() {
    println!("Blackjack (h = hit, s = stand, b = buy chips, q = quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::default().with_progressive_difficulty(true);
    let mut game = Game::new(options, seed);

    loop {
        match game.start_round() {
            Ok(Some(result)) => {
                print_table(&game);
                print_settlement(result.outcome);
                continue;
            }
            Ok(None) => {}
            Err(err) => {
                println!("Deal error: {err}");
                break;
            }
        }

        while game.state() == GameState::PlayerTurn {
            print_table(&game);

            match prompt_line("Action: ").as_str() {
                "h" | "hit" => match game.hit() {
                    Ok(HitOutcome::Drew(card)) => {
                        println!("You drew {}.", format_card(&card));
                    }
                    Ok(HitOutcome::Busted { card, result }) => {
                        println!("You drew {}.", format_card(&card));
                        print_table(&game);
                        print_settlement(result.outcome);
                    }
                    Err(err) => println!("Action error: {err}"),
                },
                "s" | "stand" | "stay" => match game.stand() {
                    Ok(stand) => {
                        if !stand.drawn.is_empty() {
                            println!("Dealer draws {} card(s).", stand.drawn.len());
                        }
                        print_table(&game);
                        print_settlement(stand.result.outcome);
                    }
                    Err(err) => println!("Action error: {err}"),
                },
                "b" | "buy" => run_quiz(&mut game),
                "q" | "quit" => return,
                _ => println!("Unknown action."),
            }
        }
    }
}

fn run_quiz(game: &mut Game) {
    let question = match game.request_question() {
        Ok(question) => question,
        Err(err) => {
            println!("Quiz error: {err}");
            return;
        }
    };

    let answer = prompt_line(&format!("Solve this: {} = ", question.prompt));
    match game.submit_answer(&answer) {
        Ok(QuizOutcome::Correct { reward }) => {
            println!("Correct! You've been awarded {reward} chips.");
        }
        Ok(QuizOutcome::Incorrect) => println!("Incorrect answer. No chips awarded."),
        Ok(QuizOutcome::Invalid) => println!("Invalid input. Please enter a number."),
        Err(err) => println!("Quiz error: {err}"),
    }
}

fn print_settlement(outcome: RoundOutcome) {
    match outcome {
        RoundOutcome::PlayerBlackjack => println!("You got a Blackjack! You win!"),
        RoundOutcome::DealerBlackjack => println!("Dealer got a Blackjack! You lose."),
        RoundOutcome::PlayerWin => println!("You win!"),
        RoundOutcome::DealerWin => println!("Dealer wins!"),
        RoundOutcome::PlayerBust => println!("You busted! Dealer wins."),
        RoundOutcome::Push => println!("It's a tie!"),
    }
}

fn print_table(game: &Game) {
    println!();
    println!(
        "Your hand:   {} (value {})",
        format_cards(game.player_cards()),
        game.player_total()
    );
    println!(
        "Dealer hand: {} (value {})",
        format_cards(game.dealer_cards()),
        game.dealer_total()
    );
    println!(
        "Your chips: ${}   Dealer's chips: ${}   Difficulty: {}",
        game.player_chips(),
        game.dealer_chips(),
        game.difficulty()
    );
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

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(no cards)".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let rank = card.rank.asset_name().to_uppercase();
    let short = match rank.as_str() {
        "JACK" => "J".to_string(),
        "QUEEN" => "Q".to_string(),
        "KING" => "K".to_string(),
        "ACE" => "A".to_string(),
        _ => rank,
    };

    format!("{short}{}", colorize(suit, color_code))
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

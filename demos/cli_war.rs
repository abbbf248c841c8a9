//! CLI War example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use warrs::{
    Battle, Card, Game, GameOptions, GamePhase, Grade, MathOp, NextRound, Player, RoundOutcome,
    Suit,
};

fn main() {
    println!("War CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = Game::new(GameOptions::default(), seed);
    let mut op = MathOp::Add;
    game.new_problem(op);

    loop {
        print_status(&game);

        match prompt_line("[d]eal/next round, [m]ath problem, [o]perator, [q]uit: ").as_str() {
            "" | "d" | "deal" => match game.next_round() {
                NextRound::Dealt => println!("New game dealt."),
                NextRound::Played(outcome) => print_outcome(&outcome),
            },
            "m" | "math" => run_math_round(&game),
            "o" | "operator" => {
                op = match op {
                    MathOp::Add => MathOp::Sub,
                    MathOp::Sub => MathOp::Mul,
                    MathOp::Mul => MathOp::Add,
                };
                println!("Operator set to {op:?}.");
                game.new_problem(op);
            }
            "q" | "quit" => return,
            _ => println!("Unknown action."),
        }
    }
}

fn run_math_round(game: &Game) {
    let Some(problem) = game.current_problem() else {
        return;
    };
    println!("Problem: {problem}");

    let input = prompt_line("Answer: ");
    match game.submit_answer(&input) {
        Ok(Grade::Correct) => {
            println!("Correct! Your next round auto-wins. (score {})", game.math_score());
        }
        Ok(Grade::Incorrect { correct_answer }) => {
            println!("Incorrect, the correct answer was {correct_answer}.");
        }
        Ok(Grade::Invalid) => println!("Please enter a numeric answer."),
        Err(err) => println!("Answer error: {err}"),
    }
}

fn print_status(game: &Game) {
    let (count1, count2) = game.counts();
    let advantage = if game.advantage_armed() {
        " [advantage armed]"
    } else {
        ""
    };
    println!("\nPlayer 1: {count1} cards | Player 2: {count2} cards{advantage}");

    if let Some(battle) = game.last_battle() {
        println!("Table: {}", format_battle(&battle));
    }
    if game.phase() == GamePhase::GameOver {
        println!("Game over; deal again to restart.");
    }
}

fn print_outcome(outcome: &RoundOutcome) {
    match outcome {
        RoundOutcome::RoundWon { winner, battles } => {
            for battle in &battles[..battles.len() - 1] {
                println!("War! {}", format_battle(battle));
            }
            println!("{} wins the round.", player_name(*winner));
        }
        RoundOutcome::AdvantageWin { .. } => {
            println!("Player 1 wins the round (math advantage)!");
        }
        RoundOutcome::GameOver(result) => match result.winner {
            Some(winner) => println!(
                "{} wins the whole game ({:?}, {} vs {}).",
                player_name(winner),
                result.reason,
                result.player1_count,
                result.player2_count
            ),
            None => println!("It's a tie ({:?})!", result.reason),
        },
    }
}

const fn player_name(player: Player) -> &'static str {
    match player {
        Player::One => "Player 1",
        Player::Two => "Player 2",
    }
}

fn format_battle(battle: &Battle) -> String {
    format!(
        "{} vs {}",
        format_card(&battle.player1_card),
        format_card(&battle.player2_card)
    )
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let rank = match card.value() {
        14 => "A".to_string(),
        13 => "K".to_string(),
        12 => "Q".to_string(),
        11 => "J".to_string(),
        value => value.to_string(),
    };

    format!("{}{}", colorize(&rank, color_code), colorize(suit, color_code))
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
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

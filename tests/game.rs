//! Game integration tests.

use std::collections::HashSet;

use warrs::{
    AnswerError, Card, DECK_SIZE, EndReason, Game, GameOptions, GamePhase, GameResult, Grade,
    MathOp, NextRound, Player, Rank, RoundOutcome, Suit, standard_deck,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

/// Builds a hand from ranks, cycling suits so cards stay distinguishable.
fn hand_of(ranks: &[Rank]) -> Vec<Card> {
    ranks
        .iter()
        .zip(Suit::ALL.iter().cycle())
        .map(|(&rank, &suit)| card(suit, rank))
        .collect()
}

fn set_hands(game: &Game, player1: &[Card], player2: &[Card]) {
    game.player1_hand.lock().refill(player1.iter().copied());
    game.player2_hand.lock().refill(player2.iter().copied());
}

#[test]
fn standard_deck_has_52_unique_cards() {
    let deck = standard_deck();
    assert_eq!(deck.len(), DECK_SIZE);

    let unique: HashSet<Card> = deck.iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
}

#[test]
fn deal_splits_a_full_deck_evenly() {
    let game = Game::new(GameOptions::default(), 42);
    game.deal();

    assert_eq!(game.counts(), (26, 26));
    assert_eq!(game.phase(), GamePhase::InProgress);
    assert_eq!(game.deal_count(), 0);
    assert_eq!(game.last_battle(), None);

    // Shuffling and splitting never loses or duplicates a card.
    let mut all: Vec<Card> = game.player1_hand.lock().cards().copied().collect();
    all.extend(game.player2_hand.lock().cards().copied());
    let unique: HashSet<Card> = all.iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
}

#[test]
fn next_round_deals_when_nothing_is_dealt() {
    let game = Game::new(GameOptions::default(), 1);
    assert_eq!(game.phase(), GamePhase::NeedsDeal);
    assert_eq!(game.next_round(), NextRound::Dealt);
    assert_eq!(game.counts(), (26, 26));
}

#[test]
fn higher_card_takes_the_pair() {
    let game = Game::new(GameOptions::default(), 1);
    set_hands(
        &game,
        &[card(Suit::Hearts, Rank::King), card(Suit::Hearts, Rank::Two)],
        &[card(Suit::Spades, Rank::Nine), card(Suit::Spades, Rank::Three)],
    );

    let outcome = game.play_round();
    let RoundOutcome::RoundWon { winner, battles } = outcome else {
        panic!("expected a round win, got {outcome:?}");
    };
    assert_eq!(winner, Player::One);
    assert_eq!(battles.len(), 1);
    assert_eq!(battles[0].player1_card, card(Suit::Hearts, Rank::King));
    assert_eq!(battles[0].player2_card, card(Suit::Spades, Rank::Nine));

    assert_eq!(game.counts(), (3, 1));
    assert_eq!(game.last_battle(), Some(battles[0]));
    assert_eq!(game.deal_count(), 1);
}

#[test]
fn war_carries_the_stake_to_the_deciding_pair() {
    let game = Game::new(GameOptions::default(), 1);
    let p1 = [
        card(Suit::Hearts, Rank::Five),
        card(Suit::Hearts, Rank::Two),
        card(Suit::Hearts, Rank::Three),
        card(Suit::Hearts, Rank::Four),
        card(Suit::Hearts, Rank::King),
    ];
    let p2 = [
        card(Suit::Spades, Rank::Five),
        card(Suit::Spades, Rank::Two),
        card(Suit::Spades, Rank::Three),
        card(Suit::Spades, Rank::Four),
        card(Suit::Spades, Rank::Queen),
    ];
    set_hands(&game, &p1, &p2);

    let outcome = game.play_round();
    let RoundOutcome::RoundWon { winner, battles } = outcome else {
        panic!("expected a round win, got {outcome:?}");
    };
    assert_eq!(winner, Player::One);
    assert_eq!(battles.len(), 2);
    assert_eq!(battles[1].player1_card, card(Suit::Hearts, Rank::King));
    assert_eq!(battles[1].player2_card, card(Suit::Spades, Rank::Queen));

    // Whole stake goes to player 1: tied pair, both face-down sets, then
    // the deciding pair, in pile order.
    let won: Vec<Card> = game.player1_hand.lock().cards().copied().collect();
    assert_eq!(
        won,
        vec![
            card(Suit::Hearts, Rank::Five),
            card(Suit::Spades, Rank::Five),
            card(Suit::Hearts, Rank::Two),
            card(Suit::Hearts, Rank::Three),
            card(Suit::Hearts, Rank::Four),
            card(Suit::Spades, Rank::Two),
            card(Suit::Spades, Rank::Three),
            card(Suit::Spades, Rank::Four),
            card(Suit::Hearts, Rank::King),
            card(Suit::Spades, Rank::Queen),
        ]
    );
    assert!(game.player2_hand.lock().is_empty());
}

#[test]
fn short_war_exhaustion_abandons_the_stake() {
    let game = Game::new(GameOptions::default(), 1);
    set_hands(
        &game,
        &[card(Suit::Clubs, Rank::Five), card(Suit::Clubs, Rank::Two)],
        &hand_of(&[Rank::Five, Rank::Two, Rank::Three, Rank::Four, Rank::Six]),
    );

    let outcome = game.play_round();
    assert_eq!(
        outcome,
        RoundOutcome::GameOver(GameResult {
            winner: Some(Player::Two),
            reason: EndReason::Exhausted,
            player1_count: 0,
            player2_count: 1,
        })
    );
    assert_eq!(game.phase(), GamePhase::GameOver);

    // The six in-flight cards belong to no one.
    assert_eq!(game.counts(), (0, 1));
}

#[test]
fn empty_hand_on_entry_ends_the_game() {
    let game = Game::new(GameOptions::default(), 1);
    set_hands(&game, &[], &hand_of(&[Rank::Two, Rank::Three]));

    let outcome = game.play_round();
    assert_eq!(
        outcome,
        RoundOutcome::GameOver(GameResult {
            winner: Some(Player::Two),
            reason: EndReason::Exhausted,
            player1_count: 0,
            player2_count: 2,
        })
    );
    assert_eq!(game.last_battle(), None);

    // Terminal outcomes are absorbing and repeatable.
    assert_eq!(game.play_round(), outcome);
}

#[test]
fn deal_limit_forces_a_tie_at_equal_counts() {
    let game = Game::new(GameOptions::default().with_max_deals(1), 42);
    game.deal();

    let outcome = game.play_round();
    assert_eq!(
        outcome,
        RoundOutcome::GameOver(GameResult {
            winner: None,
            reason: EndReason::DealLimit,
            player1_count: 26,
            player2_count: 26,
        })
    );
    // Terminated before drawing.
    assert_eq!(game.last_battle(), None);
    assert_eq!(game.deal_count(), 1);
}

#[test]
fn deal_limit_awards_the_larger_hand() {
    let game = Game::new(GameOptions::default().with_max_deals(4), 1);
    set_hands(
        &game,
        &hand_of(&[Rank::Ace, Rank::Two, Rank::Two, Rank::Ace]),
        &hand_of(&[Rank::Two, Rank::Ace, Rank::Ace, Rank::Two]),
    );

    for _ in 0..3 {
        assert!(matches!(
            game.play_round(),
            RoundOutcome::RoundWon { .. }
        ));
    }

    let outcome = game.play_round();
    let RoundOutcome::GameOver(result) = outcome else {
        panic!("expected the deal limit, got {outcome:?}");
    };
    assert_eq!(result.reason, EndReason::DealLimit);
    assert_eq!(result.player1_count + result.player2_count, 8);
    match result.winner {
        Some(Player::One) => assert!(result.player1_count > result.player2_count),
        Some(Player::Two) => assert!(result.player2_count > result.player1_count),
        None => assert_eq!(result.player1_count, result.player2_count),
    }
}

#[test]
fn dominant_hand_sweeps_in_26_rounds() {
    let game = Game::new(GameOptions::default(), 1);
    let aces: Vec<Card> = hand_of(&[Rank::Ace; 26]);
    let twos: Vec<Card> = hand_of(&[Rank::Two; 26]);
    set_hands(&game, &aces, &twos);

    for round in 0..26 {
        let outcome = game.play_round();
        assert!(
            matches!(
                outcome,
                RoundOutcome::RoundWon {
                    winner: Player::One,
                    ..
                }
            ),
            "round {round} was {outcome:?}"
        );
        let (count1, count2) = game.counts();
        assert_eq!(count1 + count2, 52);
    }

    assert_eq!(game.counts(), (52, 0));

    let outcome = game.play_round();
    assert_eq!(
        outcome,
        RoundOutcome::GameOver(GameResult {
            winner: Some(Player::One),
            reason: EndReason::Exhausted,
            player1_count: 52,
            player2_count: 0,
        })
    );

    // A drained hand routes the next request to a fresh deal.
    assert_eq!(game.next_round(), NextRound::Dealt);
    assert_eq!(game.counts(), (26, 26));
}

#[test]
fn hands_always_sum_to_52_between_rounds() {
    let game = Game::new(GameOptions::default(), 7);
    game.deal();

    while game.phase() == GamePhase::InProgress {
        let outcome = game.play_round();
        let (count1, count2) = game.counts();
        match outcome {
            RoundOutcome::RoundWon { .. } | RoundOutcome::AdvantageWin { .. } => {
                assert_eq!(count1 + count2, 52);
            }
            RoundOutcome::GameOver(_) => break,
        }
    }
}

#[test]
fn same_seed_replays_the_same_game() {
    let game1 = Game::new(GameOptions::default(), 123);
    let game2 = Game::new(GameOptions::default(), 123);

    for _ in 0..300 {
        let step1 = game1.next_round();
        let step2 = game2.next_round();
        assert_eq!(step1, step2);
        assert_eq!(game1.counts(), game2.counts());
        if game1.phase() == GamePhase::GameOver {
            break;
        }
    }
}

#[test]
fn advantage_awards_the_pile_to_player_1_unconditionally() {
    let game = Game::new(GameOptions::default(), 9);
    // Player 2's card is strictly higher; without the advantage this round
    // would be theirs.
    set_hands(
        &game,
        &hand_of(&[Rank::Two, Rank::Three]),
        &hand_of(&[Rank::Ace, Rank::King]),
    );

    let problem = game.new_problem(MathOp::Add);
    let grade = game
        .submit_answer(&problem.answer().to_string())
        .expect("problem exists");
    assert_eq!(grade, Grade::Correct);
    assert!(game.advantage_armed());

    let outcome = game.play_round();
    let RoundOutcome::AdvantageWin { battle } = outcome else {
        panic!("expected an advantage win, got {outcome:?}");
    };
    assert_eq!(battle.player2_card.rank, Rank::Ace);

    assert_eq!(game.counts(), (3, 1));
    assert!(!game.advantage_armed(), "advantage is one-shot");

    // The next round compares normally again.
    assert!(matches!(
        game.play_round(),
        RoundOutcome::RoundWon {
            winner: Player::Two,
            ..
        }
    ));
}

#[test]
fn deal_clears_advantage_and_display_state() {
    let game = Game::new(GameOptions::default(), 5);
    game.deal();

    let problem = game.new_problem(MathOp::Mul);
    game.submit_answer(&problem.answer().to_string())
        .expect("problem exists");
    assert!(game.advantage_armed());

    game.play_round();
    game.deal();

    assert!(!game.advantage_armed());
    assert_eq!(game.last_battle(), None);
    assert_eq!(game.deal_count(), 0);
    assert_eq!(game.counts(), (26, 26));
}

#[test]
fn answer_flow_grades_and_replaces_problems() {
    let game = Game::new(GameOptions::default(), 77);

    assert_eq!(
        game.submit_answer("3").unwrap_err(),
        AnswerError::NoProblem
    );

    let problem = game.new_problem(MathOp::Sub);
    let wrong = problem.answer() + 1;

    let grade = game.submit_answer(&wrong.to_string()).expect("problem exists");
    assert_eq!(
        grade,
        Grade::Incorrect {
            correct_answer: problem.answer()
        }
    );
    // An incorrect answer keeps the problem for a retry.
    assert_eq!(game.current_problem(), Some(problem));
    assert_eq!(game.math_score(), 0);
    assert!(!game.advantage_armed());

    assert_eq!(game.submit_answer("").expect("problem exists"), Grade::Invalid);
    assert_eq!(
        game.submit_answer("abc").expect("problem exists"),
        Grade::Invalid
    );
    assert_eq!(game.current_problem(), Some(problem));

    let grade = game
        .submit_answer(&problem.answer().to_string())
        .expect("problem exists");
    assert_eq!(grade, Grade::Correct);
    assert_eq!(game.math_score(), 1);
    assert!(game.advantage_armed());

    // A correct answer swaps in a fresh problem of the same operator.
    let next = game.current_problem().expect("replacement was generated");
    assert_eq!(next.op, MathOp::Sub);
}

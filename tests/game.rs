//! Game integration tests.

use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use chipjack::{
    ActionError, Card, DECK_SIZE, DealError, Deck, Game, GameOptions, GameState, Hand, HitOutcome,
    QuizError, QuizOutcome, QuizTier, Rank, RoundOutcome, Suit,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn set_deck_from_draws(game: &mut Game, draws: &[Card]) {
    let mut cards = draws.to_vec();
    cards.reverse();
    game.deck = Deck::from_cards(cards);
}

fn hand_of(ranks: &[Rank]) -> Hand {
    let mut hand = Hand::new();
    for &rank in ranks {
        hand.add_card(card(Suit::Hearts, rank));
    }
    hand
}

#[test]
fn hand_value_demotes_aces() {
    assert_eq!(hand_of(&[Rank::Ace, Rank::King]).value(), 21);
    assert!(hand_of(&[Rank::Ace, Rank::King]).is_soft());
    assert!(hand_of(&[Rank::Ace, Rank::King]).is_natural());

    // One ace stays at 11, one drops to 1.
    assert_eq!(hand_of(&[Rank::Ace, Rank::Ace, Rank::Nine]).value(), 21);

    // Every ace but the last drops to 1.
    assert_eq!(
        hand_of(&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::Ace, Rank::Ace, Rank::Six]).value(),
        21
    );

    let hard = hand_of(&[Rank::Ace, Rank::Five, Rank::King]);
    assert_eq!(hard.value(), 16);
    assert!(!hard.is_soft());
}

#[test]
fn hand_value_is_order_invariant() {
    let forward = hand_of(&[Rank::Ace, Rank::Five, Rank::King]);
    let backward = hand_of(&[Rank::King, Rank::Five, Rank::Ace]);
    let middle = hand_of(&[Rank::Five, Rank::Ace, Rank::King]);

    assert_eq!(forward.value(), backward.value());
    assert_eq!(forward.value(), middle.value());
}

#[test]
fn natural_requires_exactly_two_cards() {
    assert!(!hand_of(&[Rank::Five, Rank::Six, Rank::King]).is_natural());
    assert!(!hand_of(&[Rank::King, Rank::Nine]).is_natural());
}

#[test]
fn standard_deck_is_the_full_cross_product() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut deck = Deck::new(0, &mut rng);
    assert_eq!(deck.len(), DECK_SIZE);

    let mut seen = HashSet::new();
    while let Some(dealt) = deck.deal() {
        assert!(seen.insert((dealt.suit, dealt.rank)), "duplicate {dealt}");
    }
    assert_eq!(seen.len(), DECK_SIZE);
    assert!(deck.deal().is_none());
}

#[test]
fn difficulty_biases_deck_composition() {
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let deck = Deck::new(3, &mut rng);

    // Six high-value cards added, six low-value cards removed.
    assert_eq!(deck.len(), DECK_SIZE);
    let high = deck.cards().iter().filter(|c| c.value() > 10).count();
    let low = deck.cards().iter().filter(|c| c.value() <= 5).count();
    assert_eq!(high, 10);
    assert_eq!(low, 10);
}

#[test]
fn difficulty_removals_stop_when_low_cards_run_out() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let difficulty = 20;
    let deck = Deck::new(difficulty, &mut rng);

    // 40 additions always land; only the 16 low cards can be removed.
    assert_eq!(deck.len(), DECK_SIZE + 40 - 16);
    assert!(deck.cards().iter().all(|c| c.value() > 5));

    let size = deck.len();
    assert!(size >= DECK_SIZE);
    assert!(size <= DECK_SIZE + 2 * usize::from(difficulty));
}

#[test]
fn player_natural_settles_immediately() {
    let mut game = Game::new(GameOptions::default(), 1);
    set_deck_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, Rank::Ace),    // player
            card(Suit::Spades, Rank::King),   // player
            card(Suit::Diamonds, Rank::Nine), // dealer
            card(Suit::Clubs, Rank::Five),    // dealer
        ],
    );

    let result = game.deal().unwrap().expect("natural should settle");
    assert_eq!(result.outcome, RoundOutcome::PlayerBlackjack);
    assert_eq!(result.player_value, 21);
    assert_eq!(result.reward, 50);
    assert_eq!(game.player_chips(), 1050);
    assert_eq!(game.dealer_chips(), 1000);
    assert_eq!(game.state(), GameState::RoundOver);
}

#[test]
fn double_natural_is_a_player_win() {
    let mut game = Game::new(GameOptions::default(), 1);
    set_deck_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, Rank::Ace),   // player
            card(Suit::Spades, Rank::King),  // player
            card(Suit::Clubs, Rank::Ace),    // dealer
            card(Suit::Clubs, Rank::Queen),  // dealer
        ],
    );

    let result = game.deal().unwrap().expect("natural should settle");
    assert_eq!(result.outcome, RoundOutcome::PlayerBlackjack);
    assert_eq!(game.player_chips(), 1050);
    assert_eq!(game.dealer_chips(), 1000);
}

#[test]
fn dealer_natural_settles_for_the_dealer() {
    let mut game = Game::new(GameOptions::default(), 1);
    set_deck_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, Rank::Ten),   // player
            card(Suit::Spades, Rank::Seven), // player
            card(Suit::Clubs, Rank::Ace),    // dealer
            card(Suit::Clubs, Rank::King),   // dealer
        ],
    );

    let result = game.deal().unwrap().expect("natural should settle");
    assert_eq!(result.outcome, RoundOutcome::DealerBlackjack);
    assert_eq!(game.player_chips(), 1000);
    assert_eq!(game.dealer_chips(), 1050);
}

#[test]
fn hit_keeps_the_turn_until_bust() {
    let mut game = Game::new(GameOptions::default(), 1);
    set_deck_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, Rank::Five),   // player
            card(Suit::Spades, Rank::Six),    // player
            card(Suit::Diamonds, Rank::Nine), // dealer
            card(Suit::Clubs, Rank::Five),    // dealer
            card(Suit::Hearts, Rank::Four),   // first hit
            card(Suit::Spades, Rank::King),   // busting hit
        ],
    );

    assert!(game.deal().unwrap().is_none());
    assert_eq!(game.state(), GameState::PlayerTurn);

    match game.hit().unwrap() {
        HitOutcome::Drew(drawn) => assert_eq!(drawn.rank, Rank::Four),
        HitOutcome::Busted { .. } => panic!("15 is not a bust"),
    }
    assert_eq!(game.player_total(), 15);
    assert_eq!(game.state(), GameState::PlayerTurn);

    match game.hit().unwrap() {
        HitOutcome::Busted { card: drawn, result } => {
            assert_eq!(drawn.rank, Rank::King);
            assert_eq!(result.outcome, RoundOutcome::PlayerBust);
            assert_eq!(result.player_value, 25);
        }
        HitOutcome::Drew(_) => panic!("25 should bust"),
    }
    assert_eq!(game.dealer_chips(), 1050);
    assert_eq!(game.state(), GameState::RoundOver);
}

#[test]
fn stand_plays_dealer_to_twenty_and_settles() {
    let mut game = Game::new(GameOptions::default(), 1);
    set_deck_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, Rank::Ten),    // player
            card(Suit::Spades, Rank::Seven),  // player
            card(Suit::Diamonds, Rank::Nine), // dealer
            card(Suit::Clubs, Rank::Five),    // dealer
            card(Suit::Hearts, Rank::Six),    // dealer draw to 20
        ],
    );

    assert!(game.deal().unwrap().is_none());
    let stand = game.stand().unwrap();

    assert_eq!(stand.drawn.len(), 1);
    assert_eq!(stand.drawn[0].rank, Rank::Six);
    assert_eq!(stand.result.outcome, RoundOutcome::DealerWin);
    assert_eq!(stand.result.player_value, 17);
    assert_eq!(stand.result.dealer_value, 20);
    assert_eq!(game.dealer_chips(), 1050);
    assert_eq!(game.player_chips(), 1000);

    // A new round can start straight away.
    game.start_round().unwrap();
}

#[test]
fn dealer_bust_pays_the_player() {
    let mut game = Game::new(GameOptions::default(), 1);
    set_deck_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, Rank::Ten),   // player
            card(Suit::Spades, Rank::Nine),  // player
            card(Suit::Diamonds, Rank::Ten), // dealer
            card(Suit::Clubs, Rank::Six),    // dealer
            card(Suit::Hearts, Rank::King),  // dealer busts at 26
        ],
    );

    assert!(game.deal().unwrap().is_none());
    let stand = game.stand().unwrap();

    assert_eq!(stand.result.outcome, RoundOutcome::PlayerWin);
    assert_eq!(game.player_chips(), 1050);
}

#[test]
fn equal_totals_push_without_chip_change() {
    let mut game = Game::new(GameOptions::default(), 1);
    set_deck_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, Rank::Ten),   // player
            card(Suit::Spades, Rank::Nine),  // player
            card(Suit::Diamonds, Rank::Ten), // dealer
            card(Suit::Clubs, Rank::Nine),   // dealer stands on 19
        ],
    );

    assert!(game.deal().unwrap().is_none());
    let stand = game.stand().unwrap();

    assert!(stand.drawn.is_empty());
    assert_eq!(stand.result.outcome, RoundOutcome::Push);
    assert_eq!(stand.result.reward, 0);
    assert_eq!(game.player_chips(), 1000);
    assert_eq!(game.dealer_chips(), 1000);
}

#[test]
fn dealer_draws_only_while_below_seventeen() {
    let mut game = Game::new(GameOptions::default(), 1);
    set_deck_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, Rank::Ten),    // player
            card(Suit::Spades, Rank::Seven),  // player
            card(Suit::Diamonds, Rank::Nine), // dealer 12
            card(Suit::Clubs, Rank::Three),   // dealer
            card(Suit::Hearts, Rank::Two),    // 14
            card(Suit::Spades, Rank::Two),    // 16
            card(Suit::Diamonds, Rank::Two),  // 18, stop
            card(Suit::Clubs, Rank::Two),     // must not be drawn
        ],
    );

    assert!(game.deal().unwrap().is_none());
    let stand = game.stand().unwrap();

    assert_eq!(stand.drawn.len(), 3);
    assert_eq!(stand.result.dealer_value, 18);
    assert!(stand.result.dealer_value >= 17);
    assert_eq!(game.cards_remaining(), 1);
}

#[test]
fn deal_errors() {
    let mut game = Game::new(GameOptions::default(), 1);

    game.deck = Deck::from_cards(vec![
        card(Suit::Hearts, Rank::Two),
        card(Suit::Spades, Rank::Three),
        card(Suit::Clubs, Rank::Four),
    ]);
    assert_eq!(game.deal().unwrap_err(), DealError::NotEnoughCards);

    set_deck_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Spades, Rank::Seven),
            card(Suit::Diamonds, Rank::Nine),
            card(Suit::Clubs, Rank::Five),
        ],
    );
    assert!(game.deal().unwrap().is_none());

    assert_eq!(game.deal().unwrap_err(), DealError::InvalidState);
    assert_eq!(game.start_round().unwrap_err(), DealError::InvalidState);
}

#[test]
fn actions_rejected_outside_player_turn() {
    let mut game = Game::new(GameOptions::default(), 1);
    assert_eq!(game.hit().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.stand().unwrap_err(), ActionError::InvalidState);
}

#[test]
fn hit_with_empty_deck_returns_error() {
    let mut game = Game::new(GameOptions::default(), 1);
    set_deck_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, Rank::Five),
            card(Suit::Spades, Rank::Six),
            card(Suit::Diamonds, Rank::Nine),
            card(Suit::Clubs, Rank::Seven),
        ],
    );

    assert!(game.deal().unwrap().is_none());
    assert_eq!(game.hit().unwrap_err(), ActionError::NoCards);
}

#[test]
fn stand_with_exhausted_deck_returns_error() {
    let mut game = Game::new(GameOptions::default(), 1);
    set_deck_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, Rank::Ten),    // player
            card(Suit::Spades, Rank::Seven),  // player
            card(Suit::Diamonds, Rank::Nine), // dealer 14, must draw
            card(Suit::Clubs, Rank::Five),    // dealer
        ],
    );

    assert!(game.deal().unwrap().is_none());
    assert_eq!(game.stand().unwrap_err(), ActionError::NoCards);
}

#[test]
fn progressive_difficulty_increases_each_round() {
    let options = GameOptions::default().with_progressive_difficulty(true);
    let mut game = Game::new(options, 9);
    assert_eq!(game.difficulty(), 0);

    if game.start_round().unwrap().is_none() {
        game.stand().unwrap();
    }
    assert_eq!(game.difficulty(), 1);

    if game.start_round().unwrap().is_none() {
        game.stand().unwrap();
    }
    assert_eq!(game.difficulty(), 2);
}

#[test]
fn fixed_difficulty_stays_constant() {
    let mut game = Game::new(GameOptions::default(), 9);
    if game.start_round().unwrap().is_none() {
        game.stand().unwrap();
    }
    assert_eq!(game.difficulty(), 0);
}

#[test]
fn quiz_correct_answer_awards_tier_reward() {
    let mut game = Game::new(GameOptions::default(), 4);
    let chips = game.player_chips();

    let question = game.request_question().unwrap();
    assert_eq!(question.reward, question.tier.reward());

    let outcome = game.submit_answer(&question.answer.to_string()).unwrap();
    assert_eq!(
        outcome,
        QuizOutcome::Correct {
            reward: question.reward
        }
    );
    assert_eq!(game.player_chips(), chips + question.reward);
}

#[test]
fn quiz_accepts_answers_within_tolerance() {
    let mut game = Game::new(GameOptions::default(), 5);
    let question = game.request_question().unwrap();

    let near = question.answer + 0.009;
    let outcome = game.submit_answer(&near.to_string()).unwrap();
    assert!(matches!(outcome, QuizOutcome::Correct { .. }));
}

#[test]
fn quiz_wrong_answer_awards_nothing() {
    let mut game = Game::new(GameOptions::default(), 6);
    let chips = game.player_chips();

    let question = game.request_question().unwrap();
    let wrong = question.answer + 1.0;
    assert_eq!(
        game.submit_answer(&wrong.to_string()).unwrap(),
        QuizOutcome::Incorrect
    );
    assert_eq!(game.player_chips(), chips);
}

#[test]
fn quiz_rejects_non_numeric_input() {
    let mut game = Game::new(GameOptions::default(), 7);
    let chips = game.player_chips();

    game.request_question().unwrap();
    assert_eq!(game.submit_answer("abc").unwrap(), QuizOutcome::Invalid);
    assert_eq!(game.player_chips(), chips);

    // The pending question was consumed even by invalid input.
    assert_eq!(game.submit_answer("8").unwrap_err(), QuizError::NoQuestion);
}

#[test]
fn quiz_question_lifecycle_errors() {
    let mut game = Game::new(GameOptions::default(), 8);
    assert_eq!(game.submit_answer("1").unwrap_err(), QuizError::NoQuestion);

    game.request_question().unwrap();
    assert!(game.pending_question().is_some());
    assert_eq!(
        game.request_question().unwrap_err(),
        QuizError::QuestionPending
    );

    let disabled = GameOptions::default().with_quiz(false);
    let mut game = Game::new(disabled, 8);
    assert!(!game.is_quiz_offered());
    assert_eq!(game.request_question().unwrap_err(), QuizError::NotOffered);
}

#[test]
fn quiz_banks_hold_the_fixed_questions() {
    assert!(QuizTier::Easy.questions().contains(&("5 + 3", 8.0)));
    assert!(QuizTier::Medium.questions().contains(&("15 * 4", 60.0)));
    assert!(QuizTier::Hard.questions().contains(&("(5 + 3) * 2", 16.0)));

    assert_eq!(QuizTier::Easy.reward(), 20);
    assert_eq!(QuizTier::Medium.reward(), 50);
    assert_eq!(QuizTier::Hard.reward(), 100);
}

#[test]
fn options_builder_sets_fields() {
    let options = GameOptions::default()
        .with_starting_chips(500)
        .with_chip_reward(25)
        .with_dealer_stands_at(16)
        .with_difficulty(2)
        .with_progressive_difficulty(true)
        .with_quiz(false);

    assert_eq!(options.starting_chips, 500);
    assert_eq!(options.chip_reward, 25);
    assert_eq!(options.dealer_stands_at, 16);
    assert_eq!(options.difficulty, 2);
    assert!(options.progressive_difficulty);
    assert!(!options.quiz);
}

#[test]
fn options_deserialize_with_defaults() {
    let options: GameOptions = serde_json::from_str(r#"{"quiz": false, "difficulty": 2}"#).unwrap();
    assert!(!options.quiz);
    assert_eq!(options.difficulty, 2);
    assert_eq!(options.starting_chips, 1000);
    assert_eq!(options.dealer_stands_at, 17);
}

#[test]
fn cards_expose_artwork_keys() {
    assert_eq!(
        card(Suit::Clubs, Rank::Two).asset_key(),
        "2_of_clubs"
    );
    assert_eq!(
        card(Suit::Spades, Rank::Ace).asset_key(),
        "ace_of_spades"
    );
    assert_eq!(
        card(Suit::Diamonds, Rank::Queen).to_string(),
        "queen of diamonds"
    );
}

#[test]
fn round_result_serializes_for_the_presentation_boundary() {
    let mut game = Game::new(GameOptions::default(), 1);
    set_deck_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, Rank::Ace),
            card(Suit::Spades, Rank::King),
            card(Suit::Diamonds, Rank::Nine),
            card(Suit::Clubs, Rank::Five),
        ],
    );

    let result = game.deal().unwrap().expect("natural should settle");
    let json = serde_json::to_value(result).unwrap();
    assert_eq!(json["outcome"], "PlayerBlackjack");
    assert_eq!(json["player_value"], 21);
    assert_eq!(json["reward"], 50);
}

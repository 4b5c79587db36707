//! Property tests over randomly configured matches.

use domino_engine::core::deck::{deck_size, generate};
use domino_engine::rules::opening_score;
use domino_engine::{
    Hand, MatchConfig, MatchEngine, MatchEvent, RandomPolicy, Side, Tile, TurnAction,
};
use proptest::prelude::*;

fn match_config() -> impl Strategy<Value = MatchConfig> {
    (2usize..=5, 2u8..=9, 1usize..=9, any::<u64>()).prop_map(|(players, max_pip, hand, seed)| {
        let hand = hand.min(deck_size(max_pip) / players).max(1);
        MatchConfig::new((1..=players).map(|i| format!("P{i}")))
            .with_max_pip(max_pip)
            .with_hand_size(hand)
            .with_seed(seed)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn tiles_are_conserved_every_turn(config in match_config()) {
        let total = config.deck_size();
        let mut engine = MatchEngine::with_policy(config.clone(), RandomPolicy::new(config.seed)).unwrap();
        engine.setup().unwrap();

        while !engine.is_finished() {
            engine.play_turn().unwrap();
            let held: usize = engine.hands().values().map(Hand::len).sum();
            prop_assert_eq!(held + engine.board().len() + engine.boneyard().len(), total);
            prop_assert!(engine.check_conservation().is_ok());
        }
    }

    #[test]
    fn matches_terminate_within_turn_limit(config in match_config()) {
        let limit = config.turn_limit();
        let mut engine = MatchEngine::new(config).unwrap();
        engine.run().unwrap();
        prop_assert!(engine.turn_number() as usize <= limit);
    }

    #[test]
    fn placed_tiles_match_the_end_they_cover(config in match_config()) {
        let mut engine = MatchEngine::with_policy(config.clone(), RandomPolicy::new(config.seed)).unwrap();
        engine.setup().unwrap();

        while !engine.is_finished() {
            let (left, right) = engine.board().open_ends().unwrap();
            let outcome = engine.play_turn().unwrap();
            let (new_left, new_right) = engine.board().open_ends().unwrap();

            match outcome.action {
                TurnAction::Played { tile, side: Side::Left } => {
                    prop_assert_eq!(tile.b, left);
                    prop_assert_eq!(new_left, tile.a);
                    prop_assert_eq!(new_right, right);
                }
                TurnAction::Played { tile, side: Side::Right } => {
                    prop_assert_eq!(tile.a, right);
                    prop_assert_eq!(new_right, tile.b);
                    prop_assert_eq!(new_left, left);
                }
                TurnAction::Passed => {
                    prop_assert_eq!((new_left, new_right), (left, right));
                }
            }
        }
    }

    #[test]
    fn opening_outranks_every_dealt_tile(config in match_config()) {
        let mut engine = MatchEngine::new(config).unwrap();
        engine.setup().unwrap();

        let opening = engine
            .events()
            .iter()
            .find_map(|r| match r.event {
                MatchEvent::Opened { tile, .. } => Some(tile),
                _ => None,
            })
            .unwrap();

        let held: Vec<Tile> = engine.hands().values().flat_map(|h| h.tiles().to_vec()).collect();
        for &tile in &held {
            prop_assert!(opening_score(opening) >= opening_score(tile));
        }
        if held.iter().any(|t| t.is_double()) {
            prop_assert!(opening.is_double());
        }
    }

    #[test]
    fn same_config_same_log(config in match_config()) {
        let mut first = MatchEngine::new(config.clone()).unwrap();
        let mut second = MatchEngine::new(config).unwrap();
        let a = first.run().unwrap();
        let b = second.run().unwrap();

        prop_assert_eq!(a, b);
        prop_assert!(first.events().iter().eq(second.events().iter()));
    }

    #[test]
    fn legal_moves_are_sound_and_complete(
        tiles in proptest::sample::subsequence(generate(6), 0..=10),
        left in 0u8..=6,
        right in 0u8..=6,
    ) {
        let hand = Hand::from_tiles(tiles.iter().copied()).unwrap();
        let moves = hand.legal_moves(left, right);

        for mv in &moves {
            let end = if mv.side == Side::Left { left } else { right };
            prop_assert!(mv.tile.matches(end));
            prop_assert!(hand.contains(mv.tile));
        }
        for &tile in &tiles {
            prop_assert_eq!(
                tile.matches(left),
                moves.iter().any(|m| m.tile == tile && m.side == Side::Left)
            );
            prop_assert_eq!(
                tile.matches(right),
                moves.iter().any(|m| m.tile == tile && m.side == Side::Right)
            );
        }
    }
}

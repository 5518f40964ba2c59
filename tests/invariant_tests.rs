//! Randomized invariants over whole hands.

use proptest::prelude::*;

use euchre_engine::cards::{effective_suit, Card};
use euchre_engine::core::{Action, EuchreConfig, GameRng, PlayerId};
use euchre_engine::games::euchre::{EuchreGame, Phase};

/// Every card exactly once across hands, kitty, upcard, played and discard.
fn assert_conserved(game: &EuchreGame) -> Result<(), TestCaseError> {
    let mut seen = [0u8; Card::COUNT];
    for card in game.tracked_cards() {
        seen[card.index()] += 1;
    }
    prop_assert!(seen.iter().all(|&n| n == 1), "card counts {:?}", seen);
    Ok(())
}

fn assert_hand_sizes(game: &EuchreGame) -> Result<(), TestCaseError> {
    let dealer = game.dealer().unwrap();
    let phase = game.phase().unwrap();
    for seat in PlayerId::all() {
        let size = game.get_state(seat).unwrap().hand.len();
        prop_assert!(size <= 6);
        if size == 6 {
            prop_assert_eq!(seat, dealer);
            prop_assert_eq!(phase, Phase::Discard);
        }
    }
    Ok(())
}

fn play_random_hand(deal_seed: u64, policy_seed: u64, step_back: bool) -> Result<EuchreGame, TestCaseError> {
    let mut config = EuchreConfig::new().with_seed(deal_seed);
    if step_back {
        config = config.with_step_back();
    }
    let mut game = EuchreGame::new(config).unwrap();
    game.init_game().unwrap();
    let mut rng = GameRng::new(policy_seed);

    let mut steps = 0;
    while !game.is_over() {
        assert_conserved(&game)?;
        assert_hand_sizes(&game)?;

        let state = game.get_state(game.current_player().unwrap()).unwrap();
        prop_assert!(state.center.len() < 4);
        prop_assert_eq!(state.lead_suit.is_some(), !state.center.is_empty());

        let legal = game.get_legal_actions();
        prop_assert!(!legal.is_empty());
        prop_assert_eq!(&state.legal_actions, &legal);
        let action = *rng.choose(&legal).unwrap();
        game.step(action).unwrap();

        steps += 1;
        prop_assert!(steps <= 30, "hand did not finish");
    }

    assert_conserved(&game)?;
    Ok(game)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_random_hands_conserve_cards(deal_seed: u64, policy_seed: u64) {
        let game = play_random_hand(deal_seed, policy_seed, false)?;

        let payoffs = game.get_payoffs();
        prop_assert_eq!(payoffs.values().sum::<i32>(), 0);
        prop_assert!(payoffs.values().all(|p| p.abs() == 1 || p.abs() == 2));
        prop_assert_eq!(game.tricks_won().values().map(|&t| u32::from(t)).sum::<u32>(), 5);
        prop_assert!(game.played().values().all(|cards| cards.len() == 5));
    }

    #[test]
    fn prop_partners_share_payoffs(deal_seed: u64, policy_seed: u64) {
        let game = play_random_hand(deal_seed, policy_seed, false)?;
        let payoffs = game.get_payoffs();
        for seat in PlayerId::all() {
            prop_assert_eq!(payoffs[seat], payoffs[seat.partner()]);
            prop_assert_eq!(payoffs[seat], -payoffs[seat.next()]);
        }
    }

    #[test]
    fn prop_march_iff_two_points(deal_seed: u64, policy_seed: u64) {
        let game = play_random_hand(deal_seed, policy_seed, false)?;
        let outcome = game.outcome().unwrap();
        prop_assert_eq!(outcome.is_march(), outcome.points == 2);
        prop_assert!(outcome.tricks(outcome.winning_team) >= 3);
    }

    #[test]
    fn prop_played_cards_follow_suit(deal_seed: u64, policy_seed: u64) {
        let game = play_random_hand(deal_seed, policy_seed, true)?;
        let trump = game.trump().unwrap();
        let played = game.played();

        // Rewind trick by trick and check each follower against the hand
        // they held at the time.
        let mut replay = game.clone();
        let history = game.action_history();
        for record in history.iter().rev() {
            prop_assert!(replay.step_back());
            let Action::Play(card) = record.action else { continue };
            let state = replay.get_state(record.player).unwrap();
            if let Some(lead) = state.lead_suit {
                let could_follow = state.hand.iter().any(|&c| effective_suit(c, trump) == lead);
                if could_follow {
                    prop_assert_eq!(effective_suit(card, trump), lead);
                }
            }
        }
        prop_assert!(played.values().all(|cards| cards.len() == 5));
    }

    #[test]
    fn prop_same_seeds_same_payoffs(deal_seed: u64, policy_seed: u64) {
        let a = play_random_hand(deal_seed, policy_seed, false)?;
        let b = play_random_hand(deal_seed, policy_seed, false)?;
        prop_assert_eq!(a.get_payoffs(), b.get_payoffs());
        prop_assert_eq!(a.action_history(), b.action_history());
    }
}

//! The hand state machine.
//!
//! `EuchreGame` owns one hand at a time: a `Dealer`, four `Player`s, and the
//! bidding/trick bookkeeping. Drivers alternate `get_legal_actions` and
//! `step` until `is_over`.
//!
//! ```
//! use euchre_engine::core::EuchreConfig;
//! use euchre_engine::games::euchre::EuchreGame;
//!
//! let mut game = EuchreGame::new(EuchreConfig::new().with_seed(3)).unwrap();
//! game.init_game().unwrap();
//!
//! while !game.is_over() {
//!     let action = game.get_legal_actions()[0];
//!     game.step(action).unwrap();
//! }
//!
//! let payoffs = game.get_payoffs();
//! assert_eq!(payoffs.values().sum::<i32>(), 0);
//! ```

use im::Vector;
use smallvec::SmallVec;
use tracing::{debug, trace};

use super::dealer::Dealer;
use super::judger::{judge_hand, judge_trick, HandOutcome, TrickPlay};
use super::player::Player;
use super::state::{EuchreState, Phase, UpcardDisposition};
use crate::cards::{effective_suit, Card, ScriptedDeck, Suit};
use crate::core::{Action, ActionRecord, EuchreConfig, GameRng, PlayerId, PlayerMap, NUM_PLAYERS};
use crate::error::{EuchreError, InvalidActionError};
use crate::rules::RulesEngine;

/// Everything that changes during one hand.
///
/// Cloned before each step when step-back is enabled; the `im` vectors
/// make those clones cheap.
#[derive(Clone, Debug)]
struct Round {
    dealer_seat: PlayerId,
    dealer: Dealer,
    players: PlayerMap<Player>,
    upcard: Card,
    disposition: UpcardDisposition,
    trump: Option<Suit>,
    calling_player: Option<PlayerId>,
    turned_down: Option<Suit>,
    lead_suit: Option<Suit>,
    center: SmallVec<[TrickPlay; NUM_PLAYERS]>,
    played: PlayerMap<Vector<Card>>,
    tricks_won: PlayerMap<u8>,
    discarded: Option<Card>,
    phase: Phase,
    current: PlayerId,
    outcome: Option<HandOutcome>,
    history: Vector<ActionRecord>,
}

impl Round {
    fn deal(script: Option<&ScriptedDeck>, dealer_seat: PlayerId, rng: &mut GameRng) -> Self {
        let mut dealer = Dealer::new(script, rng);
        let mut players = PlayerMap::new(Player::new);
        dealer.deal(&mut players, dealer_seat);
        let upcard = dealer
            .flip_upcard()
            .expect("a 24-card deck leaves four cards after the deal");

        Self {
            dealer_seat,
            dealer,
            players,
            upcard,
            disposition: UpcardDisposition::Available,
            trump: None,
            calling_player: None,
            turned_down: None,
            lead_suit: None,
            center: SmallVec::new(),
            played: PlayerMap::with_default(),
            tricks_won: PlayerMap::with_default(),
            discarded: None,
            phase: Phase::BidRoundOne,
            current: dealer_seat.next(),
            outcome: None,
            history: Vector::new(),
        }
    }

    fn legal_actions(&self) -> Vec<Action> {
        let hand = self.players[self.current].hand();

        match self.phase {
            Phase::BidRoundOne => vec![Action::Pass, Action::Pick],
            Phase::Discard => hand.iter().copied().map(Action::Discard).collect(),
            Phase::BidRoundTwo => {
                let may_pass = self.current != self.dealer_seat;
                may_pass
                    .then_some(Action::Pass)
                    .into_iter()
                    .chain(
                        Suit::ALL
                            .into_iter()
                            .filter(|&suit| Some(suit) != self.turned_down)
                            .map(Action::Call),
                    )
                    .collect()
            }
            Phase::Play => self.playable_cards().map(Action::Play).collect(),
            Phase::Finished => Vec::new(),
        }
    }

    /// Cards the current seat may play under the follow-suit rule.
    fn playable_cards(&self) -> impl Iterator<Item = Card> + '_ {
        let hand = self.players[self.current].hand();
        let follows = |card: &Card| match (self.trump, self.lead_suit) {
            (Some(trump), Some(lead)) => effective_suit(*card, trump) == lead,
            _ => true,
        };
        let must_follow = hand.iter().any(follows);

        hand.iter()
            .copied()
            .filter(move |card| !must_follow || follows(card))
    }

    fn apply(&mut self, action: Action) {
        let actor = self.current;
        self.history
            .push_back(ActionRecord::new(actor, action, self.history.len() as u32));
        trace!(player = actor.0, %action, phase = ?self.phase, "Applying action");

        match (self.phase, action) {
            (Phase::BidRoundOne, Action::Pick) => {
                self.players[self.dealer_seat].receive(self.upcard);
                self.disposition = UpcardDisposition::PickedUp;
                self.name_trump(self.upcard.suit, actor);
                self.current = self.dealer_seat;
                self.phase = Phase::Discard;
            }
            (Phase::BidRoundOne, Action::Pass) => {
                if actor == self.dealer_seat {
                    self.turned_down = Some(self.upcard.suit);
                    self.disposition = UpcardDisposition::TurnedDown;
                    self.phase = Phase::BidRoundTwo;
                    debug!(upcard = %self.upcard, "Upcard turned down");
                }
                self.current = actor.next();
            }
            (Phase::Discard, Action::Discard(card)) => {
                self.discarded = self.players[actor].take(card);
                self.current = self.dealer_seat.next();
                self.phase = Phase::Play;
            }
            (Phase::BidRoundTwo, Action::Call(suit)) => {
                self.name_trump(suit, actor);
                self.current = self.dealer_seat.next();
                self.phase = Phase::Play;
            }
            (Phase::BidRoundTwo, Action::Pass) => {
                self.current = actor.next();
            }
            (Phase::Play, Action::Play(card)) => self.play_card(actor, card),
            (phase, action) => unreachable!("{action} was checked against the legal set for {phase:?}"),
        }
    }

    fn name_trump(&mut self, suit: Suit, caller: PlayerId) {
        self.trump = Some(suit);
        self.calling_player = Some(caller);
        debug!(trump = %suit, caller = caller.0, "Trump named");
    }

    fn play_card(&mut self, actor: PlayerId, card: Card) {
        let trump = self.trump.expect("trump is named before trick play");

        self.players[actor].take(card);
        if self.center.is_empty() {
            self.lead_suit = Some(effective_suit(card, trump));
        }
        self.center.push(TrickPlay { player: actor, card });
        self.played[actor].push_back(card);
        self.current = actor.next();

        if self.center.len() == NUM_PLAYERS {
            self.end_trick(trump);
        }
    }

    fn end_trick(&mut self, trump: Suit) {
        let lead = self.lead_suit.expect("a complete trick has a lead suit");
        let winner = judge_trick(&self.center, trump, lead).expect("a complete trick has a winner");

        self.tricks_won[winner] += 1;
        self.current = winner;
        self.center.clear();
        self.lead_suit = None;
        debug!(winner = winner.0, tricks = self.tricks_won[winner], "Trick won");

        if self.players[winner].hand_size() == 0 {
            let outcome = judge_hand(&self.tricks_won, self.calling_player);
            debug!(
                winning_team = ?outcome.winning_team,
                points = outcome.points,
                euchre = outcome.is_euchre(),
                "Hand scored"
            );
            self.outcome = Some(outcome);
            self.phase = Phase::Finished;
        }
    }

    fn snapshot(&self, player: PlayerId) -> EuchreState {
        EuchreState {
            player,
            hand: self.players[player].hand().to_vec(),
            phase: self.phase,
            trump: self.trump,
            dealer: self.dealer_seat,
            calling_player: self.calling_player,
            turned_down: self.turned_down,
            lead_suit: self.lead_suit,
            upcard: self.upcard,
            upcard_disposition: self.disposition,
            center: self.center.to_vec(),
            played: self.played.map(|cards| cards.iter().copied().collect()),
            tricks_won: self.tricks_won.clone(),
            current_player: self.current,
            legal_actions: self.legal_actions(),
        }
    }
}

/// Euchre rule engine for one hand at a time.
#[derive(Clone, Debug)]
pub struct EuchreGame {
    config: EuchreConfig,
    script: Option<ScriptedDeck>,
    fixed_dealer: Option<PlayerId>,
    rng: GameRng,
    round: Option<Round>,
    snapshots: Vec<Round>,
}

impl EuchreGame {
    /// Validate a configuration. No cards are dealt until `init_game`.
    pub fn new(config: EuchreConfig) -> Result<Self, EuchreError> {
        let script = config
            .custom_deck
            .as_deref()
            .map(ScriptedDeck::parse)
            .transpose()?;
        let fixed_dealer = config
            .custom_dealer_id
            .map(|id| PlayerId::try_new(id).ok_or(EuchreError::InvalidDealer(id)))
            .transpose()?;
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);

        Ok(Self {
            config,
            script,
            fixed_dealer,
            rng,
            round: None,
            snapshots: Vec::new(),
        })
    }

    /// The configuration this game was built from.
    #[must_use]
    pub fn config(&self) -> &EuchreConfig {
        &self.config
    }

    /// Seed of the random stream, for replaying unseeded games.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Deal a fresh hand, discarding any previous one.
    pub fn init_game(&mut self) -> Result<(EuchreState, PlayerId), EuchreError> {
        let dealer_seat = match self.fixed_dealer {
            Some(seat) => seat,
            None => PlayerId::new(self.rng.gen_range_usize(0..NUM_PLAYERS) as u8),
        };

        let round = Round::deal(self.script.as_ref(), dealer_seat, &mut self.rng);
        debug!(
            dealer = dealer_seat.0,
            upcard = %round.upcard,
            seed = self.rng.seed(),
            "Hand dealt"
        );

        let current = round.current;
        let state = round.snapshot(current);
        self.round = Some(round);
        self.snapshots.clear();
        Ok((state, current))
    }

    /// Apply an action for the seat to act.
    ///
    /// Fails without changing anything if `action` is not in
    /// `get_legal_actions()`.
    pub fn step(&mut self, action: Action) -> Result<(EuchreState, PlayerId), EuchreError> {
        let round = self.round.as_mut().ok_or(EuchreError::NotStarted)?;

        if !round.legal_actions().contains(&action) {
            return Err(InvalidActionError::NotLegal {
                action,
                player: round.current,
                phase: round.phase,
            }
            .into());
        }

        if self.config.allow_step_back {
            self.snapshots.push(round.clone());
        }
        round.apply(action);

        let current = round.current;
        Ok((round.snapshot(current), current))
    }

    /// Apply an action given by identifier, e.g. `"discard-D9"`.
    pub fn step_str(&mut self, identifier: &str) -> Result<(EuchreState, PlayerId), EuchreError> {
        let action: Action = identifier.parse()?;
        self.step(action)
    }

    /// Undo the last step. Returns `false` if there is nothing to undo or
    /// step-back is disabled.
    pub fn step_back(&mut self) -> bool {
        match self.snapshots.pop() {
            Some(previous) => {
                self.round = Some(previous);
                true
            }
            None => false,
        }
    }

    /// Legal actions for the seat to act, in ordinal order.
    #[must_use]
    pub fn get_legal_actions(&self) -> Vec<Action> {
        self.round
            .as_ref()
            .map(Round::legal_actions)
            .unwrap_or_default()
    }

    /// Per-seat payoffs; all zero until the hand is over.
    #[must_use]
    pub fn get_payoffs(&self) -> PlayerMap<i32> {
        self.outcome()
            .map(|outcome| outcome.payoffs())
            .unwrap_or_else(|| PlayerMap::with_value(0))
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.round
            .as_ref()
            .is_some_and(|round| round.phase == Phase::Finished)
    }

    /// Snapshot from one seat's perspective.
    pub fn get_state(&self, player: PlayerId) -> Result<EuchreState, EuchreError> {
        self.round
            .as_ref()
            .map(|round| round.snapshot(player))
            .ok_or(EuchreError::NotStarted)
    }

    /// Seat to act.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        self.round.as_ref().map(|round| round.current)
    }

    #[must_use]
    pub fn phase(&self) -> Option<Phase> {
        self.round.as_ref().map(|round| round.phase)
    }

    #[must_use]
    pub fn dealer(&self) -> Option<PlayerId> {
        self.round.as_ref().map(|round| round.dealer_seat)
    }

    #[must_use]
    pub fn trump(&self) -> Option<Suit> {
        self.round.as_ref().and_then(|round| round.trump)
    }

    #[must_use]
    pub fn upcard(&self) -> Option<Card> {
        self.round.as_ref().map(|round| round.upcard)
    }

    /// Score of the finished hand.
    #[must_use]
    pub fn outcome(&self) -> Option<HandOutcome> {
        self.round.as_ref().and_then(|round| round.outcome)
    }

    /// Tricks taken per seat.
    #[must_use]
    pub fn tricks_won(&self) -> PlayerMap<u8> {
        self.round
            .as_ref()
            .map(|round| round.tricks_won.clone())
            .unwrap_or_else(PlayerMap::with_default)
    }

    /// Cards each seat has played, in order.
    #[must_use]
    pub fn played(&self) -> PlayerMap<Vec<Card>> {
        self.round
            .as_ref()
            .map(|round| round.played.map(|cards| cards.iter().copied().collect()))
            .unwrap_or_else(PlayerMap::with_default)
    }

    /// Every action applied this hand, in order.
    #[must_use]
    pub fn action_history(&self) -> Vec<ActionRecord> {
        self.round
            .as_ref()
            .map(|round| round.history.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Every card the hand accounts for: hands, undealt kitty, the upcard
    /// while it is not in the dealer's hand, played cards, and the discard.
    ///
    /// Cards in the current trick are already part of the played history.
    /// A consistent hand returns each of the 24 cards exactly once.
    #[must_use]
    pub fn tracked_cards(&self) -> Vec<Card> {
        let Some(round) = self.round.as_ref() else {
            return Vec::new();
        };

        let mut cards: Vec<Card> = round
            .players
            .values()
            .flat_map(|player| player.hand().iter().copied())
            .chain(round.dealer.remaining().iter())
            .chain(round.played.values().flat_map(|cards| cards.iter().copied()))
            .chain(round.discarded)
            .collect();
        if round.disposition != UpcardDisposition::PickedUp {
            cards.push(round.upcard);
        }
        cards
    }
}

impl RulesEngine for EuchreGame {
    type Action = Action;
    type State = EuchreState;
    type Error = EuchreError;

    fn init_game(&mut self) -> Result<(EuchreState, PlayerId), EuchreError> {
        EuchreGame::init_game(self)
    }

    fn step(&mut self, action: Action) -> Result<(EuchreState, PlayerId), EuchreError> {
        EuchreGame::step(self, action)
    }

    fn legal_actions(&self) -> Vec<Action> {
        self.get_legal_actions()
    }

    fn current_player(&self) -> Option<PlayerId> {
        EuchreGame::current_player(self)
    }

    fn is_over(&self) -> bool {
        EuchreGame::is_over(self)
    }

    fn payoffs(&self) -> PlayerMap<i32> {
        self.get_payoffs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;
    use crate::core::ActionSpace;

    const SCRIPT: [&str; 24] = [
        "H9", "HT", "HJ", "HQ", "HK", "C9", "CT", "CJ", "CQ", "CK", "S9", "ST", "SJ", "SQ", "SK",
        "D9", "DT", "DJ", "DQ", "DK", "HA", "CA", "SA", "DA",
    ];

    fn scripted(dealer: u8) -> EuchreGame {
        let config = EuchreConfig::new()
            .with_custom_deck(SCRIPT)
            .with_dealer(dealer)
            .with_step_back();
        let mut game = EuchreGame::new(config).unwrap();
        game.init_game().unwrap();
        game
    }

    fn act(game: &mut EuchreGame, identifier: &str) {
        game.step_str(identifier)
            .unwrap_or_else(|e| panic!("{identifier}: {e}"));
    }

    fn ids(actions: &[Action]) -> Vec<String> {
        actions.iter().map(|a| a.to_string()).collect()
    }

    #[test]
    fn test_game_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<EuchreGame>();
    }

    #[test]
    fn test_init_game() {
        let config = EuchreConfig::new().with_custom_deck(SCRIPT).with_dealer(1);
        let mut game = EuchreGame::new(config).unwrap();
        let (state, current) = game.init_game().unwrap();

        assert_eq!(game.upcard(), Some(Card::new(Suit::Hearts, Rank::Ace)));
        assert_eq!(current, PlayerId::new(2));
        assert_eq!(state.player, current);
        assert_eq!(state.phase, Phase::BidRoundOne);
        assert_eq!(state.hand.len(), 5);
        assert_eq!(ids(&state.legal_actions), ["pass", "pick"]);
    }

    #[test]
    fn test_not_started() {
        let mut game = EuchreGame::new(EuchreConfig::new()).unwrap();
        assert!(game.get_legal_actions().is_empty());
        assert!(!game.is_over());
        assert_eq!(game.step(Action::Pass), Err(EuchreError::NotStarted));
        assert_eq!(game.get_state(PlayerId::new(0)), Err(EuchreError::NotStarted));
    }

    #[test]
    fn test_invalid_config() {
        assert_eq!(
            EuchreGame::new(EuchreConfig::new().with_dealer(4)).unwrap_err(),
            EuchreError::InvalidDealer(4)
        );
        assert!(matches!(
            EuchreGame::new(EuchreConfig::new().with_custom_deck(["H9"])),
            Err(EuchreError::Deck(_))
        ));
    }

    #[test]
    fn test_pick_gives_dealer_six_then_discard() {
        let mut game = scripted(1);
        act(&mut game, "pass");
        act(&mut game, "pass");
        act(&mut game, "pass");
        act(&mut game, "pick");

        assert_eq!(game.trump(), Some(Suit::Hearts));
        assert_eq!(game.current_player(), Some(PlayerId::new(1)));
        let dealer_state = game.get_state(PlayerId::new(1)).unwrap();
        assert_eq!(dealer_state.hand.len(), 6);
        assert_eq!(dealer_state.calling_player, Some(PlayerId::new(1)));
        assert_eq!(dealer_state.upcard_disposition, UpcardDisposition::PickedUp);
        assert_eq!(
            ids(&dealer_state.legal_actions),
            ["discard-HA", "discard-DK", "discard-DQ", "discard-DJ", "discard-DT", "discard-D9"]
        );

        act(&mut game, "discard-D9");
        assert_eq!(game.phase(), Some(Phase::Play));
        assert_eq!(game.current_player(), Some(PlayerId::new(2)));
        assert_eq!(game.get_state(PlayerId::new(1)).unwrap().hand.len(), 5);
    }

    #[test]
    fn test_second_round_call_skips_discard() {
        let mut game = scripted(1);
        for _ in 0..4 {
            act(&mut game, "pass");
        }
        assert_eq!(game.phase(), Some(Phase::BidRoundTwo));
        assert_eq!(ids(&game.get_legal_actions()), ["pass", "call-D", "call-S", "call-C"]);

        act(&mut game, "call-S");
        let state = game.get_state(PlayerId::new(2)).unwrap();
        assert_eq!(state.trump, Some(Suit::Spades));
        assert_eq!(state.calling_player, Some(PlayerId::new(2)));
        assert_eq!(state.turned_down, Some(Suit::Hearts));
        assert_eq!(state.phase, Phase::Play);
        assert_eq!(state.current_player, PlayerId::new(2));
        assert!(game
            .get_state(PlayerId::new(1))
            .unwrap()
            .hand
            .iter()
            .all(|c| c.suit == Suit::Diamonds));
    }

    #[test]
    fn test_dealer_is_stuck() {
        let mut game = scripted(1);
        for _ in 0..7 {
            act(&mut game, "pass");
        }
        assert_eq!(game.current_player(), Some(PlayerId::new(1)));
        assert_eq!(ids(&game.get_legal_actions()), ["call-D", "call-S", "call-C"]);

        let err = game.step(Action::Pass).unwrap_err();
        assert_eq!(
            err,
            EuchreError::InvalidAction(InvalidActionError::NotLegal {
                action: Action::Pass,
                player: PlayerId::new(1),
                phase: Phase::BidRoundTwo,
            })
        );
        assert_eq!(game.current_player(), Some(PlayerId::new(1)));
    }

    #[test]
    fn test_left_bower_must_follow_trump_lead() {
        let mut game = scripted(1);
        for id in ["pass", "pass", "pass", "pick", "discard-D9", "HJ", "C9", "S9"] {
            act(&mut game, id);
        }
        // Hearts led and trump: the jack of diamonds follows as the left bower.
        let legal = game.get_legal_actions();
        assert_eq!(ids(&legal), ["HA", "DJ"]);
    }

    #[test]
    fn test_step_back_restores_previous_state() {
        let mut game = scripted(1);
        act(&mut game, "pass");
        let before = game.get_state(PlayerId::new(3)).unwrap();

        act(&mut game, "pick");
        assert_ne!(game.get_state(PlayerId::new(3)).unwrap(), before);

        assert!(game.step_back());
        assert_eq!(game.get_state(PlayerId::new(3)).unwrap(), before);
        assert_eq!(game.action_history().len(), 1);
        assert!(game.step_back());
        assert!(!game.step_back());
    }

    #[test]
    fn test_step_id_uses_ordinals() {
        let mut game = scripted(1);
        let (_, next) = game.step_id(Action::Pass.ordinal()).unwrap();
        assert_eq!(next, PlayerId::new(3));
        assert_eq!(
            game.step_id(77).unwrap_err(),
            EuchreError::InvalidAction(InvalidActionError::UnknownOrdinal(77))
        );
        assert_eq!(game.legal_action_ids(), vec![0, 1]);
    }

    #[test]
    fn test_tracked_cards_cover_the_deck() {
        let mut game = scripted(1);
        for id in ["pass", "pass", "pass", "pick", "discard-D9", "HJ", "C9"] {
            act(&mut game, id);
            let mut indices: Vec<usize> = game.tracked_cards().iter().map(|c| c.index()).collect();
            indices.sort_unstable();
            assert_eq!(indices, (0..24).collect::<Vec<_>>(), "after {id}");
        }
    }
}

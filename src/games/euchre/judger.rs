//! Trick and hand resolution.

use serde::{Deserialize, Serialize};

use crate::cards::{trick_strength, Card, Suit};
use crate::core::{PlayerId, PlayerMap, Team};

/// Tricks in a hand.
pub const TRICKS_PER_HAND: u8 = 5;

/// One card in the center and the seat that played it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrickPlay {
    pub player: PlayerId,
    pub card: Card,
}

/// Score of a finished hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandOutcome {
    /// Partnership that took the majority of tricks.
    pub winning_team: Team,
    /// 2 for a march, otherwise 1.
    pub points: i32,
    /// Tricks per partnership, indexed `[EvenSeats, OddSeats]`.
    pub team_tricks: [u8; 2],
    /// Partnership that named trump, if known.
    pub calling_team: Option<Team>,
}

impl HandOutcome {
    /// Tricks taken by a partnership.
    #[must_use]
    pub fn tricks(&self, team: Team) -> u8 {
        match team {
            Team::EvenSeats => self.team_tricks[0],
            Team::OddSeats => self.team_tricks[1],
        }
    }

    /// All five tricks went to one side.
    #[must_use]
    pub fn is_march(&self) -> bool {
        self.tricks(self.winning_team) == TRICKS_PER_HAND
    }

    /// The calling side failed to take three tricks.
    ///
    /// Reported for observers only; it does not change `points`.
    #[must_use]
    pub fn is_euchre(&self) -> bool {
        self.calling_team
            .is_some_and(|team| team != self.winning_team)
    }

    /// Signed result per seat: `+points` for the winners, `-points` otherwise.
    #[must_use]
    pub fn payoffs(&self) -> PlayerMap<i32> {
        PlayerMap::new(|p| {
            if self.winning_team.contains(p) {
                self.points
            } else {
                -self.points
            }
        })
    }
}

/// Winner of a trick.
///
/// Cards whose effective suit is neither trump nor the led suit cannot win.
/// Highest trump wins if any was played, otherwise the highest card of the
/// led suit. Returns `None` for an empty trick.
#[must_use]
pub fn judge_trick(plays: &[TrickPlay], trump: Suit, lead: Suit) -> Option<PlayerId> {
    plays
        .iter()
        .max_by_key(|play| trick_strength(play.card, trump, lead))
        .map(|play| play.player)
}

/// Score a finished hand from per-seat trick counts.
#[must_use]
pub fn judge_hand(tricks_won: &PlayerMap<u8>, calling_player: Option<PlayerId>) -> HandOutcome {
    let mut team_tricks = [0u8; 2];
    for (player, &tricks) in tricks_won.iter() {
        match player.team() {
            Team::EvenSeats => team_tricks[0] += tricks,
            Team::OddSeats => team_tricks[1] += tricks,
        }
    }

    let winning_team = if team_tricks[0] > team_tricks[1] {
        Team::EvenSeats
    } else {
        Team::OddSeats
    };
    let points = if team_tricks.contains(&TRICKS_PER_HAND) { 2 } else { 1 };

    HandOutcome {
        winning_team,
        points,
        team_tricks,
        calling_team: calling_player.map(PlayerId::team),
    }
}

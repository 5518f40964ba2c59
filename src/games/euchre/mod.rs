//! Four-player partnership Euchre, one hand at a time.
//!
//! Seats 0 and 2 partner against seats 1 and 3. A hand runs:
//! - Deal five cards each, turn up the upcard
//! - First bidding round: order the upcard up (`pick`) or `pass`
//! - Dealer discards if the upcard was picked up
//! - Second bidding round: `call` any other suit; the dealer may not pass
//! - Five tricks, follow suit when able, bowers count as trump
//! - Majority side scores 1, or 2 for all five tricks
//!
//! `EuchreGame` is the entry point; the other types are the pieces it is
//! built from.

mod dealer;
mod game;
mod judger;
mod player;
mod state;

pub use dealer::{Dealer, HAND_SIZE};
pub use game::EuchreGame;
pub use judger::{judge_hand, judge_trick, HandOutcome, TrickPlay, TRICKS_PER_HAND};
pub use player::{Hand, Player};
pub use state::{EuchreState, Phase, UpcardDisposition};

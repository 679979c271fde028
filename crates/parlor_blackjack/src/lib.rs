//! Blackjack against a dealer bot.
//!
//! Cards are drawn with replacement from an infinite shoe: every draw picks
//! a rank uniformly from the 13 ranks. The dealer hits below 17 and stands
//! on any 17, soft or hard.
//!
//! A round is a typestate machine:
//!
//! ```text
//! Dealing ──deal──▶ PlayerTurn ──stand──▶ DealerTurn ──play_out──▶ Resolved
//!                     │  ▲                                            ▲
//!                     └──┘ hit                                        │
//!                     └──────────────── hit (bust) ───────────────────┘
//! ```
//!
//! ```
//! use parlor_blackjack::{HitResult, Round};
//! use parlor_core::GameRng;
//!
//! let mut rng = GameRng::new(7);
//! let round = Round::new().deal(&mut rng);
//! let resolved = match round.hit(&mut rng) {
//!     HitResult::Playing(round) => round.stand().play_out(&mut rng),
//!     HitResult::Busted(resolved) => resolved,
//! };
//! println!("{}", resolved.outcome());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod card;
mod dealer;
mod hand;
mod round;
mod score;

pub use card::{Card, Rank, draw_card};
pub use dealer::{DEALER_STANDS_ON, dealer_play};
pub use hand::{BLACKJACK, Hand, hand_total};
pub use round::{
    DealerTurn, Dealing, HitResult, PlayerTurn, Resolved, Round, RoundOutcome, resolve_round,
};
pub use score::BlackjackScore;

//! Rock, paper, scissors.
//!
//! [`pick`] draws the computer's throw from an injected
//! [`RandomSource`](parlor_core::RandomSource); [`resolve`] compares two
//! throws with the fixed beats relation.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod choice;
mod rules;
mod score;

pub use choice::{Choice, pick};
pub use rules::{Outcome, resolve};
pub use score::RpsScore;

//! Shared plumbing for the parlor games.
//!
//! The rule engines never reach for a global random number generator.
//! Every draw goes through [`RandomSource`], so a game can be driven by a
//! seeded [`GameRng`] during play or by a [`ScriptedSource`] under test.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod random;

pub use random::{GameRng, RandomSource, ScriptedSource};

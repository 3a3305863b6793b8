//! Score and result computation for club fixtures.
//!
//! Everything here is a pure function of its arguments: callers fetch game
//! records and official per-quarter score entries elsewhere, then ask this
//! crate what the score and result of a game is from a given point of view.
//! Inconsistent data degrades to a less-authoritative source or to an
//! invalid result, never to an error.

pub mod display;
pub mod fixture;
pub mod perspective;
pub mod sample;
pub mod score;
pub mod win_rate;

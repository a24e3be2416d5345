//! Othello Engine Implementations
//!
//! Automated players built on `othello_core`:
//! - [`greedy`]: one-ply greedy engine that maximises the mover's immediate
//!   piece gain, ties going to the first move in row-major order
//! - [`selfplay`]: plays the greedy engine against itself to the end
//!
//! Engines only read a `&Game`. The caller feeds the chosen move back into
//! `Game::apply_move`.

pub mod greedy;
pub mod selfplay;

#[cfg(feature = "python")]
pub mod bindings;

pub use greedy::compute_move as compute_move_greedy;
pub use greedy::compute_move_scores as compute_move_scores_greedy;
pub use selfplay::{play_out, MatchRecord, PlyRecord, SelfPlayError};

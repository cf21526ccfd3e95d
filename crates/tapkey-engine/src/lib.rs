//! Typing-correction engine for soft-keyboard input.
//!
//! The engine consumes a noisy tap sequence (each tap carrying keyboard
//! proximity information) and scores dictionary words as corrections of it.
//! The dictionary walk and the correction bookkeeping advance in lockstep:
//! at every trie edge the engine decides whether to consume a tap, skip the
//! candidate character, or abandon the branch, and on a terminal edge it
//! turns the accumulated state into a frequency-weighted score.
//!
//! - [`proximity`] -- the proximity-info collaborator trait and the
//!   keyboard-grid implementation of it
//! - [`corrector`] -- the per-session traversal co-evaluator and the
//!   ranking algorithm
//! - [`editdist`] -- Damerau-Levenshtein kernel over folded characters
//! - [`suggest`] -- the trie walker driving the co-evaluator, and the
//!   suggestion pool
//! - [`tuning`] -- promotion/demotion rate configuration

pub mod corrector;
pub mod editdist;
pub mod proximity;
pub mod suggest;
pub mod tuning;

pub use corrector::{Candidate, Corrector, EdgeResult};
pub use proximity::grid::{GridInput, KeyGrid};
pub use proximity::ProximityInfo;
pub use suggest::{Suggester, Suggestion};
pub use tuning::Tuning;

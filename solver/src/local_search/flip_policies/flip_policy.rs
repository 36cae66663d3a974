use rand::Rng;

use crate::VarId;
use super::super::{LocalSearchParams, WalkState};

/// Chooses the next variable to flip during local search.
pub trait FlipPolicy {
    /// Returns the variable to flip, or `None` if no move is possible.
    ///
    /// With probability `p_random` the policy makes a random move instead of
    /// a greedy one.
    fn pick_flip<R: Rng + ?Sized>(&self, state: &WalkState, p_random: f64, rng: &mut R) -> Option<VarId>;

    /// Search budget used unless the caller provides one.
    fn default_params(&self) -> LocalSearchParams;
}

use std::collections::HashMap;

use super::distribution::WeightedDistribution;
use super::hold::Hold;

/// First-order Markov model over holds for a single difficulty grade.
///
/// # Responsibilities
/// - Accumulate the distribution of first holds
/// - Accumulate, for every hold, the distribution of the hold that follows it
///
/// # Invariants
/// - `starts` is non-empty once a non-empty route has been observed
/// - A hold has an entry in `transitions` only if it was followed by another hold
#[derive(Clone, Debug, Default)]
pub struct TransitionModel {
	starts: WeightedDistribution,
	transitions: HashMap<Hold, WeightedDistribution>,
	routes: usize,
}

impl TransitionModel {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds one route to the model.
	///
	/// The first hold feeds the start distribution and each consecutive pair
	/// feeds the transition table. An empty route is ignored.
	pub fn observe(&mut self, route: &[Hold]) {
		let Some(first) = route.first() else {
			return;
		};
		self.starts.observe(*first);

		for pair in route.windows(2) {
			self.transitions.entry(pair[0]).or_default().observe(pair[1]);
		}
		self.routes += 1;
	}

	pub fn start_distribution(&self) -> &WeightedDistribution {
		&self.starts
	}

	/// Successor distribution of `hold`, if it was ever followed by another hold.
	pub fn transitions_from(&self, hold: &Hold) -> Option<&WeightedDistribution> {
		self.transitions.get(hold)
	}

	/// Number of holds with at least one observed successor.
	pub fn transition_count(&self) -> usize {
		self.transitions.len()
	}

	/// Number of non-empty routes observed.
	pub fn route_count(&self) -> usize {
		self.routes
	}
}

use std::collections::HashMap;

use rand::Rng;

use super::hold::Hold;

/// One entry of a `WeightedDistribution`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeightedHold {
	pub hold: Hold,
	/// Number of times the hold was observed.
	pub count: u64,
	/// `count` divided by the distribution total.
	pub probability: f64,
}

/// Normalized frequency table over hold states.
///
/// Conceptually, this is the set of outgoing edges of a Markov chain node,
/// weighted by how often each successor was observed.
///
/// ## Invariants
/// - No two entries share the same hold
/// - Probabilities sum to 1 whenever the distribution is non-empty
/// - Entries keep first-observation order, which is the order used when sampling
#[derive(Clone, Debug, Default)]
pub struct WeightedDistribution {
	entries: Vec<WeightedHold>,
	/// Position of each hold in `entries`.
	index: HashMap<Hold, usize>,
	total: u64,
}

impl WeightedDistribution {
	pub fn new() -> Self {
		Self::default()
	}

	/// Records one observation of `hold` and renormalizes.
	///
	/// - If the hold already exists, its count is increased.
	/// - Otherwise, it is appended with an initial count of 1.
	pub fn observe(&mut self, hold: Hold) {
		match self.index.get(&hold) {
			Some(&i) => self.entries[i].count += 1,
			None => {
				self.index.insert(hold, self.entries.len());
				self.entries.push(WeightedHold { hold, count: 1, probability: 0.0 });
			}
		}
		self.total += 1;
		self.normalize();
	}

	fn normalize(&mut self) {
		let total = self.total as f64;
		for entry in &mut self.entries {
			entry.probability = entry.count as f64 / total;
		}
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Entries in sampling order.
	pub fn entries(&self) -> &[WeightedHold] {
		&self.entries
	}

	/// Probability of `hold`, or 0 if it was never observed.
	pub fn probability(&self, hold: &Hold) -> f64 {
		self.index.get(hold).map_or(0.0, |&i| self.entries[i].probability)
	}

	/// Draws a hold among the entries accepted by `accept`.
	///
	/// Roulette-wheel selection over the accepted entries, in stored order:
	/// a value is drawn in `[0, mass)` and the first entry whose cumulative
	/// probability reaches it is returned. If float rounding leaves the draw
	/// past every boundary, the last accepted entry is returned.
	///
	/// Returns `None` if no entry is accepted or the accepted mass is zero.
	pub fn sample_where<R, F>(&self, rng: &mut R, mut accept: F) -> Option<Hold>
	where
		R: Rng + ?Sized,
		F: FnMut(&Hold) -> bool,
	{
		let candidates: Vec<&WeightedHold> = self.entries.iter().filter(|e| accept(&e.hold)).collect();
		let last = candidates.last()?;

		let mass: f64 = candidates.iter().map(|e| e.probability).sum();
		if mass <= 0.0 {
			return None;
		}

		let r = rng.random::<f64>() * mass;
		let mut cumulative = 0.0;
		for entry in &candidates {
			cumulative += entry.probability;
			if r <= cumulative {
				return Some(entry.hold);
			}
		}

		Some(last.hold)
	}
}

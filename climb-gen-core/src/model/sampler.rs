use rand::Rng;

use super::distribution::WeightedDistribution;
use super::generation_config::ClimbConstraints;
use super::hold::{Hold, Role, RoleCounts};

/// Draws holds from a distribution, keeping only those that can extend the
/// partial route without breaking the climbing constraints.
#[derive(Clone, Copy, Debug)]
pub struct ConstrainedSampler<'a> {
	constraints: &'a ClimbConstraints,
}

impl<'a> ConstrainedSampler<'a> {
	pub fn new(constraints: &'a ClimbConstraints) -> Self {
		Self { constraints }
	}

	/// Samples the next hold for `partial_route`.
	///
	/// A candidate is kept only if:
	/// - its `y` is no more than `max_traverse_drop` below the last hold (or `y >= 0` on an empty route)
	/// - it is not a foothold above `foothold_max_y`
	/// - it would not exceed the start/finish cap
	/// - it stays within `max_wingspan` of an existing hold of the same paired role
	///
	/// Returns `None` when no candidate survives.
	pub fn sample<R: Rng + ?Sized>(
		&self,
		distribution: &WeightedDistribution,
		partial_route: &[Hold],
		role_counts: &RoleCounts,
		rng: &mut R,
	) -> Option<Hold> {
		distribution.sample_where(rng, |candidate| self.accepts(candidate, partial_route, role_counts))
	}

	/// Whether `candidate` may be appended to `partial_route`.
	pub fn accepts(&self, candidate: &Hold, partial_route: &[Hold], role_counts: &RoleCounts) -> bool {
		let floor = partial_route.last().map_or(0, |last| last.y - self.constraints.max_traverse_drop);
		if candidate.y < floor {
			return false;
		}

		match candidate.role {
			Role::Foothold => candidate.y <= self.constraints.foothold_max_y,
			Role::Start | Role::Finish => {
				if role_counts.get(candidate.role) >= self.constraints.max_paired_holds {
					return false;
				}
				self.is_valid_pair(candidate, partial_route)
			}
			Role::Intermediate => true,
		}
	}

	/// Checks the wingspan between `candidate` and every hold of the same role.
	fn is_valid_pair(&self, candidate: &Hold, partial_route: &[Hold]) -> bool {
		let mut same_role = partial_route.iter().filter(|h| h.role == candidate.role);
		debug_assert!(
			same_role.clone().count() < self.constraints.max_paired_holds,
			"paired-hold cap must be enforced before spacing"
		);
		same_role.all(|h| h.distance(candidate) <= self.constraints.max_wingspan)
	}

	/// Whether a move from `current` to `next` is physically reachable.
	///
	/// The distance must lie within `[min_reach, max_reach]` and the vertical
	/// change must not exceed `max_vertical_change`.
	pub fn is_valid_transition(&self, current: &Hold, next: &Hold) -> bool {
		let distance = current.distance(next);
		if distance < self.constraints.min_reach || distance > self.constraints.max_reach {
			return false;
		}
		(next.y - current.y).abs() <= self.constraints.max_vertical_change
	}
}

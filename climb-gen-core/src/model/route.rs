use serde::{Deserialize, Serialize};

use super::hold::{Hold, RoleCounts};

/// A complete generated climbing problem.
///
/// Holds are kept in generation order; consecutive holds are the sampled moves.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(transparent)]
pub struct Route {
	holds: Vec<Hold>,
}

impl Route {
	pub(crate) fn new(holds: Vec<Hold>) -> Self {
		Self { holds }
	}

	/// Holds in generation order.
	pub fn holds(&self) -> &[Hold] {
		&self.holds
	}

	/// Holds sorted bottom to top; holds at the same height keep generation order.
	pub fn bottom_to_top(&self) -> Vec<Hold> {
		let mut holds = self.holds.clone();
		holds.sort_by_key(|h| h.y);
		holds
	}

	pub fn len(&self) -> usize {
		self.holds.len()
	}

	pub fn is_empty(&self) -> bool {
		self.holds.is_empty()
	}

	pub fn role_counts(&self) -> RoleCounts {
		RoleCounts::of(&self.holds)
	}
}

impl From<Route> for Vec<Hold> {
	fn from(route: Route) -> Self {
		route.holds
	}
}

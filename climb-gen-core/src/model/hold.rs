use serde::{Deserialize, Serialize};
use std::fmt;

/// Functional role of a hold, serialized as its integer code.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "u8", into = "u8")]
pub enum Role {
	Start,
	Intermediate,
	Finish,
	Foothold,
}

impl Role {
	/// Integer code used by the training corpus and the frames grammar.
	pub fn code(self) -> u8 {
		match self {
			Role::Start => 5,
			Role::Intermediate => 6,
			Role::Finish => 7,
			Role::Foothold => 8,
		}
	}

	/// Display color name used by renderers.
	pub fn color(self) -> &'static str {
		match self {
			Role::Start => "green",
			Role::Intermediate => "blue",
			Role::Finish => "red",
			Role::Foothold => "pink",
		}
	}

	fn index(self) -> usize {
		(self.code() - 5) as usize
	}
}

impl TryFrom<u8> for Role {
	type Error = String;

	fn try_from(code: u8) -> Result<Self, Self::Error> {
		match code {
			5 => Ok(Role::Start),
			6 => Ok(Role::Intermediate),
			7 => Ok(Role::Finish),
			8 => Ok(Role::Foothold),
			other => Err(format!("unknown role code {}", other)),
		}
	}
}

impl From<Role> for u8 {
	fn from(role: Role) -> Self {
		role.code()
	}
}

impl fmt::Display for Role {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.color())
	}
}

/// A placement on the wall: board coordinates plus role.
///
/// Equality is exact on all three fields; this is the key used by every
/// distribution and by the transition table.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Hold {
	pub x: i32,
	pub y: i32,
	pub role: Role,
}

impl Hold {
	pub fn new(x: i32, y: i32, role: Role) -> Self {
		Self { x, y, role }
	}

	/// Straight-line distance between two holds, in board units.
	pub fn distance(&self, other: &Hold) -> f64 {
		let dx = (other.x - self.x) as f64;
		let dy = (other.y - self.y) as f64;
		dx.hypot(dy)
	}
}

/// Per-role tally for a route under construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RoleCounts {
	counts: [usize; 4],
}

impl RoleCounts {
	pub fn new() -> Self {
		Self::default()
	}

	/// Counts the roles of an existing hold sequence.
	pub fn of(holds: &[Hold]) -> Self {
		let mut counts = Self::new();
		for hold in holds {
			counts.record(hold.role);
		}
		counts
	}

	pub fn record(&mut self, role: Role) {
		self.counts[role.index()] += 1;
	}

	pub fn get(&self, role: Role) -> usize {
		self.counts[role.index()]
	}
}

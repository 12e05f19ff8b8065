//! Placement-code decoding.
//!
//! A frames string lists the holds of a stored route as repeated
//! `p<placement id>r<role code>` tokens, e.g. `p802r5p803r6`. Coordinates are
//! not part of the string and come from a `PlacementLookup`.

use std::collections::HashMap;
use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{ClimbGenError, Result};
use crate::io;
use crate::model::hold::{Hold, Role};

/// Resolves a placement id to board coordinates.
pub trait PlacementLookup {
	fn coordinates(&self, placement: u32) -> Option<(i32, i32)>;
}

/// In-memory placement table.
///
/// Serialized as a list of `{ "placement": id, "x": .., "y": .. }` objects.
#[derive(Clone, Debug, Default)]
pub struct PlacementTable {
	placements: HashMap<u32, (i32, i32)>,
}

#[derive(Serialize, Deserialize)]
struct PlacementRow {
	placement: u32,
	x: i32,
	y: i32,
}

impl PlacementTable {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&mut self, placement: u32, x: i32, y: i32) {
		self.placements.insert(placement, (x, y));
	}

	pub fn len(&self) -> usize {
		self.placements.len()
	}

	pub fn is_empty(&self) -> bool {
		self.placements.is_empty()
	}

	/// Loads a table from a JSON file.
	pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self> {
		let rows: Vec<PlacementRow> = serde_json::from_str(&io::read_file(path)?)?;
		let mut table = Self::new();
		for row in rows {
			table.insert(row.placement, row.x, row.y);
		}
		Ok(table)
	}
}

impl PlacementLookup for PlacementTable {
	fn coordinates(&self, placement: u32) -> Option<(i32, i32)> {
		self.placements.get(&placement).copied()
	}
}

/// A raw `(placement id, role code)` token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameToken {
	pub placement: u32,
	pub role_code: u8,
}

/// Reads the digits starting at `pos`, returning the number and the next position.
fn read_number<T: std::str::FromStr>(bytes: &[u8], pos: usize) -> Option<(T, usize)> {
	let len = bytes[pos..].iter().take_while(|b| b.is_ascii_digit()).count();
	if len == 0 {
		return None;
	}
	let digits = std::str::from_utf8(&bytes[pos..pos + len]).ok()?;
	Some((digits.parse().ok()?, pos + len))
}

/// Parses a frames string into tokens.
///
/// # Errors
/// Returns `MalformedFrames` unless the whole string is one or more `p<digits>r<digits>` tokens.
pub fn parse_frames(frames: &str) -> Result<Vec<FrameToken>> {
	let malformed = || ClimbGenError::MalformedFrames(frames.to_owned());
	let bytes = frames.as_bytes();
	let mut tokens = Vec::new();
	let mut pos = 0;

	while pos < bytes.len() {
		if bytes[pos] != b'p' {
			return Err(malformed());
		}
		let (placement, next) = read_number::<u32>(bytes, pos + 1).ok_or_else(malformed)?;
		if bytes.get(next) != Some(&b'r') {
			return Err(malformed());
		}
		let (role_code, next) = read_number::<u8>(bytes, next + 1).ok_or_else(malformed)?;
		tokens.push(FrameToken { placement, role_code });
		pos = next;
	}

	if tokens.is_empty() {
		return Err(malformed());
	}
	Ok(tokens)
}

/// Whether `frames` is a well-formed frames string.
pub fn validate_frames(frames: &str) -> bool {
	parse_frames(frames).is_ok()
}

/// Decodes a frames string into holds.
///
/// Tokens with an unknown role code or an unknown placement are skipped with
/// a warning.
///
/// # Errors
/// Returns `MalformedFrames` if the string itself is malformed.
pub fn decode_frames<L: PlacementLookup + ?Sized>(frames: &str, lookup: &L) -> Result<Vec<Hold>> {
	let mut holds = Vec::new();
	for token in parse_frames(frames)? {
		let role = match Role::try_from(token.role_code) {
			Ok(role) => role,
			Err(_) => {
				warn!("Invalid role code {} for placement {}", token.role_code, token.placement);
				continue;
			}
		};
		let Some((x, y)) = lookup.coordinates(token.placement) else {
			warn!("No coordinates found for placement {}", token.placement);
			continue;
		};
		holds.push(Hold::new(x, y, role));
	}
	Ok(holds)
}

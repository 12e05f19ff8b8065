use serde::Serialize;

use crate::corpus::TrainingRecord;

/// Inclusive coordinate range.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Range {
	pub min: i32,
	pub max: i32,
}

impl Range {
	fn extend(range: Option<Range>, value: i32) -> Option<Range> {
		Some(match range {
			Some(r) => Range { min: r.min.min(value), max: r.max.max(value) },
			None => Range { min: value, max: value },
		})
	}
}

/// Route length statistics (population standard deviation).
#[derive(Serialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct LengthStats {
	pub mean: f64,
	pub std: f64,
	pub min: usize,
	pub max: usize,
}

/// Summary of a training corpus.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct CorpusSummary {
	pub total_climbs: usize,
	/// Routes per difficulty, V-grades in numeric order first.
	pub grade_distribution: Vec<(String, usize)>,
	pub sequence_lengths: LengthStats,
	pub x_range: Option<Range>,
	pub y_range: Option<Range>,
}

/// Sort key for grade labels: `V<number>` by number, anything else after, by name.
fn grade_key(grade: &str) -> (u8, u32, &str) {
	match grade.strip_prefix('V').and_then(|n| n.parse::<u32>().ok()) {
		Some(n) => (0, n, grade),
		None => (1, 0, grade),
	}
}

/// Computes the corpus summary.
pub fn analyze(records: &[TrainingRecord]) -> CorpusSummary {
	if records.is_empty() {
		return CorpusSummary::default();
	}

	let mut grades: Vec<(String, usize)> = Vec::new();
	let mut x_range = None;
	let mut y_range = None;

	for record in records {
		match grades.iter_mut().find(|(grade, _)| *grade == record.difficulty) {
			Some((_, count)) => *count += 1,
			None => grades.push((record.difficulty.clone(), 1)),
		}
		for hold in &record.climb {
			x_range = Range::extend(x_range, hold.x);
			y_range = Range::extend(y_range, hold.y);
		}
	}
	grades.sort_by(|a, b| grade_key(&a.0).cmp(&grade_key(&b.0)));

	let lengths: Vec<usize> = records.iter().map(|r| r.climb.len()).collect();
	let n = lengths.len() as f64;
	let mean = lengths.iter().sum::<usize>() as f64 / n;
	let variance = lengths.iter().map(|&l| (l as f64 - mean).powi(2)).sum::<f64>() / n;

	CorpusSummary {
		total_climbs: records.len(),
		grade_distribution: grades,
		sequence_lengths: LengthStats {
			mean,
			std: variance.sqrt(),
			min: lengths.iter().copied().min().unwrap_or(0),
			max: lengths.iter().copied().max().unwrap_or(0),
		},
		x_range,
		y_range,
	}
}

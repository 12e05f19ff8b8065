mod common;

use std::fs;

use climb_gen_core::corpus::{TrainingRecord, load_corpus};
use climb_gen_core::frames::{PlacementTable, decode_frames};
use climb_gen_core::io::write_json;
use climb_gen_core::{ClimbGenError, ClimbModel, GenerationConfig, Generator, Hold, Role, Route};
use common::crossing_ladders;

#[test]
fn corpus_written_as_json_trains_a_generator() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("processed").join("climb_sequences.json");
	write_json(&path, &crossing_ladders("V5")).unwrap();

	let generator = Generator::from_corpus(&path, GenerationConfig::default()).unwrap();
	assert_eq!(generator.model().difficulties().collect::<Vec<_>>(), vec!["V5"]);
	assert!(generator.generate_seeded("V5", 1).unwrap().is_some());
}

#[test]
fn malformed_records_in_a_file_are_skipped() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("corpus.json");
	fs::write(
		&path,
		r#"[
			{"difficulty": "V0", "climb": [{"x": 0, "y": 4, "role": 5}, {"x": 8, "y": 20, "role": 7}]},
			{"difficulty": "V0", "climb": "p802r5"},
			{"grade": "V0", "climb": []}
		]"#,
	)
	.unwrap();

	let records = load_corpus(&path).unwrap();
	assert_eq!(
		records,
		vec![TrainingRecord::new("V0", vec![Hold::new(0, 4, Role::Start), Hold::new(8, 20, Role::Finish)])]
	);
}

#[test]
fn missing_corpus_file_is_an_io_error() {
	let dir = tempfile::tempdir().unwrap();
	let result = Generator::from_corpus(dir.path().join("absent.json"), GenerationConfig::default());
	assert!(matches!(result, Err(ClimbGenError::Io(_))));
}

#[test]
fn generated_routes_read_back_as_hold_records() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("route.json");
	let model = ClimbModel::from_records(&crossing_ladders("V5"));
	let generator = Generator::new(model, GenerationConfig::default()).unwrap();
	let route = generator.generate_seeded("V5", 11).unwrap().unwrap();

	write_json(&path, &route).unwrap();
	let text = fs::read_to_string(&path).unwrap();
	let holds: Vec<Hold> = serde_json::from_str(&text).unwrap();
	assert_eq!(holds, route.holds());

	let back: Route = serde_json::from_str(&text).unwrap();
	assert_eq!(back, route);
}

#[test]
fn placement_table_loads_from_json() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("placements.json");
	fs::write(&path, r#"[{"placement": 802, "x": -8, "y": 4}, {"placement": 803, "x": 0, "y": 20}]"#).unwrap();

	let table = PlacementTable::from_json(&path).unwrap();
	assert_eq!(table.len(), 2);
	let holds = decode_frames("p802r5p803r7", &table).unwrap();
	assert_eq!(holds, vec![Hold::new(-8, 4, Role::Start), Hold::new(0, 20, Role::Finish)]);
}

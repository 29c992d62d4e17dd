//! Edit scripts read from JSON, as produced by an external diff step.

use listpatch_primitives::{Address, Edit, Section};
use listpatch_surface::{RecordingSurface, SurfaceCall, UpdateList};
use pretty_assertions::assert_eq;

fn init_tracing() {
	let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

const SCRIPT: &str = r#"[
	{ "operation": { "op": "deletion" }, "destination": 2 },
	{ "operation": { "op": "insertion" }, "destination": 0 },
	{ "operation": { "op": "move", "origin": 5 }, "destination": 1 },
	{ "operation": { "op": "substitution" }, "destination": 4 }
]"#;

#[test]
fn json_script_round_trips_through_serde() {
	let edits: Vec<Edit> = serde_json::from_str(SCRIPT).unwrap();
	assert_eq!(
		edits,
		vec![
			Edit::deletion(2),
			Edit::insertion(0),
			Edit::moved(5, 1),
			Edit::substitution(4),
		]
	);
}

#[test]
fn json_script_drives_surface_in_order() {
	init_tracing();
	let edits: Vec<Edit> = serde_json::from_str(SCRIPT).unwrap();
	let mut surface = RecordingSurface::new();

	surface.update_list_in_section(&edits, Section(1), None).unwrap();

	let at = |row| Address::new(row, Section(1));
	assert_eq!(
		surface.take_calls(),
		vec![
			SurfaceCall::Begin,
			SurfaceCall::Delete(vec![at(2)]),
			SurfaceCall::Insert(vec![at(0)]),
			SurfaceCall::Reload(vec![at(4)]),
			SurfaceCall::Move {
				from: at(5),
				to: at(1),
			},
			SurfaceCall::End,
		]
	);
	assert!(surface.calls().is_empty());
}

#[test]
fn malformed_operation_is_rejected() {
	let bad = r#"[{ "operation": { "op": "move" }, "destination": 1 }]"#;
	assert!(serde_json::from_str::<Vec<Edit>>(bad).is_err());
}

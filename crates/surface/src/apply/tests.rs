use std::cell::{Cell, RefCell};

use listpatch_primitives::{Address, ClassifiedBatch, Edit, Section, classify, classify_flat};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::{BatchApplier, Completion, UpdateList, perform_batch};
use crate::error::{ApplyError, SurfaceFault};
use crate::options::{MoveStrategy, UpdateOptions};
use crate::recording::{RecordingSurface, SurfaceCall};
use crate::surface::ListSurface;

fn at(row: usize) -> Address {
	Address::flat(row)
}

fn in_section(row: usize, section: usize) -> Address {
	Address::new(row, Section(section))
}

/// A completion callback that records every flag it receives.
fn recorder(flags: &RefCell<Vec<bool>>) -> Option<Completion<'_>> {
	Some(Box::new(move |ok: bool| flags.borrow_mut().push(ok)))
}

#[test]
fn test_mixed_script_call_sequence() {
	let edits = [
		Edit::deletion(2),
		Edit::insertion(0),
		Edit::moved(5, 1),
		Edit::substitution(4),
	];
	let mut surface = RecordingSurface::new();

	surface.update_list(&edits, None).unwrap();

	assert_eq!(
		surface.calls(),
		&[
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
}

#[test]
fn test_empty_classes_are_skipped() {
	let mut surface = RecordingSurface::new();
	surface.update_list(&[Edit::substitution(1), Edit::substitution(3)], None).unwrap();

	assert_eq!(
		surface.calls(),
		&[SurfaceCall::Begin, SurfaceCall::Reload(vec![at(1), at(3)]), SurfaceCall::End]
	);
}

#[test]
fn test_one_move_call_per_move_in_order() {
	let mut surface = RecordingSurface::new();
	surface.update_list(&[Edit::moved(0, 2), Edit::moved(2, 0), Edit::moved(1, 1)], None).unwrap();

	let moves: Vec<_> = surface
		.calls()
		.iter()
		.filter_map(|call| match call {
			SurfaceCall::Move { from, to } => Some((from.row, to.row)),
			_ => None,
		})
		.collect();
	assert_eq!(moves, vec![(0, 2), (2, 0), (1, 1)]);
}

#[test]
fn test_empty_script_is_a_no_op() {
	let flags = RefCell::new(Vec::new());
	let mut surface = RecordingSurface::new();

	surface.update_list(&[], recorder(&flags)).unwrap();
	surface.update_list_in_section(&[], Section(2), recorder(&flags)).unwrap();

	assert!(surface.calls().is_empty());
	assert!(flags.borrow().is_empty());
}

#[test]
fn test_empty_script_completes_when_configured() {
	let flags = RefCell::new(Vec::new());
	let mut surface = RecordingSurface::new();
	let applier = BatchApplier::new(UpdateOptions::default().with_complete_on_empty(true));

	applier.update_list(&mut surface, &[], Section::default(), recorder(&flags)).unwrap();

	assert!(surface.calls().is_empty());
	assert_eq!(*flags.borrow(), vec![true]);
}

#[test]
fn test_apply_empty_batch_completes_immediately() {
	let flags = RefCell::new(Vec::new());
	let mut surface = RecordingSurface::new();

	BatchApplier::default()
		.apply(ClassifiedBatch::default(), &mut surface, recorder(&flags))
		.unwrap();

	assert!(surface.calls().is_empty());
	assert_eq!(*flags.borrow(), vec![true]);
}

#[test]
fn test_completion_fires_once_after_end() {
	let flags = RefCell::new(Vec::new());
	let mut surface = RecordingSurface::new();

	surface.update_list(&[Edit::insertion(0)], recorder(&flags)).unwrap();

	assert_eq!(*flags.borrow(), vec![true]);
	assert_eq!(surface.calls().last(), Some(&SurfaceCall::End));
}

#[test]
fn test_surface_fault_is_propagated() {
	let flags = RefCell::new(Vec::new());
	let mut surface = RecordingSurface::new().fail_with(SurfaceFault::UnbalancedEnd);

	let err = surface.update_list(&[Edit::deletion(0)], recorder(&flags)).unwrap_err();

	assert_eq!(err, ApplyError::Surface(SurfaceFault::UnbalancedEnd));
	assert_eq!(*flags.borrow(), vec![false]);
	assert_eq!(
		surface.calls(),
		&[SurfaceCall::Begin, SurfaceCall::Delete(vec![at(0)]), SurfaceCall::End]
	);
}

#[test]
fn test_sectioned_entry_point() {
	let mut surface = RecordingSurface::new();
	surface
		.update_list_in_section(&[Edit::insertion(3), Edit::moved(1, 0)], Section(4), None)
		.unwrap();

	assert_eq!(
		surface.calls(),
		&[
			SurfaceCall::Begin,
			SurfaceCall::Insert(vec![in_section(3, 4)]),
			SurfaceCall::Move {
				from: in_section(1, 4),
				to: in_section(0, 4),
			},
			SurfaceCall::End,
		]
	);
}

#[test]
fn test_delete_insert_strategy() {
	let mut surface = RecordingSurface::new();
	let options = UpdateOptions::default().with_moves(MoveStrategy::DeleteInsert);
	let applier = BatchApplier::new(options);

	applier
		.update_list(
			&mut surface,
			&[Edit::deletion(0), Edit::moved(4, 2)],
			Section::default(),
			None,
		)
		.unwrap();

	assert_eq!(
		surface.calls(),
		&[
			SurfaceCall::Begin,
			SurfaceCall::Delete(vec![at(0), at(4)]),
			SurfaceCall::Insert(vec![at(2)]),
			SurfaceCall::End,
		]
	);
}

#[test]
fn test_perform_batch_brackets_body() {
	let completed = Cell::new(0);
	let mut surface = RecordingSurface::new();

	perform_batch(
		&mut surface,
		|s| s.move_item(at(0), at(1)),
		Some(Box::new(|ok: bool| {
			assert!(ok);
			completed.set(completed.get() + 1);
		})),
	)
	.unwrap();

	assert_eq!(completed.get(), 1);
	assert_eq!(
		surface.calls(),
		&[
			SurfaceCall::Begin,
			SurfaceCall::Move {
				from: at(0),
				to: at(1),
			},
			SurfaceCall::End,
		]
	);
}

#[test]
fn test_open_batch_is_not_nested() {
	let flags = RefCell::new(Vec::new());
	let mut surface = RecordingSurface::new();
	surface.begin_updates();

	let err = surface.update_list(&[Edit::deletion(0)], recorder(&flags)).unwrap_err();

	assert_eq!(err, ApplyError::NestedBatch);
	assert_eq!(*flags.borrow(), vec![false]);
	assert_eq!(surface.calls(), &[SurfaceCall::Begin]);
	assert!(surface.in_batch());
}

#[test]
fn test_surface_used_through_trait_object() {
	let mut surface = RecordingSurface::new();
	let dyn_surface: &mut dyn ListSurface = &mut surface;

	dyn_surface.update_list(&[Edit::insertion(1)], None).unwrap();

	assert_eq!(surface.calls().len(), 3);
}

/// Position of the first call matching `pred`, if any.
fn position_of(calls: &[SurfaceCall], pred: impl Fn(&SurfaceCall) -> bool) -> Option<usize> {
	calls.iter().position(pred)
}

fn arb_edit() -> impl Strategy<Value = Edit> {
	prop_oneof![
		(0..32usize).prop_map(Edit::deletion),
		(0..32usize).prop_map(Edit::insertion),
		(0..32usize).prop_map(Edit::substitution),
		(0..32usize, 0..32usize).prop_map(|(o, d)| Edit::moved(o, d)),
	]
}

proptest! {
	/// Classes always reach the surface as deletions, insertions, reloads, moves.
	#[test]
	fn prop_call_order(edits in prop::collection::vec(arb_edit(), 1..30)) {
		let mut surface = RecordingSurface::new();
		surface.update_list(&edits, None).unwrap();
		let calls = surface.calls();

		prop_assert_eq!(calls.first(), Some(&SurfaceCall::Begin));
		prop_assert_eq!(calls.last(), Some(&SurfaceCall::End));

		let delete = position_of(calls, |c| matches!(c, SurfaceCall::Delete(_)));
		let insert = position_of(calls, |c| matches!(c, SurfaceCall::Insert(_)));
		let reload = position_of(calls, |c| matches!(c, SurfaceCall::Reload(_)));
		let first_move = position_of(calls, |c| matches!(c, SurfaceCall::Move { .. }));

		let order: Vec<usize> =
			[delete, insert, reload, first_move].into_iter().flatten().collect();
		prop_assert!(order.windows(2).all(|w| w[0] < w[1]));

		let moves = calls.iter().filter(|c| matches!(c, SurfaceCall::Move { .. })).count();
		prop_assert_eq!(moves, classify_flat(&edits).moves.len());
		prop_assert_eq!(calls.len(), 2 + order.len() - usize::from(first_move.is_some()) + moves);
	}

	/// The flat entry point issues the same calls as section 0.
	#[test]
	fn prop_flat_matches_section_zero(edits in prop::collection::vec(arb_edit(), 0..30)) {
		let mut flat = RecordingSurface::new();
		let mut sectioned = RecordingSurface::new();

		flat.update_list(&edits, None).unwrap();
		sectioned.update_list_in_section(&edits, Section(0), None).unwrap();

		prop_assert_eq!(flat.calls(), sectioned.calls());
	}

	/// Applying a pre-classified batch is the same as the entry point.
	#[test]
	fn prop_apply_matches_update_list(
		edits in prop::collection::vec(arb_edit(), 1..30),
		section in 0..4usize,
	) {
		let mut direct = RecordingSurface::new();
		let mut via_entry = RecordingSurface::new();
		let applier = BatchApplier::default();

		applier.apply(classify(&edits, Section(section)), &mut direct, None).unwrap();
		applier.update_list(&mut via_entry, &edits, Section(section), None).unwrap();

		prop_assert_eq!(direct.calls(), via_entry.calls());
	}
}

use std::cmp::Ordering;

use sciv_core::{SciVersion, SegmentId};

use crate::engine::Operation;
use crate::register::Reg;

use super::*;

fn ptr(segment: u16, offset: u32) -> Reg {
    Reg::new(SegmentId::new(segment), offset)
}

fn narrator() -> CallOrigin {
    CallOrigin::new("sq4", 1, 928).method("Narrator", "startText")
}

#[test]
fn origin_display() {
    assert_eq!(CallOrigin::default().to_string(), "<unknown origin>");
    assert!(CallOrigin::default().is_unknown());
    assert_eq!(
        narrator().to_string(),
        "Narrator::startText (game sq4, room 1, script 928)"
    );
    assert_eq!(
        CallOrigin::new("qfg1", 3, 55).method("", "").local_call(0x2c).to_string(),
        ":: (game qfg1, room 3, script 55, local call 002c)"
    );
}

#[test]
fn verdict_ordering() {
    assert_eq!(Verdict::GREATER.ordering(), Ordering::Greater);
    assert_eq!(Verdict::EQUAL.ordering(), Ordering::Equal);
    assert_eq!(Verdict::LESS.ordering(), Ordering::Less);
    assert_eq!(Verdict(0x8000).ordering(), Ordering::Less);
    assert_eq!(Verdict(0x7FFF).reg(), Reg::number(0x7FFF));
}

#[test]
fn entry_wildcards() {
    let entry = WorkaroundEntry::new(Operation::Addition, 928, 0);
    assert!(entry.matches(&narrator(), Operation::Addition));
    assert!(!entry.matches(&narrator(), Operation::Subtraction));
    assert!(!entry.matches(&CallOrigin::new("sq4", 1, 929), Operation::Addition));
}

#[test]
fn entry_constraints() {
    let entry = WorkaroundEntry {
        game: Some("sq4".into()),
        room: Some(1),
        object: Some("Narrator".into()),
        method: Some("startText".into()),
        ..WorkaroundEntry::new(Operation::Addition, 928, 0)
    };
    assert!(entry.matches(&narrator(), Operation::Addition));

    let other_game = CallOrigin::new("sq5", 1, 928).method("Narrator", "startText");
    assert!(!entry.matches(&other_game, Operation::Addition));

    let other_method = CallOrigin::new("sq4", 1, 928).method("Narrator", "dispose");
    assert!(!entry.matches(&other_method, Operation::Addition));

    let local = WorkaroundEntry {
        local_call_offset: Some(0x40),
        ..WorkaroundEntry::new(Operation::Addition, 928, 0)
    };
    assert!(!local.matches(&narrator(), Operation::Addition));
    assert!(local.matches(&narrator().local_call(0x40), Operation::Addition));
}

#[test]
fn entry_verdict_is_sign_preserving() {
    assert_eq!(WorkaroundEntry::new(Operation::Comparison, 1, -1).verdict(), Verdict::LESS);
    assert_eq!(WorkaroundEntry::new(Operation::Comparison, 1, 1).verdict(), Verdict::GREATER);
}

#[test]
fn table_first_match_wins() {
    let table: WorkaroundTable = [
        WorkaroundEntry::new(Operation::Addition, 928, 5),
        WorkaroundEntry::new(Operation::Addition, 928, 6),
        WorkaroundEntry::new(Operation::Addition, 12, 7),
    ]
    .into_iter()
    .collect();

    assert_eq!(table.len(), 3);
    assert!(!table.is_empty());
    assert_eq!(
        table.lookup(&narrator(), Operation::Addition, ptr(5, 0), Reg::NULL),
        Some(Verdict(5))
    );
    assert_eq!(
        table.lookup(&CallOrigin::new("kq6", 0, 12), Operation::Addition, ptr(5, 0), Reg::NULL),
        Some(Verdict(7))
    );
    assert_eq!(
        table.lookup(&CallOrigin::new("kq6", 0, 13), Operation::Addition, ptr(5, 0), Reg::NULL),
        None
    );
}

#[test]
fn table_entries_keep_insertion_order() {
    let mut table = WorkaroundTable::new();
    table.insert(WorkaroundEntry::new(Operation::Division, 3, 0));
    table.insert(WorkaroundEntry::new(Operation::Modulo, 1, 0));
    table.insert(WorkaroundEntry::new(Operation::Addition, 3, 0));

    let ops: Vec<_> = table.entries().map(|e| e.operation).collect();
    assert_eq!(
        ops,
        [Operation::Division, Operation::Addition, Operation::Modulo]
    );
}

#[test]
fn builtin_object_reference_rule() {
    assert_eq!(WorkaroundTable::builtin(SciVersion::Sci0Early).object_reference_test(), Some(2000));
    assert_eq!(WorkaroundTable::builtin(SciVersion::Sci11).object_reference_test(), Some(2000));
    assert_eq!(WorkaroundTable::builtin(SciVersion::Sci2).object_reference_test(), None);
    assert!(WorkaroundTable::builtin(SciVersion::Sci11).is_empty());

    let table = WorkaroundTable::builtin(SciVersion::Sci1Middle);
    let any = CallOrigin::default();
    assert_eq!(
        table.lookup(&any, Operation::Comparison, ptr(5, 10), Reg::number(3)),
        Some(Verdict::GREATER)
    );
    assert_eq!(
        table.lookup(&any, Operation::Comparison, Reg::number(2000), ptr(5, 10)),
        Some(Verdict::LESS)
    );
    assert_eq!(
        table.lookup(&any, Operation::Comparison, ptr(5, 10), Reg::number(2001)),
        None
    );
    // only comparisons
    assert_eq!(
        table.lookup(&any, Operation::Addition, ptr(5, 10), Reg::number(3)),
        None
    );
}

#[test]
fn custom_object_reference_limit() {
    let table = WorkaroundTable::new().with_object_reference_test(Some(10));
    let any = CallOrigin::default();
    assert_eq!(
        table.lookup(&any, Operation::Comparison, ptr(5, 0), Reg::number(10)),
        Some(Verdict::GREATER)
    );
    assert_eq!(
        table.lookup(&any, Operation::Comparison, ptr(5, 0), Reg::number(11)),
        None
    );
}

#[test]
fn no_workarounds_and_references() {
    let any = CallOrigin::default();
    assert_eq!(
        NoWorkarounds.lookup(&any, Operation::Comparison, ptr(5, 0), Reg::NULL),
        None
    );

    let table = WorkaroundTable::builtin(SciVersion::Sci0Late);
    let by_ref = &table;
    assert_eq!(
        by_ref.lookup(&any, Operation::Comparison, ptr(5, 0), Reg::NULL),
        Some(Verdict::GREATER)
    );
}

use super::*;

#[test]
fn reserved_ids() {
    assert!(SegmentId::NUMBER.is_number());
    assert!(!SegmentId::NUMBER.is_heap());
    assert!(SegmentId::UNINITIALIZED.is_uninitialized());
    assert!(!SegmentId::UNINITIALIZED.is_heap());
    assert_eq!(SegmentId::UNINITIALIZED.get(), UNINITIALIZED_SEGMENT);
    assert!(SegmentId::new(1).is_heap());
    assert!(SegmentId::new(0x1FFE).is_heap());
}

#[test]
fn display_masks_to_segment_bits() {
    assert_eq!(SegmentId::new(0x0005).to_string(), "0005");
    assert_eq!(SegmentId::new(0xC005).to_string(), "0005");
    assert_eq!(format!("{:?}", SegmentId::new(0x12)), "SegmentId(0012)");
}

#[test]
fn arithmetic_capable_kinds() {
    assert!(SegmentKind::Script.admits_pointer_arithmetic());
    assert!(SegmentKind::Locals.admits_pointer_arithmetic());
    assert!(SegmentKind::Stack.admits_pointer_arithmetic());
    assert!(SegmentKind::DynMem.admits_pointer_arithmetic());
    assert!(!SegmentKind::Clones.admits_pointer_arithmetic());
    assert!(!SegmentKind::Lists.admits_pointer_arithmetic());
    assert!(!SegmentKind::Hunk.admits_pointer_arithmetic());
    assert!(!SegmentKind::Array.admits_pointer_arithmetic());
}

#[test]
fn segment_map_liveness() {
    let mut map = SegmentMap::new();
    assert!(map.is_empty());

    map.insert(SegmentId::new(3), SegmentKind::Script);
    assert!(map.is_live(SegmentId::new(3)));
    assert_eq!(map.kind(SegmentId::new(3)), Some(SegmentKind::Script));
    assert!(!map.is_live(SegmentId::new(4)));

    assert_eq!(map.remove(SegmentId::new(3)), Some(SegmentKind::Script));
    assert!(!map.is_live(SegmentId::new(3)));
}

#[test]
fn segment_map_ignores_reserved_ids() {
    let mut map = SegmentMap::new();
    assert_eq!(map.insert(SegmentId::NUMBER, SegmentKind::Stack), None);
    assert_eq!(map.insert(SegmentId::UNINITIALIZED, SegmentKind::Stack), None);
    assert!(map.is_empty());
    assert!(!map.is_live(SegmentId::NUMBER));
}

#[test]
fn segment_map_from_iter() {
    let map: SegmentMap = [
        (SegmentId::new(1), SegmentKind::Stack),
        (SegmentId::new(2), SegmentKind::Locals),
    ]
    .into_iter()
    .collect();

    assert_eq!(map.len(), 2);
    assert_eq!(map.kind(SegmentId::new(2)), Some(SegmentKind::Locals));
}

#[test]
fn table_through_reference() {
    fn live<T: SegmentTable>(table: T, id: SegmentId) -> bool {
        table.is_live(id)
    }

    let map: SegmentMap = [(SegmentId::new(9), SegmentKind::Nodes)].into_iter().collect();
    assert!(live(&map, SegmentId::new(9)));
    assert!(!live(NoSegments, SegmentId::new(9)));
}

#[test]
fn segment_id_serializes_as_number() {
    let json = serde_json::to_string(&SegmentId::new(42)).unwrap();
    assert_eq!(json, "42");
    let back: SegmentId = serde_json::from_str("42").unwrap();
    assert_eq!(back, SegmentId::new(42));
}

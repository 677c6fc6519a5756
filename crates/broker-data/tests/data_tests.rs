/// Behavioral tests for the value model: construction, tag precedence,
/// compound ordering, record absence semantics and canonical tables.
use std::collections::{BTreeMap, HashMap};

use broker_data::{AsciiFormat, Data, DataError, Record, Set, Table, Tag, Vector};

fn ints(values: &[i64]) -> Data {
    Data::from(values.iter().copied().map(Data::from).collect::<Vector>())
}

// ============================================================================
// Scalar construction
// ============================================================================

#[test]
fn scalar_round_trip_keeps_kind_and_value() {
    let b = Data::new(true);
    assert_eq!((b.tag(), b.as_bool()), (Tag::Boolean, Some(true)));

    let i = Data::new(-5);
    assert_eq!((i.tag(), i.as_integer()), (Tag::Integer, Some(-5)));

    let c = Data::new(5u32);
    assert_eq!((c.tag(), c.as_count()), (Tag::Count, Some(5)));

    let r = Data::new(3.14);
    assert_eq!((r.tag(), r.as_real()), (Tag::Real, Some(3.14)));

    let s = Data::new("hi");
    assert_eq!((s.tag(), s.as_str()), (Tag::String, Some("hi")));
}

#[test]
fn try_from_reads_payload_back() {
    assert!(bool::try_from(Data::new(true)).unwrap());
    assert_eq!(u64::try_from(Data::new(9u8)).unwrap(), 9);
    let err = String::try_from(Data::new(1.0)).unwrap_err();
    assert_eq!(err.to_string(), "type mismatch: expected string, found real");
    assert!(matches!(err, DataError::TypeMismatch { .. }));
}

// ============================================================================
// Ordering
// ============================================================================

#[test]
fn integer_tag_precedes_count_regardless_of_magnitude() {
    assert!(Data::new(100i64) < Data::new(1u64));
    assert!(Data::new(i64::MAX) < Data::new(0u64));
}

#[test]
fn every_kind_orders_by_tag() {
    let one_of_each = [
        Data::new(true),
        Data::new(-1),
        Data::new(0u64),
        Data::new(0.0),
        Data::new(""),
        Data::new(Set::new()),
        Data::new(Table::new()),
        Data::new(Vector::new()),
        Data::new(Record::default()),
    ];
    for pair in one_of_each.windows(2) {
        assert!(pair[0] < pair[1], "{} should order before {}", pair[0], pair[1]);
    }
    let tags: Vec<Tag> = one_of_each.iter().map(Data::tag).collect();
    assert_eq!(tags, Tag::ALL.to_vec());
}

#[test]
fn vector_prefix_orders_first() {
    assert!(ints(&[1, 2]) < ints(&[1, 2, 3]));
}

#[test]
fn vector_order_is_lexicographic_not_length_first() {
    assert!(!(ints(&[1, 3]) < ints(&[1, 2, 9])));
    assert!(ints(&[1, 3]) > ints(&[1, 2, 9]));
}

#[test]
fn values_work_as_map_keys() {
    let mut by_value = BTreeMap::new();
    by_value.insert(ints(&[2]), "two");
    by_value.insert(Data::new("key"), "string");
    by_value.insert(ints(&[1]), "one");
    let order: Vec<&str> = by_value.values().copied().collect();
    assert_eq!(order, vec!["string", "one", "two"]);

    let mut hashed = HashMap::new();
    hashed.insert(ints(&[1, 2]), 1);
    assert_eq!(hashed.get(&ints(&[1, 2])), Some(&1));
    assert_eq!(hashed.get(&ints(&[2, 1])), None);
}

// ============================================================================
// Records
// ============================================================================

#[test]
fn record_absence_semantics() {
    let r = Record::new(vec![Some(Data::new(1)), None]);
    assert_eq!(r.get(0), Some(&Data::new(1)));
    assert_eq!(r.get(1), None);
    assert_eq!(r.get(2), None);
}

#[test]
fn records_with_absent_fields_are_hashable_keys() {
    let a = Data::new(Record::new(vec![None, Some(Data::new("x"))]));
    let b = Data::new(Record::new(vec![None, Some(Data::new("x"))]));
    assert_eq!(a, b);
    assert_eq!(a.hash_code(), b.hash_code());
}

// ============================================================================
// Canonical tables and sets
// ============================================================================

#[test]
fn table_iterates_in_key_order_regardless_of_insertion() {
    let keys = [5u64, 1, 3, 2, 4];
    let mut forward = Table::new();
    for k in keys {
        forward.insert(Data::new(k), Data::new(k * 10));
    }
    let mut backward = Table::new();
    for k in keys.iter().rev() {
        backward.insert(Data::new(*k), Data::new(k * 10));
    }

    let seen: Vec<u64> = forward.keys().filter_map(Data::as_count).collect();
    assert_eq!(seen, vec![1, 2, 3, 4, 5]);

    let (forward, backward) = (Data::new(forward), Data::new(backward));
    assert_eq!(forward, backward);
    assert_eq!(forward.hash_code(), backward.hash_code());
}

#[test]
fn set_deduplicates_equal_values() {
    let s: Set = [ints(&[1]), ints(&[1]), Data::new(1), Data::new(1u64)]
        .into_iter()
        .collect();
    assert_eq!(s.len(), 3);
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn display_and_ascii_agree_on_structure() {
    let row = Record::new(vec![
        Some(Data::new("conn")),
        None,
        Some(ints(&[1, 2])),
        Some(Data::new(Vector::new())),
    ]);
    assert_eq!(row.to_string(), r#"("conn", nil, [1, 2], [])"#);
    assert_eq!(
        AsciiFormat::default().render_row(&row),
        "conn\t-\t1,2\t(empty)"
    );
}

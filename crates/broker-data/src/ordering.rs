//! Total order over all values.
//!
//! Values of different kinds compare by [`Tag`](crate::Tag) alone. Values of
//! the same scalar kind use the payload's natural order (reals through
//! `f64::total_cmp`, so NaN and signed zero stay well-ordered). Compounds
//! compare lexicographically over their canonical children, a strict prefix
//! ordering first; in records an absent field orders before any present one.
//!
//! [`compare`] keeps pending child iterators on an explicit stack, so
//! adversarially deep inputs cannot exhaust the call stack.
//!
//! ```
//! use broker_data::Data;
//!
//! assert!(Data::from(100i64) < Data::from(1u64));
//! assert!(Data::from(vec![Data::from(1), Data::from(3)])
//!     > Data::from(vec![Data::from(1), Data::from(2), Data::from(9)]));
//! ```

use std::cmp::Ordering;

use crate::data::Data;
use crate::record::Record;
use crate::walk::{Children, Node};

/// Compare two values under the canonical total order.
pub fn compare(lhs: &Data, rhs: &Data) -> Ordering {
    compare_from(Some((Node::Present(lhs), Node::Present(rhs))), Vec::new())
}

/// Compare two records field by field under the same rules as [`compare`].
pub fn compare_records(lhs: &Record, rhs: &Record) -> Ordering {
    let fields = (
        Children::Record(lhs.field_slice().iter()),
        Children::Record(rhs.field_slice().iter()),
    );
    compare_from(None, vec![fields])
}

fn compare_from<'a>(
    mut pending: Option<(Node<'a>, Node<'a>)>,
    mut stack: Vec<(Children<'a>, Children<'a>)>,
) -> Ordering {
    loop {
        if let Some((l, r)) = pending.take() {
            match compare_nodes(l, r) {
                Step::Settled(Ordering::Equal) => {}
                Step::Settled(ord) => return ord,
                Step::Descend(lc, rc) => stack.push((lc, rc)),
            }
        }

        let Some((lc, rc)) = stack.last_mut() else {
            return Ordering::Equal;
        };
        match (lc.next(), rc.next()) {
            (None, None) => {
                stack.pop();
            }
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) => pending = Some((l, r)),
        }
    }
}

enum Step<'a> {
    Settled(Ordering),
    Descend(Children<'a>, Children<'a>),
}

fn compare_nodes<'a>(lhs: Node<'a>, rhs: Node<'a>) -> Step<'a> {
    let (l, r) = match (lhs, rhs) {
        (Node::Absent, Node::Absent) => return Step::Settled(Ordering::Equal),
        (Node::Absent, Node::Present(_)) => return Step::Settled(Ordering::Less),
        (Node::Present(_), Node::Absent) => return Step::Settled(Ordering::Greater),
        (Node::Present(l), Node::Present(r)) => (l, r),
    };

    let by_tag = l.tag().cmp(&r.tag());
    if by_tag != Ordering::Equal {
        return Step::Settled(by_tag);
    }

    match (l, r) {
        (Data::Boolean(a), Data::Boolean(b)) => Step::Settled(a.cmp(b)),
        (Data::Integer(a), Data::Integer(b)) => Step::Settled(a.cmp(b)),
        (Data::Count(a), Data::Count(b)) => Step::Settled(a.cmp(b)),
        (Data::Real(a), Data::Real(b)) => Step::Settled(a.total_cmp(b)),
        (Data::String(a), Data::String(b)) => Step::Settled(a.as_bytes().cmp(b.as_bytes())),
        _ => match (Children::of(l), Children::of(r)) {
            (Some(lc), Some(rc)) => Step::Descend(lc, rc),
            _ => Step::Settled(Ordering::Equal),
        },
    }
}

impl PartialEq for Data {
    fn eq(&self, other: &Self) -> bool {
        compare(self, other) == Ordering::Equal
    }
}

impl Eq for Data {}

impl PartialOrd for Data {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Data {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        compare_records(self, other) == Ordering::Equal
    }
}

impl Eq for Record {}

impl PartialOrd for Record {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Record {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_records(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Set, Table};

    fn int(n: i64) -> Data {
        Data::Integer(n)
    }

    #[test]
    fn tag_settles_cross_kind_comparison() {
        assert_eq!(compare(&Data::Integer(100), &Data::Count(1)), Ordering::Less);
        assert_eq!(compare(&Data::Boolean(true), &Data::Integer(i64::MIN)), Ordering::Less);
        assert_eq!(
            compare(&Data::Vector(vec![]), &Data::Table(Table::new())),
            Ordering::Greater
        );
    }

    #[test]
    fn booleans_order_false_first() {
        assert!(Data::Boolean(false) < Data::Boolean(true));
    }

    #[test]
    fn strings_compare_bytewise() {
        assert!(Data::String("B".into()) < Data::String("a".into()));
        assert!(Data::String("ab".into()) < Data::String("abc".into()));
    }

    #[test]
    fn reals_are_totally_ordered() {
        assert!(Data::Real(-1.5) < Data::Real(0.0));
        assert!(Data::Real(-0.0) < Data::Real(0.0));
        assert_eq!(Data::Real(f64::NAN), Data::Real(f64::NAN));
        assert!(Data::Real(f64::INFINITY) < Data::Real(f64::NAN));
    }

    #[test]
    fn vector_prefix_orders_first() {
        let short = Data::Vector(vec![int(1), int(2)]);
        let long = Data::Vector(vec![int(1), int(2), int(3)]);
        assert!(short < long);
        assert!(Data::Vector(vec![]) < short);
    }

    #[test]
    fn vector_compares_elements_before_length() {
        let a = Data::Vector(vec![int(1), int(3)]);
        let b = Data::Vector(vec![int(1), int(2), int(9)]);
        assert!(a > b);
    }

    #[test]
    fn nested_compounds_compare_recursively() {
        let a = Data::Vector(vec![Data::Vector(vec![int(1)]), int(5)]);
        let b = Data::Vector(vec![Data::Vector(vec![int(1), int(0)]), int(0)]);
        assert!(a < b);
    }

    #[test]
    fn sets_compare_in_canonical_order() {
        let a: Set = [int(3), int(1)].into_iter().collect();
        let b: Set = [int(1), int(2), int(3)].into_iter().collect();
        assert!(Data::Set(a) > Data::Set(b));
    }

    #[test]
    fn tables_compare_keys_then_values() {
        let mut a = Table::new();
        a.insert(int(1), Data::String("z".into()));
        let mut b = Table::new();
        b.insert(int(1), Data::String("a".into()));
        b.insert(int(0), Data::String("a".into()));
        // b's first key is 0, which settles it before any value is seen.
        assert!(Data::Table(b.clone()) < Data::Table(a.clone()));
        b.remove(&int(0));
        assert!(Data::Table(b) < Data::Table(a));
    }

    #[test]
    fn absent_field_orders_before_any_value() {
        let absent = Record::new(vec![None]);
        let present = Record::new(vec![Some(Data::Boolean(false))]);
        assert!(absent < present);
        assert_eq!(Record::new(vec![None]), absent);
        assert!(Data::Record(absent) < Data::Record(present));
    }

    #[test]
    fn shorter_record_prefix_orders_first() {
        let a = Record::new(vec![Some(int(1))]);
        let b = Record::new(vec![Some(int(1)), None]);
        assert!(a < b);
        assert!(Data::Record(a) < Data::Record(b));
    }

    #[test]
    fn deep_nesting_compares_without_overflow() {
        let mut a = int(0);
        let mut b = int(1);
        for _ in 0..100_000 {
            a = Data::Vector(vec![a]);
            b = Data::Vector(vec![b]);
        }
        assert_eq!(compare(&a, &b), Ordering::Less);
        assert_eq!(compare(&a, &a), Ordering::Equal);
    }
}

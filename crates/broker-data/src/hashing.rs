//! Hashing consistent with value equality.
//!
//! Each node writes its tag byte and then its payload: scalars hash their
//! native representation (reals by bit pattern, matching the bitwise
//! equality the total order gives them), compounds write their length and
//! then their children in canonical order. Canonical ordering already
//! disambiguates permutations, so the fold is order-dependent. Absent
//! record fields write [`ABSENT`], a byte no tag uses.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::data::Data;
use crate::record::Record;
use crate::walk::{Children, Node};

/// Marker written for an absent record field.
const ABSENT: u8 = 0xff;

impl Hash for Data {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut stack = Vec::new();
        write_node(Node::Present(self), state, &mut stack);
        drain(state, stack);
    }
}

impl Hash for Record {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.size());
        drain(state, vec![Children::Record(self.field_slice().iter())]);
    }
}

impl Data {
    /// A standalone 64-bit hash of this value.
    ///
    /// Uses the std SipHash with fixed keys, so the result is stable within
    /// one build of the crate.
    pub fn hash_code(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

fn drain<'a, H: Hasher>(state: &mut H, mut stack: Vec<Children<'a>>) {
    while let Some(children) = stack.last_mut() {
        match children.next() {
            Some(node) => write_node(node, state, &mut stack),
            None => {
                stack.pop();
            }
        }
    }
}

fn write_node<'a, H: Hasher>(node: Node<'a>, state: &mut H, stack: &mut Vec<Children<'a>>) {
    let data = match node {
        Node::Absent => {
            state.write_u8(ABSENT);
            return;
        }
        Node::Present(data) => data,
    };

    state.write_u8(data.tag() as u8);
    match data {
        Data::Boolean(b) => b.hash(state),
        Data::Integer(n) => n.hash(state),
        Data::Count(n) => n.hash(state),
        Data::Real(x) => x.to_bits().hash(state),
        Data::String(s) => s.hash(state),
        Data::Set(s) => state.write_usize(s.len()),
        Data::Table(t) => state.write_usize(t.len()),
        Data::Vector(v) => state.write_usize(v.len()),
        Data::Record(r) => state.write_usize(r.size()),
    }
    if let Some(children) = Children::of(data) {
        stack.push(children);
    }
}

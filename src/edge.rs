//! Bidirected edges and their canonical orientation.
//!
//! A bidirected edge `(from, from_o, to, to_o)` connects an oriented node to another oriented node.
//! The same edge can also be written as its reverse complement `(to, flip(to_o), from, flip(from_o))`.
//! Both encodings are mapped to the same [`Edge`] by [`canonicalize`], which makes edge sets from different sources comparable.
//!
//! An edge with both ends in reverse orientation is replaced with its reverse complement.
//! If the orientations differ, the encoding starting from the smaller node id is canonical.
//! An edge with both ends in forward orientation is always canonical.

use gbwt::Orientation;

use sha2::Digest;
use sha2::digest;

use std::collections::BTreeSet;
use std::collections::btree_set;

//-----------------------------------------------------------------------------

/// Returns the other orientation.
pub fn flip(o: Orientation) -> Orientation {
    match o {
        Orientation::Forward => Orientation::Reverse,
        Orientation::Reverse => Orientation::Forward,
    }
}

/// Returns the orientation as a GFA orientation symbol `+` or `-`.
pub fn orientation_symbol(o: Orientation) -> char {
    match o {
        Orientation::Forward => '+',
        Orientation::Reverse => '-',
    }
}

/// Returns the canonical encoding of edge `(from, from_o)` to `(to, to_o)`.
///
/// An edge and its reverse complement always have the same canonical encoding.
pub fn canonicalize(from: usize, from_o: Orientation, to: usize, to_o: Orientation) -> Edge {
    let both_reverse = from_o == Orientation::Reverse && to_o == Orientation::Reverse;
    if both_reverse || (from_o != to_o && from > to) {
        Edge::new(to, flip(to_o), from, flip(from_o))
    } else {
        Edge::new(from, from_o, to, to_o)
    }
}

//-----------------------------------------------------------------------------

/// An edge from oriented node `(from, from_o)` to oriented node `(to, to_o)`.
///
/// The edge is stored as given.
/// Use [`Edge::canonical`] to get the canonical encoding.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Edge {
    pub from: usize,
    pub from_o: Orientation,
    pub to: usize,
    pub to_o: Orientation,
}

impl Edge {
    /// Creates a new edge without changing its encoding.
    pub fn new(from: usize, from_o: Orientation, to: usize, to_o: Orientation) -> Self {
        Edge { from, from_o, to, to_o }
    }

    /// Returns the same edge traversed in the other direction.
    pub fn reverse_complement(&self) -> Self {
        Edge::new(self.to, flip(self.to_o), self.from, flip(self.from_o))
    }

    /// Returns the canonical encoding of the edge.
    pub fn canonical(&self) -> Self {
        canonicalize(self.from, self.from_o, self.to, self.to_o)
    }

    /// Returns `true` if the edge is in the canonical encoding.
    pub fn is_canonical(&self) -> bool {
        self.canonical() == *self
    }

    /// Returns the edge as a GFA link line without overlap.
    ///
    /// The line ends with a newline.
    pub fn to_gfa_line(&self) -> String {
        format!(
            "L\t{}\t{}\t{}\t{}\n",
            self.from, orientation_symbol(self.from_o), self.to, orientation_symbol(self.to_o)
        )
    }
}

//-----------------------------------------------------------------------------

/// A set of canonical edges.
///
/// Edges are canonicalized on insertion, so an edge and its reverse complement are the same element.
/// Iteration is in sorted order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EdgeSet {
    edges: BTreeSet<Edge>,
}

impl EdgeSet {
    /// Creates an empty edge set.
    pub fn new() -> Self {
        EdgeSet::default()
    }

    /// Inserts the canonical encoding of the given edge.
    ///
    /// Returns `true` if the edge was not already present.
    pub fn insert(&mut self, edge: Edge) -> bool {
        self.edges.insert(edge.canonical())
    }

    /// Returns `true` if the set contains the edge in either encoding.
    pub fn contains(&self, edge: &Edge) -> bool {
        self.edges.contains(&edge.canonical())
    }

    /// Returns the number of distinct edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns an iterator over the canonical edges in sorted order.
    pub fn iter(&self) -> btree_set::Iter<'_, Edge> {
        self.edges.iter()
    }

    /// Returns `true` if both sets contain exactly the same edges.
    pub fn is_same(&self, other: &EdgeSet) -> bool {
        self == other
    }

    /// Computes the given hash of the GFA link lines of the edges in sorted order.
    ///
    /// Equal edge sets always have equal digests.
    pub fn digest<D: Digest>(&self) -> String
        where digest::Output<D>: core::fmt::LowerHex {
        let mut hasher = D::new();
        for edge in self {
            hasher.update(edge.to_gfa_line().as_bytes());
        }
        let hash = hasher.finalize();
        format!("{:x}", hash)
    }
}

impl Extend<Edge> for EdgeSet {
    fn extend<T: IntoIterator<Item = Edge>>(&mut self, iter: T) {
        for edge in iter {
            self.insert(edge);
        }
    }
}

impl FromIterator<Edge> for EdgeSet {
    fn from_iter<T: IntoIterator<Item = Edge>>(iter: T) -> Self {
        let mut result = EdgeSet::new();
        result.extend(iter);
        result
    }
}

impl<'a> IntoIterator for &'a EdgeSet {
    type Item = &'a Edge;
    type IntoIter = btree_set::Iter<'a, Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}

//-----------------------------------------------------------------------------


//-----------------------------------------------------------------------------

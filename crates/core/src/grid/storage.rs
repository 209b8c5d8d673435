use fnv::FnvBuildHasher;
use indexmap::IndexMap;

/// An ORDERED map keyed by one coordinate component. Ordered meaning
/// insertion order, which is what makes grid iteration deterministic; this
/// has some extra memory overhead over a plain hash map but we want the
/// ordering.
type OrderedMap<V> = IndexMap<i32, V, FnvBuildHasher>;

/// Sparse storage for a grid's cells, keyed by integer coordinate pair.
///
/// Internally this nests two insertion-ordered maps: an outer map keyed by
/// `x` holding one inner map per populated column, keyed by `y`. Memory stays
/// proportional to the populated cells only, which suits large irregular
/// shapes (e.g. a hexagon carved out of an unbounded coordinate plane)
/// without pre-allocating a dense 2D array.
///
/// Iteration order is deterministic but **not** numerically sorted: columns
/// come out in the order their `x` value was first inserted, and cells within
/// a column in the order their `y` was first inserted for that column.
///
/// Storage is populated exclusively during grid generation. Consumers of a
/// finished grid get lookups and iteration; there is no public insert or
/// remove.
#[derive(Clone, Debug)]
pub struct CellStorage<C> {
    columns: OrderedMap<OrderedMap<C>>,
    /// Total cell count, cached so `len` doesn't walk the columns
    len: usize,
}

impl<C> CellStorage<C> {
    pub(crate) fn new() -> Self {
        Self {
            columns: OrderedMap::default(),
            len: 0,
        }
    }

    /// Get the cell stored at the given coordinate, or `None` if that
    /// coordinate was never populated.
    pub fn get(&self, x: i32, y: i32) -> Option<&C> {
        self.columns.get(&x)?.get(&y)
    }

    /// Mutable variant of [Self::get], for modifying a cell's payload.
    pub fn get_mut(&mut self, x: i32, y: i32) -> Option<&mut C> {
        self.columns.get_mut(&x)?.get_mut(&y)
    }

    /// Insert a cell at the given coordinate, replacing any previous cell at
    /// that key. Generation-only: not exposed outside the crate.
    pub(crate) fn insert(&mut self, x: i32, y: i32, cell: C) {
        let column =
            self.columns.entry(x).or_insert_with(OrderedMap::default);
        if column.insert(y, cell).is_none() {
            self.len += 1;
        }
    }

    /// The number of cells currently stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate over all stored cells, in the deterministic order described on
    /// [CellStorage]. Every call starts a fresh traversal; every stored cell
    /// is yielded exactly once.
    pub fn iter(&self) -> impl Iterator<Item = &C> {
        self.columns.values().flat_map(|column| column.values())
    }

    /// Mutable variant of [Self::iter], same ordering. Cell geometry is
    /// immutable regardless, so this is only useful for payloads.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut C> {
        self.columns
            .values_mut()
            .flat_map(|column| column.values_mut())
    }
}

impl<'a, C> IntoIterator for &'a CellStorage<C> {
    type Item = &'a C;
    type IntoIter = Box<dyn Iterator<Item = &'a C> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

impl<'a, C> IntoIterator for &'a mut CellStorage<C> {
    type Item = &'a mut C;
    type IntoIter = Box<dyn Iterator<Item = &'a mut C> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter_mut())
    }
}

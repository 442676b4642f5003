//! Union-Find forests over arbitrary element identifiers
//!
//! The forest maps each inserted element to a representative root. `find`
//! compresses paths, `union` merges by rank. Elements are keyed by their
//! identifier rather than by dense position, so clique-graph node ids
//! (indices into a source complex) and non-zero-based vertex labels work
//! without remapping. Operations on identifiers that were never inserted
//! are contract violations and fail with an error.

use std::collections::HashMap;

use crate::error::{Error, Result};

/// A disjoint-set forest with path compression and union by rank.
#[derive(Debug, Clone, Default)]
pub struct UnionFind {
    parent: HashMap<usize, usize>,
    rank: HashMap<usize, usize>,
}

impl UnionFind {
    pub fn new<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let mut forest = Self::default();
        for element in elements {
            forest.add(element);
        }
        forest
    }

    /// Insert an element as its own singleton component. Re-inserting an
    /// existing element leaves the forest unchanged.
    pub fn add(&mut self, element: usize) {
        self.parent.entry(element).or_insert(element);
        self.rank.entry(element).or_insert(0);
    }

    pub fn contains(&self, element: usize) -> bool {
        self.parent.contains_key(&element)
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Representative root of the component containing `element`.
    /// Compresses the traversed path.
    pub fn find(&mut self, element: usize) -> Result<usize> {
        if !self.parent.contains_key(&element) {
            return Err(Error::UnknownElement(element));
        }

        let mut root = element;
        while self.parent[&root] != root {
            root = self.parent[&root];
        }

        // Second pass: point every element on the path at the root
        let mut current = element;
        while current != root {
            let next = self.parent[&current];
            self.parent.insert(current, root);
            current = next;
        }

        Ok(root)
    }

    /// Merge the components containing `x` and `y`, by rank.
    pub fn union(&mut self, x: usize, y: usize) -> Result<()> {
        let root_x = self.find(x)?;
        let root_y = self.find(y)?;

        if root_x == root_y {
            return Ok(());
        }

        let rank_x = self.rank[&root_x];
        let rank_y = self.rank[&root_y];

        if rank_x < rank_y {
            self.parent.insert(root_x, root_y);
        } else if rank_x > rank_y {
            self.parent.insert(root_y, root_x);
        } else {
            self.parent.insert(root_y, root_x);
            self.rank.insert(root_x, rank_x + 1);
        }

        Ok(())
    }

    /// All distinct component representatives, sorted ascending.
    pub fn roots(&self) -> Vec<usize> {
        let mut roots: Vec<usize> = self
            .parent
            .iter()
            .filter(|(element, parent)| element == parent)
            .map(|(&element, _)| element)
            .collect();
        roots.sort_unstable();
        roots
    }

    /// All elements whose component representative is `root`, sorted
    /// ascending. Fails if `root` is unknown.
    pub fn members_of(&mut self, root: usize) -> Result<Vec<usize>> {
        if !self.parent.contains_key(&root) {
            return Err(Error::UnknownElement(root));
        }

        let elements: Vec<usize> = self.parent.keys().copied().collect();
        let mut members = Vec::new();
        for element in elements {
            if self.find(element)? == root {
                members.push(element);
            }
        }
        members.sort_unstable();
        Ok(members)
    }
}

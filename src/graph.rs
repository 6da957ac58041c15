//! Directed graph over labeled vertices with adjacency sets

use std::fmt;
use std::hash::Hash;

use ahash::{AHashMap, AHashSet};

use crate::core::error::{LifeError, Result};

#[derive(Debug, Clone)]
pub struct Graph<V: Eq + Hash + Clone> {
    adjacency: AHashMap<V, AHashSet<V>>,
}

impl<V: Eq + Hash + Clone> Default for Graph<V> {
    fn default() -> Self {
        Self {
            adjacency: AHashMap::new(),
        }
    }
}

impl<V: Eq + Hash + Clone> Graph<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `v` was not already present
    pub fn add_vertex(&mut self, v: V) -> bool {
        if self.adjacency.contains_key(&v) {
            return false;
        }
        self.adjacency.insert(v, AHashSet::new());
        true
    }

    /// Add the arc `from -> to`, inserting missing endpoints
    ///
    /// Returns `true` if the arc was new.
    pub fn add_edge(&mut self, from: V, to: V) -> bool {
        self.add_vertex(to.clone());
        self.adjacency.entry(from).or_default().insert(to)
    }

    pub fn contains_vertex(&self, v: &V) -> bool {
        self.adjacency.contains_key(v)
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn adjacents(&self, v: &V) -> Result<&AHashSet<V>>
    where
        V: fmt::Debug,
    {
        self.adjacency
            .get(v)
            .ok_or_else(|| LifeError::VertexNotFound(format!("{:?}", v)))
    }

    /// Some path from `from` to `to`, found by depth-first search
    ///
    /// A vertex is marked when first pushed, so each is expanded at most
    /// once. Returns `None` when either endpoint is unknown or `to` is
    /// unreachable.
    pub fn one_path(&self, from: &V, to: &V) -> Option<Vec<V>> {
        if !self.contains_vertex(from) || !self.contains_vertex(to) {
            return None;
        }

        // vertex -> predecessor on the search tree
        let mut trace: AHashMap<&V, Option<&V>> = AHashMap::new();
        let mut stack: Vec<&V> = vec![from];
        trace.insert(from, None);

        while let Some(current) = stack.pop() {
            if current == to {
                return Some(Self::reconstruct(&trace, to));
            }
            for neighbor in self.adjacency.get(current).into_iter().flatten() {
                if !trace.contains_key(neighbor) {
                    trace.insert(neighbor, Some(current));
                    stack.push(neighbor);
                }
            }
        }

        None
    }

    fn reconstruct(trace: &AHashMap<&V, Option<&V>>, end: &V) -> Vec<V> {
        let mut path = vec![end.clone()];
        let mut at = end;
        while let Some(&Some(prev)) = trace.get(at) {
            path.push(prev.clone());
            at = prev;
        }
        path.reverse();
        path
    }
}

impl<V: Eq + Hash + Clone + fmt::Debug> fmt::Display for Graph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (vertex, adjacent) in &self.adjacency {
            writeln!(f, "{:?} -> {:?}", vertex, adjacent)?;
        }
        Ok(())
    }
}

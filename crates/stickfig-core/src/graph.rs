//! Implicit proximity graph over a point set
//!
//! Vertices are the non-empty slots of a [`PointSet`]; two vertices are
//! adjacent when their Euclidean distance is at most the radius. No edge
//! list is stored: adjacency is recomputed on demand, which is O(n²) per
//! full scan and bounded by [`crate::MAX_POINTS`].
//!
//! Traversals use an explicit stack (components) or queue (hop distances)
//! rather than recursion.

use std::collections::VecDeque;

use crate::point_set::PointSet;

/// Hop distance assigned to vertices that cannot be reached.
pub const UNREACHABLE: u32 = 999;

/// Borrowed view of a point set as an undirected graph.
#[derive(Debug, Clone, Copy)]
pub struct ProximityGraph<'a> {
    points: &'a PointSet,
    radius: f64,
}

impl<'a> ProximityGraph<'a> {
    /// Create a graph connecting points at most `radius` apart.
    pub fn new(points: &'a PointSet, radius: f64) -> Self {
        Self { points, radius }
    }

    /// The underlying point set.
    pub fn points(&self) -> &'a PointSet {
        self.points
    }

    /// Connectivity radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Check whether slots `i` and `j` are adjacent.
    ///
    /// Symmetric; a vertex is never adjacent to itself and empty slots
    /// have no edges.
    pub fn is_adjacent(&self, i: usize, j: usize) -> bool {
        if i == j {
            return false;
        }
        match (self.points.get(i), self.points.get(j)) {
            (Some(a), Some(b)) => a.distance(&b) <= self.radius,
            _ => false,
        }
    }

    /// Slots adjacent to `i`, ascending.
    pub fn neighbors(&self, i: usize) -> Vec<usize> {
        (0..self.points.slot_count())
            .filter(|&j| self.is_adjacent(i, j))
            .collect()
    }

    /// Number of neighbours of slot `i` (0 for an empty slot).
    pub fn degree(&self, i: usize) -> usize {
        (0..self.points.slot_count())
            .filter(|&j| self.is_adjacent(i, j))
            .count()
    }

    /// Degree of every slot, indexed by slot.
    pub fn degrees(&self) -> Vec<usize> {
        (0..self.points.slot_count()).map(|i| self.degree(i)).collect()
    }

    /// Highest-degree vertex, ties broken by lowest slot index.
    ///
    /// Returns `None` for an empty set.
    pub fn anchor(&self) -> Option<usize> {
        let mut best: Option<(usize, usize)> = None;
        for (i, _) in self.points.iter() {
            let d = self.degree(i);
            if best.is_none_or(|(_, bd)| d > bd) {
                best = Some((i, d));
            }
        }
        best.map(|(i, _)| i)
    }

    /// Connected components in discovery order.
    ///
    /// Each component lists its slots in ascending order.
    pub fn components(&self) -> Vec<Vec<usize>> {
        let n = self.points.slot_count();
        let mut visited = vec![false; n];
        let mut components = Vec::new();

        for (start, _) in self.points.iter() {
            if visited[start] {
                continue;
            }
            visited[start] = true;
            let mut stack = vec![start];
            let mut members = Vec::new();

            while let Some(v) = stack.pop() {
                members.push(v);
                for w in 0..n {
                    if !visited[w] && self.is_adjacent(v, w) {
                        visited[w] = true;
                        stack.push(w);
                    }
                }
            }

            members.sort_unstable();
            components.push(members);
        }

        components
    }

    /// The component with the most vertices; the first found wins ties.
    ///
    /// Returns `None` for an empty set.
    pub fn largest_component(&self) -> Option<Vec<usize>> {
        let mut largest: Option<Vec<usize>> = None;
        for component in self.components() {
            if largest.as_ref().is_none_or(|l| component.len() > l.len()) {
                largest = Some(component);
            }
        }
        largest
    }

    /// Breadth-first hop counts from `source` to every slot.
    ///
    /// The source gets 0; unreachable and empty slots get [`UNREACHABLE`].
    /// An empty or out-of-range source leaves every slot unreachable.
    pub fn hop_distances(&self, source: usize) -> Vec<u32> {
        let n = self.points.slot_count();
        let mut dist = vec![UNREACHABLE; n];
        if self.points.get(source).is_none() {
            return dist;
        }

        dist[source] = 0;
        let mut queue = VecDeque::new();
        queue.push_back(source);

        while let Some(v) = queue.pop_front() {
            for w in 0..n {
                if dist[w] == UNREACHABLE && self.is_adjacent(v, w) {
                    dist[w] = dist[v] + 1;
                    queue.push_back(w);
                }
            }
        }

        dist
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Point;

    fn line() -> PointSet {
        PointSet::from_points([(0, 0), (10, 0), (20, 0)]).unwrap()
    }

    #[test]
    fn test_adjacency_symmetric() {
        let set = line();
        let g = ProximityGraph::new(&set, 12.0);
        assert!(g.is_adjacent(0, 1));
        assert!(g.is_adjacent(1, 0));
        assert!(!g.is_adjacent(0, 2));
        assert!(!g.is_adjacent(1, 1));
        assert_eq!(g.degrees(), vec![1, 2, 1]);
        assert_eq!(g.neighbors(1), vec![0, 2]);
    }

    #[test]
    fn test_radius_is_inclusive() {
        let set = line();
        let g = ProximityGraph::new(&set, 10.0);
        assert!(g.is_adjacent(0, 1));
    }

    #[test]
    fn test_anchor_prefers_first() {
        let set = PointSet::from_points([(0, 0), (100, 0)]).unwrap();
        let g = ProximityGraph::new(&set, 25.0);
        assert_eq!(g.anchor(), Some(0));
        assert_eq!(ProximityGraph::new(&PointSet::new(), 25.0).anchor(), None);
    }

    #[test]
    fn test_components_and_largest() {
        let set = PointSet::from_points([(0, 0), (500, 0), (10, 0), (510, 0), (1000, 0)]).unwrap();
        let g = ProximityGraph::new(&set, 60.0);
        let comps = g.components();
        assert_eq!(comps, vec![vec![0, 2], vec![1, 3], vec![4]]);
        assert_eq!(g.largest_component(), Some(vec![0, 2]));
    }

    #[test]
    fn test_hop_distances_with_gap() {
        let set = PointSet::from_slots(vec![
            Some(Point::new(0, 0)),
            None,
            Some(Point::new(10, 0)),
            Some(Point::new(20, 0)),
            Some(Point::new(300, 0)),
        ])
        .unwrap();
        let g = ProximityGraph::new(&set, 12.0);
        assert_eq!(g.hop_distances(0), vec![0, UNREACHABLE, 1, 2, UNREACHABLE]);
        assert!(g.hop_distances(1).iter().all(|&d| d == UNREACHABLE));
    }
}

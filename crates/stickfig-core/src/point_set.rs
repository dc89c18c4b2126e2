//! PointSet - fixed-capacity ordered collection of sketch dots
//!
//! A sketch is at most [`MAX_POINTS`] slots. Slots may be empty; empty
//! slots are skipped by every query and are never read as `(0, 0)`.
//! Every normalization stage builds a new set instead of mutating its input.
//!
//! # See also
//!
//! [`crate::graph::ProximityGraph`] for neighbourhood queries over a set.

use crate::bbox::BoundingBox;
use crate::error::{Error, Result};
use crate::point::Point;

/// Maximum number of slots in a sketch.
pub const MAX_POINTS: usize = 40;

/// Ordered collection of up to [`MAX_POINTS`] optional points.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PointSet {
    slots: Vec<Option<Point>>,
}

impl PointSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self {
            slots: Vec::with_capacity(MAX_POINTS),
        }
    }

    /// Build a set from raw slots, empty slots included.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityExceeded`] if more than [`MAX_POINTS`]
    /// slots are supplied.
    pub fn from_slots(slots: Vec<Option<Point>>) -> Result<Self> {
        if slots.len() > MAX_POINTS {
            return Err(Error::CapacityExceeded {
                len: slots.len(),
                capacity: MAX_POINTS,
            });
        }
        Ok(Self { slots })
    }

    /// Build a dense set from points.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityExceeded`] if more than [`MAX_POINTS`]
    /// points are supplied.
    pub fn from_points<I>(points: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Point>,
    {
        let slots: Vec<Option<Point>> = points.into_iter().map(|p| Some(p.into())).collect();
        Self::from_slots(slots)
    }

    /// Append a point to the next slot.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityExceeded`] when the set is full.
    pub fn push(&mut self, point: Point) -> Result<()> {
        if self.slots.len() >= MAX_POINTS {
            return Err(Error::CapacityExceeded {
                len: self.slots.len() + 1,
                capacity: MAX_POINTS,
            });
        }
        self.slots.push(Some(point));
        Ok(())
    }

    /// Number of slots, empty ones included.
    #[inline]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of non-empty slots.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Check if no slot holds a point.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Get the point in slot `index`, `None` if empty or out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Point> {
        self.slots.get(index).copied().flatten()
    }

    /// Get the point in slot `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `index` is past the last slot.
    /// An empty in-range slot yields `Ok(None)`.
    pub fn slot(&self, index: usize) -> Result<Option<Point>> {
        self.slots
            .get(index)
            .copied()
            .ok_or(Error::IndexOutOfBounds {
                index,
                len: self.slots.len(),
            })
    }

    /// Raw slots.
    pub fn slots(&self) -> &[Option<Point>] {
        &self.slots
    }

    /// Iterate over `(slot index, point)` for non-empty slots.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Point)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.map(|p| (i, p)))
    }

    /// Iterate over the non-empty points in slot order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.slots.iter().filter_map(|s| *s)
    }

    /// Mean of the valid coordinates, `None` for an empty set.
    pub fn centroid(&self) -> Option<(f64, f64)> {
        let (mut sx, mut sy, mut n) = (0.0, 0.0, 0usize);
        for p in self.points() {
            sx += f64::from(p.x);
            sy += f64::from(p.y);
            n += 1;
        }
        if n == 0 {
            None
        } else {
            Some((sx / n as f64, sy / n as f64))
        }
    }

    /// Extent of the valid points, `None` for an empty set.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let mut points = self.points();
        let first = points.next()?;
        let mut bbox = BoundingBox::at(first.x, first.y);
        for p in points {
            bbox.include(p.x, p.y);
        }
        Some(bbox)
    }

    /// New set with only the given slots, compacted in the order given.
    ///
    /// Indices that are empty or out of range are skipped.
    pub fn select(&self, indices: &[usize]) -> PointSet {
        let slots = indices
            .iter()
            .filter_map(|&i| self.get(i))
            .map(Some)
            .collect();
        PointSet { slots }
    }

    /// New set with every valid point passed through `f`, compacted.
    pub fn map_points<F>(&self, f: F) -> PointSet
    where
        F: Fn(Point) -> Point,
    {
        PointSet {
            slots: self.points().map(|p| Some(f(p))).collect(),
        }
    }

    /// New set shifted by `(dx, dy)`, compacted.
    pub fn translated(&self, dx: i32, dy: i32) -> PointSet {
        self.map_points(|p| p.translated(dx, dy))
    }

    /// New set with the empty slots removed.
    pub fn compacted(&self) -> PointSet {
        self.map_points(|p| p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity() {
        let too_many: Vec<(i32, i32)> = (0..41).map(|i| (i, i)).collect();
        assert!(matches!(
            PointSet::from_points(too_many),
            Err(Error::CapacityExceeded { len: 41, .. })
        ));

        let mut set = PointSet::from_points((0..40).map(|i| (i, 0))).unwrap();
        assert!(set.push(Point::new(0, 0)).is_err());
        assert_eq!(set.len(), 40);
    }

    #[test]
    fn test_empty_slots_are_skipped() {
        let set = PointSet::from_slots(vec![
            None,
            Some(Point::new(10, 20)),
            None,
            Some(Point::new(30, 40)),
        ])
        .unwrap();
        assert_eq!(set.slot_count(), 4);
        assert_eq!(set.len(), 2);
        assert_eq!(set.centroid(), Some((20.0, 30.0)));
        let bbox = set.bounding_box().unwrap();
        assert_eq!((bbox.min_x, bbox.min_y), (10, 20));
        assert_eq!(set.get(0), None);
        assert_eq!(set.slot(2), Ok(None));
        assert!(set.slot(9).is_err());
        assert_eq!(set.compacted().slot_count(), 2);
    }

    #[test]
    fn test_empty_set() {
        let set = PointSet::new();
        assert!(set.is_empty());
        assert_eq!(set.centroid(), None);
        assert_eq!(set.bounding_box(), None);
    }

    #[test]
    fn test_select_order() {
        let set = PointSet::from_points([(0, 0), (1, 1), (2, 2)]).unwrap();
        let picked = set.select(&[2, 0, 7]);
        assert_eq!(picked.len(), 2);
        assert_eq!(picked.get(0), Some(Point::new(2, 2)));
    }
}

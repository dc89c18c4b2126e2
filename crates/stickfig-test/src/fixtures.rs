//! Canonical sketches shared by the regression tests
//!
//! Coordinates are in the y-down frame of a drawing surface.

use rand::prelude::*;
use stickfig_core::{Point, PointSet};

use crate::error::TestResult;

/// A 13-dot stick figure drawn with 20-unit spacing.
///
/// Head on top, a vertical spine, two straight arms at shoulder height and
/// two legs splayed from the hip.
pub fn stick_figure() -> TestResult<PointSet> {
    let points = [
        // head and spine
        (40, 0),
        (40, 20),
        (40, 40),
        (40, 60),
        (40, 80),
        // arms
        (20, 20),
        (0, 20),
        (60, 20),
        (80, 20),
        // legs
        (30, 98),
        (20, 116),
        (50, 98),
        (60, 116),
    ];
    Ok(PointSet::from_points(points)?)
}

/// Vertical line of `count` dots, `spacing` apart, with one unit of
/// alternating horizontal jitter as a hand-placed line would have.
///
/// The jitter gives the line a nonzero minor axis. An exactly collinear
/// line is the degenerate moment case, whose elongation is defined as 1;
/// build it directly when that case is wanted.
pub fn vertical_line(count: usize, spacing: i32) -> TestResult<PointSet> {
    let points = (0..count as i32).map(|i| Point::new(100 + (i % 2), 50 + i * spacing));
    Ok(PointSet::from_points(points)?)
}

/// Perfectly straight horizontal line of `count` dots.
pub fn horizontal_line(count: usize, spacing: i32) -> TestResult<PointSet> {
    let points = (0..count as i32).map(|i| Point::new(50 + i * spacing, 100));
    Ok(PointSet::from_points(points)?)
}

/// Plus sign: a centre dot and four arms `arm` units away.
pub fn cross(arm: i32) -> TestResult<PointSet> {
    let c = 100;
    Ok(PointSet::from_points([
        (c, c),
        (c, c - arm),
        (c + arm, c),
        (c, c + arm),
        (c - arm, c),
    ])?)
}

/// Thirty dots packed within 20 units of each other plus one stray dot
/// 200 units to the right.
pub fn cluster_with_outlier() -> TestResult<PointSet> {
    let mut set = dense_cluster()?;
    set.push(Point::new(300, 100))?;
    Ok(set)
}

/// The thirty-dot cluster of [`cluster_with_outlier`] without the stray.
pub fn dense_cluster() -> TestResult<PointSet> {
    let points = (0..30).map(|i| Point::new(100 + (i % 6) * 3, 100 + (i / 6) * 3));
    Ok(PointSet::from_points(points)?)
}

/// Copy of `set` shifted by `(dx, dy)`, empty slots preserved.
pub fn translated(set: &PointSet, dx: i32, dy: i32) -> TestResult<PointSet> {
    let slots = set
        .slots()
        .iter()
        .map(|s| s.map(|p| p.translated(dx, dy)))
        .collect();
    Ok(PointSet::from_slots(slots)?)
}

/// Copy of `set` rotated by `degrees` about `(cx, cy)`, rounded to the grid.
pub fn rotated(set: &PointSet, cx: f64, cy: f64, degrees: f64) -> TestResult<PointSet> {
    let angle = degrees.to_radians();
    let slots = set
        .slots()
        .iter()
        .map(|s| s.map(|p| p.rotated_about(cx, cy, angle)))
        .collect();
    Ok(PointSet::from_slots(slots)?)
}

/// Copy of `set` with an extra dot appended.
pub fn with_point(set: &PointSet, point: Point) -> TestResult<PointSet> {
    let mut out = set.clone();
    out.push(point)?;
    Ok(out)
}

/// `count` dots scattered uniformly over a `size` x `size` square,
/// reproducible from `seed`.
pub fn random_sketch(seed: u64, count: usize, size: i32) -> TestResult<PointSet> {
    let mut rng = StdRng::seed_from_u64(seed);
    let points: Vec<Point> = (0..count)
        .map(|_| Point::new(rng.random_range(0..size), rng.random_range(0..size)))
        .collect();
    Ok(PointSet::from_points(points)?)
}

//! Raster regression test
//!
//! Grid extent, dilation clipping, boundary cells, area moments and the
//! resampled dot canvas.

use stickfig_core::PointSet;
use stickfig_raster::{BinaryGrid, ink_coverage, render_dots};
use stickfig_test::{RegParams, fixtures};

#[test]
fn raster_reg() {
    let mut rp = RegParams::new("raster");

    // --- Test 1: two dots on a vertical line ---
    let pair = PointSet::from_points([(10, 10), (10, 30)]).unwrap();
    let grid = BinaryGrid::rasterize(&pair, 2).unwrap();
    rp.compare_values(1.0, grid.width() as f64, 0.0);
    rp.compare_values(21.0, grid.height() as f64, 0.0);
    rp.compare_values(6.0, grid.count() as f64, 0.0);
    rp.compare_values(2.0, grid.perimeter() as f64, 0.0);

    // --- Test 2: four corners of a square ---
    let corners = PointSet::from_points([(0, 0), (20, 0), (0, 20), (20, 20)]).unwrap();
    let grid = BinaryGrid::rasterize(&corners, 2).unwrap();
    rp.compare_values(36.0, grid.count() as f64, 0.0);
    rp.compare_values(20.0, grid.perimeter() as f64, 0.0);
    let m = grid.moments().unwrap();
    rp.compare_values(10.0, m.centroid.0, 1e-9);
    rp.compare_values(10.0, m.centroid.1, 1e-9);
    rp.compare_values(0.0, m.eccentricity(), 1e-9);

    // --- Test 3: a solid bar has no boundary inside the grid ---
    let bar = PointSet::from_points([(0, 0), (5, 0), (10, 0)]).unwrap();
    let grid = BinaryGrid::rasterize(&bar, 2).unwrap();
    rp.compare_values(11.0, grid.count() as f64, 0.0);
    rp.compare_values(0.0, grid.perimeter() as f64, 0.0);

    // --- Test 4: an elongated sketch is eccentric ---
    let line = fixtures::vertical_line(10, 15).unwrap();
    let grid = BinaryGrid::rasterize(&line, 2).unwrap();
    let m = grid.moments().unwrap();
    rp.check(m.eccentricity() > 0.9, "vertical line is eccentric");
    rp.check(m.mu02 > m.mu20, "spread is vertical");

    // --- Test 5: dot canvas ---
    let figure = fixtures::stick_figure().unwrap();
    let canvas = render_dots(&figure, 20, 5).unwrap();
    rp.compare_values(121.0, canvas.width() as f64, 0.0);
    rp.compare_values(157.0, canvas.height() as f64, 0.0);
    let coverage = ink_coverage(&canvas, 50).unwrap();
    rp.compare_values(2500.0, coverage.len() as f64, 0.0);
    rp.check(
        coverage.iter().all(|v| v.is_finite() && (0.0..=1.0).contains(v)),
        "coverage within [0, 1]",
    );
    rp.check(coverage.iter().any(|&v| v > 0.0), "some ink");
    rp.check(coverage.iter().any(|&v| v == 0.0), "some paper");

    assert!(rp.cleanup());
}

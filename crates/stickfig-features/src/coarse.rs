//! Coarse occupancy features
//!
//! A 5x5 occupancy grid over the bounding box, enlarged by the footprint of
//! a drawn dot, turned in quarter steps so its densest border faces up.

use stickfig_core::PointSet;

/// Cells per side of the coarse grid.
pub const COARSE_GRID: usize = 5;

/// Number of values in a coarse feature vector.
pub const COARSE_FEATURE_LEN: usize = COARSE_GRID * COARSE_GRID;

/// Extent of a drawn dot added to the bounding box maximum.
pub const DOT_FOOTPRINT: i32 = 30;

/// Occupancy cells indexed `[row][column]`.
pub type CoarseGrid = [[bool; COARSE_GRID]; COARSE_GRID];

/// Mark the cell of every point, rows top to bottom.
pub fn occupancy(points: &PointSet) -> Option<CoarseGrid> {
    let bbox = points.bounding_box()?;
    let cell_w = f64::from(bbox.width() + DOT_FOOTPRINT) / COARSE_GRID as f64;
    let cell_h = f64::from(bbox.height() + DOT_FOOTPRINT) / COARSE_GRID as f64;
    let last = COARSE_GRID as i64 - 1;

    let mut grid: CoarseGrid = Default::default();
    for p in points.points() {
        let gx = ((f64::from(p.x - bbox.min_x) / cell_w) as i64).clamp(0, last) as usize;
        let gy = ((f64::from(p.y - bbox.min_y) / cell_h) as i64).clamp(0, last) as usize;
        grid[gy][gx] = true;
    }
    Some(grid)
}

/// Occupied cells on the top, right, bottom and left borders.
pub fn side_densities(grid: &CoarseGrid) -> [usize; 4] {
    let last = COARSE_GRID - 1;
    let mut sides = [0; 4];
    for k in 0..COARSE_GRID {
        sides[0] += usize::from(grid[0][k]);
        sides[1] += usize::from(grid[k][last]);
        sides[2] += usize::from(grid[last][k]);
        sides[3] += usize::from(grid[k][0]);
    }
    sides
}

/// Quarter turn clockwise: the left column becomes the top row.
fn rotate_clockwise(grid: &CoarseGrid) -> CoarseGrid {
    let last = COARSE_GRID - 1;
    let mut out: CoarseGrid = Default::default();
    for (y, row) in out.iter_mut().enumerate() {
        for (x, cell) in row.iter_mut().enumerate() {
            *cell = grid[last - x][y];
        }
    }
    out
}

/// Turn `grid` so the densest border is on top. Ties keep the first side
/// in top, right, bottom, left order.
pub fn densest_side_up(grid: &CoarseGrid) -> CoarseGrid {
    let sides = side_densities(grid);
    let mut densest = 0;
    let mut max = 0;
    for (i, &d) in sides.iter().enumerate() {
        if d > max {
            max = d;
            densest = i;
        }
    }

    let mut out = *grid;
    for _ in 0..(4 - densest) % 4 {
        out = rotate_clockwise(&out);
    }
    out
}

/// Compute the 25-cell coarse vector, row-major, 1 for occupied.
///
/// An empty set yields all zeros.
pub fn coarse_features(points: &PointSet) -> Vec<i32> {
    let Some(grid) = occupancy(points) else {
        return vec![0; COARSE_FEATURE_LEN];
    };
    densest_side_up(&grid)
        .iter()
        .flatten()
        .map(|&on| i32::from(on))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_occupancy_cells() {
        // extent 100 + 30 per side: cells of 26 units
        let set = PointSet::from_points([(0, 0), (100, 100), (30, 0)]).unwrap();
        let grid = occupancy(&set).unwrap();
        assert!(grid[0][0]);
        assert!(grid[0][1]);
        assert!(grid[3][3]);
    }

    #[test]
    fn test_rotation_brings_left_up() {
        let mut grid: CoarseGrid = Default::default();
        for row in grid.iter_mut() {
            row[0] = true;
        }
        let turned = densest_side_up(&grid);
        assert_eq!(turned[0], [true; COARSE_GRID]);
        assert_eq!(side_densities(&turned), [5, 1, 0, 1]);
    }

    #[test]
    fn test_rotation_brings_right_up() {
        let mut grid: CoarseGrid = Default::default();
        for row in grid.iter_mut() {
            row[COARSE_GRID - 1] = true;
        }
        let turned = densest_side_up(&grid);
        assert_eq!(turned[0], [true; COARSE_GRID]);
    }

    #[test]
    fn test_bottom_heavy_flips() {
        let mut grid: CoarseGrid = Default::default();
        grid[4] = [true; COARSE_GRID];
        grid[0][0] = true;
        let turned = densest_side_up(&grid);
        assert_eq!(turned[0], [true; COARSE_GRID]);
        assert!(turned[4][4]);
    }

    #[test]
    fn test_empty() {
        assert_eq!(coarse_features(&PointSet::new()), vec![0; COARSE_FEATURE_LEN]);
    }
}

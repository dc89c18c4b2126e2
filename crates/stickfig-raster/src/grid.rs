//! Binary occupancy grid
//!
//! A sketch is stamped into a grid covering its bounding box; each dot is
//! grown into a square with a separable brick dilation. Boundary extraction
//! and area moments then operate on the cells rather than the raw dots.
//!
//! Cells outside the grid are ignored by both dilation and erosion, so a
//! filled cell on the grid edge is only a boundary cell if it touches an
//! empty cell inside the grid.

use stickfig_core::{PointSet, finite_or_zero};

use crate::error::{RasterError, RasterResult};

/// Rectangular grid of on/off cells anchored at a sketch coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryGrid {
    width: u32,
    height: u32,
    origin_x: i32,
    origin_y: i32,
    cells: Vec<bool>,
}

/// Area moments of the on cells, normalized by the area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridMoments {
    /// Number of on cells
    pub area: usize,
    /// Mean cell position
    pub centroid: (f64, f64),
    /// Central moment about x
    pub mu20: f64,
    /// Central moment about y
    pub mu02: f64,
    /// Mixed central moment
    pub mu11: f64,
}

impl GridMoments {
    /// Radius of gyration, `sqrt(mu20 + mu02)`.
    pub fn spread(&self) -> f64 {
        finite_or_zero((self.mu20 + self.mu02).sqrt())
    }

    /// Eccentricity of the equivalent ellipse, 0 for a degenerate grid.
    pub fn eccentricity(&self) -> f64 {
        let diff = self.mu20 - self.mu02;
        let num = (4.0 * self.mu11 * self.mu11 + diff * diff).sqrt();
        finite_or_zero(num / (self.mu20 + self.mu02))
    }
}

impl BinaryGrid {
    /// Create an all-off grid.
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::InvalidDimension`] if either side is zero.
    pub fn new(width: u32, height: u32) -> RasterResult<Self> {
        if width == 0 || height == 0 {
            return Err(RasterError::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            origin_x: 0,
            origin_y: 0,
            cells: vec![false; width as usize * height as usize],
        })
    }

    /// Stamp `points` into a grid spanning their bounding box and grow each
    /// dot into a `(2r+1)`-square, clipped to the grid.
    ///
    /// The grid is `(width + 1) x (height + 1)` cells with cell `(0, 0)` at
    /// the top-left corner of the bounding box.
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::EmptyInput`] for a set with no points.
    pub fn rasterize(points: &PointSet, dilation_radius: i32) -> RasterResult<Self> {
        let bbox = points.bounding_box().ok_or(RasterError::EmptyInput)?;
        let mut grid = Self::new(bbox.width() as u32 + 1, bbox.height() as u32 + 1)?;
        grid.origin_x = bbox.min_x;
        grid.origin_y = bbox.min_y;

        for p in points.points() {
            grid.set(p.x - bbox.min_x, p.y - bbox.min_y, true);
        }

        let size = (2 * dilation_radius.max(0) + 1) as u32;
        Ok(grid.dilate_brick(size, size))
    }

    /// Grid width in cells
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in cells
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Sketch coordinate of cell `(0, 0)`
    pub fn origin(&self) -> (i32, i32) {
        (self.origin_x, self.origin_y)
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            None
        } else {
            Some(y as usize * self.width as usize + x as usize)
        }
    }

    /// Cell value; cells outside the grid read as off.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some_and(|i| self.cells[i])
    }

    /// Set a cell; writes outside the grid are dropped.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, on: bool) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = on;
        }
    }

    /// Number of on cells.
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Dilate with a `width x height` brick centred on each cell.
    pub fn dilate_brick(&self, width: u32, height: u32) -> Self {
        if width <= 1 && height <= 1 {
            return self.clone();
        }
        let tmp = self.pass_1d(width, true, false);
        tmp.pass_1d(height, false, false)
    }

    /// Erode with a `width x height` brick centred on each cell.
    pub fn erode_brick(&self, width: u32, height: u32) -> Self {
        if width <= 1 && height <= 1 {
            return self.clone();
        }
        let tmp = self.pass_1d(width, true, true);
        tmp.pass_1d(height, false, true)
    }

    /// One separable pass: OR (dilate) or AND (erode) over the in-grid
    /// cells of a 1-D window.
    fn pass_1d(&self, size: u32, horizontal: bool, erode: bool) -> Self {
        let size = size.max(1) as i32;
        let lo = -(size / 2);
        let hi = size - 1 + lo;
        let mut out = self.clone();

        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                let mut acc = erode;
                for d in lo..=hi {
                    let (nx, ny) = if horizontal { (x + d, y) } else { (x, y + d) };
                    let Some(i) = self.index(nx, ny) else {
                        continue;
                    };
                    if erode {
                        acc &= self.cells[i];
                    } else {
                        acc |= self.cells[i];
                    }
                }
                out.set(x, y, acc);
            }
        }

        out
    }

    /// On cells that touch an off cell in their 8-neighbourhood.
    ///
    /// Equivalent to the original grid minus its 3x3 erosion.
    pub fn boundary(&self) -> Self {
        let eroded = self.erode_brick(3, 3);
        let mut out = self.clone();
        for (cell, &inner) in out.cells.iter_mut().zip(&eroded.cells) {
            *cell = *cell && !inner;
        }
        out
    }

    /// Number of boundary cells.
    pub fn perimeter(&self) -> usize {
        self.boundary().count()
    }

    /// Area moments of the on cells, `None` if no cell is on.
    pub fn moments(&self) -> Option<GridMoments> {
        let (mut sx, mut sy, mut area) = (0.0, 0.0, 0usize);
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                if self.get(x, y) {
                    sx += f64::from(x);
                    sy += f64::from(y);
                    area += 1;
                }
            }
        }
        if area == 0 {
            return None;
        }

        let n = area as f64;
        let (cx, cy) = (sx / n, sy / n);
        let (mut mu20, mut mu02, mut mu11) = (0.0, 0.0, 0.0);
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                if self.get(x, y) {
                    let dx = f64::from(x) - cx;
                    let dy = f64::from(y) - cy;
                    mu20 += dx * dx;
                    mu02 += dy * dy;
                    mu11 += dx * dy;
                }
            }
        }

        Some(GridMoments {
            area,
            centroid: (cx, cy),
            mu20: mu20 / n,
            mu02: mu02 / n,
            mu11: mu11 / n,
        })
    }
}

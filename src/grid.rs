use ndarray::Array1;

use crate::config;

/// Sample positions along the propagation axis.
///
/// The grid is fixed for the lifetime of the process: `n` evenly spaced
/// positions running from 0 to n - 1 in grid units.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    positions: Array1<f32>,
}

impl Grid {
    pub fn new(n: usize) -> Self {
        assert!(n > 1, "grid needs at least two points, got {}", n);
        Self {
            positions: Array1::linspace(0.0, (n - 1) as f32, n),
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &Array1<f32> {
        &self.positions
    }

    /// Position of grid index `index` along the propagation axis.
    pub fn position(&self, index: usize) -> f32 {
        self.positions[index]
    }
}

/// Axial placement of the optical element on the grid.
///
/// `start` is the grid index of the element front face and `thickness`
/// its extent in grid steps, splitting the axis into the regions before,
/// inside, and after the element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub start: usize,
    pub thickness: usize,
}

impl Placement {
    pub fn new(start: usize, thickness: usize) -> Self {
        Self { start, thickness }
    }

    /// Probe index just upstream of the element.
    pub fn entry(&self) -> usize {
        self.start
    }

    /// Probe index partway through the element.
    pub fn midpoint(&self) -> usize {
        self.start + self.thickness / 2
    }

    /// Probe index just downstream of the element.
    pub fn exit(&self) -> usize {
        self.start + self.thickness
    }

    /// First grid index past the fixed-width angle ramp. The window
    /// width is independent of the element thickness.
    pub fn ramp_end(&self) -> usize {
        self.start + config::RAMP_WINDOW
    }

    /// Panics unless the element fits on a grid of `n` points. A
    /// placement that hangs off the grid is a broken caller contract.
    pub fn validate(&self, n: usize) {
        assert!(
            self.start + self.thickness <= n - 1,
            "element placement {}..{} does not fit on a grid of {} points",
            self.start,
            self.start + self.thickness,
            n
        );
    }
}

//! Time sampling of the propagated field into real displacement curves.

use itertools::izip;
use nalgebra::Complex;
use ndarray::Array1;

use crate::config;
use crate::field::FieldArray;
use crate::grid::{Grid, Placement};

/// Real-valued displacement pair at a single probe position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub x: f32,
    pub y: f32,
}

/// The three 2D probe snapshots taken around the element: just before
/// it, partway through it, and just after it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Probes {
    pub entering: Snapshot,
    pub inside: Snapshot,
    pub exiting: Snapshot,
}

/// One frame of the animated waveform: the instantaneous x and y
/// displacement of the field at every grid position.
///
/// **Context**: The 3D curve and the 2D probe vectors drawn each
/// animation tick are real-valued. They come from modulating the complex
/// field with a position- and time-dependent carrier phase and taking
/// the real part, the standard travelling-wave picture
/// E = Re[E0 exp(i(kz - wt))].
///
/// **How it Works**: For every grid position the carrier phase is the
/// position times the wavenumber minus the tick count times the wave
/// velocity. Each complex field component is rotated by that phase and
/// its real part taken. The sampler is a pure function of its inputs
/// and is safe to call at arbitrary tick values.
#[derive(Debug, Clone, PartialEq)]
pub struct Waveform {
    pub x: Array1<f32>,
    pub y: Array1<f32>,
}

impl Waveform {
    /// Samples the field at animation tick `frame` with the given wave
    /// velocity, producing the displacement curves for that frame.
    pub fn sample(field: &FieldArray, grid: &Grid, frame: u64, velocity: f32) -> Self {
        debug_assert_eq!(field.len(), grid.len());

        let time_phase = frame as f32 * velocity;
        let mut x = Array1::zeros(field.len());
        let mut y = Array1::zeros(field.len());

        for (k, (pos, value)) in
            izip!(grid.positions().iter(), field.values().iter()).enumerate()
        {
            let carrier = Complex::cis(pos * config::WAVENUMBER - time_phase);
            x[k] = (value.x * carrier).re;
            y[k] = (value.y * carrier).re;
        }

        Self { x, y }
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Displacement pair at grid index `index`.
    pub fn snapshot(&self, index: usize) -> Snapshot {
        Snapshot {
            x: self.x[index],
            y: self.y[index],
        }
    }

    /// The entering, inside, and exiting probe snapshots for the given
    /// element placement.
    pub fn probes(&self, placement: &Placement) -> Probes {
        Probes {
            entering: self.snapshot(placement.entry()),
            inside: self.snapshot(placement.midpoint()),
            exiting: self.snapshot(placement.exit()),
        }
    }
}

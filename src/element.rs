//! Jones matrices for ideal polarizers and wave plates.
//!
//! This module implements the transfer matrices that govern how a single
//! optical element transforms the transverse electric field of a
//! monochromatic wave. Each element is a 2x2 complex matrix acting on a
//! Jones vector.
//!
//! The element catalog provides:
//! - Fixed horizontal and vertical polarizers
//! - A linear polarizer with arbitrary transmission axis
//! - Half-wave and quarter-wave plates with arbitrary fast axis
//! - The effective-angle ramp used inside the element body
//!
//! # Physical Foundation
//!
//! Polarizers are projection matrices: they absorb the field component
//! orthogonal to the transmission axis and are not invertible. Wave
//! plates are retarders: they shift the relative phase of the two field
//! components and their matrices are unitary.

use std::fmt;

use nalgebra::{Complex, Matrix2};
use serde::Deserialize;

use crate::config;


/// A Jones matrix: the 2x2 complex transfer matrix of an optical element.
pub type JonesMatrix = Matrix2<Complex<f32>>;

/// Selector for the element type, as it appears in configuration and on
/// the command line. The axis angle is supplied separately and attached
/// with [`ElementKind::with_angle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    HorizontalPolarizer,
    VerticalPolarizer,
    LinearPolarizer,
    HalfWavePlate,
    QuarterWavePlate,
}

impl ElementKind {
    /// Attaches the axis angle where the kind takes one. The fixed
    /// polarizers ignore it.
    pub fn with_angle(self, theta: f32) -> Element {
        match self {
            ElementKind::HorizontalPolarizer => Element::HorizontalPolarizer,
            ElementKind::VerticalPolarizer => Element::VerticalPolarizer,
            ElementKind::LinearPolarizer => Element::LinearPolarizer { theta },
            ElementKind::HalfWavePlate => Element::HalfWavePlate { theta },
            ElementKind::QuarterWavePlate => Element::QuarterWavePlate { theta },
        }
    }
}

/// A single ideal optical element in the beam path.
///
/// Angles are in radians, measured from horizontal: the transmission
/// axis for the linear polarizer, the fast axis for the wave plates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Element {
    HorizontalPolarizer,
    VerticalPolarizer,
    LinearPolarizer { theta: f32 },
    HalfWavePlate { theta: f32 },
    QuarterWavePlate { theta: f32 },
}

impl Element {
    pub fn kind(&self) -> ElementKind {
        match self {
            Element::HorizontalPolarizer => ElementKind::HorizontalPolarizer,
            Element::VerticalPolarizer => ElementKind::VerticalPolarizer,
            Element::LinearPolarizer { .. } => ElementKind::LinearPolarizer,
            Element::HalfWavePlate { .. } => ElementKind::HalfWavePlate,
            Element::QuarterWavePlate { .. } => ElementKind::QuarterWavePlate,
        }
    }

    /// Computes the Jones matrix of the element.
    ///
    /// **Context**: A Jones matrix describes the exact linear transformation
    /// an optical element applies to the transverse electric field. Chaining
    /// an element's matrix onto an incoming Jones vector gives the outgoing
    /// polarization state directly.
    ///
    /// **How it Works**: Each variant maps to its textbook matrix. The
    /// polarizers produce real projection matrices; the quarter-wave plate
    /// carries complex entries for the quarter-cycle retardation between
    /// the fast and slow axes.
    pub fn matrix(&self) -> JonesMatrix {
        match *self {
            Element::HorizontalPolarizer => Matrix2::new(
                Complex::new(1.0, 0.0),
                Complex::ZERO,
                Complex::ZERO,
                Complex::ZERO,
            ),
            Element::VerticalPolarizer => Matrix2::new(
                Complex::ZERO,
                Complex::ZERO,
                Complex::ZERO,
                Complex::new(1.0, 0.0),
            ),
            Element::LinearPolarizer { theta } => {
                let (sin, cos) = theta.sin_cos();
                Matrix2::new(
                    Complex::new(cos * cos, 0.0),
                    Complex::new(sin * cos, 0.0),
                    Complex::new(sin * cos, 0.0),
                    Complex::new(sin * sin, 0.0),
                )
            }
            Element::HalfWavePlate { theta } => {
                let (sin2, cos2) = (2.0 * theta).sin_cos();
                Matrix2::new(
                    Complex::new(cos2, 0.0),
                    Complex::new(sin2, 0.0),
                    Complex::new(sin2, 0.0),
                    Complex::new(-cos2, 0.0),
                )
            }
            Element::QuarterWavePlate { theta } => {
                let (sin, cos) = theta.sin_cos();
                let off_diag = Complex::new(1.0, -1.0) * sin * cos;
                Matrix2::new(
                    Complex::new(cos * cos, sin * sin),
                    off_diag,
                    off_diag,
                    Complex::new(sin * sin, cos * cos),
                )
            }
        }
    }

    /// Returns the effective element at absolute grid index `index`
    /// inside the ramp window, which depicts the field being acted on
    /// progressively as it crosses the element body.
    ///
    /// The linear polarizer ramps by offsetting its axis angle with
    /// distance along the grid; the wave plates ramp by scaling theirs.
    /// The fixed polarizers have no angle and pass through unchanged.
    pub fn ramped(&self, index: usize) -> Element {
        let step = index as f32 * config::RAMP_RATE;
        match *self {
            Element::LinearPolarizer { theta } => Element::LinearPolarizer {
                theta: theta + step,
            },
            Element::HalfWavePlate { theta } => Element::HalfWavePlate {
                theta: theta * step,
            },
            Element::QuarterWavePlate { theta } => Element::QuarterWavePlate {
                theta: theta * step,
            },
            other => other,
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Element::HorizontalPolarizer => "Horizontal Polarizer",
            Element::VerticalPolarizer => "Vertical Polarizer",
            Element::LinearPolarizer { .. } => "Linear Polarizer",
            Element::HalfWavePlate { .. } => "Half Wave Plate",
            Element::QuarterWavePlate { .. } => "Quarter Wave Plate",
        };
        match self {
            Element::LinearPolarizer { theta }
            | Element::HalfWavePlate { theta }
            | Element::QuarterWavePlate { theta } => {
                write!(f, "{} at {:.4} rad", name, theta)
            }
            _ => write!(f, "{}", name),
        }
    }
}

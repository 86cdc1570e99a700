use crate::element::Element;
use crate::grid::{Grid, Placement};
use crate::polarization::{JonesVector, Polarization};


/// Immutable selection of the incoming state and the element in the path.
///
/// The interactive driver owns the mutable "currently selected" pair and
/// hands a copy of it here whenever the field needs recomputing; the
/// core never holds a reference back into driver state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scene {
    pub state: Polarization,
    pub element: Element,
}

/// The Jones field sampled at every position along the propagation axis.
///
/// **Context**: Animating the wave requires the complex field at every
/// grid position, with the element applied only downstream of its front
/// face. The transition is smoothed over a short ramp window so the
/// field is seen being acted on progressively instead of jumping.
///
/// **How it Works**: Before the element the field is the incoming Jones
/// vector. From the front face the effective element angle ramps over a
/// fixed window of grid steps, and past that window the steady-state
/// transformed vector applies. The ramp takes precedence over the
/// steady-state region, so an element no thicker than the window is
/// ramped across its whole body.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldArray {
    values: Vec<JonesVector>,
}

impl FieldArray {
    /// Propagates the scene over the grid, producing one Jones vector
    /// per grid position.
    pub fn propagate(scene: &Scene, grid: &Grid, placement: &Placement) -> Self {
        placement.validate(grid.len());

        let incoming = scene.state.jones_vector();
        let steady = scene.element.matrix() * incoming;

        let values = (0..grid.len())
            .map(|k| {
                if k < placement.start {
                    incoming
                } else if k < placement.ramp_end() {
                    scene.element.ramped(k).matrix() * incoming
                } else {
                    steady
                }
            })
            .collect();

        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[JonesVector] {
        &self.values
    }

    pub fn value(&self, index: usize) -> &JonesVector {
        &self.values[index]
    }

    /// Field intensity |Ex|^2 + |Ey|^2 at grid index `index`.
    pub fn intensity(&self, index: usize) -> f32 {
        let v = &self.values[index];
        v.x.norm_sqr() + v.y.norm_sqr()
    }
}

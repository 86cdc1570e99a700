use std::f32::consts::FRAC_1_SQRT_2;
use std::fmt;

use nalgebra::{Complex, Vector2};
use serde::Deserialize;

#[cfg(test)]
mod tests {

    use super::*;

    const TOL: f32 = 1e-6;

    #[test]
    fn unit_norm() {
        for state in Polarization::ALL {
            let v = state.jones_vector();
            let norm_sqr = v.x.norm_sqr() + v.y.norm_sqr();
            assert!(
                (norm_sqr - 1.0).abs() < TOL,
                "{}: |v|^2 = {}",
                state,
                norm_sqr
            );
        }
    }

    #[test]
    fn circular_states_in_quadrature() {
        let right = Polarization::RightCircular.jones_vector();
        assert!(right.y.re.abs() < TOL);
        assert!((right.y.im - right.x.re).abs() < TOL);

        let left = Polarization::LeftCircular.jones_vector();
        assert!((left.y.im + left.x.re).abs() < TOL);
    }

    #[test]
    fn diagonal_states_are_orthogonal() {
        let d = Polarization::Diagonal.jones_vector();
        let a = Polarization::Antidiagonal.jones_vector();
        let overlap = d.x * a.x.conj() + d.y * a.y.conj();
        assert!(overlap.norm() < TOL);
    }
}

/// A Jones vector: the two transverse complex components of the electric field.
pub type JonesVector = Vector2<Complex<f32>>;

/// The canonical polarization states available for the incoming wave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarization {
    Horizontal,
    Vertical,
    Diagonal,
    Antidiagonal,
    RightCircular,
    LeftCircular,
}

impl Polarization {
    pub const ALL: [Polarization; 6] = [
        Polarization::Horizontal,
        Polarization::Vertical,
        Polarization::Diagonal,
        Polarization::Antidiagonal,
        Polarization::RightCircular,
        Polarization::LeftCircular,
    ];

    /// Returns the unit-norm Jones vector for this state.
    pub fn jones_vector(&self) -> JonesVector {
        let one = Complex::new(1.0, 0.0);
        let r = Complex::new(FRAC_1_SQRT_2, 0.0); // 1/sqrt(2)
        match self {
            Polarization::Horizontal => Vector2::new(one, Complex::ZERO),
            Polarization::Vertical => Vector2::new(Complex::ZERO, one),
            Polarization::Diagonal => Vector2::new(r, r),
            Polarization::Antidiagonal => Vector2::new(r, -r),
            Polarization::RightCircular => {
                Vector2::new(r, Complex::new(0.0, FRAC_1_SQRT_2))
            }
            Polarization::LeftCircular => {
                Vector2::new(r, Complex::new(0.0, -FRAC_1_SQRT_2))
            }
        }
    }
}

impl fmt::Display for Polarization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Polarization::Horizontal => "Horizontal Polarization",
            Polarization::Vertical => "Vertical Polarization",
            Polarization::Diagonal => "45 Degree Polarization",
            Polarization::Antidiagonal => "-45 Degree Polarization",
            Polarization::RightCircular => "Right Circular Polarization",
            Polarization::LeftCircular => "Left Circular Polarization",
        };
        write!(f, "{}", name)
    }
}

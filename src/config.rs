use std::f32::consts::PI;

pub const RAMP_WINDOW: usize = 10; // grid steps over which the element angle ramps in
pub const RAMP_RATE: f32 = 1.0 / 24.0; // effective-angle step per grid unit inside the ramp window
pub const SPATIAL_PERIOD: f32 = 18.0; // carrier wavelength in grid units
pub const WAVENUMBER: f32 = 2.0 * PI / SPATIAL_PERIOD; // spatial phase advance per grid unit

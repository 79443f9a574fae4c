//! Math types and helpers for the 2D tile plane
//!
//! World coordinates are in pixels, y grows downward (screen convention),
//! and rotations are stored in degrees.

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// Math constants
pub mod constants {
    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = std::f32::consts::PI / 180.0;

    /// Radians to degrees conversion factor
    pub const RAD_TO_DEG: f32 = 180.0 / std::f32::consts::PI;
}

/// Math utility functions
pub mod utils {
    use super::constants;

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Convert radians to degrees
    pub fn rad_to_deg(radians: f32) -> f32 {
        radians * constants::RAD_TO_DEG
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_degree_radian_roundtrip() {
        for degrees in [0.0_f32, 45.0, 90.0, 180.0, 270.0, 360.0] {
            let radians = utils::deg_to_rad(degrees);
            assert_relative_eq!(utils::rad_to_deg(radians), degrees, epsilon = 1e-4);
        }
    }
}

//! Force Diagram - free-body diagram widget for a physics teaching game
//!
//! Core modules:
//! - `diagram`: Applied forces, answer checking, angle geometry
//! - `levels`: Level catalog with the required answer per level
//! - `settings`: Diagram layout preferences
//! - `ui`: View data for the page (and the DOM subscriber on wasm)

pub mod diagram;
pub mod levels;
pub mod settings;
pub mod ui;

pub use diagram::{
    AppliedForce, DiagramObserver, ForceChange, ForceDiagram, ForceKind, ForceRegistry,
    ForceStatus, StatusReport, evaluate,
};
pub use levels::{Level, LevelCatalog, RequiredForce};
pub use settings::DiagramSettings;

use glam::Vec2;

/// Diagram layout constants
pub mod consts {
    /// Distance of the angle markers from the diagram center (px)
    pub const MARKER_RADIUS: f32 = 120.0;
    /// Spacing between angle markers (degrees)
    pub const MARKER_STEP_DEG: u32 = 30;
    /// Extra distance of a marker label beyond its marker (px)
    pub const MARKER_LABEL_OFFSET: f32 = 15.0;

    /// Arc radius of the incline indicator centered under the world view
    pub const INCLINE_ARC_RADIUS: f32 = 60.0;
    /// Arc radius of the incline indicator anchored on the ramp itself
    pub const ALIGNED_INCLINE_ARC_RADIUS: f32 = 50.0;
    /// Height of the centered incline vertex above the container bottom
    pub const INCLINE_VERTEX_LIFT: f32 = 100.0;

    /// Gravity always points straight down
    pub const GRAVITY_BEARING: i32 = 180;
    /// Magnitude given to a force on first assignment
    pub const DEFAULT_MAGNITUDE: f32 = 1.0;
}

/// Convert a compass bearing (degrees, 0 = North, clockwise) to a screen offset.
///
/// Screen y grows downward, so North maps to negative y.
#[inline]
pub fn bearing_to_screen(bearing_deg: f32, radius: f32) -> Vec2 {
    let math_deg = (90.0 - bearing_deg) % 360.0;
    let theta = math_deg.to_radians();
    Vec2::new(radius * theta.cos(), -radius * theta.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-3
    }

    #[test]
    fn test_bearing_north_is_up() {
        assert!(approx(bearing_to_screen(0.0, 100.0), Vec2::new(0.0, -100.0)));
    }

    #[test]
    fn test_bearing_east_is_right() {
        assert!(approx(bearing_to_screen(90.0, 100.0), Vec2::new(100.0, 0.0)));
    }

    #[test]
    fn test_bearing_south_and_west() {
        assert!(approx(bearing_to_screen(180.0, 50.0), Vec2::new(0.0, 50.0)));
        assert!(approx(bearing_to_screen(270.0, 50.0), Vec2::new(-50.0, 0.0)));
    }

    #[test]
    fn test_bearing_wraps() {
        assert!(approx(bearing_to_screen(450.0, 10.0), bearing_to_screen(90.0, 10.0)));
        assert!(approx(bearing_to_screen(-90.0, 10.0), bearing_to_screen(270.0, 10.0)));
    }
}

//! Screen layout for angle markers and incline indicators
//!
//! All positions are pixel offsets. Marker offsets are relative to the
//! diagram center; incline positions are in container coordinates.

use std::f32::consts::PI;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::bearing_to_screen;
use crate::consts::INCLINE_VERTEX_LIFT;

/// A tick on the compass ring around the diagram
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AngleMarker {
    pub bearing: u32,
    /// Marker offset from the diagram center
    pub marker: Vec2,
    /// Label offset from the diagram center (just outside the marker)
    pub label: Vec2,
    pub text: String,
}

/// Markers every `step_deg` degrees, starting at North.
pub fn angle_markers(radius: f32, step_deg: u32, label_offset: f32) -> Vec<AngleMarker> {
    if step_deg == 0 {
        return Vec::new();
    }

    (0..360)
        .step_by(step_deg as usize)
        .map(|bearing| {
            let b = bearing as f32;
            AngleMarker {
                bearing,
                marker: bearing_to_screen(b, radius),
                label: bearing_to_screen(b, radius + label_offset),
                text: format!("{}°", bearing),
            }
        })
        .collect()
}

/// Arc, label and reference lines showing a ramp's incline angle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InclineIndicator {
    /// Corner where the ramp meets the ground
    pub vertex: Vec2,
    pub arc_radius: f32,
    pub label: Vec2,
    pub text: String,
    /// Rotation of the ground reference line (degrees, CSS sense)
    pub horizontal_rotation: f32,
    /// Rotation of the ramp reference line (degrees, CSS sense)
    pub incline_rotation: f32,
}

impl InclineIndicator {
    /// Indicator centered horizontally near the bottom of the container,
    /// ramp rising to the right.
    pub fn centered(container: Vec2, incline_deg: i32, arc_radius: f32) -> Self {
        let vertex = Vec2::new(container.x / 2.0, container.y - INCLINE_VERTEX_LIFT);
        let half = half_angle_rad(incline_deg);
        let distance = arc_radius * 0.6;
        Self {
            vertex,
            arc_radius,
            label: vertex + Vec2::new(half.cos(), -half.sin()) * distance,
            text: format!("{}°", incline_deg),
            horizontal_rotation: 0.0,
            incline_rotation: -(incline_deg as f32),
        }
    }

    /// Indicator anchored at the ramp's foot, ramp rising to the left.
    pub fn aligned(vertex: Vec2, incline_deg: i32, arc_radius: f32) -> Self {
        let half = half_angle_rad(incline_deg);
        let distance = arc_radius * 0.7;
        Self {
            vertex,
            arc_radius,
            label: vertex + Vec2::new((PI - half).cos(), (PI - half).sin()) * distance,
            text: format!("{}°", incline_deg),
            horizontal_rotation: 180.0,
            incline_rotation: 180.0 - incline_deg as f32,
        }
    }

    /// Top-left corner of the arc's bounding box
    pub fn arc_origin(&self) -> Vec2 {
        self.vertex - Vec2::splat(self.arc_radius)
    }

    pub fn arc_size(&self) -> f32 {
        self.arc_radius * 2.0
    }

    /// Length of both reference lines
    pub fn line_length(&self) -> f32 {
        self.arc_radius
    }
}

fn half_angle_rad(incline_deg: i32) -> f32 {
    (incline_deg as f32 / 2.0).to_radians()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-3
    }

    #[test]
    fn test_twelve_markers_by_default_spacing() {
        let markers = angle_markers(120.0, 30, 15.0);
        assert_eq!(markers.len(), 12);
        assert_eq!(markers[0].bearing, 0);
        assert_eq!(markers[11].bearing, 330);
        assert_eq!(markers[3].text, "90°");
    }

    #[test]
    fn test_marker_positions() {
        let markers = angle_markers(120.0, 90, 15.0);
        assert_eq!(markers.len(), 4);
        assert!(close(markers[0].marker, Vec2::new(0.0, -120.0)));
        assert!(close(markers[0].label, Vec2::new(0.0, -135.0)));
        assert!(close(markers[1].marker, Vec2::new(120.0, 0.0)));
        assert!(close(markers[2].marker, Vec2::new(0.0, 120.0)));
        assert!(close(markers[3].label, Vec2::new(-135.0, 0.0)));
    }

    #[test]
    fn test_zero_step_yields_nothing() {
        assert!(angle_markers(120.0, 0, 15.0).is_empty());
    }

    #[test]
    fn test_centered_incline() {
        let ind = InclineIndicator::centered(Vec2::new(800.0, 600.0), 60, 60.0);
        assert!(close(ind.vertex, Vec2::new(400.0, 500.0)));
        // Half angle 30°, distance 36
        let expected = Vec2::new(400.0 + 36.0 * 0.866_025_4, 500.0 - 18.0);
        assert!(close(ind.label, expected));
        assert_eq!(ind.incline_rotation, -60.0);
        assert_eq!(ind.horizontal_rotation, 0.0);
        assert!(close(ind.arc_origin(), Vec2::new(340.0, 440.0)));
        assert_eq!(ind.arc_size(), 120.0);
        assert_eq!(ind.text, "60°");
    }

    #[test]
    fn test_aligned_incline() {
        let ind = InclineIndicator::aligned(Vec2::new(200.0, 300.0), 30, 50.0);
        // Half angle 15°, mirrored to the left of the vertex and below it
        let half = 15.0_f32.to_radians();
        let expected = Vec2::new(200.0 - half.cos() * 35.0, 300.0 + half.sin() * 35.0);
        assert!(close(ind.label, expected));
        assert_eq!(ind.horizontal_rotation, 180.0);
        assert_eq!(ind.incline_rotation, 150.0);
        assert_eq!(ind.line_length(), 50.0);
    }

    proptest! {
        #[test]
        fn prop_markers_sit_on_circle(radius in 1.0f32..500.0, step in 1u32..=90) {
            for m in angle_markers(radius, step, 15.0) {
                prop_assert!((m.marker.length() - radius).abs() < radius * 1e-4);
                prop_assert!((m.label.length() - (radius + 15.0)).abs() < radius * 1e-4 + 1e-3);
            }
        }
    }
}

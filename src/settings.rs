//! Diagram layout preferences
//!
//! Read from LocalStorage on the web; native builds use defaults.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Overall diagram size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DiagramSize {
    Compact,
    #[default]
    Standard,
    Large,
}

impl DiagramSize {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "compact" | "small" => Some(DiagramSize::Compact),
            "standard" | "medium" => Some(DiagramSize::Standard),
            "large" => Some(DiagramSize::Large),
            _ => None,
        }
    }

    /// Multiplier applied to every radius
    pub fn scale(&self) -> f32 {
        match self {
            DiagramSize::Compact => 0.75,
            DiagramSize::Standard => 1.0,
            DiagramSize::Large => 1.25,
        }
    }
}

/// Diagram settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagramSettings {
    pub size: DiagramSize,

    // === Compass ring ===
    /// Draw bearing markers around the object
    pub show_angle_markers: bool,
    /// Degrees between markers
    pub marker_step_deg: u32,
    /// Draw the horizontal/vertical reference lines
    pub show_reference_lines: bool,

    // === Incline ===
    /// Show the ramp angle arc on incline levels
    pub show_incline_indicator: bool,
    /// Anchor the arc on the ramp itself instead of centering it
    pub align_incline_indicator: bool,
}

impl Default for DiagramSettings {
    fn default() -> Self {
        Self {
            size: DiagramSize::Standard,

            show_angle_markers: true,
            marker_step_deg: MARKER_STEP_DEG,
            show_reference_lines: true,

            show_incline_indicator: true,
            align_incline_indicator: true,
        }
    }
}

impl DiagramSettings {
    pub fn from_size(size: DiagramSize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    pub fn marker_radius(&self) -> f32 {
        MARKER_RADIUS * self.size.scale()
    }

    pub fn marker_label_offset(&self) -> f32 {
        MARKER_LABEL_OFFSET * self.size.scale()
    }

    /// Arc radius for the incline indicator in the current placement mode
    pub fn incline_arc_radius(&self) -> f32 {
        let base = if self.align_incline_indicator {
            ALIGNED_INCLINE_ARC_RADIUS
        } else {
            INCLINE_ARC_RADIUS
        };
        base * self.size.scale()
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "force_diagram_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

//! Level catalog
//!
//! Each level names the forces acting on the object and the bearing each one
//! must be drawn at.

use serde::{Deserialize, Serialize};

use crate::diagram::ForceKind;

/// Bundled level definitions
const BUILTIN_LEVELS: &str = include_str!("../assets/levels.json");

/// Expected answer for one force
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredForce {
    #[serde(rename = "type")]
    pub kind: ForceKind,
    pub angle: i32,
}

impl RequiredForce {
    pub fn new(kind: ForceKind, angle: i32) -> Self {
        Self { kind, angle }
    }
}

/// A single diagram exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Level {
    pub id: u32,
    pub name: String,
    pub required_forces: Vec<RequiredForce>,
    /// Ramp angle in degrees, for levels set on an incline
    #[serde(default)]
    pub incline_angle: Option<i32>,
}

/// All levels, in play order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LevelCatalog {
    pub levels: Vec<Level>,
}

impl LevelCatalog {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Levels shipped with the game
    pub fn builtin() -> Self {
        match Self::from_json(BUILTIN_LEVELS) {
            Ok(catalog) => {
                log::info!("Loaded {} levels", catalog.len());
                catalog
            }
            Err(e) => {
                log::error!("Bundled level data is invalid: {}", e);
                Self::default()
            }
        }
    }

    pub fn find(&self, id: u32) -> Option<&Level> {
        self.levels.iter().find(|l| l.id == id)
    }

    pub fn first(&self) -> Option<&Level> {
        self.levels.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Level> {
        self.levels.iter()
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

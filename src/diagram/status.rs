//! Answer checking against a level's required forces

use serde::{Deserialize, Serialize};

use super::registry::ForceRegistry;
use crate::levels::RequiredForce;

/// Classification of one required force
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForceStatus {
    /// Force has not been placed
    Missing,
    /// Force is placed at the wrong bearing (`actual` is `None` for unreadable input)
    Incorrect { actual: Option<i32>, expected: i32 },
    /// Exact match
    Correct,
}

impl ForceStatus {
    pub fn is_correct(&self) -> bool {
        matches!(self, ForceStatus::Correct)
    }
}

/// Compare the registry with the required forces, in the level's order.
///
/// Angles must match exactly; there is no tolerance.
pub fn evaluate(registry: &ForceRegistry, required: &[RequiredForce]) -> Vec<ForceStatus> {
    required
        .iter()
        .map(|req| match registry.get(&req.kind) {
            None => ForceStatus::Missing,
            Some(force) if force.angle == Some(req.angle) => ForceStatus::Correct,
            Some(force) => ForceStatus::Incorrect {
                actual: force.angle,
                expected: req.angle,
            },
        })
        .collect()
}

/// Tally of statuses in a report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub missing: usize,
    pub incorrect: usize,
    pub correct: usize,
}

/// Required forces paired with their current status
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusReport {
    pub entries: Vec<(RequiredForce, ForceStatus)>,
}

impl StatusReport {
    pub fn build(registry: &ForceRegistry, required: &[RequiredForce]) -> Self {
        let entries = required
            .iter()
            .cloned()
            .zip(evaluate(registry, required))
            .collect();
        Self { entries }
    }

    /// True when nothing is missing or wrong (vacuously true with no requirements)
    pub fn all_correct(&self) -> bool {
        self.entries.iter().all(|(_, status)| status.is_correct())
    }

    pub fn counts(&self) -> StatusCounts {
        let mut counts = StatusCounts::default();
        for (_, status) in &self.entries {
            match status {
                ForceStatus::Missing => counts.missing += 1,
                ForceStatus::Incorrect { .. } => counts.incorrect += 1,
                ForceStatus::Correct => counts.correct += 1,
            }
        }
        counts
    }

    pub fn statuses(&self) -> impl Iterator<Item = &ForceStatus> {
        self.entries.iter().map(|(_, status)| status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagram::ForceKind;

    fn required(pairs: &[(ForceKind, i32)]) -> Vec<RequiredForce> {
        pairs
            .iter()
            .map(|(kind, angle)| RequiredForce::new(kind.clone(), *angle))
            .collect()
    }

    #[test]
    fn test_empty_registry_is_all_missing() {
        let req = required(&[(ForceKind::Gravity, 180), (ForceKind::Normal, 0)]);
        let statuses = evaluate(&ForceRegistry::new(), &req);
        assert_eq!(statuses, vec![ForceStatus::Missing, ForceStatus::Missing]);
    }

    #[test]
    fn test_all_matching_is_all_correct() {
        let req = required(&[(ForceKind::Gravity, 180), (ForceKind::Friction, 270)]);
        let mut registry = ForceRegistry::new();
        registry.set_angle(ForceKind::Friction, 270);
        registry.set_angle(ForceKind::Gravity, 180);
        let report = StatusReport::build(&registry, &req);
        assert!(report.all_correct());
        assert_eq!(report.counts().correct, 2);
    }

    #[test]
    fn test_mixed_result_follows_level_order() {
        let req = required(&[(ForceKind::Gravity, 180), (ForceKind::Normal, 90)]);
        let mut registry = ForceRegistry::new();
        registry.set_angle(ForceKind::Normal, 45);
        registry.set_angle(ForceKind::Gravity, 180);
        assert_eq!(
            evaluate(&registry, &req),
            vec![
                ForceStatus::Correct,
                ForceStatus::Incorrect {
                    actual: Some(45),
                    expected: 90
                },
            ]
        );
    }

    #[test]
    fn test_no_tolerance_and_no_wrapping() {
        let req = required(&[(ForceKind::Applied, 90)]);
        let mut registry = ForceRegistry::new();
        registry.set_angle(ForceKind::Applied, 450);
        assert!(!evaluate(&registry, &req)[0].is_correct());
        registry.set_angle(ForceKind::Applied, 91);
        assert!(!evaluate(&registry, &req)[0].is_correct());
    }

    #[test]
    fn test_unreadable_angle_is_incorrect() {
        let req = required(&[(ForceKind::Normal, 0)]);
        let mut registry = ForceRegistry::new();
        registry.set_angle_text(ForceKind::Normal, "up");
        assert_eq!(
            evaluate(&registry, &req),
            vec![ForceStatus::Incorrect {
                actual: None,
                expected: 0
            }]
        );
    }

    #[test]
    fn test_extra_forces_are_ignored() {
        let req = required(&[(ForceKind::Gravity, 180)]);
        let mut registry = ForceRegistry::new();
        registry.set_angle(ForceKind::Gravity, 180);
        registry.set_angle(ForceKind::Applied, 90);
        let report = StatusReport::build(&registry, &req);
        assert_eq!(report.entries.len(), 1);
        assert!(report.all_correct());
    }

    #[test]
    fn test_counts() {
        let req = required(&[
            (ForceKind::Gravity, 180),
            (ForceKind::Normal, 0),
            (ForceKind::Friction, 270),
        ]);
        let mut registry = ForceRegistry::new();
        registry.set_angle(ForceKind::Gravity, 180);
        registry.set_angle(ForceKind::Normal, 30);
        let report = StatusReport::build(&registry, &req);
        assert_eq!(
            report.counts(),
            StatusCounts {
                missing: 1,
                incorrect: 1,
                correct: 1
            }
        );
        assert!(!report.all_correct());
        assert!(StatusReport::default().all_correct());
    }
}

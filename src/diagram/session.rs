//! Diagram session: the registry for the current level plus its subscribers
//!
//! Views never touch the registry directly. They subscribe and are told
//! about every change after the state is already consistent.

use super::force::ForceKind;
use super::registry::{ForceChange, ForceRegistry};
use super::status::StatusReport;
use crate::levels::{Level, RequiredForce};

/// Something that redraws when the diagram changes
pub trait DiagramObserver {
    /// Called after every angle assignment
    fn force_changed(
        &mut self,
        change: &ForceChange,
        registry: &ForceRegistry,
        report: &StatusReport,
    );

    /// Called after a level is (re)loaded and the registry cleared
    fn level_loaded(&mut self, _level: &Level, _report: &StatusReport) {}
}

/// Owned state of one force diagram
pub struct ForceDiagram {
    registry: ForceRegistry,
    required: Vec<RequiredForce>,
    observers: Vec<Box<dyn DiagramObserver>>,
}

impl ForceDiagram {
    pub fn new(required: Vec<RequiredForce>) -> Self {
        Self {
            registry: ForceRegistry::new(),
            required,
            observers: Vec::new(),
        }
    }

    pub fn with_level(level: &Level) -> Self {
        Self::new(level.required_forces.clone())
    }

    pub fn subscribe(&mut self, observer: Box<dyn DiagramObserver>) {
        self.observers.push(observer);
    }

    pub fn registry(&self) -> &ForceRegistry {
        &self.registry
    }

    pub fn required(&self) -> &[RequiredForce] {
        &self.required
    }

    pub fn report(&self) -> StatusReport {
        StatusReport::build(&self.registry, &self.required)
    }

    pub fn set_angle(&mut self, kind: ForceKind, angle: i32) -> ForceChange {
        let change = self.registry.set_angle(kind, angle);
        self.notify(&change);
        change
    }

    pub fn set_angle_text(&mut self, kind: ForceKind, text: &str) -> ForceChange {
        let change = self.registry.set_angle_text(kind, text);
        self.notify(&change);
        change
    }

    /// Start `level` from an empty diagram
    pub fn load_level(&mut self, level: &Level) {
        log::info!("Loading level {} ({})", level.id, level.name);
        self.registry.clear();
        self.required = level.required_forces.clone();
        let report = self.report();
        for observer in &mut self.observers {
            observer.level_loaded(level, &report);
        }
    }

    fn notify(&mut self, change: &ForceChange) {
        let report = StatusReport::build(&self.registry, &self.required);
        if report.all_correct() {
            log::info!("All {} required forces correct", report.entries.len());
        }
        for observer in &mut self.observers {
            observer.force_changed(change, &self.registry, &report);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagram::ForceStatus;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Recorder {
        log: Rc<RefCell<Vec<String>>>,
        tag: &'static str,
    }

    impl DiagramObserver for Recorder {
        fn force_changed(
            &mut self,
            change: &ForceChange,
            registry: &ForceRegistry,
            report: &StatusReport,
        ) {
            self.log.borrow_mut().push(format!(
                "{}:{}={:?} n={} ok={}",
                self.tag,
                change.kind,
                change.angle,
                registry.len(),
                report.all_correct()
            ));
        }

        fn level_loaded(&mut self, level: &Level, report: &StatusReport) {
            self.log
                .borrow_mut()
                .push(format!("{}:level {} req={}", self.tag, level.id, report.entries.len()));
        }
    }

    fn level(id: u32, required: Vec<RequiredForce>) -> Level {
        Level {
            id,
            name: format!("Level {}", id),
            required_forces: required,
            incline_angle: None,
        }
    }

    #[test]
    fn test_observers_notified_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut diagram = ForceDiagram::new(vec![RequiredForce::new(ForceKind::Gravity, 180)]);
        diagram.subscribe(Box::new(Recorder { log: log.clone(), tag: "a" }));
        diagram.subscribe(Box::new(Recorder { log: log.clone(), tag: "b" }));

        diagram.set_angle(ForceKind::Gravity, 90);

        assert_eq!(
            *log.borrow(),
            vec![
                "a:gravity=Some(180) n=1 ok=true".to_string(),
                "b:gravity=Some(180) n=1 ok=true".to_string(),
            ]
        );
    }

    #[test]
    fn test_one_notification_per_mutation() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut diagram = ForceDiagram::new(vec![RequiredForce::new(ForceKind::Normal, 0)]);
        diagram.subscribe(Box::new(Recorder { log: log.clone(), tag: "v" }));

        diagram.set_angle(ForceKind::Normal, 30);
        diagram.set_angle_text(ForceKind::Normal, "0");

        let entries = log.borrow();
        assert_eq!(entries.len(), 2);
        assert!(entries[0].ends_with("ok=false"));
        assert!(entries[1].ends_with("ok=true"));
    }

    #[test]
    fn test_load_level_resets_registry() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut diagram = ForceDiagram::new(Vec::new());
        diagram.subscribe(Box::new(Recorder { log: log.clone(), tag: "v" }));
        diagram.set_angle(ForceKind::Applied, 90);

        let next = level(
            2,
            vec![
                RequiredForce::new(ForceKind::Gravity, 180),
                RequiredForce::new(ForceKind::Normal, 0),
            ],
        );
        diagram.load_level(&next);

        assert!(diagram.registry().is_empty());
        assert_eq!(diagram.required().len(), 2);
        assert_eq!(log.borrow().last().unwrap(), "v:level 2 req=2");
        assert!(diagram.report().statuses().all(|s| *s == ForceStatus::Missing));
    }

    #[test]
    fn test_with_level_uses_requirements() {
        let lvl = level(1, vec![RequiredForce::new(ForceKind::Friction, 270)]);
        let mut diagram = ForceDiagram::with_level(&lvl);
        diagram.set_angle(ForceKind::Friction, 270);
        assert!(diagram.report().all_correct());
    }
}

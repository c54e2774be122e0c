//! Force Diagram entry point
//!
//! On the web this wires the diagram into the page. Natively it checks a set
//! of answers against a level from the command line.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, MouseEvent};

    use force_diagram::ui::dom::{DIAGRAM_ID, DomDiagramView, draw_angle_indicators};
    use force_diagram::{DiagramSettings, ForceDiagram, ForceKind, LevelCatalog};

    /// Page-level state shared between event handlers
    struct App {
        diagram: ForceDiagram,
        catalog: LevelCatalog,
        level_index: usize,
    }

    impl App {
        fn load_level(&mut self, index: usize) {
            if let Some(level) = self.catalog.levels.get(index) {
                self.level_index = index;
                self.diagram.load_level(level);
            }
        }

        fn next_level(&mut self) {
            let next = (self.level_index + 1) % self.catalog.len().max(1);
            self.load_level(next);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Force diagram starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let settings = DiagramSettings::load();
        let catalog = LevelCatalog::builtin();

        let mut diagram = ForceDiagram::new(Vec::new());
        diagram.subscribe(Box::new(DomDiagramView::new(
            document.clone(),
            settings.clone(),
        )));

        let app = Rc::new(RefCell::new(App {
            diagram,
            catalog,
            level_index: 0,
        }));
        app.borrow_mut().load_level(0);

        if let Some(container) = document.get_element_by_id(DIAGRAM_ID) {
            if let Err(e) = draw_angle_indicators(&document, &container, &settings) {
                log::warn!("Could not draw angle markers: {:?}", e);
            }
        }

        setup_angle_buttons(&document, app.clone());
        setup_level_buttons(&document, app);

        log::info!("Force diagram ready");
    }

    fn setup_angle_buttons(document: &Document, app: Rc<RefCell<App>>) {
        let Ok(buttons) = document.query_selector_all(".angle-btn") else {
            return;
        };

        for i in 0..buttons.length() {
            let Some(button) = buttons.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            let (Some(force), Some(angle)) = (
                button.get_attribute("data-force"),
                button.get_attribute("data-angle"),
            ) else {
                log::warn!("Angle button without data-force/data-angle");
                continue;
            };

            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let kind = ForceKind::from_name(&force);
                app.borrow_mut().diagram.set_angle_text(kind, &angle);
            });
            let _ = button
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_level_buttons(document: &Document, app: Rc<RefCell<App>>) {
        if let Some(btn) = document.get_element_by_id("reset-level-btn") {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut a = app.borrow_mut();
                let index = a.level_index;
                a.load_level(index);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = document.get_element_by_id("next-level-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut a = app.borrow_mut();
                if a.diagram.report().all_correct() {
                    a.next_level();
                } else {
                    log::info!("Level not solved yet");
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use force_diagram::ui::StatusView;
    use force_diagram::{ForceDiagram, ForceKind, LevelCatalog};

    env_logger::init();

    let mut args = std::env::args().skip(1);
    let catalog = LevelCatalog::builtin();

    let Some(level_arg) = args.next() else {
        eprintln!("usage: force-diagram <level-id> [kind=angle ...]");
        for level in catalog.iter() {
            eprintln!("  {}  {}", level.id, level.name);
        }
        std::process::exit(2);
    };

    let Some(level) = level_arg.parse().ok().and_then(|id| catalog.find(id)) else {
        eprintln!("unknown level: {}", level_arg);
        std::process::exit(2);
    };

    let mut diagram = ForceDiagram::with_level(level);
    for answer in args {
        match answer.split_once('=') {
            Some((kind, angle)) => {
                diagram.set_angle_text(ForceKind::from_name(kind), angle);
            }
            None => log::warn!("Ignoring answer without '=': {}", answer),
        }
    }

    println!("{}", level.name);
    let report = diagram.report();
    for (required, status) in &report.entries {
        println!("  {}", StatusView::from_status(required, status).text);
    }

    if !report.all_correct() {
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

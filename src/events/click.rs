use crate::config::PageConfig;
use crate::core::{ButtonPair, ContainerChange};
use crate::dom;
use crate::error::SetupError;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// DOM handles for the trigger/reset pair. Each button animates its own
/// parent element; in a well-formed page both parents are the same node.
pub struct ToggleWiring {
    pub pair: RefCell<ButtonPair>,
    pub trigger: web::HtmlButtonElement,
    pub reset: web::HtmlButtonElement,
    pub trigger_container: web::Element,
    pub reset_container: web::Element,
    pub marker_class: String,
}

impl ToggleWiring {
    fn sync_buttons(&self) {
        let pair = self.pair.borrow();
        self.trigger.set_disabled(!pair.trigger_enabled());
        self.reset.set_disabled(!pair.reset_enabled());
    }

    fn apply(&self, container: &web::Element, change: ContainerChange) {
        dom::set_marker(container, &self.marker_class, change.active);
        if let Some(opacity) = change.opacity {
            dom::set_opacity(container, opacity);
        }
        self.sync_buttons();
    }

    pub fn on_trigger(&self) {
        let Some(change) = self.pair.borrow_mut().activate() else {
            return;
        };
        self.apply(&self.trigger_container, change);
        log::info!("[toggle] activated {:?}", self.pair.borrow().snapshot());
    }

    pub fn on_reset(&self) {
        let Some(change) = self.pair.borrow_mut().reset() else {
            return;
        };
        self.apply(&self.reset_container, change);
        log::info!("[toggle] reset {:?}", self.pair.borrow().snapshot());
    }
}

pub fn wire_toggler(
    document: &web::Document,
    config: &PageConfig,
) -> Result<Rc<ToggleWiring>, SetupError> {
    let trigger = dom::button_by_id(document, &config.trigger_id)?;
    let reset = dom::button_by_id(document, &config.reset_id)?;
    let trigger_container = dom::container_of(&trigger, &config.trigger_id)?;
    let reset_container = dom::container_of(&reset, &config.reset_id)?;

    let wiring = Rc::new(ToggleWiring {
        pair: RefCell::new(ButtonPair::new()),
        trigger,
        reset,
        trigger_container,
        reset_container,
        marker_class: config.marker_class.clone(),
    });

    // Bring the page in line with the initial state before any click.
    let initial = wiring.pair.borrow().container();
    dom::set_marker(&wiring.trigger_container, &wiring.marker_class, initial.active);
    wiring.sync_buttons();

    let on_trigger = wiring.clone();
    dom::add_click_listener(&wiring.trigger, move || on_trigger.on_trigger());
    let on_reset = wiring.clone();
    dom::add_click_listener(&wiring.reset, move || on_reset.on_reset());

    Ok(wiring)
}

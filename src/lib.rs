#![cfg(target_arch = "wasm32")]
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod config;
mod constants;
mod core;
mod dom;
mod error;
mod events;

use config::{ObserverConfig, PageConfig};

/// Handle to one installation of the page behaviors.
#[wasm_bindgen]
pub struct Installed {
    toggler: Rc<events::ToggleWiring>,
    revealing: events::Revealing,
}

#[wasm_bindgen]
impl Installed {
    /// Number of elements captured for viewport observation at setup.
    #[wasm_bindgen(js_name = observedCount)]
    pub fn observed_count(&self) -> usize {
        self.revealing.wiring.observed_count()
    }

    /// Whether the observed element at `position` (document order at setup)
    /// currently carries the marker class.
    #[wasm_bindgen(js_name = isRevealed)]
    pub fn is_revealed(&self, position: u32) -> bool {
        self.revealing.wiring.is_revealed(position)
    }

    /// Whether the toggler's container currently carries the marker class.
    #[wasm_bindgen(js_name = isActive)]
    pub fn is_active(&self) -> bool {
        self.toggler.pair.borrow().container().active
    }

    /// Stop viewport observation. Click handlers stay attached.
    pub fn disconnect(&self) {
        self.revealing.observer.disconnect();
        log::info!("[reveal] disconnected");
    }
}

fn install(document: &web::Document, config: &PageConfig) -> anyhow::Result<Installed> {
    config.validate()?;
    let toggler = events::wire_toggler(document, config)?;
    let revealing = events::wire_revealer(document, config)?;
    Ok(Installed { toggler, revealing })
}

/// Install with custom element ids, class names and threshold.
#[wasm_bindgen(js_name = installWith)]
pub fn install_with(
    trigger_id: &str,
    reset_id: &str,
    marker_class: &str,
    observable_class: &str,
    threshold: f64,
) -> Result<Installed, JsValue> {
    let config = PageConfig {
        trigger_id: trigger_id.to_string(),
        reset_id: reset_id.to_string(),
        marker_class: marker_class.to_string(),
        observable_class: observable_class.to_string(),
        observer: ObserverConfig {
            threshold,
            ..ObserverConfig::default()
        },
    };
    let document = dom::window_document().map_err(|e| JsValue::from_str(&e.to_string()))?;
    install(&document, &config).map_err(|e| JsValue::from_str(&format!("{:#}", e)))
}

fn install_default(document: &web::Document) {
    match install(document, &PageConfig::default()) {
        // Listeners and the observer callback are leaked, so the handle can go.
        Ok(installed) => log::info!("[page] installed ({} observed)", installed.observed_count()),
        Err(e) => log::error!("[page] init error: {:?}", e),
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let document = match dom::window_document() {
        Ok(d) => d,
        Err(e) => {
            console_log::init_with_level(log::Level::Info).ok();
            log::error!("[page] init error: {}", e);
            return Ok(());
        }
    };
    let level = if dom::body_has_attribute(&document, constants::DEBUG_DATA_ATTR) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    console_log::init_with_level(level).ok();
    log::info!("[page] page-reveal starting");

    // Elements are looked up once, so wait for the document to be parsed.
    if document.ready_state() == "loading" {
        let doc = document.clone();
        let closure = Closure::wrap(Box::new(move || install_default(&doc)) as Box<dyn FnMut()>);
        _ = document
            .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        install_default(&document);
    }
    Ok(())
}

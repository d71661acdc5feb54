use crate::config::PageConfig;
use crate::core::{BatchQueue, ElementId, IntersectionBatch, IntersectionRecord, Reveal, Revealer};
use crate::dom;
use crate::error::SetupError;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub struct RevealWiring {
    pub elements: Vec<web::Element>,
    // element -> position in `elements`, so each entry resolves in one lookup
    index: js_sys::Map,
    pub revealer: RefCell<Revealer>,
    pub queue: RefCell<BatchQueue>,
    pub marker_class: String,
}

impl RevealWiring {
    fn id_of(&self, target: &web::Element) -> Option<ElementId> {
        self.index
            .get(target)
            .as_f64()
            .map(|i| ElementId(i as u32))
    }

    fn to_batch(&self, entries: &js_sys::Array) -> IntersectionBatch {
        entries
            .iter()
            .filter_map(|value| {
                let entry: web::IntersectionObserverEntry = value.unchecked_into();
                let id = self.id_of(&entry.target())?;
                Some(IntersectionRecord::new(id, entry.is_intersecting()))
            })
            .collect()
    }

    fn project(&self, reveals: &[Reveal]) {
        for reveal in reveals {
            let Some(el) = self.elements.get(reveal.id.0 as usize) else {
                continue;
            };
            log::debug!("[reveal] {:?} {:?}", reveal.id, reveal.transition);
            dom::set_marker(el, &self.marker_class, reveal.active);
            if let Some(opacity) = reveal.opacity {
                dom::set_opacity(el, opacity);
            }
        }
    }

    pub fn observed_count(&self) -> usize {
        self.revealer.borrow().len()
    }

    /// Whether the element at `position` in the setup snapshot is revealed.
    pub fn is_revealed(&self, position: u32) -> bool {
        self.revealer
            .borrow()
            .state(ElementId(position))
            .map(|s| s.active)
            .unwrap_or(false)
    }

    pub fn on_entries(&self, entries: &js_sys::Array) {
        let batch = self.to_batch(entries);
        let records = batch.len();
        let mut queue = self.queue.borrow_mut();
        queue.push(batch);
        log::debug!("[reveal] batch of {} records ({} pending)", records, queue.len());
        drop(queue);
        let mut revealer = self.revealer.borrow_mut();
        self.queue
            .borrow_mut()
            .drain_into(&mut revealer, |reveals| self.project(reveals));
        debug_assert!(self.queue.borrow().is_empty());
    }
}

pub struct Revealing {
    pub observer: web::IntersectionObserver,
    pub wiring: Rc<RevealWiring>,
}

pub fn wire_revealer(
    document: &web::Document,
    config: &PageConfig,
) -> Result<Revealing, SetupError> {
    let elements = dom::snapshot_by_class(document, &config.observable_class);
    let index = js_sys::Map::new();
    for (i, el) in elements.iter().enumerate() {
        index.set(el, &JsValue::from(i as u32));
    }
    let wiring = Rc::new(RevealWiring {
        index,
        revealer: RefCell::new(Revealer::with_count(elements.len())),
        queue: RefCell::new(BatchQueue::new()),
        marker_class: config.marker_class.clone(),
        elements,
    });

    let options = web::IntersectionObserverInit::new();
    options.set_root_margin(&config.observer.root_margin);
    options.set_threshold(&JsValue::from_f64(config.observer.threshold));

    let on_entries = wiring.clone();
    let closure = Closure::wrap(Box::new(move |entries: js_sys::Array| {
        on_entries.on_entries(&entries);
    }) as Box<dyn FnMut(js_sys::Array)>);
    let observer =
        web::IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &options)
            .map_err(|e| SetupError::Observer(format!("{:?}", e)))?;
    closure.forget();

    for el in &wiring.elements {
        observer.observe(el);
    }
    if wiring.revealer.borrow().is_empty() {
        log::warn!(
            "[reveal] no elements with class '{}' to observe",
            config.observable_class
        );
    }
    log::info!(
        "[reveal] observing {} elements (margin={} threshold={})",
        wiring.observed_count(),
        config.observer.root_margin,
        config.observer.threshold
    );

    Ok(Revealing { observer, wiring })
}

use crate::core::Opacity;
use crate::error::SetupError;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Result<web::Document, SetupError> {
    let window = web::window().ok_or(SetupError::NoWindow)?;
    window.document().ok_or(SetupError::NoDocument)
}

pub fn button_by_id(
    document: &web::Document,
    element_id: &str,
) -> Result<web::HtmlButtonElement, SetupError> {
    document
        .get_element_by_id(element_id)
        .ok_or_else(|| SetupError::MissingElement(element_id.to_string()))?
        .dyn_into::<web::HtmlButtonElement>()
        .map_err(|_| SetupError::NotAButton(element_id.to_string()))
}

/// The element a control animates is its immediate parent.
pub fn container_of(control: &web::Element, element_id: &str) -> Result<web::Element, SetupError> {
    control
        .parent_element()
        .ok_or_else(|| SetupError::Orphan(element_id.to_string()))
}

/// Copy the live collection into a fixed list; later additions to the page
/// must not change what was captured.
pub fn snapshot_by_class(document: &web::Document, class_name: &str) -> Vec<web::Element> {
    let live = document.get_elements_by_class_name(class_name);
    (0..live.length()).filter_map(|i| live.item(i)).collect()
}

#[inline]
pub fn add_click_listener(target: &web::EventTarget, mut handler: impl FnMut() + 'static) {
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn set_marker(el: &web::Element, marker_class: &str, on: bool) {
    let cl = el.class_list();
    if on {
        _ = cl.add_1(marker_class);
    } else {
        _ = cl.remove_1(marker_class);
    }
}

/// Write an inline opacity. `Inherited` leaves the element untouched, as do
/// non-HTML elements (no `style` object).
#[inline]
pub fn set_opacity(el: &web::Element, opacity: Opacity) {
    let Some(value) = opacity.css_value() else {
        return;
    };
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        _ = html.style().set_property("opacity", value);
    }
}

#[inline]
pub fn body_has_attribute(document: &web::Document, name: &str) -> bool {
    document
        .body()
        .map(|b| b.has_attribute(name))
        .unwrap_or(false)
}

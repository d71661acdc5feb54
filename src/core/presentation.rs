// Presentation state shared by the toggler and the revealer.
//
// The core never touches the DOM. It records an explicit `active` flag and an
// [`Opacity`] per element; the web layer projects these onto the marker class
// and the inline `opacity` style.

use crate::constants::{OPACITY_OPAQUE, OPACITY_TRANSPARENT};

/// Inline opacity the core wants on an element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Opacity {
    /// No inline override; the page stylesheet decides.
    #[default]
    Inherited,
    Opaque,
    Transparent,
}

impl Opacity {
    /// Opacity as seen by the user, assuming the page default is fully opaque.
    pub fn effective(self) -> f32 {
        match self {
            Opacity::Inherited | Opacity::Opaque => 1.0,
            Opacity::Transparent => 0.0,
        }
    }

    /// Inline style value to write, or `None` to leave the element alone.
    pub fn css_value(self) -> Option<&'static str> {
        match self {
            Opacity::Inherited => None,
            Opacity::Opaque => Some(OPACITY_OPAQUE),
            Opacity::Transparent => Some(OPACITY_TRANSPARENT),
        }
    }
}

/// Marker-class flag plus opacity for one element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Presentation {
    pub active: bool,
    pub opacity: Opacity,
}

// Trigger/reset button pair driving one animated container.

use super::presentation::{Opacity, Presentation};

/// Observable state of the pair, used to compare states across cycles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToggleSnapshot {
    pub trigger_enabled: bool,
    pub reset_enabled: bool,
    pub active: bool,
    pub opacity: f32,
}

/// What the web layer must write on the container after an applied operation.
/// `opacity` is only set by reset; activate leaves inline opacity alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContainerChange {
    pub active: bool,
    pub opacity: Option<Opacity>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonPair {
    trigger_enabled: bool,
    reset_enabled: bool,
    container: Presentation,
}

impl Default for ButtonPair {
    fn default() -> Self {
        Self::new()
    }
}

impl ButtonPair {
    pub fn new() -> Self {
        Self {
            trigger_enabled: true,
            reset_enabled: false,
            container: Presentation::default(),
        }
    }

    #[inline]
    pub fn trigger_enabled(&self) -> bool {
        self.trigger_enabled
    }

    #[inline]
    pub fn reset_enabled(&self) -> bool {
        self.reset_enabled
    }

    #[inline]
    pub fn container(&self) -> Presentation {
        self.container
    }

    /// Start the animation. Returns `None` without touching anything when the
    /// trigger is disabled.
    pub fn activate(&mut self) -> Option<ContainerChange> {
        if !self.trigger_enabled {
            return None;
        }
        self.container.active = true;
        self.trigger_enabled = false;
        self.reset_enabled = true;
        Some(ContainerChange {
            active: true,
            opacity: None,
        })
    }

    /// Clear the animation so it can run again. Opacity is forced opaque in
    /// case a transition left the container faded out.
    pub fn reset(&mut self) -> Option<ContainerChange> {
        if !self.reset_enabled {
            return None;
        }
        self.container.active = false;
        self.container.opacity = Opacity::Opaque;
        self.trigger_enabled = true;
        self.reset_enabled = false;
        Some(ContainerChange {
            active: false,
            opacity: Some(Opacity::Opaque),
        })
    }

    pub fn snapshot(&self) -> ToggleSnapshot {
        ToggleSnapshot {
            trigger_enabled: self.trigger_enabled,
            reset_enabled: self.reset_enabled,
            active: self.container.active,
            opacity: self.container.opacity.effective(),
        }
    }
}

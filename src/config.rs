use crate::constants::{
    MARKER_CLASS, OBSERVABLE_CLASS, RESET_ID, ROOT_MARGIN, THRESHOLD, TRIGGER_ID,
};
use crate::error::SetupError;

/// Options handed to the browser's intersection observer.
#[derive(Clone, Debug, PartialEq)]
pub struct ObserverConfig {
    pub root_margin: String,
    pub threshold: f64,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            root_margin: ROOT_MARGIN.to_string(),
            threshold: THRESHOLD,
        }
    }
}

/// Everything the installer needs to locate and drive page elements.
#[derive(Clone, Debug, PartialEq)]
pub struct PageConfig {
    pub trigger_id: String,
    pub reset_id: String,
    pub marker_class: String,
    pub observable_class: String,
    pub observer: ObserverConfig,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            trigger_id: TRIGGER_ID.to_string(),
            reset_id: RESET_ID.to_string(),
            marker_class: MARKER_CLASS.to_string(),
            observable_class: OBSERVABLE_CLASS.to_string(),
            observer: ObserverConfig::default(),
        }
    }
}

impl PageConfig {
    pub fn validate(&self) -> Result<(), SetupError> {
        let t = self.observer.threshold;
        if !(0.0..=1.0).contains(&t) {
            // NaN fails the range check too
            return Err(SetupError::InvalidThreshold(t));
        }
        if self.marker_class.trim().is_empty() {
            return Err(SetupError::EmptyClassName("marker"));
        }
        if self.observable_class.trim().is_empty() {
            return Err(SetupError::EmptyClassName("observable"));
        }
        Ok(())
    }
}

use thiserror::Error;

/// Failures that abort installation. Nothing after setup is fallible.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SetupError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("missing #{0}")]
    MissingElement(String),
    #[error("#{0} is not a <button>")]
    NotAButton(String),
    #[error("#{0} has no parent element to animate")]
    Orphan(String),
    #[error("threshold {0} is outside [0, 1]")]
    InvalidThreshold(f64),
    #[error("{0} class name is empty")]
    EmptyClassName(&'static str),
    #[error("intersection observer: {0}")]
    Observer(String),
}

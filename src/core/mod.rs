pub mod presentation;
pub mod revealer;
pub mod toggler;

pub use presentation::*;
pub use revealer::*;
pub use toggler::*;

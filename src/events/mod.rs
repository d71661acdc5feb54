pub mod click;
pub mod intersection;

pub use click::*;
pub use intersection::*;

pub mod perturb;
pub mod placement;

pub use perturb::*;
pub use placement::*;

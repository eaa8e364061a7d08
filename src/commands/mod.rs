pub mod audit;
pub mod input;

pub use audit::*;
pub use input::*;

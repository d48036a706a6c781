pub mod hide;
mod shared;
pub mod unveil;
pub mod unveil_raw;

pub use shared::*;

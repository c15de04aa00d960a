mod bit;
pub use bit::*;

pub mod alpha_mask;
pub mod input;

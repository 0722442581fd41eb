pub mod math;
pub mod merkle;
pub mod token;

pub use math::*;
pub use merkle::*;
pub use token::*;

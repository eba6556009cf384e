#![no_std]

mod full_math;
mod invariant;

pub use full_math::*;
pub use invariant::*;

#![no_std]

mod asset;
mod pool;
mod ratio;

pub use asset::*;
pub use pool::*;
pub use ratio::*;

/// Scale factor for the share-value view: the reported value is the
/// common-unit worth of `SHARE_VALUE_SCALE` shares.
pub const SHARE_VALUE_SCALE: u128 = 1_000_000;

/// Hard cap on Newton iterations for both invariant solvers.
pub const MAX_ITERATIONS: u32 = 200;

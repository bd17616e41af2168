#![no_std]

pub mod epoch_clock;
pub mod full_math;
pub mod liquidity_math;
pub mod sqrt_math;
pub mod swap_math;

pub use epoch_clock::*;
pub use full_math::*;
pub use liquidity_math::*;
pub use sqrt_math::*;
pub use swap_math::*;

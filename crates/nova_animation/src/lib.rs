//! Nova Animation System
//!
//! Frame-driven animation helpers used by the scroll timeline and the
//! particle systems.
//!
//! # Features
//!
//! - **Interpolation**: [`Interpolate`] for scalar parameters
//! - **Range Mapping**: [`RangeMap`] clamps an input window and remaps it onto an output window
//! - **Exponential Approach**: [`Approach`] eases a value towards a target once per frame,
//!   with an optional constant bias that guarantees progress near convergence

pub mod approach;
pub mod values;

pub use approach::Approach;
pub use values::{map_range, Interpolate, RangeMap};

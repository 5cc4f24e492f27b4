//! Re-exports [`fastvec`]'s containers.
//!
//! It's a high-performance vector crate tuned for small data sizes.

// -----------------------------------------------------------------------------
// Data Process

pub use fastvec::{FastVec, fast_vec};

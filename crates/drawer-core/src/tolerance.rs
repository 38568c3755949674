//! Tolerant floating-point comparisons shared by every routine in the engine.
//!
//! Drag positions arrive as a continuous stream of samples and accumulate
//! rounding noise; comparing them against canonical positions with plain
//! `==`/`<=` makes classification flicker between neighbouring states. All
//! comparisons in this crate go through the helpers below so the tolerance is
//! a single tunable constant.

/// Tolerance, in logical pixels, applied to position comparisons.
pub const POSITION_EPSILON: f32 = 1e-3;

/// `lhs == rhs` within [`POSITION_EPSILON`].
#[inline]
pub fn approx_eq(lhs: f32, rhs: f32) -> bool {
    (lhs - rhs).abs() <= POSITION_EPSILON
}

/// `lhs <= rhs` within [`POSITION_EPSILON`].
#[inline]
pub fn approx_le(lhs: f32, rhs: f32) -> bool {
    lhs <= rhs + POSITION_EPSILON
}

/// `lhs >= rhs` within [`POSITION_EPSILON`].
#[inline]
pub fn approx_ge(lhs: f32, rhs: f32) -> bool {
    lhs + POSITION_EPSILON >= rhs
}

// Shared tolerances for pixel-space geometry

pub const EPS_POS: f64 = 1e-9;   // point coincidence threshold (px)
pub const EPS_DENOM: f64 = 1e-12; // denominator guard for parametric solves

#[inline] pub fn clamp01(x: f64) -> f64 { x.max(0.0).min(1.0) }
#[inline] pub fn near_zero(x: f64, eps: f64) -> bool { x.abs() <= eps }

//! Scalar float helpers shared by every kernel set.
//!
//! Routed through `libm` so scalar tails and reference kernels produce the
//! same correctly-rounded results as the hardware instructions they mirror,
//! with or without `std`.

#[inline(always)]
pub(crate) fn sqrtf(x: f32) -> f32 {
    libm::sqrtf(x)
}

#[inline(always)]
pub(crate) fn truncf(x: f32) -> f32 {
    libm::truncf(x)
}

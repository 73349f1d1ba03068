//! Elementwise arithmetic peers, scalar reference.
//!
//! Three-operand vector ops and in-place scalar-broadcast ops. These are
//! dispatched through the same table as the complex kernels but carry no
//! algorithmic weight of their own.

use crate::mathf::truncf;

pub fn add3(dst: &mut [f32], a: &[f32], b: &[f32]) {
    debug_assert_eq!(dst.len(), a.len());
    debug_assert_eq!(dst.len(), b.len());
    for i in 0..dst.len() {
        dst[i] = a[i] + b[i];
    }
}

pub fn sub3(dst: &mut [f32], a: &[f32], b: &[f32]) {
    debug_assert_eq!(dst.len(), a.len());
    for i in 0..dst.len() {
        dst[i] = a[i] - b[i];
    }
}

pub fn mul3(dst: &mut [f32], a: &[f32], b: &[f32]) {
    debug_assert_eq!(dst.len(), a.len());
    for i in 0..dst.len() {
        dst[i] = a[i] * b[i];
    }
}

pub fn div3(dst: &mut [f32], a: &[f32], b: &[f32]) {
    debug_assert_eq!(dst.len(), a.len());
    for i in 0..dst.len() {
        dst[i] = a[i] / b[i];
    }
}

/// Truncated-division remainder `a - trunc(a/b)*b`.
pub fn mod3(dst: &mut [f32], a: &[f32], b: &[f32]) {
    debug_assert_eq!(dst.len(), a.len());
    for i in 0..dst.len() {
        dst[i] = a[i] - truncf(a[i] / b[i]) * b[i];
    }
}

pub fn add_k2(dst: &mut [f32], k: f32) {
    for d in dst.iter_mut() {
        *d += k;
    }
}

pub fn sub_k2(dst: &mut [f32], k: f32) {
    for d in dst.iter_mut() {
        *d -= k;
    }
}

pub fn mul_k2(dst: &mut [f32], k: f32) {
    for d in dst.iter_mut() {
        *d *= k;
    }
}

pub fn div_k2(dst: &mut [f32], k: f32) {
    for d in dst.iter_mut() {
        *d /= k;
    }
}

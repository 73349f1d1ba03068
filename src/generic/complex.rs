//! Split-layout complex arithmetic, scalar reference.
//!
//! All buffers are separate real/imaginary rails of equal length. Every
//! kernel accepts empty slices as a no-op and propagates NaN/Inf by plain
//! IEEE semantics.

use crate::mathf::sqrtf;

/// `dst *= src`, elementwise complex product (4 multiplies, 2 adds).
pub fn complex_mul2(dst_re: &mut [f32], dst_im: &mut [f32], src_re: &[f32], src_im: &[f32]) {
    debug_assert_eq!(dst_re.len(), dst_im.len());
    debug_assert_eq!(dst_re.len(), src_re.len());
    debug_assert_eq!(dst_re.len(), src_im.len());
    for i in 0..dst_re.len() {
        let ar = dst_re[i];
        let ai = dst_im[i];
        let br = src_re[i];
        let bi = src_im[i];
        dst_re[i] = ar * br - ai * bi;
        dst_im[i] = ar * bi + ai * br;
    }
}

/// `dst = a * b`, non-mutating three-operand product.
pub fn complex_mul3(
    dst_re: &mut [f32],
    dst_im: &mut [f32],
    a_re: &[f32],
    a_im: &[f32],
    b_re: &[f32],
    b_im: &[f32],
) {
    debug_assert_eq!(dst_re.len(), dst_im.len());
    debug_assert_eq!(dst_re.len(), a_re.len());
    debug_assert_eq!(dst_re.len(), b_re.len());
    for i in 0..dst_re.len() {
        let ar = a_re[i];
        let ai = a_im[i];
        let br = b_re[i];
        let bi = b_im[i];
        dst_re[i] = ar * br - ai * bi;
        dst_im[i] = ar * bi + ai * br;
    }
}

/// `dst = dst / src`, textbook real-denominator form `R = re^2 + im^2`.
///
/// Zero-magnitude divisors produce IEEE Inf/NaN, never an error.
pub fn complex_div2(dst_re: &mut [f32], dst_im: &mut [f32], src_re: &[f32], src_im: &[f32]) {
    debug_assert_eq!(dst_re.len(), dst_im.len());
    for i in 0..dst_re.len() {
        let tr = dst_re[i];
        let ti = dst_im[i];
        let br = src_re[i];
        let bi = src_im[i];
        let r = br * br + bi * bi;
        dst_re[i] = (tr * br + ti * bi) / r;
        dst_im[i] = (ti * br - tr * bi) / r;
    }
}

/// `dst = src / dst`, same four product terms as [`complex_div2`] with the
/// numerator/denominator roles swapped.
pub fn complex_rdiv2(dst_re: &mut [f32], dst_im: &mut [f32], src_re: &[f32], src_im: &[f32]) {
    debug_assert_eq!(dst_re.len(), dst_im.len());
    for i in 0..dst_re.len() {
        let tr = src_re[i];
        let ti = src_im[i];
        let br = dst_re[i];
        let bi = dst_im[i];
        let r = br * br + bi * bi;
        dst_re[i] = (tr * br + ti * bi) / r;
        dst_im[i] = (ti * br - tr * bi) / r;
    }
}

/// `dst = t / b`, three-operand division.
pub fn complex_div3(
    dst_re: &mut [f32],
    dst_im: &mut [f32],
    t_re: &[f32],
    t_im: &[f32],
    b_re: &[f32],
    b_im: &[f32],
) {
    debug_assert_eq!(dst_re.len(), dst_im.len());
    for i in 0..dst_re.len() {
        let tr = t_re[i];
        let ti = t_im[i];
        let br = b_re[i];
        let bi = b_im[i];
        let r = br * br + bi * bi;
        dst_re[i] = (tr * br + ti * bi) / r;
        dst_im[i] = (ti * br - tr * bi) / r;
    }
}

/// In-place reciprocal `1/z = conj(z) / |z|^2`.
pub fn complex_rcp1(dst_re: &mut [f32], dst_im: &mut [f32]) {
    debug_assert_eq!(dst_re.len(), dst_im.len());
    for i in 0..dst_re.len() {
        let re = dst_re[i];
        let im = dst_im[i];
        let d = 1.0 / (re * re + im * im);
        dst_re[i] = re * d;
        dst_im[i] = -(im * d);
    }
}

/// Out-of-place reciprocal.
pub fn complex_rcp2(dst_re: &mut [f32], dst_im: &mut [f32], src_re: &[f32], src_im: &[f32]) {
    debug_assert_eq!(dst_re.len(), dst_im.len());
    for i in 0..dst_re.len() {
        let re = src_re[i];
        let im = src_im[i];
        let d = 1.0 / (re * re + im * im);
        dst_re[i] = re * d;
        dst_im[i] = -(im * d);
    }
}

/// Magnitude `sqrt(re^2 + im^2)` into a real output buffer.
pub fn complex_mod(dst: &mut [f32], src_re: &[f32], src_im: &[f32]) {
    debug_assert_eq!(dst.len(), src_re.len());
    debug_assert_eq!(dst.len(), src_im.len());
    for i in 0..dst.len() {
        let re = src_re[i];
        let im = src_im[i];
        dst[i] = sqrtf(re * re + im * im);
    }
}

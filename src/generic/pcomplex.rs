//! Interleaved-layout (packed) complex arithmetic, scalar reference.
//!
//! A packed buffer of `count` complex values holds `2*count` floats as
//! alternating re/im samples. Algebraically identical to the split-layout
//! kernels in [`super::complex`]; only the memory walk differs.

use crate::mathf::sqrtf;

/// `dst *= src` over packed complex samples.
pub fn pcomplex_mul2(dst: &mut [f32], src: &[f32]) {
    debug_assert_eq!(dst.len(), src.len());
    debug_assert_eq!(dst.len() % 2, 0);
    for (d, s) in dst.chunks_exact_mut(2).zip(src.chunks_exact(2)) {
        let ar = d[0];
        let ai = d[1];
        let br = s[0];
        let bi = s[1];
        d[0] = ar * br - ai * bi;
        d[1] = ar * bi + ai * br;
    }
}

/// `dst = a * b` over packed complex samples.
pub fn pcomplex_mul3(dst: &mut [f32], a: &[f32], b: &[f32]) {
    debug_assert_eq!(dst.len(), a.len());
    debug_assert_eq!(dst.len(), b.len());
    for ((d, x), y) in dst
        .chunks_exact_mut(2)
        .zip(a.chunks_exact(2))
        .zip(b.chunks_exact(2))
    {
        let ar = x[0];
        let ai = x[1];
        let br = y[0];
        let bi = y[1];
        d[0] = ar * br - ai * bi;
        d[1] = ar * bi + ai * br;
    }
}

/// `dst = dst / src` over packed complex samples.
pub fn pcomplex_div2(dst: &mut [f32], src: &[f32]) {
    debug_assert_eq!(dst.len(), src.len());
    for (d, s) in dst.chunks_exact_mut(2).zip(src.chunks_exact(2)) {
        let tr = d[0];
        let ti = d[1];
        let br = s[0];
        let bi = s[1];
        let r = br * br + bi * bi;
        d[0] = (tr * br + ti * bi) / r;
        d[1] = (ti * br - tr * bi) / r;
    }
}

/// `dst = src / dst` over packed complex samples.
pub fn pcomplex_rdiv2(dst: &mut [f32], src: &[f32]) {
    debug_assert_eq!(dst.len(), src.len());
    for (d, s) in dst.chunks_exact_mut(2).zip(src.chunks_exact(2)) {
        let tr = s[0];
        let ti = s[1];
        let br = d[0];
        let bi = d[1];
        let r = br * br + bi * bi;
        d[0] = (tr * br + ti * bi) / r;
        d[1] = (ti * br - tr * bi) / r;
    }
}

/// `dst = t / b` over packed complex samples.
pub fn pcomplex_div3(dst: &mut [f32], t: &[f32], b: &[f32]) {
    debug_assert_eq!(dst.len(), t.len());
    debug_assert_eq!(dst.len(), b.len());
    for ((d, x), y) in dst
        .chunks_exact_mut(2)
        .zip(t.chunks_exact(2))
        .zip(b.chunks_exact(2))
    {
        let tr = x[0];
        let ti = x[1];
        let br = y[0];
        let bi = y[1];
        let r = br * br + bi * bi;
        d[0] = (tr * br + ti * bi) / r;
        d[1] = (ti * br - tr * bi) / r;
    }
}

/// In-place packed reciprocal.
pub fn pcomplex_rcp1(dst: &mut [f32]) {
    debug_assert_eq!(dst.len() % 2, 0);
    for d in dst.chunks_exact_mut(2) {
        let re = d[0];
        let im = d[1];
        let k = 1.0 / (re * re + im * im);
        d[0] = re * k;
        d[1] = -(im * k);
    }
}

/// Out-of-place packed reciprocal.
pub fn pcomplex_rcp2(dst: &mut [f32], src: &[f32]) {
    debug_assert_eq!(dst.len(), src.len());
    for (d, s) in dst.chunks_exact_mut(2).zip(src.chunks_exact(2)) {
        let re = s[0];
        let im = s[1];
        let k = 1.0 / (re * re + im * im);
        d[0] = re * k;
        d[1] = -(im * k);
    }
}

/// Magnitudes of packed complex samples; `dst` holds `count` reals for a
/// `2*count`-float source.
pub fn pcomplex_mod(dst: &mut [f32], src: &[f32]) {
    debug_assert_eq!(dst.len() * 2, src.len());
    for (d, s) in dst.iter_mut().zip(src.chunks_exact(2)) {
        *d = sqrtf(s[0] * s[0] + s[1] * s[1]);
    }
}

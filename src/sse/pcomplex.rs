//! Interleaved-layout complex arithmetic, SSE2.
//!
//! Each vector block loads eight floats (four complex samples), splits them
//! into re/im lanes with shuffles, runs the same lane math as the
//! split-layout kernels, and re-interleaves on store.

use core::arch::x86_64::*;

use super::SIGN_MASK;
use crate::mathf::sqrtf;

/// [r0 i0 r1 i1], [r2 i2 r3 i3] -> ([r0 r1 r2 r3], [i0 i1 i2 i3])
#[inline(always)]
unsafe fn deinterleave(lo: __m128, hi: __m128) -> (__m128, __m128) {
    let re = _mm_shuffle_ps(lo, hi, 0b10_00_10_00);
    let im = _mm_shuffle_ps(lo, hi, 0b11_01_11_01);
    (re, im)
}

/// Inverse of [`deinterleave`].
#[inline(always)]
unsafe fn interleave(re: __m128, im: __m128) -> (__m128, __m128) {
    (_mm_unpacklo_ps(re, im), _mm_unpackhi_ps(re, im))
}

pub fn pcomplex_mul2(dst: &mut [f32], src: &[f32]) {
    debug_assert_eq!(dst.len(), src.len());
    debug_assert_eq!(dst.len() % 2, 0);
    unsafe { mul2(dst, src) }
}

#[target_feature(enable = "sse2")]
unsafe fn mul2(dst: &mut [f32], src: &[f32]) {
    let n = dst.len();
    let mut i = 0;
    while i + 8 <= n {
        let (ar, ai) = deinterleave(
            _mm_loadu_ps(dst.as_ptr().add(i)),
            _mm_loadu_ps(dst.as_ptr().add(i + 4)),
        );
        let (br, bi) = deinterleave(
            _mm_loadu_ps(src.as_ptr().add(i)),
            _mm_loadu_ps(src.as_ptr().add(i + 4)),
        );
        let re = _mm_sub_ps(_mm_mul_ps(ar, br), _mm_mul_ps(ai, bi));
        let im = _mm_add_ps(_mm_mul_ps(ar, bi), _mm_mul_ps(ai, br));
        let (lo, hi) = interleave(re, im);
        _mm_storeu_ps(dst.as_mut_ptr().add(i), lo);
        _mm_storeu_ps(dst.as_mut_ptr().add(i + 4), hi);
        i += 8;
    }
    while i < n {
        let ar = dst[i];
        let ai = dst[i + 1];
        let br = src[i];
        let bi = src[i + 1];
        dst[i] = ar * br - ai * bi;
        dst[i + 1] = ar * bi + ai * br;
        i += 2;
    }
}

pub fn pcomplex_mul3(dst: &mut [f32], a: &[f32], b: &[f32]) {
    debug_assert_eq!(dst.len(), a.len());
    debug_assert_eq!(dst.len(), b.len());
    unsafe { mul3(dst, a, b) }
}

#[target_feature(enable = "sse2")]
unsafe fn mul3(dst: &mut [f32], a: &[f32], b: &[f32]) {
    let n = dst.len();
    let mut i = 0;
    while i + 8 <= n {
        let (ar, ai) = deinterleave(
            _mm_loadu_ps(a.as_ptr().add(i)),
            _mm_loadu_ps(a.as_ptr().add(i + 4)),
        );
        let (br, bi) = deinterleave(
            _mm_loadu_ps(b.as_ptr().add(i)),
            _mm_loadu_ps(b.as_ptr().add(i + 4)),
        );
        let re = _mm_sub_ps(_mm_mul_ps(ar, br), _mm_mul_ps(ai, bi));
        let im = _mm_add_ps(_mm_mul_ps(ar, bi), _mm_mul_ps(ai, br));
        let (lo, hi) = interleave(re, im);
        _mm_storeu_ps(dst.as_mut_ptr().add(i), lo);
        _mm_storeu_ps(dst.as_mut_ptr().add(i + 4), hi);
        i += 8;
    }
    while i < n {
        let ar = a[i];
        let ai = a[i + 1];
        let br = b[i];
        let bi = b[i + 1];
        dst[i] = ar * br - ai * bi;
        dst[i + 1] = ar * bi + ai * br;
        i += 2;
    }
}

pub fn pcomplex_div2(dst: &mut [f32], src: &[f32]) {
    debug_assert_eq!(dst.len(), src.len());
    unsafe { div_core(dst, src, false) }
}

pub fn pcomplex_rdiv2(dst: &mut [f32], src: &[f32]) {
    debug_assert_eq!(dst.len(), src.len());
    unsafe { div_core(dst, src, true) }
}

#[target_feature(enable = "sse2")]
unsafe fn div_core(dst: &mut [f32], src: &[f32], swapped: bool) {
    let n = dst.len();
    let mut i = 0;
    while i + 8 <= n {
        let (dr, di) = deinterleave(
            _mm_loadu_ps(dst.as_ptr().add(i)),
            _mm_loadu_ps(dst.as_ptr().add(i + 4)),
        );
        let (sr, si) = deinterleave(
            _mm_loadu_ps(src.as_ptr().add(i)),
            _mm_loadu_ps(src.as_ptr().add(i + 4)),
        );
        let (tr, ti, br, bi) = if swapped { (sr, si, dr, di) } else { (dr, di, sr, si) };
        let r = _mm_add_ps(_mm_mul_ps(br, br), _mm_mul_ps(bi, bi));
        let re = _mm_div_ps(_mm_add_ps(_mm_mul_ps(tr, br), _mm_mul_ps(ti, bi)), r);
        let im = _mm_div_ps(_mm_sub_ps(_mm_mul_ps(ti, br), _mm_mul_ps(tr, bi)), r);
        let (lo, hi) = interleave(re, im);
        _mm_storeu_ps(dst.as_mut_ptr().add(i), lo);
        _mm_storeu_ps(dst.as_mut_ptr().add(i + 4), hi);
        i += 8;
    }
    while i < n {
        let (tr, ti, br, bi) = if swapped {
            (src[i], src[i + 1], dst[i], dst[i + 1])
        } else {
            (dst[i], dst[i + 1], src[i], src[i + 1])
        };
        let r = br * br + bi * bi;
        dst[i] = (tr * br + ti * bi) / r;
        dst[i + 1] = (ti * br - tr * bi) / r;
        i += 2;
    }
}

pub fn pcomplex_div3(dst: &mut [f32], t: &[f32], b: &[f32]) {
    debug_assert_eq!(dst.len(), t.len());
    debug_assert_eq!(dst.len(), b.len());
    unsafe { div3_impl(dst, t, b) }
}

#[target_feature(enable = "sse2")]
unsafe fn div3_impl(dst: &mut [f32], t: &[f32], b: &[f32]) {
    let n = dst.len();
    let mut i = 0;
    while i + 8 <= n {
        let (tr, ti) = deinterleave(
            _mm_loadu_ps(t.as_ptr().add(i)),
            _mm_loadu_ps(t.as_ptr().add(i + 4)),
        );
        let (br, bi) = deinterleave(
            _mm_loadu_ps(b.as_ptr().add(i)),
            _mm_loadu_ps(b.as_ptr().add(i + 4)),
        );
        let r = _mm_add_ps(_mm_mul_ps(br, br), _mm_mul_ps(bi, bi));
        let re = _mm_div_ps(_mm_add_ps(_mm_mul_ps(tr, br), _mm_mul_ps(ti, bi)), r);
        let im = _mm_div_ps(_mm_sub_ps(_mm_mul_ps(ti, br), _mm_mul_ps(tr, bi)), r);
        let (lo, hi) = interleave(re, im);
        _mm_storeu_ps(dst.as_mut_ptr().add(i), lo);
        _mm_storeu_ps(dst.as_mut_ptr().add(i + 4), hi);
        i += 8;
    }
    while i < n {
        let tr = t[i];
        let ti = t[i + 1];
        let br = b[i];
        let bi = b[i + 1];
        let r = br * br + bi * bi;
        dst[i] = (tr * br + ti * bi) / r;
        dst[i + 1] = (ti * br - tr * bi) / r;
        i += 2;
    }
}

pub fn pcomplex_rcp1(dst: &mut [f32]) {
    debug_assert_eq!(dst.len() % 2, 0);
    unsafe { rcp1(dst) }
}

#[target_feature(enable = "sse2")]
unsafe fn rcp1(dst: &mut [f32]) {
    let n = dst.len();
    let one = _mm_set1_ps(1.0);
    let sign = _mm_castsi128_ps(_mm_set1_epi32(SIGN_MASK));
    let mut i = 0;
    while i + 8 <= n {
        let (re, im) = deinterleave(
            _mm_loadu_ps(dst.as_ptr().add(i)),
            _mm_loadu_ps(dst.as_ptr().add(i + 4)),
        );
        let d = _mm_div_ps(one, _mm_add_ps(_mm_mul_ps(re, re), _mm_mul_ps(im, im)));
        let (lo, hi) = interleave(
            _mm_mul_ps(re, d),
            _mm_xor_ps(_mm_mul_ps(im, d), sign),
        );
        _mm_storeu_ps(dst.as_mut_ptr().add(i), lo);
        _mm_storeu_ps(dst.as_mut_ptr().add(i + 4), hi);
        i += 8;
    }
    while i < n {
        let re = dst[i];
        let im = dst[i + 1];
        let k = 1.0 / (re * re + im * im);
        dst[i] = re * k;
        dst[i + 1] = -(im * k);
        i += 2;
    }
}

pub fn pcomplex_rcp2(dst: &mut [f32], src: &[f32]) {
    debug_assert_eq!(dst.len(), src.len());
    unsafe { rcp2(dst, src) }
}

#[target_feature(enable = "sse2")]
unsafe fn rcp2(dst: &mut [f32], src: &[f32]) {
    let n = dst.len();
    let one = _mm_set1_ps(1.0);
    let sign = _mm_castsi128_ps(_mm_set1_epi32(SIGN_MASK));
    let mut i = 0;
    while i + 8 <= n {
        let (re, im) = deinterleave(
            _mm_loadu_ps(src.as_ptr().add(i)),
            _mm_loadu_ps(src.as_ptr().add(i + 4)),
        );
        let d = _mm_div_ps(one, _mm_add_ps(_mm_mul_ps(re, re), _mm_mul_ps(im, im)));
        let (lo, hi) = interleave(
            _mm_mul_ps(re, d),
            _mm_xor_ps(_mm_mul_ps(im, d), sign),
        );
        _mm_storeu_ps(dst.as_mut_ptr().add(i), lo);
        _mm_storeu_ps(dst.as_mut_ptr().add(i + 4), hi);
        i += 8;
    }
    while i < n {
        let re = src[i];
        let im = src[i + 1];
        let k = 1.0 / (re * re + im * im);
        dst[i] = re * k;
        dst[i + 1] = -(im * k);
        i += 2;
    }
}

pub fn pcomplex_mod(dst: &mut [f32], src: &[f32]) {
    debug_assert_eq!(dst.len() * 2, src.len());
    unsafe { mod_impl(dst, src) }
}

#[target_feature(enable = "sse2")]
unsafe fn mod_impl(dst: &mut [f32], src: &[f32]) {
    let n = dst.len();
    let mut i = 0;
    while i + 4 <= n {
        let (re, im) = deinterleave(
            _mm_loadu_ps(src.as_ptr().add(2 * i)),
            _mm_loadu_ps(src.as_ptr().add(2 * i + 4)),
        );
        let mag = _mm_sqrt_ps(_mm_add_ps(_mm_mul_ps(re, re), _mm_mul_ps(im, im)));
        _mm_storeu_ps(dst.as_mut_ptr().add(i), mag);
        i += 4;
    }
    while i < n {
        let re = src[2 * i];
        let im = src[2 * i + 1];
        dst[i] = sqrtf(re * re + im * im);
        i += 1;
    }
}

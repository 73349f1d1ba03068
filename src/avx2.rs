//! x86_64 AVX2+FMA kernel set.
//!
//! 8-wide split-layout complex arithmetic with fused multiply-add. The
//! split layout already keeps re/im in separate rails, so no cross-lane
//! shuffling is needed and the kernels are straight-line lane math.
//!
//! This module is crate-internal and reachable only through the dispatch
//! table, which installs it only when the capability probe reports both
//! AVX2 and FMA; that is what makes the wrappers safe to call.

use core::arch::x86_64::*;

use crate::mathf::sqrtf;

const SIGN_MASK: i32 = i32::MIN;

pub fn complex_mul2(dst_re: &mut [f32], dst_im: &mut [f32], src_re: &[f32], src_im: &[f32]) {
    debug_assert_eq!(dst_re.len(), dst_im.len());
    debug_assert_eq!(dst_re.len(), src_re.len());
    debug_assert_eq!(dst_re.len(), src_im.len());
    unsafe { mul2(dst_re, dst_im, src_re, src_im) }
}

#[target_feature(enable = "avx2,fma")]
unsafe fn mul2(dst_re: &mut [f32], dst_im: &mut [f32], src_re: &[f32], src_im: &[f32]) {
    let n = dst_re.len();
    let mut i = 0;
    while i + 8 <= n {
        let ar = _mm256_loadu_ps(dst_re.as_ptr().add(i));
        let ai = _mm256_loadu_ps(dst_im.as_ptr().add(i));
        let br = _mm256_loadu_ps(src_re.as_ptr().add(i));
        let bi = _mm256_loadu_ps(src_im.as_ptr().add(i));
        let re = _mm256_fmsub_ps(ar, br, _mm256_mul_ps(ai, bi));
        let im = _mm256_fmadd_ps(ar, bi, _mm256_mul_ps(ai, br));
        _mm256_storeu_ps(dst_re.as_mut_ptr().add(i), re);
        _mm256_storeu_ps(dst_im.as_mut_ptr().add(i), im);
        i += 8;
    }
    while i < n {
        let ar = dst_re[i];
        let ai = dst_im[i];
        let br = src_re[i];
        let bi = src_im[i];
        dst_re[i] = ar * br - ai * bi;
        dst_im[i] = ar * bi + ai * br;
        i += 1;
    }
}

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
    unsafe { mul3(dst_re, dst_im, a_re, a_im, b_re, b_im) }
}

#[target_feature(enable = "avx2,fma")]
unsafe fn mul3(
    dst_re: &mut [f32],
    dst_im: &mut [f32],
    a_re: &[f32],
    a_im: &[f32],
    b_re: &[f32],
    b_im: &[f32],
) {
    let n = dst_re.len();
    let mut i = 0;
    while i + 8 <= n {
        let ar = _mm256_loadu_ps(a_re.as_ptr().add(i));
        let ai = _mm256_loadu_ps(a_im.as_ptr().add(i));
        let br = _mm256_loadu_ps(b_re.as_ptr().add(i));
        let bi = _mm256_loadu_ps(b_im.as_ptr().add(i));
        let re = _mm256_fmsub_ps(ar, br, _mm256_mul_ps(ai, bi));
        let im = _mm256_fmadd_ps(ar, bi, _mm256_mul_ps(ai, br));
        _mm256_storeu_ps(dst_re.as_mut_ptr().add(i), re);
        _mm256_storeu_ps(dst_im.as_mut_ptr().add(i), im);
        i += 8;
    }
    while i < n {
        let ar = a_re[i];
        let ai = a_im[i];
        let br = b_re[i];
        let bi = b_im[i];
        dst_re[i] = ar * br - ai * bi;
        dst_im[i] = ar * bi + ai * br;
        i += 1;
    }
}

pub fn complex_div2(dst_re: &mut [f32], dst_im: &mut [f32], src_re: &[f32], src_im: &[f32]) {
    debug_assert_eq!(dst_re.len(), dst_im.len());
    unsafe { div_core(dst_re, dst_im, src_re, src_im, false) }
}

pub fn complex_rdiv2(dst_re: &mut [f32], dst_im: &mut [f32], src_re: &[f32], src_im: &[f32]) {
    debug_assert_eq!(dst_re.len(), dst_im.len());
    unsafe { div_core(dst_re, dst_im, src_re, src_im, true) }
}

#[target_feature(enable = "avx2,fma")]
unsafe fn div_core(
    dst_re: &mut [f32],
    dst_im: &mut [f32],
    src_re: &[f32],
    src_im: &[f32],
    swapped: bool,
) {
    let n = dst_re.len();
    let mut i = 0;
    while i + 8 <= n {
        let dr = _mm256_loadu_ps(dst_re.as_ptr().add(i));
        let di = _mm256_loadu_ps(dst_im.as_ptr().add(i));
        let sr = _mm256_loadu_ps(src_re.as_ptr().add(i));
        let si = _mm256_loadu_ps(src_im.as_ptr().add(i));
        let (tr, ti, br, bi) = if swapped { (sr, si, dr, di) } else { (dr, di, sr, si) };
        let r = _mm256_fmadd_ps(br, br, _mm256_mul_ps(bi, bi));
        let re = _mm256_div_ps(_mm256_fmadd_ps(tr, br, _mm256_mul_ps(ti, bi)), r);
        let im = _mm256_div_ps(_mm256_fmsub_ps(ti, br, _mm256_mul_ps(tr, bi)), r);
        _mm256_storeu_ps(dst_re.as_mut_ptr().add(i), re);
        _mm256_storeu_ps(dst_im.as_mut_ptr().add(i), im);
        i += 8;
    }
    while i < n {
        let (tr, ti, br, bi) = if swapped {
            (src_re[i], src_im[i], dst_re[i], dst_im[i])
        } else {
            (dst_re[i], dst_im[i], src_re[i], src_im[i])
        };
        let r = br * br + bi * bi;
        dst_re[i] = (tr * br + ti * bi) / r;
        dst_im[i] = (ti * br - tr * bi) / r;
        i += 1;
    }
}

pub fn complex_div3(
    dst_re: &mut [f32],
    dst_im: &mut [f32],
    t_re: &[f32],
    t_im: &[f32],
    b_re: &[f32],
    b_im: &[f32],
) {
    debug_assert_eq!(dst_re.len(), dst_im.len());
    unsafe { div3_impl(dst_re, dst_im, t_re, t_im, b_re, b_im) }
}

#[target_feature(enable = "avx2,fma")]
unsafe fn div3_impl(
    dst_re: &mut [f32],
    dst_im: &mut [f32],
    t_re: &[f32],
    t_im: &[f32],
    b_re: &[f32],
    b_im: &[f32],
) {
    let n = dst_re.len();
    let mut i = 0;
    while i + 8 <= n {
        let tr = _mm256_loadu_ps(t_re.as_ptr().add(i));
        let ti = _mm256_loadu_ps(t_im.as_ptr().add(i));
        let br = _mm256_loadu_ps(b_re.as_ptr().add(i));
        let bi = _mm256_loadu_ps(b_im.as_ptr().add(i));
        let r = _mm256_fmadd_ps(br, br, _mm256_mul_ps(bi, bi));
        let re = _mm256_div_ps(_mm256_fmadd_ps(tr, br, _mm256_mul_ps(ti, bi)), r);
        let im = _mm256_div_ps(_mm256_fmsub_ps(ti, br, _mm256_mul_ps(tr, bi)), r);
        _mm256_storeu_ps(dst_re.as_mut_ptr().add(i), re);
        _mm256_storeu_ps(dst_im.as_mut_ptr().add(i), im);
        i += 8;
    }
    while i < n {
        let tr = t_re[i];
        let ti = t_im[i];
        let br = b_re[i];
        let bi = b_im[i];
        let r = br * br + bi * bi;
        dst_re[i] = (tr * br + ti * bi) / r;
        dst_im[i] = (ti * br - tr * bi) / r;
        i += 1;
    }
}

pub fn complex_rcp1(dst_re: &mut [f32], dst_im: &mut [f32]) {
    debug_assert_eq!(dst_re.len(), dst_im.len());
    unsafe { rcp1(dst_re, dst_im) }
}

#[target_feature(enable = "avx2,fma")]
unsafe fn rcp1(dst_re: &mut [f32], dst_im: &mut [f32]) {
    let n = dst_re.len();
    let one = _mm256_set1_ps(1.0);
    let sign = _mm256_castsi256_ps(_mm256_set1_epi32(SIGN_MASK));
    let mut i = 0;
    while i + 8 <= n {
        let re = _mm256_loadu_ps(dst_re.as_ptr().add(i));
        let im = _mm256_loadu_ps(dst_im.as_ptr().add(i));
        let d = _mm256_div_ps(one, _mm256_fmadd_ps(re, re, _mm256_mul_ps(im, im)));
        _mm256_storeu_ps(dst_re.as_mut_ptr().add(i), _mm256_mul_ps(re, d));
        _mm256_storeu_ps(
            dst_im.as_mut_ptr().add(i),
            _mm256_xor_ps(_mm256_mul_ps(im, d), sign),
        );
        i += 8;
    }
    while i < n {
        let re = dst_re[i];
        let im = dst_im[i];
        let d = 1.0 / (re * re + im * im);
        dst_re[i] = re * d;
        dst_im[i] = -(im * d);
        i += 1;
    }
}

pub fn complex_rcp2(dst_re: &mut [f32], dst_im: &mut [f32], src_re: &[f32], src_im: &[f32]) {
    debug_assert_eq!(dst_re.len(), dst_im.len());
    debug_assert_eq!(dst_re.len(), src_re.len());
    debug_assert_eq!(dst_re.len(), src_im.len());
    unsafe { rcp2(dst_re, dst_im, src_re, src_im) }
}

#[target_feature(enable = "avx2,fma")]
unsafe fn rcp2(dst_re: &mut [f32], dst_im: &mut [f32], src_re: &[f32], src_im: &[f32]) {
    let n = dst_re.len();
    let one = _mm256_set1_ps(1.0);
    let sign = _mm256_castsi256_ps(_mm256_set1_epi32(SIGN_MASK));
    let mut i = 0;
    while i + 8 <= n {
        let re = _mm256_loadu_ps(src_re.as_ptr().add(i));
        let im = _mm256_loadu_ps(src_im.as_ptr().add(i));
        let d = _mm256_div_ps(one, _mm256_fmadd_ps(re, re, _mm256_mul_ps(im, im)));
        _mm256_storeu_ps(dst_re.as_mut_ptr().add(i), _mm256_mul_ps(re, d));
        _mm256_storeu_ps(
            dst_im.as_mut_ptr().add(i),
            _mm256_xor_ps(_mm256_mul_ps(im, d), sign),
        );
        i += 8;
    }
    while i < n {
        let re = src_re[i];
        let im = src_im[i];
        let d = 1.0 / (re * re + im * im);
        dst_re[i] = re * d;
        dst_im[i] = -(im * d);
        i += 1;
    }
}

pub fn complex_mod(dst: &mut [f32], src_re: &[f32], src_im: &[f32]) {
    debug_assert_eq!(dst.len(), src_re.len());
    debug_assert_eq!(dst.len(), src_im.len());
    unsafe { mod_impl(dst, src_re, src_im) }
}

#[target_feature(enable = "avx2,fma")]
unsafe fn mod_impl(dst: &mut [f32], src_re: &[f32], src_im: &[f32]) {
    let n = dst.len();
    let mut i = 0;
    while i + 8 <= n {
        let re = _mm256_loadu_ps(src_re.as_ptr().add(i));
        let im = _mm256_loadu_ps(src_im.as_ptr().add(i));
        let mag = _mm256_sqrt_ps(_mm256_fmadd_ps(re, re, _mm256_mul_ps(im, im)));
        _mm256_storeu_ps(dst.as_mut_ptr().add(i), mag);
        i += 8;
    }
    while i < n {
        let re = src_re[i];
        let im = src_im[i];
        dst[i] = sqrtf(re * re + im * im);
        i += 1;
    }
}

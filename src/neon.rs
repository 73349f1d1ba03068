//! AArch64 NEON kernel set.
//!
//! 4-wide split-layout complex arithmetic using fused multiply-add and
//! multiply-subtract. Layout and tail handling mirror the x86_64 sets:
//! full vector blocks, then a scalar tail with the identical formula.
//!
//! This module is crate-internal and reachable only through the dispatch
//! table, which installs it only when the capability probe reports NEON;
//! that is what makes the wrappers safe to call.

use core::arch::aarch64::*;

use crate::mathf::sqrtf;

pub fn complex_mul2(dst_re: &mut [f32], dst_im: &mut [f32], src_re: &[f32], src_im: &[f32]) {
    debug_assert_eq!(dst_re.len(), dst_im.len());
    debug_assert_eq!(dst_re.len(), src_re.len());
    debug_assert_eq!(dst_re.len(), src_im.len());
    unsafe { mul2(dst_re, dst_im, src_re, src_im) }
}

#[target_feature(enable = "neon")]
unsafe fn mul2(dst_re: &mut [f32], dst_im: &mut [f32], src_re: &[f32], src_im: &[f32]) {
    let n = dst_re.len();
    let mut i = 0;
    while i + 4 <= n {
        let ar = vld1q_f32(dst_re.as_ptr().add(i));
        let ai = vld1q_f32(dst_im.as_ptr().add(i));
        let br = vld1q_f32(src_re.as_ptr().add(i));
        let bi = vld1q_f32(src_im.as_ptr().add(i));
        let re = vfmsq_f32(vmulq_f32(ar, br), ai, bi);
        let im = vfmaq_f32(vmulq_f32(ar, bi), ai, br);
        vst1q_f32(dst_re.as_mut_ptr().add(i), re);
        vst1q_f32(dst_im.as_mut_ptr().add(i), im);
        i += 4;
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

#[target_feature(enable = "neon")]
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
    while i + 4 <= n {
        let ar = vld1q_f32(a_re.as_ptr().add(i));
        let ai = vld1q_f32(a_im.as_ptr().add(i));
        let br = vld1q_f32(b_re.as_ptr().add(i));
        let bi = vld1q_f32(b_im.as_ptr().add(i));
        let re = vfmsq_f32(vmulq_f32(ar, br), ai, bi);
        let im = vfmaq_f32(vmulq_f32(ar, bi), ai, br);
        vst1q_f32(dst_re.as_mut_ptr().add(i), re);
        vst1q_f32(dst_im.as_mut_ptr().add(i), im);
        i += 4;
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

#[target_feature(enable = "neon")]
unsafe fn div_core(
    dst_re: &mut [f32],
    dst_im: &mut [f32],
    src_re: &[f32],
    src_im: &[f32],
    swapped: bool,
) {
    let n = dst_re.len();
    let mut i = 0;
    while i + 4 <= n {
        let dr = vld1q_f32(dst_re.as_ptr().add(i));
        let di = vld1q_f32(dst_im.as_ptr().add(i));
        let sr = vld1q_f32(src_re.as_ptr().add(i));
        let si = vld1q_f32(src_im.as_ptr().add(i));
        let (tr, ti, br, bi) = if swapped { (sr, si, dr, di) } else { (dr, di, sr, si) };
        let r = vfmaq_f32(vmulq_f32(br, br), bi, bi);
        let re = vdivq_f32(vfmaq_f32(vmulq_f32(tr, br), ti, bi), r);
        let im = vdivq_f32(vfmsq_f32(vmulq_f32(ti, br), tr, bi), r);
        vst1q_f32(dst_re.as_mut_ptr().add(i), re);
        vst1q_f32(dst_im.as_mut_ptr().add(i), im);
        i += 4;
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

#[target_feature(enable = "neon")]
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
    while i + 4 <= n {
        let tr = vld1q_f32(t_re.as_ptr().add(i));
        let ti = vld1q_f32(t_im.as_ptr().add(i));
        let br = vld1q_f32(b_re.as_ptr().add(i));
        let bi = vld1q_f32(b_im.as_ptr().add(i));
        let r = vfmaq_f32(vmulq_f32(br, br), bi, bi);
        let re = vdivq_f32(vfmaq_f32(vmulq_f32(tr, br), ti, bi), r);
        let im = vdivq_f32(vfmsq_f32(vmulq_f32(ti, br), tr, bi), r);
        vst1q_f32(dst_re.as_mut_ptr().add(i), re);
        vst1q_f32(dst_im.as_mut_ptr().add(i), im);
        i += 4;
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

#[target_feature(enable = "neon")]
unsafe fn rcp1(dst_re: &mut [f32], dst_im: &mut [f32]) {
    let n = dst_re.len();
    let one = vdupq_n_f32(1.0);
    let mut i = 0;
    while i + 4 <= n {
        let re = vld1q_f32(dst_re.as_ptr().add(i));
        let im = vld1q_f32(dst_im.as_ptr().add(i));
        let d = vdivq_f32(one, vfmaq_f32(vmulq_f32(re, re), im, im));
        vst1q_f32(dst_re.as_mut_ptr().add(i), vmulq_f32(re, d));
        vst1q_f32(dst_im.as_mut_ptr().add(i), vnegq_f32(vmulq_f32(im, d)));
        i += 4;
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

#[target_feature(enable = "neon")]
unsafe fn rcp2(dst_re: &mut [f32], dst_im: &mut [f32], src_re: &[f32], src_im: &[f32]) {
    let n = dst_re.len();
    let one = vdupq_n_f32(1.0);
    let mut i = 0;
    while i + 4 <= n {
        let re = vld1q_f32(src_re.as_ptr().add(i));
        let im = vld1q_f32(src_im.as_ptr().add(i));
        let d = vdivq_f32(one, vfmaq_f32(vmulq_f32(re, re), im, im));
        vst1q_f32(dst_re.as_mut_ptr().add(i), vmulq_f32(re, d));
        vst1q_f32(dst_im.as_mut_ptr().add(i), vnegq_f32(vmulq_f32(im, d)));
        i += 4;
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

#[target_feature(enable = "neon")]
unsafe fn mod_impl(dst: &mut [f32], src_re: &[f32], src_im: &[f32]) {
    let n = dst.len();
    let mut i = 0;
    while i + 4 <= n {
        let re = vld1q_f32(src_re.as_ptr().add(i));
        let im = vld1q_f32(src_im.as_ptr().add(i));
        let mag = vsqrtq_f32(vfmaq_f32(vmulq_f32(re, re), im, im));
        vst1q_f32(dst.as_mut_ptr().add(i), mag);
        i += 4;
    }
    while i < n {
        let re = src_re[i];
        let im = src_im[i];
        dst[i] = sqrtf(re * re + im * im);
        i += 1;
    }
}

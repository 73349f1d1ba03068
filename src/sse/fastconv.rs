//! Fast-convolution stage kernels, SSE2.
//!
//! The FFT butterflies run two adjacent complex butterflies per vector: the
//! twiddle pair for columns `j` and `j+1` is splatted into duplicated cos
//! lanes and sign-alternated sin lanes, so one multiply-add computes both
//! rotated values. Stage 0 (unit twiddle) folds the butterfly into a single
//! shuffle/add/sub per vector. The untangle and repack passes are
//! sequential recurrences over mirrored bin pairs and stay scalar; the FFT
//! stages dominate the cost.

use core::arch::x86_64::*;

use crate::fastconv::bit_rev_permute;
use crate::generic::fastconv::{repack, untangle};
use crate::twiddle::{self, XFFT_COS, XFFT_SIN};

pub fn fastconv_parse(spectrum: &mut [f32], signal: &[f32], rank: usize) {
    debug_assert_eq!(spectrum.len(), 1usize << rank);
    debug_assert_eq!(signal.len(), spectrum.len());
    spectrum.copy_from_slice(signal);
    unsafe { fft_forward(spectrum, rank - 1) };
    untangle(spectrum, rank);
}

pub fn fastconv_apply_spectrum(spectrum: &mut [f32], kernel: &[f32], rank: usize) {
    debug_assert_eq!(spectrum.len(), 1usize << rank);
    debug_assert_eq!(kernel.len(), spectrum.len());
    spectrum[0] *= kernel[0];
    spectrum[1] *= kernel[1];
    super::pcomplex::pcomplex_mul2(&mut spectrum[2..], &kernel[2..]);
}

pub fn fastconv_apply3(dst: &mut [f32], a: &[f32], b: &[f32], rank: usize) {
    debug_assert_eq!(dst.len(), 1usize << rank);
    debug_assert_eq!(a.len(), dst.len());
    debug_assert_eq!(b.len(), dst.len());
    dst[0] = a[0] * b[0];
    dst[1] = a[1] * b[1];
    super::pcomplex::pcomplex_mul3(&mut dst[2..], &a[2..], &b[2..]);
}

pub fn fastconv_restore(signal: &mut [f32], spectrum: &[f32], rank: usize) {
    debug_assert_eq!(signal.len(), 1usize << rank);
    debug_assert_eq!(spectrum.len(), signal.len());
    repack(signal, spectrum, rank);
    unsafe { fft_inverse(signal, rank - 1) };
}

/// Stage 0 of either direction: butterflies between adjacent complex
/// samples with unit twiddle, one vector per butterfly.
#[target_feature(enable = "sse2")]
unsafe fn stage0(buf: &mut [f32], m: usize) {
    let p = buf.as_mut_ptr();
    let mut i = 0;
    while i < 2 * m {
        let a = _mm_loadu_ps(p.add(i));
        // [r1 i1 r0 i0]
        let b = _mm_shuffle_ps(a, a, 0b01_00_11_10);
        let sum = _mm_add_ps(a, b);
        let diff = _mm_sub_ps(a, b);
        // [sum.r0 sum.i0 diff.r0 diff.i0]
        _mm_storeu_ps(p.add(i), _mm_shuffle_ps(sum, diff, 0b01_00_01_00));
        i += 4;
    }
}

#[target_feature(enable = "sse2")]
unsafe fn fft_forward(buf: &mut [f32], m_rank: usize) {
    debug_assert_eq!(buf.len(), 2 << m_rank);
    bit_rev_permute(buf, m_rank);
    let m = 1usize << m_rank;
    stage0(buf, m);
    let p = buf.as_mut_ptr();
    for s in 1..m_rank {
        let h = 1usize << s;
        let shift = twiddle::stage_shift(s);
        let mut base = 0;
        while base < m {
            let mut j = 0;
            while j < h {
                let c0 = XFFT_COS[j << shift];
                let s0 = XFFT_SIN[j << shift];
                let c1 = XFFT_COS[(j + 1) << shift];
                let s1 = XFFT_SIN[(j + 1) << shift];
                let wc = _mm_set_ps(c1, c1, c0, c0);
                // lanes [s0, -s0, s1, -s1]: t = v*wc + swap(v)*ws is
                // (vr*c + vi*s, vi*c - vr*s) per sample
                let ws = _mm_set_ps(-s1, s1, -s0, s0);
                let pu = p.add(2 * (base + j));
                let pv = p.add(2 * (base + j + h));
                let u = _mm_loadu_ps(pu);
                let v = _mm_loadu_ps(pv);
                let vswap = _mm_shuffle_ps(v, v, 0b10_11_00_01);
                let t = _mm_add_ps(_mm_mul_ps(v, wc), _mm_mul_ps(vswap, ws));
                _mm_storeu_ps(pu, _mm_add_ps(u, t));
                _mm_storeu_ps(pv, _mm_sub_ps(u, t));
                j += 2;
            }
            base += 2 * h;
        }
    }
}

#[target_feature(enable = "sse2")]
unsafe fn fft_inverse(buf: &mut [f32], m_rank: usize) {
    debug_assert_eq!(buf.len(), 2 << m_rank);
    bit_rev_permute(buf, m_rank);
    let m = 1usize << m_rank;
    stage0(buf, m);
    let p = buf.as_mut_ptr();
    for s in 1..m_rank {
        let h = 1usize << s;
        let shift = twiddle::stage_shift(s);
        let mut base = 0;
        while base < m {
            let mut j = 0;
            while j < h {
                let c0 = XFFT_COS[j << shift];
                let s0 = XFFT_SIN[j << shift];
                let c1 = XFFT_COS[(j + 1) << shift];
                let s1 = XFFT_SIN[(j + 1) << shift];
                let wc = _mm_set_ps(c1, c1, c0, c0);
                // conjugated rotation: lanes [-s0, s0, -s1, s1]
                let ws = _mm_set_ps(s1, -s1, s0, -s0);
                let pu = p.add(2 * (base + j));
                let pv = p.add(2 * (base + j + h));
                let u = _mm_loadu_ps(pu);
                let v = _mm_loadu_ps(pv);
                let vswap = _mm_shuffle_ps(v, v, 0b10_11_00_01);
                let t = _mm_add_ps(_mm_mul_ps(v, wc), _mm_mul_ps(vswap, ws));
                _mm_storeu_ps(pu, _mm_add_ps(u, t));
                _mm_storeu_ps(pv, _mm_sub_ps(u, t));
                j += 2;
            }
            base += 2 * h;
        }
    }
}

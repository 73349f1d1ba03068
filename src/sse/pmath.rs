//! Elementwise arithmetic peers, SSE2.
//!
//! `mod3` and the index searches stay on the scalar path; truncation via
//! integer conversion overflows for large quotients and the searches are
//! reduction-shaped rather than streaming.

use core::arch::x86_64::*;

macro_rules! op3 {
    ($name:ident, $inner:ident, $vop:ident, $sop:tt) => {
        pub fn $name(dst: &mut [f32], a: &[f32], b: &[f32]) {
            debug_assert_eq!(dst.len(), a.len());
            debug_assert_eq!(dst.len(), b.len());
            unsafe { $inner(dst, a, b) }
        }

        #[target_feature(enable = "sse2")]
        unsafe fn $inner(dst: &mut [f32], a: &[f32], b: &[f32]) {
            let n = dst.len();
            let mut i = 0;
            while i + 4 <= n {
                let x = _mm_loadu_ps(a.as_ptr().add(i));
                let y = _mm_loadu_ps(b.as_ptr().add(i));
                _mm_storeu_ps(dst.as_mut_ptr().add(i), $vop(x, y));
                i += 4;
            }
            while i < n {
                dst[i] = a[i] $sop b[i];
                i += 1;
            }
        }
    };
}

op3!(add3, add3_impl, _mm_add_ps, +);
op3!(sub3, sub3_impl, _mm_sub_ps, -);
op3!(mul3, mul3_impl, _mm_mul_ps, *);
op3!(div3, div3_impl, _mm_div_ps, /);

macro_rules! op_k2 {
    ($name:ident, $inner:ident, $vop:ident, $sop:tt) => {
        pub fn $name(dst: &mut [f32], k: f32) {
            unsafe { $inner(dst, k) }
        }

        #[target_feature(enable = "sse2")]
        unsafe fn $inner(dst: &mut [f32], k: f32) {
            let n = dst.len();
            let kv = _mm_set1_ps(k);
            let mut i = 0;
            while i + 4 <= n {
                let x = _mm_loadu_ps(dst.as_ptr().add(i));
                _mm_storeu_ps(dst.as_mut_ptr().add(i), $vop(x, kv));
                i += 4;
            }
            while i < n {
                dst[i] = dst[i] $sop k;
                i += 1;
            }
        }
    };
}

op_k2!(add_k2, add_k2_impl, _mm_add_ps, +);
op_k2!(sub_k2, sub_k2_impl, _mm_sub_ps, -);
op_k2!(mul_k2, mul_k2_impl, _mm_mul_ps, *);
op_k2!(div_k2, div_k2_impl, _mm_div_ps, /);

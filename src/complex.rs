//! Split-layout complex arithmetic (separate re/im rails).
//!
//! Checked entry points over the process-global dispatch table. A complex
//! buffer of `count` values is a pair of `count`-float slices, one per
//! rail; all four (or six) slices of a call must agree in length. The
//! kernels follow IEEE semantics throughout, so division by a zero
//! denominator yields infinities or NaNs rather than a reported error.

#![cfg(feature = "std")]

use crate::dispatch::table;
use crate::DspError;

fn check2(a: usize, b: usize) -> Result<(), DspError> {
    if a != b {
        return Err(DspError::MismatchedLengths);
    }
    Ok(())
}

fn check4(a: usize, b: usize, c: usize, d: usize) -> Result<(), DspError> {
    if a != b || a != c || a != d {
        return Err(DspError::MismatchedLengths);
    }
    Ok(())
}

fn check6(a: usize, b: usize, c: usize, d: usize, e: usize, f: usize) -> Result<(), DspError> {
    if a != b || a != c || a != d || a != e || a != f {
        return Err(DspError::MismatchedLengths);
    }
    Ok(())
}

/// `dst *= src`, elementwise complex product.
pub fn complex_mul2(
    dst_re: &mut [f32],
    dst_im: &mut [f32],
    src_re: &[f32],
    src_im: &[f32],
) -> Result<(), DspError> {
    check4(dst_re.len(), dst_im.len(), src_re.len(), src_im.len())?;
    (table().complex_mul2)(dst_re, dst_im, src_re, src_im);
    Ok(())
}

/// `dst = a * b`, elementwise complex product.
pub fn complex_mul3(
    dst_re: &mut [f32],
    dst_im: &mut [f32],
    a_re: &[f32],
    a_im: &[f32],
    b_re: &[f32],
    b_im: &[f32],
) -> Result<(), DspError> {
    check6(
        dst_re.len(),
        dst_im.len(),
        a_re.len(),
        a_im.len(),
        b_re.len(),
        b_im.len(),
    )?;
    (table().complex_mul3)(dst_re, dst_im, a_re, a_im, b_re, b_im);
    Ok(())
}

/// `dst /= src`, elementwise complex quotient.
pub fn complex_div2(
    dst_re: &mut [f32],
    dst_im: &mut [f32],
    src_re: &[f32],
    src_im: &[f32],
) -> Result<(), DspError> {
    check4(dst_re.len(), dst_im.len(), src_re.len(), src_im.len())?;
    (table().complex_div2)(dst_re, dst_im, src_re, src_im);
    Ok(())
}

/// `dst = src / dst`, elementwise complex quotient with swapped operands.
pub fn complex_rdiv2(
    dst_re: &mut [f32],
    dst_im: &mut [f32],
    src_re: &[f32],
    src_im: &[f32],
) -> Result<(), DspError> {
    check4(dst_re.len(), dst_im.len(), src_re.len(), src_im.len())?;
    (table().complex_rdiv2)(dst_re, dst_im, src_re, src_im);
    Ok(())
}

/// `dst = t / b`, elementwise complex quotient.
pub fn complex_div3(
    dst_re: &mut [f32],
    dst_im: &mut [f32],
    t_re: &[f32],
    t_im: &[f32],
    b_re: &[f32],
    b_im: &[f32],
) -> Result<(), DspError> {
    check6(
        dst_re.len(),
        dst_im.len(),
        t_re.len(),
        t_im.len(),
        b_re.len(),
        b_im.len(),
    )?;
    (table().complex_div3)(dst_re, dst_im, t_re, t_im, b_re, b_im);
    Ok(())
}

/// In-place complex reciprocal.
pub fn complex_rcp1(dst_re: &mut [f32], dst_im: &mut [f32]) -> Result<(), DspError> {
    check2(dst_re.len(), dst_im.len())?;
    (table().complex_rcp1)(dst_re, dst_im);
    Ok(())
}

/// Out-of-place complex reciprocal.
pub fn complex_rcp2(
    dst_re: &mut [f32],
    dst_im: &mut [f32],
    src_re: &[f32],
    src_im: &[f32],
) -> Result<(), DspError> {
    check4(dst_re.len(), dst_im.len(), src_re.len(), src_im.len())?;
    (table().complex_rcp2)(dst_re, dst_im, src_re, src_im);
    Ok(())
}

/// Elementwise complex magnitude.
pub fn complex_mod(dst: &mut [f32], src_re: &[f32], src_im: &[f32]) -> Result<(), DspError> {
    check2(dst.len(), src_re.len())?;
    check2(dst.len(), src_im.len())?;
    (table().complex_mod)(dst, src_re, src_im);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_mismatch_is_rejected() {
        let mut re = [0.0f32; 4];
        let mut im = [0.0f32; 4];
        assert_eq!(
            complex_mul2(&mut re, &mut im, &[0.0; 3], &[0.0; 3]),
            Err(DspError::MismatchedLengths)
        );
        assert_eq!(
            complex_rcp1(&mut re, &mut im[..3]),
            Err(DspError::MismatchedLengths)
        );
    }

    #[test]
    fn dispatched_mul_matches_reference() {
        let a_re = [3.0f32, -1.0, 0.5, 2.0, 0.0];
        let a_im = [4.0f32, 0.5, -0.5, 1.0, 1.0];
        let b_re = [1.0f32, 2.0, -1.0, 0.0, 3.0];
        let b_im = [2.0f32, 2.0, 1.0, 1.0, -3.0];

        let mut d_re = a_re;
        let mut d_im = a_im;
        complex_mul2(&mut d_re, &mut d_im, &b_re, &b_im).unwrap();

        let mut r_re = a_re;
        let mut r_im = a_im;
        crate::generic::complex::complex_mul2(&mut r_re, &mut r_im, &b_re, &b_im);
        for i in 0..a_re.len() {
            assert!((d_re[i] - r_re[i]).abs() < 1e-6);
            assert!((d_im[i] - r_im[i]).abs() < 1e-6);
        }
    }
}

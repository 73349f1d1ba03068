//! Interleaved-layout complex arithmetic (alternating re/im samples).
//!
//! Checked entry points over the process-global dispatch table. A packed
//! buffer of `count` complex values holds `2*count` floats; lengths must be
//! even and agree between operands. [`pcomplex_mod`] is the exception:
//! its destination holds one real per complex source sample.

#![cfg(feature = "std")]

use crate::dispatch::table;
use crate::DspError;

fn check_packed2(dst: usize, src: usize) -> Result<(), DspError> {
    if dst != src || dst % 2 != 0 {
        return Err(DspError::MismatchedLengths);
    }
    Ok(())
}

fn check_packed3(dst: usize, a: usize, b: usize) -> Result<(), DspError> {
    if dst != a || dst != b || dst % 2 != 0 {
        return Err(DspError::MismatchedLengths);
    }
    Ok(())
}

/// `dst *= src` over packed complex samples.
pub fn pcomplex_mul2(dst: &mut [f32], src: &[f32]) -> Result<(), DspError> {
    check_packed2(dst.len(), src.len())?;
    (table().pcomplex_mul2)(dst, src);
    Ok(())
}

/// `dst = a * b` over packed complex samples.
pub fn pcomplex_mul3(dst: &mut [f32], a: &[f32], b: &[f32]) -> Result<(), DspError> {
    check_packed3(dst.len(), a.len(), b.len())?;
    (table().pcomplex_mul3)(dst, a, b);
    Ok(())
}

/// `dst /= src` over packed complex samples.
pub fn pcomplex_div2(dst: &mut [f32], src: &[f32]) -> Result<(), DspError> {
    check_packed2(dst.len(), src.len())?;
    (table().pcomplex_div2)(dst, src);
    Ok(())
}

/// `dst = src / dst` over packed complex samples.
pub fn pcomplex_rdiv2(dst: &mut [f32], src: &[f32]) -> Result<(), DspError> {
    check_packed2(dst.len(), src.len())?;
    (table().pcomplex_rdiv2)(dst, src);
    Ok(())
}

/// `dst = t / b` over packed complex samples.
pub fn pcomplex_div3(dst: &mut [f32], t: &[f32], b: &[f32]) -> Result<(), DspError> {
    check_packed3(dst.len(), t.len(), b.len())?;
    (table().pcomplex_div3)(dst, t, b);
    Ok(())
}

/// In-place packed reciprocal.
pub fn pcomplex_rcp1(dst: &mut [f32]) -> Result<(), DspError> {
    if dst.len() % 2 != 0 {
        return Err(DspError::MismatchedLengths);
    }
    (table().pcomplex_rcp1)(dst);
    Ok(())
}

/// Out-of-place packed reciprocal.
pub fn pcomplex_rcp2(dst: &mut [f32], src: &[f32]) -> Result<(), DspError> {
    check_packed2(dst.len(), src.len())?;
    (table().pcomplex_rcp2)(dst, src);
    Ok(())
}

/// Magnitudes of packed complex samples; `dst.len() * 2 == src.len()`.
pub fn pcomplex_mod(dst: &mut [f32], src: &[f32]) -> Result<(), DspError> {
    if dst.len() * 2 != src.len() {
        return Err(DspError::MismatchedLengths);
    }
    (table().pcomplex_mod)(dst, src);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odd_length_is_rejected() {
        let mut dst = [0.0f32; 3];
        assert_eq!(
            pcomplex_mul2(&mut dst, &[0.0; 3]),
            Err(DspError::MismatchedLengths)
        );
        assert_eq!(pcomplex_rcp1(&mut dst), Err(DspError::MismatchedLengths));
    }

    #[test]
    fn mod_length_contract() {
        let mut dst = [0.0f32; 2];
        assert!(pcomplex_mod(&mut dst, &[3.0, 4.0, 5.0, 12.0]).is_ok());
        assert_eq!(dst, [5.0, 13.0]);
        assert_eq!(
            pcomplex_mod(&mut dst, &[0.0; 3]),
            Err(DspError::MismatchedLengths)
        );
    }

    #[test]
    fn dispatched_mul_matches_reference() {
        let a = [3.0f32, 4.0, -1.0, 0.5, 2.0, 2.0, 0.0, 1.0];
        let b = [1.0f32, 2.0, 2.0, 2.0, -1.0, 1.0, 0.5, 0.5];
        let mut d = a;
        pcomplex_mul2(&mut d, &b).unwrap();
        let mut r = a;
        crate::generic::pcomplex::pcomplex_mul2(&mut r, &b);
        for i in 0..a.len() {
            assert!((d[i] - r[i]).abs() < 1e-6, "sample {}", i);
        }
    }
}

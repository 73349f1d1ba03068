//! Elementwise arithmetic peers dispatched through the same table.

#![cfg(feature = "std")]

use crate::dispatch::table;
use crate::DspError;

fn check3(dst: usize, a: usize, b: usize) -> Result<(), DspError> {
    if dst != a || dst != b {
        return Err(DspError::MismatchedLengths);
    }
    Ok(())
}

/// `dst = a + b`.
pub fn add3(dst: &mut [f32], a: &[f32], b: &[f32]) -> Result<(), DspError> {
    check3(dst.len(), a.len(), b.len())?;
    (table().add3)(dst, a, b);
    Ok(())
}

/// `dst = a - b`.
pub fn sub3(dst: &mut [f32], a: &[f32], b: &[f32]) -> Result<(), DspError> {
    check3(dst.len(), a.len(), b.len())?;
    (table().sub3)(dst, a, b);
    Ok(())
}

/// `dst = a * b`.
pub fn mul3(dst: &mut [f32], a: &[f32], b: &[f32]) -> Result<(), DspError> {
    check3(dst.len(), a.len(), b.len())?;
    (table().mul3)(dst, a, b);
    Ok(())
}

/// `dst = a / b`.
pub fn div3(dst: &mut [f32], a: &[f32], b: &[f32]) -> Result<(), DspError> {
    check3(dst.len(), a.len(), b.len())?;
    (table().div3)(dst, a, b);
    Ok(())
}

/// `dst = a - trunc(a/b) * b`, the truncated-division remainder.
pub fn mod3(dst: &mut [f32], a: &[f32], b: &[f32]) -> Result<(), DspError> {
    check3(dst.len(), a.len(), b.len())?;
    (table().mod3)(dst, a, b);
    Ok(())
}

/// `dst += k`.
pub fn add_k2(dst: &mut [f32], k: f32) {
    (table().add_k2)(dst, k);
}

/// `dst -= k`.
pub fn sub_k2(dst: &mut [f32], k: f32) {
    (table().sub_k2)(dst, k);
}

/// `dst *= k`.
pub fn mul_k2(dst: &mut [f32], k: f32) {
    (table().mul_k2)(dst, k);
}

/// `dst /= k`.
pub fn div_k2(dst: &mut [f32], k: f32) {
    (table().div_k2)(dst, k);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_mismatch_is_rejected() {
        let mut dst = [0.0f32; 4];
        assert_eq!(
            add3(&mut dst, &[0.0; 4], &[0.0; 3]),
            Err(DspError::MismatchedLengths)
        );
    }

    #[test]
    fn dispatched_matches_reference() {
        let a = [1.0f32, 2.0, 3.0, 4.0, 5.0];
        let b = [0.5f32, -1.0, 2.0, 4.0, 0.25];
        let mut d = [0.0f32; 5];
        let mut r = [0.0f32; 5];
        mul3(&mut d, &a, &b).unwrap();
        crate::generic::pmath::mul3(&mut r, &a, &b);
        assert_eq!(d, r);
        mod3(&mut d, &a, &b).unwrap();
        crate::generic::pmath::mod3(&mut r, &a, &b);
        assert_eq!(d, r);
    }

    #[test]
    fn broadcast_ops_apply() {
        let mut d = [1.0f32, 2.0, 3.0];
        add_k2(&mut d, 1.0);
        assert_eq!(d, [2.0, 3.0, 4.0]);
        div_k2(&mut d, 2.0);
        assert_eq!(d, [1.0, 1.5, 2.0]);
    }
}

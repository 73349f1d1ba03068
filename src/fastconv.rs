//! Fast-convolution engine: parse/apply/restore over packed spectra.
//!
//! Circular convolution of real signals of `N = 2^rank` samples. The
//! frequency-domain image of a signal lives in a packed buffer of exactly
//! `N` floats: slot 0 holds the DC value, slot 1 the Nyquist value, and
//! slots `2k`/`2k+1` the complex bin `k` for `k = 1..N/2-1`. A parsed
//! kernel spectrum can be reused across any number of apply/restore
//! passes, which is the entire point of the split into stages.
//!
//! ```
//! # #[cfg(feature = "std")] {
//! use fastdsp::fastconv;
//!
//! let rank = 4;
//! let n = 1usize << rank;
//! let mut signal = vec![0.0f32; n];
//! signal[0] = 1.0;
//! signal[1] = 0.5;
//! let mut kernel = vec![0.0f32; n];
//! kernel[0] = 1.0;
//!
//! let mut sk = vec![0.0f32; n];
//! fastconv::fastconv_parse(&mut sk, &kernel, rank).unwrap();
//! let mut out = vec![0.0f32; n];
//! let mut tmp = vec![0.0f32; n];
//! fastconv::fastconv_parse_apply(&mut out, &mut tmp, &sk, &signal, rank).unwrap();
//! assert!((out[0] - 1.0).abs() < 1e-5);
//! # }
//! ```

use crate::DspError;

pub use crate::twiddle::{MAX_RANK, MIN_RANK};

#[cfg(feature = "std")]
use crate::dispatch::table;

/// Reorder `2^m_rank` interleaved complex samples into bit-reversed index
/// order, in place.
pub(crate) fn bit_rev_permute(buf: &mut [f32], m_rank: usize) {
    let m = 1usize << m_rank;
    let mut j = 0usize;
    for i in 0..m {
        if i < j {
            buf.swap(2 * i, 2 * j);
            buf.swap(2 * i + 1, 2 * j + 1);
        }
        let mut mask = m >> 1;
        while mask > 0 && j & mask != 0 {
            j ^= mask;
            mask >>= 1;
        }
        j |= mask;
    }
}

#[cfg(any(test, feature = "std"))]
fn checked_len(rank: usize) -> Result<usize, DspError> {
    if !(MIN_RANK..=MAX_RANK).contains(&rank) {
        return Err(DspError::InvalidRank);
    }
    Ok(1usize << rank)
}

#[cfg(any(test, feature = "std"))]
fn check_buf(len: usize, expected: usize) -> Result<(), DspError> {
    if len != expected {
        return Err(DspError::MismatchedLengths);
    }
    Ok(())
}

/// Forward-transform `signal` into the packed spectrum representation.
///
/// Both buffers must hold exactly `1 << rank` floats.
#[cfg(feature = "std")]
pub fn fastconv_parse(spectrum: &mut [f32], signal: &[f32], rank: usize) -> Result<(), DspError> {
    let n = checked_len(rank)?;
    check_buf(spectrum.len(), n)?;
    check_buf(signal.len(), n)?;
    (table().fastconv_parse)(spectrum, signal, rank);
    Ok(())
}

/// Pointwise product of two packed spectra, in place: `spectrum *= kernel`.
#[cfg(feature = "std")]
pub fn fastconv_apply_spectrum(
    spectrum: &mut [f32],
    kernel: &[f32],
    rank: usize,
) -> Result<(), DspError> {
    let n = checked_len(rank)?;
    check_buf(spectrum.len(), n)?;
    check_buf(kernel.len(), n)?;
    (table().fastconv_apply_spectrum)(spectrum, kernel, rank);
    Ok(())
}

/// Inverse-transform a packed spectrum back into the time domain.
#[cfg(feature = "std")]
pub fn fastconv_restore(signal: &mut [f32], spectrum: &[f32], rank: usize) -> Result<(), DspError> {
    let n = checked_len(rank)?;
    check_buf(signal.len(), n)?;
    check_buf(spectrum.len(), n)?;
    (table().fastconv_restore)(signal, spectrum, rank);
    Ok(())
}

/// One-shot convolution of `src` against an already parsed kernel
/// spectrum: parse into `tmp`, multiply, restore into `dst`.
#[cfg(feature = "std")]
pub fn fastconv_parse_apply(
    dst: &mut [f32],
    tmp: &mut [f32],
    kernel_spectrum: &[f32],
    src: &[f32],
    rank: usize,
) -> Result<(), DspError> {
    let n = checked_len(rank)?;
    check_buf(dst.len(), n)?;
    check_buf(tmp.len(), n)?;
    check_buf(kernel_spectrum.len(), n)?;
    check_buf(src.len(), n)?;
    let t = table();
    (t.fastconv_parse)(tmp, src, rank);
    (t.fastconv_apply_spectrum)(tmp, kernel_spectrum, rank);
    (t.fastconv_restore)(dst, tmp, rank);
    Ok(())
}

/// Convolve two already parsed spectra into `dst`: `tmp = a (*) b`, then
/// restore.
#[cfg(feature = "std")]
pub fn fastconv_apply(
    dst: &mut [f32],
    tmp: &mut [f32],
    a: &[f32],
    b: &[f32],
    rank: usize,
) -> Result<(), DspError> {
    let n = checked_len(rank)?;
    check_buf(dst.len(), n)?;
    check_buf(tmp.len(), n)?;
    check_buf(a.len(), n)?;
    check_buf(b.len(), n)?;
    let t = table();
    (t.fastconv_apply3)(tmp, a, b, rank);
    (t.fastconv_restore)(dst, tmp, rank);
    Ok(())
}

/// A packed spectrum with its rank, borrowed from a caller-owned buffer.
///
/// Thin typed view over the free functions; useful when a kernel spectrum
/// is parsed once and carried around.
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct Spectrum<'a> {
    buf: &'a mut [f32],
    rank: usize,
}

#[cfg(feature = "std")]
impl<'a> Spectrum<'a> {
    /// Parse `signal` into `buf` and wrap the result.
    pub fn parse(buf: &'a mut [f32], signal: &[f32], rank: usize) -> Result<Self, DspError> {
        fastconv_parse(buf, signal, rank)?;
        Ok(Self { buf, rank })
    }

    /// Wrap a buffer that already holds packed spectrum data.
    pub fn from_parsed(buf: &'a mut [f32], rank: usize) -> Result<Self, DspError> {
        let n = checked_len(rank)?;
        check_buf(buf.len(), n)?;
        Ok(Self { buf, rank })
    }

    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Number of floats in the packed buffer, `1 << rank`.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn dc(&self) -> f32 {
        self.buf[0]
    }

    pub fn nyquist(&self) -> f32 {
        self.buf[1]
    }

    /// Complex bin `k` as `(re, im)` for `k` in `1..len()/2`; `None`
    /// outside that range (DC and Nyquist are real-valued, use their own
    /// accessors).
    pub fn bin(&self, k: usize) -> Option<(f32, f32)> {
        if k == 0 || k >= self.buf.len() / 2 {
            return None;
        }
        Some((self.buf[2 * k], self.buf[2 * k + 1]))
    }

    /// Multiply this spectrum by `kernel`, in place.
    pub fn apply(&mut self, kernel: &Spectrum<'_>) -> Result<(), DspError> {
        if kernel.rank != self.rank {
            return Err(DspError::MismatchedLengths);
        }
        fastconv_apply_spectrum(self.buf, kernel.buf, self.rank)
    }

    /// Inverse-transform into `dst` without consuming the spectrum.
    pub fn restore(&self, dst: &mut [f32]) -> Result<(), DspError> {
        fastconv_restore(dst, self.buf, self.rank)
    }

    pub fn as_slice(&self) -> &[f32] {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_rev_permute_rank3() {
        // complex indices 0..8 reorder to 0,4,2,6,1,5,3,7
        let mut buf: [f32; 16] = core::array::from_fn(|i| (i / 2) as f32);
        bit_rev_permute(&mut buf, 3);
        let order: [f32; 8] = [0.0, 4.0, 2.0, 6.0, 1.0, 5.0, 3.0, 7.0];
        for (i, &want) in order.iter().enumerate() {
            assert_eq!(buf[2 * i], want);
            assert_eq!(buf[2 * i + 1], want);
        }
    }

    #[test]
    fn bit_rev_permute_is_involution() {
        let mut buf: [f32; 64] = core::array::from_fn(|i| i as f32);
        let orig = buf;
        bit_rev_permute(&mut buf, 5);
        bit_rev_permute(&mut buf, 5);
        assert_eq!(buf, orig);
    }

    #[test]
    fn rank_bounds() {
        assert_eq!(checked_len(MIN_RANK), Ok(8));
        assert_eq!(checked_len(MAX_RANK), Ok(1 << MAX_RANK));
        assert_eq!(checked_len(MIN_RANK - 1), Err(DspError::InvalidRank));
        assert_eq!(checked_len(MAX_RANK + 1), Err(DspError::InvalidRank));
        assert_eq!(checked_len(0), Err(DspError::InvalidRank));
    }

    #[cfg(feature = "std")]
    mod engine {
        use super::super::*;
        use std::vec;

        #[test]
        fn parse_rejects_bad_lengths() {
            let mut spectrum = vec![0.0f32; 16];
            let signal = vec![0.0f32; 8];
            assert_eq!(
                fastconv_parse(&mut spectrum, &signal, 4),
                Err(DspError::MismatchedLengths)
            );
            assert_eq!(
                fastconv_parse(&mut spectrum, &signal, 99),
                Err(DspError::InvalidRank)
            );
        }

        #[test]
        fn spectrum_view_accessors() {
            let rank = 3usize;
            let signal = [1.0f32, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];
            let mut buf = [0.0f32; 8];
            let s = Spectrum::parse(&mut buf, &signal, rank).unwrap();
            assert_eq!(s.rank(), rank);
            assert_eq!(s.len(), 8);
            assert!(!s.is_empty());
            // impulse at zero has a flat spectrum
            assert!((s.dc() - 1.0).abs() < 1e-6);
            assert!((s.nyquist() - 1.0).abs() < 1e-6);
            for k in 1..4 {
                let (re, im) = s.bin(k).unwrap();
                assert!((re - 1.0).abs() < 1e-5, "bin {}", k);
                assert!(im.abs() < 1e-5, "bin {}", k);
            }
            assert_eq!(s.bin(0), None);
            assert_eq!(s.bin(4), None);
        }

        #[test]
        fn spectrum_apply_rank_mismatch() {
            let mut a_buf = vec![0.0f32; 8];
            let mut b_buf = vec![0.0f32; 16];
            let mut a = Spectrum::from_parsed(&mut a_buf, 3).unwrap();
            let b = Spectrum::from_parsed(&mut b_buf, 4).unwrap();
            assert_eq!(a.apply(&b), Err(DspError::MismatchedLengths));
        }
    }
}

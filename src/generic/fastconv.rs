//! Fast-convolution stage kernels, scalar reference.
//!
//! A rank-`r` transform works on a real signal of `N = 2^r` samples. The
//! forward path reinterprets the signal in place as `M = N/2` interleaved
//! complex samples, runs a radix-2 DIT complex FFT of size `M`, then
//! untangles the half-size transform into the packed spectrum: slot 0 is
//! the DC real value, slot 1 the Nyquist real value, slots `2k`/`2k+1` the
//! complex bin `k` for `k = 1..M-1`. The packed buffer is exactly `N`
//! floats, never `2N`.
//!
//! The inverse path repacks the spectrum into a half-size complex spectrum
//! with the `1/N` normalization folded into the repack constants, then runs
//! the inverse FFT stages unscaled.

use crate::fastconv::bit_rev_permute;
use crate::twiddle::{self, XFFT_COS, XFFT_SIN};

/// Radix-2 DIT forward pass over `m = 2^m_rank` interleaved complex samples.
pub(crate) fn fft_forward(buf: &mut [f32], m_rank: usize) {
    debug_assert_eq!(buf.len(), 2 << m_rank);
    bit_rev_permute(buf, m_rank);
    let m = 1usize << m_rank;
    for s in 0..m_rank {
        let h = 1usize << s;
        let shift = twiddle::stage_shift(s);
        let mut base = 0;
        while base < m {
            for j in 0..h {
                let c = XFFT_COS[j << shift];
                let sn = XFFT_SIN[j << shift];
                let pu = 2 * (base + j);
                let pv = 2 * (base + j + h);
                let vr = buf[pv];
                let vi = buf[pv + 1];
                // v * (c - i*sn)
                let tr = vr * c + vi * sn;
                let ti = vi * c - vr * sn;
                let ur = buf[pu];
                let ui = buf[pu + 1];
                buf[pu] = ur + tr;
                buf[pu + 1] = ui + ti;
                buf[pv] = ur - tr;
                buf[pv + 1] = ui - ti;
            }
            base += 2 * h;
        }
    }
}

/// Radix-2 DIT inverse pass; conjugated twiddles, no scaling.
pub(crate) fn fft_inverse(buf: &mut [f32], m_rank: usize) {
    debug_assert_eq!(buf.len(), 2 << m_rank);
    bit_rev_permute(buf, m_rank);
    let m = 1usize << m_rank;
    for s in 0..m_rank {
        let h = 1usize << s;
        let shift = twiddle::stage_shift(s);
        let mut base = 0;
        while base < m {
            for j in 0..h {
                let c = XFFT_COS[j << shift];
                let sn = XFFT_SIN[j << shift];
                let pu = 2 * (base + j);
                let pv = 2 * (base + j + h);
                let vr = buf[pv];
                let vi = buf[pv + 1];
                // v * (c + i*sn)
                let tr = vr * c - vi * sn;
                let ti = vi * c + vr * sn;
                let ur = buf[pu];
                let ui = buf[pu + 1];
                buf[pu] = ur + tr;
                buf[pu + 1] = ui + ti;
                buf[pv] = ur - tr;
                buf[pv + 1] = ui - ti;
            }
            base += 2 * h;
        }
    }
}

/// Untangle the half-size transform `Z` into the packed spectrum, in place.
///
/// With `E = (Z[k] + conj(Z[M-k]))/2` and `O = -i*(Z[k] - conj(Z[M-k]))/2`,
/// bin `k` of the full transform is `E + W^k*O` and bin `M-k` is
/// `conj(E - W^k*O)`, `W = exp(-i*pi/M)`. DC and Nyquist land in slots 0/1.
pub(crate) fn untangle(buf: &mut [f32], rank: usize) {
    let m = 1usize << (rank - 1);
    let shift = twiddle::untangle_shift(rank);

    let dc = buf[0] + buf[1];
    let ny = buf[0] - buf[1];
    buf[0] = dc;
    buf[1] = ny;

    for k in 1..=m / 2 {
        let c = XFFT_COS[k << shift];
        let sn = XFFT_SIN[k << shift];
        let pk = 2 * k;
        let pm = 2 * (m - k);
        let zkr = buf[pk];
        let zki = buf[pk + 1];
        let zmr = buf[pm];
        let zmi = buf[pm + 1];

        let er = 0.5 * (zkr + zmr);
        let ei = 0.5 * (zki - zmi);
        let or_ = 0.5 * (zki + zmi);
        let oi = 0.5 * (zmr - zkr);

        let tr = c * or_ + sn * oi;
        let ti = c * oi - sn * or_;

        buf[pk] = er + tr;
        buf[pk + 1] = ei + ti;
        buf[pm] = er - tr;
        buf[pm + 1] = ti - ei;
    }
}

/// Inverse of [`untangle`]: rebuild the half-size complex spectrum from the
/// packed bins, writing into `dst`. The `1/N` normalization of the inverse
/// transform is folded into the repack constants here, so the FFT stages
/// that follow run unscaled.
pub(crate) fn repack(dst: &mut [f32], spectrum: &[f32], rank: usize) {
    let m = 1usize << (rank - 1);
    let shift = twiddle::untangle_shift(rank);
    let hg = 0.5 / m as f32;

    dst[0] = hg * (spectrum[0] + spectrum[1]);
    dst[1] = hg * (spectrum[0] - spectrum[1]);

    for k in 1..=m / 2 {
        let c = XFFT_COS[k << shift];
        let sn = XFFT_SIN[k << shift];
        let pk = 2 * k;
        let pm = 2 * (m - k);
        let xkr = spectrum[pk];
        let xki = spectrum[pk + 1];
        let xmr = spectrum[pm];
        let xmi = spectrum[pm + 1];

        let ar = hg * (xkr + xmr);
        let ai = hg * (xki - xmi);
        let pr = hg * (xkr - xmr);
        let pi = hg * (xki + xmi);

        // O = conj(W^k) * P
        let or_ = c * pr - sn * pi;
        let oi = c * pi + sn * pr;

        dst[pk] = ar - oi;
        dst[pk + 1] = ai + or_;
        dst[pm] = ar + oi;
        dst[pm + 1] = or_ - ai;
    }
}

/// Forward real FFT into the packed spectrum representation.
pub fn fastconv_parse(spectrum: &mut [f32], signal: &[f32], rank: usize) {
    let n = 1usize << rank;
    debug_assert_eq!(spectrum.len(), n);
    debug_assert_eq!(signal.len(), n);
    // The interleaved complex view of the real signal is the signal itself:
    // z[m] = x[2m] + i*x[2m+1].
    spectrum.copy_from_slice(signal);
    fft_forward(spectrum, rank - 1);
    untangle(spectrum, rank);
}

/// In-place product of two packed spectra.
///
/// Slots 0/1 hold two unrelated real magnitudes (DC and Nyquist) and
/// multiply as independent reals; everything after them is ordinary packed
/// complex data.
pub fn fastconv_apply_spectrum(spectrum: &mut [f32], kernel: &[f32], rank: usize) {
    debug_assert_eq!(spectrum.len(), 1usize << rank);
    debug_assert_eq!(kernel.len(), spectrum.len());
    spectrum[0] *= kernel[0];
    spectrum[1] *= kernel[1];
    super::pcomplex::pcomplex_mul2(&mut spectrum[2..], &kernel[2..]);
}

/// Three-operand spectrum product `dst = a (*) b`.
pub fn fastconv_apply3(dst: &mut [f32], a: &[f32], b: &[f32], rank: usize) {
    debug_assert_eq!(dst.len(), 1usize << rank);
    debug_assert_eq!(a.len(), dst.len());
    debug_assert_eq!(b.len(), dst.len());
    dst[0] = a[0] * b[0];
    dst[1] = a[1] * b[1];
    super::pcomplex::pcomplex_mul3(&mut dst[2..], &a[2..], &b[2..]);
}

/// Inverse real FFT from the packed spectrum back to the time domain.
pub fn fastconv_restore(signal: &mut [f32], spectrum: &[f32], rank: usize) {
    let n = 1usize << rank;
    debug_assert_eq!(signal.len(), n);
    debug_assert_eq!(spectrum.len(), n);
    repack(signal, spectrum, rank);
    fft_inverse(signal, rank - 1);
}

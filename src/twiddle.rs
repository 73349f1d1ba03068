//! Build-time trigonometric tables.
//!
//! One master table pair serves every supported transform order: the build
//! script emits `cos(pi*k/2^(MAX_RANK-1))` and `sin(pi*k/2^(MAX_RANK-1))`
//! for `k = 0..=2^(MAX_RANK-1)`, computed in `f64`. A rank-`m` consumer
//! reads `cos(pi*k/2^m)` as `XFFT_COS[k << (MAX_RANK - 1 - m)]`, so the
//! reference and accelerated FFT paths share identical constants. The
//! tables are immutable for the process lifetime and safe for
//! unsynchronized concurrent reads.

include!(concat!(env!("OUT_DIR"), "/twiddles.rs"));

/// Smallest supported fast-convolution rank.
///
/// A rank-2 spectrum would consist solely of the packed DC/Nyquist pair;
/// rank 3 is the smallest order with at least one genuine complex bin.
pub const MIN_RANK: usize = 3;

/// Index shift for the untangle/repack twiddle window of a rank-`rank`
/// transform: `cos(pi*k/2^(rank-1)) == XFFT_COS[k << untangle_shift(rank)]`.
#[inline(always)]
pub(crate) fn untangle_shift(rank: usize) -> usize {
    debug_assert!((MIN_RANK..=MAX_RANK).contains(&rank));
    MAX_RANK - rank
}

/// Index shift for the butterfly stage with half-span `2^stage` inside the
/// half-size complex FFT: `cos(pi*j/2^stage) == XFFT_COS[j << stage_shift(stage)]`.
#[inline(always)]
pub(crate) fn stage_shift(stage: usize) -> usize {
    debug_assert!(stage < MAX_RANK);
    (MAX_RANK - 1) - stage
}

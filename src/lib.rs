//! # fastdsp - runtime-dispatched SIMD kernels for DSP
//!
//! A vectorized signal-processing kernel library: complex arithmetic in split
//! and interleaved layouts, FFT-based fast convolution, and a handful of
//! elementwise/search peers, each with a portable reference implementation
//! and one or more instruction-set-specific implementations selected at
//! runtime from detected CPU capability.
//!
//! ## Features
//!
//! - **Zero-allocation kernels**: every buffer is caller-owned; the library
//!   never retains a reference beyond a single call
//! - **Runtime dispatch**: capability detection runs once per process, after
//!   which every operation is a direct call through a stored function
//! - **SIMD acceleration** (x86_64 SSE2/AVX2+FMA, AArch64 NEON) with a
//!   portable scalar fallback for every operation
//! - **Packed real-FFT convolution engine** with build-time twiddle tables
//!
//! ## Cargo Features
//!
//! - `std` (default): runtime CPU detection and the process-global dispatch
//!   table
//! - `verbose-logging`: log backend selection through the `log` crate
//! - `internal-tests`: property tests (proptest/rand)
//!
//! ## Platform Support
//!
//! | Platform | Kernel sets |
//! |----------|-------------|
//! | x86_64   | SSE2, AVX2+FMA |
//! | AArch64  | NEON |
//! | Generic  | Scalar fallback |
//!
//! Without `std`, build a [`DispatchTable`] explicitly from
//! [`CapabilitySet::compile_time`] and call its entries directly.
//!
//! ## License
//!
//! Licensed under either of
//! - Apache License, Version 2.0
//! - MIT license
//!
//! at your option.

#![no_std]
#[cfg(feature = "std")]
extern crate std;

/// CPU capability probe.
pub mod capability;
/// Operation identifiers and the per-process dispatch table.
pub mod dispatch;
/// Build-time trigonometric tables shared by every FFT implementation.
pub mod twiddle;

/// Fast-convolution engine: parse/apply/restore over packed spectra.
pub mod fastconv;

/// Split-layout complex arithmetic (separate re/im rails).
pub mod complex;
/// Interleaved-layout complex arithmetic (alternating re/im samples).
pub mod pcomplex;

/// Elementwise arithmetic peers dispatched through the same table.
pub mod pmath;
/// Search/reduction peers dispatched through the same table.
pub mod search;

/// Portable reference kernels; the correctness oracle for every backend.
pub mod generic;

// Accelerated kernel sets are crate-internal: their safe wrappers rely on
// the dispatch table installing them only after capability detection, a
// contract callers outside this crate could not be held to.
#[cfg(target_arch = "x86_64")]
pub(crate) mod avx2;
#[cfg(target_arch = "x86_64")]
pub(crate) mod sse;

#[cfg(target_arch = "aarch64")]
pub(crate) mod neon;

mod mathf;

pub use capability::CapabilitySet;
pub use dispatch::{Backend, DispatchTable, Op};
pub use fastconv::{MAX_RANK, MIN_RANK};

#[cfg(feature = "std")]
pub use dispatch::table;
#[cfg(feature = "std")]
pub use fastconv::Spectrum;

/// Errors reported by the checked public entry points.
///
/// Kernels themselves are infallible; violations detectable from slice
/// lengths or the transform rank are rejected here, at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DspError {
    /// Transform rank outside `MIN_RANK..=MAX_RANK`.
    InvalidRank,
    /// Buffer lengths disagree with each other or with `1 << rank`.
    MismatchedLengths,
}

impl core::fmt::Display for DspError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DspError::InvalidRank => write!(f, "transform rank out of range"),
            DspError::MismatchedLengths => write!(f, "buffer length mismatch"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DspError {}

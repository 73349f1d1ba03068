//! x86_64 SSE2 kernel set.
//!
//! 4-wide implementations of every core operation, structured as full
//! vector blocks followed by a scalar tail computing the identical formula,
//! so any length (including lengths one element off a vector multiple)
//! produces a fully correct, fully in-range result. Loads and stores are
//! unaligned; alignment affects throughput only.
//!
//! This module is crate-internal and reachable only through the dispatch
//! table. The wrappers are safe: SSE2 is part of the x86_64 baseline, and
//! the table installs this set only when the capability probe reports it.

pub mod complex;
pub mod fastconv;
pub mod pcomplex;
pub mod pmath;

/// Sign-bit mask used to negate the imaginary rail without a subtraction.
pub(crate) const SIGN_MASK: i32 = i32::MIN;

//! Portable reference kernels.
//!
//! Architecture-neutral scalar loops implementing every operation the
//! dispatch table exports. These are both the universal fallback when no
//! accelerated kernel matches the detected capability and the correctness
//! oracle the accelerated kernels are validated against, so each function
//! is written against the exact formula its vectorized twins reorder.

pub mod complex;
pub mod fastconv;
pub mod pcomplex;
pub mod pmath;
pub mod search;

//! CPU capability probe.
//!
//! [`CapabilitySet`] reports which vector extensions the running CPU
//! supports. Exactly one architecture family is relevant per process; the
//! probe is a pure query with no side effects and may be called any number
//! of times, though [`crate::dispatch::table`] calls it exactly once.

/// Detected instruction-set extensions.
///
/// Immutable after construction. An all-`false` set means "reference
/// kernels only" and is always a valid input to
/// [`crate::dispatch::DispatchTable::build`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CapabilitySet {
    sse2: bool,
    avx: bool,
    avx2: bool,
    fma: bool,
    neon: bool,
}

impl CapabilitySet {
    /// The empty set: no vector extensions, reference kernels only.
    pub const fn none() -> Self {
        Self {
            sse2: false,
            avx: false,
            avx2: false,
            fma: false,
            neon: false,
        }
    }

    /// Probe the running CPU.
    ///
    /// Deterministic for a given machine and never fails. With `std` this
    /// queries the OS/CPUID; without `std` it reduces to
    /// [`CapabilitySet::compile_time`].
    pub fn detect() -> Self {
        #[cfg(all(target_arch = "x86_64", feature = "std"))]
        {
            return Self {
                sse2: std::arch::is_x86_feature_detected!("sse2"),
                avx: std::arch::is_x86_feature_detected!("avx"),
                avx2: std::arch::is_x86_feature_detected!("avx2"),
                fma: std::arch::is_x86_feature_detected!("fma"),
                neon: false,
            };
        }
        #[cfg(all(target_arch = "aarch64", feature = "std"))]
        {
            return Self {
                sse2: false,
                avx: false,
                avx2: false,
                fma: false,
                neon: std::arch::is_aarch64_feature_detected!("neon"),
            };
        }
        #[cfg(not(all(
            any(target_arch = "x86_64", target_arch = "aarch64"),
            feature = "std"
        )))]
        {
            Self::compile_time()
        }
    }

    /// Capability set derived purely from compile-time target features.
    ///
    /// Always a subset of what [`CapabilitySet::detect`] reports on a
    /// machine the binary actually runs on.
    pub const fn compile_time() -> Self {
        Self {
            sse2: cfg!(all(target_arch = "x86_64", target_feature = "sse2")),
            avx: cfg!(all(target_arch = "x86_64", target_feature = "avx")),
            avx2: cfg!(all(target_arch = "x86_64", target_feature = "avx2")),
            fma: cfg!(all(target_arch = "x86_64", target_feature = "fma")),
            neon: cfg!(all(target_arch = "aarch64", target_feature = "neon")),
        }
    }

    /// 128-bit x86 vectors.
    pub const fn sse2(&self) -> bool {
        self.sse2
    }

    /// 256-bit x86 vectors.
    pub const fn avx(&self) -> bool {
        self.avx
    }

    /// 256-bit x86 integer/shuffle widening.
    pub const fn avx2(&self) -> bool {
        self.avx2
    }

    /// x86 fused multiply-add.
    pub const fn fma(&self) -> bool {
        self.fma
    }

    /// AArch64 advanced SIMD.
    pub const fn neon(&self) -> bool {
        self.neon
    }

    /// True when no vector extension is present.
    pub const fn is_empty(&self) -> bool {
        !(self.sse2 || self.avx || self.avx2 || self.fma || self.neon)
    }

    /// True when every extension in `other` is also present in `self`.
    pub const fn is_superset_of(&self, other: &Self) -> bool {
        (self.sse2 || !other.sse2)
            && (self.avx || !other.avx)
            && (self.avx2 || !other.avx2)
            && (self.fma || !other.fma)
            && (self.neon || !other.neon)
    }

    /// Builder-style setters, mainly for tests that force a synthetic set.
    pub const fn with_sse2(mut self, v: bool) -> Self {
        self.sse2 = v;
        self
    }

    pub const fn with_avx(mut self, v: bool) -> Self {
        self.avx = v;
        self
    }

    pub const fn with_avx2(mut self, v: bool) -> Self {
        self.avx2 = v;
        self
    }

    pub const fn with_fma(mut self, v: bool) -> Self {
        self.fma = v;
        self
    }

    pub const fn with_neon(mut self, v: bool) -> Self {
        self.neon = v;
        self
    }
}

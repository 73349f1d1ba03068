//! Operation identifiers and the per-process dispatch table.
//!
//! Every public operation routes through one stored function pointer. The
//! table starts from the reference kernels and overlays progressively more
//! specialized sets in capability order, so for each operation the most
//! capable implementation present on the machine wins and every slot is
//! always populated.

use crate::capability::CapabilitySet;
use crate::generic;

/// Identifier of one dispatchable operation.
///
/// The discriminant doubles as the operation's slot in the per-table
/// backend record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    ComplexMul2,
    ComplexMul3,
    ComplexDiv2,
    ComplexRdiv2,
    ComplexDiv3,
    ComplexRcp1,
    ComplexRcp2,
    ComplexMod,
    PcomplexMul2,
    PcomplexMul3,
    PcomplexDiv2,
    PcomplexRdiv2,
    PcomplexDiv3,
    PcomplexRcp1,
    PcomplexRcp2,
    PcomplexMod,
    FastconvParse,
    FastconvApplySpectrum,
    FastconvApply3,
    FastconvRestore,
    Add3,
    Sub3,
    Mul3,
    Div3,
    Mod3,
    AddK2,
    SubK2,
    MulK2,
    DivK2,
    MinIndex,
    MaxIndex,
    MinmaxIndex,
}

impl Op {
    pub const COUNT: usize = 32;

    pub const ALL: [Op; Op::COUNT] = [
        Op::ComplexMul2,
        Op::ComplexMul3,
        Op::ComplexDiv2,
        Op::ComplexRdiv2,
        Op::ComplexDiv3,
        Op::ComplexRcp1,
        Op::ComplexRcp2,
        Op::ComplexMod,
        Op::PcomplexMul2,
        Op::PcomplexMul3,
        Op::PcomplexDiv2,
        Op::PcomplexRdiv2,
        Op::PcomplexDiv3,
        Op::PcomplexRcp1,
        Op::PcomplexRcp2,
        Op::PcomplexMod,
        Op::FastconvParse,
        Op::FastconvApplySpectrum,
        Op::FastconvApply3,
        Op::FastconvRestore,
        Op::Add3,
        Op::Sub3,
        Op::Mul3,
        Op::Div3,
        Op::Mod3,
        Op::AddK2,
        Op::SubK2,
        Op::MulK2,
        Op::DivK2,
        Op::MinIndex,
        Op::MaxIndex,
        Op::MinmaxIndex,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Op::ComplexMul2 => "complex_mul2",
            Op::ComplexMul3 => "complex_mul3",
            Op::ComplexDiv2 => "complex_div2",
            Op::ComplexRdiv2 => "complex_rdiv2",
            Op::ComplexDiv3 => "complex_div3",
            Op::ComplexRcp1 => "complex_rcp1",
            Op::ComplexRcp2 => "complex_rcp2",
            Op::ComplexMod => "complex_mod",
            Op::PcomplexMul2 => "pcomplex_mul2",
            Op::PcomplexMul3 => "pcomplex_mul3",
            Op::PcomplexDiv2 => "pcomplex_div2",
            Op::PcomplexRdiv2 => "pcomplex_rdiv2",
            Op::PcomplexDiv3 => "pcomplex_div3",
            Op::PcomplexRcp1 => "pcomplex_rcp1",
            Op::PcomplexRcp2 => "pcomplex_rcp2",
            Op::PcomplexMod => "pcomplex_mod",
            Op::FastconvParse => "fastconv_parse",
            Op::FastconvApplySpectrum => "fastconv_apply_spectrum",
            Op::FastconvApply3 => "fastconv_apply3",
            Op::FastconvRestore => "fastconv_restore",
            Op::Add3 => "add3",
            Op::Sub3 => "sub3",
            Op::Mul3 => "mul3",
            Op::Div3 => "div3",
            Op::Mod3 => "mod3",
            Op::AddK2 => "add_k2",
            Op::SubK2 => "sub_k2",
            Op::MulK2 => "mul_k2",
            Op::DivK2 => "div_k2",
            Op::MinIndex => "min_index",
            Op::MaxIndex => "max_index",
            Op::MinmaxIndex => "minmax_index",
        }
    }
}

/// The kernel set an operation resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Generic,
    Sse2,
    Avx2Fma,
    Neon,
}

impl Backend {
    pub const fn name(&self) -> &'static str {
        match self {
            Backend::Generic => "generic",
            Backend::Sse2 => "sse2",
            Backend::Avx2Fma => "avx2+fma",
            Backend::Neon => "neon",
        }
    }
}

pub type Complex2Fn = fn(&mut [f32], &mut [f32], &[f32], &[f32]);
pub type Complex3Fn = fn(&mut [f32], &mut [f32], &[f32], &[f32], &[f32], &[f32]);
pub type ComplexRcp1Fn = fn(&mut [f32], &mut [f32]);
pub type ComplexModFn = fn(&mut [f32], &[f32], &[f32]);
pub type Pcomplex2Fn = fn(&mut [f32], &[f32]);
pub type Pcomplex3Fn = fn(&mut [f32], &[f32], &[f32]);
pub type PcomplexRcp1Fn = fn(&mut [f32]);
pub type FastconvParseFn = fn(&mut [f32], &[f32], usize);
pub type FastconvApplyFn = fn(&mut [f32], &[f32], usize);
pub type FastconvApply3Fn = fn(&mut [f32], &[f32], &[f32], usize);
pub type FastconvRestoreFn = fn(&mut [f32], &[f32], usize);
pub type Op3Fn = fn(&mut [f32], &[f32], &[f32]);
pub type OpK2Fn = fn(&mut [f32], f32);
pub type IndexFn = fn(&[f32]) -> usize;
pub type MinmaxIndexFn = fn(&[f32]) -> (usize, usize);

/// A fully populated routing table.
///
/// Calls through the stored pointers are unconditionally safe: entries are
/// replaced only by [`DispatchTable::build`] while the table is still
/// exclusively owned, and only with kernels whose instruction-set
/// requirement the given capability set satisfies.
pub struct DispatchTable {
    pub complex_mul2: Complex2Fn,
    pub complex_mul3: Complex3Fn,
    pub complex_div2: Complex2Fn,
    pub complex_rdiv2: Complex2Fn,
    pub complex_div3: Complex3Fn,
    pub complex_rcp1: ComplexRcp1Fn,
    pub complex_rcp2: Complex2Fn,
    pub complex_mod: ComplexModFn,
    pub pcomplex_mul2: Pcomplex2Fn,
    pub pcomplex_mul3: Pcomplex3Fn,
    pub pcomplex_div2: Pcomplex2Fn,
    pub pcomplex_rdiv2: Pcomplex2Fn,
    pub pcomplex_div3: Pcomplex3Fn,
    pub pcomplex_rcp1: PcomplexRcp1Fn,
    pub pcomplex_rcp2: Pcomplex2Fn,
    pub pcomplex_mod: Pcomplex2Fn,
    pub fastconv_parse: FastconvParseFn,
    pub fastconv_apply_spectrum: FastconvApplyFn,
    pub fastconv_apply3: FastconvApply3Fn,
    pub fastconv_restore: FastconvRestoreFn,
    pub add3: Op3Fn,
    pub sub3: Op3Fn,
    pub mul3: Op3Fn,
    pub div3: Op3Fn,
    pub mod3: Op3Fn,
    pub add_k2: OpK2Fn,
    pub sub_k2: OpK2Fn,
    pub mul_k2: OpK2Fn,
    pub div_k2: OpK2Fn,
    pub min_index: IndexFn,
    pub max_index: IndexFn,
    pub minmax_index: MinmaxIndexFn,
    backends: [Backend; Op::COUNT],
}

impl DispatchTable {
    /// Table routing every operation to the reference kernels.
    pub fn reference() -> Self {
        Self {
            complex_mul2: generic::complex::complex_mul2,
            complex_mul3: generic::complex::complex_mul3,
            complex_div2: generic::complex::complex_div2,
            complex_rdiv2: generic::complex::complex_rdiv2,
            complex_div3: generic::complex::complex_div3,
            complex_rcp1: generic::complex::complex_rcp1,
            complex_rcp2: generic::complex::complex_rcp2,
            complex_mod: generic::complex::complex_mod,
            pcomplex_mul2: generic::pcomplex::pcomplex_mul2,
            pcomplex_mul3: generic::pcomplex::pcomplex_mul3,
            pcomplex_div2: generic::pcomplex::pcomplex_div2,
            pcomplex_rdiv2: generic::pcomplex::pcomplex_rdiv2,
            pcomplex_div3: generic::pcomplex::pcomplex_div3,
            pcomplex_rcp1: generic::pcomplex::pcomplex_rcp1,
            pcomplex_rcp2: generic::pcomplex::pcomplex_rcp2,
            pcomplex_mod: generic::pcomplex::pcomplex_mod,
            fastconv_parse: generic::fastconv::fastconv_parse,
            fastconv_apply_spectrum: generic::fastconv::fastconv_apply_spectrum,
            fastconv_apply3: generic::fastconv::fastconv_apply3,
            fastconv_restore: generic::fastconv::fastconv_restore,
            add3: generic::pmath::add3,
            sub3: generic::pmath::sub3,
            mul3: generic::pmath::mul3,
            div3: generic::pmath::div3,
            mod3: generic::pmath::mod3,
            add_k2: generic::pmath::add_k2,
            sub_k2: generic::pmath::sub_k2,
            mul_k2: generic::pmath::mul_k2,
            div_k2: generic::pmath::div_k2,
            min_index: generic::search::min_index,
            max_index: generic::search::max_index,
            minmax_index: generic::search::minmax_index,
            backends: [Backend::Generic; Op::COUNT],
        }
    }

    /// Build a table for the given capability set.
    ///
    /// Irrelevant capabilities (another architecture's bits) are ignored;
    /// an empty set yields the reference table.
    pub fn build(caps: &CapabilitySet) -> Self {
        let mut table = Self::reference();
        #[cfg(target_arch = "x86_64")]
        {
            if caps.sse2() {
                table.install_sse2();
            }
            if caps.avx2() && caps.fma() {
                table.install_avx2_fma();
            }
        }
        #[cfg(target_arch = "aarch64")]
        {
            if caps.neon() {
                table.install_neon();
            }
        }
        #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
        let _ = caps;
        #[cfg(feature = "verbose-logging")]
        for op in Op::ALL {
            log::debug!("dispatch {} -> {}", op.as_str(), table.backend_of(op).name());
        }
        table
    }

    /// The kernel set `op` currently routes to.
    pub fn backend_of(&self, op: Op) -> Backend {
        self.backends[op as usize]
    }

    fn set(&mut self, op: Op, backend: Backend) {
        self.backends[op as usize] = backend;
    }

    #[cfg(target_arch = "x86_64")]
    fn install_sse2(&mut self) {
        use crate::sse;
        self.complex_mul2 = sse::complex::complex_mul2;
        self.complex_mul3 = sse::complex::complex_mul3;
        self.complex_div2 = sse::complex::complex_div2;
        self.complex_rdiv2 = sse::complex::complex_rdiv2;
        self.complex_div3 = sse::complex::complex_div3;
        self.complex_rcp1 = sse::complex::complex_rcp1;
        self.complex_rcp2 = sse::complex::complex_rcp2;
        self.complex_mod = sse::complex::complex_mod;
        self.pcomplex_mul2 = sse::pcomplex::pcomplex_mul2;
        self.pcomplex_mul3 = sse::pcomplex::pcomplex_mul3;
        self.pcomplex_div2 = sse::pcomplex::pcomplex_div2;
        self.pcomplex_rdiv2 = sse::pcomplex::pcomplex_rdiv2;
        self.pcomplex_div3 = sse::pcomplex::pcomplex_div3;
        self.pcomplex_rcp1 = sse::pcomplex::pcomplex_rcp1;
        self.pcomplex_rcp2 = sse::pcomplex::pcomplex_rcp2;
        self.pcomplex_mod = sse::pcomplex::pcomplex_mod;
        self.fastconv_parse = sse::fastconv::fastconv_parse;
        self.fastconv_apply_spectrum = sse::fastconv::fastconv_apply_spectrum;
        self.fastconv_apply3 = sse::fastconv::fastconv_apply3;
        self.fastconv_restore = sse::fastconv::fastconv_restore;
        self.add3 = sse::pmath::add3;
        self.sub3 = sse::pmath::sub3;
        self.mul3 = sse::pmath::mul3;
        self.div3 = sse::pmath::div3;
        self.add_k2 = sse::pmath::add_k2;
        self.sub_k2 = sse::pmath::sub_k2;
        self.mul_k2 = sse::pmath::mul_k2;
        self.div_k2 = sse::pmath::div_k2;
        for op in [
            Op::ComplexMul2,
            Op::ComplexMul3,
            Op::ComplexDiv2,
            Op::ComplexRdiv2,
            Op::ComplexDiv3,
            Op::ComplexRcp1,
            Op::ComplexRcp2,
            Op::ComplexMod,
            Op::PcomplexMul2,
            Op::PcomplexMul3,
            Op::PcomplexDiv2,
            Op::PcomplexRdiv2,
            Op::PcomplexDiv3,
            Op::PcomplexRcp1,
            Op::PcomplexRcp2,
            Op::PcomplexMod,
            Op::FastconvParse,
            Op::FastconvApplySpectrum,
            Op::FastconvApply3,
            Op::FastconvRestore,
            Op::Add3,
            Op::Sub3,
            Op::Mul3,
            Op::Div3,
            Op::AddK2,
            Op::SubK2,
            Op::MulK2,
            Op::DivK2,
        ] {
            self.set(op, Backend::Sse2);
        }
    }

    #[cfg(target_arch = "x86_64")]
    fn install_avx2_fma(&mut self) {
        use crate::avx2;
        self.complex_mul2 = avx2::complex_mul2;
        self.complex_mul3 = avx2::complex_mul3;
        self.complex_div2 = avx2::complex_div2;
        self.complex_rdiv2 = avx2::complex_rdiv2;
        self.complex_div3 = avx2::complex_div3;
        self.complex_rcp1 = avx2::complex_rcp1;
        self.complex_rcp2 = avx2::complex_rcp2;
        self.complex_mod = avx2::complex_mod;
        for op in [
            Op::ComplexMul2,
            Op::ComplexMul3,
            Op::ComplexDiv2,
            Op::ComplexRdiv2,
            Op::ComplexDiv3,
            Op::ComplexRcp1,
            Op::ComplexRcp2,
            Op::ComplexMod,
        ] {
            self.set(op, Backend::Avx2Fma);
        }
    }

    #[cfg(target_arch = "aarch64")]
    fn install_neon(&mut self) {
        use crate::neon;
        self.complex_mul2 = neon::complex_mul2;
        self.complex_mul3 = neon::complex_mul3;
        self.complex_div2 = neon::complex_div2;
        self.complex_rdiv2 = neon::complex_rdiv2;
        self.complex_div3 = neon::complex_div3;
        self.complex_rcp1 = neon::complex_rcp1;
        self.complex_rcp2 = neon::complex_rcp2;
        self.complex_mod = neon::complex_mod;
        for op in [
            Op::ComplexMul2,
            Op::ComplexMul3,
            Op::ComplexDiv2,
            Op::ComplexRdiv2,
            Op::ComplexDiv3,
            Op::ComplexRcp1,
            Op::ComplexRcp2,
            Op::ComplexMod,
        ] {
            self.set(op, Backend::Neon);
        }
    }
}

/// The process-global table, built from [`CapabilitySet::detect`] on first
/// use. Concurrent first calls race benignly; every caller observes the
/// same fully built table.
#[cfg(feature = "std")]
pub fn table() -> &'static DispatchTable {
    use std::sync::OnceLock;
    static TABLE: OnceLock<DispatchTable> = OnceLock::new();
    TABLE.get_or_init(|| DispatchTable::build(&CapabilitySet::detect()))
}

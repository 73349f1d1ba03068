// Test intent: every accelerated kernel set must match the scalar
// reference regardless of which set the global table selects on this host.
// Tables are built from synthetic capability sets and exercised through
// their function-pointer fields, so an AVX2 host still runs the SSE2
// kernels and a reference-only build still runs the table plumbing.

#![cfg(feature = "std")]

use fastdsp::{generic, CapabilitySet, DispatchTable};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const LENGTHS: &[usize] = &[
    0, 1, 2, 3, 4, 5, 7, 8, 15, 16, 32, 33, 64, 65, 100, 999, 4095, 8191,
];
const TOL: f32 = 1e-4;

fn uniform(rng: &mut StdRng, n: usize) -> Vec<f32> {
    (0..n).map(|_| rng.gen_range(-10.0f32..10.0)).collect()
}

fn nonzero(rng: &mut StdRng, n: usize) -> Vec<f32> {
    (0..n)
        .map(|_| {
            let v = rng.gen_range(0.5f32..10.0);
            if rng.gen::<bool>() {
                v
            } else {
                -v
            }
        })
        .collect()
}

fn assert_close(a: &[f32], b: &[f32], what: &str) {
    assert_eq!(a.len(), b.len());
    for i in 0..a.len() {
        let diff = (a[i] - b[i]).abs();
        let scale = a[i].abs().max(b[i].abs()).max(1.0);
        assert!(
            diff <= TOL * scale,
            "{}: sample {} differs: {} vs {}",
            what,
            i,
            a[i],
            b[i]
        );
    }
}

/// Run the full split-layout complex family of `table` against the
/// reference kernels over the length grid.
fn check_split_complex(table: &DispatchTable, seed: u64, tag: &str) {
    let mut rng = StdRng::seed_from_u64(seed);
    for &n in LENGTHS {
        let a_re = nonzero(&mut rng, n);
        let a_im = nonzero(&mut rng, n);
        let b_re = nonzero(&mut rng, n);
        let b_im = nonzero(&mut rng, n);

        let mut d_re = a_re.clone();
        let mut d_im = a_im.clone();
        (table.complex_mul2)(&mut d_re, &mut d_im, &b_re, &b_im);
        let mut r_re = a_re.clone();
        let mut r_im = a_im.clone();
        generic::complex::complex_mul2(&mut r_re, &mut r_im, &b_re, &b_im);
        assert_close(&d_re, &r_re, tag);
        assert_close(&d_im, &r_im, tag);

        let mut d_re = vec![0.0f32; n];
        let mut d_im = vec![0.0f32; n];
        (table.complex_mul3)(&mut d_re, &mut d_im, &a_re, &a_im, &b_re, &b_im);
        let mut r_re = vec![0.0f32; n];
        let mut r_im = vec![0.0f32; n];
        generic::complex::complex_mul3(&mut r_re, &mut r_im, &a_re, &a_im, &b_re, &b_im);
        assert_close(&d_re, &r_re, tag);
        assert_close(&d_im, &r_im, tag);

        let mut d_re = a_re.clone();
        let mut d_im = a_im.clone();
        (table.complex_div2)(&mut d_re, &mut d_im, &b_re, &b_im);
        let mut r_re = a_re.clone();
        let mut r_im = a_im.clone();
        generic::complex::complex_div2(&mut r_re, &mut r_im, &b_re, &b_im);
        assert_close(&d_re, &r_re, tag);
        assert_close(&d_im, &r_im, tag);

        let mut d_re = a_re.clone();
        let mut d_im = a_im.clone();
        (table.complex_rdiv2)(&mut d_re, &mut d_im, &b_re, &b_im);
        let mut r_re = a_re.clone();
        let mut r_im = a_im.clone();
        generic::complex::complex_rdiv2(&mut r_re, &mut r_im, &b_re, &b_im);
        assert_close(&d_re, &r_re, tag);
        assert_close(&d_im, &r_im, tag);

        let mut d_re = vec![0.0f32; n];
        let mut d_im = vec![0.0f32; n];
        (table.complex_div3)(&mut d_re, &mut d_im, &a_re, &a_im, &b_re, &b_im);
        let mut r_re = vec![0.0f32; n];
        let mut r_im = vec![0.0f32; n];
        generic::complex::complex_div3(&mut r_re, &mut r_im, &a_re, &a_im, &b_re, &b_im);
        assert_close(&d_re, &r_re, tag);
        assert_close(&d_im, &r_im, tag);

        let mut d_re = a_re.clone();
        let mut d_im = a_im.clone();
        (table.complex_rcp1)(&mut d_re, &mut d_im);
        let mut r_re = a_re.clone();
        let mut r_im = a_im.clone();
        generic::complex::complex_rcp1(&mut r_re, &mut r_im);
        assert_close(&d_re, &r_re, tag);
        assert_close(&d_im, &r_im, tag);

        let mut d_re = vec![0.0f32; n];
        let mut d_im = vec![0.0f32; n];
        (table.complex_rcp2)(&mut d_re, &mut d_im, &a_re, &a_im);
        assert_close(&d_re, &r_re, tag);
        assert_close(&d_im, &r_im, tag);

        let mut d = vec![0.0f32; n];
        (table.complex_mod)(&mut d, &a_re, &a_im);
        let mut r = vec![0.0f32; n];
        generic::complex::complex_mod(&mut r, &a_re, &a_im);
        assert_close(&d, &r, tag);
    }
}

/// Run the packed complex family of `table` against the reference kernels.
fn check_packed_complex(table: &DispatchTable, seed: u64, tag: &str) {
    let mut rng = StdRng::seed_from_u64(seed);
    for &n in LENGTHS {
        let n = n & !1; // packed buffers hold whole complex samples
        let a = nonzero(&mut rng, n);
        let b = nonzero(&mut rng, n);

        let mut d = a.clone();
        (table.pcomplex_mul2)(&mut d, &b);
        let mut r = a.clone();
        generic::pcomplex::pcomplex_mul2(&mut r, &b);
        assert_close(&d, &r, tag);

        let mut d = vec![0.0f32; n];
        (table.pcomplex_mul3)(&mut d, &a, &b);
        let mut r = vec![0.0f32; n];
        generic::pcomplex::pcomplex_mul3(&mut r, &a, &b);
        assert_close(&d, &r, tag);

        let mut d = a.clone();
        (table.pcomplex_div2)(&mut d, &b);
        let mut r = a.clone();
        generic::pcomplex::pcomplex_div2(&mut r, &b);
        assert_close(&d, &r, tag);

        let mut d = a.clone();
        (table.pcomplex_rdiv2)(&mut d, &b);
        let mut r = a.clone();
        generic::pcomplex::pcomplex_rdiv2(&mut r, &b);
        assert_close(&d, &r, tag);

        let mut d = vec![0.0f32; n];
        (table.pcomplex_div3)(&mut d, &a, &b);
        let mut r = vec![0.0f32; n];
        generic::pcomplex::pcomplex_div3(&mut r, &a, &b);
        assert_close(&d, &r, tag);

        let mut d = a.clone();
        (table.pcomplex_rcp1)(&mut d);
        let mut r = a.clone();
        generic::pcomplex::pcomplex_rcp1(&mut r);
        assert_close(&d, &r, tag);

        let mut d = vec![0.0f32; n];
        (table.pcomplex_rcp2)(&mut d, &a);
        assert_close(&d, &r, tag);

        let mut d = vec![0.0f32; n / 2];
        (table.pcomplex_mod)(&mut d, &a);
        let mut r = vec![0.0f32; n / 2];
        generic::pcomplex::pcomplex_mod(&mut r, &a);
        assert_close(&d, &r, tag);
    }
}

/// Run the elementwise arithmetic peers of `table` against the reference.
fn check_peers(table: &DispatchTable, seed: u64, tag: &str) {
    let mut rng = StdRng::seed_from_u64(seed);
    for &n in LENGTHS {
        let a = uniform(&mut rng, n);
        let b = nonzero(&mut rng, n);
        let k = rng.gen_range(0.5f32..4.0);

        for (dispatched, reference) in [
            (table.add3, generic::pmath::add3 as fn(&mut [f32], &[f32], &[f32])),
            (table.sub3, generic::pmath::sub3),
            (table.mul3, generic::pmath::mul3),
            (table.div3, generic::pmath::div3),
            (table.mod3, generic::pmath::mod3),
        ] {
            let mut d = vec![0.0f32; n];
            dispatched(&mut d, &a, &b);
            let mut r = vec![0.0f32; n];
            reference(&mut r, &a, &b);
            assert_eq!(d, r, "{} len {}", tag, n);
        }

        for (dispatched, reference) in [
            (table.add_k2, generic::pmath::add_k2 as fn(&mut [f32], f32)),
            (table.sub_k2, generic::pmath::sub_k2),
            (table.mul_k2, generic::pmath::mul_k2),
            (table.div_k2, generic::pmath::div_k2),
        ] {
            let mut d = a.clone();
            dispatched(&mut d, k);
            let mut r = a.clone();
            reference(&mut r, k);
            assert_eq!(d, r, "{} len {}", tag, n);
        }
    }
}

/// Run the fast-convolution stage kernels of `table` against the reference.
fn check_fastconv(table: &DispatchTable, seed: u64, tag: &str) {
    let mut rng = StdRng::seed_from_u64(seed);
    for rank in 3..=10usize {
        let n = 1usize << rank;
        let x: Vec<f32> = (0..n).map(|_| rng.gen_range(-1.0f32..1.0)).collect();
        let h: Vec<f32> = (0..n).map(|_| rng.gen_range(-1.0f32..1.0)).collect();

        let mut sx = vec![0.0f32; n];
        (table.fastconv_parse)(&mut sx, &x, rank);
        let mut rx = vec![0.0f32; n];
        generic::fastconv::fastconv_parse(&mut rx, &x, rank);
        assert_close(&sx, &rx, tag);

        let mut sh = vec![0.0f32; n];
        (table.fastconv_parse)(&mut sh, &h, rank);

        let mut in_place = sx.clone();
        (table.fastconv_apply_spectrum)(&mut in_place, &sh, rank);
        let mut three_op = vec![0.0f32; n];
        (table.fastconv_apply3)(&mut three_op, &sx, &sh, rank);
        assert_close(&in_place, &three_op, tag);

        let mut out = vec![0.0f32; n];
        (table.fastconv_restore)(&mut out, &in_place, rank);
        let mut r_apply = rx.clone();
        generic::fastconv::fastconv_apply_spectrum(&mut r_apply, &sh, rank);
        let mut r_out = vec![0.0f32; n];
        generic::fastconv::fastconv_restore(&mut r_out, &r_apply, rank);
        assert_close(&out, &r_out, tag);
    }
}

#[test]
fn reference_table_matches_oracle() {
    let table = DispatchTable::reference();
    check_split_complex(&table, 0xba5e_0001, "reference complex");
    check_packed_complex(&table, 0xba5e_0002, "reference pcomplex");
    check_peers(&table, 0xba5e_0003, "reference peers");
    check_fastconv(&table, 0xba5e_0004, "reference fastconv");
}

#[cfg(target_arch = "x86_64")]
#[test]
fn sse2_kernels_match_reference() {
    // SSE2 is x86_64 baseline, so the synthetic table is always runnable
    // here even when the global table prefers a wider set
    let table = DispatchTable::build(&CapabilitySet::none().with_sse2(true));
    check_split_complex(&table, 0x55e2_0001, "sse2 complex");
    check_packed_complex(&table, 0x55e2_0002, "sse2 pcomplex");
    check_peers(&table, 0x55e2_0003, "sse2 peers");
    check_fastconv(&table, 0x55e2_0004, "sse2 fastconv");
}

#[cfg(target_arch = "x86_64")]
#[test]
fn avx2_fma_kernels_match_reference() {
    let caps = CapabilitySet::detect();
    if !(caps.avx2() && caps.fma()) {
        return;
    }
    let table = DispatchTable::build(
        &CapabilitySet::none()
            .with_sse2(true)
            .with_avx2(true)
            .with_fma(true),
    );
    check_split_complex(&table, 0xa2f0_0001, "avx2+fma complex");
}

#[cfg(target_arch = "aarch64")]
#[test]
fn neon_kernels_match_reference() {
    let caps = CapabilitySet::detect();
    if !caps.neon() {
        return;
    }
    let table = DispatchTable::build(&CapabilitySet::none().with_neon(true));
    check_split_complex(&table, 0x0e00_0001, "neon complex");
}

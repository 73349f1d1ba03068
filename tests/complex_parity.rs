// Test intent: the dispatched split-layout complex kernels must agree with
// the scalar reference on whatever backend this machine selects, across
// length classes that exercise full vector blocks, scalar tails, and the
// empty case, and across slice offsets that break 16-byte alignment.

#![cfg(feature = "std")]

use fastdsp::{complex, generic};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const LENGTHS: &[usize] = &[
    0, 1, 2, 3, 4, 5, 7, 8, 15, 16, 32, 33, 64, 65, 100, 999, 4095, 8191,
];
const TOL: f32 = 1e-4;

fn uniform(rng: &mut StdRng, n: usize) -> Vec<f32> {
    (0..n).map(|_| rng.gen_range(-10.0f32..10.0)).collect()
}

/// Magnitudes bounded away from zero so quotients stay well conditioned.
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

#[test]
fn mul2_matches_reference() {
    let mut rng = StdRng::seed_from_u64(0x5eed_0001);
    for &n in LENGTHS {
        // one extra sample so an offset-1 slice still holds n values
        let a_re = uniform(&mut rng, n + 1);
        let a_im = uniform(&mut rng, n + 1);
        let b_re = uniform(&mut rng, n + 1);
        let b_im = uniform(&mut rng, n + 1);
        for off in [0usize, 1] {
            let mut d_re = a_re[off..off + n].to_vec();
            let mut d_im = a_im[off..off + n].to_vec();
            complex::complex_mul2(&mut d_re, &mut d_im, &b_re[off..off + n], &b_im[off..off + n])
                .unwrap();

            let mut r_re = a_re[off..off + n].to_vec();
            let mut r_im = a_im[off..off + n].to_vec();
            generic::complex::complex_mul2(
                &mut r_re,
                &mut r_im,
                &b_re[off..off + n],
                &b_im[off..off + n],
            );
            assert_close(&d_re, &r_re, "mul2 re");
            assert_close(&d_im, &r_im, "mul2 im");
        }
    }
}

#[test]
fn mul3_matches_reference() {
    let mut rng = StdRng::seed_from_u64(0x5eed_0002);
    for &n in LENGTHS {
        let a_re = uniform(&mut rng, n);
        let a_im = uniform(&mut rng, n);
        let b_re = uniform(&mut rng, n);
        let b_im = uniform(&mut rng, n);
        let mut d_re = vec![0.0f32; n];
        let mut d_im = vec![0.0f32; n];
        complex::complex_mul3(&mut d_re, &mut d_im, &a_re, &a_im, &b_re, &b_im).unwrap();
        let mut r_re = vec![0.0f32; n];
        let mut r_im = vec![0.0f32; n];
        generic::complex::complex_mul3(&mut r_re, &mut r_im, &a_re, &a_im, &b_re, &b_im);
        assert_close(&d_re, &r_re, "mul3 re");
        assert_close(&d_im, &r_im, "mul3 im");
    }
}

#[test]
fn div_family_matches_reference() {
    let mut rng = StdRng::seed_from_u64(0x5eed_0003);
    for &n in LENGTHS {
        let a_re = nonzero(&mut rng, n);
        let a_im = nonzero(&mut rng, n);
        let b_re = nonzero(&mut rng, n);
        let b_im = nonzero(&mut rng, n);

        let mut d_re = a_re.clone();
        let mut d_im = a_im.clone();
        complex::complex_div2(&mut d_re, &mut d_im, &b_re, &b_im).unwrap();
        let mut r_re = a_re.clone();
        let mut r_im = a_im.clone();
        generic::complex::complex_div2(&mut r_re, &mut r_im, &b_re, &b_im);
        assert_close(&d_re, &r_re, "div2 re");
        assert_close(&d_im, &r_im, "div2 im");

        let mut d_re = a_re.clone();
        let mut d_im = a_im.clone();
        complex::complex_rdiv2(&mut d_re, &mut d_im, &b_re, &b_im).unwrap();
        let mut r_re = a_re.clone();
        let mut r_im = a_im.clone();
        generic::complex::complex_rdiv2(&mut r_re, &mut r_im, &b_re, &b_im);
        assert_close(&d_re, &r_re, "rdiv2 re");
        assert_close(&d_im, &r_im, "rdiv2 im");

        let mut d_re = vec![0.0f32; n];
        let mut d_im = vec![0.0f32; n];
        complex::complex_div3(&mut d_re, &mut d_im, &a_re, &a_im, &b_re, &b_im).unwrap();
        let mut r_re = vec![0.0f32; n];
        let mut r_im = vec![0.0f32; n];
        generic::complex::complex_div3(&mut r_re, &mut r_im, &a_re, &a_im, &b_re, &b_im);
        assert_close(&d_re, &r_re, "div3 re");
        assert_close(&d_im, &r_im, "div3 im");
    }
}

#[test]
fn rcp_family_matches_reference() {
    let mut rng = StdRng::seed_from_u64(0x5eed_0004);
    for &n in LENGTHS {
        let s_re = nonzero(&mut rng, n);
        let s_im = nonzero(&mut rng, n);

        let mut d_re = s_re.clone();
        let mut d_im = s_im.clone();
        complex::complex_rcp1(&mut d_re, &mut d_im).unwrap();
        let mut r_re = s_re.clone();
        let mut r_im = s_im.clone();
        generic::complex::complex_rcp1(&mut r_re, &mut r_im);
        assert_close(&d_re, &r_re, "rcp1 re");
        assert_close(&d_im, &r_im, "rcp1 im");

        let mut d_re = vec![0.0f32; n];
        let mut d_im = vec![0.0f32; n];
        complex::complex_rcp2(&mut d_re, &mut d_im, &s_re, &s_im).unwrap();
        assert_close(&d_re, &r_re, "rcp2 re");
        assert_close(&d_im, &r_im, "rcp2 im");
    }
}

#[test]
fn mod_matches_reference() {
    let mut rng = StdRng::seed_from_u64(0x5eed_0005);
    for &n in LENGTHS {
        let s_re = uniform(&mut rng, n);
        let s_im = uniform(&mut rng, n);
        let mut d = vec![0.0f32; n];
        complex::complex_mod(&mut d, &s_re, &s_im).unwrap();
        let mut r = vec![0.0f32; n];
        generic::complex::complex_mod(&mut r, &s_re, &s_im);
        assert_close(&d, &r, "mod");
    }
}

#[test]
fn zero_denominator_classification_matches_reference() {
    // IEEE semantics, no epsilon guard: a zero-magnitude denominator
    // produces the same Inf/NaN pattern on every backend
    let t_re = [1.0f32, 2.0, -3.0, 0.5, 1.0, -1.0, 4.0, 0.25];
    let t_im = [0.5f32, -1.0, 2.0, 0.0, -2.0, 3.0, 1.0, 0.75];
    let b_re = [0.0f32, 1.0, 0.0, 2.0, 0.0, 0.5, 0.0, 1.5];
    let b_im = [0.0f32; 8];

    let mut d_re = [0.0f32; 8];
    let mut d_im = [0.0f32; 8];
    complex::complex_div3(&mut d_re, &mut d_im, &t_re, &t_im, &b_re, &b_im).unwrap();
    let mut r_re = [0.0f32; 8];
    let mut r_im = [0.0f32; 8];
    generic::complex::complex_div3(&mut r_re, &mut r_im, &t_re, &t_im, &b_re, &b_im);

    for i in 0..8 {
        assert_eq!(d_re[i].is_nan(), r_re[i].is_nan(), "re nan, sample {}", i);
        assert_eq!(d_im[i].is_nan(), r_im[i].is_nan(), "im nan, sample {}", i);
        assert_eq!(
            d_re[i].is_infinite(),
            r_re[i].is_infinite(),
            "re inf, sample {}",
            i
        );
        if !d_re[i].is_nan() && !d_re[i].is_infinite() {
            assert!((d_re[i] - r_re[i]).abs() <= TOL * r_re[i].abs().max(1.0));
        }
    }
}

#[test]
fn rcp_is_involution_within_tolerance() {
    let mut rng = StdRng::seed_from_u64(0x5eed_0006);
    let re = nonzero(&mut rng, 257);
    let im = nonzero(&mut rng, 257);
    let mut d_re = re.clone();
    let mut d_im = im.clone();
    complex::complex_rcp1(&mut d_re, &mut d_im).unwrap();
    complex::complex_rcp1(&mut d_re, &mut d_im).unwrap();
    assert_close(&d_re, &re, "rcp twice re");
    assert_close(&d_im, &im, "rcp twice im");
}

#[test]
fn rcp_times_original_is_one() {
    let mut rng = StdRng::seed_from_u64(0x5eed_0007);
    let re = nonzero(&mut rng, 100);
    let im = nonzero(&mut rng, 100);
    let mut r_re = vec![0.0f32; 100];
    let mut r_im = vec![0.0f32; 100];
    complex::complex_rcp2(&mut r_re, &mut r_im, &re, &im).unwrap();
    complex::complex_mul2(&mut r_re, &mut r_im, &re, &im).unwrap();
    for i in 0..100 {
        assert!((r_re[i] - 1.0).abs() < TOL, "re sample {}: {}", i, r_re[i]);
        assert!(r_im[i].abs() < TOL, "im sample {}: {}", i, r_im[i]);
    }
}

#[test]
fn known_product() {
    // (3 + 4i) * (1 + 2i) = -5 + 10i, exact in f32 on any backend
    let mut re = [3.0f32];
    let mut im = [4.0f32];
    complex::complex_mul2(&mut re, &mut im, &[1.0], &[2.0]).unwrap();
    assert_eq!(re, [-5.0]);
    assert_eq!(im, [10.0]);
}

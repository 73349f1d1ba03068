use std::env;
use std::f64::consts::PI;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// log2 of the largest supported fast-convolution transform size.
const MAX_RANK: usize = 16;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // The kernels index one master table pair for every transform order:
    // cos/sin(pi * k / 2^(MAX_RANK-1)) for k = 0..=2^(MAX_RANK-1). Lower
    // ranks read the same table with a power-of-two stride. Values are
    // computed in f64 and truncated to f32 on emission.
    let half = 1usize << (MAX_RANK - 1);
    let step = PI / half as f64;

    let mut out = String::new();
    let _ = writeln!(
        out,
        "/// log2 of the largest supported transform size (`N = 2^MAX_RANK`)."
    );
    let _ = writeln!(out, "pub const MAX_RANK: usize = {};", MAX_RANK);
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "/// `cos(pi * k / 2^{}) ` for `k = 0..={}`.",
        MAX_RANK - 1,
        half
    );
    let _ = writeln!(out, "pub static XFFT_COS: [f32; {}] = [", half + 1);
    for k in 0..=half {
        let _ = writeln!(out, "    {:.10e},", (step * k as f64).cos() as f32);
    }
    let _ = writeln!(out, "];");
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "/// `sin(pi * k / 2^{}) ` for `k = 0..={}`.",
        MAX_RANK - 1,
        half
    );
    let _ = writeln!(out, "pub static XFFT_SIN: [f32; {}] = [", half + 1);
    for k in 0..=half {
        let _ = writeln!(out, "    {:.10e},", (step * k as f64).sin() as f32);
    }
    let _ = writeln!(out, "];");

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR not set by cargo");
    let dest = Path::new(&out_dir).join("twiddles.rs");
    fs::write(&dest, out).expect("failed to write generated twiddle tables");
}

//! C FFI bindings for the hotpath workload functions.
//!
//! Exposes the two workloads over a C ABI so foreign harnesses (cgo,
//! koffi, Panama, ctypes) can measure cross-language call overhead
//! against the same native bodies. All parameters and returns are
//! plain scalars, so no `unsafe` blocks are required; the only
//! `unsafe_code` allowances are the `#[no_mangle]` export attributes.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

use hotpath_core::{fast_sum8, mix64, slow_compute};

/// Sum of eight 64-bit integers. Wrapping on overflow.
#[allow(unsafe_code)]
#[no_mangle]
pub extern "C" fn hotpath_fast_sum8(
    a: i64,
    b: i64,
    c: i64,
    d: i64,
    e: i64,
    f: i64,
    g: i64,
    h: i64,
) -> i64 {
    fast_sum8(a, b, c, d, e, f, g, h)
}

/// One avalanche round: XOR-shift-33 and multiply with two fixed odd
/// constants.
#[allow(unsafe_code)]
#[no_mangle]
pub extern "C" fn hotpath_mix64(h: u64) -> u64 {
    mix64(h)
}

/// Apply the avalanche round `iterations` times starting from `seed`.
/// Zero iterations returns `seed` unchanged.
#[allow(unsafe_code)]
#[no_mangle]
pub extern "C" fn hotpath_slow_compute(seed: i64, iterations: u32) -> i64 {
    slow_compute(seed, iterations)
}

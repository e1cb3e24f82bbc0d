//! End-to-end call-overhead run.
//!
//! Demonstrates: build a profile → assemble the reference harness →
//! run → print the report. Uses the quick profile so the example
//! finishes fast; swap in [`hotpath_bench::reference_profile`] for the
//! full-scale numbers.

use hotpath_bench::quick_profile;
use hotpath_harness::Harness;

fn main() {
    println!("=== hotpath call-overhead run ===\n");

    let harness = Harness::reference(quick_profile()).expect("quick profile is valid");
    let report = harness.run();

    print!("{report}");

    println!("\nPer-call figures divide total elapsed by the call count shown.");
}

//! Embeds a local build counter and the compile time into the binary.

use std::fs;
use std::path::Path;

const COUNTER_FILE: &str = "build_number.txt";

/// Reads the stored counter (missing or garbled reads as 0) and returns the next one
fn next_build_number(path: &Path) -> u64 {
    let previous = fs::read_to_string(path)
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
        .unwrap_or(0);
    previous + 1
}

fn main() {
    println!("cargo:rerun-if-changed=src");
    println!("cargo:rerun-if-changed=build.rs");

    let path = Path::new(COUNTER_FILE);
    let build = next_build_number(path);
    if let Err(e) = fs::write(path, build.to_string()) {
        // A read-only checkout still builds; the counter just does not advance
        println!("cargo:warning=could not update {}: {}", COUNTER_FILE, e);
    }

    println!("cargo:rustc-env=IROW_BUILD_NUMBER={}", build);
    println!(
        "cargo:rustc-env=IROW_BUILD_TIMESTAMP={}",
        chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ")
    );
}

//! Build script for docsite-etch
//!
//! The built-in page templates are compiled in with `include_str!`.

fn main() {
    // Rebuild if templates change
    println!("cargo:rerun-if-changed=src/templates/");
    println!("cargo:rerun-if-changed=build.rs");
}

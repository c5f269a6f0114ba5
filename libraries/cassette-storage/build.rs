//! Build script for cassette-storage.
//!
//! This script ensures the crate is rebuilt when the embedded schema changes.

fn main() {
    // Trigger rebuild when migrations change
    println!("cargo:rerun-if-changed=migrations");
}

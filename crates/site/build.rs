//! Build script: computes a content hash for the stylesheet so templates can
//! emit a cache-busting query string.

use sha2::{Digest, Sha256};

fn main() {
    println!("cargo:rerun-if-changed=static/css/main.css");

    let css = std::fs::read("static/css/main.css").unwrap_or_default();
    let digest = Sha256::digest(&css);

    // First 8 hex chars are plenty for cache busting.
    let hash: String = digest
        .iter()
        .take(4)
        .map(|b| format!("{b:02x}"))
        .collect();

    println!("cargo:rustc-env=CSS_HASH={hash}");
}

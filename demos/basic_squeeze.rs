//! Basic Squeeze
//!
//! The minimal example: compress a document at a fixed aggressiveness.
//!
//! ```bash
//! cargo run --example basic_squeeze
//! ```

use squeezer::{squeeze, Options};

fn main() {
    let document = b"# Release Notes\n\
        The quick brown fox jumps over the lazy dog.\n\
        The quick brown fox jumps over the lazy dog.\n\
        Visit https://example.com for the full changelog.\n\
        Nothing else changed in this release.\n";

    let options = Options {
        aggressiveness: 5,
        max_tokens: 0,
        profile: String::new(),
    };

    let result = squeeze(document, &options).unwrap();

    println!("bytes_in: {}", result.bytes_in);
    println!("bytes_out: {}", result.bytes_out);
    println!("reduction_pct: {:.1}%", result.reduction_pct);
    println!("---");
    println!("{}", String::from_utf8_lossy(&result.text));

    // Headings and URLs survive pruning regardless of aggressiveness;
    // the duplicated sentence above does not.
}

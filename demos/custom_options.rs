//! Customizing delimiters, indentation, key folding, and path expansion.
//!
//! Run with: cargo run --example custom_options

use std::error::Error;
use toon_codec::{
    decode, encode, toon, DecodeOptions, Delimiter, EncodeOptions, KeyFolding, PathExpansion,
};

fn main() -> Result<(), Box<dyn Error>> {
    let value = toon!({
        "server": {
            "http": {
                "port": 8080,
                "host": "0.0.0.0"
            }
        },
        "tags": ["fast", "cheap", "good,actually"]
    });

    // Pipe delimiter: commas in payloads no longer need quoting
    let piped = EncodeOptions::new().with_delimiter(Delimiter::Pipe);
    println!("pipe delimiter:\n{}\n", encode(&value, &piped)?);

    // Key folding collapses single-key object chains
    let folded = EncodeOptions::new().with_key_folding(KeyFolding::Safe);
    let folded_text = encode(&value, &folded)?;
    println!("key folding:\n{}\n", folded_text);

    // Path expansion is the decode-side inverse
    let expand = DecodeOptions::new().with_expand_paths(PathExpansion::Safe);
    let back = decode(&folded_text, &expand)?;
    assert_eq!(back, value);
    println!("✓ folding + expansion round-trips");

    // Wider indentation
    let wide = EncodeOptions::new().with_indent(4);
    println!("\nfour-space indent:\n{}", encode(&value, &wide)?);

    Ok(())
}

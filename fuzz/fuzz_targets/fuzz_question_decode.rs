//! Fuzz target: bytes32 question decoding
//!
//! Feeds arbitrary 32-byte buffers (plus arbitrary hint text) to
//! decode_question() to ensure:
//! 1. No panics on any buffer contents
//! 2. The result is always a non-empty, displayable string
//!
//! Run: cargo +nightly fuzz run fuzz_question_decode

#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 32 {
        return;
    }

    let mut buf = [0u8; 32];
    buf.copy_from_slice(&data[..32]);

    let hint = std::str::from_utf8(&data[32..]).unwrap_or("0xfallback");

    // decode must never panic, whatever the slot holds
    let decoded = foresight_core::question::decode_question(&buf, hint);
    assert!(!decoded.is_empty(), "decode must always yield display text");

    // the hex path must tolerate the same buffer re-encoded
    let hex_form = format!("0x{}", hex::encode(buf));
    let via_hex = foresight_core::question::decode_question_hex(&hex_form, hint);
    assert_eq!(decoded, via_hex, "direct and hex decode must agree");
});

//! Fuzz target: question encoding
//!
//! Feeds arbitrary strings to encode_question() to ensure:
//! 1. No panics on any input text
//! 2. Output is always exactly 32 bytes
//! 3. Short questions are preserved verbatim as a prefix
//! 4. Decoding the result never panics either
//!
//! Run: cargo +nightly fuzz run fuzz_question_encode -- -max_len=256

#![no_main]
use libfuzzer_sys::fuzz_target;

use foresight_core::question::{decode_question, encode_question, QUESTION_BYTES};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let buf = encode_question(s);

        let kept = s.as_bytes().len().min(QUESTION_BYTES);
        assert_eq!(
            &buf[..kept],
            &s.as_bytes()[..kept],
            "stored bytes must be a verbatim prefix of the encoding"
        );
        if kept < QUESTION_BYTES {
            assert!(
                buf[kept..].iter().all(|&b| b == 0),
                "tail must be zero padding"
            );
        }

        // The decoder must absorb anything the encoder can produce.
        let _ = decode_question(&buf, "0xfuzzhint");
    }
});

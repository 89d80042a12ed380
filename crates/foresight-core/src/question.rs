// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// QUESTION CODEC — fixed-width bytes32 question storage
//
// The market contract stores its question as a single bytes32 slot:
// UTF-8 text, right-padded with zeros, byte-truncated at 32. Decoding is
// defensive — buffers that are unreadable, implausibly short, or look
// like a raw hash degrade to a synthesized label instead of an error.
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Fixed size of the on-chain question slot.
pub const QUESTION_BYTES: usize = 32;

/// Minimum plausible question length; shorter decodes are treated as
/// corrupted and replaced with the fallback label.
const MIN_QUESTION_CHARS: usize = 3;

/// Decoded questions longer than this are suspicious (the slot holds at
/// most 32 bytes) but are still returned as-is.
const LONG_QUESTION_CHARS: usize = 50;

/// How many characters of the caller-supplied hint go into the fallback
/// label. The reference client used the first 8 characters of the market
/// address.
const HINT_PREFIX_CHARS: usize = 8;

/// Encode a question into the fixed 32-byte storage format.
///
/// UTF-8 bytes, right-padded with zeros. Longer questions are truncated
/// at exactly 32 bytes — a cut that can split a multi-byte code point,
/// leaving an invalid UTF-8 tail. That is the stored format's behavior,
/// reproduced as-is; the decoder's fallback path absorbs the damage.
/// Truncation is not an error, only a diagnostic.
pub fn encode_question(question: &str) -> [u8; QUESTION_BYTES] {
    let bytes = question.as_bytes();
    let mut buf = [0u8; QUESTION_BYTES];

    if bytes.len() > QUESTION_BYTES {
        eprintln!(
            "⚠️ Question truncated from {} to {} bytes for on-chain storage: {:?}",
            bytes.len(),
            QUESTION_BYTES,
            question
        );
        buf.copy_from_slice(&bytes[..QUESTION_BYTES]);
    } else {
        buf[..bytes.len()].copy_from_slice(bytes);
    }

    buf
}

/// Encode a question and render it as 0x-prefixed hex, the form the
/// market-creation request carries.
pub fn encode_question_hex(question: &str) -> String {
    format!("0x{}", hex::encode(encode_question(question)))
}

/// Decode a 32-byte question slot back into display text.
///
/// Strips the zero padding, UTF-8-decodes, removes residual NULs, and
/// trims. The decoded text is rejected in favor of a synthesized
/// `"Market Question (<hint>...)"` label when any corruption heuristic
/// trips: invalid UTF-8, fewer than 3 characters after trimming, or a
/// pure-hexadecimal string (almost certainly a hash that ended up in the
/// question slot). These heuristics can misfire on legitimately short or
/// hex-looking questions; that trade-off matches the reference client
/// and is kept.
///
/// Never fails — every input produces some displayable string.
pub fn decode_question(raw: &[u8; QUESTION_BYTES], fallback_hint: &str) -> String {
    // Trailing zeros are padding, not content.
    let content_len = raw
        .iter()
        .rposition(|&b| b != 0)
        .map(|i| i + 1)
        .unwrap_or(0);

    let text = match std::str::from_utf8(&raw[..content_len]) {
        Ok(text) => text,
        Err(_) => return fallback_label(fallback_hint),
    };

    if text.contains('\u{FFFD}') {
        return fallback_label(fallback_hint);
    }

    let cleaned = text.replace('\0', "");
    let trimmed = cleaned.trim();

    // Lengths count Unicode scalars; the reference client counted UTF-16
    // units, which differs only for astral-plane text.
    if trimmed.chars().count() < MIN_QUESTION_CHARS || is_pure_hex(trimmed) {
        return fallback_label(fallback_hint);
    }

    if trimmed.chars().count() > LONG_QUESTION_CHARS {
        eprintln!(
            "⚠️ Decoded question unexpectedly long ({} chars) — returning as-is",
            trimmed.chars().count()
        );
    }

    trimmed.to_string()
}

/// Decode a question slot supplied as hex (with or without 0x prefix).
/// Malformed or wrong-length hex degrades to the fallback label like any
/// other corruption.
pub fn decode_question_hex(raw_hex: &str, fallback_hint: &str) -> String {
    let stripped = raw_hex.strip_prefix("0x").unwrap_or(raw_hex);

    match hex::decode(stripped) {
        Ok(bytes) if bytes.len() == QUESTION_BYTES => {
            let mut buf = [0u8; QUESTION_BYTES];
            buf.copy_from_slice(&bytes);
            decode_question(&buf, fallback_hint)
        }
        _ => fallback_label(fallback_hint),
    }
}

/// Synthesized label for unreadable questions, e.g.
/// `Market Question (0x123456...)`.
fn fallback_label(hint: &str) -> String {
    let prefix: String = hint.chars().take(HINT_PREFIX_CHARS).collect();
    format!("Market Question ({}...)", prefix)
}

/// Heuristic for "this is a hash, not text": every character is an ASCII
/// hex digit.
fn is_pure_hex(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_hexdigit())
}

// ─────────────────────────────────────────────────────────────────
// UNIT TESTS
// ─────────────────────────────────────────────────────────────────

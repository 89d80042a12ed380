use crate::{print_info, print_success};
use colored::*;
use foresight_core::question;

/// Handle question codec subcommands. Fully offline.
pub fn handle(action: crate::QuestionCommands) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        crate::QuestionCommands::Encode { text } => encode(&text),
        crate::QuestionCommands::Decode { hex, hint } => decode(&hex, &hint),
    }
    Ok(())
}

fn encode(text: &str) {
    let byte_len = text.len();
    if byte_len > question::QUESTION_BYTES {
        print_info(&format!(
            "question is {} bytes; only the first {} are stored",
            byte_len,
            question::QUESTION_BYTES
        ));
    }

    let encoded = question::encode_question_hex(text);
    print_success("Encoded question:");
    println!("  {}", encoded.cyan().bold());
}

fn decode(raw_hex: &str, hint: &str) {
    let decoded = question::decode_question_hex(raw_hex, hint);
    print_success("Decoded question:");
    println!("  {}", decoded.white().bold());
}

use anchor_lang::prelude::*;

#[constant]
pub const POST_SEED: &[u8] = b"post";

#[constant]
pub const TOPIC_GATE_SEED: &[u8] = b"topic_gate";

// Shadow Drive file URLs fit comfortably under this bound.
pub const MAX_POST_FILE_URL_LEN: usize = 100;

pub const MIN_POST_RATING: u8 = 1;
pub const MAX_POST_RATING: u8 = 5;

// Possession, not historical ownership.
pub const MIN_CREDENTIAL_AMOUNT: u64 = 1;

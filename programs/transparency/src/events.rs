use anchor_lang::prelude::*;

use crate::state::GateRequirement;

#[event]
pub struct PostCreated {
    pub post: Pubkey,
    pub author: Pubkey,
    pub topic_address: Pubkey,
    pub is_scam: bool,
    pub post_rating: u8,
}

#[event]
pub struct PostUpdated {
    pub post: Pubkey,
    pub author: Pubkey,
    pub is_scam: bool,
    pub post_rating: u8,
}

#[event]
pub struct TopicGateConfigured {
    pub topic_address: Pubkey,
    pub requirement: GateRequirement,
}

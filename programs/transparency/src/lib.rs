// Every instruction module exposes its own `handler`.
#![allow(ambiguous_glob_reexports)]

pub mod constants;
pub mod errors;
pub mod events;
pub mod gate;
pub mod instructions;
pub mod state;

use anchor_lang::prelude::*;

pub use constants::*;
pub use errors::*;
pub use events::*;
pub use instructions::*;
pub use state::*;

declare_id!("2ziQobdPPPsgdc7e7Py1mZNs3UrhwiReUJH59ehW67Fd");

#[program]
pub mod transparency {
    use super::*;

    /// Gates a topic behind an NFT credential. Signed by the topic key.
    pub fn configure_topic_gate(
        ctx: Context<ConfigureTopicGate>,
        requirement: GateRequirement,
    ) -> Result<()> {
        configure_topic_gate::handler(ctx, requirement)
    }

    /// Publishes the author's post under a topic, once per (topic, author).
    pub fn create_post(
        ctx: Context<CreatePost>,
        post_file_url: String,
        is_scam: bool,
        post_rating: u8,
    ) -> Result<()> {
        create_post::handler(ctx, post_file_url, is_scam, post_rating)
    }

    /// Revises the author's post; only the stored author may sign.
    pub fn update_post(
        ctx: Context<UpdatePost>,
        post_file_url: String,
        is_scam: bool,
        post_rating: u8,
    ) -> Result<()> {
        update_post::handler(ctx, post_file_url, is_scam, post_rating)
    }
}

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::events::TopicGateConfigured;
use crate::state::*;

#[derive(Accounts)]
pub struct ConfigureTopicGate<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    /// Only the holder of the topic key may gate it.
    pub topic_address: Signer<'info>,

    #[account(
        init,
        seeds = [TOPIC_GATE_SEED, topic_address.key().as_ref()],
        bump,
        payer = payer,
        space = TopicGate::DISCRIMINATOR.len() + TopicGate::INIT_SPACE,
    )]
    pub topic_gate: Account<'info, TopicGate>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<ConfigureTopicGate>, requirement: GateRequirement) -> Result<()> {
    let topic_address = ctx.accounts.topic_address.key();

    ctx.accounts.topic_gate.set_inner(TopicGate {
        topic_address,
        requirement,
        bump: ctx.bumps.topic_gate,
    });

    msg!("Gated topic {} with {:?}", topic_address, requirement);
    emit!(TopicGateConfigured {
        topic_address,
        requirement,
    });

    Ok(())
}

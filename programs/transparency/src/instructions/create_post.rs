use anchor_lang::prelude::*;
use anchor_spl::metadata::MetadataAccount;
use anchor_spl::token::TokenAccount;

use crate::constants::*;
use crate::events::PostCreated;
use crate::gate::check_credential;
use crate::state::*;

#[derive(Accounts)]
pub struct CreatePost<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    pub author: Signer<'info>,

    /// CHECK: This is not written to, just used as a reference for PDA creation
    pub topic_address: UncheckedAccount<'info>,

    /// CHECK: Address is fixed by the seeds; an uninitialized account means the topic is ungated
    #[account(
        seeds = [TOPIC_GATE_SEED, topic_address.key().as_ref()],
        bump,
    )]
    pub topic_gate: UncheckedAccount<'info>,

    pub token_account: Option<Account<'info, TokenAccount>>,

    pub metadata: Option<Account<'info, MetadataAccount>>,

    #[account(
        init,
        seeds = [POST_SEED, topic_address.key().as_ref(), author.key().as_ref()],
        bump,
        payer = payer,
        space = Post::DISCRIMINATOR.len() + Post::INIT_SPACE,
    )]
    pub post: Account<'info, Post>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<CreatePost>,
    post_file_url: String,
    is_scam: bool,
    post_rating: u8,
) -> Result<()> {
    let author = ctx.accounts.author.key();
    let topic_address = ctx.accounts.topic_address.key();

    if let Some(gate) = TopicGate::load(&ctx.accounts.topic_gate)? {
        check_credential(
            &gate.requirement,
            &author,
            ctx.accounts.token_account.as_deref(),
            ctx.accounts.metadata.as_deref(),
        )?;
    }

    let post = Post::new(
        author,
        topic_address,
        post_file_url,
        is_scam,
        post_rating,
        ctx.bumps.post,
    )
    .map_err(|code| {
        msg!("Rejected post fields: {}", code);
        error!(code)
    })?;
    ctx.accounts.post.set_inner(post);

    msg!("Created post {} for topic {}", ctx.accounts.post.key(), topic_address);
    emit!(PostCreated {
        post: ctx.accounts.post.key(),
        author,
        topic_address,
        is_scam,
        post_rating,
    });

    Ok(())
}

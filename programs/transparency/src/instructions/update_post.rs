use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::TransparencyError;
use crate::events::PostUpdated;
use crate::state::*;

// The post is located from its stored fields so that a stranger aimed at
// someone else's post fails on authorship instead of on the address.
#[derive(Accounts)]
pub struct UpdatePost<'info> {
    pub author: Signer<'info>,

    /// CHECK: This is not written to, just used as a reference for PDA creation
    pub topic_address: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [POST_SEED, post.topic_address.as_ref(), post.author.as_ref()],
        bump = post.bump,
        has_one = author @ TransparencyError::InvalidPostAuthor,
        has_one = topic_address @ TransparencyError::InvalidTopic,
    )]
    pub post: Account<'info, Post>,
}

// No credential check: holding the NFT is only required to create.
pub fn handler(
    ctx: Context<UpdatePost>,
    post_file_url: String,
    is_scam: bool,
    post_rating: u8,
) -> Result<()> {
    let author = ctx.accounts.author.key();
    let post = &mut ctx.accounts.post;

    post.revise(&author, post_file_url, is_scam, post_rating)
        .map_err(|code| {
            msg!("Rejected post update: {}", code);
            error!(code)
        })?;

    msg!("Successfully updated post {}", post.key());
    emit!(PostUpdated {
        post: post.key(),
        author,
        is_scam,
        post_rating,
    });

    Ok(())
}

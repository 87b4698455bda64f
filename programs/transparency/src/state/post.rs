use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::TransparencyError;

/// A public attestation about externally hosted content.
///
/// One record exists per `(topic_address, author)`: the pair is the only
/// input to the account address, so a second create at the same pair
/// collides with the existing account.
#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct Post {
    pub author: Pubkey,
    pub topic_address: Pubkey,
    #[max_len(MAX_POST_FILE_URL_LEN)]
    pub post_file_url: String,
    pub is_scam: bool,
    pub post_rating: u8,
    pub bump: u8,
}

impl Post {
    pub fn seeds<'a>(topic_address: &'a Pubkey, author: &'a Pubkey) -> [&'a [u8]; 3] {
        [POST_SEED, topic_address.as_ref(), author.as_ref()]
    }

    /// Address and canonical bump of the post `author` holds under `topic_address`.
    pub fn address(topic_address: &Pubkey, author: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&Self::seeds(topic_address, author), &crate::ID)
    }

    pub fn validate_fields(
        post_file_url: &str,
        post_rating: u8,
    ) -> std::result::Result<(), TransparencyError> {
        if !(MIN_POST_RATING..=MAX_POST_RATING).contains(&post_rating) {
            return Err(TransparencyError::InvalidPostRating);
        }
        if post_file_url.len() > MAX_POST_FILE_URL_LEN {
            return Err(TransparencyError::PostFileUrlTooLong);
        }
        Ok(())
    }

    pub fn new(
        author: Pubkey,
        topic_address: Pubkey,
        post_file_url: String,
        is_scam: bool,
        post_rating: u8,
        bump: u8,
    ) -> std::result::Result<Self, TransparencyError> {
        Self::validate_fields(&post_file_url, post_rating)?;
        Ok(Self {
            author,
            topic_address,
            post_file_url,
            is_scam,
            post_rating,
            bump,
        })
    }

    /// Overwrites the mutable fields. Nothing is written unless `signer`
    /// is the author and every field is valid.
    pub fn revise(
        &mut self,
        signer: &Pubkey,
        post_file_url: String,
        is_scam: bool,
        post_rating: u8,
    ) -> std::result::Result<(), TransparencyError> {
        if *signer != self.author {
            return Err(TransparencyError::InvalidPostAuthor);
        }
        Self::validate_fields(&post_file_url, post_rating)?;

        self.post_file_url = post_file_url;
        self.is_scam = is_scam;
        self.post_rating = post_rating;
        Ok(())
    }
}

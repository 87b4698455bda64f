use anchor_lang::prelude::*;

#[error_code]
pub enum TransparencyError {
    #[msg("Post rating must be between 1 and 5")]
    InvalidPostRating,

    #[msg("Post file url exceeds the maximum length")]
    PostFileUrlTooLong,

    #[msg("Signer is not the author of this post")]
    InvalidPostAuthor,

    #[msg("Topic does not match the post")]
    InvalidTopic,

    #[msg("Token account is not owned by the author")]
    InvalidTokenOwner,

    #[msg("Token account holds no credential")]
    InvalidTokenAmount,

    #[msg("Metadata mint does not match token account mint")]
    IncorrectMint,

    #[msg("Credential does not belong to the required collection")]
    InvalidCollection,

    #[msg("Credential metadata has no collection")]
    MissingCollection,

    #[msg("Gated topic requires token and metadata accounts")]
    MissingCredentialAccounts,
}

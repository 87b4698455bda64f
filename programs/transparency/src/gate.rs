//! Credential gate: decides whether an author may post under a gated topic.
//!
//! The checks run on plain views of the token and metadata accounts so the
//! verdict depends only on its inputs. Nothing here writes to, burns or
//! otherwise consumes the credential.

use anchor_lang::prelude::*;
use anchor_spl::metadata::MetadataAccount;
use anchor_spl::token::TokenAccount;

use crate::constants::MIN_CREDENTIAL_AMOUNT;
use crate::errors::TransparencyError;
use crate::state::GateRequirement;

/// Balance held in an SPL token account.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Credential {
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub amount: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CollectionRef {
    pub key: Pubkey,
    pub verified: bool,
}

/// The parts of a Metaplex metadata account the gate looks at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CredentialMetadata {
    pub mint: Pubkey,
    pub collection: Option<CollectionRef>,
}

impl From<&TokenAccount> for Credential {
    fn from(account: &TokenAccount) -> Self {
        Self {
            owner: account.owner,
            mint: account.mint,
            amount: account.amount,
        }
    }
}

impl From<&MetadataAccount> for CredentialMetadata {
    fn from(account: &MetadataAccount) -> Self {
        Self {
            mint: account.mint,
            collection: account.collection.as_ref().map(|collection| CollectionRef {
                key: collection.key,
                verified: collection.verified,
            }),
        }
    }
}

impl GateRequirement {
    pub fn verify(
        &self,
        author: &Pubkey,
        credential: &Credential,
        metadata: &CredentialMetadata,
    ) -> std::result::Result<(), TransparencyError> {
        if credential.owner != *author {
            return Err(TransparencyError::InvalidTokenOwner);
        }
        if credential.amount < MIN_CREDENTIAL_AMOUNT {
            return Err(TransparencyError::InvalidTokenAmount);
        }
        // Metadata from another mint could claim any collection.
        if metadata.mint != credential.mint {
            return Err(TransparencyError::IncorrectMint);
        }

        match self {
            GateRequirement::Mint { mint } => {
                if credential.mint != *mint {
                    return Err(TransparencyError::InvalidCollection);
                }
            }
            GateRequirement::Collection { collection } => {
                let member = metadata.collection.ok_or(TransparencyError::MissingCollection)?;
                if !member.verified || member.key != *collection {
                    return Err(TransparencyError::InvalidCollection);
                }
            }
        }
        Ok(())
    }
}

/// Decision for a gated topic, given whatever credential the caller brought.
pub fn admit(
    requirement: &GateRequirement,
    author: &Pubkey,
    credential: Option<(Credential, CredentialMetadata)>,
) -> std::result::Result<(), TransparencyError> {
    let (credential, metadata) = credential.ok_or(TransparencyError::MissingCredentialAccounts)?;
    requirement.verify(author, &credential, &metadata)
}

/// Runs `requirement` against the accounts supplied with a create call.
pub fn check_credential(
    requirement: &GateRequirement,
    author: &Pubkey,
    token_account: Option<&TokenAccount>,
    metadata: Option<&MetadataAccount>,
) -> Result<()> {
    let credential = token_account
        .zip(metadata)
        .map(|(token_account, metadata)| {
            (Credential::from(token_account), CredentialMetadata::from(metadata))
        });

    admit(requirement, author, credential).map_err(|code| {
        msg!("Credential rejected: {}", code);
        error!(code)
    })?;

    msg!("Signer is a valid NFT member");
    Ok(())
}

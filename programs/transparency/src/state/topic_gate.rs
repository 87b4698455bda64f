use anchor_lang::prelude::*;

use crate::constants::TOPIC_GATE_SEED;

/// What a credential must prove before its holder may post under a topic.
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateRequirement {
    /// Token account must hold this exact mint.
    Mint { mint: Pubkey },
    /// Metadata must carry this collection, verified by its authority.
    Collection { collection: Pubkey },
}

/// Marks `topic_address` as gated. Topics without one accept any author.
#[account]
#[derive(InitSpace, Debug)]
pub struct TopicGate {
    pub topic_address: Pubkey,
    pub requirement: GateRequirement,
    pub bump: u8,
}

impl TopicGate {
    pub fn address(topic_address: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[TOPIC_GATE_SEED, topic_address.as_ref()], &crate::ID)
    }

    /// Reads the gate stored at an already seed-checked address.
    ///
    /// An address this program never initialized means the topic is ungated.
    pub fn load(info: &AccountInfo) -> Result<Option<Self>> {
        if info.owner != &crate::ID || info.data_is_empty() {
            return Ok(None);
        }
        let data = info.try_borrow_data()?;
        let gate = Self::try_deserialize(&mut &data[..])?;
        Ok(Some(gate))
    }
}

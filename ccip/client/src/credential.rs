use {crate::CcipError, ccip_types::Address};

/// Whether the client can sign transactions. Decided once when the client is
/// built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Credential {
    ReadOnly,
    ReadWrite { owner: Address },
}

impl Credential {
    /// The signing account, or [`CcipError::SigningRequired`] for a
    /// read-only client.
    pub fn owner(&self) -> Result<Address, CcipError> {
        match self {
            Credential::ReadOnly => Err(CcipError::SigningRequired),
            Credential::ReadWrite { owner } => Ok(*owner),
        }
    }

    pub fn can_sign(&self) -> bool {
        matches!(self, Credential::ReadWrite { .. })
    }
}

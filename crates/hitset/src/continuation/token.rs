use crate::{
    codec::{decode_token, encode_token},
    continuation::ContinuationCursor,
    error::{ErrorClass, ErrorOrigin, InternalError},
    extract::HitExtractor,
    serialize::{deserialize_bounded, serialize},
};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

const MAX_TOKEN_BYTES: usize = 8 * 1024;

impl ContinuationCursor {
    /// Encode this cursor into an opaque versioned token payload.
    pub fn encode(&self) -> Result<Vec<u8>, TokenWireError> {
        let wire = ContinuationTokenWire {
            version: TokenVersion::V1.encode(),
            continuation_id: self.continuation_id().to_string(),
            extractors: self.extractors().to_vec(),
        };

        serialize(&wire).map_err(|err| TokenWireError::Encode(err.to_string()))
    }

    /// Decode an opaque token payload back into a cursor.
    pub fn decode(bytes: &[u8]) -> Result<Self, TokenWireError> {
        let wire: ContinuationTokenWire = deserialize_bounded(bytes, MAX_TOKEN_BYTES)
            .map_err(|err| TokenWireError::Decode(err.to_string()))?;

        // Decode the protocol version first so compatibility behavior remains centralized.
        TokenVersion::decode(wire.version)?;

        Ok(Self::new(wire.continuation_id, wire.extractors))
    }

    /// Encode this cursor into the opaque hex text token handed to clients.
    pub fn encode_text(&self) -> Result<String, TokenWireError> {
        Ok(encode_token(&self.encode()?))
    }

    /// Decode an opaque hex text token received from a client.
    ///
    /// The hex layer is checked before the payload is touched.
    pub fn decode_text(token: &str) -> Result<Self, TokenWireError> {
        let bytes = decode_token(token).map_err(|reason| TokenWireError::Decode(reason.to_string()))?;

        Self::decode(&bytes)
    }

    #[cfg(test)]
    pub(crate) fn encode_with_version_for_test(
        &self,
        version: u8,
    ) -> Result<Vec<u8>, TokenWireError> {
        let wire = ContinuationTokenWire {
            version,
            continuation_id: self.continuation_id().to_string(),
            extractors: self.extractors().to_vec(),
        };

        serialize(&wire).map_err(|err| TokenWireError::Encode(err.to_string()))
    }
}

///
/// TokenWireError
/// Continuation token encoding/decoding failures.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum TokenWireError {
    #[error("failed to encode continuation token: {0}")]
    Encode(String),

    #[error("failed to decode continuation token: {0}")]
    Decode(String),

    #[error("unsupported continuation token version: {version}")]
    UnsupportedVersion { version: u8 },
}

impl TokenWireError {
    pub(crate) const fn class(&self) -> ErrorClass {
        match self {
            Self::Encode(_) | Self::Decode(_) => ErrorClass::Internal,
            Self::UnsupportedVersion { .. } => ErrorClass::Unsupported,
        }
    }
}

impl From<TokenWireError> for InternalError {
    fn from(err: TokenWireError) -> Self {
        Self::new(err.class(), ErrorOrigin::Continuation, err.to_string())
    }
}

///
/// TokenVersion
///
/// Wire-level token version owned by the continuation protocol boundary.
/// This keeps version parsing and compatibility behavior centralized.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum TokenVersion {
    V1,
}

impl TokenVersion {
    const V1_TAG: u8 = 1;

    // Decode one raw wire version into the protocol enum.
    const fn decode(raw: u8) -> Result<Self, TokenWireError> {
        match raw {
            Self::V1_TAG => Ok(Self::V1),
            version => Err(TokenWireError::UnsupportedVersion { version }),
        }
    }

    // Encode this protocol version for wire format output.
    const fn encode(self) -> u8 {
        match self {
            Self::V1 => Self::V1_TAG,
        }
    }
}

///
/// ContinuationTokenWire
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
struct ContinuationTokenWire {
    version: u8,
    continuation_id: String,
    extractors: Vec<HitExtractor>,
}

///
/// TESTS
///

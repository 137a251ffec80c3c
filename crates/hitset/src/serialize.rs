mod cbor;

use crate::error::{ErrorClass, ErrorOrigin, InternalError};
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error as ThisError;

///
/// SerializeError
///

#[derive(Debug, ThisError)]
pub enum SerializeError {
    #[error("serialize error: {0}")]
    Serialize(String),
    #[error("deserialize error: {0}")]
    Deserialize(String),
    #[error("payload size {len} exceeds limit {max_bytes}")]
    DeserializeSizeLimitExceeded { len: usize, max_bytes: usize },
}

impl SerializeError {
    pub(crate) const fn class() -> ErrorClass {
        ErrorClass::Internal
    }
}

impl From<SerializeError> for InternalError {
    fn from(err: SerializeError) -> Self {
        Self::new(
            SerializeError::class(),
            ErrorOrigin::Serialize,
            err.to_string(),
        )
    }
}

/// Serialize a value into the crate wire format (CBOR).
pub fn serialize<T>(ty: &T) -> Result<Vec<u8>, SerializeError>
where
    T: Serialize,
{
    cbor::serialize(ty)
}

/// Deserialize a value produced by [`serialize`], bounding input size first.
///
/// Payload policy (which bound applies to which payload) belongs to the
/// caller; format logic lives here.
pub fn deserialize_bounded<T>(bytes: &[u8], max_bytes: usize) -> Result<T, SerializeError>
where
    T: DeserializeOwned,
{
    cbor::deserialize_bounded(bytes, max_bytes)
}

///
/// TESTS
///

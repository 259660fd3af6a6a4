/// Error type for the fallible isomer operations.
///
/// The baseline constructors and conversions are total; these errors only come
/// from the strict address constructor, season name parsing and the codec.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IsomerError {
    #[error("octet {index} out of range 0..=255: {value}")]
    InvalidOctetRange { index: usize, value: i32 },
    #[error("unknown season: {0}")]
    UnknownSeason(String),
    #[error("encode error: {0}")]
    Encode(String),
    #[error("decode error: {0}")]
    Decode(String),
}

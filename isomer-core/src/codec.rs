//! CBOR encoding for isomer values.
//!
//! `Season` encodes as its bare integer. `IpAddr` uses serde's externally
//! tagged form: a one-entry map from the tag to the payload.

use serde::{de::DeserializeOwned, Serialize};
use tracing::instrument;

use crate::error::IsomerError;

/// Serializes a value to CBOR bytes.
#[instrument(skip(value), level = "debug")]
pub fn to_cbor<T: Serialize>(value: &T) -> Result<Vec<u8>, IsomerError> {
    let mut buf = Vec::new();
    ciborium::into_writer(value, &mut buf).map_err(|e| IsomerError::Encode(e.to_string()))?;
    Ok(buf)
}

/// Deserializes a value from CBOR bytes.
#[instrument(skip(data), fields(len = data.len()), level = "debug")]
pub fn from_cbor<T: DeserializeOwned>(data: &[u8]) -> Result<T, IsomerError> {
    ciborium::from_reader(data).map_err(|e| IsomerError::Decode(e.to_string()))
}

/// Formats bytes as lowercase hex.
pub fn to_hex(data: &[u8]) -> String {
    data.iter().map(|byte| format!("{:02x}", byte)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{IpAddr, Season};

    #[test]
    fn season_encodes_as_integer() {
        // CBOR unsigned 42 is 0x18 0x2a
        assert_eq!(to_cbor(&Season::from_int(42)).unwrap(), vec![0x18, 0x2a]);
        assert_eq!(to_cbor(&Season::FALL).unwrap(), vec![0x08]);
    }

    #[test]
    fn season_decodes_undefined_value() {
        let season: Season = from_cbor(&[0x18, 0x2a]).unwrap();
        assert_eq!(season.to_int(), 42);
    }

    #[test]
    fn ip_addr_survives_cbor() {
        let addr = IpAddr::v4(999, 168, 1, 1);
        let bytes = to_cbor(&addr).unwrap();
        let back: IpAddr = from_cbor(&bytes).unwrap();
        assert_eq!(back, addr);
    }

    #[test]
    fn truncated_input_is_decode_error() {
        let bytes = to_cbor(&IpAddr::v6("::1")).unwrap();
        let err = from_cbor::<IpAddr>(&bytes[..bytes.len() - 1]).unwrap_err();
        assert!(matches!(err, IsomerError::Decode(_)));
    }

    #[test]
    fn hex_formatting() {
        assert_eq!(to_hex(&[0x00, 0x18, 0x2a, 0xff]), "00182aff");
        assert_eq!(to_hex(&[]), "");
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::IsomerError;
use crate::Tagged;

/// An IP address as a closed tagged union.
///
/// `V4` holds four integer octets. They are meant to lie in `0..=255`, but
/// [`IpAddr::v4`] keeps whatever it is given; use [`IpAddr::try_v4`] to reject
/// out-of-range octets. `V6` holds arbitrary text and is never validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Tagged)]
pub enum IpAddr {
    V4(i32, i32, i32, i32),
    V6(String),
}

impl IpAddr {
    /// Creates an IPv4 address. Never fails; octets are stored verbatim.
    pub fn v4(p0: i32, p1: i32, p2: i32, p3: i32) -> Self {
        IpAddr::V4(p0, p1, p2, p3)
    }

    /// Creates an IPv4 address, rejecting the first octet outside `0..=255`.
    pub fn try_v4(p0: i32, p1: i32, p2: i32, p3: i32) -> Result<Self, IsomerError> {
        let octets = [p0, p1, p2, p3];
        if let Some((index, &value)) = octets
            .iter()
            .enumerate()
            .find(|(_, o)| !(0..=255).contains(*o))
        {
            debug!(index, value, "rejecting out-of-range octet");
            return Err(IsomerError::InvalidOctetRange { index, value });
        }
        Ok(Self::v4(p0, p1, p2, p3))
    }

    /// Creates an IPv6 address from its text. Never fails.
    pub fn v6(value: impl Into<String>) -> Self {
        IpAddr::V6(value.into())
    }

    /// Returns the four octets of a `V4` address.
    pub fn octets(&self) -> Option<[i32; 4]> {
        match self {
            IpAddr::V4(p0, p1, p2, p3) => Some([*p0, *p1, *p2, *p3]),
            IpAddr::V6(_) => None,
        }
    }

    /// Returns the text of a `V6` address.
    pub fn v6_text(&self) -> Option<&str> {
        match self {
            IpAddr::V4(..) => None,
            IpAddr::V6(value) => Some(value),
        }
    }
}

impl fmt::Display for IpAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpAddr::V4(p0, p1, p2, p3) => write!(f, "{}.{}.{}.{}", p0, p1, p2, p3),
            IpAddr::V6(value) => f.write_str(value),
        }
    }
}

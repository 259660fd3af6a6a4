//! Isomer provides two small value types for working with closed variants.
//!
//! Core concepts:
//! - **IpAddr**: a tagged union of an IPv4 address (four integer octets) or
//!   an IPv6 address (free text)
//! - **Season**: an integer-backed flag enumeration whose display never fails,
//!   even for values with no named combination
//! - **Tagged**: names the active variant of a closed enum
//!
//! # Example
//!
//! ```
//! use isomer_core::{IpAddr, Season, Tagged};
//!
//! let home = IpAddr::v4(127, 0, 0, 1);
//! assert!(home.is_v4());
//! assert_eq!(home.tag(), "V4");
//!
//! let season = Season::from_int(42);
//! assert_eq!(season.describe(), "I've never heard of 42");
//! ```

// Lets the derive macro refer to `::isomer_core` from inside this crate.
extern crate self as isomer_core;

pub mod codec;
mod error;
mod ip_addr;
mod season;
mod tagged;

pub use error::IsomerError;
pub use ip_addr::IpAddr;
pub use season::Season;
pub use tagged::Tagged;

pub use isomer_derive::Tagged;

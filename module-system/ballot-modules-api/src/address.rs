use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use borsh::{BorshDeserialize, BorshSerialize};

use crate::bech32::{vec_to_bech32m, AddressBech32, HRP};

/// The requirements on an address type used by a [`crate::Spec`].
pub trait BasicAddress:
    fmt::Debug
    + fmt::Display
    + Clone
    + Eq
    + Ord
    + Hash
    + Send
    + Sync
    + AsRef<[u8]>
    + From<[u8; 32]>
    + BorshSerialize
    + BorshDeserialize
    + serde::Serialize
    + serde::de::DeserializeOwned
    + FromStr<Err = anyhow::Error>
    + 'static
{
}

/// An opaque 32 bytes identity. Only equality is meaningful.
#[derive(
    PartialEq, Clone, Copy, Eq, PartialOrd, Ord, BorshDeserialize, BorshSerialize, Hash,
)]
pub struct Address {
    addr: [u8; 32],
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.addr
    }
}

impl Address {
    /// Creates a new address containing the given bytes
    pub const fn new(addr: [u8; 32]) -> Self {
        Self { addr }
    }
}

impl<'a> TryFrom<&'a [u8]> for Address {
    type Error = anyhow::Error;

    fn try_from(addr: &'a [u8]) -> Result<Self, Self::Error> {
        if addr.len() != 32 {
            anyhow::bail!("Address must be 32 bytes long");
        }
        let mut addr_bytes = [0u8; 32];
        addr_bytes.copy_from_slice(addr);
        Ok(Self { addr: addr_bytes })
    }
}

impl FromStr for Address {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let addr = AddressBech32::from_str(s)?;
        Ok(Self::try_from(&addr)?)
    }
}

impl From<[u8; 32]> for Address {
    fn from(addr: [u8; 32]) -> Self {
        Self { addr }
    }
}

impl TryFrom<&AddressBech32> for Address {
    type Error = crate::Bech32ParseError;

    fn try_from(addr: &AddressBech32) -> Result<Self, Self::Error> {
        Ok(Self {
            addr: addr.to_byte_array()?,
        })
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = vec_to_bech32m(&self.addr, HRP).map_err(|_| fmt::Error)?;
        write!(f, "{}", text)
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self)
    }
}

impl serde::Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        if serializer.is_human_readable() {
            serializer.collect_str(self)
        } else {
            serde::Serialize::serialize(&self.addr, serializer)
        }
    }
}

impl<'de> serde::Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            let address_bech32: AddressBech32 = serde::Deserialize::deserialize(deserializer)?;
            Address::try_from(&address_bech32).map_err(serde::de::Error::custom)
        } else {
            let addr = <[u8; 32] as serde::Deserialize>::deserialize(deserializer)?;
            Ok(Address { addr })
        }
    }
}

impl BasicAddress for Address {}

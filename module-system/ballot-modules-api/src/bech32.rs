use std::str::FromStr;

use bech32::{Error, FromBase32, ToBase32};

use crate::error::Bech32ParseError;

pub(crate) const HRP: &str = "ballot";

pub(crate) fn vec_to_bech32m(vec: &[u8], hrp: &str) -> Result<String, Error> {
    let data = vec.to_base32();
    let bech32_addr = bech32::encode(hrp, data, bech32::Variant::Bech32m)?;
    Ok(bech32_addr)
}

pub(crate) fn bech32m_to_decoded_vec(bech32_addr: &str) -> Result<(String, Vec<u8>), Error> {
    let (hrp, data, _) = bech32::decode(bech32_addr)?;
    let vec = Vec::<u8>::from_base32(&data)?;
    Ok((hrp, vec))
}

/// The text form of an [`crate::Address`]: bech32m with the `ballot` HRP.
///
/// Values of this type are always well formed, they can only be built from a
/// 32 bytes address or by parsing a string that decodes to one.
#[derive(
    serde::Serialize,
    serde::Deserialize,
    Debug,
    PartialEq,
    Clone,
    Eq,
    derive_more::Display,
    derive_more::Into,
)]
#[serde(try_from = "String", into = "String")]
#[display(fmt = "{}", "value")]
pub struct AddressBech32 {
    value: String,
}

impl AddressBech32 {
    /// Decodes the raw address bytes.
    pub fn to_byte_array(&self) -> Result<[u8; 32], Bech32ParseError> {
        let (_, data) = bech32m_to_decoded_vec(&self.value)?;
        <[u8; 32]>::try_from(data.as_slice())
            .map_err(|_| Bech32ParseError::InvalidLength(data.len()))
    }
}

impl TryFrom<&[u8]> for AddressBech32 {
    type Error = Bech32ParseError;

    fn try_from(addr: &[u8]) -> Result<Self, Bech32ParseError> {
        if addr.len() != 32 {
            return Err(Bech32ParseError::InvalidLength(addr.len()));
        }
        let value = vec_to_bech32m(addr, HRP)?;
        Ok(AddressBech32 { value })
    }
}

impl TryFrom<String> for AddressBech32 {
    type Error = Bech32ParseError;

    fn try_from(addr: String) -> Result<Self, Bech32ParseError> {
        AddressBech32::from_str(&addr)
    }
}

impl FromStr for AddressBech32 {
    type Err = Bech32ParseError;

    fn from_str(s: &str) -> Result<Self, Bech32ParseError> {
        let (hrp, data) = bech32m_to_decoded_vec(s)?;

        if HRP != hrp {
            return Err(Bech32ParseError::WrongHRP(hrp));
        }

        if data.len() != 32 {
            return Err(Bech32ParseError::InvalidLength(data.len()));
        }

        Ok(AddressBech32 {
            value: s.to_string(),
        })
    }
}

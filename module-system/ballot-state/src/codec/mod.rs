//! How container keys and values are turned into storage bytes.

mod borsh_codec;
mod json_codec;

pub use borsh_codec::BorshCodec;
pub use json_codec::JsonCodec;

/// Encodes and decodes the values of a container.
pub trait StateValueCodec<V> {
    /// Error returned when stored bytes don't decode to a `V`.
    type Error: std::fmt::Debug;

    /// Encodes a value. Every `V` must be encodable.
    fn encode_value(&self, value: &V) -> Vec<u8>;

    /// Decodes a value from stored bytes.
    fn try_decode_value(&self, bytes: &[u8]) -> Result<V, Self::Error>;

    /// Decodes bytes that were written through [`StateValueCodec::encode_value`].
    ///
    /// # Panics
    /// Panics if the bytes are not a valid encoding, which means the storage is corrupted.
    fn decode_value_unwrap(&self, bytes: &[u8]) -> V {
        match self.try_decode_value(bytes) {
            Ok(value) => value,
            Err(err) => panic!(
                "Stored value 0x{} doesn't decode: {:?}",
                hex::encode(bytes),
                err
            ),
        }
    }
}

/// Encodes the keys of a container. Keys are never read back.
pub trait StateKeyCodec<K> {
    /// Encodes a key. Equal keys must encode to equal bytes and distinct keys to
    /// distinct bytes, since the encoding is the storage address.
    fn encode_key(&self, key: &K) -> Vec<u8>;
}

/// A pair of key and value codecs, as held by a container.
pub trait StateCodec {
    /// See [`StateKeyCodec`].
    type KeyCodec;
    /// See [`StateValueCodec`].
    type ValueCodec;

    /// The codec used for keys.
    fn key_codec(&self) -> &Self::KeyCodec;
    /// The codec used for values.
    fn value_codec(&self) -> &Self::ValueCodec;
}

/// Error raised while parsing a bech32m address.
#[derive(Debug, thiserror::Error)]
pub enum Bech32ParseError {
    /// The string is not valid bech32.
    #[error("Bech32 error: {0}")]
    Bech32(#[from] bech32::Error),
    /// The human readable part is not the expected one.
    #[error("Wrong HRP: {0}")]
    WrongHRP(String),
    /// The payload doesn't decode to a 32 bytes address.
    #[error("Invalid address length {0}, should be 32")]
    InvalidLength(usize),
}

/// General error type in the Module System.
#[derive(Debug, thiserror::Error)]
pub enum ModuleError {
    /// Custom error thrown by a module.
    #[error(transparent)]
    ModuleError(#[from] anyhow::Error),
}

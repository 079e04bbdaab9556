use std::fs::File;
use std::io::Read;
use std::path::Path;

use ballot::BallotConfig;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Contents of the CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Genesis configuration of the module, used when a new state file is created.
    pub ballot: BallotConfig,
}

/// Reads toml file as a specific type.
pub fn from_toml_path<P: AsRef<Path>, R: DeserializeOwned>(path: P) -> anyhow::Result<R> {
    let mut contents = String::new();
    {
        let mut file = File::open(path)?;
        file.read_to_string(&mut contents)?;
    }

    let result: R = toml::from_str(&contents)?;

    Ok(result)
}

//! Reading and writing JSON documents (requests, stat lines, configs and responses) on disk.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{from_reader, to_writer_pretty};

/// Reads a JSON-encoded type from a given file `path`.
pub fn read_json<D: DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<D> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    from_reader(BufReader::new(file)).with_context(|| format!("malformed JSON in {}", path.display()))
}

/// JSON-encodes the `value` in pretty-printed form and writes it to a given `path`.
pub fn write_json(path: impl AsRef<Path>, value: &impl Serialize) -> anyhow::Result<()> {
    let path = path.as_ref();
    let file = File::create(path).with_context(|| format!("cannot create {}", path.display()))?;
    to_writer_pretty(BufWriter::new(file), value)
        .with_context(|| format!("cannot write {}", path.display()))
}

pub trait ReadJsonFile<D> {
    fn read_json_file(path: impl AsRef<Path>) -> anyhow::Result<D>;
}

impl<D: DeserializeOwned> ReadJsonFile<D> for D {
    fn read_json_file(path: impl AsRef<Path>) -> anyhow::Result<D> {
        read_json(path)
    }
}

pub trait WriteJsonFile<S: Serialize> {
    fn write_json_file(&self, path: impl AsRef<Path>) -> anyhow::Result<()>;
}

impl<S: Serialize> WriteJsonFile<S> for S {
    fn write_json_file(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        write_json(path, self)
    }
}

#[cfg(test)]
mod tests {
    use std::env;
    use std::fs;

    use crate::config::SimulationConfig;
    use crate::stats::BattingLine;

    use super::*;

    #[test]
    fn config_round_trip() {
        let path = env::temp_dir().join(format!("atbat-config-{}.json", std::process::id()));
        let config = SimulationConfig {
            trials: 5_000,
            seed: Some(11),
            ..SimulationConfig::default()
        };
        config.write_json_file(&path).unwrap();
        let read = SimulationConfig::read_json_file(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(config, read);
    }

    #[test]
    fn missing_file() {
        let path = env::temp_dir().join("atbat-no-such-file.json");
        let err = BattingLine::read_json_file(&path).unwrap_err();
        assert!(err.to_string().starts_with("cannot open"), "{err}");
    }

    #[test]
    fn malformed_file() {
        let path = env::temp_dir().join(format!("atbat-malformed-{}.json", std::process::id()));
        fs::write(&path, "{ not json").unwrap();
        let err = BattingLine::read_json_file(&path).unwrap_err();
        fs::remove_file(&path).unwrap();
        assert!(err.to_string().starts_with("malformed JSON"), "{err}");
    }
}

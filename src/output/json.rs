use crate::error::GraphError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonStyle {
    /// No whitespace between tokens.
    Compact,
    /// Two-space indentation.
    Pretty,
}

/// Writes `value` to `path`, truncating any existing file. The parent
/// directory must already exist.
pub fn write_json<T: Serialize + ?Sized>(
    path: &Path,
    value: &T,
    style: JsonStyle,
) -> Result<(), GraphError> {
    let file = File::create(path).map_err(|source| GraphError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    let encoded = match style {
        JsonStyle::Compact => serde_json::to_writer(&mut writer, value),
        JsonStyle::Pretty => serde_json::to_writer_pretty(&mut writer, value),
    };
    encoded.map_err(|source| GraphError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    writer.flush().map_err(|source| GraphError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), ?style, "graph written");
    Ok(())
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, GraphError> {
    let file = File::open(path).map_err(|source| GraphError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| GraphError::Json {
        path: path.to_path_buf(),
        source,
    })
}

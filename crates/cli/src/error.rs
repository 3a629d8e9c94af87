//! CLI failures, one per thing that can go wrong in a run.
//!
//! | exit | kind             | cause                                          |
//! |------|------------------|------------------------------------------------|
//! | 2    | (clap)           | argument parse error, before `run`             |
//! | 10   | `tile`           | core rejected a value: swatch layout, hex color |
//! | 11   | `read-offsets`   | the `--input` offsets file could not be read   |
//! | 12   | `write-snapshot` | the `--output` PNG could not be written        |
//! | 13   | `input`          | malformed offset pair or color arguments       |
//!
//! Rejected color channels are not errors: they log and become 0.

use colored_tiles_core::TileError;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

pub enum CliError {
    Tile(TileError),
    ReadOffsets { path: PathBuf, source: io::Error },
    WriteSnapshot { path: PathBuf, reason: String },
    Input(String),
}

impl CliError {
    /// Maps a `write_png` failure: I/O problems name the output file,
    /// anything else is a rejected layout.
    pub fn snapshot(path: &Path, err: TileError) -> Self {
        match err {
            TileError::Io(reason) => CliError::WriteSnapshot {
                path: path.to_path_buf(),
                reason,
            },
            other => CliError::Tile(other),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Tile(_) => 10,
            CliError::ReadOffsets { .. } => 11,
            CliError::WriteSnapshot { .. } => 12,
            CliError::Input(_) => 13,
        }
    }

    /// Short machine-readable name, used in `--json` error output.
    pub fn kind(&self) -> &'static str {
        match self {
            CliError::Tile(_) => "tile",
            CliError::ReadOffsets { .. } => "read-offsets",
            CliError::WriteSnapshot { .. } => "write-snapshot",
            CliError::Input(_) => "input",
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Tile(e) => write!(f, "{e}"),
            CliError::ReadOffsets { path, source } => {
                write!(f, "cannot read offsets from {}: {source}", path.display())
            }
            CliError::WriteSnapshot { path, reason } => {
                write!(f, "cannot write swatches to {}: {reason}", path.display())
            }
            CliError::Input(msg) => f.write_str(msg),
        }
    }
}

impl fmt::Debug for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CliError::{}({self})", self.kind())
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Tile(e) => Some(e),
            CliError::ReadOffsets { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<TileError> for CliError {
    fn from(e: TileError) -> Self {
        CliError::Tile(e)
    }
}

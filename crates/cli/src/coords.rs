//! Parsing of pointer offsets given on the command line or in a file.

use crate::error::CliError;
use serde_json::Value;

/// Parses an `x,y` pair such as `"10,5"` or `"-3.5, 12"`.
pub fn parse_pair(s: &str) -> Result<(f64, f64), CliError> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| CliError::Input(format!("expected x,y offset pair, got {s:?}")))?;
    let coord = |v: &str| {
        v.trim()
            .parse::<f64>()
            .map_err(|e| CliError::Input(format!("invalid offset {v:?} in {s:?}: {e}")))
    };
    Ok((coord(x)?, coord(y)?))
}

/// Parses a JSON array of `[x, y]` pairs.
pub fn parse_json(json: &str) -> Result<Vec<(f64, f64)>, CliError> {
    let value: Value = serde_json::from_str(json)
        .map_err(|e| CliError::Input(format!("invalid offsets JSON: {e}")))?;
    let items = value
        .as_array()
        .ok_or_else(|| CliError::Input("offsets JSON must be an array of [x, y] pairs".into()))?;
    items
        .iter()
        .map(|item| match item.as_array().map(Vec::as_slice) {
            Some([x, y]) => match (x.as_f64(), y.as_f64()) {
                (Some(x), Some(y)) => Ok((x, y)),
                _ => Err(CliError::Input(format!("non-numeric offset pair {item}"))),
            },
            _ => Err(CliError::Input(format!("expected [x, y], got {item}"))),
        })
        .collect()
}

use mtp_core::Crib;
use std::fs;
use std::path::Path;

/// Parses an inline crib argument of the form `LINE:OFFSET:TEXT`.
///
/// The text part may itself contain colons; only the first two are
/// separators.
pub(crate) fn parse_spec(spec: &str) -> Result<Crib, String> {
    let mut parts = spec.splitn(3, ':');
    let (Some(line), Some(offset), Some(text)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(format!("crib '{spec}' is not of the form LINE:OFFSET:TEXT"));
    };
    let line = line
        .parse()
        .map_err(|_| format!("crib '{spec}': line index is not a number"))?;
    let offset = offset
        .parse()
        .map_err(|_| format!("crib '{spec}': column offset is not a number"))?;
    Ok(Crib::new(line, offset, text))
}

/// Loads a JSON crib list, e.g.
/// `[{"line": 0, "offset": 0, "text": "Modern"}]`.
pub(crate) fn load_file(path: &Path) -> Result<Vec<Crib>, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let cribs = serde_json::from_str(&content)?;
    Ok(cribs)
}

use log::info;
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::sync::Mutex;

use super::error::PreviewError;

/// Tag the card is registered under.
pub const TAG_NAME: &str = "podcast-preview";

// Hyphenated names already taken by SVG and MathML.
const RESERVED_NAMES: [&str; 8] = [
    "annotation-xml",
    "color-profile",
    "font-face",
    "font-face-src",
    "font-face-uri",
    "font-face-format",
    "font-face-name",
    "missing-glyph",
];

static DEFINED: Lazy<Mutex<HashSet<String>>> = Lazy::new(|| Mutex::new(HashSet::new()));

pub fn validate_tag_name(name: &str) -> Result<(), PreviewError> {
    let invalid = || PreviewError::InvalidTagName(name.to_string());

    let first = name.chars().next().ok_or_else(invalid)?;
    if !first.is_ascii_lowercase() || !name.contains('-') || RESERVED_NAMES.contains(&name) {
        return Err(invalid());
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '.' | '_'))
    {
        return Err(invalid());
    }
    Ok(())
}

/// Runs `define` the first time `name` is registered in this process and
/// skips it on every later call. Returns whether this call registered.
pub fn define_once<F>(name: &str, define: F) -> Result<bool, PreviewError>
where
    F: FnOnce() -> Result<(), PreviewError>,
{
    validate_tag_name(name)?;

    let mut defined = DEFINED
        .lock()
        .map_err(|_| PreviewError::Registration("registry lock poisoned".to_string()))?;
    if defined.contains(name) {
        return Ok(false);
    }

    define()?;
    defined.insert(name.to_string());
    info!("registered <{}>", name);
    Ok(true)
}

#[cfg(test)]
fn is_defined(name: &str) -> bool {
    DEFINED
        .lock()
        .map(|defined| defined.contains(name))
        .unwrap_or(false)
}

//! Locale file loading.

use anyhow::Context;
use datamock_generator::Locale;
use std::path::Path;
use tracing::debug;

/// Load a YAML locale file. `None` keeps the built-in English data.
///
/// Pools missing from the file fall back to English when drawn from.
pub fn load_locale(path: Option<&Path>) -> anyhow::Result<Option<Locale>> {
    let Some(path) = path else {
        return Ok(None);
    };
    let locale = Locale::from_file(path)
        .with_context(|| format!("Failed to load locale from {path:?}"))?;
    debug!(title = %locale.title, "Loaded locale from {:?}", path);
    Ok(Some(locale))
}

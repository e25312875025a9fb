//! Saving translations to disk.

use crate::i18n::Language;
use anyhow::{bail, Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use std::path::{Path, PathBuf};
use tracing::info;

/// File name for a saved translation, e.g. `translation-es-2025-01-15T10-30-00-000Z.txt`.
pub fn export_file_name(target: Language, now: DateTime<Utc>) -> String {
    let timestamp = now
        .to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace([':', '.'], "-");
    format!("translation-{}-{}.txt", target.code(), timestamp)
}

/// Write `translation` into `dir`, returning the path of the new file.
pub fn export_translation(
    dir: &Path,
    target: Language,
    translation: &str,
    now: DateTime<Utc>,
) -> Result<PathBuf> {
    if translation.trim().is_empty() {
        bail!("No translation to export");
    }

    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create export directory {}", dir.display()))?;

    let path = dir.join(export_file_name(target, now));
    std::fs::write(&path, translation)
        .with_context(|| format!("Failed to write translation to {}", path.display()))?;

    info!("Translation saved to {}", path.display());
    Ok(path)
}

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{domain::Expense, errors::Result};

const TMP_SUFFIX: &str = "tmp";

/// Reads the whole collection from disk. A missing file is an empty
/// collection; a present but malformed file is a storage error.
pub fn load_expenses_from_path(path: &Path) -> Result<Vec<Expense>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let data = fs::read_to_string(path)?;
    let expenses: Vec<Expense> = serde_json::from_str(&data)?;
    tracing::debug!(count = expenses.len(), path = %path.display(), "loaded expenses");
    Ok(expenses)
}

/// Overwrites the store file with the given collection, preserving order.
/// Writes to a tmp sibling first, then renames into place.
pub fn save_expenses_to_path(expenses: &[Expense], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let json = serde_json::to_string_pretty(expenses)?;
    let tmp = tmp_path(path);
    write_file(&tmp, &json)?;
    fs::rename(&tmp, path)?;
    tracing::debug!(count = expenses.len(), path = %path.display(), "saved expenses");
    Ok(())
}

fn ensure_dir(dir: &Path) -> Result<()> {
    if dir.as_os_str().is_empty() || dir.exists() {
        return Ok(());
    }
    fs::create_dir_all(dir)?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_file(path: &Path, data: &str) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

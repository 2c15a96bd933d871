use crate::error::DispatchError;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

#[cfg(test)]
mod tests;

/// List the entries directly inside `dir` whose name contains `filter`
///
/// Entries of any kind are returned (the directory is expected to hold
/// workspace files only), sorted by name so repeated runs bucket the
/// inputs identically. A missing or unreadable directory is an error, as
/// is a matching name that is not valid UTF-8.
pub fn list_inputs(dir: &Path, filter: &str) -> Result<Vec<String>, DispatchError> {
    let mut inputs = Vec::new();

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry.map_err(|source| DispatchError::ListInputs {
            dir: dir.to_path_buf(),
            source,
        })?;

        if !entry.file_name().to_string_lossy().contains(filter) {
            continue;
        }

        let name = entry
            .file_name()
            .to_str()
            .ok_or_else(|| DispatchError::NonUtf8Name {
                dir: dir.to_path_buf(),
                name: entry.file_name().to_os_string(),
            })?;
        inputs.push(name.to_string());
    }

    debug!(dir = %dir.display(), filter, count = inputs.len(), "listed inputs");
    Ok(inputs)
}

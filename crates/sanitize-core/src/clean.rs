use std::io;
use std::path::Path;

use log::{debug, info, warn};
use walkdir::WalkDir;

use crate::error::{Result, SanitizeError};
use crate::json::{read_json_file, take_list_field, write_json_to_file};
use crate::model::{CleanReport, GeneratorsOutcome, TrashOutcome};

pub const TRASH_DIR: &str = "Trash";
pub const TRASH_FILE: &str = "Trash.json";
pub const GENERATORS_DIR: &str = "Generators";
pub const ITEMS_KEY: &str = "Items";
pub const GENERATED_ITEMS_KEY: &str = "GeneratedItems";
pub const GENERATOR_PREFIX: &str = "Generator_";
pub const GENERATOR_SUFFIX: &str = ".json";

#[derive(Clone, Copy, Debug, Default)]
pub struct CleanOpts {
    /// Count what would be removed without rewriting any file.
    pub dry_run: bool,
}

/// Empties the trash and generator item lists of one save slot.
///
/// Never fails: each sub-step folds its errors into its outcome.
pub fn clean_save(save_path: &Path, opts: CleanOpts) -> CleanReport {
    let trash_dir = save_path.join(TRASH_DIR);
    CleanReport {
        trash: clean_trash(&trash_dir.join(TRASH_FILE), opts),
        generators: clean_generators(&trash_dir.join(GENERATORS_DIR), opts),
    }
}

pub fn clean_trash(path: &Path, opts: CleanOpts) -> TrashOutcome {
    if !path.exists() {
        return TrashOutcome::Missing;
    }
    match clear_list_in_file(path, ITEMS_KEY, opts) {
        Ok(Some(n)) => {
            info!("{}: removed {} items", path.display(), n);
            TrashOutcome::Cleaned(n)
        }
        Ok(None) => TrashOutcome::Empty,
        Err(e) => {
            warn!("{}", e);
            TrashOutcome::Failed(e)
        }
    }
}

pub fn clean_generators(dir: &Path, opts: CleanOpts) -> GeneratorsOutcome {
    if !dir.exists() {
        return GeneratorsOutcome::Missing;
    }
    if !dir.is_dir() {
        return GeneratorsOutcome::Failed(SanitizeError::io(
            dir,
            io::Error::new(io::ErrorKind::InvalidInput, "not a directory"),
        ));
    }

    let mut cleaned = 0;
    let mut skipped = 0;
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                let source = e
                    .into_io_error()
                    .unwrap_or_else(|| io::Error::other("directory walk failed"));
                return GeneratorsOutcome::Failed(SanitizeError::io(dir, source));
            }
            Err(e) => {
                debug!("skipping entry: {}", e);
                skipped += 1;
                continue;
            }
        };
        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        if !is_generator_file_name(name) {
            continue;
        }
        match clear_list_in_file(entry.path(), GENERATED_ITEMS_KEY, opts) {
            Ok(Some(n)) => {
                debug!("{}: removed {} generated items", name, n);
                cleaned += 1;
            }
            Ok(None) => {}
            Err(e) => {
                debug!("skipping {}", e);
                skipped += 1;
            }
        }
    }
    if skipped > 0 {
        info!("{} generator file(s) skipped", skipped);
    }
    GeneratorsOutcome::Processed { cleaned, skipped }
}

pub fn is_generator_file_name(name: &str) -> bool {
    name.starts_with(GENERATOR_PREFIX) && name.ends_with(GENERATOR_SUFFIX)
}

// Returns Ok(None) when the list is missing or already empty; the file is not
// written in that case.
fn clear_list_in_file(path: &Path, key: &str, opts: CleanOpts) -> Result<Option<usize>> {
    let mut doc = read_json_file(path)?;
    let Some(obj) = doc.as_object_mut() else {
        return Err(SanitizeError::NotAnObject {
            path: path.to_path_buf(),
        });
    };
    let Some(n) = take_list_field(obj, key) else {
        return Ok(None);
    };
    if !opts.dry_run {
        write_json_to_file(path, &doc)?;
    }
    Ok(Some(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generator_file_names() {
        assert!(is_generator_file_name("Generator_1.json"));
        assert!(is_generator_file_name("Generator_Dumpster_3.json"));
        assert!(!is_generator_file_name("generator_1.json"));
        assert!(!is_generator_file_name("Generator_1.json.bak"));
        assert!(!is_generator_file_name("Trash.json"));
    }
}

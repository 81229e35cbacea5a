use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{Result, SanitizeError};
use crate::json::{read_json_object, str_field};
use crate::model::SaveSlot;

/// Player directory the game creates before anyone signs in.
pub const PLACEHOLDER_PLAYER: &str = "TempPlayer";
/// Probe file the game drops next to the save slots.
pub const WRITE_TEST_FILE: &str = "WriteTest.txt";
pub const GAME_FILE: &str = "Game.json";
pub const ORGANISATION_KEY: &str = "OrganisationName";

pub fn saves_root_under(profile: &Path) -> PathBuf {
    profile
        .join("AppData")
        .join("LocalLow")
        .join("TVGS")
        .join("Schedule I")
        .join("Saves")
}

/// Save-data root under `%USERPROFILE%`.
///
/// A missing variable yields a relative path; the first listing then fails
/// with a not-found error naming it.
pub fn default_saves_root() -> PathBuf {
    let profile = env::var_os("USERPROFILE")
        .map(PathBuf::from)
        .unwrap_or_default();
    saves_root_under(&profile)
}

fn list_dir_names(dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    let rd = fs::read_dir(dir).map_err(|e| SanitizeError::io(dir, e))?;
    let mut out = Vec::new();
    for e in rd.flatten() {
        let p = e.path();
        if let Some(name) = p.file_name().and_then(|s| s.to_str()).map(str::to_string) {
            out.push((name, p));
        }
    }
    out.sort();
    Ok(out)
}

/// Player ids under `root`, excluding the placeholder player.
pub fn list_players(root: &Path) -> Result<Vec<String>> {
    Ok(list_dir_names(root)?
        .into_iter()
        .filter(|(name, p)| name != PLACEHOLDER_PLAYER && p.is_dir())
        .map(|(name, _)| name)
        .collect())
}

/// Save slots under a player directory that have a readable organisation name.
///
/// Entries without a usable `Game.json` are dropped, never reported as errors.
pub fn list_slots(player_dir: &Path) -> Result<Vec<SaveSlot>> {
    Ok(list_dir_names(player_dir)?
        .into_iter()
        .filter(|(name, _)| name != WRITE_TEST_FILE)
        .filter_map(|(name, p)| read_slot(&p, name))
        .collect())
}

pub fn read_slot(slot_dir: &Path, dir_name: String) -> Option<SaveSlot> {
    let game = slot_dir.join(GAME_FILE);
    if !game.is_file() {
        debug!("skipping {}: no {}", slot_dir.display(), GAME_FILE);
        return None;
    }
    let obj = match read_json_object(&game) {
        Ok(obj) => obj,
        Err(e) => {
            debug!("skipping {}: {}", slot_dir.display(), e);
            return None;
        }
    };
    match str_field(&obj, ORGANISATION_KEY) {
        Some(org) => Some(SaveSlot {
            dir_name,
            organisation_name: org.to_string(),
        }),
        None => {
            debug!("skipping {}: no {}", slot_dir.display(), ORGANISATION_KEY);
            None
        }
    }
}

/// Maps a prompt value back to a slot: organisation name first, then directory name.
///
/// Slots that share an organisation name always resolve to the first of them.
pub fn find_slot<'a>(slots: &'a [SaveSlot], value: &str) -> Option<&'a SaveSlot> {
    slots
        .iter()
        .find(|s| s.organisation_name == value)
        .or_else(|| slots.iter().find(|s| s.dir_name == value))
}

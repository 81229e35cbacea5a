use std::path::{Path, PathBuf};

use log::info;

use crate::error::{Result, SanitizeError};
use crate::model::ResolvedSave;
use crate::saves::{default_saves_root, find_slot, list_players, list_slots};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    Player,
    Save,
}

impl Subject {
    pub fn message(self) -> &'static str {
        match self {
            Subject::Player => "Select player (STEAM64ID):",
            Subject::Save => "Select save:",
        }
    }
}

/// One selectable entry: what the user sees and what the prompt hands back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub label: String,
    pub value: String,
}

impl Choice {
    pub fn same(s: impl Into<String>) -> Self {
        let s = s.into();
        Self {
            label: s.clone(),
            value: s,
        }
    }
}

/// Single-choice user interaction.
pub trait Prompt {
    /// Blocks until the user picks one of `choices` (always at least two) and
    /// returns its `value`.
    fn select(&mut self, subject: Subject, choices: &[Choice]) -> Result<String>;

    /// Called instead of `select` when there is exactly one candidate.
    fn auto_selected(&mut self, _subject: Subject, _label: &str) {}
}

fn select_one<P: Prompt + ?Sized>(
    prompt: &mut P,
    subject: Subject,
    choices: &[Choice],
) -> Result<String> {
    if let [only] = choices {
        prompt.auto_selected(subject, &only.label);
        return Ok(only.value.clone());
    }
    prompt.select(subject, choices)
}

/// Walks the save-data root down to one player and one save slot.
#[derive(Debug, Clone)]
pub struct Locator {
    root: PathBuf,
}

impl Locator {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Locator rooted at the game's save directory under `%USERPROFILE%`.
    pub fn from_env() -> Self {
        Self::new(default_saves_root())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn resolve<P: Prompt + ?Sized>(&self, prompt: &mut P) -> Result<ResolvedSave> {
        let players = list_players(&self.root)?;
        if players.is_empty() {
            return Err(SanitizeError::NoPlayers);
        }
        let choices: Vec<Choice> = players.into_iter().map(Choice::same).collect();
        let player_id = select_one(prompt, Subject::Player, &choices)?;
        info!("player {}", player_id);

        let player_dir = self.root.join(&player_id);
        let slots = list_slots(&player_dir)?;
        if slots.is_empty() {
            return Err(SanitizeError::NoSaves);
        }
        let choices: Vec<Choice> = slots
            .iter()
            .map(|s| Choice::same(s.organisation_name.clone()))
            .collect();
        let picked = select_one(prompt, Subject::Save, &choices)?;
        let slot = find_slot(&slots, &picked)
            .ok_or_else(|| SanitizeError::Prompt(format!("unknown save: {}", picked)))?;
        info!("save {} ({})", slot.organisation_name, slot.dir_name);

        Ok(ResolvedSave {
            save_path: player_dir.join(&slot.dir_name),
            player_id,
            dir_name: slot.dir_name.clone(),
            organisation_name: slot.organisation_name.clone(),
        })
    }
}

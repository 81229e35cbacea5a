use std::path::PathBuf;

use crate::error::SanitizeError;

/// A save slot directory that carries a usable `Game.json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveSlot {
    pub dir_name: String,
    pub organisation_name: String,
}

/// Outcome of the locator: which player and slot to clean, and where it lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSave {
    pub player_id: String,
    pub dir_name: String,
    pub organisation_name: String,
    pub save_path: PathBuf,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanStats {
    pub trash_items_count: usize,
    pub generators_count: usize,
}

#[derive(Debug)]
pub enum TrashOutcome {
    /// `Trash/Trash.json` does not exist.
    Missing,
    /// `Items` is absent, not a list, or already empty. Nothing was written.
    Empty,
    /// Number of entries removed from `Items`.
    Cleaned(usize),
    Failed(SanitizeError),
}

impl TrashOutcome {
    pub fn items_count(&self) -> usize {
        match self {
            Self::Cleaned(n) => *n,
            _ => 0,
        }
    }
}

#[derive(Debug)]
pub enum GeneratorsOutcome {
    /// `Trash/Generators/` does not exist.
    Missing,
    /// `cleaned` files had their `GeneratedItems` emptied; `skipped` matching
    /// files could not be read, parsed or written.
    Processed { cleaned: usize, skipped: usize },
    /// The directory itself could not be listed.
    Failed(SanitizeError),
}

impl GeneratorsOutcome {
    pub fn cleaned_count(&self) -> usize {
        match self {
            Self::Processed { cleaned, .. } => *cleaned,
            _ => 0,
        }
    }
}

#[derive(Debug)]
pub struct CleanReport {
    pub trash: TrashOutcome,
    pub generators: GeneratorsOutcome,
}

impl CleanReport {
    pub fn stats(&self) -> CleanStats {
        CleanStats {
            trash_items_count: self.trash.items_count(),
            generators_count: self.generators.cleaned_count(),
        }
    }
}

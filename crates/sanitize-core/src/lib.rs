//! sanitize-core: save discovery and trash cleaning for Schedule I saves
//!
//! The crate keeps a small surface:
//! - Save-root resolution and player/slot enumeration (`saves`)
//! - A `Prompt` seam and the two-stage `Locator` (`select`)
//! - Emptying the trash and generator item lists (`clean`)
//! - JSON load/store helpers shared by both stages (`json`)
//!
pub mod clean;
pub mod error;
pub mod json;
pub mod model;
pub mod saves;
pub mod select;

pub use clean::{CleanOpts, clean_generators, clean_save, clean_trash};
pub use error::{Result, SanitizeError};
pub use model::{
    CleanReport, CleanStats, GeneratorsOutcome, ResolvedSave, SaveSlot, TrashOutcome,
};
pub use saves::{default_saves_root, find_slot, list_players, list_slots};
pub use select::{Choice, Locator, Prompt, Subject};

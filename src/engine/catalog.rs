//! Ordered puzzle catalog and the unlock cascade.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PuzzleType {
    Memory,
    Logic,
    Reflex,
    Pattern,
}

impl PuzzleType {
    pub fn as_str(self) -> &'static str {
        match self {
            PuzzleType::Memory => "memory",
            PuzzleType::Logic => "logic",
            PuzzleType::Reflex => "reflex",
            PuzzleType::Pattern => "pattern",
        }
    }
}

impl fmt::Display for PuzzleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PuzzleDifficulty {
    Easy,
    Medium,
    Hard,
}

impl PuzzleDifficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            PuzzleDifficulty::Easy => "easy",
            PuzzleDifficulty::Medium => "medium",
            PuzzleDifficulty::Hard => "hard",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleDefinition {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: PuzzleType,
    pub title: String,
    pub difficulty: PuzzleDifficulty,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub unlocked: bool,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog fetch failed: {0}")]
    Fetch(String),
    #[error("catalog request returned HTTP {0}")]
    Status(u16),
    #[error("catalog payload malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("catalog payload has no puzzles")]
    Empty,
}

#[derive(Debug, Default, Deserialize)]
struct CatalogPayload {
    #[serde(default)]
    puzzles: Vec<PuzzleDefinition>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    puzzles: Vec<PuzzleDefinition>,
}

impl Catalog {
    /// Duplicate ids after the first occurrence are dropped.
    pub fn new(puzzles: Vec<PuzzleDefinition>) -> Self {
        let mut seen = HashSet::new();
        let puzzles = puzzles
            .into_iter()
            .filter(|p| {
                let fresh = seen.insert(p.id.clone());
                if !fresh {
                    log::warn!("dropping duplicate catalog entry {}", p.id);
                }
                fresh
            })
            .collect();
        Self { puzzles }
    }

    pub fn parse(raw: &str) -> Result<Self, CatalogError> {
        let payload: CatalogPayload = serde_json::from_str(raw)?;
        if payload.puzzles.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self::new(payload.puzzles))
    }

    /// Resolves a fetch attempt, substituting the built-in catalog on any failure.
    pub fn from_fetch(fetched: Result<String, CatalogError>) -> Self {
        match fetched.and_then(|raw| Self::parse(&raw)) {
            Ok(catalog) => {
                log::info!("loaded {} puzzles", catalog.len());
                catalog
            }
            Err(err) => {
                log::warn!("using built-in puzzles: {err}");
                Self::fallback()
            }
        }
    }

    pub fn fallback() -> Self {
        let entry = |id: &str, kind, title: &str, difficulty, description: &str, unlocked| {
            PuzzleDefinition {
                id: id.to_string(),
                kind,
                title: title.to_string(),
                difficulty,
                description: description.to_string(),
                unlocked,
            }
        };
        Self::new(vec![
            entry(
                "memory-1",
                PuzzleType::Memory,
                "Sequence Recall",
                PuzzleDifficulty::Easy,
                "Memorize and repeat the sequence of neural pulses.",
                true,
            ),
            entry(
                "logic-1",
                PuzzleType::Logic,
                "Neural Pathways",
                PuzzleDifficulty::Easy,
                "Connect the correct neural pathways to complete the circuit.",
                true,
            ),
            entry(
                "reflex-1",
                PuzzleType::Reflex,
                "Synapse Response",
                PuzzleDifficulty::Easy,
                "Click the neural nodes as they appear within the time limit.",
                true,
            ),
            entry(
                "pattern-1",
                PuzzleType::Pattern,
                "Pattern Recognition",
                PuzzleDifficulty::Medium,
                "Identify and continue the neural pattern sequence.",
                false,
            ),
        ])
    }

    pub fn puzzles(&self) -> &[PuzzleDefinition] {
        &self.puzzles
    }

    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    pub fn get(&self, id: &str) -> Option<&PuzzleDefinition> {
        self.puzzles.iter().find(|p| p.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.puzzles.iter().position(|p| p.id == id)
    }

    /// Unlocks the entry right after `id` in catalog order, if it is locked.
    /// Returns the id of the newly unlocked puzzle.
    pub fn unlock_after(&mut self, id: &str) -> Option<String> {
        let index = self.position(id)? + 1;
        let next = self.puzzles.get_mut(index)?;
        if next.unlocked {
            return None;
        }
        next.unlocked = true;
        Some(next.id.clone())
    }

    /// Re-applies unlocks recorded in a saved profile. Unknown ids are ignored.
    pub fn restore_unlocks(&mut self, ids: &[String]) {
        for puzzle in &mut self.puzzles {
            if ids.iter().any(|id| *id == puzzle.id) {
                puzzle.unlocked = true;
            }
        }
    }

    pub fn unlocked_ids(&self) -> Vec<String> {
        self.puzzles
            .iter()
            .filter(|p| p.unlocked)
            .map(|p| p.id.clone())
            .collect()
    }
}

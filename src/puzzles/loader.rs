//! Simulated loading transition before a puzzle appears. Only one load can
//! be pending; starting another cancels the first.

use crate::engine::{Catalog, PuzzleDefinition};

/// Handle for one `begin` call. Stale tickets resolve to nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    puzzle_id: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    Ready(PuzzleDefinition),
    NotFound,
}

#[derive(Clone, Debug, Default)]
pub struct PuzzleLoader {
    generation: u64,
    pending: Option<LoadTicket>,
}

impl PuzzleLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts loading `puzzle_id`, replacing any pending load.
    pub fn begin(&mut self, puzzle_id: &str) -> LoadTicket {
        if let Some(old) = self.pending.take() {
            log::debug!("cancelled pending load of {}", old.puzzle_id);
        }
        self.generation += 1;
        let ticket = LoadTicket {
            generation: self.generation,
            puzzle_id: puzzle_id.to_string(),
        };
        self.pending = Some(ticket.clone());
        ticket
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Completes the load for `ticket`. `None` if it was cancelled or replaced.
    pub fn resolve(&mut self, ticket: &LoadTicket, catalog: &Catalog) -> Option<LoadOutcome> {
        if self.pending.as_ref() != Some(ticket) {
            return None;
        }
        self.pending = None;
        Some(match catalog.get(&ticket.puzzle_id) {
            Some(def) => LoadOutcome::Ready(def.clone()),
            None => {
                log::error!("puzzle not found: {}", ticket.puzzle_id);
                LoadOutcome::NotFound
            }
        })
    }
}

//! In-memory clue database for one game

use super::entities::{Category, CategoryHandle, Clue, ClueId};
use super::payload::CluePayload;
use crate::core::error::GameError;
use std::collections::HashMap;

/// Value of the lowest clue in a column; higher rows are multiples of it
pub const DEFAULT_VALUE_STEP: u32 = 100;

/// Authoritative mapping from [`ClueId`] to [`Clue`] plus the ordered
/// list of categories.
///
/// Categories are only ever appended, so a category's column index is fixed
/// the moment it is added. Values and clue counts never change afterwards;
/// the only mutation is flipping a clue's `used` flag.
#[derive(Debug, Clone)]
pub struct ClueStore {
    categories: Vec<Category>,
    clues: HashMap<ClueId, Clue>,
    value_step: u32,
}

impl Default for ClueStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ClueStore {
    pub fn new() -> Self {
        Self::with_value_step(DEFAULT_VALUE_STEP)
    }

    /// Create a store whose clue at position `p` is worth `(p + 1) * value_step`
    pub fn with_value_step(value_step: u32) -> Self {
        Self {
            categories: Vec::new(),
            clues: HashMap::new(),
            value_step,
        }
    }

    pub fn value_step(&self) -> u32 {
        self.value_step
    }

    /// Append a category column built from `clues` in the given order.
    pub fn add_category(
        &mut self,
        title: impl Into<String>,
        clues: impl IntoIterator<Item = CluePayload>,
    ) -> CategoryHandle {
        let handle = CategoryHandle::new(self.categories.len());
        let value_step = self.value_step;

        let clue_ids = clues
            .into_iter()
            .enumerate()
            .map(|(position, payload)| {
                let id = ClueId::new(handle.index(), position);
                let clue = Clue::new(
                    id,
                    payload.question,
                    payload.answer,
                    value_for(position, value_step),
                );
                self.clues.insert(id, clue);
                id
            })
            .collect();

        self.categories
            .push(Category::new(handle, title.into(), clue_ids));
        handle
    }

    pub fn get_clue(&self, id: ClueId) -> Result<&Clue, GameError> {
        self.clues.get(&id).ok_or(GameError::ClueNotFound(id))
    }

    /// Flag a clue as used. Marking an already used clue again is a no-op;
    /// re-entry is prevented by the game session.
    pub fn mark_used(&mut self, id: ClueId) -> Result<(), GameError> {
        let clue = self
            .clues
            .get_mut(&id)
            .ok_or(GameError::ClueNotFound(id))?;
        clue.mark_used();
        Ok(())
    }

    /// Categories in board column order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, handle: CategoryHandle) -> Option<&Category> {
        self.categories.get(handle.index())
    }

    /// Clues of a category in column order
    pub fn clues_in<'a>(&'a self, category: &'a Category) -> impl Iterator<Item = &'a Clue> + 'a {
        category
            .clue_ids()
            .iter()
            .filter_map(move |id| self.clues.get(id))
    }

    /// Total number of clues on the board
    pub fn len(&self) -> usize {
        self.clues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clues.is_empty()
    }

    /// Number of clues not yet used
    pub fn remaining(&self) -> usize {
        self.clues.values().filter(|c| !c.is_used()).count()
    }
}

fn value_for(position: usize, value_step: u32) -> u32 {
    u32::try_from(position + 1)
        .unwrap_or(u32::MAX)
        .saturating_mul(value_step)
}

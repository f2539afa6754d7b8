//! Board entities

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Identifier of a clue on the board (Value Object)
///
/// Made of the category's column index and the clue's position within that
/// column, rendered as `"<category>-<clue>"` (e.g. `"2-4"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClueId {
    category: usize,
    position: usize,
}

impl ClueId {
    pub fn new(category: usize, position: usize) -> Self {
        Self { category, position }
    }

    /// Column index of the owning category
    pub fn category(&self) -> usize {
        self.category
    }

    /// Position within the category column (0 = lowest value)
    pub fn position(&self) -> usize {
        self.position
    }
}

impl fmt::Display for ClueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.category, self.position)
    }
}

/// Error returned when a string is not a `"<category>-<clue>"` id
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid clue id '{0}': expected <category>-<clue>, e.g. 0-3")]
pub struct ParseClueIdError(String);

impl FromStr for ClueId {
    type Err = ParseClueIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseClueIdError(s.to_string());
        // Digits only: `usize` parsing alone would also accept "+1"
        let index = |part: &str| {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            part.parse::<usize>().map_err(|_| invalid())
        };

        let (category, position) = s.trim().split_once('-').ok_or_else(invalid)?;
        Ok(Self::new(index(category)?, index(position)?))
    }
}

/// A clue placed on the board (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    id: ClueId,
    question: String,
    answer: String,
    value: u32,
    used: bool,
}

impl Clue {
    pub(crate) fn new(id: ClueId, question: String, answer: String, value: u32) -> Self {
        Self {
            id,
            question,
            answer,
            value,
            used: false,
        }
    }

    pub fn id(&self) -> ClueId {
        self.id
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    /// Canonical answer, possibly with markup noise
    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn is_used(&self) -> bool {
        self.used
    }

    pub(crate) fn mark_used(&mut self) {
        self.used = true;
    }
}

/// Index of a category column on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CategoryHandle(usize);

impl CategoryHandle {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

/// A board column (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    handle: CategoryHandle,
    title: String,
    clue_ids: Vec<ClueId>,
}

impl Category {
    pub(crate) fn new(handle: CategoryHandle, title: String, clue_ids: Vec<ClueId>) -> Self {
        Self {
            handle,
            title,
            clue_ids,
        }
    }

    pub fn handle(&self) -> CategoryHandle {
        self.handle
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Clue ids in column order
    pub fn clue_ids(&self) -> &[ClueId] {
        &self.clue_ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clue_id_display_and_parse() {
        let id = ClueId::new(2, 4);
        assert_eq!(id.to_string(), "2-4");
        assert_eq!("2-4".parse::<ClueId>().unwrap(), id);
        assert_eq!(" 0-0 ".parse::<ClueId>().unwrap(), ClueId::new(0, 0));
    }

    #[test]
    fn test_clue_id_parse_rejects_garbage() {
        for input in [
            "", "2", "2-", "-4", "a-b", "2-4-1", "-1-2", "+0-+1", "0-+1", "+2-4", "2 -4",
        ] {
            assert!(input.parse::<ClueId>().is_err(), "accepted {:?}", input);
        }
    }

    #[test]
    fn test_new_clue_is_unused() {
        let mut clue = Clue::new(ClueId::new(0, 1), "Q".into(), "A".into(), 200);
        assert!(!clue.is_used());
        clue.mark_used();
        assert!(clue.is_used());
        assert_eq!(clue.value(), 200);
    }
}

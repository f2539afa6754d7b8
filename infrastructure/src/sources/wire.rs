//! jService wire format
//!
//! Only the fields the board needs are decoded; everything else in the
//! response (air dates, game ids, invalid counts) is ignored.

use serde::Deserialize;
use trivia_domain::{CategoryId, CategoryPayload, CluePayload};

#[derive(Debug, Deserialize)]
pub(crate) struct ApiCategory {
    #[serde(default)]
    pub id: Option<CategoryId>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub clues: Vec<ApiClue>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiClue {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
}

impl From<ApiCategory> for CategoryPayload {
    fn from(api: ApiCategory) -> Self {
        CategoryPayload::new(
            api.title.unwrap_or_default(),
            api.clues
                .into_iter()
                .map(|clue| {
                    CluePayload::new(
                        clue.question.unwrap_or_default(),
                        clue.answer.unwrap_or_default(),
                    )
                })
                .collect(),
        )
    }
}

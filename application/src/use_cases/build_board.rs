//! Build Board use case
//!
//! Fetches every requested category concurrently and assembles the board in
//! request order. Either every category makes it onto the board or the build
//! fails as a whole, as soon as the first fetch fails.

use crate::config::BoardParams;
use crate::ports::category_fetcher::{CategoryFetcher, FetchError};
use crate::ports::progress::{BuildProgressNotifier, NoProgress};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};
use trivia_domain::{CategoryId, CategoryPayload, ClueStore, GameSession};

/// A single category that could not be fetched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFetchFailure {
    pub category: CategoryId,
    pub error: FetchError,
}

/// Errors that can occur while building a board
#[derive(Error, Debug)]
pub enum BuildBoardError {
    #[error("No categories requested")]
    NoCategories,

    #[error("Invalid board parameters: {0}")]
    InvalidParams(String),

    #[error("Failed to fetch categories: {}", describe_failures(.0))]
    FetchFailed(Vec<CategoryFetchFailure>),

    #[error("Category {category} has {available} clues, {required} required")]
    InsufficientClues {
        category: CategoryId,
        available: usize,
        required: usize,
    },

    #[error("Fetch task failed: {0}")]
    TaskFailed(String),
}

impl BuildBoardError {
    /// Ids of the categories whose fetch failed, in request order
    pub fn failed_categories(&self) -> Vec<CategoryId> {
        match self {
            BuildBoardError::FetchFailed(failures) => {
                failures.iter().map(|f| f.category).collect()
            }
            BuildBoardError::InsufficientClues { category, .. } => vec![*category],
            _ => vec![],
        }
    }
}

fn describe_failures(failures: &[CategoryFetchFailure]) -> String {
    failures
        .iter()
        .map(|f| format!("{} ({})", f.category, f.error))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Input for the BuildBoard use case
#[derive(Debug, Clone)]
pub struct BuildBoardInput {
    /// Categories to fetch, in board column order
    pub category_ids: Vec<CategoryId>,
    pub params: BoardParams,
}

impl BuildBoardInput {
    pub fn new(category_ids: impl IntoIterator<Item = CategoryId>) -> Self {
        Self {
            category_ids: category_ids.into_iter().collect(),
            params: BoardParams::default(),
        }
    }

    pub fn with_params(mut self, params: BoardParams) -> Self {
        self.params = params;
        self
    }

    fn validate(&self) -> Result<(), BuildBoardError> {
        if self.category_ids.is_empty() {
            return Err(BuildBoardError::NoCategories);
        }
        if self.params.clues_per_category == 0 {
            return Err(BuildBoardError::InvalidParams(
                "clues per category must be at least 1".to_string(),
            ));
        }
        if self.params.value_step == 0 {
            return Err(BuildBoardError::InvalidParams(
                "value step must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Use case for building a board from a category fetcher
pub struct BuildBoardUseCase<F: CategoryFetcher + 'static> {
    fetcher: Arc<F>,
}

impl<F: CategoryFetcher + 'static> BuildBoardUseCase<F> {
    pub fn new(fetcher: Arc<F>) -> Self {
        Self { fetcher }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: BuildBoardInput) -> Result<ClueStore, BuildBoardError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Build a board and open a fresh game session on it
    pub async fn start_game(
        &self,
        input: BuildBoardInput,
        progress: &dyn BuildProgressNotifier,
    ) -> Result<GameSession, BuildBoardError> {
        let store = self.execute_with_progress(input, progress).await?;
        Ok(GameSession::new(store))
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: BuildBoardInput,
        progress: &dyn BuildProgressNotifier,
    ) -> Result<ClueStore, BuildBoardError> {
        input.validate()?;

        info!(
            "Building board from {} categories",
            input.category_ids.len()
        );

        let result = match self.fetch_all(&input, progress).await {
            Ok(payloads) => Self::assemble(&input, payloads),
            Err(e) => Err(e),
        };

        progress.on_build_complete(result.is_ok());
        result
    }

    /// Fan out one fetch per category and join them.
    ///
    /// Results are slotted by request index, so completion order never
    /// reaches the board. The first failure ends the join: fetches that
    /// already finished are still reported, the rest are aborted.
    async fn fetch_all(
        &self,
        input: &BuildBoardInput,
        progress: &dyn BuildProgressNotifier,
    ) -> Result<Vec<CategoryPayload>, BuildBoardError> {
        let total = input.category_ids.len();
        let mut join_set = JoinSet::new();

        for (index, id) in input.category_ids.iter().copied().enumerate() {
            let fetcher = Arc::clone(&self.fetcher);
            let timeout = input.params.fetch_timeout;

            join_set.spawn(async move {
                let result = Self::fetch_one(fetcher.as_ref(), id, timeout).await;
                (index, id, result)
            });
        }
        progress.on_build_start(total);

        let mut slots: Vec<Option<CategoryPayload>> = vec![None; total];
        let mut failures = Vec::new();

        while let Some(joined) = join_set.join_next().await {
            let (index, id, result) = match joined {
                Ok(outcome) => outcome,
                Err(e) => {
                    // Dropping the join set aborts the fetches still in flight.
                    warn!("Task join error: {}", e);
                    return Err(BuildBoardError::TaskFailed(e.to_string()));
                }
            };

            match result {
                Ok(payload) => {
                    debug!(
                        "Category {} fetched: '{}' with {} clues",
                        id,
                        payload.title,
                        payload.clues.len()
                    );
                    progress.on_category_fetched(id, true);
                    slots[index] = Some(payload);
                }
                Err(error) => {
                    Self::record_failure(&mut failures, progress, index, id, error);

                    // Fail fast: keep whatever already finished, abort the rest.
                    while let Some(Ok((index, id, result))) = join_set.try_join_next() {
                        match result {
                            Ok(_) => progress.on_category_fetched(id, true),
                            Err(error) => {
                                Self::record_failure(&mut failures, progress, index, id, error)
                            }
                        }
                    }
                    join_set.abort_all();
                    break;
                }
            }
        }

        if !failures.is_empty() {
            failures.sort_by_key(|(index, _)| *index);
            return Err(BuildBoardError::FetchFailed(
                failures.into_iter().map(|(_, failure)| failure).collect(),
            ));
        }

        slots
            .into_iter()
            .zip(&input.category_ids)
            .map(|(slot, id)| {
                slot.ok_or_else(|| {
                    BuildBoardError::TaskFailed(format!("no result for category {}", id))
                })
            })
            .collect()
    }

    fn record_failure(
        failures: &mut Vec<(usize, CategoryFetchFailure)>,
        progress: &dyn BuildProgressNotifier,
        index: usize,
        id: CategoryId,
        error: FetchError,
    ) {
        warn!("Category {} failed: {}", id, error);
        progress.on_category_fetched(id, false);
        failures.push((
            index,
            CategoryFetchFailure {
                category: id,
                error,
            },
        ));
    }

    async fn fetch_one(
        fetcher: &F,
        id: CategoryId,
        timeout: Option<Duration>,
    ) -> Result<CategoryPayload, FetchError> {
        match timeout {
            Some(limit) => tokio::time::timeout(limit, fetcher.fetch_category(id))
                .await
                .map_err(|_| FetchError::Timeout)?,
            None => fetcher.fetch_category(id).await,
        }
    }

    /// Shuffle, trim and place every category in request order.
    fn assemble(
        input: &BuildBoardInput,
        payloads: Vec<CategoryPayload>,
    ) -> Result<ClueStore, BuildBoardError> {
        let required = input.params.clues_per_category;

        // Check every column first so a short category never leaves a
        // half-filled store behind.
        for (id, payload) in input.category_ids.iter().zip(&payloads) {
            if payload.clues.len() < required {
                warn!(
                    "Category {} has only {} clues ({} required)",
                    id,
                    payload.clues.len(),
                    required
                );
                return Err(BuildBoardError::InsufficientClues {
                    category: *id,
                    available: payload.clues.len(),
                    required,
                });
            }
        }

        let mut rng = match input.params.shuffle_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut store = ClueStore::with_value_step(input.params.value_step);
        for payload in payloads {
            let CategoryPayload { title, mut clues } = payload;
            clues.shuffle(&mut rng);
            clues.truncate(required);
            store.add_category(title, clues);
        }

        info!(
            "Board ready: {} categories, {} clues",
            store.categories().len(),
            store.len()
        );
        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::{HashMap, HashSet};
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Barrier;
    use trivia_domain::{CluePayload, GamePhase};

    // ==================== Test Mocks ====================

    struct MockFetcher {
        responses: HashMap<CategoryId, (Duration, Result<CategoryPayload, FetchError>)>,
        hanging: HashSet<CategoryId>,
        calls: AtomicUsize,
    }

    impl MockFetcher {
        fn new() -> Self {
            Self {
                responses: HashMap::new(),
                hanging: HashSet::new(),
                calls: AtomicUsize::new(0),
            }
        }

        /// The fetch for `id` never completes
        fn with_hang(mut self, id: u64) -> Self {
            self.hanging.insert(CategoryId::new(id));
            self
        }

        fn with_category(mut self, id: u64, delay_ms: u64, clue_count: usize) -> Self {
            self.responses.insert(
                CategoryId::new(id),
                (Duration::from_millis(delay_ms), Ok(payload(id, clue_count))),
            );
            self
        }

        fn with_failure(mut self, id: u64, delay_ms: u64, error: FetchError) -> Self {
            self.responses.insert(
                CategoryId::new(id),
                (Duration::from_millis(delay_ms), Err(error)),
            );
            self
        }
    }

    #[async_trait]
    impl CategoryFetcher for MockFetcher {
        async fn fetch_category(&self, id: CategoryId) -> Result<CategoryPayload, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.hanging.contains(&id) {
                return std::future::pending().await;
            }
            let (delay, result) = self
                .responses
                .get(&id)
                .cloned()
                .unwrap_or((Duration::ZERO, Err(FetchError::NotFound(id))));
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            result
        }
    }

    /// Every fetch waits until all fetches have started
    struct BarrierFetcher {
        barrier: Barrier,
    }

    #[async_trait]
    impl CategoryFetcher for BarrierFetcher {
        async fn fetch_category(&self, id: CategoryId) -> Result<CategoryPayload, FetchError> {
            self.barrier.wait().await;
            Ok(payload(id.value(), 5))
        }
    }

    #[derive(Default)]
    struct RecordingProgress {
        events: Mutex<Vec<String>>,
    }

    impl BuildProgressNotifier for RecordingProgress {
        fn on_build_start(&self, total_categories: usize) {
            self.events
                .lock()
                .unwrap()
                .push(format!("start:{}", total_categories));
        }

        fn on_category_fetched(&self, id: CategoryId, success: bool) {
            self.events
                .lock()
                .unwrap()
                .push(format!("fetched:{}:{}", id, success));
        }

        fn on_build_complete(&self, success: bool) {
            self.events
                .lock()
                .unwrap()
                .push(format!("complete:{}", success));
        }
    }

    fn payload(id: u64, clue_count: usize) -> CategoryPayload {
        CategoryPayload::new(
            format!("Category {}", id),
            (0..clue_count)
                .map(|i| CluePayload::new(format!("Q{}-{}", id, i), format!("A{}-{}", id, i)))
                .collect(),
        )
    }

    fn ids(raw: &[u64]) -> Vec<CategoryId> {
        raw.iter().copied().map(CategoryId::new).collect()
    }

    fn titles(store: &ClueStore) -> Vec<String> {
        store
            .categories()
            .iter()
            .map(|c| c.title().to_string())
            .collect()
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_column_order_follows_request_order() {
        // Later categories resolve first
        let fetcher = MockFetcher::new()
            .with_category(302, 40, 5)
            .with_category(486, 30, 5)
            .with_category(1838, 20, 5)
            .with_category(518, 0, 5);
        let use_case = BuildBoardUseCase::new(Arc::new(fetcher));

        let store = use_case
            .execute(BuildBoardInput::new(ids(&[302, 486, 1838, 518])))
            .await
            .unwrap();

        assert_eq!(
            titles(&store),
            ["Category 302", "Category 486", "Category 1838", "Category 518"]
        );
        for (index, category) in store.categories().iter().enumerate() {
            assert!(category.clue_ids().iter().all(|id| id.category() == index));
        }
    }

    #[tokio::test]
    async fn test_column_order_independent_of_completion_timing() {
        let delay_sets: [[u64; 3]; 4] = [[0, 10, 20], [20, 10, 0], [10, 0, 20], [0, 20, 10]];

        for delays in delay_sets {
            let fetcher = MockFetcher::new()
                .with_category(1, delays[0], 5)
                .with_category(2, delays[1], 5)
                .with_category(3, delays[2], 5);
            let use_case = BuildBoardUseCase::new(Arc::new(fetcher));
            let params = BoardParams::default().with_shuffle_seed(Some(11));

            let store = use_case
                .execute(BuildBoardInput::new(ids(&[3, 1, 2])).with_params(params))
                .await
                .unwrap();
            assert_eq!(
                titles(&store),
                ["Category 3", "Category 1", "Category 2"],
                "delays {:?}",
                delays
            );
        }
    }

    #[tokio::test]
    async fn test_fetches_run_concurrently() {
        let fetcher = BarrierFetcher {
            barrier: Barrier::new(4),
        };
        let use_case = BuildBoardUseCase::new(Arc::new(fetcher));

        let result = tokio::time::timeout(
            Duration::from_secs(5),
            use_case.execute(BuildBoardInput::new(ids(&[1, 2, 3, 4]))),
        )
        .await
        .expect("fetches were not issued concurrently");

        assert_eq!(result.unwrap().categories().len(), 4);
    }

    #[tokio::test]
    async fn test_single_failure_fails_whole_build() {
        let fetcher = MockFetcher::new()
            .with_category(1, 0, 5)
            .with_failure(2, 10, FetchError::Connection("reset".to_string()))
            .with_category(3, 20, 5);
        let fetcher = Arc::new(fetcher);
        let use_case = BuildBoardUseCase::new(Arc::clone(&fetcher));

        let err = use_case
            .execute(BuildBoardInput::new(ids(&[1, 2, 3])))
            .await
            .unwrap_err();

        assert!(matches!(err, BuildBoardError::FetchFailed(_)));
        assert_eq!(err.failed_categories(), ids(&[2]));
        // Every category was still requested exactly once
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_first_failure_aborts_pending_fetches() {
        let fetcher = MockFetcher::new()
            .with_failure(1, 0, FetchError::Connection("refused".to_string()))
            .with_hang(2);
        let use_case = BuildBoardUseCase::new(Arc::new(fetcher));

        let result = tokio::time::timeout(
            Duration::from_secs(2),
            use_case.execute(BuildBoardInput::new(ids(&[1, 2]))),
        )
        .await
        .expect("build kept waiting after a fetch failed");

        let err = result.unwrap_err();
        assert_eq!(err.failed_categories(), ids(&[1]));
        assert_eq!(
            err.to_string(),
            "Failed to fetch categories: 1 (Connection error: refused)"
        );
    }

    #[tokio::test]
    async fn test_failures_reported_in_request_order() {
        // 9 and 7 both fail before the build observes either of them
        let fetcher = MockFetcher::new()
            .with_failure(7, 0, FetchError::Timeout)
            .with_hang(8)
            .with_failure(9, 0, FetchError::Status {
                status: 500,
                reason: "Internal Server Error".to_string(),
            });
        let use_case = BuildBoardUseCase::new(Arc::new(fetcher));

        let err = use_case
            .execute(BuildBoardInput::new(ids(&[9, 8, 7])))
            .await
            .unwrap_err();

        assert_eq!(err.failed_categories(), ids(&[9, 7]));
        assert_eq!(
            err.to_string(),
            "Failed to fetch categories: 9 (HTTP error: 500 Internal Server Error), 7 (Timeout)"
        );
    }

    #[tokio::test]
    async fn test_insufficient_clues() {
        let fetcher = MockFetcher::new()
            .with_category(1, 0, 5)
            .with_category(2, 0, 3);
        let use_case = BuildBoardUseCase::new(Arc::new(fetcher));

        let err = use_case
            .execute(BuildBoardInput::new(ids(&[1, 2])))
            .await
            .unwrap_err();

        match err {
            BuildBoardError::InsufficientClues {
                category,
                available,
                required,
            } => {
                assert_eq!(category, CategoryId::new(2));
                assert_eq!(available, 3);
                assert_eq!(required, 5);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_trims_to_clue_count_and_assigns_values_by_position() {
        let fetcher = MockFetcher::new().with_category(1, 0, 12);
        let use_case = BuildBoardUseCase::new(Arc::new(fetcher));
        let params = BoardParams::default().with_shuffle_seed(Some(42));

        let store = use_case
            .execute(BuildBoardInput::new(ids(&[1])).with_params(params))
            .await
            .unwrap();

        let category = &store.categories()[0];
        let clues: Vec<_> = store.clues_in(category).collect();
        assert_eq!(clues.len(), 5);

        let values: Vec<u32> = clues.iter().map(|c| c.value()).collect();
        assert_eq!(values, [100, 200, 300, 400, 500]);

        let all_questions: HashSet<String> = (0..12).map(|i| format!("Q1-{}", i)).collect();
        let picked: HashSet<String> = clues.iter().map(|c| c.question().to_string()).collect();
        assert_eq!(picked.len(), 5);
        assert!(picked.is_subset(&all_questions));
    }

    #[tokio::test]
    async fn test_clues_are_shuffled_and_valued_by_board_position() {
        let fetcher = MockFetcher::new().with_category(1, 0, 10);
        let use_case = BuildBoardUseCase::new(Arc::new(fetcher));
        let params = BoardParams::default()
            .with_clues_per_category(10)
            .with_shuffle_seed(Some(7));

        let store = use_case
            .execute(BuildBoardInput::new(ids(&[1])).with_params(params))
            .await
            .unwrap();

        let clues: Vec<_> = store.clues_in(&store.categories()[0]).collect();
        let source_order: Vec<String> = (0..10).map(|i| format!("Q1-{}", i)).collect();
        let board_order: Vec<String> = clues.iter().map(|c| c.question().to_string()).collect();

        assert_ne!(board_order, source_order);
        let mut sorted = board_order.clone();
        sorted.sort_by_key(|q| q[3..].parse::<usize>().unwrap());
        assert_eq!(sorted, source_order);

        // Value follows the board position, not the source position
        for (position, clue) in clues.iter().enumerate() {
            assert_eq!(clue.id().position(), position);
            assert_eq!(clue.value(), (position as u32 + 1) * 100);
        }
        assert!(clues.iter().enumerate().any(|(position, clue)| {
            let source_index: usize = clue.question()[3..].parse().unwrap();
            source_index != position
        }));
    }

    #[tokio::test]
    async fn test_different_seeds_give_different_boards() {
        let order = |seed: u64| async move {
            let fetcher = MockFetcher::new().with_category(1, 0, 10);
            let use_case = BuildBoardUseCase::new(Arc::new(fetcher));
            let params = BoardParams::default()
                .with_clues_per_category(10)
                .with_shuffle_seed(Some(seed));
            let store = use_case
                .execute(BuildBoardInput::new(ids(&[1])).with_params(params))
                .await
                .unwrap();
            let questions: Vec<String> = store
                .clues_in(&store.categories()[0])
                .map(|c| c.question().to_string())
                .collect();
            questions
        };

        let mut orders = HashSet::new();
        for seed in 0..4 {
            orders.insert(order(seed).await);
        }
        assert!(orders.len() > 1);
    }

    #[tokio::test]
    async fn test_exact_clue_count_keeps_every_clue() {
        let fetcher = MockFetcher::new().with_category(1, 0, 5);
        let use_case = BuildBoardUseCase::new(Arc::new(fetcher));

        let store = use_case.execute(BuildBoardInput::new(ids(&[1]))).await.unwrap();

        let picked: HashSet<String> = store
            .clues_in(&store.categories()[0])
            .map(|c| c.question().to_string())
            .collect();
        let expected: HashSet<String> = (0..5).map(|i| format!("Q1-{}", i)).collect();
        assert_eq!(picked, expected);
    }

    #[tokio::test]
    async fn test_seeded_shuffle_is_reproducible() {
        let build = || async {
            let fetcher = MockFetcher::new()
                .with_category(1, 5, 20)
                .with_category(2, 0, 20);
            let use_case = BuildBoardUseCase::new(Arc::new(fetcher));
            let params = BoardParams::default().with_shuffle_seed(Some(2024));
            let store = use_case
                .execute(BuildBoardInput::new(ids(&[1, 2])).with_params(params))
                .await
                .unwrap();
            let questions: Vec<String> = store
                .categories()
                .iter()
                .flat_map(|c| store.clues_in(c).map(|clue| clue.question().to_string()))
                .collect();
            questions
        };

        assert_eq!(build().await, build().await);
    }

    #[tokio::test]
    async fn test_custom_params() {
        let fetcher = MockFetcher::new().with_category(1, 0, 4);
        let use_case = BuildBoardUseCase::new(Arc::new(fetcher));
        let params = BoardParams::default()
            .with_clues_per_category(3)
            .with_value_step(200);

        let store = use_case
            .execute(BuildBoardInput::new(ids(&[1])).with_params(params))
            .await
            .unwrap();

        let values: Vec<u32> = store
            .clues_in(&store.categories()[0])
            .map(|c| c.value())
            .collect();
        assert_eq!(values, [200, 400, 600]);
    }

    #[tokio::test]
    async fn test_fetch_timeout_fails_build() {
        let fetcher = MockFetcher::new()
            .with_category(1, 0, 5)
            .with_category(2, 500, 5);
        let use_case = BuildBoardUseCase::new(Arc::new(fetcher));
        let params =
            BoardParams::default().with_fetch_timeout(Some(Duration::from_millis(20)));

        let err = use_case
            .execute(BuildBoardInput::new(ids(&[1, 2])).with_params(params))
            .await
            .unwrap_err();

        match err {
            BuildBoardError::FetchFailed(failures) => {
                assert_eq!(
                    failures,
                    vec![CategoryFetchFailure {
                        category: CategoryId::new(2),
                        error: FetchError::Timeout,
                    }]
                );
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_rejects_empty_request_and_bad_params() {
        let use_case = BuildBoardUseCase::new(Arc::new(MockFetcher::new()));

        let err = use_case.execute(BuildBoardInput::new(vec![])).await.unwrap_err();
        assert!(matches!(err, BuildBoardError::NoCategories));

        let zero_clues = BoardParams::default().with_clues_per_category(0);
        let err = use_case
            .execute(BuildBoardInput::new(ids(&[1])).with_params(zero_clues))
            .await
            .unwrap_err();
        assert!(matches!(err, BuildBoardError::InvalidParams(_)));

        let zero_step = BoardParams::default().with_value_step(0);
        let err = use_case
            .execute(BuildBoardInput::new(ids(&[1])).with_params(zero_step))
            .await
            .unwrap_err();
        assert!(matches!(err, BuildBoardError::InvalidParams(_)));
    }

    #[tokio::test]
    async fn test_progress_events() {
        let fetcher = MockFetcher::new()
            .with_category(1, 0, 5)
            .with_failure(2, 10, FetchError::Other("boom".to_string()));
        let use_case = BuildBoardUseCase::new(Arc::new(fetcher));
        let progress = RecordingProgress::default();

        let result = use_case
            .execute_with_progress(BuildBoardInput::new(ids(&[1, 2])), &progress)
            .await;
        assert!(result.is_err());

        let events = progress.events.lock().unwrap().clone();
        assert_eq!(
            events,
            ["start:2", "fetched:1:true", "fetched:2:false", "complete:false"]
        );
    }

    #[tokio::test]
    async fn test_start_game_opens_idle_session() {
        let fetcher = MockFetcher::new()
            .with_category(1, 0, 5)
            .with_category(2, 0, 5);
        let use_case = BuildBoardUseCase::new(Arc::new(fetcher));

        let session = use_case
            .start_game(BuildBoardInput::new(ids(&[1, 2])), &NoProgress)
            .await
            .unwrap();

        assert_eq!(session.phase(), GamePhase::Idle);
        assert_eq!(session.score(), 0);
        assert_eq!(session.store().len(), 10);
        assert_eq!(session.store().remaining(), 10);
    }
}

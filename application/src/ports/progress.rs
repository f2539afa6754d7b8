//! Progress notification port
//!
//! Defines the interface for reporting progress while a board is built.

use trivia_domain::CategoryId;

/// Callback for progress updates during board construction
///
/// Implementations live in the presentation layer.
pub trait BuildProgressNotifier: Send + Sync {
    /// Called once all fetches have been issued
    fn on_build_start(&self, total_categories: usize);

    /// Called as each fetch finishes, in completion order
    fn on_category_fetched(&self, id: CategoryId, success: bool);

    /// Called when the build finishes, successfully or not
    fn on_build_complete(&self, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl BuildProgressNotifier for NoProgress {
    fn on_build_start(&self, _total_categories: usize) {}
    fn on_category_fetched(&self, _id: CategoryId, _success: bool) {}
    fn on_build_complete(&self, _success: bool) {}
}

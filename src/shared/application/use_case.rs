use crate::shared::errors::AppResult;
/// Base traits for command and query handlers
///
/// # Example
///
/// ```rust,ignore
/// struct CreateAnimeCommand {
///     title: String,
///     genre: String,
/// }
///
/// struct CreateAnimeHandler {
///     repository: Arc<dyn AnimeRepository>,
/// }
///
/// #[async_trait]
/// impl UseCase<CreateAnimeCommand, i32> for CreateAnimeHandler {
///     async fn execute(&self, command: CreateAnimeCommand) -> AppResult<i32> {
///         // Use case logic here
///     }
/// }
/// ```
use async_trait::async_trait;

/// Base trait for use cases (command handlers)
#[async_trait]
pub trait UseCase<TCommand, TResult> {
    /// Execute the use case with the given command
    async fn execute(&self, command: TCommand) -> AppResult<TResult>;
}

/// Base trait for queries (query handlers)
#[async_trait]
pub trait Query<TQuery, TResult> {
    /// Execute the query
    async fn execute(&self, query: TQuery) -> AppResult<TResult>;
}

//! Shared utilities for use cases.

use crate::ports::progress::{Operation, ProgressNotifier};
use std::future::Future;

/// Run `work` bracketed by progress callbacks for `operation`.
pub(crate) async fn reported<T, E, F>(
    progress: &dyn ProgressNotifier,
    operation: Operation,
    work: F,
) -> Result<T, E>
where
    F: Future<Output = Result<T, E>>,
{
    progress.on_operation_start(operation);
    let result = work.await;
    progress.on_operation_complete(operation, result.is_ok());
    result
}

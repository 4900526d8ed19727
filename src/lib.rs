//! kitbag - async-aware utility toolkit
//!
//! Small, independent helpers grouped by data type: string transforms,
//! collection operations, async control-flow combinators, JSON object
//! manipulation, and a typed success/failure result model. There is no
//! shared runtime or engine; each helper stands alone (the one piece of
//! persistent state is the cache inside [`flow::Memoized`], owned by the
//! wrapper that created it).

pub mod collections;
pub mod error;
pub mod flow;
pub mod object;
pub mod outcome;
pub mod strings;
pub mod validation;

pub use error::{FixSuggestion, UtilError};
pub use flow::{
    async_filter, async_map, batch_execute, parallel_limit, retry, sleep, timeout, try_async_map,
    wait_for, wait_for_sync, Debouncer, Memoized, MemoizeOptions, RetryOptions, SyncDebouncer,
    Throttle, WaitForOptions,
};
pub use outcome::{
    failure, failure_with_fields, is_failure_result, is_success_result, ok, ok_with, ApiResult,
    ErrorModel, FailureResult, SuccessResult,
};
pub use validation::{validate, validation_failure};

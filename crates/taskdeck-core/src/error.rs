use thiserror::Error;

use crate::form::FormField;
use crate::task::TaskId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("task not found: {0}")]
    NotFound(TaskId),
    #[error("no task id left above the current maximum")]
    IdSpaceExhausted,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("required field is empty: {0}")]
    ValidationMissing(FormField),
    #[error("completion must be \"true\" or \"false\", got {0:?}")]
    InvalidCompletion(String),
    #[error("unknown form field: {0:?}")]
    UnknownField(String),
}

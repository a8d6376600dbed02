use thiserror::Error;

/// Returned by [`O::get`](crate::O::get) when there is no value to extract.
#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug, Default, Error)]
#[error("called `O::get()` on a `None` value")]
pub struct NoneError;

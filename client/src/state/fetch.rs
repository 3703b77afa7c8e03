//! View state for a single remote resource.

#[cfg(test)]
#[path = "fetch_test.rs"]
mod fetch_test;

use crate::net::error::ApiError;

/// Loading lifecycle of one fetched value.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FetchState<T> {
    #[default]
    Loading,
    Ready(T),
    Failed(ApiError),
}

impl<T> FetchState<T> {
    /// Apply a request outcome. Outcomes from requests that are no longer
    /// `current`, and cancellations, leave the state untouched.
    ///
    /// Returns whether the state changed.
    pub fn resolve(&mut self, current: bool, outcome: Result<T, ApiError>) -> bool {
        if !current {
            return false;
        }
        *self = match outcome {
            Ok(value) => Self::Ready(value),
            Err(err) if err.is_aborted() => return false,
            Err(err) => Self::Failed(err),
        };
        true
    }

    /// Apply a background refresh. Unlike `resolve`, a failed refresh keeps
    /// previously loaded data on screen.
    ///
    /// Returns whether the state changed.
    pub fn refresh(&mut self, outcome: Result<T, ApiError>) -> bool {
        match outcome {
            Ok(value) => {
                *self = Self::Ready(value);
                true
            }
            Err(err) if err.is_aborted() || matches!(self, Self::Ready(_)) => false,
            Err(err) => {
                *self = Self::Failed(err);
                true
            }
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn failed(&self) -> Option<&ApiError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }
}

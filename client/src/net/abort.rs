//! Request cancellation handles.
//!
//! In the browser these wrap `AbortController`/`AbortSignal`; during server
//! rendering they are inert so the same call sites compile for both targets.

#[cfg(test)]
#[path = "abort_test.rs"]
mod abort_test;

/// Owns the cancellation side of one request. Dropping the guard aborts the
/// request, so holding it for exactly as long as the result is wanted is
/// enough to cancel superseded work.
#[derive(Debug)]
pub struct AbortGuard {
    #[cfg(feature = "hydrate")]
    controller: Option<web_sys::AbortController>,
}

impl AbortGuard {
    #[must_use]
    pub fn new() -> Self {
        Self {
            #[cfg(feature = "hydrate")]
            controller: web_sys::AbortController::new().ok(),
        }
    }

    /// The signal to attach to the request this guard controls.
    #[must_use]
    pub fn signal(&self) -> RequestSignal {
        RequestSignal {
            #[cfg(feature = "hydrate")]
            inner: self.controller.as_ref().map(web_sys::AbortController::signal),
        }
    }

    pub fn abort(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(controller) = &self.controller {
                controller.abort();
            }
        }
    }
}

impl Default for AbortGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for AbortGuard {
    fn drop(&mut self) {
        self.abort();
    }
}

/// Observation side of an `AbortGuard`, passed into API calls.
#[derive(Clone, Debug, Default)]
pub struct RequestSignal {
    #[cfg(feature = "hydrate")]
    inner: Option<web_sys::AbortSignal>,
}

impl RequestSignal {
    /// A signal that never fires, for requests nobody cancels.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_aborted(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            self.inner.as_ref().is_some_and(web_sys::AbortSignal::aborted)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }

    #[cfg(feature = "hydrate")]
    pub(crate) fn as_web(&self) -> Option<&web_sys::AbortSignal> {
        self.inner.as_ref()
    }
}

//! Fetch state for a page's remote data.
//!
//! Each fetch replaces the previous value wholesale; there is no caching
//! and no merging between fetches.

#[cfg(test)]
#[path = "loadable_test.rs"]
mod loadable_test;

use session::ApiError;

/// Remote value with its loading and error flags.
#[derive(Clone, Debug, PartialEq)]
pub struct Loadable<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for Loadable<T> {
    /// Pages fetch on mount, so the initial state is already loading.
    fn default() -> Self {
        Self { data: None, loading: true, error: None }
    }
}

impl<T> Loadable<T> {
    /// Mark a fetch as in flight. Any previous value stays visible.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Forget the previous value and start over, for when the page now shows
    /// a different resource.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Record the outcome of a fetch. Errors keep the last good value.
    pub fn settle(&mut self, result: Result<T, ApiError>) {
        self.loading = false;
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            Err(err) => self.error = Some(err.to_string()),
        }
    }
}

impl<T> Loadable<Vec<T>> {
    /// Loaded successfully and nothing came back.
    pub fn is_empty(&self) -> bool {
        !self.loading && self.error.is_none() && self.data.as_ref().is_some_and(Vec::is_empty)
    }

    /// Current items, empty while nothing has loaded.
    pub fn items(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone().unwrap_or_default()
    }
}

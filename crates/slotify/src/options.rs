//! Per-call options for the finder.

use std::fmt;

/// Exclusion predicate: returning `true` drops the candidate from the result.
pub type FilterFn<Out> = Box<dyn Fn(&Out) -> bool + Send + Sync>;

/// Options accepted by [`crate::find`] and [`crate::find_with_adapter`].
///
/// `Out` is the type handed back to the caller: [`crate::Slot`] for `find`,
/// or whatever `map_out` produces for the adapter entry point. The filter sees
/// values of that type.
pub struct FindOptions<Out> {
    filter: Option<FilterFn<Out>>,
}

impl<Out> FindOptions<Out> {
    /// Options with no filter set.
    pub fn new() -> Self {
        Self { filter: None }
    }

    /// Drop every candidate for which `filter` returns `true`.
    ///
    /// Note the polarity: this is an exclusion filter, not a keep filter.
    ///
    /// ```
    /// use chrono::Duration;
    /// use slotify::{FindOptions, Period, Slot};
    ///
    /// // Skip anything shorter than 30 minutes.
    /// let opts: FindOptions<Slot> =
    ///     FindOptions::new().with_filter(|s: &Slot| s.duration() < Duration::minutes(30));
    /// assert!(opts.has_filter());
    /// ```
    pub fn with_filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&Out) -> bool + Send + Sync + 'static,
    {
        self.filter = Some(Box::new(filter));
        self
    }

    pub fn has_filter(&self) -> bool {
        self.filter.is_some()
    }

    /// Whether `candidate` is excluded. Always `false` without a filter.
    pub(crate) fn excludes(&self, candidate: &Out) -> bool {
        self.filter.as_ref().is_some_and(|f| f(candidate))
    }
}

impl<Out> Default for FindOptions<Out> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Out> fmt::Debug for FindOptions<Out> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FindOptions")
            .field("filter", &self.filter.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

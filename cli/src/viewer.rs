//! Single-cheatsheet viewer with copy feedback.
//!
//! A [`Viewer`] resolves one cheatsheet by name and hands out snippets by
//! [`CopyKey`]. Every copy lights a "copied" marker that expires on its own
//! after the configured feedback duration; markers for different keys never
//! interact.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use cheatsheet_core::{Cheatsheet, CopyKey};
use cheatsheet_db::CatalogIndex;
use tracing::{debug, info};

use crate::error::ViewerError;
use crate::render::{OutputFormat, format_cheatsheet};

/// Time-boxed set of recently copied keys.
///
/// Time is always passed in, so expiry is deterministic and no timer runs in
/// the background.
#[derive(Debug, Clone)]
pub struct CopyTracker {
    feedback: Duration,
    deadlines: BTreeMap<CopyKey, Instant>,
}

impl CopyTracker {
    pub fn new(feedback: Duration) -> Self {
        Self {
            feedback,
            deadlines: BTreeMap::new(),
        }
    }

    /// Marks `key` as copied at `now`. Re-marking restarts its countdown.
    pub fn mark(&mut self, key: CopyKey, now: Instant) {
        self.deadlines.insert(key, now + self.feedback);
    }

    #[cfg(test)]
    pub fn is_active(&self, key: CopyKey, now: Instant) -> bool {
        self.deadlines
            .get(&key)
            .is_some_and(|&deadline| now < deadline)
    }

    /// Keys whose marker is still visible at `now`, in key order.
    pub fn active(&self, now: Instant) -> Vec<CopyKey> {
        self.deadlines
            .iter()
            .filter(|&(_, &deadline)| now < deadline)
            .map(|(&key, _)| key)
            .collect()
    }

    /// Drops expired keys.
    pub fn prune(&mut self, now: Instant) {
        self.deadlines.retain(|_, deadline| now < *deadline);
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.deadlines.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.deadlines.is_empty()
    }
}

/// Viewer bound to one resolved cheatsheet.
#[derive(Debug)]
pub struct Viewer<'a> {
    sheet: &'a Cheatsheet,
    tracker: CopyTracker,
}

impl<'a> Viewer<'a> {
    /// Resolves `name` through the index.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::NotFound`] when no cheatsheet has this exact
    /// name.
    pub fn open(index: &CatalogIndex<'a>, name: &str, feedback: Duration) -> Result<Self, ViewerError> {
        let sheet = index
            .get_by_name(name)
            .ok_or_else(|| ViewerError::NotFound(name.to_string()))?;
        debug!(cheatsheet = %sheet.name, sections = sheet.sections.len(), "Opened cheatsheet");
        Ok(Self {
            sheet,
            tracker: CopyTracker::new(feedback),
        })
    }

    #[cfg(test)]
    pub fn cheatsheet(&self) -> &'a Cheatsheet {
        self.sheet
    }

    #[cfg(test)]
    pub fn tracker(&self) -> &CopyTracker {
        &self.tracker
    }

    /// Returns the snippet addressed by `key` and marks it as copied.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::NothingToCopy`] when `key` is out of range or
    /// designates an item without code.
    pub fn copy(&mut self, key: CopyKey, now: Instant) -> Result<&'a str, ViewerError> {
        let snippet = self
            .sheet
            .snippet(key)
            .ok_or_else(|| ViewerError::NothingToCopy {
                name: self.sheet.name.clone(),
                key,
            })?;
        self.tracker.prune(now);
        self.tracker.mark(key, now);
        info!(cheatsheet = %self.sheet.name, %key, "Copied snippet");
        Ok(snippet)
    }

    /// Renders the cheatsheet with markers for keys still active at `now`.
    pub fn render(&self, format: OutputFormat, now: Instant) -> Result<String, ViewerError> {
        format_cheatsheet(self.sheet, format, &self.tracker.active(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cheatsheet_db::CatalogStore;

    const FEEDBACK: Duration = Duration::from_millis(2000);

    #[test]
    fn test_tracker_expires_after_feedback() {
        let start = Instant::now();
        let key = CopyKey::code(0, 0);
        let mut tracker = CopyTracker::new(FEEDBACK);

        tracker.mark(key, start);
        assert!(tracker.is_active(key, start));
        assert!(tracker.is_active(key, start + Duration::from_millis(1999)));
        assert!(!tracker.is_active(key, start + FEEDBACK));
    }

    #[test]
    fn test_tracker_keys_expire_independently() {
        let start = Instant::now();
        let first = CopyKey::code(0, 0);
        let second = CopyKey::example(1, 2, 0);
        let mut tracker = CopyTracker::new(FEEDBACK);

        tracker.mark(first, start);
        tracker.mark(second, start + Duration::from_millis(1500));

        let later = start + Duration::from_millis(2500);
        assert_eq!(tracker.active(later), vec![second]);

        tracker.prune(later);
        assert_eq!(tracker.len(), 1);
        tracker.prune(start + Duration::from_millis(3500));
        assert!(tracker.is_empty());
    }

    #[test]
    fn test_remark_restarts_countdown() {
        let start = Instant::now();
        let key = CopyKey::code(0, 0);
        let mut tracker = CopyTracker::new(FEEDBACK);

        tracker.mark(key, start);
        tracker.mark(key, start + Duration::from_millis(1500));
        assert!(tracker.is_active(key, start + Duration::from_millis(3000)));
    }

    #[test]
    fn test_open_unknown_name_is_not_found() {
        let store = CatalogStore::builtin();
        let index = CatalogIndex::new(&store);
        let err = Viewer::open(&index, "git", FEEDBACK).unwrap_err();
        assert!(matches!(err, ViewerError::NotFound(ref n) if n == "git"));
    }

    #[test]
    fn test_copy_returns_snippet_and_marks_key() {
        let store = CatalogStore::builtin();
        let index = CatalogIndex::new(&store);
        let mut viewer = Viewer::open(&index, "Git", FEEDBACK).unwrap();
        let now = Instant::now();

        let key = CopyKey::code(1, 2);
        let expected = viewer.cheatsheet().snippet(key).unwrap();
        assert_eq!(viewer.copy(key, now).unwrap(), expected);
        assert!(viewer.tracker().is_active(key, now));

        let rendered = viewer.render(OutputFormat::Table, now).unwrap();
        assert!(rendered.contains(crate::render::COPIED_MARKER));
        let expired = viewer.render(OutputFormat::Table, now + FEEDBACK).unwrap();
        assert!(!expired.contains(crate::render::COPIED_MARKER));
    }

    #[test]
    fn test_copy_out_of_range_fails_without_marking() {
        let store = CatalogStore::builtin();
        let index = CatalogIndex::new(&store);
        let mut viewer = Viewer::open(&index, "Git", FEEDBACK).unwrap();

        let err = viewer.copy(CopyKey::code(99, 0), Instant::now()).unwrap_err();
        assert!(matches!(err, ViewerError::NothingToCopy { .. }));
        assert!(viewer.tracker().is_empty());
    }
}

//! Process-unique component identifiers.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_COMPONENT_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Opaque identifier assigned to every component at construction.
///
/// Identifiers are never derived from content and never reused within a process, so two
/// components with identical content still address distinct DOM nodes.
pub struct ComponentId(u64);

impl ComponentId {
    /// Allocates the next identifier.
    pub fn next() -> Self {
        Self(NEXT_COMPONENT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// DOM id for an element derived from this component (for example a dialog title).
    pub fn suffixed(self, suffix: &str) -> String {
        format!("{self}-{suffix}")
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ui-{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn identifiers_are_unique_and_non_empty() {
        let ids: Vec<_> = (0..512).map(|_| ComponentId::next()).collect();
        let distinct: HashSet<_> = ids.iter().copied().collect();

        assert_eq!(distinct.len(), ids.len());
        assert!(ids.iter().all(|id| !id.to_string().is_empty()));
    }

    #[test]
    fn identifiers_render_as_valid_dom_ids() {
        let id = ComponentId::next();
        let text = id.to_string();

        assert!(text.starts_with("ui-"));
        assert_eq!(id.suffixed("title"), format!("{text}-title"));
    }
}

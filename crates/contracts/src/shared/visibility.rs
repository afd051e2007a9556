//! State behind section highlighting and reveal animations.

use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SectionId(String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Landmark id targeted by an in-page link, if any (`"#about"` -> `about`).
pub fn nav_target(href: &str) -> Option<SectionId> {
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() => Some(SectionId::new(id)),
        _ => None,
    }
}

/// At most one navigation entry is active.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavHighlight {
    active: Option<SectionId>,
    targets: HashSet<SectionId>,
}

impl NavHighlight {
    /// Builds the link-to-landmark mapping once from the link hrefs.
    pub fn from_hrefs<'a>(hrefs: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            active: None,
            targets: hrefs.into_iter().filter_map(nav_target).collect(),
        }
    }

    pub fn active(&self) -> Option<&SectionId> {
        self.active.as_ref()
    }

    pub fn is_active(&self, id: &SectionId) -> bool {
        self.active.as_ref() == Some(id)
    }

    /// A landmark became visible: clear every entry, then mark the one whose
    /// link targets it. A landmark without a link leaves nothing active.
    pub fn on_visible(&mut self, id: &SectionId) {
        self.active = self.targets.contains(id).then(|| id.clone());
    }
}

/// Sections whose content has been revealed. Never shrinks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealSet {
    revealed: HashSet<SectionId>,
}

impl RevealSet {
    /// Returns `true` the first time a section is revealed.
    pub fn reveal(&mut self, id: &SectionId) -> bool {
        self.revealed.insert(id.clone())
    }

    pub fn is_revealed(&self, id: &SectionId) -> bool {
        self.revealed.contains(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> SectionId {
        SectionId::new(s)
    }

    #[test]
    fn nav_target_parses_fragments_only() {
        assert_eq!(nav_target("#about"), Some(id("about")));
        assert_eq!(nav_target("#"), None);
        assert_eq!(nav_target("/contact"), None);
    }

    #[test]
    fn single_active_entry() {
        let mut nav = NavHighlight::from_hrefs(["#home", "#products", "#about", "https://x.y"]);
        nav.on_visible(&id("products"));
        assert!(nav.is_active(&id("products")));
        nav.on_visible(&id("about"));
        assert!(nav.is_active(&id("about")));
        assert!(!nav.is_active(&id("products")));
        assert_eq!(nav.active(), Some(&id("about")));
    }

    #[test]
    fn unlinked_landmark_clears_highlight() {
        let mut nav = NavHighlight::from_hrefs(["#home"]);
        nav.on_visible(&id("home"));
        nav.on_visible(&id("combos"));
        assert_eq!(nav.active(), None);
    }

    #[test]
    fn reveal_is_one_way() {
        let mut set = RevealSet::default();
        assert!(set.reveal(&id("about")));
        assert!(!set.reveal(&id("about")));
        assert!(set.is_revealed(&id("about")));
        assert!(!set.is_revealed(&id("contact")));
    }
}

use crate::layout::header::navbar::NAV_LINKS;
use contracts::domain::a001_product::Catalog;
use contracts::shared::config::SiteConfig;
use contracts::shared::layout_metric::NavHeight;
use contracts::shared::lifecycle::{GatePhase, LifecycleGate};
use contracts::shared::visibility::{NavHighlight, RevealSet, SectionId};
use leptos::prelude::*;

/// Page-wide state shared by the components. Everything here is owned by the
/// Leptos runtime; the catalog and config are immutable after construction.
#[derive(Clone, Copy)]
pub struct SiteContext {
    pub config: StoredValue<SiteConfig>,
    pub catalog: Catalog,
    pub gate: RwSignal<LifecycleGate>,
    pub nav_height: RwSignal<NavHeight>,
    pub highlight: RwSignal<NavHighlight>,
    pub revealed: RwSignal<RevealSet>,
    /// Number of footer items already faded in.
    pub footer_revealed: RwSignal<usize>,
    pub nav_scrolled: RwSignal<bool>,
    pub go_top_visible: RwSignal<bool>,
}

impl SiteContext {
    pub fn new(config: SiteConfig, started_at: f64) -> Self {
        let gate = LifecycleGate::new(started_at, &config.preloader);
        let nav_height = NavHeight::fallback(&config.nav);
        let highlight = NavHighlight::from_hrefs(NAV_LINKS.iter().map(|(href, _)| *href));

        Self {
            config: StoredValue::new(config),
            catalog: Catalog::default(),
            gate: RwSignal::new(gate),
            nav_height: RwSignal::new(nav_height),
            highlight: RwSignal::new(highlight),
            revealed: RwSignal::new(RevealSet::default()),
            footer_revealed: RwSignal::new(0),
            nav_scrolled: RwSignal::new(false),
            go_top_visible: RwSignal::new(false),
        }
    }

    pub fn phase(&self) -> GatePhase {
        self.gate.with(|g| g.phase())
    }

    pub fn is_released(&self) -> bool {
        self.gate.with_untracked(|g| g.phase().is_released())
    }

    pub fn is_active(&self, id: &SectionId) -> bool {
        self.highlight.with(|h| h.is_active(id))
    }

    /// Reactive reveal flag for the content of one landmark.
    pub fn revealed(&self, id: &'static str) -> Signal<bool> {
        let revealed = self.revealed;
        let id = SectionId::new(id);
        Signal::derive(move || revealed.with(|set| set.is_revealed(&id)))
    }

    pub fn footer_item_visible(&self, index: usize) -> Signal<bool> {
        let footer_revealed = self.footer_revealed;
        Signal::derive(move || footer_revealed.get() > index)
    }

    /// A landmark satisfied the visibility threshold.
    pub fn landmark_visible(&self, id: SectionId) {
        self.highlight.update(|h| h.on_visible(&id));
        if self.revealed.with_untracked(|set| set.is_revealed(&id)) {
            return;
        }
        self.revealed.update(|set| {
            set.reveal(&id);
        });
        log::debug!("Revealed section '{}'", id.as_str());
    }
}

pub fn use_site_context() -> SiteContext {
    use_context::<SiteContext>().expect("SiteContext context not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_controls_wait_for_gate_release() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = SiteContext::new(SiteConfig::default(), 0.0);
            assert!(!ctx.is_released());

            ctx.gate.update(|g| {
                g.release();
            });
            assert!(ctx.is_released());
            assert_eq!(ctx.phase(), GatePhase::Revealing);
        });
    }
}

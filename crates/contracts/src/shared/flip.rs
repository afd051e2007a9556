//! Flip state of a product card: `Collapsed <-> Expanded` with a scheduled
//! revert that can be invalidated.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlipFace {
    #[default]
    Collapsed,
    Expanded,
}

/// Identifies one scheduled revert. Stale tickets are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevertTicket(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlipCard {
    face: FlipFace,
    generation: u64,
}

impl FlipCard {
    pub fn face(&self) -> FlipFace {
        self.face
    }

    pub fn is_expanded(&self) -> bool {
        self.face == FlipFace::Expanded
    }

    /// Toggles the face. Every toggle invalidates earlier tickets; a toggle
    /// to `Expanded` hands out the ticket for its own auto-revert.
    pub fn toggle(&mut self) -> Option<RevertTicket> {
        self.generation += 1;
        match self.face {
            FlipFace::Collapsed => {
                self.face = FlipFace::Expanded;
                Some(RevertTicket(self.generation))
            }
            FlipFace::Expanded => {
                self.face = FlipFace::Collapsed;
                None
            }
        }
    }

    /// Applies a scheduled revert; returns `true` if the card collapsed.
    pub fn revert(&mut self, ticket: RevertTicket) -> bool {
        if ticket.0 != self.generation || self.face == FlipFace::Collapsed {
            return false;
        }
        self.face = FlipFace::Collapsed;
        true
    }
}

/// Click-to-flip is reserved for narrow viewports; wide ones use hover.
pub fn click_flips(viewport_width: f64, max_width: f64) -> bool {
    viewport_width <= max_width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn revert_collapses_expanded_card() {
        let mut card = FlipCard::default();
        let ticket = card.toggle().unwrap();
        assert!(card.is_expanded());
        assert!(card.revert(ticket));
        assert_eq!(card.face(), FlipFace::Collapsed);
    }

    #[test]
    fn stale_revert_is_ignored() {
        let mut card = FlipCard::default();
        let first = card.toggle().unwrap();
        assert!(card.toggle().is_none());
        let second = card.toggle().unwrap();
        // the first timer fires while the second expansion is showing
        assert!(!card.revert(first));
        assert!(card.is_expanded());
        assert!(card.revert(second));
        assert!(!card.is_expanded());
    }

    #[test]
    fn revert_after_manual_collapse_is_noop() {
        let mut card = FlipCard::default();
        let ticket = card.toggle().unwrap();
        card.toggle();
        assert!(!card.revert(ticket));
    }

    #[test]
    fn click_width_gate() {
        assert!(click_flips(992.0, 992.0));
        assert!(click_flips(375.0, 992.0));
        assert!(!click_flips(1280.0, 992.0));
    }
}

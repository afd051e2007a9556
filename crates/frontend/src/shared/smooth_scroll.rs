//! In-page anchor jumps that keep the target clear of the fixed navbar.

use crate::layout::global_context::SiteContext;
use crate::shared::dom;
use contracts::shared::visibility::nav_target;
use leptos::ev::MouseEvent;
use leptos::prelude::WithUntracked;

/// Click handler body for `<a href="#...">` links.
///
/// Falls through to the browser's own navigation for bare `#`, unknown
/// targets, or while the page is still behind the preloader.
pub fn follow_anchor(ev: &MouseEvent, href: &str, ctx: SiteContext) {
    if !ctx.is_released() {
        return;
    }
    let Some(section) = nav_target(href) else {
        return;
    };
    let Some(target) = dom::by_id(section.as_str()) else {
        return;
    };
    ev.prevent_default();

    let rect_top = target.get_bounding_client_rect().top();
    let top = ctx
        .nav_height
        .with_untracked(|h| h.anchor_scroll_top(rect_top, dom::scroll_y()));
    dom::smooth_scroll_to(top);
}

/// Back-to-top button. Inert while the preloader is up.
pub fn scroll_to_top(ctx: SiteContext) {
    if ctx.is_released() {
        dom::smooth_scroll_to(0.0);
    }
}

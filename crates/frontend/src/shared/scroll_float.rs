//! Navbar "float" styling once the page is scrolled, at most once per frame.

use crate::layout::global_context::SiteContext;
use crate::shared::dom::{self, Setup};
use contracts::shared::scheduling::FrameGuard;
use leptos::ev;
use leptos::prelude::*;

pub fn install(ctx: SiteContext) -> Setup {
    let float_after = ctx.config.with_value(|c| c.nav.float_after_px);
    let guard = StoredValue::new(FrameGuard::default());

    let update = move || {
        guard.update_value(|g| g.frame_ran());
        let scrolled = dom::scroll_y() > float_after;
        if ctx.nav_scrolled.get_untracked() != scrolled {
            ctx.nav_scrolled.set(scrolled);
        }
    };

    update();
    let _ = window_event_listener(ev::scroll, move |_| {
        let schedule = guard.try_update_value(|g| g.try_schedule()).unwrap_or(false);
        if schedule {
            request_animation_frame(update);
        }
    });
    Setup::Attached
}

pub mod components;
pub mod dom;
pub mod footer_reveal;
pub mod layout_sync;
pub mod lifecycle;
pub mod scroll_float;
pub mod smooth_scroll;
pub mod visibility_tracker;

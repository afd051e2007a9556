pub mod card_animated;
pub mod ui;

pub mod config;
pub mod flip;
pub mod layout_metric;
pub mod lifecycle;
pub mod scheduling;
pub mod visibility;

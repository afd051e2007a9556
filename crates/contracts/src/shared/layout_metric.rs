use super::config::NavConfig;

/// Rendered height of the fixed navigation bar, in whole pixels.
///
/// Always positive: a zero (or not yet laid out) measurement resolves to the
/// configured fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavHeight {
    px: u32,
    main_padding_extra: u32,
    scroll_margin_extra: u32,
    anchor_gap: u32,
}

impl NavHeight {
    pub fn fallback(config: &NavConfig) -> Self {
        Self {
            px: config.fallback_height.max(1),
            main_padding_extra: config.main_padding_extra,
            scroll_margin_extra: config.scroll_margin_extra,
            anchor_gap: config.anchor_gap,
        }
    }

    pub fn measure(rect_height: f64, config: &NavConfig) -> Self {
        let fallback = Self::fallback(config);
        if !rect_height.is_finite() || rect_height <= 0.0 {
            return fallback;
        }
        Self {
            px: rect_height.ceil() as u32,
            ..fallback
        }
    }

    pub fn px(&self) -> u32 {
        self.px
    }

    /// Value for the `--nav-height` custom property.
    pub fn css_value(&self) -> String {
        format!("{}px", self.px)
    }

    pub fn main_padding_top(&self) -> u32 {
        self.px + self.main_padding_extra
    }

    pub fn scroll_margin_top(&self) -> u32 {
        self.px + self.scroll_margin_extra
    }

    /// Vertical offset reserved when jumping to an in-page anchor.
    pub fn anchor_offset(&self) -> u32 {
        self.px + self.anchor_gap
    }

    /// Document scroll position that puts an element whose viewport top is
    /// `rect_top` just below the bar.
    pub fn anchor_scroll_top(&self, rect_top: f64, page_y: f64) -> f64 {
        rect_top + page_y - f64::from(self.anchor_offset())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measurement_rounds_up() {
        let h = NavHeight::measure(63.2, &NavConfig::default());
        assert_eq!(h.px(), 64);
        assert_eq!(h.css_value(), "64px");
        assert_eq!(h.main_padding_top(), 70);
        assert_eq!(h.scroll_margin_top(), 72);
        assert_eq!(h.anchor_offset(), 76);
        assert_eq!(h.anchor_scroll_top(300.0, 1_000.0), 1_224.0);
    }

    #[test]
    fn zero_height_uses_fallback() {
        let config = NavConfig::default();
        assert_eq!(NavHeight::measure(0.0, &config).px(), 72);
        assert_eq!(NavHeight::measure(f64::NAN, &config).px(), 72);
        assert_eq!(NavHeight::measure(-3.0, &config), NavHeight::fallback(&config));
    }

    #[test]
    fn fallback_is_never_zero() {
        let config = NavConfig {
            fallback_height: 0,
            ..NavConfig::default()
        };
        assert_eq!(NavHeight::fallback(&config).px(), 1);
    }
}

//! Staggered entrance for grid items.
//!
//! Each card is inserted hidden and slightly lowered, then switched to its
//! resting state after its stagger delay; the inline transition animates
//! the change.
//!
//! ```text
//! card 0 -> enters at 0ms
//! card 1 -> enters at 70ms
//! card 2 -> enters at 140ms
//! ```

const EASING: &str = "cubic-bezier(.2,.9,.2,1)";

/// Inline style for one card; `entered` flips once its delay has elapsed.
pub fn entrance_style(duration_ms: u32, entered: bool) -> String {
    if entered {
        format!(
            "opacity: 1; transform: translateY(0) scale(1); \
             transition: opacity {duration_ms}ms ease, transform {duration_ms}ms {EASING};"
        )
    } else {
        "opacity: 0; transform: translateY(18px) scale(.995);".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entrance_style() {
        let start = entrance_style(560, false);
        assert!(start.contains("opacity: 0"));
        assert!(start.contains("translateY(18px)"));
        assert!(!start.contains("transition"));

        let end = entrance_style(560, true);
        assert!(end.contains("opacity: 1"));
        assert!(end.contains("transition: opacity 560ms ease, transform 560ms cubic-bezier(.2,.9,.2,1);"));
    }
}

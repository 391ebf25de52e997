/// Fraction of the viewport height an element's top edge has to cross
/// before it counts as revealed.
pub const REVEAL_RATIO: f64 = 0.85;
/// Scroll distance after which the header switches to its compact style.
pub const HEADER_SCROLL_THRESHOLD: f64 = 50.0;
/// Scroll distance after which the back-to-top button is shown.
pub const BACK_TO_TOP_THRESHOLD: f64 = 300.0;
/// Sections become "current" this many pixels before their top edge.
pub const SECTION_LEAD: f64 = 100.0;

pub fn is_revealed(element_top: f64, element_bottom: f64, viewport_height: f64) -> bool {
    element_top <= viewport_height * REVEAL_RATIO && element_bottom >= 0.0
}

pub fn header_is_scrolled(scroll_y: f64) -> bool {
    scroll_y > HEADER_SCROLL_THRESHOLD
}

pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_THRESHOLD
}

/// Layout of a page section, as measured by the rendering layer.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub offset_top: f64,
    pub height: f64,
}

/// Picks the section the nav should highlight. Sections are given in document
/// order and a later match overrides an earlier one.
pub fn active_section(scroll_y: f64, sections: &[SectionBounds]) -> Option<&str> {
    sections
        .iter()
        .filter(|section| {
            let top = section.offset_top - SECTION_LEAD;
            scroll_y >= top && scroll_y < top + section.height
        })
        .last()
        .map(|section| section.id.as_str())
}

/// Extracts the element id from an in-page link. A bare `#` has no target.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Where to scroll so the target is not hidden under the fixed header.
pub fn scroll_target(offset_top: f64, header_height: f64) -> f64 {
    offset_top - header_height
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(id: &str, offset_top: f64, height: f64) -> SectionBounds {
        SectionBounds {
            id: id.to_string(),
            offset_top,
            height,
        }
    }

    #[test]
    fn test_reveal_boundaries() {
        assert!(is_revealed(850.0, 900.0, 1000.0));
        assert!(!is_revealed(850.5, 900.0, 1000.0));
        assert!(is_revealed(-400.0, 0.0, 1000.0));
        assert!(!is_revealed(-400.0, -0.5, 1000.0));
    }

    #[test]
    fn test_scroll_thresholds() {
        assert!(!header_is_scrolled(50.0));
        assert!(header_is_scrolled(51.0));
        assert!(!back_to_top_visible(300.0));
        assert!(back_to_top_visible(300.5));
    }

    #[test]
    fn test_active_section() {
        let sections = vec![
            section("home", 0.0, 600.0),
            section("services", 600.0, 800.0),
            section("gallery", 1400.0, 700.0),
        ];
        assert_eq!(active_section(0.0, &sections), Some("home"));
        // services starts counting 100px early
        assert_eq!(active_section(500.0, &sections), Some("services"));
        assert_eq!(active_section(1299.0, &sections), Some("services"));
        assert_eq!(active_section(1300.0, &sections), Some("gallery"));
        assert_eq!(active_section(5000.0, &sections), None);
    }

    #[test]
    fn test_overlapping_sections_prefer_later() {
        let sections = vec![section("a", 0.0, 1000.0), section("b", 300.0, 200.0)];
        assert_eq!(active_section(250.0, &sections), Some("b"));
    }

    #[test]
    fn test_anchor_target() {
        assert_eq!(anchor_target("#contact"), Some("contact"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("/pricing"), None);
        assert_eq!(scroll_target(1200.0, 80.0), 1120.0);
    }
}

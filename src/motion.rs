//! Scroll-driven motion
//!
//! Parallax offsets and entrance reveal timing.

/// Hero image shift at full scroll-through, in percent of its height
pub const PARALLAX_MAX_PERCENT: f64 = 25.0;
/// Hero never shorter than this
pub const HERO_MIN_HEIGHT_PX: f64 = 600.0;
/// Sections reveal once this far inside the viewport
pub const REVEAL_MARGIN_PX: f64 = 80.0;
/// Delay between staggered siblings
pub const STAGGER_STEP_MS: u32 = 120;

/// Progress through the hero, 0.0 at the top and 1.0 once it has scrolled out
pub fn hero_progress(scroll_y: f64, viewport_height: f64) -> f64 {
    let hero_height = viewport_height.max(HERO_MIN_HEIGHT_PX);
    (scroll_y / hero_height).clamp(0.0, 1.0)
}

/// Vertical translation of the hero image, in percent
pub fn hero_parallax_percent(scroll_y: f64, viewport_height: f64) -> f64 {
    hero_progress(scroll_y, viewport_height) * PARALLAX_MAX_PERCENT
}

/// CSS transform for the parallax layer
pub fn hero_parallax_transform(scroll_y: f64, viewport_height: f64) -> String {
    format!(
        "transform: translateY({:.2}%) scale(1.15);",
        hero_parallax_percent(scroll_y, viewport_height)
    )
}

/// An element whose top edge sits at `top` (viewport coordinates) is due to appear
pub fn should_reveal(top: f64, viewport_height: f64) -> bool {
    top < viewport_height - REVEAL_MARGIN_PX
}

pub fn stagger_delay_ms(index: usize) -> u32 {
    index as u32 * STAGGER_STEP_MS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallax_bounds() {
        assert_eq!(hero_parallax_percent(0.0, 900.0), 0.0);
        assert_eq!(hero_parallax_percent(-50.0, 900.0), 0.0);
        assert_eq!(hero_parallax_percent(900.0, 900.0), 25.0);
        assert_eq!(hero_parallax_percent(5_000.0, 900.0), 25.0);
        assert_eq!(hero_parallax_percent(450.0, 900.0), 12.5);
    }

    #[test]
    fn test_parallax_is_monotonic() {
        let mut last = 0.0;
        for y in (0..1_500).step_by(7) {
            let p = hero_parallax_percent(y as f64, 800.0);
            assert!(p >= last);
            assert!((0.0..=PARALLAX_MAX_PERCENT).contains(&p));
            last = p;
        }
    }

    #[test]
    fn test_short_viewport_uses_min_hero_height() {
        assert_eq!(hero_progress(300.0, 400.0), 0.5);
    }

    #[test]
    fn test_transform_string() {
        assert_eq!(
            hero_parallax_transform(450.0, 900.0),
            "transform: translateY(12.50%) scale(1.15);"
        );
    }

    #[test]
    fn test_reveal_threshold() {
        assert!(should_reveal(100.0, 800.0));
        assert!(should_reveal(719.0, 800.0));
        assert!(!should_reveal(720.0, 800.0));
        assert!(!should_reveal(2_000.0, 800.0));
    }

    #[test]
    fn test_stagger() {
        assert_eq!(stagger_delay_ms(0), 0);
        assert_eq!(stagger_delay_ms(3), 360);
    }
}

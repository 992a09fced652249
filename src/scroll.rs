use yew::prelude::*;

use crate::viewport::{self, WindowListener};

/// Progress of an element through the viewport: 0.0 while its top edge is at
/// or below the viewport bottom, 1.0 once its bottom edge has left the top.
pub fn scroll_progress(top: f64, height: f64, viewport_height: f64) -> f64 {
    let travel = viewport_height + height;
    if travel.is_nan() || travel <= 0.0 || !top.is_finite() {
        return 0.0;
    }
    ((viewport_height - top) / travel).clamp(0.0, 1.0)
}

/// Maps `value` linearly from `input` onto `output`, clamped to `output`.
pub fn interpolate(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let (in_start, in_end) = input;
    let (out_start, out_end) = output;
    if value.is_nan() {
        return out_start;
    }
    if in_end == in_start {
        return if value < in_start { out_start } else { out_end };
    }
    let t = ((value - in_start) / (in_end - in_start)).clamp(0.0, 1.0);
    out_start + (out_end - out_start) * t
}

/// Opacity of the demo card: fades in over the first half of the traversal.
pub fn fade_in_opacity(progress: f64) -> f64 {
    interpolate(progress, (0.0, 0.5), (0.0, 1.0))
}

/// Progress reported before the first measurement.
pub const INITIAL_PROGRESS: f64 = 0.0;

/// Tracks `scroll_progress` of the node, recomputed on scroll and resize.
#[hook]
pub fn use_scroll_progress(node: NodeRef) -> f64 {
    let progress = use_state_eq(|| INITIAL_PROGRESS);

    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let node = node.clone();
                let measure = move || {
                    let Some(rect) = viewport::element_rect(&node) else {
                        return;
                    };
                    if let Some(viewport_height) = viewport::height() {
                        progress.set(scroll_progress(rect.top(), rect.height(), viewport_height));
                    }
                };

                // Initial check
                measure();

                let listener = WindowListener::new(&["scroll", "resize"], measure);
                move || drop(listener)
            },
            node,
        );
    }

    *progress
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: f64 = 800.0;
    const SECTION: f64 = 600.0;

    #[test]
    fn progress_is_zero_before_the_section_enters() {
        assert_eq!(scroll_progress(VIEWPORT, SECTION, VIEWPORT), 0.0);
        assert_eq!(scroll_progress(VIEWPORT + 500.0, SECTION, VIEWPORT), 0.0);
    }

    #[test]
    fn progress_is_one_after_the_section_leaves() {
        assert_eq!(scroll_progress(-SECTION, SECTION, VIEWPORT), 1.0);
        assert_eq!(scroll_progress(-5000.0, SECTION, VIEWPORT), 1.0);
    }

    #[test]
    fn progress_is_half_when_section_is_centered_in_travel() {
        // travel = 1400, halfway = top at 800 - 700
        assert_eq!(scroll_progress(100.0, SECTION, VIEWPORT), 0.5);
    }

    #[test]
    fn degenerate_geometry_yields_zero() {
        assert_eq!(scroll_progress(0.0, 0.0, 0.0), 0.0);
        assert_eq!(scroll_progress(f64::NAN, SECTION, VIEWPORT), 0.0);
    }

    #[test]
    fn demo_card_starts_transparent() {
        assert_eq!(INITIAL_PROGRESS, 0.0);
        assert_eq!(fade_in_opacity(INITIAL_PROGRESS), 0.0);
    }

    #[test]
    fn opacity_is_zero_at_start_and_one_from_midpoint() {
        assert_eq!(fade_in_opacity(0.0), 0.0);
        assert_eq!(fade_in_opacity(0.25), 0.5);
        assert_eq!(fade_in_opacity(0.5), 1.0);
        assert_eq!(fade_in_opacity(0.75), 1.0);
        assert_eq!(fade_in_opacity(1.0), 1.0);
    }

    #[test]
    fn opacity_is_clamped_outside_the_region() {
        assert_eq!(fade_in_opacity(-0.3), 0.0);
        assert_eq!(fade_in_opacity(1.7), 1.0);
        assert_eq!(fade_in_opacity(f64::NAN), 0.0);
    }

    #[test]
    fn opacity_never_decreases_while_scrolling_down() {
        let mut last = 0.0;
        // Scrolling down moves the section's top edge upwards.
        let mut top = VIEWPORT + 100.0;
        while top > -SECTION - 100.0 {
            let opacity = fade_in_opacity(scroll_progress(top, SECTION, VIEWPORT));
            assert!(opacity >= last, "opacity dropped at top={top}: {opacity} < {last}");
            assert!((0.0..=1.0).contains(&opacity));
            last = opacity;
            top -= 7.5;
        }
        assert_eq!(last, 1.0);
    }

    #[test]
    fn interpolate_handles_collapsed_input_range() {
        assert_eq!(interpolate(0.1, (0.5, 0.5), (0.0, 1.0)), 0.0);
        assert_eq!(interpolate(0.5, (0.5, 0.5), (0.0, 1.0)), 1.0);
    }
}

use log::debug;
use yew::prelude::*;

use crate::config;
use crate::viewport::{self, WindowListener};

/// One-shot visibility latch for a revealed block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Visible,
}

impl RevealState {
    /// Next state after checking whether the block is in the viewport.
    /// Once visible, it stays visible.
    pub fn observe(self, in_view: bool) -> Self {
        match self {
            RevealState::Visible => RevealState::Visible,
            RevealState::Hidden if in_view => RevealState::Visible,
            RevealState::Hidden => RevealState::Hidden,
        }
    }

    pub fn is_visible(self) -> bool {
        self == RevealState::Visible
    }
}

/// True when any part of the `[top, bottom)` span overlaps the viewport.
pub fn is_in_viewport(top: f64, bottom: f64, viewport_height: f64) -> bool {
    top < viewport_height && bottom > 0.0
}

/// Where a revealed block slides in from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealFrom {
    #[default]
    Below,
    Left,
}

pub fn reveal_style(state: RevealState, from: RevealFrom, delay_secs: f64) -> String {
    let offset = config::REVEAL_OFFSET_PX;
    let (opacity, transform) = if state.is_visible() {
        (1, "translate(0, 0)".to_string())
    } else {
        match from {
            RevealFrom::Below => (0, format!("translate(0, {offset}px)")),
            RevealFrom::Left => (0, format!("translate(-{offset}px, 0)")),
        }
    };
    let duration = config::REVEAL_DURATION_SECS;
    format!(
        "opacity: {opacity}; transform: {transform}; transition: opacity {duration}s ease-out {delay_secs}s, transform {duration}s ease-out {delay_secs}s;"
    )
}

/// Whether a block in this state still has to watch the viewport.
pub fn needs_listeners(state: RevealState) -> bool {
    !state.is_visible()
}

#[hook]
pub fn use_reveal(node: NodeRef) -> RevealState {
    let state = use_state_eq(RevealState::default);

    // Re-run when the latch flips so the listeners are dropped once visible.
    {
        let deps = (node, *state);
        let state = state.clone();
        use_effect_with_deps(
            move |(node, current): &(NodeRef, RevealState)| {
                let mut listener = None;
                if needs_listeners(*current) {
                    let node = node.clone();
                    let current = *current;
                    let check = move || {
                        let (Some(rect), Some(viewport_height)) =
                            (viewport::element_rect(&node), viewport::height())
                        else {
                            return;
                        };
                        let next = current.observe(is_in_viewport(rect.top(), rect.bottom(), viewport_height));
                        if next != current {
                            debug!("Revealing block at top={}", rect.top());
                            state.set(next);
                        }
                    };

                    // Initial check
                    check();
                    listener = WindowListener::new(&["scroll", "resize"], check);
                }
                move || drop(listener)
            },
            deps,
        );
    }

    *state
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    /// Seconds to wait before the transition starts.
    #[prop_or_default]
    pub delay: f64,
    #[prop_or_default]
    pub from: RevealFrom,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let state = use_reveal(node.clone());

    html! {
        <div
            ref={node}
            class={classes!("reveal", props.class.clone(), state.is_visible().then_some("is-visible"))}
            style={reveal_style(state, props.from, props.delay)}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        assert_eq!(RevealState::default(), RevealState::Hidden);
        assert!(!RevealState::default().is_visible());
    }

    #[test]
    fn stays_hidden_until_in_view() {
        let state = RevealState::Hidden.observe(false).observe(false);
        assert_eq!(state, RevealState::Hidden);
    }

    #[test]
    fn reveals_at_most_once_and_never_reverts() {
        let sightings = [false, false, true, false, true, false, false];
        let mut state = RevealState::Hidden;
        let mut transitions = 0;
        for in_view in sightings {
            let next = state.observe(in_view);
            if next != state {
                transitions += 1;
                assert_eq!((state, next), (RevealState::Hidden, RevealState::Visible));
            }
            state = next;
        }
        assert_eq!(transitions, 1);
        assert!(state.is_visible());
    }

    #[test]
    fn stops_watching_once_visible() {
        assert!(needs_listeners(RevealState::Hidden));
        let revealed = RevealState::Hidden.observe(true);
        assert!(!needs_listeners(revealed));
        assert!(!needs_listeners(revealed.observe(false)));
    }

    #[test]
    fn viewport_overlap() {
        let viewport = 800.0;
        assert!(is_in_viewport(100.0, 400.0, viewport));
        assert!(is_in_viewport(-100.0, 50.0, viewport));
        assert!(is_in_viewport(799.0, 1200.0, viewport));
        assert!(!is_in_viewport(800.0, 1200.0, viewport));
        assert!(!is_in_viewport(-400.0, 0.0, viewport));
    }

    #[test]
    fn hidden_style_offsets_by_direction() {
        let below = reveal_style(RevealState::Hidden, RevealFrom::Below, 0.0);
        assert!(below.starts_with("opacity: 0;"));
        assert!(below.contains("translate(0, 20px)"));

        let left = reveal_style(RevealState::Hidden, RevealFrom::Left, 0.0);
        assert!(left.contains("translate(-20px, 0)"));
    }

    #[test]
    fn visible_style_carries_delay() {
        let style = reveal_style(RevealState::Visible, RevealFrom::Below, 0.2);
        assert!(style.starts_with("opacity: 1;"));
        assert!(style.contains("translate(0, 0)"));
        assert!(style.contains("ease-out 0.2s"));
    }
}

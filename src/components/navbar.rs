use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::{Event, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::config;
use crate::viewport::{self, WindowListener};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem { label: "PROBLEMA", href: "#problem" },
    NavItem { label: "SOLUCIÓN", href: "#solution" },
    NavItem { label: "CASOS", href: "#cases" },
    NavItem { label: "CONTACTO", href: "#contact" },
];

pub const CTA_LABEL: &str = "ACCESO CLIENTES";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    /// The burger/close control was tapped.
    Toggle,
    /// A link in the mobile list was followed.
    LinkActivated,
    /// The viewport grew into the desktop layout.
    ViewportWidened,
}

impl MenuAction {
    pub fn apply(self, open: bool) -> bool {
        match self {
            MenuAction::Toggle => !open,
            MenuAction::LinkActivated | MenuAction::ViewportWidened => false,
        }
    }
}

/// Whether the nav bar uses its denser background at this scroll offset.
pub fn nav_is_scrolled(scroll_y: f64) -> bool {
    scroll_y > config::NAV_SCROLLED_THRESHOLD_PX
}

/// One row of the expanded mobile panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEntry {
    Link(NavItem),
    Cta(&'static str),
}

/// Rows of the expanded mobile panel, in display order.
pub fn mobile_menu_entries() -> impl Iterator<Item = MenuEntry> {
    NAV_ITEMS
        .into_iter()
        .map(MenuEntry::Link)
        .chain(std::iter::once(MenuEntry::Cta(CTA_LABEL)))
}

/// Mount state of the mobile panel. A closing panel stays mounted while its
/// exit animation plays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelPhase {
    Hidden,
    Open,
    Closing,
}

impl PanelPhase {
    pub fn from_state(open: bool, closing: bool) -> Self {
        match (open, closing) {
            (true, _) => PanelPhase::Open,
            (false, true) => PanelPhase::Closing,
            (false, false) => PanelPhase::Hidden,
        }
    }
}

#[derive(Properties, PartialEq)]
struct NavLinkProps {
    href: &'static str,
    label: &'static str,
    #[prop_or_default]
    onclick: Option<Callback<MouseEvent>>,
}

#[function_component(NavLink)]
fn nav_link(props: &NavLinkProps) -> Html {
    html! {
        <a href={props.href} class="nav-link" onclick={props.onclick.clone()}>
            <span class="nav-link-label">{ props.label }</span>
            <span class="nav-link-underline"></span>
        </a>
    }
}

#[derive(Properties, PartialEq)]
struct MobilePanelProps {
    closing: bool,
    /// Fired when one of the panel's links is followed.
    onclick: Callback<MouseEvent>,
}

#[function_component(MobilePanel)]
fn mobile_panel(props: &MobilePanelProps) -> Html {
    html! {
        <div class={classes!("nav-mobile-panel", props.closing.then_some("closing"))}>
            { for mobile_menu_entries().map(|entry| match entry {
                MenuEntry::Link(item) => html! {
                    <NavLink
                        key={item.label}
                        href={item.href}
                        label={item.label}
                        onclick={props.onclick.clone()}
                    />
                },
                MenuEntry::Cta(label) => html! {
                    <button key={label} class="nav-cta nav-cta-mobile">{ label }</button>
                },
            }) }
        </div>
    }
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu_open = use_state(|| false);
    let closing = use_state_eq(|| false);
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let scroll_callback = move || {
                    if let Some(scroll_y) = viewport::scroll_y() {
                        is_scrolled.set(nav_is_scrolled(scroll_y));
                    }
                };

                // Restored scroll positions and deep links start below the fold.
                scroll_callback();

                let listener = WindowListener::new(&["scroll"], scroll_callback);
                move || drop(listener)
            },
            (),
        );
    }

    {
        let closing_setter = closing.clone();
        use_effect_with_deps(
            move |is_closing: &bool| {
                let timeout = is_closing.then(|| {
                    Timeout::new(config::MENU_EXIT_MS, move || closing_setter.set(false))
                });
                move || drop(timeout)
            },
            *closing,
        );
    }

    let dispatch = {
        let menu_open = menu_open.clone();
        let closing = closing.clone();
        Callback::from(move |action: MenuAction| {
            let next = action.apply(*menu_open);
            if next != *menu_open {
                debug!("Menu {:?}: open={}", action, next);
                closing.set(!next);
                menu_open.set(next);
            }
        })
    };

    {
        let dispatch = dispatch.clone();
        use_event_with_window("resize", move |_: Event| {
            if viewport::width().map_or(false, |w| w >= config::MOBILE_BREAKPOINT_PX) {
                dispatch.emit(MenuAction::ViewportWidened);
            }
        });
    }

    let toggle_menu = dispatch.reform(|_: MouseEvent| MenuAction::Toggle);

    // Fragment navigation is left to the browser; only the panel collapses.
    let close_menu = dispatch.reform(|_: MouseEvent| MenuAction::LinkActivated);

    let open = *menu_open;

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then_some("scrolled"))}>
            <div class="nav-content">
                <div class="nav-brand">
                    <img src={config::LOGO_PATH} alt={config::BRAND_NAME} class="nav-logo" />
                    <div class="nav-status">
                        <span class="nav-status-dot">{"●"}</span>
                        {" SYSTEM ONLINE"}
                    </div>
                </div>

                <div class="nav-desktop">
                    { for NAV_ITEMS.iter().map(|item| html! {
                        <NavLink key={item.label} href={item.href} label={item.label} />
                    }) }
                    <button class="nav-cta">{ CTA_LABEL }</button>
                </div>

                <button
                    class="nav-toggle"
                    aria-label="Menú"
                    aria-expanded={open.to_string()}
                    onclick={toggle_menu}
                >
                    <Icon kind={if open { IconKind::Close } else { IconKind::Menu }} size={24} />
                </button>
            </div>

            {
                match PanelPhase::from_state(open, *closing) {
                    PanelPhase::Open => html! { <MobilePanel closing={false} onclick={close_menu} /> },
                    PanelPhase::Closing => html! { <MobilePanel closing={true} onclick={close_menu} /> },
                    PanelPhase::Hidden => html! {},
                }
            }

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    padding: 1rem;
                    background: rgba(10, 11, 15, 0.8);
                    backdrop-filter: blur(12px);
                    border-bottom: 1px solid rgba(42, 45, 56, 0.3);
                    transition: background 0.3s ease, box-shadow 0.3s ease;
                }
                .top-nav.scrolled {
                    background: rgba(10, 11, 15, 0.95);
                    box-shadow: 0 4px 24px rgba(0, 0, 0, 0.6);
                }
                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .nav-brand {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }
                .nav-logo {
                    height: 2rem;
                    width: auto;
                    object-fit: contain;
                }
                .nav-status {
                    display: none;
                    align-items: center;
                    gap: 0.5rem;
                    font-family: var(--font-mono);
                    font-size: 10px;
                    color: var(--color-hud-text);
                    opacity: 0.7;
                    border-left: 1px solid var(--color-hud-gray);
                    padding-left: 1rem;
                }
                .nav-status-dot {
                    color: var(--color-laser-red);
                    animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
                }
                .nav-desktop {
                    display: none;
                    align-items: center;
                    gap: 2rem;
                }
                .nav-link {
                    position: relative;
                    font-family: var(--font-mono);
                    font-size: 0.875rem;
                    letter-spacing: 0.05em;
                    color: var(--color-hud-text);
                    text-decoration: none;
                    transition: color 0.2s;
                }
                .nav-link:hover {
                    color: #ffffff;
                }
                .nav-link-underline {
                    position: absolute;
                    bottom: -0.25rem;
                    left: 0;
                    width: 0;
                    height: 1px;
                    background: var(--color-laser-red);
                    transition: width 0.3s;
                }
                .nav-link:hover .nav-link-underline {
                    width: 100%;
                }
                .nav-cta {
                    padding: 0.5rem 1rem;
                    font-size: 0.75rem;
                    font-weight: 700;
                    background: var(--color-laser-red);
                    color: #ffffff;
                    border: none;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    cursor: pointer;
                    clip-path: polygon(10px 0, 100% 0, 100% calc(100% - 10px), calc(100% - 10px) 100%, 0 100%, 0 10px);
                    transition: background 0.2s;
                }
                .nav-cta:hover {
                    background: #dc2626;
                }
                .nav-toggle {
                    background: none;
                    border: none;
                    color: #ffffff;
                    cursor: pointer;
                    padding: 0;
                }
                .nav-mobile-panel {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    padding: 1rem;
                    background: var(--color-void);
                    border-bottom: 1px solid var(--color-hud-gray);
                    overflow: hidden;
                    animation: menuOpen 0.2s ease-out;
                }
                .nav-mobile-panel.closing {
                    pointer-events: none;
                    animation: menuClose 0.2s ease-in forwards;
                }
                .nav-cta-mobile {
                    width: 100%;
                    padding: 0.75rem;
                    margin-top: 0.5rem;
                    clip-path: none;
                }
                @keyframes menuOpen {
                    from { opacity: 0; max-height: 0; }
                    to { opacity: 1; max-height: 24rem; }
                }
                @keyframes menuClose {
                    from { opacity: 1; max-height: 24rem; }
                    to { opacity: 0; max-height: 0; padding-top: 0; padding-bottom: 0; }
                }
                @media (min-width: 640px) {
                    .nav-status { display: flex; }
                }
                @media (min-width: 768px) {
                    .top-nav { padding: 1rem 2rem; }
                    .nav-logo { height: 2.5rem; }
                    .nav-desktop { display: flex; }
                    .nav-toggle, .nav-mobile-panel { display: none; }
                }
                "#}
            </style>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapsed_on_load() {
        assert_eq!(PanelPhase::from_state(false, false), PanelPhase::Hidden);
    }

    #[test]
    fn single_tap_expands_with_all_links_and_cta() {
        let open = MenuAction::Toggle.apply(false);
        assert_eq!(PanelPhase::from_state(open, false), PanelPhase::Open);

        let entries: Vec<MenuEntry> = mobile_menu_entries().collect();
        let links: Vec<NavItem> = entries
            .iter()
            .filter_map(|entry| match entry {
                MenuEntry::Link(item) => Some(*item),
                MenuEntry::Cta(_) => None,
            })
            .collect();
        assert_eq!(links, NAV_ITEMS.to_vec());
        assert_eq!(entries.len(), 5);
        assert_eq!(entries.last(), Some(&MenuEntry::Cta("ACCESO CLIENTES")));
    }

    #[test]
    fn closing_panel_stays_mounted_until_exit_finishes() {
        let open = MenuAction::LinkActivated.apply(true);
        assert_eq!(PanelPhase::from_state(open, true), PanelPhase::Closing);
        assert_eq!(PanelPhase::from_state(open, false), PanelPhase::Hidden);
        // Reopening mid-exit shows the panel again.
        assert_eq!(PanelPhase::from_state(true, true), PanelPhase::Open);
    }

    #[test]
    fn toggle_parity() {
        for start in [false, true] {
            for taps in 0..8 {
                let end = (0..taps).fold(start, |open, _| MenuAction::Toggle.apply(open));
                if taps % 2 == 0 {
                    assert_eq!(end, start, "{taps} taps from {start}");
                } else {
                    assert_eq!(end, !start, "{taps} taps from {start}");
                }
            }
        }
    }

    #[test]
    fn following_a_link_collapses_the_menu() {
        for _ in &NAV_ITEMS {
            let open = MenuAction::Toggle.apply(false);
            assert!(!MenuAction::LinkActivated.apply(open));
        }
        assert!(!MenuAction::LinkActivated.apply(false));
    }

    #[test]
    fn widening_the_viewport_collapses_the_menu() {
        assert!(!MenuAction::ViewportWidened.apply(true));
        assert!(!MenuAction::ViewportWidened.apply(false));
    }

    #[test]
    fn nav_background_follows_scroll_offset() {
        assert!(!nav_is_scrolled(0.0));
        assert!(!nav_is_scrolled(config::NAV_SCROLLED_THRESHOLD_PX));
        // A restored position deep in the page counts as scrolled immediately.
        assert!(nav_is_scrolled(2400.0));
    }

    #[test]
    fn nav_items_are_fragment_anchors() {
        for item in &NAV_ITEMS {
            assert!(item.href.starts_with('#'), "{} -> {}", item.label, item.href);
        }
    }
}

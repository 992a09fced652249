use yew::prelude::*;

use crate::reveal::{Reveal, RevealFrom};

#[derive(Properties, PartialEq)]
pub struct HudCardProps {
    /// Tag rendered over the top border.
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub delay: f64,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(HudCard)]
pub fn hud_card(props: &HudCardProps) -> Html {
    html! {
        <Reveal
            class={classes!("hud-panel", "hud-corners", props.class.clone())}
            delay={props.delay}
            from={RevealFrom::Below}
        >
            {
                if let Some(title) = &props.title {
                    html! { <div class="hud-tag">{ title.clone() }</div> }
                } else {
                    html! {}
                }
            }
            { for props.children.iter() }
        </Reveal>
    }
}

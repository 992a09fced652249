use yew::prelude::*;

use crate::reveal::{Reveal, RevealFrom};

#[derive(Properties, PartialEq)]
pub struct SectionTitleProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
}

#[function_component(SectionTitle)]
pub fn section_title(props: &SectionTitleProps) -> Html {
    html! {
        <div class="section-title">
            <Reveal class={classes!("section-kicker")} from={RevealFrom::Left}>
                <span class="kicker-line"></span>
                <span class="kicker-text">{"SYSTEM: ALERT"}</span>
            </Reveal>
            <h2>{ props.title.clone() }</h2>
            {
                if let Some(subtitle) = &props.subtitle {
                    html! { <p class="section-subtitle">{ subtitle.clone() }</p> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TacticalButtonProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub full_width: bool,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(TacticalButton)]
pub fn tactical_button(props: &TacticalButtonProps) -> Html {
    html! {
        <button class={classes!("btn-tactical", props.full_width.then_some("full-width"), props.class.clone())}>
            <span class="btn-tactical-label">
                { for props.children.iter() }
            </span>
        </button>
    }
}

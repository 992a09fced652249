use log::info;
use yew::prelude::*;

mod config;
mod reveal;
mod scroll;
mod viewport;

mod components {
    pub mod hud_card;
    pub mod icons;
    pub mod navbar;
    pub mod section_title;
    pub mod tactical_button;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! {
        <Landing />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {}", config::BRAND_NAME);
    yew::Renderer::<App>::new().render();
}

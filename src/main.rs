use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod carousel {
    pub mod controller;
    pub mod geometry;
    pub mod manual;
    pub mod mapper;
    pub mod pin;
    pub mod surface;
}
mod effects {
    pub mod flicker;
}
mod data {
    pub mod characters;
    pub mod team;
}
mod components {
    pub mod character_scroll;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod team;
    pub mod world;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

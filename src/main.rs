use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod hooks;
mod styles;
mod state {
    pub mod contact;
    pub mod faq;
    pub mod in_view;
    pub mod nav;
}
mod components {
    pub mod footer;
    pub mod navbar;
}
mod pages {
    pub mod landing;
    pub mod home {
        pub mod contact;
        pub mod faq;
        pub mod hero;
        pub mod how_it_works;
        pub mod reviews;
        pub mod services;
        pub mod why_choose_us;
    }
}

use components::{footer::Footer, navbar::Navbar};
use pages::landing::{ContactPage, Home, NotFound, ServicesPage};

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/services")]
    Services,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Services => {
            info!("Rendering Services page");
            html! { <ServicesPage /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <ContactPage /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <style>{styles::BASE_CSS}</style>
            <Navbar />
            <main class="site-main">
                <Switch<Route> render={switch} />
            </main>
            <Footer />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting {}", config::BUSINESS_NAME);
    yew::Renderer::<App>::new().render();
}

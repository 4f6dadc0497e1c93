use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::content::{nav_links, LinkTarget, NavLink};
use crate::state::nav::NavScrollState;
use crate::Route;

pub enum NavAction {
    Scrolled(f64),
    OpenDrawer,
    CloseDrawer,
}

impl Reducible for NavScrollState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            NavAction::Scrolled(y) => next.on_scroll(y),
            NavAction::OpenDrawer => next.open_drawer(),
            NavAction::CloseDrawer => next.close_drawer(),
        }
        if next.visible != self.visible {
            debug!("header {} at y={}", if next.visible { "shown" } else { "hidden" }, next.last_scroll_y);
        }
        next.into()
    }
}

fn render_link(link: &NavLink, class: &'static str, onclick: Option<Callback<MouseEvent>>) -> Html {
    match &link.target {
        LinkTarget::Route(route) => html! {
            <span onclick={onclick}>
                <Link<Route> to={route.clone()} classes={class}>
                    {link.label}
                </Link<Route>>
            </span>
        },
        LinkTarget::Href(href) => html! {
            <a href={*href} class={class} onclick={onclick}>{link.label}</a>
        },
    }
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let nav = use_reducer(NavScrollState::default);

    {
        let dispatcher = nav.dispatcher();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();

                let scroll_callback = Closure::wrap(Box::new({
                    let window = window.clone();
                    move || {
                        if let Some(y) = window.as_ref().and_then(|w| w.scroll_y().ok()) {
                            dispatcher.dispatch(NavAction::Scrolled(y));
                        }
                    }
                }) as Box<dyn FnMut()>);

                if let Some(window) = &window {
                    if let Err(e) = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref()) {
                        warn!("Could not attach scroll listener, header stays visible: {:?}", e);
                    }
                }

                move || {
                    if let Some(window) = &window {
                        if let Err(e) = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref()) {
                            warn!("Could not detach scroll listener: {:?}", e);
                        }
                    }
                }
            },
            (),
        );
    }

    let open_drawer = {
        let nav = nav.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            nav.dispatch(NavAction::OpenDrawer);
        })
    };

    let close_drawer = {
        let nav = nav.clone();
        Callback::from(move |_: MouseEvent| {
            nav.dispatch(NavAction::CloseDrawer);
        })
    };

    let links = nav_links();

    html! {
        <>
            <style>{NAVBAR_CSS}</style>
            <header class={classes!(
                "site-header",
                (!nav.visible).then(|| "hidden"),
                nav.scrolled.then(|| "scrolled"),
            )}>
                <div class="header-accent"></div>
                <div class="header-content">
                    <Link<Route> to={Route::Home} classes="header-logo">
                        <img src={config::LOGO_SRC} alt="Tomsburg Surveillance Logo" class="logo-mark" />
                        <span class="logo-words">
                            <span class="logo-name">{"TOMSBURG"}</span>
                            <span class="logo-sub">{"Surveillance"}</span>
                        </span>
                    </Link<Route>>

                    <nav class="header-links">
                        { for links.iter().map(|link| render_link(link, "header-link", None)) }
                    </nav>

                    <div class="header-actions">
                        <Link<Route> to={Route::Contact} classes="header-cta">
                            {"Get a Quote"}
                        </Link<Route>>
                        <button class="burger-menu" aria-label="Open navigation menu" onclick={open_drawer}>
                            <span></span>
                            <span></span>
                            <span></span>
                        </button>
                    </div>
                </div>
            </header>

            <div
                class={classes!("drawer-backdrop", nav.drawer_open.then(|| "open"))}
                onclick={close_drawer.clone()}
            ></div>
            <aside class={classes!("drawer", nav.drawer_open.then(|| "open"))} aria-hidden={(!nav.drawer_open).to_string()}>
                <div class="drawer-header">
                    <span class="logo-name">{"TOMSBURG"}</span>
                    <button class="drawer-close" aria-label="Close menu" onclick={close_drawer.clone()}>{"✕"}</button>
                </div>
                <nav class="drawer-links">
                    { for links.iter().map(|link| render_link(link, "drawer-link", Some(close_drawer.clone()))) }
                </nav>
                <div class="drawer-footer">
                    <span onclick={close_drawer.clone()}>
                        <Link<Route> to={Route::Contact} classes="drawer-cta">
                            {"Get a Free Quote"}
                        </Link<Route>>
                    </span>
                    <p class="drawer-note">{"Licensed & Insured · Serving the Tri-State Area"}</p>
                </div>
            </aside>
        </>
    }
}

const NAVBAR_CSS: &str = r#"
.site-header {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 50;
    background: #ffffff;
    border-bottom: 1px solid transparent;
    transition: transform 0.3s ease-in-out, background 0.3s ease, box-shadow 0.3s ease;
}

.site-header.hidden {
    transform: translateY(-100%);
}

.site-header.scrolled {
    background: rgba(255, 255, 255, 0.95);
    backdrop-filter: blur(12px);
    box-shadow: 0 2px 20px rgba(28, 28, 31, 0.10);
    border-bottom-color: #F4F5F7;
}

.header-accent {
    height: 3px;
    background: #D92B2B;
}

.header-content {
    max-width: 1280px;
    margin: 0 auto;
    padding: 0 1.5rem;
    height: 72px;
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.header-logo {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    text-decoration: none;
}

.logo-mark {
    width: 44px;
    height: 44px;
    object-fit: contain;
}

.logo-words {
    display: flex;
    flex-direction: column;
    line-height: 1;
}

.logo-name {
    font-weight: 900;
    letter-spacing: 0.12em;
    color: #1C1C1F;
}

.logo-sub {
    font-size: 0.7rem;
    letter-spacing: 0.3em;
    text-transform: uppercase;
    color: #D92B2B;
}

.header-links {
    display: flex;
    gap: 2rem;
}

.header-link {
    color: #1C1C1F;
    text-decoration: none;
    font-weight: 600;
    font-size: 0.9rem;
    position: relative;
}

.header-link:hover {
    color: #D92B2B;
}

.header-actions {
    display: flex;
    align-items: center;
    gap: 1rem;
}

.header-cta,
.drawer-cta {
    background: #D92B2B;
    color: #ffffff;
    text-decoration: none;
    font-weight: 800;
    text-transform: uppercase;
    font-size: 0.8rem;
    letter-spacing: 0.05em;
    padding: 0.75rem 1.25rem;
    border-radius: 10px;
}

.burger-menu {
    display: none;
    flex-direction: column;
    gap: 5px;
    background: none;
    border: none;
    cursor: pointer;
}

.burger-menu span {
    width: 24px;
    height: 2px;
    background: #1C1C1F;
}

.drawer-backdrop {
    position: fixed;
    inset: 0;
    background: rgba(28, 28, 31, 0.45);
    opacity: 0;
    pointer-events: none;
    transition: opacity 0.3s ease;
    z-index: 60;
}

.drawer-backdrop.open {
    opacity: 1;
    pointer-events: auto;
}

.drawer {
    position: fixed;
    top: 0;
    right: 0;
    bottom: 0;
    width: min(320px, 85vw);
    background: #ffffff;
    transform: translateX(100%);
    transition: transform 0.3s ease;
    z-index: 70;
    display: flex;
    flex-direction: column;
}

.drawer.open {
    transform: translateX(0);
}

.drawer-header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 1.25rem 1.5rem;
    border-bottom: 1px solid #F4F5F7;
}

.drawer-close {
    background: none;
    border: none;
    font-size: 1.25rem;
    cursor: pointer;
}

.drawer-links {
    display: flex;
    flex-direction: column;
    padding: 1rem 1.5rem;
    gap: 0.25rem;
}

.drawer-link {
    display: block;
    padding: 0.9rem 0;
    color: #1C1C1F;
    text-decoration: none;
    font-weight: 700;
    border-bottom: 1px solid #F4F5F7;
}

.drawer-footer {
    margin-top: auto;
    padding: 1.5rem;
    text-align: center;
}

.drawer-note {
    margin-top: 1rem;
    font-size: 0.75rem;
    color: #6B7280;
}

@media (max-width: 900px) {
    .header-links,
    .header-cta {
        display: none;
    }

    .burger-menu {
        display: flex;
    }
}
"#;

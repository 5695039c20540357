use yew::prelude::*;
use yew_router::prelude::*;
use yew_hooks::prelude::*;
use log::info;
use web_sys::MouseEvent;

mod config;
mod content;
mod scroll_jacking;
mod hooks {
    pub mod in_view;
}
mod components {
    pub mod about;
    pub mod contact;
    pub mod faq;
    pub mod footer;
    pub mod hero;
    pub mod process;
    pub mod projects;
    pub mod services;
    pub mod toast;
}
mod pages {
    pub mod index;
    pub mod not_found;
}

use components::footer::Footer;
use content::{OWNER_NAME, SECTION_LINKS, SOCIAL_LINKS};
use pages::{index::Index, not_found::NotFound};


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
            html! { <Index /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

/// Nav bar gets a solid background once the page has moved past the hero's top edge.
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > config::NAV_SCROLL_THRESHOLD
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let scrolled = is_scrolled(scroll_y);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo gradient-text">
                    {OWNER_NAME}
                </Link<Route>>

                <button class="burger-menu" aria-label="Toggle Menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for SECTION_LINKS.iter().map(|(label, anchor)| html! {
                        <a href={*anchor} class="nav-link" onclick={close_menu.clone()}>{*label}</a>
                    }) }
                    <div class="nav-social">
                        { for SOCIAL_LINKS.iter().map(|(label, href)| html! {
                            <a href={*href} target="_blank" rel="noopener noreferrer" class="social-link">{*label}</a>
                        }) }
                    </div>
                    <a href="#contact" class="nav-cta glow-button" onclick={close_menu.clone()}>
                        {"Project request"}
                    </a>
                </div>
            </div>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
            <Footer />
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_turns_solid_past_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
    }
}

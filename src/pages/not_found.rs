use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let location = use_location();
    let path = location.map(|l| l.path().to_string()).unwrap_or_default();

    use_effect_with_deps(
        move |path: &String| {
            gloo_console::error!(format!(
                "404 Error: User attempted to access non-existent route: {}",
                path
            ));
            || ()
        },
        path,
    );

    html! {
        <div class="not-found">
            <div class="not-found-content">
                <h1 class="gradient-text">{"404"}</h1>
                <p class="lead">{"Oops! This page doesn't exist."}</p>
                <p>
                    {"The page you're looking for might have been removed, had its name changed, or is temporarily unavailable."}
                </p>
                <Link<Route> to={Route::Home} classes="glow-button">
                    {"Back to Home"}
                </Link<Route>>
            </div>
            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: #f9fafb;
                    padding: 0 1rem;
                }
                .not-found-content { text-align: center; max-width: 28rem; }
                .not-found h1 { font-size: 4.5rem; font-weight: 700; margin-bottom: 1rem; }
                .not-found .lead { font-size: 1.5rem; color: #4b5563; margin-bottom: 2rem; }
                .not-found p { color: #6b7280; margin-bottom: 2rem; }
                "#}
            </style>
        </div>
    }
}

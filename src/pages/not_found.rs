use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"This page doesn't exist."}</p>
            <Link<Route> to={Route::Home} classes="forward-link">
                {"Back to the studio"}
            </Link<Route>>
            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    background: #000;
                    color: #fff;
                    font-family: system-ui, -apple-system, sans-serif;
                }
                .not-found h1 {
                    font-size: 6rem;
                    margin: 0;
                }
                .forward-link {
                    color: #60a5fa;
                }
                "#}
            </style>
        </div>
    }
}

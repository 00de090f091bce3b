//! Root component

use yew::prelude::*;

use crate::components::Footer;

/// The root app component
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <div class={classes!("page")}>
            <main class={classes!("page__content")} />
            <Footer />
        </div>
    }
}

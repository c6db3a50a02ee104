use yew::prelude::*;

use crate::services::date_utils::current_year;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer">
            <div class="container">
                <h2 class="footer-brand">{"Invoice Manager"}</h2>
                <p class="footer-tagline">{"Every invoice, one place"}</p>
                <p class="footer-copyright">
                    {format!("© {} Invoice Manager. All rights reserved.", current_year())}
                </p>
            </div>
        </footer>
    }
}

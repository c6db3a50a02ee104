use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HomePageProps {
    pub on_open_dashboard: Callback<()>,
}

/// Landing view with a single call to action
#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let onclick = {
        let on_open_dashboard = props.on_open_dashboard.clone();
        Callback::from(move |_: MouseEvent| on_open_dashboard.emit(()))
    };

    html! {
        <div class="home-page">
            <div class="home-content">
                <h1 class="home-title">{"Invoice Manager"}</h1>
                <p class="home-tagline">
                    {"Manage all your invoices easily in one place. Track payments, \
                      monitor overdue invoices, and keep your business finances organized."}
                </p>
                <button class="home-cta" onclick={onclick}>
                    {"Go to Dashboard"}
                    <span class="home-cta-arrow">{"→"}</span>
                </button>
            </div>
        </div>
    }
}

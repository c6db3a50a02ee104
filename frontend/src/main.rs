use log::LevelFilter;
use shared::DashboardConfig;
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::{DashboardPage, HomePage};
use hooks::InvoiceProvider;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Route {
    Home,
    Dashboard,
}

#[derive(Properties, PartialEq)]
struct AppProps {
    config: DashboardConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let route = use_state(|| Route::Home);

    let navigate = |target: Route| {
        let route = route.clone();
        Callback::from(move |_: ()| {
            log::debug!("Navigating to {:?}", target);
            route.set(target);
        })
    };

    // The provider sits above both views so invoices survive navigation
    html! {
        <InvoiceProvider config={props.config.clone()}>
            {match *route {
                Route::Home => html! { <HomePage on_open_dashboard={navigate(Route::Dashboard)} /> },
                Route::Dashboard => html! { <DashboardPage on_back={navigate(Route::Home)} /> },
            }}
        </InvoiceProvider>
    }
}

fn main() {
    let config = match services::config::load_config() {
        Ok(config) => {
            services::logging::init(config.level_filter().unwrap_or(LevelFilter::Info));
            config
        }
        Err(error) => {
            services::logging::init(LevelFilter::Info);
            log::warn!("{error}, using default settings");
            DashboardConfig::default()
        }
    };
    log::info!("Starting invoice dashboard");

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}

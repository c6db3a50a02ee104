use yew::prelude::*;

use super::create_invoice_modal::CreateInvoiceModal;
use super::footer::Footer;
use super::header::Header;
use super::income_chart::IncomeChart;
use super::invoices::InvoicesList;
use super::stats_cards::StatsCards;
use super::time_period_tabs::TimePeriodTabs;
use crate::hooks::use_invoices;

#[derive(Properties, PartialEq)]
pub struct DashboardPageProps {
    pub on_back: Callback<()>,
}

#[function_component(DashboardPage)]
pub fn dashboard_page(props: &DashboardPageProps) -> Html {
    let invoices = use_invoices();
    let state = invoices.state;
    let actions = invoices.actions;
    let currency_symbol = AttrValue::from(state.currency_symbol.clone());

    html! {
        <div class="dashboard-page">
            <Header on_back={props.on_back.clone()} />

            <main class="container dashboard-main">
                <CreateInvoiceModal on_create={actions.add_invoice.clone()} />
                <p class="upload-hint">
                    {"Or "}
                    <span class="upload-link">{"Upload"}</span>
                    {" an existing invoice and set payment reminder"}
                </p>

                <TimePeriodTabs
                    selected_period={state.selected_period}
                    on_period_change={actions.set_selected_period.clone()}
                />

                <StatsCards stats={state.stats.clone()} currency_symbol={currency_symbol.clone()} />

                <IncomeChart data={state.chart_data.clone()} currency_symbol={currency_symbol.clone()} />

                <InvoicesList
                    invoices={state.invoices.clone()}
                    currency_symbol={currency_symbol}
                    on_update={actions.update_invoice.clone()}
                    on_delete={actions.delete_invoice.clone()}
                />
            </main>

            <Footer />
        </div>
    }
}

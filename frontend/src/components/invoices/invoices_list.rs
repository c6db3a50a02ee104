use shared::formatting::{format_currency_with, format_date};
use shared::{Invoice, InvoiceStatus, InvoiceUpdate};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use super::edit_invoice_modal::EditInvoiceModal;
use crate::components::forms::invoice_form_fields::StatusSelect;
use crate::services::date_utils::today_utc;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct InvoicesListProps {
    pub invoices: Vec<Invoice>,
    pub currency_symbol: AttrValue,
    pub on_update: Callback<(String, InvoiceUpdate)>,
    pub on_delete: Callback<String>,
}

/// Every invoice in the store, newest first, regardless of the selected period
#[function_component(InvoicesList)]
pub fn invoices_list(props: &InvoicesListProps) -> Html {
    let editing = use_state(|| None::<Invoice>);

    let on_close_edit = {
        let editing = editing.clone();
        Callback::from(move |_: ()| editing.set(None))
    };

    let on_save_edit = {
        let editing = editing.clone();
        let on_update = props.on_update.clone();
        Callback::from(move |(id, update): (String, InvoiceUpdate)| {
            on_update.emit((id, update));
            editing.set(None);
        })
    };

    let today = today_utc();

    html! {
        <section class="card invoices-list">
            <h3 class="card-title">{"Your Invoices"}</h3>

            {if props.invoices.is_empty() {
                html! {
                    <div class="invoices-empty">
                        {"No invoices found. Create your first invoice to get started!"}
                    </div>
                }
            } else {
                html! {
                    <ul class="invoice-rows">
                        {for props.invoices.iter().map(|invoice| {
                            let id = invoice.id.clone();

                            let on_status_change = {
                                let id = id.clone();
                                let on_update = props.on_update.clone();
                                Callback::from(move |e: Event| {
                                    let select: HtmlSelectElement = e.target_unchecked_into();
                                    match select.value().parse::<InvoiceStatus>() {
                                        Ok(status) => {
                                            on_update.emit((id.clone(), InvoiceUpdate::status(status)));
                                        }
                                        Err(error) => {
                                            Logger::warn_with_component("InvoicesList", &error.to_string());
                                        }
                                    }
                                })
                            };

                            let on_edit = {
                                let editing = editing.clone();
                                let invoice = invoice.clone();
                                Callback::from(move |_: MouseEvent| editing.set(Some(invoice.clone())))
                            };

                            let on_delete = {
                                let on_delete = props.on_delete.clone();
                                Callback::from(move |_: MouseEvent| on_delete.emit(id.clone()))
                            };

                            let past_due = invoice.is_past_due(today);

                            html! {
                                <li key={invoice.id.clone()} class={classes!("invoice-row", past_due.then_some("past-due"))}>
                                    <div class="invoice-main">
                                        <div class="invoice-heading">
                                            <span class="invoice-title">{&invoice.title}</span>
                                            <span class={classes!("status-badge", format!("status-{}", invoice.status.as_str()))}>
                                                {invoice.status.label()}
                                            </span>
                                        </div>
                                        <p class="invoice-client">{&invoice.client}</p>
                                    </div>
                                    <div class="invoice-meta">
                                        <span class="invoice-amount">
                                            {format_currency_with(invoice.amount, &props.currency_symbol)}
                                        </span>
                                        <span class="invoice-due">
                                            {format!("Due: {}", format_date(invoice.due_date))}
                                        </span>
                                    </div>
                                    <div class="invoice-actions">
                                        <StatusSelect
                                            value={invoice.status}
                                            onchange={on_status_change}
                                            class="status-select-inline"
                                        />
                                        <button class="btn btn-secondary btn-small" onclick={on_edit}>
                                            {"Edit"}
                                        </button>
                                        <button class="btn btn-danger btn-small" onclick={on_delete}>
                                            {"Delete"}
                                        </button>
                                    </div>
                                </li>
                            }
                        })}
                    </ul>
                }
            }}

            {if let Some(invoice) = (*editing).clone() {
                html! {
                    <EditInvoiceModal
                        invoice={invoice}
                        on_save={on_save_edit}
                        on_close={on_close_edit}
                    />
                }
            } else {
                html! {}
            }}
        </section>
    }
}

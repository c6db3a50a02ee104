use shared::{InvoiceFormData, InvoiceFormInput};
use yew::prelude::*;

use super::forms::invoice_form_fields::InvoiceFormFields;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct CreateInvoiceModalProps {
    pub on_create: Callback<InvoiceFormData>,
}

#[function_component(CreateInvoiceModal)]
pub fn create_invoice_modal(props: &CreateInvoiceModalProps) -> Html {
    let is_open = use_state(|| false);
    let form = use_state(InvoiceFormInput::default);

    let on_open = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(true))
    };

    let on_close = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(false))
    };

    let on_form_change = {
        let form = form.clone();
        Callback::from(move |next: InvoiceFormInput| form.set(next))
    };

    let on_submit = {
        let form = form.clone();
        let is_open = is_open.clone();
        let on_create = props.on_create.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            // Invalid input aborts silently; the dialog stays open
            match form.validate() {
                Ok(data) => {
                    on_create.emit(data);
                    form.set(InvoiceFormInput::default());
                    is_open.set(false);
                }
                Err(error) => {
                    Logger::debug_with_component("CreateInvoiceModal", &error.to_string());
                }
            }
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <>
            <button class="create-invoice-trigger" onclick={on_open}>
                <div class="create-invoice-plus"><span>{"+"}</span></div>
                <h1 class="create-invoice-heading">{"Create New Invoice"}</h1>
                <p class="create-invoice-hint">{"Start by creating and sending new invoice"}</p>
            </button>

            {if *is_open {
                html! {
                    <div class="modal-backdrop" onclick={on_close.clone()}>
                        <div class="modal" onclick={on_modal_click}>
                            <h3 class="modal-title">{"Create New Invoice"}</h3>
                            <form class="invoice-form" onsubmit={on_submit}>
                                <InvoiceFormFields
                                    input={(*form).clone()}
                                    on_change={on_form_change}
                                    id_prefix="create"
                                />
                                <div class="modal-buttons">
                                    <button type="button" class="btn btn-secondary" onclick={on_close}>
                                        {"Cancel"}
                                    </button>
                                    <button type="submit" class="btn btn-primary">
                                        {"Create Invoice"}
                                    </button>
                                </div>
                            </form>
                        </div>
                    </div>
                }
            } else {
                html! {}
            }}
        </>
    }
}

use shared::{Invoice, InvoiceFormInput, InvoiceUpdate};
use yew::prelude::*;

use crate::components::forms::invoice_form_fields::InvoiceFormFields;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct EditInvoiceModalProps {
    pub invoice: Invoice,
    pub on_save: Callback<(String, InvoiceUpdate)>,
    pub on_close: Callback<()>,
}

#[function_component(EditInvoiceModal)]
pub fn edit_invoice_modal(props: &EditInvoiceModalProps) -> Html {
    let form = use_state(|| InvoiceFormInput::from_invoice(&props.invoice));

    // Re-fill when a different invoice is opened
    {
        let form = form.clone();
        use_effect_with(props.invoice.clone(), move |invoice| {
            form.set(InvoiceFormInput::from_invoice(invoice));
            || ()
        });
    }

    let on_form_change = {
        let form = form.clone();
        Callback::from(move |next: InvoiceFormInput| form.set(next))
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let on_submit = {
        let form = form.clone();
        let id = props.invoice.id.clone();
        let on_save = props.on_save.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match form.validate() {
                Ok(data) => on_save.emit((id.clone(), InvoiceUpdate::from(data))),
                Err(error) => {
                    Logger::debug_with_component("EditInvoiceModal", &error.to_string());
                }
            }
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-backdrop" onclick={on_cancel.clone()}>
            <div class="modal" onclick={on_modal_click}>
                <h3 class="modal-title">{"Edit Invoice"}</h3>
                <form class="invoice-form" onsubmit={on_submit}>
                    <InvoiceFormFields
                        input={(*form).clone()}
                        on_change={on_form_change}
                        id_prefix="edit"
                    />
                    <div class="modal-buttons">
                        <button type="button" class="btn btn-secondary" onclick={on_cancel}>
                            {"Cancel"}
                        </button>
                        <button type="submit" class="btn btn-primary">
                            {"Save Changes"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

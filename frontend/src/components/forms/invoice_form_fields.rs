use shared::{InvoiceFormInput, InvoiceStatus};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct InvoiceFormFieldsProps {
    pub input: InvoiceFormInput,
    pub on_change: Callback<InvoiceFormInput>,
    /// Prefix for element ids so create and edit dialogs can coexist
    pub id_prefix: AttrValue,
}

/// Title, client, amount, due date and status inputs shared by the create and edit dialogs
#[function_component(InvoiceFormFields)]
pub fn invoice_form_fields(props: &InvoiceFormFieldsProps) -> Html {
    let field_id = |name: &str| format!("{}-{}", props.id_prefix, name);

    let on_text = |apply: fn(&mut InvoiceFormInput, String)| {
        let input = props.input.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let element: HtmlInputElement = e.target_unchecked_into();
            let mut next = input.clone();
            apply(&mut next, element.value());
            on_change.emit(next);
        })
    };

    let on_status_change = {
        let input = props.input.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(status) = select.value().parse::<InvoiceStatus>() {
                let mut next = input.clone();
                next.status = status;
                on_change.emit(next);
            }
        })
    };

    html! {
        <>
            <div class="form-group">
                <label for={field_id("title")}>{"Invoice Title"}</label>
                <input
                    id={field_id("title")}
                    type="text"
                    placeholder="Enter invoice title"
                    value={props.input.title.clone()}
                    oninput={on_text(|form, value| form.title = value)}
                    required=true
                />
            </div>

            <div class="form-group">
                <label for={field_id("client")}>{"Client Name"}</label>
                <input
                    id={field_id("client")}
                    type="text"
                    placeholder="Enter client name"
                    value={props.input.client.clone()}
                    oninput={on_text(|form, value| form.client = value)}
                    required=true
                />
            </div>

            <div class="form-group">
                <label for={field_id("amount")}>{"Amount ($)"}</label>
                <input
                    id={field_id("amount")}
                    type="number"
                    step="0.01"
                    min="0"
                    placeholder="0.00"
                    value={props.input.amount.clone()}
                    oninput={on_text(|form, value| form.amount = value)}
                    required=true
                />
            </div>

            <div class="form-group">
                <label for={field_id("due-date")}>{"Due Date"}</label>
                <input
                    id={field_id("due-date")}
                    type="date"
                    value={props.input.due_date.clone()}
                    oninput={on_text(|form, value| form.due_date = value)}
                    required=true
                />
            </div>

            <div class="form-group">
                <label for={field_id("status")}>{"Status"}</label>
                <StatusSelect
                    id={field_id("status")}
                    value={props.input.status}
                    onchange={on_status_change}
                />
            </div>
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatusSelectProps {
    pub value: InvoiceStatus,
    pub onchange: Callback<Event>,
    #[prop_or_default]
    pub id: Option<String>,
    #[prop_or_default]
    pub class: Classes,
}

/// `<select>` over the four invoice statuses
#[function_component(StatusSelect)]
pub fn status_select(props: &StatusSelectProps) -> Html {
    html! {
        <select
            id={props.id.clone()}
            class={classes!("status-select", props.class.clone())}
            onchange={props.onchange.clone()}
        >
            {for InvoiceStatus::ALL.iter().map(|status| html! {
                <option value={status.as_str()} selected={*status == props.value}>
                    {status.label()}
                </option>
            })}
        </select>
    }
}

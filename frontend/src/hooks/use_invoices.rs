use std::rc::Rc;

use chrono::{DateTime, Utc};
use shared::seed::sample_invoices;
use shared::{
    ChartDataPoint, DashboardConfig, DashboardStats, Invoice, InvoiceFormData, InvoiceStore,
    InvoiceUpdate, TimePeriod,
};
use yew::prelude::*;

use crate::services::date_utils::{now_utc, today_utc};

/// Session-wide dashboard state: the invoice store plus the selected period
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceState {
    pub store: InvoiceStore,
    pub selected_period: TimePeriod,
    pub config: DashboardConfig,
}

/// Commands accepted by the store. `now` is captured when the action is dispatched.
#[derive(Debug, Clone, PartialEq)]
pub enum InvoiceAction {
    Create { form: InvoiceFormData, now: DateTime<Utc> },
    Update { id: String, update: InvoiceUpdate },
    Delete { id: String },
    SelectPeriod(TimePeriod),
}

pub type InvoiceContext = UseReducerHandle<InvoiceState>;

impl InvoiceState {
    pub fn new(store: InvoiceStore, config: DashboardConfig) -> Self {
        Self {
            store,
            selected_period: config.default_period,
            config,
        }
    }
}

impl Reducible for InvoiceState {
    type Action = InvoiceAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            InvoiceAction::Create { form, now } => {
                if let Err(error) = next.store.create(form, now) {
                    log::warn!("Invoice not created: {}", error);
                    return self;
                }
            }
            InvoiceAction::Update { id, update } => {
                match next.store.update(&id, update) {
                    Ok(true) => {}
                    Ok(false) => return self,
                    Err(error) => {
                        log::warn!("Invoice {} not updated: {}", id, error);
                        return self;
                    }
                }
            }
            InvoiceAction::Delete { id } => {
                next.store.delete(&id);
            }
            InvoiceAction::SelectPeriod(period) => {
                log::info!("Selected period {}", period.as_str());
                next.selected_period = period;
            }
        }
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct InvoiceProviderProps {
    pub config: DashboardConfig,
    #[prop_or_default]
    pub children: Children,
}

/// Owns the one store of the page session and hands it to descendants
#[function_component(InvoiceProvider)]
pub fn invoice_provider(props: &InvoiceProviderProps) -> Html {
    let config = props.config.clone();
    let state = use_reducer(move || {
        let store = InvoiceStore::new(sample_invoices(today_utc()));
        InvoiceState::new(store, config)
    });

    html! {
        <ContextProvider<InvoiceContext> context={state}>
            { for props.children.iter() }
        </ContextProvider<InvoiceContext>>
    }
}

/// Derived view of the store for the selected period
#[derive(Clone, PartialEq)]
pub struct InvoicesSnapshot {
    pub invoices: Vec<Invoice>,
    pub selected_period: TimePeriod,
    pub stats: DashboardStats,
    pub chart_data: Vec<ChartDataPoint>,
    pub currency_symbol: String,
}

impl InvoicesSnapshot {
    pub fn from_state(state: &InvoiceState, now: DateTime<Utc>) -> Self {
        let period = state.selected_period;
        Self {
            invoices: state.store.invoices().to_vec(),
            selected_period: period,
            stats: state.store.stats(period, now),
            chart_data: state.store.chart_data(period, now, state.config.bucket_order),
            currency_symbol: state.config.currency_symbol.clone(),
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct UseInvoicesActions {
    pub add_invoice: Callback<InvoiceFormData>,
    pub update_invoice: Callback<(String, InvoiceUpdate)>,
    pub delete_invoice: Callback<String>,
    pub set_selected_period: Callback<TimePeriod>,
}

pub struct UseInvoicesResult {
    pub state: InvoicesSnapshot,
    pub actions: UseInvoicesActions,
}

/// Read the dashboard store from context. Must be rendered under [`InvoiceProvider`].
#[hook]
pub fn use_invoices() -> UseInvoicesResult {
    let context = use_context::<InvoiceContext>();
    let fallback =
        use_reducer(|| InvoiceState::new(InvoiceStore::default(), DashboardConfig::default()));
    let handle = match context {
        Some(handle) => handle,
        None => {
            log::warn!("use_invoices rendered outside InvoiceProvider, using an empty store");
            fallback
        }
    };
    let dispatcher = handle.dispatcher();

    let add_invoice = use_callback(dispatcher.clone(), |form: InvoiceFormData, dispatcher| {
        dispatcher.dispatch(InvoiceAction::Create { form, now: now_utc() });
    });

    let update_invoice = use_callback(
        dispatcher.clone(),
        |(id, update): (String, InvoiceUpdate), dispatcher| {
            dispatcher.dispatch(InvoiceAction::Update { id, update });
        },
    );

    let delete_invoice = use_callback(dispatcher.clone(), |id: String, dispatcher| {
        dispatcher.dispatch(InvoiceAction::Delete { id });
    });

    let set_selected_period = use_callback(dispatcher, |period: TimePeriod, dispatcher| {
        dispatcher.dispatch(InvoiceAction::SelectPeriod(period));
    });

    UseInvoicesResult {
        state: InvoicesSnapshot::from_state(&handle, now_utc()),
        actions: UseInvoicesActions {
            add_invoice,
            update_invoice,
            delete_invoice,
            set_selected_period,
        },
    }
}

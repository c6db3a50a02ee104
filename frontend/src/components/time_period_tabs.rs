use shared::TimePeriod;
use yew::prelude::*;

use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct TimePeriodTabsProps {
    pub selected_period: TimePeriod,
    pub on_period_change: Callback<TimePeriod>,
}

#[function_component(TimePeriodTabs)]
pub fn time_period_tabs(props: &TimePeriodTabsProps) -> Html {
    html! {
        <section class="card time-period-card">
            <h3 class="card-title">{"Time Period"}</h3>
            <div class="period-tabs" role="tablist">
                {for TimePeriod::ALL.iter().map(|period| {
                    let period = *period;
                    let is_active = period == props.selected_period;
                    let onclick = {
                        let on_period_change = props.on_period_change.clone();
                        Callback::from(move |_: MouseEvent| {
                            Logger::info_with_component(
                                "TimePeriodTabs",
                                &format!("Switching to {}", period.as_str()),
                            );
                            on_period_change.emit(period);
                        })
                    };

                    html! {
                        <button
                            role="tab"
                            aria-selected={is_active.to_string()}
                            class={classes!("period-tab", is_active.then_some("active"))}
                            onclick={onclick}
                        >
                            {if period == TimePeriod::Custom {
                                html! { <span class="period-tab-icon">{"📅"}</span> }
                            } else {
                                html! {}
                            }}
                            {period.label()}
                        </button>
                    }
                })}
            </div>
        </section>
    }
}

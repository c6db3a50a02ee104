use shared::formatting::format_currency_with;
use shared::DashboardStats;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatsCardsProps {
    pub stats: DashboardStats,
    pub currency_symbol: AttrValue,
}

#[derive(Properties, PartialEq)]
struct StatCardProps {
    title: AttrValue,
    amount: String,
    caption: AttrValue,
    icon: AttrValue,
    /// Colour modifier: earnings, awaited or overdue
    tone: AttrValue,
}

#[function_component(StatCard)]
fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class={classes!("card", "stat-card", format!("stat-{}", props.tone))}>
            <div class="stat-card-header">
                <span class="stat-card-title">{&props.title}</span>
                <span class="stat-card-icon">{&props.icon}</span>
            </div>
            <div class="stat-card-amount">{&props.amount}</div>
            <p class="stat-card-caption">{&props.caption}</p>
        </div>
    }
}

#[function_component(StatsCards)]
pub fn stats_cards(props: &StatsCardsProps) -> Html {
    let format = |amount: f64| format_currency_with(amount, &props.currency_symbol);

    html! {
        <section class="stats-cards">
            <StatCard
                title="Total Earnings"
                amount={format(props.stats.total_earnings)}
                caption="From paid invoices"
                icon="$"
                tone="earnings"
            />
            <div class="stats-cards-secondary">
                <StatCard
                    title="Payment Awaited"
                    amount={format(props.stats.payment_awaited)}
                    caption="From pending invoices"
                    icon="⏱"
                    tone="awaited"
                />
                <StatCard
                    title="Payment Overdue"
                    amount={format(props.stats.payment_overdue)}
                    caption="From overdue invoices"
                    icon="⚠"
                    tone="overdue"
                />
            </div>
        </section>
    }
}

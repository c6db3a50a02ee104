use anyhow::{anyhow, Result};
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use shared::formatting::{format_currency_short, format_currency_with, format_percentage};
use shared::ChartDataPoint;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::services::logging::Logger;

const CANVAS_WIDTH: u32 = 800;
const CANVAS_HEIGHT: u32 = 320;
const INCOME_COLOR: RGBColor = RGBColor(216, 180, 254);
const GROWTH_COLOR: RGBColor = RGBColor(124, 45, 18);
const LABEL_COLOR: RGBColor = RGBColor(107, 114, 128);
const GRID_COLOR: RGBColor = RGBColor(243, 244, 246);

#[derive(Properties, PartialEq)]
pub struct IncomeChartProps {
    pub data: Vec<ChartDataPoint>,
    pub currency_symbol: AttrValue,
}

/// Income bars per bucket with the growth line on a secondary axis
pub struct IncomeChart {
    canvas_ref: NodeRef,
}

impl Component for IncomeChart {
    type Message = ();
    type Properties = IncomeChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        ctx.props() != old_props
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        let props = ctx.props();
        if props.data.is_empty() {
            return;
        }

        if let Err(error) = self.draw_chart(&props.data, &props.currency_symbol) {
            Logger::warn_with_component("IncomeChart", &format!("Failed to draw chart: {error}"));
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();

        html! {
            <section class="card income-chart">
                <div class="income-chart-header">
                    <h3 class="card-title">{"Income Trend"}</h3>
                    <p class="card-subtitle">
                        {"Your monthly income and growth for the selected period"}
                    </p>
                </div>

                {if props.data.is_empty() {
                    html! {
                        <div class="chart-empty">
                            <p>{"No data available for the selected period"}</p>
                        </div>
                    }
                } else {
                    html! {
                        <>
                            <div class="chart-content">
                                <canvas
                                    ref={self.canvas_ref.clone()}
                                    class="income-chart-canvas"
                                    width={CANVAS_WIDTH.to_string()}
                                    height={CANVAS_HEIGHT.to_string()}
                                ></canvas>
                            </div>
                            <div class="chart-legend">
                                <span class="legend-item">
                                    <span class="legend-swatch legend-income"></span>
                                    {"Income"}
                                </span>
                                <span class="legend-item">
                                    <span class="legend-swatch legend-growth"></span>
                                    {"Growth"}
                                </span>
                            </div>
                            <ul class="chart-summary">
                                {for props.data.iter().map(|point| html! {
                                    <li class="chart-summary-row">
                                        <span class="chart-summary-label">{&point.name}</span>
                                        <span class="chart-summary-income">
                                            {format_currency_with(point.income, &props.currency_symbol)}
                                        </span>
                                        <span class={classes!(
                                            "chart-summary-growth",
                                            (point.mom_growth < 0).then_some("negative"),
                                        )}>
                                            {format_percentage(point.mom_growth)}
                                        </span>
                                    </li>
                                })}
                            </ul>
                        </>
                    }
                }}
            </section>
        }
    }
}

impl IncomeChart {
    fn draw_chart(&self, data: &[ChartDataPoint], currency_symbol: &str) -> Result<()> {
        let canvas = self
            .canvas_ref
            .cast::<HtmlCanvasElement>()
            .ok_or_else(|| anyhow!("canvas element is not mounted"))?;
        canvas.set_width(CANVAS_WIDTH);
        canvas.set_height(CANVAS_HEIGHT);

        let backend = CanvasBackend::with_canvas_object(canvas)
            .ok_or_else(|| anyhow!("2d context unavailable"))?;
        let root = backend.into_drawing_area();
        root.fill(&WHITE).map_err(|e| anyhow!("{e:?}"))?;

        // Bars are centered on integer x positions
        let x_range = -0.5f64..(data.len() as f64 - 0.5);
        let (income_max, growth_range) = axis_bounds(data);

        let mut chart = ChartBuilder::on(&root)
            .margin(15)
            .x_label_area_size(35)
            .y_label_area_size(60)
            .right_y_label_area_size(50)
            .build_cartesian_2d(x_range.clone(), 0f64..income_max)
            .map_err(|e| anyhow!("{e:?}"))?
            .set_secondary_coord(x_range, growth_range);

        let labels: Vec<&str> = data.iter().map(|point| point.name.as_str()).collect();
        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(data.len())
            .x_label_formatter(&|x| bucket_label(&labels, *x))
            .y_label_formatter(&|v| format_currency_short(*v, currency_symbol))
            .label_style(("sans-serif", 12, &LABEL_COLOR))
            .axis_style(GRID_COLOR)
            .bold_line_style(GRID_COLOR)
            .light_line_style(WHITE)
            .y_labels(6)
            .draw()
            .map_err(|e| anyhow!("{e:?}"))?;

        chart
            .configure_secondary_axes()
            .y_label_formatter(&|v| format!("{v:.0}%"))
            .label_style(("sans-serif", 12, &LABEL_COLOR))
            .axis_style(GRID_COLOR)
            .draw()
            .map_err(|e| anyhow!("{e:?}"))?;

        chart
            .draw_series(data.iter().enumerate().map(|(i, point)| {
                let x = i as f64;
                Rectangle::new([(x - 0.3, 0.0), (x + 0.3, point.income)], INCOME_COLOR.filled())
            }))
            .map_err(|e| anyhow!("{e:?}"))?;

        let growth_points: Vec<(f64, f64)> = data
            .iter()
            .enumerate()
            .map(|(i, point)| (i as f64, point.mom_growth as f64))
            .collect();

        chart
            .draw_secondary_series(LineSeries::new(
                growth_points.iter().copied(),
                GROWTH_COLOR.stroke_width(2),
            ))
            .map_err(|e| anyhow!("{e:?}"))?;

        chart
            .draw_secondary_series(
                growth_points
                    .iter()
                    .map(|&(x, y)| Circle::new((x, y), 4, GROWTH_COLOR.filled())),
            )
            .map_err(|e| anyhow!("{e:?}"))?;

        root.present().map_err(|e| anyhow!("{e:?}"))?;
        Ok(())
    }
}

/// Upper income bound and growth range with headroom; both ranges are never empty
fn axis_bounds(data: &[ChartDataPoint]) -> (f64, std::ops::Range<f64>) {
    let income_max = data.iter().map(|p| p.income).fold(0.0, f64::max).max(1.0) * 1.1;

    let growth_min = data.iter().map(|p| p.mom_growth).min().unwrap_or(0).min(0) as f64;
    let growth_max = data.iter().map(|p| p.mom_growth).max().unwrap_or(0).max(0) as f64;
    let padding = ((growth_max - growth_min) * 0.1).max(10.0);

    (income_max, (growth_min - padding)..(growth_max + padding))
}

/// Bucket name for an axis tick, blank between buckets
fn bucket_label(labels: &[&str], x: f64) -> String {
    let index = x.round();
    if (x - index).abs() > 0.01 || index < 0.0 {
        return String::new();
    }
    labels
        .get(index as usize)
        .map(|label| label.to_string())
        .unwrap_or_default()
}

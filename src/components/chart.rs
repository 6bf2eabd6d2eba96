use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Legend, Title},
    element::{
        AreaStyle, AxisLabel, AxisPointer, AxisPointerType, AxisType, Color, LineStyle,
        LineStyleType, SplitLine, TextStyle, Tooltip, Trigger,
    },
    renderer::WasmRenderer,
    series::{Line, Pie},
};
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::Config;
use crate::models::carbon::CarbonResult;
use crate::utils::debounce::create_debounced_resize_listener;

const TREND_CHART_ID: &str = "emission-trend-chart";
const BREAKDOWN_CHART_ID: &str = "emission-breakdown-chart";

const TITLE_COLOR: &str = "#e5e7eb";
const AXIS_COLOR: &str = "#9ca3af";
const GRID_COLOR: &str = "#374151";
const TREND_COLOR: &str = "#10b981";

/// Slice colours for the breakdown pie, cycled by category index
const BREAKDOWN_COLORS: [&str; 4] = ["#10b981", "#3b82f6", "#f59e0b", "#ef4444"];

#[derive(Properties, PartialEq)]
pub struct CarbonChartProps {
    pub result: Rc<CarbonResult>,
}

/// Area chart of emissions per period
#[function_component(TrendChart)]
pub fn trend_chart(props: &CarbonChartProps) -> Html {
    let chart = use_memo(props.result.clone(), |result| build_trend_chart(result));
    html! { <ChartCanvas chart_id={TREND_CHART_ID} {chart} /> }
}

/// Pie chart of the emission share per category
#[function_component(BreakdownChart)]
pub fn breakdown_chart(props: &CarbonChartProps) -> Html {
    let chart = use_memo(props.result.clone(), |result| build_breakdown_chart(result));
    html! { <ChartCanvas chart_id={BREAKDOWN_CHART_ID} {chart} /> }
}

#[derive(Properties)]
struct ChartCanvasProps {
    chart_id: &'static str,
    chart: Rc<CharmingChart>,
}

impl PartialEq for ChartCanvasProps {
    fn eq(&self, other: &Self) -> bool {
        self.chart_id == other.chart_id && Rc::ptr_eq(&self.chart, &other.chart)
    }
}

/// Renders a chart into its container and redraws it after the window is resized
#[function_component(ChartCanvas)]
fn chart_canvas(props: &ChartCanvasProps) -> Html {
    let container_ref = use_node_ref();

    {
        let container_ref = container_ref.clone();
        let chart_id = props.chart_id;

        use_effect_with(
            (props.chart.clone(), container_ref),
            move |(chart, container_ref)| {
                let listener = container_ref.cast::<HtmlElement>().and_then(|container| {
                    render_chart(&container, chart_id, chart);

                    let chart = chart.clone();
                    create_debounced_resize_listener(
                        move || render_chart(&container, chart_id, &chart),
                        Config::RESIZE_DEBOUNCE_MS,
                    )
                });

                move || drop(listener)
            },
        );
    }

    html! {
        <div class="chart-container" ref={container_ref}>
            <div id={props.chart_id} />
        </div>
    }
}

fn render_chart(container: &HtmlElement, chart_id: &str, chart: &CharmingChart) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 {
        return;
    }

    if let Err(e) = WasmRenderer::new(width, height).render(chart_id, chart) {
        web_sys::console::error_1(&format!("Render error: {e:?}").into());
    }
}

pub fn build_trend_chart(result: &CarbonResult) -> CharmingChart {
    let (labels, values) = result.trend_series();

    CharmingChart::new()
        .title(
            Title::new()
                .text("Emission Trends")
                .left("center")
                .text_style(TextStyle::new().font_size(16).color(TITLE_COLOR)),
        )
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Line)),
        )
        .grid(
            Grid::new()
                .left("8%")
                .right("4%")
                .bottom("12%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(labels)
                .axis_label(AxisLabel::new().color(AXIS_COLOR)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name("t CO₂")
                .axis_label(AxisLabel::new().color(AXIS_COLOR))
                .split_line(
                    SplitLine::new().line_style(
                        LineStyle::new()
                            .color(GRID_COLOR)
                            .type_(LineStyleType::Dashed),
                    ),
                ),
        )
        .series(
            Line::new()
                .name("Emissions")
                .data(values)
                .smooth(true)
                .line_style(LineStyle::new().color(TREND_COLOR))
                .area_style(AreaStyle::new().color(TREND_COLOR).opacity(0.3)),
        )
}

pub fn build_breakdown_chart(result: &CarbonResult) -> CharmingChart {
    let slices = result.breakdown_series();
    let data: Vec<(f64, &str)> = slices
        .iter()
        .map(|(percentage, category)| (*percentage, category.as_str()))
        .collect();

    CharmingChart::new()
        .color(BREAKDOWN_COLORS.map(Color::from).to_vec())
        .tooltip(Tooltip::new().trigger(Trigger::Item).formatter("{b}: {c}%"))
        .legend(
            Legend::new()
                .bottom("0")
                .text_style(TextStyle::new().color(AXIS_COLOR)),
        )
        .series(
            Pie::new()
                .name("Emission Breakdown")
                .radius("65%")
                .data(data),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::carbon::ActivityInput;
    use crate::services::mock::mock_carbon_result;

    #[test]
    fn test_trend_chart_contains_periods() {
        let result = mock_carbon_result(&ActivityInput::default());
        let rendered = build_trend_chart(&result).to_string();
        assert!(rendered.contains("\"Jan\""));
        assert!(rendered.contains("\"Apr\""));
        assert!(rendered.contains("Emission Trends"));
    }

    #[test]
    fn test_breakdown_chart_contains_categories() {
        let result = mock_carbon_result(&ActivityInput::default());
        let rendered = build_breakdown_chart(&result).to_string();
        for category in ["Transport", "Energy", "Food", "Waste"] {
            assert!(rendered.contains(category), "missing {category}");
        }
    }
}

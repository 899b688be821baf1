use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use shared::chart::{ChartSpec, Rgba};
use shared::{Month, MonthlyLedger};
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::services::Logger;

pub const CANVAS_ID: &str = "myChart";
const CANVAS_WIDTH: u32 = 900;
const CANVAS_HEIGHT: u32 = 400;
/// Width of one bar in month units; two bars sit side by side per month
const BAR_WIDTH: f64 = 0.38;

#[derive(Properties, PartialEq)]
pub struct LedgerChartProps {
    pub ledger: MonthlyLedger,
    /// Shared with the export button, which reads the drawn canvas
    pub canvas_ref: NodeRef,
}

/// Bar chart of the ledger. Every props change wipes the canvas and draws
/// the whole chart again; there is no incremental update.
pub struct LedgerChart;

impl Component for LedgerChart {
    type Message = ();
    type Properties = LedgerChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().ledger != old_props.ledger {
            Self::redraw(ctx);
        }
        false
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            Self::redraw(ctx);
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="chart-content">
                <canvas
                    id={CANVAS_ID}
                    ref={ctx.props().canvas_ref.clone()}
                    class="ledger-chart-canvas"
                    width={CANVAS_WIDTH.to_string()}
                    height={CANVAS_HEIGHT.to_string()}
                ></canvas>
            </div>
        }
    }
}

impl LedgerChart {
    fn redraw(ctx: &Context<Self>) {
        let spec = ChartSpec::bar(&ctx.props().ledger);
        let result = mounted_canvas(&ctx.props().canvas_ref).and_then(|canvas| draw_chart(canvas, &spec));
        if let Err(e) = result {
            Logger::warn_with_component("ledger-chart", &e);
        }
    }
}

fn color(c: Rgba) -> RGBAColor {
    RGBAColor(c.r, c.g, c.b, c.a)
}

/// Axis label for a month-centred x position, empty between months
fn month_tick_label(x: f64) -> String {
    let nearest = x.round();
    if (x - nearest).abs() > 1e-6 || nearest < 0.0 {
        return String::new();
    }
    Month::from_index(nearest as usize)
        .map(|m| m.name()[..3].to_string())
        .unwrap_or_default()
}

/// Left and right x edges of a bar. Dataset 0 sits left of the month centre.
fn bar_span(month_index: usize, dataset_index: usize) -> (f64, f64) {
    let centre = month_index as f64;
    let left = centre - BAR_WIDTH + dataset_index as f64 * BAR_WIDTH;
    (left, left + BAR_WIDTH)
}

pub fn mounted_canvas(canvas_ref: &NodeRef) -> Result<HtmlCanvasElement, String> {
    canvas_ref
        .cast::<HtmlCanvasElement>()
        .ok_or_else(|| "chart canvas is not mounted".to_string())
}

pub fn draw_chart(canvas: HtmlCanvasElement, spec: &ChartSpec) -> Result<(), String> {
    canvas.set_width(CANVAS_WIDTH);
    canvas.set_height(CANVAS_HEIGHT);

    let backend = CanvasBackend::with_canvas_object(canvas)
        .ok_or_else(|| "canvas has no 2d context".to_string())?;
    let root = backend.into_drawing_area();
    root.fill(&WHITE).map_err(|e| e.to_string())?;

    // month i is centred on x = i
    let x_range = (-0.5_f64, spec.labels.len() as f64 - 0.5);
    let mut chart = ChartBuilder::on(&root)
        .caption(&spec.title, ("sans-serif", 20).into_font().style(FontStyle::Bold))
        .margin(20)
        .x_label_area_size(45)
        .y_label_area_size(70)
        .build_cartesian_2d(x_range.0..x_range.1, spec.y_min()..spec.y_max())
        .map_err(|e| e.to_string())?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc(spec.x_title.as_str())
        .y_desc(spec.y_title.as_str())
        .x_labels(spec.labels.len())
        .x_label_formatter(&|x| month_tick_label(*x))
        .y_label_formatter(&|v| format!("${:.0}", v))
        .label_style(("sans-serif", 12))
        .axis_style(&RGBColor(200, 200, 200))
        .bold_line_style(&RGBColor(235, 235, 235))
        .light_line_style(&RGBColor(248, 248, 248))
        .draw()
        .map_err(|e| e.to_string())?;

    if spec.y_min() < 0.0 {
        chart
            .draw_series(std::iter::once(PathElement::new(
                vec![(x_range.0, 0.0), (x_range.1, 0.0)],
                RGBColor(160, 160, 160).stroke_width(1),
            )))
            .map_err(|e| e.to_string())?;
    }

    for (dataset_index, dataset) in spec.datasets.iter().enumerate() {
        let fill = color(dataset.background);
        let border = color(dataset.border);
        let border_width = dataset.border_width;

        chart
            .draw_series(dataset.data.iter().enumerate().map(|(month_index, &value)| {
                let (left, right) = bar_span(month_index, dataset_index);
                Rectangle::new([(left, 0.0), (right, value)], fill.filled())
            }))
            .map_err(|e| e.to_string())?
            .label(dataset.label.as_str())
            .legend(move |(x, y)| Rectangle::new([(x, y - 6), (x + 14, y + 6)], fill.filled()));

        chart
            .draw_series(dataset.data.iter().enumerate().filter(|(_, v)| **v != 0.0).map(
                |(month_index, &value)| {
                    let (left, right) = bar_span(month_index, dataset_index);
                    Rectangle::new([(left, 0.0), (right, value)], border.stroke_width(border_width))
                },
            ))
            .map_err(|e| e.to_string())?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.9))
        .border_style(&RGBColor(220, 220, 220))
        .draw()
        .map_err(|e| e.to_string())?;

    root.present().map_err(|e| e.to_string())
}

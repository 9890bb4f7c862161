use dioxus::prelude::*;
use tracing::debug;

use crate::core::{format, series::ChartSeries};

/// DOM id of the surface the chart is drawn into.
pub const CHART_SURFACE_ID: &str = "resource-chart";
pub const DATASET_LABEL: &str = "transfer size in bytes";

const VIEW_WIDTH: f64 = 960.0;
const VIEW_HEIGHT: f64 = 360.0;
const PAD_LEFT: f64 = 72.0;
const PAD_RIGHT: f64 = 16.0;
const PAD_TOP: f64 = 28.0;
const PAD_BOTTOM: f64 = 120.0;
const GRID_LINES: usize = 4;

/// One live bar chart bound to [`CHART_SURFACE_ID`].
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub generation: u64,
    pub surface: &'static str,
    pub dataset_label: &'static str,
    pub series: ChartSeries,
}

/// Holds at most one chart. Rendering always tears the previous one down first.
#[derive(Debug, Default)]
pub struct ChartSlot {
    current: Option<BarChart>,
    created: u64,
    destroyed: u64,
}

impl ChartSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, series: ChartSeries) -> &BarChart {
        self.destroy();
        self.created += 1;
        debug!(
            generation = self.created,
            bars = series.len(),
            "chart created"
        );
        self.current.insert(BarChart {
            generation: self.created,
            surface: CHART_SURFACE_ID,
            dataset_label: DATASET_LABEL,
            series,
        })
    }

    /// Drop the current chart, if any.
    pub fn destroy(&mut self) {
        if let Some(chart) = self.current.take() {
            self.destroyed += 1;
            debug!(generation = chart.generation, "chart destroyed");
        }
    }

    pub fn current(&self) -> Option<&BarChart> {
        self.current.as_ref()
    }

    pub fn live_instances(&self) -> u64 {
        self.created - self.destroyed
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Bar {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    label: String,
    label_x: f64,
}

fn layout_bars(series: &ChartSeries) -> Vec<Bar> {
    let count = series.len().max(1) as f64;
    let plot_width = VIEW_WIDTH - PAD_LEFT - PAD_RIGHT;
    let plot_height = VIEW_HEIGHT - PAD_TOP - PAD_BOTTOM;
    let slot = plot_width / count;
    let width = slot * 0.7;
    let max = axis_max(series.max_value());

    series
        .iter()
        .enumerate()
        .map(|(idx, (label, value))| {
            let height = (value.max(0.0) / max) * plot_height;
            let x = PAD_LEFT + slot * idx as f64 + (slot - width) / 2.0;
            Bar {
                x,
                y: PAD_TOP + plot_height - height,
                width,
                height,
                label: label.to_string(),
                label_x: x + width / 2.0,
            }
        })
        .collect()
}

fn axis_max(max_value: f64) -> f64 {
    if max_value > 0.0 {
        max_value
    } else {
        1.0
    }
}

/// Responsive SVG rendering of the current chart. Keyed by generation so a new
/// chart replaces the old DOM instead of patching it.
#[component]
pub fn ResourceChart(chart: BarChart) -> Element {
    let bars = layout_bars(&chart.series);
    let plot_height = VIEW_HEIGHT - PAD_TOP - PAD_BOTTOM;
    let max = axis_max(chart.series.max_value());
    let baseline = PAD_TOP + plot_height;
    let grid: Vec<GridLine> = (0..=GRID_LINES)
        .map(|step| {
            let fraction = step as f64 / GRID_LINES as f64;
            let y = baseline - fraction * plot_height;
            GridLine {
                y,
                tick_y: y + 4.0,
                tick: format::format_bytes(max * fraction),
            }
        })
        .collect();

    let view_box = format!("0 0 {VIEW_WIDTH} {VIEW_HEIGHT}");
    let grid_end = VIEW_WIDTH - PAD_RIGHT;
    let tick_x = PAD_LEFT - 8.0;
    let label_y = baseline + 10.0;
    let generation = chart.generation;
    let surface = chart.surface;
    let legend = chart.dataset_label;

    rsx! {
        figure {
            key: "{generation}",
            id: "{surface}",
            class: "resource-chart",
            svg {
                class: "resource-chart__svg",
                view_box: "{view_box}",
                width: "100%",
                preserve_aspect_ratio: "xMidYMid meet",
                for line_spec in grid.into_iter() {
                    line {
                        class: "resource-chart__grid",
                        x1: "{PAD_LEFT}",
                        x2: "{grid_end}",
                        y1: "{line_spec.y}",
                        y2: "{line_spec.y}",
                    }
                    text {
                        class: "resource-chart__tick",
                        x: "{tick_x}",
                        y: "{line_spec.tick_y}",
                        text_anchor: "end",
                        "{line_spec.tick}"
                    }
                }
                for bar in bars.into_iter() {
                    g { class: "resource-chart__bar",
                        rect {
                            x: "{bar.x}",
                            y: "{bar.y}",
                            width: "{bar.width}",
                            height: "{bar.height}",
                        }
                        text {
                            class: "resource-chart__label",
                            transform: "translate({bar.label_x}, {label_y}) rotate(45)",
                            "{bar.label}"
                        }
                    }
                }
            }
            figcaption { class: "resource-chart__legend",
                span { class: "resource-chart__swatch" }
                "{legend}"
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct GridLine {
    y: f64,
    tick_y: f64,
    tick: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[f64]) -> ChartSeries {
        ChartSeries {
            labels: (1..=values.len()).map(|i| format!("{i}:r{i}")).collect(),
            values: values.to_vec(),
        }
    }

    #[test]
    fn rendering_twice_leaves_one_live_chart() {
        let mut slot = ChartSlot::new();
        let data = series(&[500.0, 120.0]);

        slot.render(data.clone());
        let chart = slot.render(data.clone());
        assert_eq!(chart.generation, 2);
        assert_eq!(chart.series, data);
        assert_eq!(slot.live_instances(), 1);
    }

    #[test]
    fn chart_uses_fixed_surface_and_dataset() {
        let mut slot = ChartSlot::new();
        let chart = slot.render(series(&[1.0]));
        assert_eq!(chart.surface, "resource-chart");
        assert_eq!(chart.dataset_label, "transfer size in bytes");
    }

    #[test]
    fn destroy_empties_slot() {
        let mut slot = ChartSlot::new();
        slot.destroy();
        assert_eq!(slot.live_instances(), 0);

        slot.render(series(&[1.0]));
        slot.destroy();
        assert!(slot.current().is_none());
        assert_eq!(slot.live_instances(), 0);
    }

    #[test]
    fn tallest_bar_fills_plot_height() {
        let bars = layout_bars(&series(&[250.0, 1000.0, 0.0]));
        let plot_height = VIEW_HEIGHT - PAD_TOP - PAD_BOTTOM;
        assert_eq!(bars.len(), 3);
        assert!((bars[1].height - plot_height).abs() < 1e-9);
        assert!((bars[0].height - plot_height / 4.0).abs() < 1e-9);
        assert_eq!(bars[2].height, 0.0);
        assert!(bars[0].x < bars[1].x && bars[1].x < bars[2].x);
    }

    #[test]
    fn all_zero_series_does_not_divide_by_zero() {
        let bars = layout_bars(&series(&[0.0, 0.0]));
        assert!(bars.iter().all(|bar| bar.height == 0.0 && bar.y.is_finite()));
    }
}

use leptos::prelude::*;

const VIEW_WIDTH: f64 = 720.0;
const VIEW_HEIGHT: f64 = 300.0;
const AXIS_LEFT: f64 = 56.0;
const AXIS_BOTTOM: f64 = 28.0;
const TOP_PAD: f64 = 12.0;
const GAP_RATIO: f64 = 0.25;

/// One bar in SVG user units
#[derive(Debug, Clone, PartialEq)]
pub struct BarGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub label: String,
    pub value: f64,
}

/// Smallest "round" number (1, 2 or 5 times a power of ten) not below `max`
pub fn nice_ceiling(max: f64) -> f64 {
    if !max.is_finite() || max <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powi(max.log10().floor() as i32);
    [1.0, 2.0, 5.0, 10.0]
        .into_iter()
        .map(|step| step * magnitude)
        .find(|candidate| *candidate >= max)
        .unwrap_or(10.0 * magnitude)
}

/// Lay out one bar per point inside the plot area.
///
/// Negative and non-finite values are drawn as empty bars.
pub fn layout_bars(points: &[(String, f64)], width: f64, height: f64) -> Vec<BarGeometry> {
    if points.is_empty() {
        return Vec::new();
    }
    let plot_width = (width - AXIS_LEFT).max(0.0);
    let plot_height = (height - AXIS_BOTTOM - TOP_PAD).max(0.0);
    let max = points
        .iter()
        .map(|(_, v)| *v)
        .filter(|v| v.is_finite())
        .fold(0.0, f64::max);
    let scale_max = nice_ceiling(max);

    let slot = plot_width / points.len() as f64;
    let bar_width = slot * (1.0 - GAP_RATIO);

    points
        .iter()
        .enumerate()
        .map(|(i, (label, value))| {
            let clamped = if value.is_finite() { value.max(0.0) } else { 0.0 };
            let bar_height = plot_height * clamped / scale_max;
            BarGeometry {
                x: AXIS_LEFT + slot * i as f64 + (slot - bar_width) / 2.0,
                y: TOP_PAD + plot_height - bar_height,
                width: bar_width,
                height: bar_height,
                label: label.clone(),
                value: *value,
            }
        })
        .collect()
}

/// Vertical bar chart rendered as inline SVG
#[component]
pub fn BarChart(
    #[prop(into)] points: Signal<Vec<(String, f64)>>,
    /// Formats the scale label and the bar descriptions
    #[prop(optional)]
    format_value: Option<Callback<f64, String>>,
) -> impl IntoView {
    let baseline = VIEW_HEIGHT - AXIS_BOTTOM;
    let scale_label = move || {
        let max = points.with(|p| p.iter().map(|(_, v)| *v).filter(|v| v.is_finite()).fold(0.0, f64::max));
        let top = nice_ceiling(max);
        match format_value {
            Some(f) => f.run(top),
            None => format!("{top}"),
        }
    };

    view! {
        <svg
            class="bar-chart"
            viewBox=format!("0 0 {VIEW_WIDTH} {VIEW_HEIGHT}")
            preserveAspectRatio="xMidYMid meet"
            role="img"
        >
            <line class="bar-chart__axis" x1=AXIS_LEFT.to_string() y1=TOP_PAD.to_string() x2=AXIS_LEFT.to_string() y2=baseline.to_string() />
            <line class="bar-chart__axis" x1=AXIS_LEFT.to_string() y1=baseline.to_string() x2=VIEW_WIDTH.to_string() y2=baseline.to_string() />
            <text class="bar-chart__scale" x=(AXIS_LEFT - 6.0).to_string() y=(TOP_PAD + 4.0).to_string() text-anchor="end">
                {scale_label}
            </text>
            <text class="bar-chart__scale" x=(AXIS_LEFT - 6.0).to_string() y=baseline.to_string() text-anchor="end">"0"</text>
            {move || {
                layout_bars(&points.get(), VIEW_WIDTH, VIEW_HEIGHT)
                    .into_iter()
                    .map(|bar| {
                        let tooltip = match format_value {
                            Some(f) => format!("{}: {}", bar.label, f.run(bar.value)),
                            None => format!("{}: {}", bar.label, bar.value),
                        };
                        let label_x = bar.x + bar.width / 2.0;
                        view! {
                            <g class="bar-chart__bar">
                                <rect
                                    x=bar.x.to_string()
                                    y=bar.y.to_string()
                                    width=bar.width.to_string()
                                    height=bar.height.to_string()
                                    rx="2"
                                    aria-label=tooltip
                                />
                                <text class="bar-chart__label" x=label_x.to_string() y=(baseline + 16.0).to_string() text-anchor="middle">
                                    {bar.label}
                                </text>
                            </g>
                        }
                    })
                    .collect_view()
            }}
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(values: &[f64]) -> Vec<(String, f64)> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| (format!("{:02}/03", i + 1), *v))
            .collect()
    }

    #[test]
    fn test_nice_ceiling() {
        assert_eq!(nice_ceiling(0.0), 1.0);
        assert_eq!(nice_ceiling(7.0), 10.0);
        assert_eq!(nice_ceiling(120.0), 200.0);
        assert_eq!(nice_ceiling(450.0), 500.0);
        assert_eq!(nice_ceiling(1000.0), 1000.0);
    }

    #[test]
    fn test_empty_series_has_no_bars() {
        assert!(layout_bars(&[], VIEW_WIDTH, VIEW_HEIGHT).is_empty());
    }

    #[test]
    fn test_bars_scale_against_nice_ceiling() {
        let bars = layout_bars(&pts(&[100.0, 50.0, 0.0]), 356.0, 240.0);
        assert_eq!(bars.len(), 3);

        // plot area: width 300, height 200; ceiling for 100 is 100
        assert_eq!(bars[0].height, 200.0);
        assert_eq!(bars[1].height, 100.0);
        assert_eq!(bars[2].height, 0.0);
        for bar in &bars {
            assert_eq!(bar.y + bar.height, 212.0);
            assert_eq!(bar.width, 75.0);
        }
        assert_eq!(bars[0].x, 56.0 + 12.5);
        assert_eq!(bars[1].x, 156.0 + 12.5);
    }

    #[test]
    fn test_negative_and_nan_values_are_flat() {
        let bars = layout_bars(&pts(&[-5.0, f64::NAN, 10.0]), VIEW_WIDTH, VIEW_HEIGHT);
        assert_eq!(bars[0].height, 0.0);
        assert_eq!(bars[1].height, 0.0);
        assert!(bars[2].height > 0.0);
    }
}

//! Proportional device usage bar chart.

use colored::{Color, Colorize};
use mlprof_analysis::UsageCounts;
use mlprof_plan::ComputeDevice;

use crate::ReportStyle;

/// Chart title.
pub const CHART_TITLE: &str = "Compute Unit Mapping";

const BAR: &str = "█";
const SWATCH: &str = "■";

fn device_color(device: ComputeDevice) -> Color {
    match device {
        ComputeDevice::Cpu => Color::Blue,
        ComputeDevice::Gpu => Color::Green,
        ComputeDevice::Ane => Color::Magenta,
        ComputeDevice::Unknown => Color::Yellow,
    }
}

fn paint(text: &str, device: ComputeDevice, style: &ReportStyle) -> String {
    if style.color {
        text.color(device_color(device)).to_string()
    } else {
        text.to_string()
    }
}

/// Bar segment width per device: `floor(count * total_width / total)`.
///
/// Devices appear in [`UsageCounts::entries`] order. Every width is 0 when
/// nothing was counted.
pub fn bar_widths(counts: &UsageCounts, total_width: usize) -> Vec<(ComputeDevice, usize)> {
    let total = counts.total();
    counts
        .entries()
        .into_iter()
        .map(|(device, count)| {
            let width = if total > 0 {
                // u128 keeps the product exact; the quotient never exceeds total_width.
                (count as u128 * total_width as u128 / total as u128) as usize
            } else {
                0
            };
            (device, width)
        })
        .collect()
}

/// Renders the title, the bar, and a legend with per-device counts.
pub fn usage_chart(counts: &UsageCounts, style: &ReportStyle) -> String {
    let title = if style.color {
        CHART_TITLE.bold().to_string()
    } else {
        CHART_TITLE.to_string()
    };

    let mut bar = String::new();
    for (device, width) in bar_widths(counts, style.chart_width) {
        bar.push_str(&paint(&BAR.repeat(width), device, style));
    }

    let mut legend = format!("All: {}  ", counts.total());
    for (device, count) in counts.entries() {
        legend.push_str(&format!("{} {device}: {count}  ", paint(SWATCH, device, style)));
    }

    format!("{title}\n{bar}\n{legend}")
}

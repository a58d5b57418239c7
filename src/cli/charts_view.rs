//! Text renderers for the chart views. Pure line builders so the shapes can
//! be asserted in tests; coloring stays with the output helpers.

use crate::charts::{BarSeries, PieSlice};

const BAR_WIDTH: usize = 32;

/// Two rows per label: earnings (`+`) and expenses (`-`), scaled against the
/// largest amount in the series.
pub(crate) fn render_bar(series: &BarSeries) -> Vec<String> {
    if series.is_empty() {
        return vec!["(no entries recorded)".into()];
    }
    let scale = series.max_amount();
    let label_width = series
        .labels
        .iter()
        .map(String::len)
        .max()
        .unwrap_or(0)
        .max(8);

    let mut lines = Vec::new();
    for (index, label) in series.labels.iter().enumerate() {
        lines.push(format!(
            "{:<width$}  + |{}| {:>10.2}",
            label,
            bar(series.earnings[index], scale),
            series.earnings[index],
            width = label_width,
        ));
        lines.push(format!(
            "{:<width$}  - |{}| {:>10.2}",
            "",
            bar(series.expenses[index], scale),
            series.expenses[index],
            width = label_width,
        ));
    }
    lines
}

/// One row per non-empty group with its share of the categorized total.
pub(crate) fn render_pie(slices: &[PieSlice]) -> Vec<String> {
    let total: f64 = slices.iter().map(|slice| slice.total).sum();
    if total <= 0.0 {
        return vec!["(no categorized expenses recorded)".into()];
    }

    let mut lines = Vec::new();
    for slice in slices.iter().filter(|slice| slice.total > 0.0) {
        let share = slice.total / total * 100.0;
        let filled = ((share / 100.0) * BAR_WIDTH as f64).round() as usize;
        lines.push(format!(
            "{:<16} {:>10.2}  {:>5.1}%  {}",
            slice.group,
            slice.total,
            share,
            "#".repeat(filled.min(BAR_WIDTH)),
        ));
    }
    lines
}

fn bar(value: f64, scale: f64) -> String {
    let filled = if scale <= 0.0 {
        0
    } else {
        ((value / scale) * BAR_WIDTH as f64).round() as usize
    };
    let filled = filled.min(BAR_WIDTH);
    format!("{}{}", "#".repeat(filled), " ".repeat(BAR_WIDTH - filled))
}

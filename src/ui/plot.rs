use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Legend, Plot};

use crate::color::generate_palette;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Proportion chart (central panel)
// ---------------------------------------------------------------------------

/// Width of one bar; three series per label group.
const BAR_WIDTH: f64 = 0.25;

/// Render the label-proportion bar chart in the central panel.
pub fn proportion_plot(ui: &mut Ui, state: &AppState) {
    let Some(split) = &state.split else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a file to split it  (File → Open…)");
        });
        return;
    };
    let Some(chart) = &split.chart else {
        return;
    };

    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(&chart.title);
    });

    let colors = generate_palette(chart.series.len());

    Plot::new("proportion_plot")
        .legend(Legend::default())
        .x_axis_label(chart.label_column.clone())
        .y_axis_label("Count")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (si, series) in chart.series.iter().enumerate() {
                let offset = (si as f64 - 1.0) * BAR_WIDTH;

                let bars: Vec<Bar> = series
                    .counts
                    .iter()
                    .enumerate()
                    .map(|(li, &count)| {
                        let label = &chart.labels[li];
                        Bar::new(li as f64 + offset, count as f64)
                            .width(BAR_WIDTH)
                            .name(format!("{label} ({})", series.name))
                    })
                    .collect();

                let bar_chart = BarChart::new(bars)
                    .name(&series.name)
                    .color(colors[si]);

                plot_ui.bar_chart(bar_chart);
            }
        });
}

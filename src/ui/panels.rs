use eframe::egui::{self, Color32, RichText, ScrollArea, Slider, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – split controls
// ---------------------------------------------------------------------------

/// Render the left controls panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Split");
    ui.separator();

    let Some(dataset) = &state.dataset else {
        ui.label("No dataset loaded.");
        return;
    };

    // Clone what we need so we can mutate state inside the widgets.
    let columns = dataset.column_names.clone();
    let mut changed = false;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Label column selector ----
            ui.strong("Stratify by");
            let current_label_col = state.label_column.clone().unwrap_or_default();
            egui::ComboBox::from_id_salt("stratify_by")
                .selected_text(&current_label_col)
                .show_ui(ui, |ui: &mut Ui| {
                    for col in &columns {
                        if ui
                            .selectable_label(current_label_col == *col, col)
                            .clicked()
                        {
                            state.set_label_column(col.clone());
                        }
                    }
                });
            ui.separator();

            // ---- Test fraction ----
            ui.strong("Test fraction");
            if ui
                .add(Slider::new(&mut state.test_fraction, 0.01..=0.99).step_by(0.01))
                .drag_stopped()
            {
                changed = true;
            }
            ui.separator();

            // ---- Seed ----
            ui.strong("Seed (empty = random)");
            if ui.text_edit_singleline(&mut state.seed_text).lost_focus() {
                changed = true;
            }
            ui.separator();

            if ui.checkbox(&mut state.shuffle, "Shuffle outputs").changed() {
                changed = true;
            }

            if ui.button("Re-split").clicked() {
                changed = true;
            }

            // ---- Result summary ----
            if let Some(split) = &state.split {
                ui.separator();
                ui.label(format!(
                    "train: {} rows\ntest: {} rows",
                    split.train.len(),
                    split.test.len()
                ));
            }
        });

    if changed {
        state.resplit();
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} rows, {} columns loaded",
                ds.len(),
                ds.column_names.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open labeled tabular data")
        .add_filter("Supported files", &["parquet", "pq", "json", "csv"])
        .add_filter("Parquet", &["parquet", "pq"])
        .add_filter("JSON", &["json"])
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} rows with columns {:?}",
                    dataset.len(),
                    dataset.column_names
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}

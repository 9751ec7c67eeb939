//! Status bar panel: bottom bar showing dataset, subset and error info.

use std::path::Path;

use egui::{Color32, RichText, Ui};

use crate::data::LoadReport;

/// Context needed to render the status bar.
pub struct StatusBarContext<'a> {
    pub dataset_path: Option<&'a Path>,
    pub report: Option<&'a LoadReport>,
    /// Rows in the dataset
    pub total_rows: usize,
    /// Rows behind the charts currently shown
    pub subset_rows: usize,
    pub last_error: Option<&'a str>,
}

/// Render the status bar.
pub fn render_status_bar(ui: &mut Ui, ctx: &StatusBarContext<'_>) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        // === Dataset indicator ===
        let (color, text) = match (ctx.dataset_path, ctx.total_rows) {
            (Some(path), rows) if rows > 0 => (Color32::GREEN, path.display().to_string()),
            (Some(path), _) => (Color32::YELLOW, format!("{} (empty)", path.display())),
            (None, _) => (Color32::GRAY, "No dataset".to_string()),
        };
        ui.colored_label(color, "●");
        ui.label(RichText::new(text).small());

        ui.separator();

        ui.label(RichText::new(format!("Rows: {}", ctx.total_rows)).small());

        ui.separator();

        ui.label(RichText::new(format!("Showing: {}", ctx.subset_rows)).small());

        if let Some(report) = ctx.report {
            if report.skipped_missing > 0 {
                ui.separator();
                ui.label(
                    RichText::new(format!("Skipped: {}", report.skipped_missing)).small(),
                )
                .on_hover_text("Rows without a CO2 per capita value");
            }

            ui.separator();

            ui.label(
                RichText::new(format!(
                    "Loaded: {}",
                    report.loaded_at.format("%Y-%m-%d %H:%M:%S UTC")
                ))
                .small(),
            );
        }

        // === Error message (right-aligned) ===
        if let Some(error) = ctx.last_error {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.colored_label(Color32::RED, RichText::new(error).small());
            });
        }
    });
}

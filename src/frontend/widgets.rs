//! Custom widgets for the dashboard UI
//!
//! # Widgets
//!
//! - [`DescriptionCard`] - Framed heading plus wrapped body text
//! - [`ValueDisplay`] - Formatted value with label and optional unit

use egui::{Color32, Response, RichText, Ui, Widget};

/// A framed card with a heading and a paragraph of text
///
/// Used for the landing card, the mode description and the text beside each
/// chart.
pub struct DescriptionCard<'a> {
    title: &'a str,
    body: &'a str,
    accent: Option<Color32>,
}

impl<'a> DescriptionCard<'a> {
    pub fn new(title: &'a str, body: &'a str) -> Self {
        Self {
            title,
            body,
            accent: None,
        }
    }

    /// Color the heading
    pub fn with_accent(mut self, color: Color32) -> Self {
        self.accent = Some(color);
        self
    }
}

impl Widget for DescriptionCard<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        egui::Frame::group(ui.style())
            .inner_margin(egui::Margin::same(10))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                let mut heading = RichText::new(self.title).strong();
                if let Some(color) = self.accent {
                    heading = heading.color(color);
                }
                ui.label(heading);
                ui.add_space(4.0);
                ui.add(egui::Label::new(self.body).wrap());
            })
            .response
    }
}

/// A widget for displaying a value with a label and optional unit
pub struct ValueDisplay {
    label: String,
    value: String,
    unit: Option<String>,
}

impl ValueDisplay {
    /// Create a new value display
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            unit: None,
        }
    }

    /// Add a unit to the display
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    fn value_text(&self) -> String {
        match &self.unit {
            Some(unit) => format!("{} {}", self.value, unit),
            None => self.value.clone(),
        }
    }
}

impl Widget for ValueDisplay {
    fn ui(self, ui: &mut Ui) -> Response {
        ui.horizontal(|ui| {
            ui.label(format!("{}:", self.label));
            ui.strong(self.value_text());
        })
        .response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_display_text() {
        assert_eq!(ValueDisplay::new("Rows", "12").value_text(), "12");
        assert_eq!(
            ValueDisplay::new("Span", "31").with_unit("years").value_text(),
            "31 years"
        );
    }
}

//! Reusable UI components
//!
//! Pure rendering helpers: they take already-normalized data and never
//! touch the network or app state.

use crate::theme;
use crate::types::Quote;
use eframe::egui;

/// Large display card for the currently fetched quote.
pub fn quote_card(ui: &mut egui::Ui, quote: &Quote) {
    theme::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());

        ui.add(
            egui::Label::new(
                egui::RichText::new(egui_phosphor::regular::QUOTES)
                    .size(28.0)
                    .color(theme::ACCENT),
            )
            .selectable(false),
        );
        ui.add_space(theme::SPACING_SM);

        ui.add(
            egui::Label::new(
                egui::RichText::new(&quote.text)
                    .size(theme::FONT_QUOTE)
                    .italics()
                    .color(theme::TEXT_PRIMARY),
            )
            .wrap(),
        );

        ui.add_space(theme::SPACING_LG);
        ui.separator();
        ui.add_space(theme::SPACING_SM);

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new(&quote.author)
                        .size(theme::FONT_HEADING)
                        .color(theme::TEXT_SECONDARY),
                )
                .selectable(false),
            );
            ui.add(
                egui::Label::new(
                    egui::RichText::new("—")
                        .size(theme::FONT_HEADING)
                        .color(theme::TEXT_DIM),
                )
                .selectable(false),
            );
        });
    });
}

/// Compact card for one saved quote. Returns true when its delete button
/// was clicked.
pub fn saved_quote_card(ui: &mut egui::Ui, quote: &Quote) -> bool {
    let mut delete_clicked = false;
    theme::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());

        ui.add(
            egui::Label::new(
                egui::RichText::new(format!("\u{201c}{}\u{201d}", quote.text))
                    .size(theme::FONT_BODY)
                    .italics()
                    .color(theme::TEXT_PRIMARY),
            )
            .wrap(),
        );

        ui.add_space(theme::SPACING_MD);

        ui.horizontal(|ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new(&quote.author)
                        .size(theme::FONT_LABEL)
                        .strong()
                        .color(theme::TEXT_SECONDARY),
                )
                .selectable(false),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let label = format!("{} Delete", egui_phosphor::regular::TRASH);
                if ui.add(theme::button_danger(label)).clicked() {
                    delete_clicked = true;
                }
            });
        });
    });
    delete_clicked
}

/// Timed success banner with a check mark.
pub fn success_banner(ui: &mut egui::Ui, text: &str) {
    theme::banner_success_frame().show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new(egui_phosphor::regular::CHECK)
                        .size(16.0)
                        .color(theme::STATUS_SUCCESS),
                )
                .selectable(false),
            );
            ui.add(
                egui::Label::new(
                    egui::RichText::new(text)
                        .size(theme::FONT_BODY)
                        .strong()
                        .color(theme::TEXT_PRIMARY),
                )
                .wrap(),
            );
        });
    });
}

/// Timed error banner with a warning mark.
pub fn error_banner(ui: &mut egui::Ui, text: &str) {
    theme::banner_error_frame().show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new(egui_phosphor::regular::WARNING)
                        .size(16.0)
                        .color(theme::STATUS_ERROR),
                )
                .selectable(false),
            );
            ui.add(
                egui::Label::new(
                    egui::RichText::new(text)
                        .size(theme::FONT_BODY)
                        .color(theme::TEXT_PRIMARY),
                )
                .wrap(),
            );
        });
    });
}

/// Centered spinner with a caption.
pub fn loading_indicator(ui: &mut egui::Ui, caption: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(theme::SPACING_XL);
        ui.spinner();
        ui.add_space(theme::SPACING_SM);
        ui.add(
            egui::Label::new(
                egui::RichText::new(caption)
                    .size(theme::FONT_BODY)
                    .color(theme::TEXT_MUTED),
            )
            .selectable(false),
        );
        ui.add_space(theme::SPACING_XL);
    });
}

/// Empty-collection placeholder for the saved list.
pub fn empty_state(ui: &mut egui::Ui) {
    theme::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.vertical_centered(|ui| {
            ui.add_space(theme::SPACING_XL);
            ui.add(
                egui::Label::new(
                    egui::RichText::new(egui_phosphor::regular::TRAY)
                        .size(48.0)
                        .color(theme::TEXT_DIM),
                )
                .selectable(false),
            );
            ui.add_space(theme::SPACING_SM);
            ui.add(
                egui::Label::new(
                    egui::RichText::new("No Quotes Yet")
                        .size(theme::FONT_HEADING)
                        .strong()
                        .color(theme::TEXT_SECONDARY),
                )
                .selectable(false),
            );
            ui.add(
                egui::Label::new(
                    egui::RichText::new("Start collecting your favorite inspirational quotes!")
                        .size(theme::FONT_BODY)
                        .color(theme::TEXT_MUTED),
                )
                .selectable(false),
            );
            ui.add_space(theme::SPACING_XL);
        });
    });
}

//! Free-consultation dialog.
//!
//! A dimmed backdrop with a centered window carrying the three contact
//! channels. Clicking the backdrop or the close button dismisses it.

use eframe::egui;
use egui::RichText;

use alora::content::PROPRIETOR;
use crate::app::AppState;
use crate::presentation::color_mapping;
use crate::ui::page_manager::PageInteraction;

pub fn render_consultation_modal(
    ctx: &egui::Context,
    state: &AppState,
) -> Option<PageInteraction> {
    let mut interaction = None;
    let colors = color_mapping::theme_colors(
        state.theme.theme_manager(),
        state.theme.current_theme_name(),
    );

    // Dimmed backdrop that swallows clicks behind the window.
    let screen = ctx.content_rect();
    let backdrop = egui::Area::new(egui::Id::new("consultation_backdrop"))
        .fixed_pos(screen.min)
        .order(egui::Order::Middle)
        .show(ctx, |ui| {
            let response = ui.allocate_rect(screen, egui::Sense::click());
            ui.painter().rect_filled(screen, 0.0, colors.backdrop);
            response
        });
    if backdrop.inner.clicked() {
        interaction = Some(PageInteraction::ConsultationClosed);
    }

    egui::Window::new("Get Free Consultation")
        .collapsible(false)
        .resizable(false)
        .order(egui::Order::Foreground)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.set_min_width(320.0);
            ui.add_space(6.0);
            ui.label(
                RichText::new(format!(
                    "Talk to {} about your project. No charges, no obligations.",
                    PROPRIETOR.name
                ))
                .color(colors.text_dim),
            );
            ui.add_space(14.0);

            ui.horizontal(|ui| {
                ui.label(RichText::new("📞").size(18.0).color(colors.phone));
                ui.label("Call:");
                ui.hyperlink_to(PROPRIETOR.phone, PROPRIETOR.tel_link());
            });
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.label(RichText::new("💬").size(18.0).color(colors.whatsapp));
                ui.label("WhatsApp:");
                ui.hyperlink_to(PROPRIETOR.phone, PROPRIETOR.whatsapp_link());
            });
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.label(RichText::new("✉").size(18.0).color(colors.email));
                ui.label("Email:");
                ui.hyperlink_to(PROPRIETOR.email, PROPRIETOR.mailto_link());
            });

            ui.add_space(14.0);
            ui.vertical_centered(|ui| {
                if ui.button("Close").clicked() {
                    interaction = Some(PageInteraction::ConsultationClosed);
                }
            });
            ui.add_space(4.0);
        });

    interaction
}

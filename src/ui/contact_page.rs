//! Contact page: a single centered card with the proprietor's details and
//! the phone, WhatsApp, and email links.

use eframe::egui;
use egui::RichText;

use alora::content::{PROPRIETOR, STUDIO_NAME};
use crate::app::AppState;
use crate::presentation::color_mapping;
use crate::ui::page_manager::PageInteraction;

pub fn render_contact_page(
    ui: &mut egui::Ui,
    _ctx: &egui::Context,
    state: &mut AppState,
) -> Option<PageInteraction> {
    let mut interaction = None;
    let colors = color_mapping::theme_colors(
        state.theme.theme_manager(),
        state.theme.current_theme_name(),
    )
    .clone();

    ui.add_space(16.0);
    if ui.link("← Back to Home").clicked() {
        interaction = Some(PageInteraction::NavigateBack);
    }

    ui.add_space(40.0);
    ui.vertical_centered(|ui| {
        ui.set_max_width(520.0);

        egui::Frame::group(ui.style())
            .fill(colors.card)
            .corner_radius(10.0)
            .inner_margin(28.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("Get in Touch")
                            .size(28.0)
                            .strong()
                            .color(colors.heading),
                    );
                    ui.add_space(6.0);
                    ui.label(
                        RichText::new(format!(
                            "Reach out to {} and we will get back to you within a day.",
                            STUDIO_NAME
                        ))
                        .color(colors.text_dim),
                    );
                    ui.add_space(18.0);

                    ui.label(RichText::new(PROPRIETOR.name).size(18.0).strong());
                    ui.label(RichText::new(PROPRIETOR.role).color(colors.text_dim));
                    ui.add_space(14.0);
                    ui.separator();
                    ui.add_space(14.0);

                    ui.horizontal(|ui| {
                        ui.label("📞");
                        ui.hyperlink_to(PROPRIETOR.phone, PROPRIETOR.tel_link());
                    });
                    ui.add_space(6.0);
                    ui.horizontal(|ui| {
                        ui.label("💬");
                        ui.hyperlink_to("Chat on WhatsApp", PROPRIETOR.whatsapp_link());
                    });
                    ui.add_space(6.0);
                    ui.horizontal(|ui| {
                        ui.label("✉");
                        ui.hyperlink_to(PROPRIETOR.email, PROPRIETOR.mailto_link());
                    });
                });
            });
    });
    ui.add_space(40.0);

    interaction
}

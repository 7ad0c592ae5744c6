//! Services page: the six service cards, material specification tables, and
//! the terms sections.

use eframe::egui;
use egui::RichText;

use alora::content::{MATERIALS, SERVICES, TERMS};
use crate::app::AppState;
use crate::presentation::color_mapping;
use crate::ui::motion;
use crate::ui::page_manager::PageInteraction;

const SERVICE_COLUMNS: usize = 3;

pub fn render_services_page(
    ui: &mut egui::Ui,
    ctx: &egui::Context,
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

    ui.add_space(12.0);
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new("Our Services")
                .size(32.0)
                .strong()
                .color(colors.heading),
        );
        ui.label(
            RichText::new("End-to-end interior solutions for homes and offices.")
                .color(colors.text_dim),
        );
    });
    ui.add_space(24.0);

    // Service cards in rows of three.
    let factor = motion::entrance_factor(ctx, egui::Id::new("services-cards"), state.motion_enabled);
    for row in SERVICES.chunks(SERVICE_COLUMNS) {
        ui.columns(SERVICE_COLUMNS, |columns| {
            for (column, service) in columns.iter_mut().zip(row.iter()) {
                egui::Frame::group(column.style())
                    .fill(motion::faded(colors.card, factor))
                    .corner_radius(8.0)
                    .inner_margin(14.0)
                    .show(column, |ui| {
                        ui.vertical_centered(|ui| {
                            ui.label(RichText::new(service.icon).size(36.0));
                            ui.add_space(4.0);
                            ui.label(
                                RichText::new(service.title)
                                    .size(17.0)
                                    .strong()
                                    .color(colors.heading),
                            );
                            ui.add_space(4.0);
                            ui.label(
                                RichText::new(service.description)
                                    .small()
                                    .color(colors.text_dim),
                            );
                        });
                    });
            }
        });
        ui.add_space(10.0);
    }

    ui.add_space(16.0);
    ui.separator();

    // Material specification tables.
    ui.add_space(16.0);
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new("Materials We Use")
                .size(26.0)
                .strong()
                .color(colors.heading),
        );
    });
    ui.add_space(12.0);

    for section in MATERIALS.iter() {
        render_material_section(ui, section, &colors);
        ui.add_space(16.0);
    }

    ui.separator();

    // Terms.
    ui.add_space(16.0);
    for terms in TERMS.iter() {
        ui.label(
            RichText::new(terms.category)
                .size(20.0)
                .strong()
                .color(colors.heading),
        );
        ui.add_space(6.0);
        for item in terms.items.iter() {
            ui.horizontal_wrapped(|ui| {
                ui.label(RichText::new("•").color(colors.accent));
                ui.label(RichText::new(*item).color(colors.text));
            });
        }
        ui.add_space(14.0);
    }

    ui.separator();
    ui.add_space(20.0);
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new("Have a project in mind?")
                .size(20.0)
                .strong()
                .color(colors.heading),
        );
        ui.add_space(10.0);
        let cta = egui::Button::new(
            RichText::new("Get Free Consultation")
                .size(15.0)
                .color(egui::Color32::WHITE),
        )
        .fill(colors.accent)
        .corner_radius(20.0)
        .min_size(egui::vec2(220.0, 40.0));
        if ui.add(cta).clicked() {
            interaction = Some(PageInteraction::ConsultationOpened);
        }
    });
    ui.add_space(32.0);

    interaction
}

fn render_material_section(
    ui: &mut egui::Ui,
    section: &alora::MaterialSection,
    colors: &alora::ThemeColors,
) {
    ui.label(
        RichText::new(section.category)
            .size(18.0)
            .strong()
            .color(colors.accent_strong),
    );
    ui.add_space(6.0);

    egui::Grid::new(section.category)
        .striped(true)
        .min_col_width(120.0)
        .show(ui, |ui| {
            ui.label(RichText::new("Material").strong().color(colors.heading));
            ui.label(RichText::new("Grade").strong().color(colors.heading));
            ui.label(RichText::new("Details").strong().color(colors.heading));
            ui.end_row();

            for spec in section.items.iter() {
                ui.label(spec.name);
                ui.label(spec.grade);
                ui.label(material_details(spec));
                ui.end_row();
            }
        });
}

/// Collapses the optional spec fields into one display string.
fn material_details(spec: &alora::MaterialSpec) -> String {
    let mut parts = Vec::new();
    if let Some(thickness) = spec.thickness {
        parts.push(format!("Thickness: {thickness}"));
    }
    if let Some(brand) = spec.brand {
        parts.push(format!("Brand: {brand}"));
    }
    if let Some(color) = spec.color {
        parts.push(format!("Color: {color}"));
    }
    if let Some(kind) = spec.kind {
        parts.push(format!("Type: {kind}"));
    }
    if parts.is_empty() {
        "-".to_string()
    } else {
        parts.join(", ")
    }
}

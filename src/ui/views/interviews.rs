use crate::app::InterviewApp;
use crate::ui::helpers::card;
use crate::ui::layout::main_panel;
use egui::{Context, RichText};

const FORMATS: [(&str, &str, &str); 3] = [
    ("💻", "Coding Interview", "45 min · data structures and algorithms"),
    ("🏗", "System Design", "60 min · architecture and trade-offs"),
    ("🗣", "Behavioral", "30 min · leadership and teamwork stories"),
];

pub fn ui_interviews(app: &mut InterviewApp, ctx: &Context) {
    main_panel(ctx, app.panels.scroll_to_top, |ui| {
        ui.add_space(8.0);
        ui.heading("Mock Interviews");
        ui.label(RichText::new("Practice under real interview conditions.").weak());
        ui.add_space(12.0);

        for (icon, title, info) in FORMATS {
            card(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(RichText::new(icon).heading());
                    ui.vertical(|ui| {
                        ui.label(RichText::new(title).strong());
                        ui.label(RichText::new(info).small());
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        // Todavía no hay entrevistas reales: el botón recuerda el aviso
                        ui.add_enabled(false, egui::Button::new("Schedule"))
                            .on_disabled_hover_text("Coming soon");
                    });
                });
            });
            ui.add_space(8.0);
        }
    });
}

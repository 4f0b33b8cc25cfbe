use crate::app::InterviewApp;
use crate::ui::helpers::card;
use crate::ui::layout::main_panel;
use egui::{Context, ProgressBar, RichText};

pub fn ui_achievements(app: &mut InterviewApp, ctx: &Context) {
    main_panel(ctx, app.panels.scroll_to_top, |ui| {
        ui.add_space(8.0);
        ui.heading("Achievements");
        let total = app.achievements.all().len();
        ui.label(
            RichText::new(format!("{} of {total} unlocked", app.unlocked_achievements())).weak(),
        );
        ui.add_space(12.0);

        for (a, unlocked, completion) in app.achievement_rows() {
            card(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    let icon = if unlocked { "🏆" } else { "🔒" };
                    ui.label(RichText::new(icon).heading());
                    ui.vertical(|ui| {
                        ui.label(RichText::new(&a.name).strong());
                        ui.label(RichText::new(&a.description).small());
                        ui.add(
                            ProgressBar::new(completion)
                                .desired_width(240.0)
                                .show_percentage(),
                        );
                    });
                });
            });
            ui.add_space(8.0);
        }
    });
}

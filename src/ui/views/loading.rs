use crate::app::InterviewApp;
use crate::ui::layout::centered_panel;
use egui::{Context, ProgressBar, RichText, Spinner};

pub fn ui_loading(app: &mut InterviewApp, ctx: &Context) {
    let total = app.config.loading_secs.max(f64::EPSILON);
    let progress = (app.now / total).clamp(0.0, 1.0) as f32;

    centered_panel(ctx, 220.0, 360.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            ui.label(RichText::new("Interview Master").heading().strong());
            ui.add_space(16.0);
            ui.add(Spinner::new().size(32.0));
            ui.add_space(16.0);
            ui.add(ProgressBar::new(progress).desired_width(260.0));
            ui.add_space(8.0);
            ui.label(RichText::new("Preparing your workspace...").small());
            ui.add_space(24.0);
        });
    });
}

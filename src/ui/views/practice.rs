use crate::app::InterviewApp;
use crate::catalog::Selection;
use crate::model::{Difficulty, Status, Topic};
use crate::ui::helpers::{card, company_chips, difficulty_badge};
use crate::ui::layout::main_panel;
use crate::view_models::{ListingView, QuestionCard};
use egui::{ComboBox, Context, RichText, Ui};

pub fn ui_practice(app: &mut InterviewApp, ctx: &Context) {
    main_panel(ctx, app.panels.scroll_to_top, |ui| {
        ui.add_space(8.0);
        ui.heading(app.listing_title());
        ui.add_space(8.0);

        // ----------- FILTROS -----------
        ui.horizontal_wrapped(|ui| {
            selection_combo(ui, "filter_topic", "All topics", &mut app.filters.topic, &Topic::ALL, |t| {
                t.label()
            });
            selection_combo(
                ui,
                "filter_difficulty",
                "All difficulties",
                &mut app.filters.difficulty,
                &Difficulty::ALL,
                |d| d.as_str(),
            );
            selection_combo(ui, "filter_status", "All status", &mut app.filters.status, &Status::ALL, |s| {
                s.as_str()
            });
            if ui.button("Apply filters").clicked() {
                app.apply_filters();
            }
        });
        ui.add_space(12.0);

        match app.listing() {
            ListingView::Empty { message } => {
                card(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(24.0);
                        ui.label(RichText::new("🔍").heading());
                        ui.label(RichText::new(message).strong());
                        ui.label(RichText::new("Try a different search or filter").weak());
                        ui.add_space(24.0);
                    });
                });
            }
            ListingView::Cards(cards) => {
                for c in &cards {
                    question_card(app, ui, c);
                    ui.add_space(8.0);
                }
            }
        }
    });
}

fn question_card(app: &mut InterviewApp, ui: &mut Ui, c: &QuestionCard) {
    let resp = card(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(RichText::new(&c.title).strong());
            difficulty_badge(ui, c.difficulty);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let star = if c.saved { "★" } else { "☆" };
                if ui.button(star).on_hover_text("Save question").clicked() {
                    app.toggle_saved(c.id);
                }
            });
        });
        ui.label(&c.preview);
        ui.horizontal(|ui| {
            ui.label(RichText::new(format!("⏱ {}", c.avg_time)).small());
            ui.label(RichText::new(format!("👥 {}", c.attempts)).small());
            ui.label(RichText::new(format!("✔ {}", c.success)).small());
        });
        company_chips(ui, &c.companies);
        ui.button("Open →").clicked()
    });
    if resp {
        app.load_question(c.id);
    }
}

/// Desplegable de un eje de filtro; la primera opción es "sin restricción"
fn selection_combo<T: Copy + PartialEq>(
    ui: &mut Ui,
    id: &str,
    all_label: &str,
    current: &mut Selection<T>,
    options: &[T],
    label: impl Fn(&T) -> &'static str,
) {
    let shown = match current {
        Selection::All => all_label.to_string(),
        Selection::Only(v) => label(v).to_string(),
    };
    ComboBox::from_id_salt(id)
        .selected_text(shown)
        .show_ui(ui, |ui| {
            ui.selectable_value(current, Selection::All, all_label);
            for opt in options {
                ui.selectable_value(current, Selection::Only(*opt), label(opt));
            }
        });
}

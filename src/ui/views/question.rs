use crate::app::{InterviewApp, QuestionTab};
use crate::code_utils::syntax_for;
use crate::model::SolutionLang;
use crate::ui::helpers::{card, company_chips, difficulty_badge};
use crate::ui::layout::{code_editor_solution, main_panel};
use egui::{Context, RichText};

pub fn ui_question(app: &mut InterviewApp, ctx: &Context) {
    let Some(detail) = app.detail_view() else {
        // Sin pregunta seleccionada no hay nada que enseñar
        app.back_to_practice();
        return;
    };

    main_panel(ctx, app.panels.scroll_to_top, |ui| {
        ui.add_space(8.0);
        if ui.button("← Back to questions").clicked() {
            app.back_to_practice();
            return;
        }
        ui.add_space(8.0);

        card(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.heading(&detail.title);
                difficulty_badge(ui, detail.difficulty);
                ui.label(RichText::new(detail.topic).small());
            });
            ui.horizontal(|ui| {
                ui.label(format!("👥 {}", detail.attempts));
                ui.label(format!("✔ {}", detail.success));
                ui.label(format!("⏱ {}", detail.avg_time));
            });
            ui.add_space(4.0);
            ui.label(RichText::new("Asked at").small().weak());
            company_chips(ui, &detail.companies);
        });
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            for (tab, label) in [
                (QuestionTab::Description, "Description"),
                (QuestionTab::Hints, "Hints"),
                (QuestionTab::Solution, "Solution"),
            ] {
                ui.selectable_value(&mut app.detail.tab, tab, label);
            }
        });
        ui.add_space(8.0);

        card(ui, |ui| {
            ui.set_width(ui.available_width());
            match app.detail.tab {
                QuestionTab::Description => {
                    ui.label(&detail.description);
                }
                QuestionTab::Hints => {
                    if detail.hints.is_empty() {
                        ui.label(RichText::new("No hints for this question.").weak());
                    }
                    for (i, hint) in detail.hints.iter().take(app.detail.revealed_hints).enumerate() {
                        ui.label(format!("💡 Hint {}: {hint}", i + 1));
                    }
                    if app.detail.revealed_hints < detail.hints.len()
                        && ui.button("Show next hint").clicked()
                    {
                        app.show_next_hint();
                    }
                }
                QuestionTab::Solution => {
                    ui.horizontal(|ui| {
                        for lang in SolutionLang::ALL {
                            ui.selectable_value(&mut app.detail.solution_lang, lang, lang.label());
                        }
                    });
                    let lang = app.detail.solution_lang;
                    let code = app
                        .current_question()
                        .map(|q| q.solution_for(lang).to_string())
                        .unwrap_or_default();
                    let rows = code.lines().count().clamp(4, 30);
                    code_editor_solution(ui, "solution", rows, syntax_for(lang), &code);
                }
            }
        });
        ui.add_space(12.0);

        ui.horizontal(|ui| {
            if ui.button("▶ Start coding").clicked() {
                app.start_coding();
            }
            let saved = app.is_saved(detail.id);
            let label = if saved { "★ Saved" } else { "☆ Save question" };
            if ui.button(label).clicked() {
                app.save_question();
            }
        });
        ui.add_space(16.0);
    });
}

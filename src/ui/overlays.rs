// src/ui/overlays.rs
//
// Todo lo que flota sobre las vistas: menús desplegables, modales y avisos.

use super::helpers::console_line;
use super::layout::{code_editor_input, two_button_row};
use crate::app::InterviewApp;
use crate::code_utils::syntax_for;
use crate::model::SolutionLang;
use crate::notifications::{NotificationKind, ToastPhase};
use egui::{Align2, Area, Color32, Context, Frame, Id, Margin, Order, RichText, Window};

pub fn inbox_menu(app: &mut InterviewApp, ctx: &Context) {
    if !app.inbox.open {
        return;
    }
    Window::new("Notifications")
        .anchor(Align2::RIGHT_TOP, [-60.0, 40.0])
        .collapsible(false)
        .resizable(false)
        .default_width(300.0)
        .show(ctx, |ui| {
            for item in app.inbox.items() {
                let title = if item.unread {
                    RichText::new(format!("● {}", item.title)).strong()
                } else {
                    RichText::new(&item.title)
                };
                ui.label(title);
                ui.label(RichText::new(&item.body).small());
                ui.label(RichText::new(&item.time_ago).small().weak());
                ui.separator();
            }
            if ui.button("Mark all as read").clicked() {
                app.inbox.mark_all_read();
            }
        });
}

pub fn user_menu(app: &mut InterviewApp, ctx: &Context) {
    if !app.panels.user_menu_open {
        return;
    }
    Window::new("user_menu")
        .title_bar(false)
        .anchor(Align2::RIGHT_TOP, [-8.0, 40.0])
        .resizable(false)
        .show(ctx, |ui| {
            ui.label(RichText::new(&app.profile.name).strong());
            ui.label(RichText::new(&app.profile.email).small().weak());
            ui.label(format!(
                "Level {} · {} points",
                app.profile.level(),
                app.profile.points
            ));
            ui.separator();
            if ui.button("🏆 Achievements").clicked() {
                app.switch_view(crate::model::View::Achievements);
            }
            if ui.button("📤 Share progress").clicked() {
                let text = app.share_progress();
                ctx.copy_text(text.to_string());
                app.panels.user_menu_open = false;
            }
            if ui.button("⬇ Export data").clicked() {
                app.export_data();
            }
        });
}

/// Modal del editor con consola de resultados
pub fn code_modal(app: &mut InterviewApp, ctx: &Context) {
    if !app.panels.code_modal_open {
        return;
    }
    let title = app
        .current_question()
        .map(|q| q.title.clone())
        .unwrap_or_else(|| "Code Playground".to_string());
    let mut open = true;
    Window::new(title)
        .id(Id::new("code_modal"))
        .open(&mut open)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .collapsible(false)
        .resizable(false)
        .default_width(640.0)
        .show(ctx, |ui| {
            let width = 620.0;
            ui.horizontal(|ui| {
                let mut lang = app.editor.lang;
                for l in SolutionLang::ALL {
                    ui.selectable_value(&mut lang, l, l.label());
                }
                app.set_editor_lang(lang);
            });
            ui.add_space(4.0);
            let syntax = syntax_for(app.editor.lang);
            code_editor_input(ui, "user_code", width, 16, syntax, &mut app.editor.text, 320.0);
            ui.add_space(8.0);

            let running = app.runner.is_running();
            ui.add_enabled_ui(!running, |ui| {
                let (run, submit) = two_button_row(ui, width, "▶ Run", "✔ Submit");
                if run {
                    app.run_code();
                }
                if submit {
                    app.submit_code();
                }
            });
            ui.add_space(8.0);

            Frame::default()
                .fill(Color32::from_rgb(0x1e, 0x1e, 0x2e))
                .inner_margin(Margin::symmetric(12, 8))
                .corner_radius(6)
                .show(ui, |ui| {
                    ui.set_width(width - 24.0);
                    ui.horizontal(|ui| {
                        ui.label(RichText::new("Results").strong());
                        if running {
                            ui.spinner();
                        }
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.small_button("Clear").clicked() {
                                app.clear_results();
                            }
                        });
                    });
                    for line in app.runner.console() {
                        console_line(ui, line);
                    }
                });
        });
    if !open {
        app.panels.code_modal_open = false;
    }
}

pub fn achievement_modal(app: &mut InterviewApp, ctx: &Context) {
    let Some(unlock) = app.achievements.showing().cloned() else {
        return;
    };
    let mut dismiss = false;
    Window::new("Achievement Unlocked!")
        .id(Id::new("achievement_modal"))
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("🏆").size(48.0));
                ui.label(RichText::new(&unlock.name).heading().strong());
                ui.label(&unlock.description);
                ui.add_space(8.0);
                dismiss = ui.button("Awesome!").clicked();
            });
        });
    if dismiss {
        app.achievements.dismiss();
    }
}

/// Pila de avisos en la esquina inferior derecha, con fundido de salida
pub fn toasts(app: &mut InterviewApp, ctx: &Context) {
    let visible = app.toasts.visible(app.now);
    if visible.is_empty() {
        return;
    }
    Area::new(Id::new("toasts"))
        .anchor(Align2::RIGHT_BOTTOM, [-16.0, -48.0])
        .order(Order::Foreground)
        .interactable(false)
        .show(ctx, |ui| {
            for (toast, phase) in visible {
                let alpha = match phase {
                    ToastPhase::Leaving(a) => a,
                    _ => 1.0,
                };
                let accent = match toast.kind {
                    NotificationKind::Success => Color32::from_rgb(0x10, 0xb9, 0x81),
                    NotificationKind::Error => Color32::from_rgb(0xef, 0x44, 0x44),
                    NotificationKind::Info => Color32::from_rgb(0x63, 0x66, 0xf1),
                };
                Frame::default()
                    .fill(ui.visuals().window_fill().gamma_multiply(alpha))
                    .stroke(egui::Stroke::new(1.0, accent.gamma_multiply(alpha)))
                    .inner_margin(Margin::symmetric(12, 8))
                    .corner_radius(8)
                    .show(ui, |ui| {
                        let color = ui.visuals().text_color().gamma_multiply(alpha);
                        ui.label(
                            RichText::new(format!("{} {}", toast.kind.icon(), toast.message))
                                .color(color),
                        );
                    });
                ui.add_space(6.0);
            }
        });
}

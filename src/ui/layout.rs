use crate::app::InterviewApp;
use crate::model::{Topic, View};
use crate::view_models::{breadcrumb, company_label};
use egui::{
    Align, Button, CentralPanel, Color32, Context, Frame, LayerId, Layout, RichText, ScrollArea,
    Stroke, TextEdit, Ui, pos2,
};
use egui_code_editor::{CodeEditor, ColorTheme, Syntax};

pub const MAX_CONTENT_WIDTH: f32 = 960.0;

pub fn top_panel(app: &mut InterviewApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            if ui.button("☰").on_hover_text("Toggle sidebar").clicked() {
                app.panels.sidebar_open = !app.panels.sidebar_open;
            }
            ui.label(RichText::new("Interview Master").strong());
            ui.separator();

            let [home, here] = breadcrumb(app.view());
            if ui.link(home).clicked() {
                app.switch_view(View::Dashboard);
            }
            ui.label("›");
            ui.label(here);

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                let initials = app.profile.initials();
                if ui.button(initials).clicked() {
                    app.toggle_user_menu();
                }

                let unread = app.inbox.unread_count();
                let bell = if unread > 0 {
                    format!("🔔 {unread}")
                } else {
                    "🔔".to_string()
                };
                if ui.button(bell).clicked() {
                    app.toggle_notifications();
                }

                // BUSCADOR (Ctrl/Cmd+K lo enfoca)
                let resp = ui.add(
                    TextEdit::singleline(&mut app.search_input)
                        .hint_text("Search questions... (Ctrl+K)")
                        .desired_width(260.0),
                );
                if app.panels.focus_search {
                    resp.request_focus();
                    app.panels.focus_search = false;
                }
                if resp.changed() {
                    app.on_search_input();
                }
            });
        });
    });
}

pub fn side_panel(app: &mut InterviewApp, ctx: &Context) {
    egui::SidePanel::left("side_panel")
        .resizable(false)
        .default_width(200.0)
        .show(ctx, |ui| {
            ScrollArea::vertical().id_salt("sidebar").show(ui, |ui| {
                ui.add_space(8.0);
                for view in [
                    View::Dashboard,
                    View::Practice,
                    View::Interviews,
                    View::Achievements,
                ] {
                    let active = app.view() == view;
                    if ui
                        .add_sized([180.0, 28.0], Button::new(view.title()).selected(active))
                        .clicked()
                    {
                        app.switch_view(view);
                    }
                }

                ui.add_space(12.0);
                ui.label(RichText::new("Topics").small().strong());
                let counts = app.catalog.topic_counts();
                for (topic, n) in counts {
                    let active = app.view() == View::Practice && app.nav.topic_filter() == Some(topic);
                    let label = format!("{}  ({n})", topic.label());
                    if ui.selectable_label(active, label).clicked() {
                        app.load_topic(topic);
                    }
                }

                ui.add_space(12.0);
                ui.label(RichText::new("Companies").small().strong());
                let companies: Vec<String> =
                    app.catalog.companies().iter().map(|c| c.to_string()).collect();
                for company in companies {
                    let active = app.nav.company_filter() == Some(company.as_str());
                    if ui
                        .selectable_label(active, company_label(&company))
                        .clicked()
                    {
                        app.load_company_questions(&company);
                    }
                }
            });
        });
}

pub fn bottom_panel(app: &mut InterviewApp, ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- BOTÓN DE TEMA -----------
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let label = if app.panels.dark_mode {
                "☀ Light mode"
            } else {
                "🌙 Dark mode"
            };
            if ui.button(label).clicked() {
                app.toggle_theme();
            }
            ui.label(
                RichText::new(format!(
                    "🔥 {} day streak · Level {}",
                    app.profile.streak,
                    app.profile.level()
                ))
                .small(),
            );
        });
    });
}

/// Panel central transparente (deja ver las partículas) con scroll vertical.
/// Con `scroll_to_top` el scroll vuelve arriba en este frame.
pub fn main_panel(ctx: &Context, scroll_to_top: bool, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default()
        .frame(Frame::central_panel(&ctx.style()).fill(Color32::TRANSPARENT))
        .show(ctx, |ui| {
            let mut area = ScrollArea::vertical()
                .id_salt("main_scroll")
                .auto_shrink([false; 2]);
            if scroll_to_top {
                area = area.vertical_scroll_offset(0.0);
            }
            area.show(ui, |ui| {
                let w = ui.available_width().min(MAX_CONTENT_WIDTH);
                ui.set_max_width(w);
                inner(ui);
            });
        });
}

/// Panel centrado tanto vertical como horizontalmente,
/// con un tamaño de contenido máximo y un bloque interior `inner`.
pub fn centered_panel(ctx: &Context, est_height: f32, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        ui.vertical_centered(|ui| {
            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .corner_radius(8)
                .show(ui, |ui| {
                    let w = ui.available_width().min(max_width);
                    ui.set_width(w);
                    inner(ui);
                });
        });
    });
}

pub fn particles_background(app: &mut InterviewApp, ctx: &Context) {
    let rect = ctx.screen_rect();
    let mut rng = rand::thread_rng();
    app.particles.resize(rect.width(), rect.height(), &mut rng);
    let dt = ctx.input(|i| i.stable_dt).min(0.1);
    app.particles.step(dt);

    let cfg = app.particles.config;
    let [r, g, b] = cfg.color;
    let alpha = |a: f32| (a.clamp(0.0, 1.0) * 255.0) as u8;
    let painter = ctx.layer_painter(LayerId::background());
    let ps = app.particles.particles();
    for (i, j, opacity) in app.particles.links() {
        let (a, b_) = (ps[i].pos, ps[j].pos);
        painter.line_segment(
            [pos2(a[0], a[1]), pos2(b_[0], b_[1])],
            Stroke::new(1.0, Color32::from_rgba_unmultiplied(r, g, b, alpha(opacity))),
        );
    }
    let dot = Color32::from_rgba_unmultiplied(r, g, b, alpha(cfg.opacity));
    for p in ps {
        painter.circle_filled(pos2(p.pos[0], p.pos[1]), p.size, dot);
    }
}

/// Editor de entrada con ancho fijo
pub fn code_editor_input(
    ui: &mut Ui,
    id: &str,
    width: f32,
    rows: usize,
    syntax: Syntax,
    text: &mut String,
    max_height: f32,
) {
    ScrollArea::vertical()
        .id_salt(id)
        .max_height(max_height)
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            ui.set_width(width);
            CodeEditor::default()
                .id_source(id)
                .with_rows(rows)
                .with_fontsize(14.0)
                .with_theme(ColorTheme::GITHUB_DARK)
                .with_syntax(syntax)
                .with_numlines(true)
                .vscroll(false)
                .show(ui, text);
        });
}

/// Editor de sólo lectura (solución); los cambios se descartan en cada frame
pub fn code_editor_solution(ui: &mut Ui, id: &str, rows: usize, syntax: Syntax, code: &str) {
    let mut buf = code.to_owned();
    CodeEditor::default()
        .id_source(id)
        .with_rows(rows)
        .with_fontsize(13.0)
        .with_theme(ColorTheme::GITHUB_DARK)
        .with_syntax(syntax)
        .with_numlines(true)
        .vscroll(false)
        .show(ui, &mut buf);
}

/// Dibuja dos botones del mismo tamaño en una fila.
/// Devuelve (clic izquierdo, clic derecho).
pub fn two_button_row(ui: &mut Ui, width: f32, left_label: &str, right_label: &str) -> (bool, bool) {
    let btn_w = (width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        clicked_left = ui.add_sized([btn_w, 32.0], Button::new(left_label)).clicked();
        clicked_right = ui.add_sized([btn_w, 32.0], Button::new(right_label)).clicked();
    });
    (clicked_left, clicked_right)
}

/// Fila de temas para el panel principal y la vista de práctica
pub fn topic_buttons(app: &mut InterviewApp, ui: &mut Ui) {
    ui.horizontal_wrapped(|ui| {
        for topic in Topic::ALL {
            if ui.button(topic.label()).clicked() {
                app.load_topic(topic);
            }
        }
    });
}

use crate::app::InterviewApp;
use crate::chart::MasteryChart;
use crate::ui::helpers::{card, difficulty_badge, stat_card};
use crate::ui::layout::{main_panel, topic_buttons};
use egui::{Align2, Color32, Context, FontId, Pos2, RichText, Sense, Shape, Stroke, Ui, Vec2};
use std::f32::consts::{FRAC_PI_2, TAU};

const MASTERY_COLOR: Color32 = Color32::from_rgb(0x63, 0x66, 0xf1);
const TARGET_COLOR: Color32 = Color32::from_rgb(0x10, 0xb9, 0x81);

pub fn ui_dashboard(app: &mut InterviewApp, ctx: &Context) {
    main_panel(ctx, app.panels.scroll_to_top, |ui| {
        ui.add_space(8.0);
        ui.heading(format!("Welcome back, {}!", app.profile.first_name()));
        ui.label(
            RichText::new(format!(
                "You're on a {}-day streak. Keep it going!",
                app.stats.streak
            ))
            .weak(),
        );
        ui.add_space(12.0);

        // ----------- ESTADÍSTICAS -----------
        let w = ((ui.available_width() - 24.0) / 4.0).max(120.0);
        let stats = &app.stats;
        let cards = [
            (stats.questions_solved.to_string(), "Questions Solved"),
            (format!("{}%", stats.accuracy_pct), "Accuracy"),
            (format!("{}h", stats.hours_practiced), "Hours Practiced"),
            (stats.streak.to_string(), "Day Streak"),
        ];
        ui.horizontal_wrapped(|ui| {
            for (value, label) in &cards {
                stat_card(ui, value, label, w);
            }
        });
        ui.add_space(12.0);

        card(ui, |ui| {
            ui.label(RichText::new("Topic Mastery").strong());
            mastery_radar(ui, &app.chart, 300.0);
        });
        ui.add_space(12.0);

        card(ui, |ui| {
            ui.label(RichText::new("Practice by topic").strong());
            ui.add_space(4.0);
            topic_buttons(app, ui);
        });
        ui.add_space(12.0);

        // Primeras preguntas del catálogo como "recomendadas"
        card(ui, |ui| {
            ui.label(RichText::new("Recommended for you").strong());
            ui.add_space(4.0);
            let picks: Vec<_> = app
                .catalog
                .all()
                .iter()
                .take(3)
                .map(|q| (q.id, q.title.clone(), q.difficulty))
                .collect();
            for (id, title, difficulty) in picks {
                ui.horizontal(|ui| {
                    difficulty_badge(ui, difficulty);
                    if ui.link(title).clicked() {
                        app.load_question(id);
                    }
                });
            }
        });
        ui.add_space(12.0);

        ui.horizontal(|ui| {
            if ui.button("📤 Share progress").clicked() {
                let text = app.share_progress();
                ui.ctx().copy_text(text.to_string());
            }
            if ui.button("⬇ Export data").clicked() {
                app.export_data();
            }
        });
        ui.add_space(16.0);
    });
}

/// Radar de dominio: anillos de referencia, un radio por eje y las dos series
pub fn mastery_radar(ui: &mut Ui, chart: &MasteryChart, size: f32) {
    let (rect, _) = ui.allocate_exact_size(Vec2::new(size * 1.6, size), Sense::hover());
    let painter = ui.painter_at(rect);
    let center = rect.center();
    let radius = size * 0.36;
    let axes = chart.axes();
    if axes.is_empty() {
        return;
    }

    let grid = ui.visuals().widgets.noninteractive.bg_stroke;
    let text_color = ui.visuals().text_color();
    let n = axes.len();
    let point = |i: usize, value: f32| -> Pos2 {
        let angle = -FRAC_PI_2 + TAU * i as f32 / n as f32;
        center + Vec2::angled(angle) * radius * (value / 100.0)
    };

    for ring in 1..=5 {
        let v = ring as f32 * 20.0;
        let pts: Vec<Pos2> = (0..n).map(|i| point(i, v)).collect();
        painter.add(Shape::closed_line(pts, grid));
    }
    for (i, axis) in axes.iter().enumerate() {
        painter.line_segment([center, point(i, 100.0)], grid);
        let label_pos = point(i, 118.0);
        painter.text(
            label_pos,
            Align2::CENTER_CENTER,
            &axis.name,
            FontId::proportional(12.0),
            text_color,
        );
    }

    // Objetivo (discontinuo)
    let mut target: Vec<Pos2> = axes.iter().enumerate().map(|(i, a)| point(i, a.target)).collect();
    if let Some(first) = target.first().copied() {
        target.push(first);
    }
    painter.extend(Shape::dashed_line(
        &target,
        Stroke::new(2.0, TARGET_COLOR),
        6.0,
        4.0,
    ));

    // Dominio actual
    let current: Vec<Pos2> = axes.iter().enumerate().map(|(i, a)| point(i, a.current)).collect();
    // el polígono no tiene por qué ser convexo: se rellena en abanico desde el centro
    let fill = MASTERY_COLOR.gamma_multiply(0.25);
    for i in 0..n {
        let tri = vec![center, current[i], current[(i + 1) % n]];
        painter.add(Shape::convex_polygon(tri, fill, Stroke::NONE));
    }
    painter.add(Shape::closed_line(
        current.clone(),
        Stroke::new(2.0, MASTERY_COLOR),
    ));
    for p in current {
        painter.circle_filled(p, 3.5, MASTERY_COLOR);
    }

    // Leyenda
    let legend = rect.left_bottom() + Vec2::new(8.0, -8.0);
    for (k, (name, color)) in MasteryChart::SERIES
        .iter()
        .zip([MASTERY_COLOR, TARGET_COLOR])
        .enumerate()
    {
        let y = legend.y - 18.0 * (1 - k) as f32;
        painter.circle_filled(Pos2::new(legend.x + 5.0, y), 5.0, color);
        painter.text(
            Pos2::new(legend.x + 16.0, y),
            Align2::LEFT_CENTER,
            *name,
            FontId::proportional(12.0),
            text_color,
        );
    }
}

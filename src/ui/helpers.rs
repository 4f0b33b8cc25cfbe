// src/ui/helpers.rs
use crate::model::Difficulty;
use crate::runner::{ConsoleLine, LineKind};
use egui::{Color32, Frame, Margin, RichText, Ui, Vec2};

pub fn difficulty_color(d: Difficulty) -> Color32 {
    match d {
        Difficulty::Easy => Color32::from_rgb(0x10, 0xb9, 0x81),
        Difficulty::Medium => Color32::from_rgb(0xf5, 0x9e, 0x0b),
        Difficulty::Hard => Color32::from_rgb(0xef, 0x44, 0x44),
        Difficulty::Advanced => Color32::from_rgb(0x8b, 0x5c, 0xf6),
    }
}

pub fn difficulty_badge(ui: &mut Ui, d: Difficulty) {
    ui.label(
        RichText::new(d.as_str())
            .small()
            .strong()
            .color(difficulty_color(d)),
    );
}

/// Tarjeta con borde suave; todo el contenido de las vistas va dentro de una
pub fn card<R>(ui: &mut Ui, inner: impl FnOnce(&mut Ui) -> R) -> R {
    Frame::default()
        .fill(ui.visuals().window_fill())
        .stroke(ui.visuals().window_stroke)
        .inner_margin(Margin::symmetric(16, 12))
        .corner_radius(8)
        .show(ui, inner)
        .inner
}

pub fn stat_card(ui: &mut Ui, value: &str, label: &str, width: f32) {
    ui.allocate_ui(Vec2::new(width, 70.0), |ui| {
        card(ui, |ui| {
            ui.set_width(width - 32.0);
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(value).heading().strong());
                ui.label(RichText::new(label).small());
            });
        });
    });
}

pub fn company_chips(ui: &mut Ui, companies: &[String]) {
    ui.horizontal_wrapped(|ui| {
        let bg = ui.visuals().faint_bg_color;
        for c in companies {
            ui.label(RichText::new(format!("🏢 {c}")).small().background_color(bg));
        }
    });
}

pub fn console_line(ui: &mut Ui, line: &ConsoleLine) {
    let text = RichText::new(&line.text).monospace();
    let text = match line.kind {
        LineKind::Plain => text,
        LineKind::Success => text.color(Color32::from_rgb(0x10, 0xb9, 0x81)),
        LineKind::Error => text.color(Color32::from_rgb(0xef, 0x44, 0x44)),
    };
    ui.label(text);
}

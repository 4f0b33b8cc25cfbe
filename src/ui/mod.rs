mod helpers;
pub mod layout;
pub mod overlays;
pub mod views;

use crate::app::InterviewApp;
use crate::keymap::shortcut_for;
use crate::model::View;
use eframe::{App, Frame};
use egui::{Context, Event, Visuals};
use layout::{bottom_panel, particles_background, side_panel, top_panel};
use std::time::Duration;

impl App for InterviewApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Reloj de egui: temporizadores, debounce y avisos
        let now = ctx.input(|i| i.time);
        self.tick(now);

        // ATAJOS DE TECLADO
        let shortcuts: Vec<_> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|e| match e {
                    Event::Key {
                        key,
                        pressed: true,
                        modifiers,
                        ..
                    } => shortcut_for(*key, *modifiers),
                    _ => None,
                })
                .collect()
        });
        for s in shortcuts {
            self.handle_shortcut(s);
        }

        ctx.set_visuals(if self.panels.dark_mode {
            Visuals::dark()
        } else {
            Visuals::light()
        });

        if self.panels.loading {
            views::loading::ui_loading(self, ctx);
            self.schedule_repaint(ctx);
            return;
        }

        if self.config.particles {
            particles_background(self, ctx);
        }

        top_panel(self, ctx);
        bottom_panel(self, ctx);
        if self.panels.sidebar_open {
            side_panel(self, ctx);
        }

        // Dispatch por vista
        match self.view() {
            View::Dashboard => views::dashboard::ui_dashboard(self, ctx),
            View::Practice => views::practice::ui_practice(self, ctx),
            View::Interviews => views::interviews::ui_interviews(self, ctx),
            View::Question => views::question::ui_question(self, ctx),
            View::Achievements => views::achievements::ui_achievements(self, ctx),
        }
        self.panels.scroll_to_top = false;

        overlays::inbox_menu(self, ctx);
        overlays::user_menu(self, ctx);
        overlays::code_modal(self, ctx);
        overlays::achievement_modal(self, ctx);
        overlays::toasts(self, ctx);

        self.schedule_repaint(ctx);
    }
}

impl InterviewApp {
    /// Pide el siguiente frame justo cuando vence el próximo plazo
    fn schedule_repaint(&self, ctx: &Context) {
        if self.config.particles && !self.panels.loading {
            ctx.request_repaint();
            return;
        }
        if let Some(at) = self.next_wakeup() {
            let wait = (at - self.now).max(0.0);
            ctx.request_repaint_after(Duration::from_secs_f64(wait));
        }
    }
}

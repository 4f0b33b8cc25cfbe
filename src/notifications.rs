// src/notifications.rs
//
// Avisos flotantes (toasts) y la bandeja de notificaciones del menú superior.
// La fase de cada aviso se calcula a partir del reloj, sin temporizadores propios.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Success => "✔",
            NotificationKind::Error => "⚠",
            NotificationKind::Info => "ℹ",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastTimings {
    pub appear_delay_secs: f64,
    pub visible_secs: f64,
    pub fade_secs: f64,
}

impl Default for ToastTimings {
    fn default() -> Self {
        Self {
            appear_delay_secs: 0.010,
            visible_secs: 3.0,
            fade_secs: 0.3,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastPhase {
    /// Recién creado, aún invisible
    Entering,
    Shown,
    /// Desvaneciéndose; el valor es la opacidad restante (1.0 → 0.0)
    Leaving(f32),
    Gone,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
    pub created_at: f64,
}

impl Toast {
    pub fn phase(&self, now: f64, timings: &ToastTimings) -> ToastPhase {
        let age = now - self.created_at;
        let leave_at = timings.visible_secs;
        if age < timings.appear_delay_secs {
            ToastPhase::Entering
        } else if age < leave_at {
            ToastPhase::Shown
        } else if age < leave_at + timings.fade_secs {
            let t = (age - leave_at) / timings.fade_secs;
            ToastPhase::Leaving((1.0 - t) as f32)
        } else {
            ToastPhase::Gone
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Toasts {
    next_id: u64,
    items: Vec<Toast>,
    timings: ToastTimings,
}

impl Toasts {
    pub fn new(timings: ToastTimings) -> Self {
        Self {
            next_id: 0,
            items: Vec::new(),
            timings,
        }
    }

    pub fn push(&mut self, message: impl Into<String>, kind: NotificationKind, now: f64) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        let message = message.into();
        log::info!("notification [{kind:?}] {message}");
        self.items.push(Toast {
            id,
            kind,
            message,
            created_at: now,
        });
        id
    }

    /// Elimina los avisos que ya terminaron su animación de salida
    pub fn prune(&mut self, now: f64) {
        let timings = self.timings;
        self.items
            .retain(|t| t.phase(now, &timings) != ToastPhase::Gone);
    }

    /// Avisos visibles con su fase actual, del más antiguo al más reciente
    pub fn visible(&self, now: f64) -> Vec<(&Toast, ToastPhase)> {
        self.items
            .iter()
            .map(|t| (t, t.phase(now, &self.timings)))
            .filter(|(_, p)| !matches!(p, ToastPhase::Entering | ToastPhase::Gone))
            .collect()
    }

    pub fn all(&self) -> &[Toast] {
        &self.items
    }

    pub fn next_change(&self, now: f64) -> Option<f64> {
        self.items
            .iter()
            .map(|t| {
                let age = now - t.created_at;
                if age < self.timings.appear_delay_secs {
                    t.created_at + self.timings.appear_delay_secs
                } else if age < self.timings.visible_secs {
                    t.created_at + self.timings.visible_secs
                } else {
                    // durante el fundido se repinta cada frame
                    now
                }
            })
            .min_by(f64::total_cmp)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InboxItem {
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub time_ago: String,
    #[serde(default = "unread_default")]
    pub unread: bool,
}

fn unread_default() -> bool {
    true
}

/// Bandeja del icono de campana
#[derive(Clone, Debug, Default)]
pub struct Inbox {
    items: Vec<InboxItem>,
    pub open: bool,
}

impl Inbox {
    pub fn new(items: Vec<InboxItem>) -> Self {
        Self { items, open: false }
    }

    pub fn items(&self) -> &[InboxItem] {
        &self.items
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|i| i.unread).count()
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn mark_all_read(&mut self) {
        for item in &mut self.items {
            item.unread = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_goes_through_its_lifecycle() {
        let timings = ToastTimings::default();
        let mut toasts = Toasts::new(timings);
        toasts.push("Question saved to your list!", NotificationKind::Success, 10.0);
        let toast = toasts.all()[0].clone();

        assert_eq!(toast.phase(10.005, &timings), ToastPhase::Entering);
        assert_eq!(toast.phase(10.5, &timings), ToastPhase::Shown);
        assert_eq!(toast.phase(12.9, &timings), ToastPhase::Shown);
        match toast.phase(13.15, &timings) {
            ToastPhase::Leaving(alpha) => assert!(alpha > 0.0 && alpha < 1.0),
            other => panic!("expected fade, got {other:?}"),
        }
        assert_eq!(toast.phase(13.4, &timings), ToastPhase::Gone);
    }

    #[test]
    fn several_toasts_stack_and_expire_independently() {
        let mut toasts = Toasts::new(ToastTimings::default());
        toasts.push("first", NotificationKind::Info, 0.0);
        toasts.push("second", NotificationKind::Error, 2.0);

        assert!(toasts.visible(0.0).is_empty());
        assert_eq!(toasts.visible(2.5).len(), 2);

        toasts.prune(3.5);
        assert_eq!(toasts.all().len(), 1);
        assert_eq!(toasts.all()[0].message, "second");

        toasts.prune(6.0);
        assert!(toasts.all().is_empty());
        assert_eq!(toasts.next_change(6.0), None);
    }

    #[test]
    fn inbox_marks_everything_read() {
        let mut inbox = Inbox::new(vec![
            InboxItem {
                title: "New challenge".into(),
                body: "Weekly contest is live".into(),
                time_ago: "2m ago".into(),
                unread: true,
            },
            InboxItem {
                title: "Streak".into(),
                body: "21 days in a row".into(),
                time_ago: "1h ago".into(),
                unread: false,
            },
        ]);
        assert_eq!(inbox.unread_count(), 1);
        inbox.toggle();
        assert!(inbox.open);
        inbox.mark_all_read();
        assert_eq!(inbox.unread_count(), 0);
    }
}

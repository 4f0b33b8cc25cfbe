// src/schedule.rs
//
// Temporizadores de un solo disparo sobre el reloj de egui (segundos, f64).
// El reloj se pasa siempre explícito para que los tests sean deterministas.

/// Tabla de temporizadores por clave: volver a programar una clave sustituye su plazo
#[derive(Debug, Clone)]
pub struct Timers<K> {
    pending: Vec<(K, f64)>,
}

impl<K> Default for Timers<K> {
    fn default() -> Self {
        Self { pending: Vec::new() }
    }
}

impl<K: Copy + PartialEq + std::fmt::Debug> Timers<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, key: K, now: f64, delay_secs: f64) {
        let deadline = now + delay_secs.max(0.0);
        match self.pending.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = deadline,
            None => self.pending.push((key, deadline)),
        }
        log::debug!("timer {key:?} armed for t={deadline:.3}");
    }

    pub fn cancel(&mut self, key: K) {
        self.pending.retain(|(k, _)| *k != key);
    }

    pub fn is_pending(&self, key: K) -> bool {
        self.pending.iter().any(|(k, _)| *k == key)
    }

    /// Saca las claves vencidas, ordenadas por plazo
    pub fn fire_due(&mut self, now: f64) -> Vec<K> {
        let mut due: Vec<(K, f64)> = Vec::new();
        self.pending.retain(|&(k, at)| {
            if at <= now {
                due.push((k, at));
                false
            } else {
                true
            }
        });
        due.sort_by(|a, b| a.1.total_cmp(&b.1));
        due.into_iter().map(|(k, _)| k).collect()
    }

    pub fn next_deadline(&self) -> Option<f64> {
        self.pending.iter().map(|(_, at)| *at).min_by(f64::total_cmp)
    }
}

/// Antirrebote: cada valor nuevo reemplaza al pendiente y reinicia el plazo
#[derive(Debug, Clone)]
pub struct Debounced<T> {
    delay_secs: f64,
    pending: Option<(T, f64)>,
}

impl<T> Debounced<T> {
    pub fn new(delay_secs: f64) -> Self {
        Self {
            delay_secs,
            pending: None,
        }
    }

    pub fn push(&mut self, value: T, now: f64) {
        self.pending = Some((value, now + self.delay_secs));
    }

    pub fn poll(&mut self, now: f64) -> Option<T> {
        let due = matches!(self.pending, Some((_, at)) if at <= now);
        if due {
            self.pending.take().map(|(v, _)| v)
        } else {
            None
        }
    }

    pub fn deadline(&self) -> Option<f64> {
        self.pending.as_ref().map(|(_, at)| *at)
    }

    pub fn clear(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq)]
    enum Key {
        A,
        B,
    }

    #[test]
    fn timers_fire_once_in_deadline_order() {
        let mut timers = Timers::new();
        timers.schedule(Key::A, 0.0, 2.0);
        timers.schedule(Key::B, 0.0, 1.5);
        assert!(timers.fire_due(1.0).is_empty());
        assert_eq!(timers.next_deadline(), Some(1.5));
        assert_eq!(timers.fire_due(3.0), vec![Key::B, Key::A]);
        assert!(timers.fire_due(10.0).is_empty());
        assert_eq!(timers.next_deadline(), None);
    }

    #[test]
    fn rescheduling_a_key_replaces_its_deadline() {
        let mut timers = Timers::new();
        timers.schedule(Key::A, 0.0, 1.0);
        timers.schedule(Key::A, 0.5, 1.0);
        assert!(timers.fire_due(1.2).is_empty());
        assert_eq!(timers.fire_due(1.5), vec![Key::A]);
    }

    #[test]
    fn cancelled_timers_never_fire() {
        let mut timers = Timers::new();
        timers.schedule(Key::A, 0.0, 1.0);
        assert!(timers.is_pending(Key::A));
        timers.cancel(Key::A);
        assert!(!timers.is_pending(Key::A));
        assert!(timers.fire_due(5.0).is_empty());
    }

    #[test]
    fn debounce_is_last_write_wins() {
        let mut search = Debounced::new(0.5);
        search.push("l".to_string(), 0.0);
        search.push("lr".to_string(), 0.25);
        search.push("lru".to_string(), 0.5);
        assert_eq!(search.poll(0.75), None);
        assert_eq!(search.deadline(), Some(1.0));
        assert_eq!(search.poll(1.0), Some("lru".to_string()));
        assert_eq!(search.poll(2.0), None);
    }
}

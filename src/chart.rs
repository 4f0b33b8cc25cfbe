// src/chart.rs
//
// Datos del radar de dominio: ejes con nombre y dos series (actual / objetivo).

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub name: String,
    pub current: f32,
    pub target: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MasteryChart {
    axes: Vec<Axis>,
}

impl Default for MasteryChart {
    fn default() -> Self {
        let labels = ["Python", "JavaScript", "Java", "SQL", "Algorithms", "System Design"];
        let current = [75.0, 90.0, 60.0, 45.0, 35.0, 25.0];
        let target = [80.0, 85.0, 70.0, 60.0, 50.0, 40.0];
        Self::new(
            labels
                .iter()
                .zip(current)
                .zip(target)
                .map(|((name, current), target)| Axis {
                    name: name.to_string(),
                    current,
                    target,
                })
                .collect(),
        )
    }
}

impl MasteryChart {
    pub const SERIES: [&'static str; 2] = ["Your Mastery", "Target"];

    pub fn new(axes: Vec<Axis>) -> Self {
        Self { axes }
    }

    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    pub fn value(&self, name: &str) -> Option<f32> {
        self.axes.iter().find(|a| a.name == name).map(|a| a.current)
    }

    /// Actualiza el valor actual del eje; un eje desconocido se ignora.
    pub fn update(&mut self, name: &str, value: f32) -> bool {
        match self.axes.iter_mut().find(|a| a.name == name) {
            Some(axis) => {
                axis.current = value.clamp(0.0, 100.0);
                true
            }
            None => {
                log::debug!("mastery chart has no axis `{name}`");
                false
            }
        }
    }

    pub fn bump(&mut self, name: &str, delta: f32) -> bool {
        match self.value(name) {
            Some(v) => self.update(name, v + delta),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_axes_match_the_six_topics() {
        let chart = MasteryChart::default();
        assert_eq!(chart.axes().len(), 6);
        assert_eq!(chart.value("SQL"), Some(45.0));
        assert_eq!(chart.axes()[5].target, 40.0);
    }

    #[test]
    fn updates_by_axis_name_and_clamps() {
        let mut chart = MasteryChart::default();
        assert!(chart.update("Python", 82.0));
        assert_eq!(chart.value("Python"), Some(82.0));
        assert!(chart.bump("JavaScript", 25.0));
        assert_eq!(chart.value("JavaScript"), Some(100.0));
        assert!(!chart.update("Rust", 10.0));
        assert_eq!(chart.value("Rust"), None);
    }
}

// src/keymap.rs
use egui::{Key, Modifiers};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    FocusSearch,
    CloseModals,
    Dashboard,
    Practice,
    Interviews,
}

/// Atajos de teclado globales
pub fn shortcut_for(key: Key, modifiers: Modifiers) -> Option<Shortcut> {
    match key {
        Key::K if modifiers.command => Some(Shortcut::FocusSearch),
        Key::Escape => Some(Shortcut::CloseModals),
        Key::D if modifiers.alt => Some(Shortcut::Dashboard),
        Key::P if modifiers.alt => Some(Shortcut::Practice),
        Key::I if modifiers.alt => Some(Shortcut::Interviews),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_k_focuses_search() {
        assert_eq!(shortcut_for(Key::K, Modifiers::COMMAND), Some(Shortcut::FocusSearch));
        assert_eq!(shortcut_for(Key::K, Modifiers::NONE), None);
    }

    #[test]
    fn alt_letters_switch_views() {
        assert_eq!(shortcut_for(Key::D, Modifiers::ALT), Some(Shortcut::Dashboard));
        assert_eq!(shortcut_for(Key::P, Modifiers::ALT), Some(Shortcut::Practice));
        assert_eq!(shortcut_for(Key::I, Modifiers::ALT), Some(Shortcut::Interviews));
        assert_eq!(shortcut_for(Key::D, Modifiers::NONE), None);
    }

    #[test]
    fn escape_needs_no_modifier() {
        assert_eq!(shortcut_for(Key::Escape, Modifiers::NONE), Some(Shortcut::CloseModals));
    }
}

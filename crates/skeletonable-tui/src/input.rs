use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use skeletonable_core::SkeletonKind;

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Pick a style and show it right away
    SelectStyle(SkeletonKind),
    ShowSkeleton,
    HideSkeleton,
    /// Show the skeleton and start a fresh content load
    Reload,
    ScrollDown,
    ScrollUp,
    ToggleTransition,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Esc, _) => Action::Quit,

        (KeyCode::Char(c @ '1'..='4'), KeyModifiers::NONE) => {
            let index = c as usize - '1' as usize;
            Action::SelectStyle(SkeletonKind::ALL[index])
        }

        (KeyCode::Char('s'), KeyModifiers::NONE) => Action::ShowSkeleton,
        (KeyCode::Char('h'), KeyModifiers::NONE) => Action::HideSkeleton,
        (KeyCode::Char('r'), KeyModifiers::NONE) => Action::Reload,
        (KeyCode::Char('t'), KeyModifiers::NONE) => Action::ToggleTransition,

        (KeyCode::Char('j'), KeyModifiers::NONE) => Action::ScrollDown,
        (KeyCode::Down, _) => Action::ScrollDown,
        (KeyCode::Char('k'), KeyModifiers::NONE) => Action::ScrollUp,
        (KeyCode::Up, _) => Action::ScrollUp,

        _ => Action::None,
    }
}

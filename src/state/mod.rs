use std::rc::Rc;

use yew::Reducible;

use crate::engine::Notification;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Start,
    Puzzles,
    Profile,
    Leaderboard,
    About,
}

impl View {
    pub const NAV: [View; 5] = [
        View::Start,
        View::Puzzles,
        View::Profile,
        View::Leaderboard,
        View::About,
    ];

    pub fn label(self) -> &'static str {
        match self {
            View::Start => "Home",
            View::Puzzles => "Puzzles",
            View::Profile => "Profile",
            View::Leaderboard => "Leaderboard",
            View::About => "About",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

/// Everything the page shows that the engine does not own.
#[derive(Clone, Debug, PartialEq)]
pub struct UiState {
    pub view: View,
    /// Bumped whenever the engine changed so context consumers re-render.
    pub revision: u64,
    pub toasts: Vec<Toast>,
    /// Puzzle id shown in the modal.
    pub modal: Option<String>,
    pub settings_open: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            view: View::Start,
            revision: 0,
            toasts: Vec::new(),
            modal: None,
            settings_open: false,
        }
    }
}

#[derive(Clone, Debug)]
pub enum UiAction {
    Navigate(View),
    Bump,
    Notify { id: u64, notification: Notification },
    DismissToast(u64),
    OpenPuzzle(String),
    ClosePuzzle,
    ToggleSettings,
}

impl Reducible for UiState {
    type Action = UiAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use UiAction::*;
        let mut new = (*self).clone();
        match action {
            Navigate(view) => {
                if new.view == view {
                    return self;
                }
                new.view = view;
            }
            Bump => new.revision = new.revision.wrapping_add(1),
            Notify { id, notification } => new.toasts.push(Toast { id, notification }),
            DismissToast(id) => {
                let before = new.toasts.len();
                new.toasts.retain(|t| t.id != id);
                if new.toasts.len() == before {
                    return self;
                }
            }
            OpenPuzzle(id) => new.modal = Some(id),
            ClosePuzzle => {
                if new.modal.is_none() {
                    return self;
                }
                new.modal = None;
            }
            ToggleSettings => new.settings_open = !new.settings_open,
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Severity;

    fn reduce(state: UiState, action: UiAction) -> UiState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn toasts_are_dismissed_by_id() {
        let note = Notification::new("Hint", "Look closer", Severity::Info);
        let mut state = UiState::default();
        state = reduce(state, UiAction::Notify { id: 1, notification: note.clone() });
        state = reduce(state, UiAction::Notify { id: 2, notification: note });
        state = reduce(state, UiAction::DismissToast(1));
        assert_eq!(state.toasts.len(), 1);
        assert_eq!(state.toasts[0].id, 2);
    }

    #[test]
    fn navigating_to_current_view_keeps_state() {
        let state = Rc::new(UiState::default());
        let same = state.clone().reduce(UiAction::Navigate(View::Start));
        assert!(Rc::ptr_eq(&state, &same));
        let moved = state.reduce(UiAction::Navigate(View::Puzzles));
        assert_eq!(moved.view, View::Puzzles);
    }

    #[test]
    fn puzzle_modal_opens_and_closes() {
        let state = reduce(UiState::default(), UiAction::OpenPuzzle("memory-1".into()));
        assert_eq!(state.modal.as_deref(), Some("memory-1"));
        let state = reduce(state, UiAction::ClosePuzzle);
        assert_eq!(state.modal, None);
    }
}

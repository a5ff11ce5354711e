//! Context menu presentation.
//!
//! The controller never reaches for a global menu; the host hands it a
//! [`MenuPresenter`] and the controller shows or hides it as lines are
//! selected.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Actions the context menu can offer for the selected line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuAction {
    Delete,
}

impl MenuAction {
    /// Label shown in the menu.
    pub fn title(&self) -> &'static str {
        match self {
            MenuAction::Delete => "Delete",
        }
    }
}

/// Something that can pop up a context menu over the drawing.
pub trait MenuPresenter {
    /// Show the menu anchored at `at`, offering `actions`.
    fn show(&mut self, at: Point, actions: &[MenuAction]);

    /// Hide the menu if it is visible.
    fn hide(&mut self);

    /// Whether the menu is currently visible.
    fn is_visible(&self) -> bool;
}

/// In-memory menu that records what would be on screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuState {
    /// Anchor of the visible menu.
    pub anchor: Option<Point>,
    /// Actions of the visible menu.
    pub actions: Vec<MenuAction>,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MenuPresenter for MenuState {
    fn show(&mut self, at: Point, actions: &[MenuAction]) {
        log::debug!("Menu shown at ({:.1}, {:.1}) with {} actions", at.x, at.y, actions.len());
        self.anchor = Some(at);
        self.actions = actions.to_vec();
    }

    fn hide(&mut self) {
        if self.anchor.take().is_some() {
            log::debug!("Menu hidden");
        }
        self.actions.clear();
    }

    fn is_visible(&self) -> bool {
        self.anchor.is_some()
    }
}

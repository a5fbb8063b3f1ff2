use common::games::snake::{Direction, RoundCommand};
use eframe::egui::{self, Key};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiAction {
    Round(RoundCommand),
    CycleTheme,
}

const DIRECTION_KEYS: [(Key, Key, Direction); 4] = [
    (Key::ArrowUp, Key::W, Direction::Up),
    (Key::ArrowDown, Key::S, Direction::Down),
    (Key::ArrowLeft, Key::A, Direction::Left),
    (Key::ArrowRight, Key::D, Direction::Right),
];

/// Maps the keys pressed this frame to actions. At most one direction is
/// sent per frame; with several direction keys down, `DIRECTION_KEYS` order
/// (up, down, left, right) decides, not press order.
pub fn actions_for_keys(pressed: impl Fn(Key) -> bool) -> Vec<UiAction> {
    let mut actions = Vec::new();

    if let Some((_, _, direction)) = DIRECTION_KEYS
        .iter()
        .find(|(arrow, letter, _)| pressed(*arrow) || pressed(*letter))
    {
        actions.push(UiAction::Round(RoundCommand::Turn(*direction)));
    }
    if pressed(Key::Space) || pressed(Key::P) {
        actions.push(UiAction::Round(RoundCommand::TogglePause));
    }
    if pressed(Key::R) {
        actions.push(UiAction::Round(RoundCommand::Reset));
    }
    if pressed(Key::T) {
        actions.push(UiAction::CycleTheme);
    }

    actions
}

pub fn read_actions(ctx: &egui::Context) -> Vec<UiAction> {
    ctx.input(|i| actions_for_keys(|key| i.key_pressed(key)))
}

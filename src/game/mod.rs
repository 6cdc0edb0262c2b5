//! Cupcake Clicker — an incremental cupcake bakery game.

pub mod actions;
pub mod logic;
pub mod render;
pub mod save;
pub mod state;

#[cfg(test)]
mod simulator;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::input::{ClickState, InputEvent};

use state::BakeryState;

pub struct CupcakeGame {
    pub state: BakeryState,
}

impl CupcakeGame {
    pub fn new() -> Self {
        Self {
            state: BakeryState::new(),
        }
    }

    /// Handle a normalized input event. Returns true if it changed the game.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Key(c) => self.handle_key(*c),
            InputEvent::Click(action_id) => self.handle_action(*action_id),
        }
    }

    fn handle_key(&mut self, key: char) -> bool {
        // The help overlay swallows everything except its own dismissal
        if self.state.show_help {
            self.state.show_help = false;
            return true;
        }

        match key {
            'c' => {
                logic::click(&mut self.state);
                true
            }
            'h' | '?' => {
                self.state.show_help = true;
                true
            }
            '1'..='6' => {
                let index = (key as u8 - b'1') as usize;
                logic::buy(&mut self.state, index);
                true
            }
            _ => false,
        }
    }

    fn handle_action(&mut self, action_id: u16) -> bool {
        if self.state.show_help {
            // Any tap dismisses the overlay, including its own close target
            self.state.show_help = false;
            return true;
        }

        if let Some(index) = actions::buy_index(action_id) {
            logic::buy(&mut self.state, index);
            return true;
        }

        match action_id {
            actions::CLICK_CUPCAKE => {
                logic::click(&mut self.state);
                true
            }
            actions::TOGGLE_HELP => {
                self.state.show_help = true;
                true
            }
            _ => false,
        }
    }

    /// Advance the game and autosave on the 30-second cadence.
    pub fn tick(&mut self, delta_ticks: u32) {
        if delta_ticks == 0 {
            return;
        }
        logic::tick(&mut self.state, delta_ticks);

        self.state.autosave_counter += delta_ticks;
        if self.state.autosave_counter >= save::AUTOSAVE_INTERVAL {
            self.state.autosave_counter = 0;
            #[cfg(target_arch = "wasm32")]
            save::save_game(&self.state);
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        render::render(&self.state, f, area, click_state);
    }
}

use wasm_bindgen::prelude::*;

use crate::game::{GameSession, SessionConfig};
use crate::log::console_log;
use crate::notation::Command;

/// Browser-facing handle to one game against the computer.
#[wasm_bindgen]
pub struct Reversegam {
    session: GameSession,
}

#[wasm_bindgen]
impl Reversegam {
    /// Accepts `{ human_tile, first_turn, show_hints }`; missing fields use defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<Reversegam, JsError> {
        console_error_panic_hook::set_once();

        let config: SessionConfig = if config.is_undefined() || config.is_null() {
            SessionConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };

        Ok(Self {
            session: GameSession::new_with_default_selector(config),
        })
    }

    pub fn state(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.session.state())?)
    }

    pub fn legal_moves(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.session.legal_moves())?)
    }

    pub fn play(&mut self, col: i32, row: i32) -> Result<(), JsError> {
        self.session.play_human(col, row)?;
        Ok(())
    }

    /// Runs a typed command (`quit`, `hints` or a move like `35`).
    pub fn play_command(&mut self, input: &str) -> Result<(), JsError> {
        match input.parse::<Command>()? {
            Command::Quit => {
                console_log!("player quit");
                self.session.end_game();
            }
            Command::Hints => {
                self.session.toggle_hints();
            }
            Command::Play(mv) => {
                self.session.play_human(mv.col as i32, mv.row as i32)?;
            }
        }
        Ok(())
    }

    pub fn computer_move(&mut self) -> Result<JsValue, JsError> {
        let mv = self.session.play_computer()?;
        Ok(serde_wasm_bindgen::to_value(&mv)?)
    }

    pub fn toggle_hints(&mut self) -> bool {
        self.session.toggle_hints()
    }

    pub fn render(&self) -> String {
        self.session.render()
    }

    pub fn result(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.session.result())?)
    }
}

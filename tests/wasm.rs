#![cfg(target_arch = "wasm32")]

use js_sys::{Array, Object, Reflect};
use reversegam::wasm::Reversegam;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

fn field(value: &JsValue, name: &str) -> JsValue {
    Reflect::get(value, &JsValue::from_str(name)).unwrap()
}

#[wasm_bindgen_test]
fn ready_probe() {
    assert!(reversegam::wasm_ready());
}

#[wasm_bindgen_test]
fn default_game_exposes_four_opening_moves() {
    let game = Reversegam::new(JsValue::UNDEFINED).unwrap();

    let moves = Array::from(&game.legal_moves().unwrap());
    let state = game.state().unwrap();

    assert_eq!(moves.length(), 4);
    assert_eq!(field(&state, "turn").as_string().as_deref(), Some("Human"));
    assert_eq!(field(&state, "is_game_over").as_bool(), Some(false));
}

#[wasm_bindgen_test]
fn config_object_sets_player_tile_and_first_turn() {
    let config = Object::new();
    Reflect::set(&config, &"human_tile".into(), &"Light".into()).unwrap();
    Reflect::set(&config, &"first_turn".into(), &"Computer".into()).unwrap();
    let mut game = Reversegam::new(config.into()).unwrap();

    assert!(game.play(2, 4).is_err());
    let mv = game.computer_move().unwrap();

    assert_eq!(field(&mv, "col").as_f64(), Some(2.0));
    assert_eq!(field(&mv, "row").as_f64(), Some(4.0));
}

#[wasm_bindgen_test]
fn typed_commands_drive_the_session() {
    let mut game = Reversegam::new(JsValue::NULL).unwrap();

    game.play_command("hints").unwrap();
    assert!(game.render().contains('.'));

    assert!(game.play_command("zz").is_err());
    assert!(game.play_command("11").is_err());
    game.play_command("35").unwrap();

    game.play_command("quit").unwrap();
    let state = game.state().unwrap();
    assert_eq!(field(&state, "is_game_over").as_bool(), Some(true));
}

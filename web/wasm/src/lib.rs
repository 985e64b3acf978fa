use durak::{Card, Game, GameOptions, GameSnapshot, GameState, RoundOutcome, RoundResult};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmDurak {
    game: Game,
}

#[wasm_bindgen]
impl WasmDurak {
    #[wasm_bindgen(constructor)]
    pub fn new(names: Vec<String>, seed: u32) -> Result<WasmDurak, JsValue> {
        let game = Game::new(names.as_slice(), GameOptions::default(), u64::from(seed))
            .map_err(js_err)?;
        Ok(Self { game })
    }

    pub fn restart(&mut self) -> Result<(), JsValue> {
        self.game.restart().map_err(js_err)
    }

    pub fn attack(&mut self, player: &str, card: &str) -> Result<(), JsValue> {
        let card = parse_card(card)?;
        self.game.attack(player, card).map_err(js_err)
    }

    pub fn defend(&mut self, player: &str, attacking: &str, defending: &str) -> Result<(), JsValue> {
        let attacking = parse_card(attacking)?;
        let defending = parse_card(defending)?;
        self.game
            .defend(player, attacking, defending)
            .map_err(js_err)
    }

    pub fn move_to_bita(&mut self) -> Result<JsValue, JsValue> {
        let result = self.game.move_to_bita().map_err(js_err)?;
        to_js_value(&JsRoundResult::from(result))
    }

    pub fn pick_up_cards(&mut self) -> Result<JsValue, JsValue> {
        let result = self.game.pick_up_cards().map_err(js_err)?;
        to_js_value(&JsRoundResult::from(result))
    }

    pub fn state(&self) -> String {
        state_to_str(self.game.state()).to_string()
    }

    /// Full snapshot, every hand included.
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        to_js_value(&self.game.snapshot())
    }

    /// Snapshot as seen by one player: other hands are reduced to counts.
    pub fn snapshot_for(&self, viewer: &str) -> Result<JsValue, JsValue> {
        if self.game.player(viewer).is_none() {
            return Err(JsValue::from_str("player not found"));
        }
        to_js_value(&ViewerSnapshot::new(self.game.snapshot(), viewer))
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ViewerSnapshot {
    hand: Vec<Card>,
    hand_sizes: Vec<JsHandSize>,
    #[serde(flatten)]
    table: GameSnapshot,
}

#[derive(Serialize)]
struct JsHandSize {
    name: String,
    cards: u32,
}

impl ViewerSnapshot {
    fn new(mut table: GameSnapshot, viewer: &str) -> Self {
        let hand_sizes = table
            .players
            .iter()
            .map(|name| JsHandSize {
                name: name.clone(),
                cards: table.player_cards.get(name).map_or(0, |hand| hand.len() as u32),
            })
            .collect();
        let hand = table.player_cards.remove(viewer).unwrap_or_default();
        table.player_cards.clear();

        Self {
            hand,
            hand_sizes,
            table,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsRoundResult {
    outcome: &'static str,
    cards_moved: u32,
    eliminated: Vec<String>,
    game_over: bool,
}

impl From<RoundResult> for JsRoundResult {
    fn from(result: RoundResult) -> Self {
        Self {
            outcome: match result.outcome {
                RoundOutcome::Defended => "Defended",
                RoundOutcome::PickedUp => "PickedUp",
            },
            cards_moved: result.cards_moved as u32,
            eliminated: result.eliminated,
            game_over: result.game_over,
        }
    }
}

fn state_to_str(state: GameState) -> &'static str {
    match state {
        GameState::Attacking => "Attacking",
        GameState::Defending => "Defending",
        GameState::Defended => "Defended",
        GameState::Over => "Over",
    }
}

fn parse_card(code: &str) -> Result<Card, JsValue> {
    code.parse().map_err(js_err)
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|err| JsValue::from_str(&err.to_string()))
}

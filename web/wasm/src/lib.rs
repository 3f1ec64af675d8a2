use deckhand::{Card, DealButton, HandSlot, Picked, Table, TableOptions, TableView};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmTable {
    table: Table,
}

#[wasm_bindgen]
impl WasmTable {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            table: Table::new(TableOptions::default(), seed as u64),
        }
    }

    pub fn reset_seed(&mut self, seed: u32) {
        self.table = Table::new(TableOptions::default(), seed as u64);
    }

    pub fn draw(&mut self) -> Result<JsValue, JsValue> {
        let card = self.table.draw().map_err(js_err)?;
        to_js_value(&card_to_js(card))
    }

    pub fn deal(&mut self, count: u32) -> Result<(), JsValue> {
        self.table
            .deal(count as usize)
            .map(|_| ())
            .map_err(js_err)
    }

    pub fn reset(&mut self) {
        self.table.reset();
    }

    pub fn pick(&mut self, index: u32) -> Result<JsValue, JsValue> {
        let picked = self.table.pick_at(index as usize).map_err(js_err)?;
        to_js_value(&JsPicked::from(picked))
    }

    pub fn toss(&mut self) -> Result<JsValue, JsValue> {
        let card = self.table.toss().map_err(js_err)?;
        to_js_value(&card_to_js(card))
    }

    pub fn wildcard(&mut self) -> Result<JsValue, JsValue> {
        let card = self.table.add_wildcard();
        to_js_value(&card_to_js(card))
    }

    pub fn regroup(&mut self) {
        self.table.regroup();
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        to_js_value(&Snapshot::from(self.table.view()))
    }
}

#[derive(Serialize)]
struct Snapshot {
    cards_remaining: u32,
    can_draw: bool,
    deals: Vec<JsDeal>,
    can_toss: bool,
    can_regroup: bool,
    selection: Option<JsCard>,
    hand: Vec<JsSlot>,
}

impl From<TableView> for Snapshot {
    fn from(view: TableView) -> Self {
        Self {
            cards_remaining: view.cards_remaining as u32,
            can_draw: view.can_draw,
            deals: view.deals.into_iter().map(JsDeal::from).collect(),
            can_toss: view.can_toss,
            can_regroup: view.can_regroup,
            selection: view.selection.map(card_to_js),
            hand: view.hand.into_iter().map(JsSlot::from).collect(),
        }
    }
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    symbol: &'static str,
    rank: &'static str,
}

#[derive(Serialize)]
struct JsSlot {
    card: JsCard,
    selected: bool,
}

impl From<HandSlot> for JsSlot {
    fn from(slot: HandSlot) -> Self {
        Self {
            card: card_to_js(slot.card),
            selected: slot.selected,
        }
    }
}

#[derive(Serialize)]
struct JsDeal {
    size: u32,
    enabled: bool,
}

impl From<DealButton> for JsDeal {
    fn from(button: DealButton) -> Self {
        Self {
            size: button.size as u32,
            enabled: button.enabled,
        }
    }
}

#[derive(Serialize)]
#[serde(tag = "kind")]
enum JsPicked {
    Selected { card: JsCard },
    Cleared,
    Swapped { from: u32, to: u32 },
}

impl From<Picked> for JsPicked {
    fn from(picked: Picked) -> Self {
        match picked {
            Picked::Selected(card) => Self::Selected {
                card: card_to_js(card),
            },
            Picked::Cleared => Self::Cleared,
            Picked::Swapped { from, to } => Self::Swapped {
                from: from as u32,
                to: to as u32,
            },
        }
    }
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        suit: card.suit.name(),
        symbol: card.suit.symbol(),
        rank: card.rank.label(),
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}

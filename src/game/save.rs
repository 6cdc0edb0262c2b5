//! Save/load for Cupcake Clicker via localStorage.
//!
//! ## Versioning policy
//!
//! - `SAVE_VERSION`: current save format version. Bump when adding fields.
//! - `MIN_COMPATIBLE_VERSION`: oldest version that can still be loaded.
//!   Additive changes keep this value; bump it only on breaking changes
//!   (removing fields or changing their meaning).
//!
//! Saves at or above `MIN_COMPATIBLE_VERSION` load with missing fields
//! filled from defaults.

#[cfg(any(target_arch = "wasm32", test))]
use serde::{Deserialize, Serialize};

#[cfg(any(target_arch = "wasm32", test))]
use super::state::{BakeryState, ItemId};

/// Save format version. Bump when adding fields.
#[cfg(any(target_arch = "wasm32", test))]
const SAVE_VERSION: u32 = 1;

/// Oldest loadable save version.
#[cfg(any(target_arch = "wasm32", test))]
const MIN_COMPATIBLE_VERSION: u32 = 1;

/// localStorage key.
#[cfg(target_arch = "wasm32")]
const STORAGE_KEY: &str = "cupcake_clicker_save";

/// Autosave interval in ticks. 10 ticks/sec × 30 sec = 300 ticks.
pub const AUTOSAVE_INTERVAL: u32 = 300;

/// Serializable save payload. Transient UI state (particles, flashes,
/// the help overlay) is not persisted.
#[cfg(any(target_arch = "wasm32", test))]
#[derive(Serialize, Deserialize)]
struct SaveData {
    version: u32,
    game: GameSave,
}

#[cfg(any(target_arch = "wasm32", test))]
#[derive(Serialize, Deserialize, Default)]
#[serde(default)]
struct GameSave {
    cupcakes: u64,
    click_value: u64,
    total_clicks: u64,

    /// Auto-clicker period in ticks, 0 = none installed.
    auto_interval: u32,
    auto_phase: u32,

    /// Current price of each store item, in `ItemId::all()` order.
    item_costs: Vec<u64>,
    /// Indices into `ItemId::all()` of items bought at least once.
    owned: Vec<u8>,
    /// Unlock flag per trophy, in `TrophyId::all()` order.
    trophy_unlocked: Vec<bool>,

    rng_state: u32,
}

/// Extract the persistent slice of the game state.
#[cfg(any(target_arch = "wasm32", test))]
fn extract_save(state: &BakeryState) -> SaveData {
    SaveData {
        version: SAVE_VERSION,
        game: GameSave {
            cupcakes: state.cupcakes,
            click_value: state.click_value,
            total_clicks: state.total_clicks,
            auto_interval: state.auto_interval.unwrap_or(0),
            auto_phase: state.auto_phase,
            item_costs: state.shop.iter().map(|i| i.cost).collect(),
            owned: state.owned.iter().map(|id| id.index() as u8).collect(),
            trophy_unlocked: state.trophies.iter().map(|t| t.unlocked).collect(),
            rng_state: state.rng_state,
        },
    }
}

/// Restore a save into a fresh state. Entries that no longer match the
/// current item/trophy definitions are skipped.
#[cfg(any(target_arch = "wasm32", test))]
fn apply_save(state: &mut BakeryState, save: &GameSave) {
    state.cupcakes = save.cupcakes;
    state.click_value = save.click_value.max(1);
    state.total_clicks = save.total_clicks;

    state.auto_interval = if save.auto_interval > 0 {
        Some(save.auto_interval)
    } else {
        None
    };
    state.auto_phase = save.auto_phase;

    for (i, &cost) in save.item_costs.iter().enumerate() {
        if let Some(item) = state.shop.get_mut(i) {
            item.cost = cost;
        }
    }

    state.owned = save
        .owned
        .iter()
        .filter_map(|&idx| ItemId::all().get(idx as usize).copied())
        .collect();

    for (i, &unlocked) in save.trophy_unlocked.iter().enumerate() {
        if let Some(t) = state.trophies.get_mut(i) {
            t.unlocked = unlocked;
        }
    }

    state.rng_state = if save.rng_state != 0 { save.rng_state } else { 42 };
}

/// localStorage handle. WASM only.
#[cfg(target_arch = "wasm32")]
fn get_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Persist the game to localStorage. Failures are logged to the console
/// and otherwise ignored.
#[cfg(target_arch = "wasm32")]
pub fn save_game(state: &BakeryState) {
    let save_data = extract_save(state);
    let json = match serde_json::to_string(&save_data) {
        Ok(j) => j,
        Err(e) => {
            web_sys::console::warn_1(
                &format!("Cupcake Clicker: failed to serialize save: {e}").into(),
            );
            return;
        }
    };

    if let Some(storage) = get_storage() {
        if let Err(e) = storage.set_item(STORAGE_KEY, &json) {
            web_sys::console::warn_1(
                &format!("Cupcake Clicker: failed to write localStorage: {e:?}").into(),
            );
        }
    }
}

/// Restore the game from localStorage. Returns false (leaving a fresh
/// game) on missing data, parse errors, or incompatible versions.
#[cfg(target_arch = "wasm32")]
pub fn load_game(state: &mut BakeryState) -> bool {
    let storage = match get_storage() {
        Some(s) => s,
        None => return false,
    };

    let json = match storage.get_item(STORAGE_KEY) {
        Ok(Some(j)) => j,
        _ => return false,
    };

    let save_data: SaveData = match serde_json::from_str(&json) {
        Ok(d) => d,
        Err(e) => {
            web_sys::console::warn_1(
                &format!("Cupcake Clicker: discarding unparseable save: {e}").into(),
            );
            let _ = storage.remove_item(STORAGE_KEY);
            return false;
        }
    };

    if save_data.version < MIN_COMPATIBLE_VERSION {
        web_sys::console::log_1(
            &format!(
                "Cupcake Clicker: save too old (saved={}, min_compatible={}), starting fresh.",
                save_data.version, MIN_COMPATIBLE_VERSION
            )
            .into(),
        );
        let _ = storage.remove_item(STORAGE_KEY);
        return false;
    }

    if save_data.version < SAVE_VERSION {
        web_sys::console::log_1(
            &format!(
                "Cupcake Clicker: migrating old save (saved={}, current={}).",
                save_data.version, SAVE_VERSION
            )
            .into(),
        );
    }

    apply_save(state, &save_data.game);
    true
}

/// Wipe the save.
#[cfg(target_arch = "wasm32")]
#[allow(dead_code)]
pub fn delete_save() {
    if let Some(storage) = get_storage() {
        let _ = storage.remove_item(STORAGE_KEY);
    }
}

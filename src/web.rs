//! Browser-facing bindings
//!
//! Thin `#[wasm_bindgen]` wrappers over one page-wide store instance
//! backed by `window.localStorage`. Values cross the boundary as JSON
//! strings; the page scripts own all rendering and navigation. Single
//! threaded by construction, so the instance lives in a `thread_local`.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::model::StudentForm;
use crate::platform;
use crate::settings::{self, SettingsPatch};
use crate::storage::LocalStorage;
use crate::store::PortfolioStore;

thread_local! {
    static STORE: RefCell<Option<PortfolioStore<LocalStorage>>> = const { RefCell::new(None) };
}

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn with_store<R>(
    f: impl FnOnce(&mut PortfolioStore<LocalStorage>) -> Result<R, JsValue>,
) -> Result<R, JsValue> {
    STORE.with(|slot| {
        let mut slot = slot.borrow_mut();
        let store = slot
            .as_mut()
            .ok_or_else(|| JsValue::from_str("store not initialized"))?;
        f(store)
    })
}

/// Runs at module load: installs logging, opens the store, and seeds the
/// mock dataset on first visit
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    platform::init_logging();

    let backend =
        LocalStorage::new().ok_or_else(|| JsValue::from_str("localStorage unavailable"))?;
    let seed = platform::now_ms() as u64;
    let store = PortfolioStore::open(backend, seed).map_err(to_js)?;
    STORE.with(|slot| *slot.borrow_mut() = Some(store));
    Ok(())
}

/// Full record list as a JSON array string, newest first
#[wasm_bindgen]
pub fn list_records() -> Result<String, JsValue> {
    with_store(|store| {
        let records = store.list_records().map_err(to_js)?;
        serde_json::to_string(&records).map_err(to_js)
    })
}

/// Insert a record from a JSON form object; returns the stored record as
/// JSON
#[wasm_bindgen]
pub fn add_record(form_json: &str) -> Result<String, JsValue> {
    with_store(|store| {
        let form: StudentForm = serde_json::from_str(form_json).map_err(to_js)?;
        let student = store.add_record(form).map_err(to_js)?;
        serde_json::to_string(&student).map_err(to_js)
    })
}

/// Current settings as JSON (absent fields omitted)
#[wasm_bindgen]
pub fn get_settings() -> Result<String, JsValue> {
    with_store(|store| serde_json::to_string(&store.settings()).map_err(to_js))
}

/// Merge a JSON settings patch over the stored settings. A patch carrying
/// a password shorter than the minimum is rejected before anything
/// persists.
#[wasm_bindgen]
pub fn save_settings(patch_json: &str) -> Result<(), JsValue> {
    with_store(|store| {
        let patch: SettingsPatch = serde_json::from_str(patch_json).map_err(to_js)?;
        if let Some(password) = patch.password.as_deref() {
            settings::validate_password(password).map_err(to_js)?;
        }
        store.save_settings(patch);
        Ok(())
    })
}

/// Admin gate: compare a candidate against the configured password
#[wasm_bindgen]
pub fn check_password(candidate: &str) -> Result<bool, JsValue> {
    with_store(|store| Ok(store.check_password(candidate)))
}

/// Copyable Apps Script template for the spreadsheet endpoint
#[wasm_bindgen]
pub fn apps_script_template() -> String {
    settings::APPS_SCRIPT_TEMPLATE.to_string()
}

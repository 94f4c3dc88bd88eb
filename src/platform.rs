//! Browser-backed implementations of the engine's seams.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::engine::config::CATALOG_PATH;
use crate::engine::{CatalogError, Engine, KeyValueStore, StoreError};
use crate::puzzles::RandomSource;

pub type AppEngine = Engine<WebStorage>;

/// `window.localStorage`, if the page is allowed to use it.
#[derive(Clone, Debug)]
pub struct WebStorage {
    storage: Option<web_sys::Storage>,
}

impl WebStorage {
    pub fn local() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::error!("localStorage unavailable");
        }
        Self { storage }
    }

    fn storage(&self) -> Result<&web_sys::Storage, StoreError> {
        self.storage.as_ref().ok_or(StoreError::Unavailable)
    }
}

impl KeyValueStore for WebStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage()?.get_item(key).map_err(|err| StoreError::Read {
            key: key.to_string(),
            reason: describe(&err),
        })
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage()?.set_item(key, value).map_err(|err| StoreError::Write {
            key: key.to_string(),
            reason: describe(&err),
        })
    }
}

pub struct JsRandom;

impl RandomSource for JsRandom {
    fn next_f64(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

/// GETs the catalog payload as text.
pub async fn fetch_catalog() -> Result<String, CatalogError> {
    let window = web_sys::window().ok_or_else(|| CatalogError::Fetch("no window".into()))?;
    let response = JsFuture::from(window.fetch_with_str(CATALOG_PATH))
        .await
        .map_err(fetch_error)?;
    let response: Response = response.dyn_into().map_err(fetch_error)?;
    if !response.ok() {
        return Err(CatalogError::Status(response.status()));
    }
    let body = JsFuture::from(response.text().map_err(fetch_error)?)
        .await
        .map_err(fetch_error)?;
    body.as_string()
        .ok_or_else(|| CatalogError::Fetch("response body is not text".into()))
}

pub fn now_iso() -> String {
    js_sys::Date::new_0().to_iso_string().into()
}

fn fetch_error(err: JsValue) -> CatalogError {
    CatalogError::Fetch(describe(&err))
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

//! Browser entry point.

use eframe::{WebOptions, WebRunner};
use seat_shared::TableMsg;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlCanvasElement;

use crate::app::TableApp;
use crate::invite::Origin;
use crate::store::TableStore;

/// Start the table view on `canvas`. `table_json` is a serialized
/// `TableMsg` used as the initial state.
#[wasm_bindgen]
pub fn start(canvas: HtmlCanvasElement, table_json: &str) -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    tracing_wasm::set_as_global_default();

    let msg: TableMsg = serde_json::from_str(table_json)
        .map_err(|e| JsValue::from_str(&format!("invalid table json: {}", e)))?;
    let mut store = TableStore::new("");
    store.apply_msg(msg);
    let origin = Origin::from_window().unwrap_or_default();

    let web_options = WebOptions::default();
    spawn_local(async move {
        let init: eframe::AppCreator<'static> =
            Box::new(move |_cc| Ok(Box::new(TableApp::new(origin, store))));
        if let Err(e) = WebRunner::new().start(canvas, web_options, init).await {
            tracing::error!("failed to start eframe: {:?}", e);
        }
    });
    Ok(())
}

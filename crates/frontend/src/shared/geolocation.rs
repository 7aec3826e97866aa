//! One-shot browser geolocation

use contracts::shared::geo::LatLng;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{GeolocationPosition, GeolocationPositionError};

fn describe(error: JsValue) -> String {
    match error.dyn_ref::<GeolocationPositionError>() {
        Some(e) => format!("Geolocation error {}: {}", e.code(), e.message()),
        None => format!("{error:?}"),
    }
}

/// Ask the browser for the current position once.
///
/// Resolves when the user answers the permission prompt; denial and
/// unavailable positioning come back as `Err`.
pub async fn current_position() -> Result<LatLng, String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let geolocation = window
        .navigator()
        .geolocation()
        .map_err(|e| format!("Geolocation unavailable: {e:?}"))?;

    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let on_error_reject = reject.clone();
        let on_success = Closure::once_into_js(move |position: JsValue| {
            let _ = resolve.call1(&JsValue::NULL, &position);
        });
        let on_error = Closure::once_into_js(move |error: JsValue| {
            let _ = on_error_reject.call1(&JsValue::NULL, &error);
        });

        if let Err(e) = geolocation.get_current_position_with_error_callback(
            on_success.unchecked_ref(),
            Some(on_error.unchecked_ref()),
        ) {
            let _ = reject.call1(&JsValue::NULL, &e);
        }
    });

    let value = JsFuture::from(promise).await.map_err(describe)?;
    let position: GeolocationPosition = value
        .dyn_into()
        .map_err(|e| format!("Unexpected geolocation result: {e:?}"))?;
    let coords = position.coords();

    Ok(LatLng::new(coords.latitude(), coords.longitude()))
}

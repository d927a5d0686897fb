//! One-shot position fix.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use workforce_core::domain::Coordinates;

use super::js_error;

/// Ask the browser for the current position with high accuracy.
///
/// Fails when permission is denied, no fix arrives within `timeout_ms`, or
/// the browser has no geolocation at all.
pub async fn current_position(timeout_ms: u32) -> Result<Coordinates, String> {
    let geolocation = web_sys::window()
        .ok_or("No window")?
        .navigator()
        .geolocation()
        .map_err(|_| "Geolocation is not supported by this browser".to_string())?;

    let options = web_sys::PositionOptions::new();
    options.set_enable_high_accuracy(true);
    options.set_timeout(timeout_ms);
    options.set_maximum_age(0);

    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let on_fix = Closure::once_into_js(move |position: JsValue| {
            let _ = resolve.call1(&JsValue::UNDEFINED, &position);
        });
        let fail = reject.clone();
        let on_error = Closure::once_into_js(move |error: JsValue| {
            let _ = fail.call1(&JsValue::UNDEFINED, &error);
        });
        if let Err(err) = geolocation.get_current_position_with_error_callback_and_options(
            on_fix.unchecked_ref(),
            Some(on_error.unchecked_ref()),
            &options,
        ) {
            let _ = reject.call1(&JsValue::UNDEFINED, &err);
        }
    });

    let position = JsFuture::from(promise).await.map_err(|err| position_error(&err))?;
    let coords = position.unchecked_into::<web_sys::GeolocationPosition>().coords();
    Ok(Coordinates { latitude: coords.latitude(), longitude: coords.longitude() })
}

fn position_error(err: &JsValue) -> String {
    if let Some(error) = err.dyn_ref::<web_sys::GeolocationPositionError>() {
        let reason = match error.code() {
            web_sys::GeolocationPositionError::PERMISSION_DENIED => "Location permission denied",
            web_sys::GeolocationPositionError::POSITION_UNAVAILABLE => "Location unavailable",
            web_sys::GeolocationPositionError::TIMEOUT => "Timed out waiting for location",
            _ => "Could not get location",
        };
        return reason.to_string();
    }
    js_error(err)
}

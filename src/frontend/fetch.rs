use crate::record::Record;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

// Same-origin by default; a dev frontend served apart from the data
// service can point elsewhere at build time.
const API_BASE_URL: &str = match option_env!("API_BASE_URL") {
    Some(base) => base,
    None => "",
};

/// One-shot fetch of the full dataset from `/api/data`.
///
/// No retries, no timeout; a failed request surfaces as an error message
/// for the status line and leaves the chart empty.
pub async fn fetch_records() -> Result<Vec<Record>, String> {
    let window = web_sys::window().ok_or("no window")?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let url = format!("{}/api/data", API_BASE_URL);
    let request = Request::new_with_str_and_init(&url, &opts)
        .map_err(|_| "failed to build request".to_string())?;

    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|_| format!("network error fetching {}", url))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| "unexpected fetch result".to_string())?;

    if !response.ok() {
        return Err(format!("{} returned HTTP {}", url, response.status()));
    }

    let body = JsFuture::from(
        response
            .text()
            .map_err(|_| "response has no body".to_string())?,
    )
    .await
    .map_err(|_| "failed reading response body".to_string())?;
    let body = body.as_string().ok_or("response body is not text")?;

    serde_json::from_str(&body).map_err(|e| format!("malformed dataset JSON: {}", e))
}

//! `fetch`-backed form relay.

use touchstone_core::relay::{FormRelay, RelayError, RelayForm};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Request, RequestInit, Response};

/// POSTs the relay form as `multipart/form-data` through `window.fetch`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchRelay;

impl FormRelay for FetchRelay {
    async fn post(&self, form: &RelayForm) -> Result<(), RelayError> {
        let body = FormData::new().map_err(transport)?;
        for (key, value) in form.fields() {
            body.append_with_str(key, value).map_err(transport)?;
        }

        let init = RequestInit::new();
        init.set_method("POST");
        init.set_body(&body);
        let request =
            Request::new_with_str_and_init(form.endpoint(), &init).map_err(transport)?;

        let window =
            web_sys::window().ok_or_else(|| RelayError::Transport("no window".into()))?;
        let response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(transport)?;
        let response: Response = response.dyn_into().map_err(transport)?;

        if response.ok() {
            Ok(())
        } else {
            Err(RelayError::Rejected {
                status: response.status(),
            })
        }
    }
}

fn transport(err: JsValue) -> RelayError {
    RelayError::Transport(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

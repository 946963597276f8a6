//! Persisted session credential stored in the `token` cookie.
//!
//! Client-side (hydrate): reads and writes `document.cookie`.
//! Server-side (SSR): reads return `None` and writes no-op, keeping
//! server rendering deterministic.
//!
//! TRADE-OFFS
//! ==========
//! The cookie is shared, last-write-wins state across every tab in the
//! browser profile. No locking is attempted; the reconciler is instead
//! written so repeated passes are no-ops once the cookie exists.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

/// Name of the session cookie.
pub const TOKEN_COOKIE: &str = "token";

/// Session lifetime: exactly 7 days, in milliseconds.
///
/// The expiry is fixed at first login — it is never refreshed on later
/// visits, because the only write path requires the cookie to be absent.
pub const SESSION_TTL_MS: f64 = 604_800_000.0;

/// Extract the value of cookie `name` from a raw `document.cookie` string.
///
/// Values are treated as opaque; no decoding is applied.
pub fn parse_cookie(raw: &str, name: &str) -> Option<String> {
    raw.split(';')
        .map(str::trim)
        .find_map(|pair| pair.strip_prefix(name)?.strip_prefix('='))
        .map(ToOwned::to_owned)
}

/// Serialize a set-cookie assignment with an absolute expiry.
///
/// No `Secure`/`HttpOnly`/`SameSite` attributes and no path/domain
/// scoping — the credential is scoped by the browser's defaults.
pub fn format_set_cookie(name: &str, value: &str, expires: &str) -> String {
    format!("{name}={value};expires={expires};")
}

/// Read the persisted session token, if any.
pub fn read_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        parse_cookie(&raw_cookies()?, TOKEN_COOKIE)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist `token` with an expiry of now + [`SESSION_TTL_MS`].
pub fn write_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(doc) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok())
        else {
            return;
        };
        let expires_at = js_sys::Date::now() + SESSION_TTL_MS;
        let expires =
            String::from(js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(expires_at)).to_utc_string());
        let _ = doc.set_cookie(&format_set_cookie(TOKEN_COOKIE, token, &expires));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

#[cfg(feature = "hydrate")]
fn raw_cookies() -> Option<String> {
    use wasm_bindgen::JsCast;

    web_sys::window()?
        .document()?
        .dyn_into::<web_sys::HtmlDocument>()
        .ok()?
        .cookie()
        .ok()
}

//! Access to the client-readable `isLoggedIn` marker cookie.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend sets this marker next to the real credential cookie, which
//! script cannot read. The marker is only a hint about the last known auth
//! status; protected server calls remain the authority.

#[cfg(test)]
#[path = "marker_cookie_test.rs"]
mod marker_cookie_test;

pub const MARKER_COOKIE_NAME: &str = "isLoggedIn";
const MARKER_SET_VALUE: &str = "true";

/// Read/clear edge for the marker. Implementations hold no session logic.
pub trait MarkerCookie {
    /// `true` only when the marker is present with the value `"true"`.
    fn is_set(&self) -> bool;
    /// Remove the marker (path `/`).
    fn clear(&self);
}

/// The marker as seen through `document.cookie`.
///
/// Outside the browser there is no document, so it reads as absent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserMarker;

impl MarkerCookie for BrowserMarker {
    fn is_set(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            html_document()
                .and_then(|doc| doc.cookie().ok())
                .is_some_and(|raw| marker_is_set(&raw))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(doc) = html_document() {
                let _ = doc.set_cookie(&clear_marker_cookie());
            }
        }
    }
}

/// The marker as sent on the incoming request during server rendering.
///
/// Seeds the server-rendered session from the same cookie the browser will
/// read at hydration, so both sides start in the same state.
#[cfg(feature = "ssr")]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestMarker {
    cookie_header: String,
}

#[cfg(feature = "ssr")]
impl RequestMarker {
    pub fn from_parts(parts: &axum::http::request::Parts) -> Self {
        let cookie_header = parts
            .headers
            .get_all(axum::http::header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .collect::<Vec<_>>()
            .join("; ");
        Self { cookie_header }
    }

    /// Read the request parts the server integration provides via context.
    /// Outside a request (e.g. static rendering) the marker reads as absent.
    pub fn from_context() -> Self {
        leptos::prelude::use_context::<axum::http::request::Parts>()
            .map(|parts| Self::from_parts(&parts))
            .unwrap_or_default()
    }
}

#[cfg(feature = "ssr")]
impl MarkerCookie for RequestMarker {
    fn is_set(&self) -> bool {
        marker_is_set(&self.cookie_header)
    }

    /// The server never rewrites the marker; logout clears it in the browser.
    fn clear(&self) {}
}

#[cfg(feature = "hydrate")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;

    web_sys::window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()
}

/// Find the marker value in a `document.cookie` style header (`a=1; b=2`).
pub fn marker_value(cookie_header: &str) -> Option<&str> {
    cookie_header.split(';').find_map(|pair| {
        let (name, value) = pair.split_once('=')?;
        (name.trim() == MARKER_COOKIE_NAME).then_some(value.trim())
    })
}

/// Whether the cookie header carries the marker with the value `"true"`.
pub fn marker_is_set(cookie_header: &str) -> bool {
    marker_value(cookie_header) == Some(MARKER_SET_VALUE)
}

/// Cookie assignment that expires the marker at path `/`.
pub fn clear_marker_cookie() -> String {
    format!("{MARKER_COOKIE_NAME}=; path=/; expires=Thu, 01 Jan 1970 00:00:00 GMT; max-age=0")
}

/// In-memory marker used by unit tests in place of `document.cookie`.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct MemoryMarker {
    value: std::cell::RefCell<Option<String>>,
    clears: std::cell::Cell<u32>,
}

#[cfg(test)]
impl MemoryMarker {
    pub(crate) fn new(value: Option<&str>) -> Self {
        Self { value: std::cell::RefCell::new(value.map(str::to_owned)), clears: std::cell::Cell::new(0) }
    }

    /// Simulate the backend (or another tab) changing the marker.
    pub(crate) fn set(&self, value: Option<&str>) {
        *self.value.borrow_mut() = value.map(str::to_owned);
    }

    pub(crate) fn clears(&self) -> u32 {
        self.clears.get()
    }
}

#[cfg(test)]
impl MarkerCookie for MemoryMarker {
    fn is_set(&self) -> bool {
        self.value.borrow().as_deref() == Some(MARKER_SET_VALUE)
    }

    fn clear(&self) {
        *self.value.borrow_mut() = None;
        self.clears.set(self.clears.get() + 1);
    }
}

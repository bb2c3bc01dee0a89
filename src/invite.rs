//! Join links for unoccupied seats.

use seat_shared::SeatToken;

/// Scheme and host the client is served from, as the browser reports them.
/// `protocol` keeps its trailing colon, e.g. `"https:"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Origin {
    pub protocol: String,
    pub host: String,
}

impl Origin {
    pub fn new(protocol: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            protocol: protocol.into(),
            host: host.into(),
        }
    }

    /// Read the origin from `window.location`.
    #[cfg(target_arch = "wasm32")]
    pub fn from_window() -> Option<Self> {
        let location = web_sys::window()?.location();
        let protocol = location.protocol().ok()?;
        let host = location.host().ok()?;
        Some(Self { protocol, host })
    }
}

impl Default for Origin {
    fn default() -> Self {
        Self::new("http:", "127.0.0.1:3000")
    }
}

/// `<protocol>//<host>/<table_name>/<token>`, joined literally without any
/// percent-encoding.
pub fn invite_url(origin: &Origin, table_name: &str, token: &SeatToken) -> String {
    format!(
        "{}//{}/{}/{}",
        origin.protocol,
        origin.host,
        table_name,
        token.as_str()
    )
}

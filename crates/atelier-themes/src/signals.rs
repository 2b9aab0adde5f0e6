//! Request signals and the override cookies that carry them.
//!
//! The preview and session overrides travel as cookies. Reading them is
//! plain `Cookie` header parsing; writing them produces a [`SignalCookie`]
//! the caller attaches to its response as a `Set-Cookie` header.

use atelier_config::schema::SignalsConfig;
use serde::Serialize;

/// The parts of an incoming request the resolver cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestSignals {
    /// Raw `Host` header value, port included.
    pub host: Option<String>,
    /// Raw `Cookie` header value.
    pub cookie_header: Option<String>,
}

impl RequestSignals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn with_cookie_header(mut self, header: impl Into<String>) -> Self {
        self.cookie_header = Some(header.into());
        self
    }

    /// Value of the first non-empty cookie called `name`.
    pub fn cookie(&self, name: &str) -> Option<String> {
        let header = self.cookie_header.as_deref()?;
        header
            .split(';')
            .filter_map(|pair| pair.split_once('='))
            .filter(|(key, _)| key.trim() == name)
            .map(|(_, value)| value.trim().trim_matches('"').to_string())
            .find(|value| !value.is_empty())
    }
}

/// A cookie to set (or expire) on the response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignalCookie {
    pub name: String,
    pub value: String,
    /// Lifetime in seconds; zero expires the cookie immediately.
    pub max_age_secs: u64,
}

impl SignalCookie {
    /// Whether this cookie removes an existing override.
    pub fn is_removal(&self) -> bool {
        self.max_age_secs == 0
    }

    /// Render as a `Set-Cookie` header value.
    pub fn header_value(&self) -> String {
        format!(
            "{}={}; Path=/; Max-Age={}; SameSite=Lax",
            self.name, self.value, self.max_age_secs
        )
    }
}

/// Builds the preview and session override cookies.
#[derive(Debug, Clone)]
pub struct OverrideCookies {
    preview_cookie: String,
    session_cookie: String,
    preview_max_age_secs: u64,
    session_max_age_secs: u64,
}

impl Default for OverrideCookies {
    fn default() -> Self {
        Self::from_config(&SignalsConfig::default())
    }
}

impl OverrideCookies {
    pub fn from_config(config: &SignalsConfig) -> Self {
        Self {
            preview_cookie: config.preview_cookie.clone(),
            session_cookie: config.session_cookie.clone(),
            preview_max_age_secs: config.preview_max_age_secs,
            session_max_age_secs: config.session_max_age_secs,
        }
    }

    pub fn preview_cookie(&self) -> &str {
        &self.preview_cookie
    }

    pub fn session_cookie(&self) -> &str {
        &self.session_cookie
    }

    /// Session override selecting `slug` for later requests.
    ///
    /// The slug is not checked against installed themes; a stale value is
    /// ignored at resolution time instead.
    pub fn set_active_theme(&self, slug: &str) -> SignalCookie {
        SignalCookie {
            name: self.session_cookie.clone(),
            value: cookie_safe(slug),
            max_age_secs: self.session_max_age_secs,
        }
    }

    /// Short-lived preview override.
    pub fn set_preview_theme(&self, slug: &str) -> SignalCookie {
        SignalCookie {
            name: self.preview_cookie.clone(),
            value: cookie_safe(slug),
            max_age_secs: self.preview_max_age_secs,
        }
    }

    /// Expire the preview override.
    pub fn clear_preview(&self) -> SignalCookie {
        SignalCookie {
            name: self.preview_cookie.clone(),
            value: String::new(),
            max_age_secs: 0,
        }
    }
}

/// Drop characters that cannot appear in a cookie value.
fn cookie_safe(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_graphic() && !matches!(c, ';' | ',' | '"' | '\\'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_named_cookie() {
        let signals =
            RequestSignals::new().with_cookie_header("a=1; theme=aurora; theme_preview=noir");
        assert_eq!(signals.cookie("theme").as_deref(), Some("aurora"));
        assert_eq!(signals.cookie("theme_preview").as_deref(), Some("noir"));
        assert_eq!(signals.cookie("missing"), None);
    }

    #[test]
    fn empty_and_quoted_values() {
        let signals = RequestSignals::new().with_cookie_header("theme=; theme=\"noir\"");
        assert_eq!(signals.cookie("theme").as_deref(), Some("noir"));

        let signals = RequestSignals::new().with_cookie_header("theme=");
        assert_eq!(signals.cookie("theme"), None);
    }

    #[test]
    fn cookie_name_must_match_exactly() {
        let signals = RequestSignals::new().with_cookie_header("theme_preview=noir");
        assert_eq!(signals.cookie("theme"), None);
    }

    #[test]
    fn no_cookie_header() {
        assert_eq!(RequestSignals::new().with_host("a.com").cookie("theme"), None);
    }

    #[test]
    fn session_cookie_defaults() {
        let cookie = OverrideCookies::default().set_active_theme("aurora");
        assert_eq!(cookie.name, "theme");
        assert_eq!(cookie.value, "aurora");
        assert_eq!(cookie.max_age_secs, 31_536_000);
        assert_eq!(
            cookie.header_value(),
            "theme=aurora; Path=/; Max-Age=31536000; SameSite=Lax"
        );
    }

    #[test]
    fn preview_cookie_is_short_lived() {
        let cookies = OverrideCookies::default();
        let cookie = cookies.set_preview_theme("noir");
        assert_eq!(cookie.name, "theme_preview");
        assert_eq!(cookie.max_age_secs, 3600);
        assert!(!cookie.is_removal());

        let cleared = cookies.clear_preview();
        assert_eq!(cleared.name, "theme_preview");
        assert!(cleared.value.is_empty());
        assert!(cleared.is_removal());
        assert_eq!(cleared.header_value(), "theme_preview=; Path=/; Max-Age=0; SameSite=Lax");
    }

    #[test]
    fn unknown_slug_is_still_written() {
        let cookie = OverrideCookies::default().set_active_theme("not-installed");
        assert_eq!(cookie.value, "not-installed");
    }

    #[test]
    fn header_breaking_characters_are_dropped() {
        let cookie = OverrideCookies::default().set_active_theme("evil; Domain=x\r\n");
        assert_eq!(cookie.value, "evilDomain=x");
    }

    #[test]
    fn configured_names_are_used() {
        let config = SignalsConfig {
            preview_cookie: "pv".into(),
            session_cookie: "ss".into(),
            preview_max_age_secs: 60,
            session_max_age_secs: 120,
        };
        let cookies = OverrideCookies::from_config(&config);
        assert_eq!(
            cookies.set_active_theme("a").header_value(),
            "ss=a; Path=/; Max-Age=120; SameSite=Lax"
        );
        assert_eq!(cookies.set_preview_theme("a").max_age_secs, 60);
    }
}

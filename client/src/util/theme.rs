//! Theme persistence and application.
//!
//! Reads the user's preference from `localStorage` and applies a `light` or
//! `dark` class to the `<html>` element. Changes write back to
//! `localStorage`. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! no-op and render with the default preference.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::theme::{ColorScheme, Theme};

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "theme";

/// Read the stored theme preference, defaulting to `System`.
pub fn read_preference() -> Theme {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
            .map_or(Theme::System, |raw| Theme::parse(&raw))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Theme::System
    }
}

/// Whether the operating system asks for a dark color scheme.
pub fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Swap the `light`/`dark` class on `<html>`.
pub fn apply(theme: Theme) -> ColorScheme {
    let scheme = theme.resolve(system_prefers_dark());
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let classes = el.class_list();
            let _ = classes.remove_2("light", "dark");
            let _ = classes.add_1(scheme.class());
        }
    }
    scheme
}

/// Apply `theme` and persist it.
pub fn store(theme: Theme) -> ColorScheme {
    let scheme = apply(theme);
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, theme.as_str());
        }
    }
    scheme
}

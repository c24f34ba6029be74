//! The one client-side preference that survives a reload: the dark-mode
//! flag, stored independently of any backend state.

const THEME_STORAGE_KEY: &str = "dark";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Day,
    Night,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Day => ThemeMode::Night,
            ThemeMode::Night => ThemeMode::Day,
        }
    }

    pub fn storage_value(self) -> &'static str {
        match self {
            ThemeMode::Day => "false",
            ThemeMode::Night => "true",
        }
    }

    pub fn body_class(self) -> &'static str {
        match self {
            ThemeMode::Day => "",
            ThemeMode::Night => "dark",
        }
    }
}

pub fn load_theme_mode() -> ThemeMode {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten());

    match stored.as_deref() {
        Some("true") => ThemeMode::Night,
        _ => ThemeMode::Day,
    }
}

pub fn save_theme_mode(theme: ThemeMode) {
    if let Some(storage) = web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    {
        let _ = storage.set_item(THEME_STORAGE_KEY, theme.storage_value());
    }
}

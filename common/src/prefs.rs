//! UI設定（テーマ・言語）
//!
//! セッション中のメモリ上にのみ存在し、永続化しない

use serde::{Deserialize, Serialize};

/// テーマ
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// ルート要素 (<html>) に付けるクラス
    pub fn document_class(self) -> Option<&'static str> {
        match self {
            Theme::Light => None,
            Theme::Dark => Some("dark"),
        }
    }

    /// 画面全体のラッパーのクラス
    pub fn shell_class(self) -> &'static str {
        match self {
            Theme::Light => "bg-gray-50 text-gray-900",
            Theme::Dark => "bg-gray-900 text-white",
        }
    }

    pub fn navbar_class(self) -> &'static str {
        match self {
            Theme::Light => "bg-white",
            Theme::Dark => "bg-gray-800",
        }
    }

    /// 切り替えボタンのアイコン（切り替え先を示す）
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }
}

/// 表示言語
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ko,
}

impl Language {
    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Ko,
            Language::Ko => Language::En,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ko => "ko",
        }
    }

    /// 切り替えボタンの表示（切り替え先の言語名）
    pub fn toggle_label(self) -> &'static str {
        match self {
            Language::En => "한국어",
            Language::Ko => "English",
        }
    }
}

/// UI設定
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub theme: Theme,
    pub language: Language,
}

impl Preferences {
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    pub fn toggle_language(&mut self) {
        self.language = self.language.toggled();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let prefs = Preferences::default();
        assert_eq!(prefs.theme, Theme::Light);
        assert_eq!(prefs.language, Language::En);
        assert_eq!(prefs.theme.document_class(), None);
    }

    #[test]
    fn test_toggle_theme_twice_restores_original() {
        let mut prefs = Preferences::default();
        let original = (prefs.theme.document_class(), prefs.theme.shell_class());

        prefs.toggle_theme();
        assert_eq!(prefs.theme.document_class(), Some("dark"));
        assert_eq!(prefs.theme.shell_class(), "bg-gray-900 text-white");

        prefs.toggle_theme();
        assert_eq!((prefs.theme.document_class(), prefs.theme.shell_class()), original);
    }

    #[test]
    fn test_toggle_theme_leaves_language() {
        let mut prefs = Preferences {
            theme: Theme::Light,
            language: Language::Ko,
        };
        prefs.toggle_theme();
        assert_eq!(prefs.language, Language::Ko);
    }

    #[test]
    fn test_toggle_language() {
        let mut prefs = Preferences::default();
        prefs.toggle_language();
        assert_eq!(prefs.language.code(), "ko");
        prefs.toggle_language();
        assert_eq!(prefs.language, Language::En);
    }
}

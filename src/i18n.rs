//! Simple internationalization (i18n) helpers.
//!
//! Supports English and Simplified Chinese with an `Auto` mode that follows the OS language.

use serde::{Deserialize, Serialize};

use crate::state::OperationMode;

/// Supported UI languages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Language {
    /// English
    En,
    /// Chinese (Simplified)
    Zh,
}

/// User-configurable language preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguagePreference {
    /// Follow the OS language.
    #[default]
    Auto,
    /// Force English.
    En,
    /// Force Chinese.
    Zh,
}

impl LanguagePreference {
    pub fn resolve(self) -> Language {
        match self {
            Self::Auto => detect_system_language(),
            Self::En => Language::En,
            Self::Zh => Language::Zh,
        }
    }
}

pub struct Texts {
    lang: Language,
}

impl Texts {
    pub const fn new(lang: Language) -> Self {
        Self { lang }
    }

    pub const fn app_name_short(&self) -> &'static str {
        match self.lang {
            Language::En => "BreakGap",
            Language::Zh => "息间",
        }
    }

    pub fn daily_limit_title(&self) -> String {
        match self.lang {
            Language::En => format!("{} · Daily limit", self.app_name_short()),
            Language::Zh => format!("{} · 每日上限", self.app_name_short()),
        }
    }

    pub fn daily_limit_message(&self, elapsed: &str, limit: &str) -> String {
        match self.lang {
            Language::En => format!(
                "You have reached your daily computer usage limit.\nPlease stop working for today.\n\nUsed {elapsed} of {limit}."
            ),
            Language::Zh => format!(
                "今天的电脑使用时间已达上限。\n请停止今天的工作。\n\n已使用 {elapsed} / {limit}。"
            ),
        }
    }

    pub const fn skip_button(&self) -> &'static str {
        match self.lang {
            Language::En => "Skip",
            Language::Zh => "跳过",
        }
    }

    pub const fn postpone_button(&self) -> &'static str {
        match self.lang {
            Language::En => "Postpone",
            Language::Zh => "推迟",
        }
    }

    pub const fn mode_name(&self, mode: OperationMode) -> &'static str {
        match (self.lang, mode) {
            (Language::En, OperationMode::Normal) => "Normal",
            (Language::En, OperationMode::Suspended) => "Suspended",
            (Language::En, OperationMode::Quiet) => "Quiet",
            (Language::Zh, OperationMode::Normal) => "正常",
            (Language::Zh, OperationMode::Suspended) => "暂停",
            (Language::Zh, OperationMode::Quiet) => "安静",
        }
    }

    pub fn tray_tooltip(&self, mode: OperationMode, remaining: &str) -> String {
        match self.lang {
            Language::En => format!(
                "{} ({}) - {remaining} left today",
                self.app_name_short(),
                self.mode_name(mode)
            ),
            Language::Zh => format!(
                "{}（{}）- 今日剩余 {remaining}",
                self.app_name_short(),
                self.mode_name(mode)
            ),
        }
    }

    pub const fn limit_balloon(&self) -> &'static str {
        match self.lang {
            Language::En => "Daily usage limit reached",
            Language::Zh => "已达到每日使用上限",
        }
    }

    pub const fn console_help(&self) -> &'static str {
        match self.lang {
            Language::En => {
                "Commands: s = skip, p = postpone, m <normal|suspended|quiet> = mode, t = tray click, r = tray menu, h/v = hide/show tray, z <size> = tray resize, b <id> = balloon click, c = taskbar restart, i = status, q = quit"
            }
            Language::Zh => "命令：s = 跳过，p = 推迟，m <normal|suspended|quiet> = 模式，t = 托盘点击，r = 托盘菜单，h/v = 隐藏/显示托盘，z <尺寸> = 托盘尺寸，b <id> = 点击气泡，c = 任务栏重启，i = 状态，q = 退出",
        }
    }
}

pub fn detect_system_language() -> Language {
    for key in ["LC_ALL", "LC_MESSAGES", "LANG"] {
        if let Some(v) = std::env::var_os(key) {
            if let Some(lang) = language_from_tag(&v.to_string_lossy()) {
                return lang;
            }
        }
    }
    Language::En
}

pub fn language_from_tag(tag: &str) -> Option<Language> {
    let s = tag.trim();
    if s.is_empty() {
        return None;
    }
    let s = s.to_ascii_lowercase();
    if s.contains("zh") {
        return Some(Language::Zh);
    }
    if s.contains("en") {
        return Some(Language::En);
    }
    None
}

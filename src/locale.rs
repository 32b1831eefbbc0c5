//! Locale selection and UI labels
//!
//! Only the label text depends on the locale; gallery behavior is identical.

use crate::config::AppConfig;

/// Environment variables consulted in priority order
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Ru,
}

/// Every user-facing string in the app
#[derive(Debug)]
pub struct Labels {
    pub title: &'static str,
    pub add_task: &'static str,
    pub choose_files: &'static str,
    pub view_solution: &'static str,
    pub solve: &'static str,
    pub solution_heading: &'static str,
    pub check_heading: &'static str,
    pub back: &'static str,
}

const EN: Labels = Labels {
    title: "School Killer",
    add_task: "Add a task",
    choose_files: "Choose files",
    view_solution: "View solution",
    solve: "Check my solution",
    solution_heading: "Solution",
    check_heading: "Solution check",
    back: "Back",
};

const RU: Labels = Labels {
    title: "School Killer",
    add_task: "Добавить задание",
    choose_files: "Выбрать файлы",
    view_solution: "Посмотреть решение",
    solve: "Проверить решение",
    solution_heading: "Решение",
    check_heading: "Проверка решения",
    back: "Назад",
};

impl Locale {
    /// Anything starting with "ru" (e.g. "ru_RU.UTF-8", "ru-RU") is Russian
    pub fn from_tag(tag: &str) -> Self {
        if tag.trim().to_ascii_lowercase().starts_with("ru") {
            Locale::Ru
        } else {
            Locale::En
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ru => "ru",
        }
    }

    /// Detect from the process environment
    pub fn detect() -> Self {
        Self::from_env_values(LOCALE_VARS.iter().map(|key| std::env::var(key).ok()))
    }

    /// First non-empty value wins, like the C library's lookup order
    fn from_env_values(values: impl IntoIterator<Item = Option<String>>) -> Self {
        values
            .into_iter()
            .flatten()
            .find(|value| !value.trim().is_empty())
            .map(|value| Self::from_tag(&value))
            .unwrap_or_default()
    }

    /// Config override first, environment second
    pub fn resolve(config: &AppConfig) -> Self {
        match config.locale.as_deref() {
            Some(tag) => Self::from_tag(tag),
            None => Self::detect(),
        }
    }

    pub fn labels(self) -> &'static Labels {
        match self {
            Locale::En => &EN,
            Locale::Ru => &RU,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag() {
        assert_eq!(Locale::from_tag("ru_RU.UTF-8"), Locale::Ru);
        assert_eq!(Locale::from_tag("RU"), Locale::Ru);
        assert_eq!(Locale::from_tag("en_US.UTF-8"), Locale::En);
        assert_eq!(Locale::from_tag("C"), Locale::En);
    }

    #[test]
    fn test_env_priority() {
        let values = [None, Some(String::new()), Some("ru_RU.UTF-8".to_string())];
        assert_eq!(Locale::from_env_values(values), Locale::Ru);

        let values = [Some("de_DE.UTF-8".to_string()), Some("ru_RU.UTF-8".to_string())];
        assert_eq!(Locale::from_env_values(values), Locale::En);

        assert_eq!(Locale::from_env_values([None, None]), Locale::En);
    }

    #[test]
    fn test_config_override_wins() {
        let config = AppConfig {
            locale: Some("ru".into()),
            ..AppConfig::default()
        };
        assert_eq!(Locale::resolve(&config), Locale::Ru);
        assert_eq!(Locale::Ru.labels().solution_heading, "Решение");
        assert_eq!(Locale::resolve(&config).tag(), "ru");
    }
}

//! A single row of the app selector menu.

use launcher_core::AppName;
use std::fmt;

/// Prefix of every entry's root handle.
pub const ENTRY_ID_PREFIX: &str = "entry-";

/// One piece of a rendered entry, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntrySegment<'a> {
    Icon(&'a str),
    Title(&'a str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppEntry {
    title: String,
    icon_type: Option<String>,
    is_create_action: bool,
}

impl AppEntry {
    /// Entry for an installed app, shown without an icon.
    pub fn app(name: &AppName) -> Self {
        Self {
            title: name.to_string(),
            icon_type: None,
            is_create_action: false,
        }
    }

    /// The trailing "create new app" row.
    pub fn create_action(title: impl Into<String>, icon_type: Option<String>) -> Self {
        Self {
            title: title.into(),
            icon_type,
            is_create_action: true,
        }
    }

    pub fn with_icon(mut self, icon_type: impl Into<String>) -> Self {
        self.icon_type = Some(icon_type.into());
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn icon_type(&self) -> Option<&str> {
        self.icon_type.as_deref()
    }

    pub fn is_create_action(&self) -> bool {
        self.is_create_action
    }

    /// Root handle of the rendered row, derived from the title.
    pub fn id(&self) -> String {
        format!("{ENTRY_ID_PREFIX}{}", self.title)
    }

    /// Icon marker (if any) followed by the title.
    pub fn render(&self) -> Vec<EntrySegment<'_>> {
        let mut segments = Vec::with_capacity(2);
        if let Some(icon) = &self.icon_type {
            segments.push(EntrySegment::Icon(icon));
        }
        segments.push(EntrySegment::Title(&self.title));
        segments
    }
}

impl fmt::Display for AppEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.icon_type {
            Some(icon) => write!(f, "[{icon}] {}", self.title),
            None => write!(f, "{}", self.title),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> AppName {
        AppName::try_from(s).unwrap()
    }

    #[test]
    fn test_app_entry_without_icon() {
        let entry = AppEntry::app(&name("weather"));

        assert_eq!(entry.title(), "weather");
        assert_eq!(entry.icon_type(), None);
        assert!(!entry.is_create_action());
        assert_eq!(entry.id(), "entry-weather");
        assert_eq!(entry.render(), vec![EntrySegment::Title("weather")]);
        assert_eq!(entry.to_string(), "weather");
    }

    #[test]
    fn test_icon_precedes_title() {
        let entry = AppEntry::app(&name("camera")).with_icon("photo_camera");

        assert_eq!(
            entry.render(),
            vec![
                EntrySegment::Icon("photo_camera"),
                EntrySegment::Title("camera")
            ]
        );
        assert_eq!(entry.to_string(), "[photo_camera] camera");
    }

    #[test]
    fn test_create_action_entry() {
        let entry = AppEntry::create_action("Create new app", Some("add".to_string()));

        assert!(entry.is_create_action());
        assert_eq!(entry.icon_type(), Some("add"));
        assert_eq!(entry.id(), "entry-Create new app");
    }
}

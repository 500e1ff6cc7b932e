//! App selector menu.
//!
//! Rows are kept in a [`ViewContainer`] keyed by [`EntryKey`], so app names
//! are unique by construction and the create-action row can never collide
//! with an app of the same title. The create-action row is appended once at
//! construction and every app is inserted before it.
//!
//! Hiding is deferred by `MenuSettings::hide_delay` so click feedback can
//! finish. Each `hide` schedules an independent task; `tick` applies the due
//! ones. `show` and `toggle` take effect immediately.

use crate::entry::{AppEntry, EntrySegment};
use crate::scheduler::{Scheduler, TaskId};
use crate::view::ViewContainer;
use launcher_core::AppName;
use launcher_core::types::MenuSettings;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

pub const MENU_ROOT_ID: &str = "app-selector-menu";

pub type SelectAppCallback = Box<dyn FnMut(&AppName)>;
pub type CreateAppCallback = Box<dyn FnMut()>;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum EntryKey {
    App(AppName),
    CreateAction,
}

pub struct AppSelectorMenu {
    view: ViewContainer<EntryKey, AppEntry>,
    visible: bool,
    hide_delay: Duration,
    hides: Scheduler<()>,
    on_select_app: SelectAppCallback,
    on_create_app: CreateAppCallback,
}

impl AppSelectorMenu {
    pub fn new(
        settings: &MenuSettings,
        on_select_app: impl FnMut(&AppName) + 'static,
        on_create_app: impl FnMut() + 'static,
    ) -> Self {
        let mut view = ViewContainer::new(MENU_ROOT_ID);
        view.append(
            EntryKey::CreateAction,
            AppEntry::create_action(
                settings.create_entry_title.clone(),
                settings.create_entry_icon.clone(),
            ),
        );

        Self {
            view,
            visible: false,
            hide_delay: settings.hide_delay,
            hides: Scheduler::new(),
            on_select_app: Box::new(on_select_app),
            on_create_app: Box::new(on_create_app),
        }
    }

    pub fn root_id(&self) -> &str {
        self.view.root_id()
    }

    pub fn hide_delay(&self) -> Duration {
        self.hide_delay
    }
}

/// Lookup operations.
impl AppSelectorMenu {
    /// Position of the app's row, or `None` if it is not listed.
    pub fn get_index(&self, name: &AppName) -> Option<usize> {
        self.view.position(&EntryKey::App(name.clone()))
    }

    /// Title of the row at `index`, the create-action row included. `None` past the end.
    pub fn get_app_name_at(&self, index: usize) -> Option<&str> {
        self.view.child_at(index).map(|(_, entry)| entry.title())
    }

    /// Number of listed apps, not counting the create-action row.
    pub fn get_apps_count(&self) -> usize {
        self.view.len() - 1
    }

    pub fn contains(&self, name: &AppName) -> bool {
        self.view.contains(&EntryKey::App(name.clone()))
    }

    pub fn entry(&self, name: &AppName) -> Option<&AppEntry> {
        self.view.get(&EntryKey::App(name.clone()))
    }

    /// All rows in display order, create-action row last.
    pub fn entries(&self) -> impl Iterator<Item = &AppEntry> + '_ {
        self.view.iter().map(|(_, entry)| entry)
    }

    pub fn render(&self) -> Vec<Vec<EntrySegment<'_>>> {
        self.entries().map(AppEntry::render).collect()
    }
}

/// Mutation operations.
impl AppSelectorMenu {
    /// Adds an app before the create-action row. Already listed names are ignored.
    pub fn add_app(&mut self, name: AppName) {
        let entry = AppEntry::app(&name);
        if self
            .view
            .insert_before(&EntryKey::CreateAction, EntryKey::App(name.clone()), entry)
        {
            debug!(app = %name, count = self.get_apps_count(), "app added to menu");
        } else {
            trace!(app = %name, "app already listed");
        }
    }

    /// Removes an app's row. Unknown names are ignored.
    pub fn remove_app(&mut self, name: &AppName) {
        if self.view.remove(&EntryKey::App(name.clone())).is_some() {
            debug!(app = %name, count = self.get_apps_count(), "app removed from menu");
        } else {
            trace!(app = %name, "app not listed");
        }
    }
}

/// Visibility operations.
impl AppSelectorMenu {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn show(&mut self) {
        self.visible = true;
        debug!("menu shown");
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
        debug!(visible = self.visible, "menu toggled");
    }

    /// Schedules the menu to hide after the configured delay.
    pub fn hide(&mut self, now: Instant) -> TaskId {
        let id = self.hides.schedule(now, self.hide_delay, ());
        trace!(?id, pending = self.hides.pending(), "menu hide scheduled");
        id
    }

    /// Returns false if the hide already ran or was cancelled.
    pub fn cancel_hide(&mut self, id: TaskId) -> bool {
        self.hides.cancel(id)
    }

    pub fn pending_hides(&self) -> usize {
        self.hides.pending()
    }

    pub fn next_hide_deadline(&self) -> Option<Instant> {
        self.hides.next_deadline()
    }

    /// Applies every hide due at `now` and returns how many fired.
    pub fn tick(&mut self, now: Instant) -> usize {
        let fired = self.hides.drain_due(now).len();
        if fired > 0 && self.visible {
            self.visible = false;
            debug!("menu hidden");
        }
        fired
    }
}

/// Click routing.
impl AppSelectorMenu {
    /// Selects a listed app, then requests a hide. Returns false for unknown names.
    pub fn click_app(&mut self, name: &AppName, now: Instant) -> bool {
        if !self.contains(name) {
            return false;
        }
        (self.on_select_app)(name);
        self.hide(now);
        true
    }

    /// Requests app creation, then requests a hide.
    pub fn click_create(&mut self, now: Instant) {
        (self.on_create_app)();
        self.hide(now);
    }

    /// Dispatches a click on the row at `index`. Returns false past the end.
    pub fn click_at(&mut self, index: usize, now: Instant) -> bool {
        let key = match self.view.child_at(index) {
            Some((key, _)) => key.clone(),
            None => return false,
        };
        match key {
            EntryKey::App(name) => self.click_app(&name, now),
            EntryKey::CreateAction => {
                self.click_create(now);
                true
            }
        }
    }
}

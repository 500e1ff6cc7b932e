//! Wires the menu and the create-app dialog to the embedding host.
//!
//! The views never reach the host directly. Their callbacks push [`UiEvent`]s
//! onto a queue owned by the controller, which drains it after every
//! interaction and routes each event to the host or to the other view.

use crate::dialog::{CreateAppDialog, CreateAppError};
use crate::menu::AppSelectorMenu;
use crate::scheduler::TaskId;
use launcher_core::types::MenuSettings;
use launcher_core::{AppName, CompanionAdapter, LauncherConfig};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::Path;
use std::rc::Rc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Application-level callbacks supplied by the embedding environment.
pub trait LauncherHost {
    fn select_app(&mut self, name: &AppName);

    /// Returns true when the app was created and should be listed in the menu.
    fn create_app(&mut self, name: &AppName) -> bool;

    /// Shows a blocking message to the user.
    fn alert(&mut self, message: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    SelectApp(AppName),
    CreateRequested,
    AppConfirmed(AppName),
    Alert(String),
}

type EventQueue = Rc<RefCell<VecDeque<UiEvent>>>;

pub struct UiController<H> {
    host: H,
    menu: AppSelectorMenu,
    dialog: CreateAppDialog,
    companion: CompanionAdapter,
    events: EventQueue,
}

impl<H: LauncherHost> UiController<H> {
    pub fn new(host: H, config: &LauncherConfig) -> Self {
        let events: EventQueue = Rc::default();

        let on_select = Rc::clone(&events);
        let on_create = Rc::clone(&events);
        let menu = AppSelectorMenu::new(
            &MenuSettings::from(&config.menu),
            move |name| {
                on_select
                    .borrow_mut()
                    .push_back(UiEvent::SelectApp(name.clone()))
            },
            move || on_create.borrow_mut().push_back(UiEvent::CreateRequested),
        );

        let on_alert = Rc::clone(&events);
        let dialog = CreateAppDialog::new(move |message| {
            on_alert
                .borrow_mut()
                .push_back(UiEvent::Alert(message.to_string()))
        });

        Self {
            host,
            menu,
            dialog,
            companion: CompanionAdapter::from_config(&config.companion),
            events,
        }
    }

    /// Loads `path` (defaults when missing) and replaces invalid values with defaults.
    pub fn from_config_file(host: H, path: &Path) -> launcher_core::Result<Self> {
        let config = LauncherConfig::load(path)?;
        for problem in config.validate() {
            warn!(path = %path.display(), %problem, "invalid launcher config, using default");
        }
        Ok(Self::new(host, &config.with_defaults_for_invalid()))
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn menu(&self) -> &AppSelectorMenu {
        &self.menu
    }

    pub fn dialog(&self) -> &CreateAppDialog {
        &self.dialog
    }

    pub fn companion(&self) -> &CompanionAdapter {
        &self.companion
    }
}

/// Menu operations.
impl<H: LauncherHost> UiController<H> {
    pub fn add_app(&mut self, name: AppName) {
        self.menu.add_app(name);
    }

    pub fn remove_app(&mut self, name: &AppName) {
        self.menu.remove_app(name);
    }

    pub fn show_menu(&mut self) {
        self.menu.show();
    }

    pub fn toggle_menu(&mut self) {
        self.menu.toggle();
    }

    pub fn hide_menu(&mut self) -> TaskId {
        self.hide_menu_at(Instant::now())
    }

    pub fn hide_menu_at(&mut self, now: Instant) -> TaskId {
        self.menu.hide(now)
    }

    /// Clicks the menu row at `index`. Returns false past the end.
    pub fn click_menu_entry(&mut self, index: usize) -> bool {
        self.click_menu_entry_at(index, Instant::now())
    }

    pub fn click_menu_entry_at(&mut self, index: usize, now: Instant) -> bool {
        let clicked = self.menu.click_at(index, now);
        self.dispatch();
        clicked
    }

    /// Clicks the row of a listed app. Returns false for unknown names.
    pub fn click_app(&mut self, name: &AppName) -> bool {
        self.click_app_at(name, Instant::now())
    }

    pub fn click_app_at(&mut self, name: &AppName, now: Instant) -> bool {
        let clicked = self.menu.click_app(name, now);
        self.dispatch();
        clicked
    }

    pub fn click_create_entry(&mut self) {
        self.click_create_entry_at(Instant::now());
    }

    pub fn click_create_entry_at(&mut self, now: Instant) {
        self.menu.click_create(now);
        self.dispatch();
    }
}

/// Dialog operations.
impl<H: LauncherHost> UiController<H> {
    pub fn set_dialog_text(&mut self, text: impl Into<String>) {
        self.dialog.set_field_value(text);
    }

    pub fn confirm_dialog(&mut self) -> Result<Option<AppName>, CreateAppError> {
        let result = self.dialog.confirm();
        self.dispatch();
        result
    }

    pub fn dismiss_dialog(&mut self) {
        self.dialog.dismiss();
    }
}

/// Companion and event loop.
impl<H: LauncherHost> UiController<H> {
    pub fn set_companion_address(
        &mut self,
        host: impl Into<String>,
        port: u16,
        path: impl Into<String>,
    ) -> bool {
        self.companion.set_address(host, port, path)
    }

    /// Applies deferred work due now. Call from the host event loop.
    pub fn tick(&mut self) -> usize {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> usize {
        self.menu.tick(now)
    }

    fn dispatch(&mut self) {
        loop {
            let event = self.events.borrow_mut().pop_front();
            let Some(event) = event else {
                break;
            };

            match event {
                UiEvent::SelectApp(name) => {
                    debug!(app = %name, "app selected");
                    self.host.select_app(&name);
                }
                UiEvent::CreateRequested => {
                    let on_confirm = Rc::clone(&self.events);
                    self.dialog.show(move |name| {
                        on_confirm
                            .borrow_mut()
                            .push_back(UiEvent::AppConfirmed(name.clone()))
                    });
                }
                UiEvent::AppConfirmed(name) => {
                    if self.host.create_app(&name) {
                        info!(app = %name, "app created");
                        self.menu.add_app(name);
                    } else {
                        warn!(app = %name, "host declined app creation");
                    }
                }
                UiEvent::Alert(message) => self.host.alert(&message),
            }
        }
    }
}

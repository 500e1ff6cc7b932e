//! App launcher control surface.
//!
//! # Components
//!
//! - [`AppSelectorMenu`]: ordered app rows plus a trailing create-action row
//! - [`CreateAppDialog`]: modal prompt for a new app name
//! - [`UiController`]: routes menu clicks and dialog confirmations to a [`LauncherHost`]
//!
//! # Event loop
//!
//! Everything runs on the caller's thread. The only deferred work is the
//! menu hide, which is applied by `tick()` once its delay has elapsed.

mod controller;
mod dialog;
mod entry;
mod menu;
mod scheduler;
mod view;

pub use controller::{LauncherHost, UiController, UiEvent};
pub use dialog::{AlertSink, ConfirmCallback, CreateAppDialog, CreateAppError};
pub use entry::{AppEntry, ENTRY_ID_PREFIX, EntrySegment};
pub use menu::{AppSelectorMenu, CreateAppCallback, MENU_ROOT_ID, SelectAppCallback};
pub use scheduler::{Scheduler, TaskId};
pub use view::ViewContainer;

use super::*;
use std::cell::RefCell;
use std::rc::Rc;

type Log = Rc<RefCell<Vec<String>>>;

fn create_dialog() -> (CreateAppDialog, Log) {
    let alerts: Log = Rc::default();
    let sink = Rc::clone(&alerts);
    let dialog = CreateAppDialog::new(move |message| sink.borrow_mut().push(message.to_string()));
    (dialog, alerts)
}

fn recorder(log: &Log) -> impl FnOnce(&AppName) + 'static {
    let log = Rc::clone(log);
    move |name: &AppName| log.borrow_mut().push(name.to_string())
}

#[test]
fn test_starts_closed() {
    let (mut dialog, alerts) = create_dialog();

    assert!(!dialog.is_open());
    assert!(dialog.confirm().unwrap().is_none());
    assert!(alerts.borrow().is_empty());
}

#[test]
fn test_empty_name_is_rejected_then_retry_succeeds() {
    let (mut dialog, alerts) = create_dialog();
    let confirmed: Log = Rc::default();

    dialog.show(recorder(&confirmed));
    dialog.set_field_value("");
    let err = dialog.confirm().unwrap_err();

    assert!(matches!(err, CreateAppError::InvalidName { ref value, .. } if value.is_empty()));
    assert_eq!(*alerts.borrow(), vec!["Invalid app name: ".to_string()]);
    assert!(confirmed.borrow().is_empty());
    assert!(dialog.is_open());

    dialog.set_field_value("myapp");
    let name = dialog.confirm().unwrap().unwrap();

    assert_eq!(name.as_str(), "myapp");
    assert_eq!(*confirmed.borrow(), vec!["myapp".to_string()]);
    assert!(!dialog.is_open());
    assert_eq!(alerts.borrow().len(), 1);
}

#[test]
fn test_padded_name_reaches_callback_unchanged() {
    let (mut dialog, alerts) = create_dialog();
    let confirmed: Log = Rc::default();

    dialog.show(recorder(&confirmed));
    dialog.set_field_value(" myapp ");
    let name = dialog.confirm().unwrap().unwrap();

    assert_eq!(name.as_str(), " myapp ");
    assert_eq!(*confirmed.borrow(), vec![" myapp ".to_string()]);
    assert!(alerts.borrow().is_empty());
    assert!(!dialog.is_open());
}

#[test]
fn test_long_name_is_accepted() {
    let (mut dialog, alerts) = create_dialog();
    let confirmed: Log = Rc::default();
    let long_name = "x".repeat(129);

    dialog.show(recorder(&confirmed));
    dialog.set_field_value(long_name.clone());
    dialog.confirm().unwrap();

    assert_eq!(*confirmed.borrow(), vec![long_name]);
    assert!(alerts.borrow().is_empty());
    assert!(!dialog.is_open());
}

#[test]
fn test_callback_runs_once() {
    let (mut dialog, _) = create_dialog();
    let confirmed: Log = Rc::default();

    dialog.show(recorder(&confirmed));
    dialog.set_field_value("myapp");
    dialog.confirm().unwrap();
    assert!(dialog.confirm().unwrap().is_none());

    assert_eq!(confirmed.borrow().len(), 1);
}

#[test]
fn test_dismiss_closes_without_callback() {
    let (mut dialog, alerts) = create_dialog();
    let confirmed: Log = Rc::default();

    dialog.show(recorder(&confirmed));
    dialog.set_field_value("myapp");
    dialog.dismiss();

    assert!(!dialog.is_open());
    assert!(dialog.confirm().unwrap().is_none());
    assert!(confirmed.borrow().is_empty());
    assert!(alerts.borrow().is_empty());
}

#[test]
fn test_reopen_supersedes_pending_callback() {
    let (mut dialog, _) = create_dialog();
    let first: Log = Rc::default();
    let second: Log = Rc::default();

    dialog.show(recorder(&first));
    dialog.set_field_value("stale");
    dialog.show(recorder(&second));

    assert_eq!(dialog.field_value(), "");
    dialog.set_field_value("fresh");
    dialog.confirm().unwrap();

    assert!(first.borrow().is_empty());
    assert_eq!(*second.borrow(), vec!["fresh".to_string()]);
}

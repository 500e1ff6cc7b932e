use nutype::nutype;

/// Name of an installed application, unique within a menu.
///
/// Only the empty string is rejected; the value is kept exactly as typed.
#[nutype(
    validate(not_empty),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        AsRef,
        Deref,
        TryFrom,
        Into,
        Hash,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct AppName(String);

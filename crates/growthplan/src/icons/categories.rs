//! Auto-generated icon category index - do not edit manually.

/// Lookup key to category, ordered by source filename.
pub static ICON_CATEGORIES: &[(&str, &str)] = &[
    ("filled-action-add", "action"),
    ("filled-action-love", "action"),
    ("filled-content-trophystar", "content"),
    ("filled-nav-home", "nav"),
    ("logo", "other"),
    ("outline-action-close", "action"),
];

/// Unique categories in first-seen order.
pub static CATEGORIES: &[&str] = &["action", "content", "nav", "other"];

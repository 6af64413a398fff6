//! Auto-generated icon mapping - do not edit manually.

use once_cell::sync::Lazy;

use crate::icon::{IconDef, IconRegistry};

use super::filled_action_add::FILLED_ACTION_ADD;
use super::filled_action_love::FILLED_ACTION_LOVE;
use super::filled_content_trophystar::FILLED_CONTENT_TROPHYSTAR;
use super::filled_nav_home::FILLED_NAV_HOME;
use super::logo::LOGO;
use super::outline_action_close::OUTLINE_ACTION_CLOSE;

/// Every generated icon definition, ordered by source filename.
pub static ICONS: &[&IconDef] = &[
    &FILLED_ACTION_ADD,
    &FILLED_ACTION_LOVE,
    &FILLED_CONTENT_TROPHYSTAR,
    &FILLED_NAV_HOME,
    &LOGO,
    &OUTLINE_ACTION_CLOSE,
];

/// Lookup keys for every generated icon.
pub static AVAILABLE_ICONS: &[&str] = &[
    "filled-action-add",
    "filled-action-love",
    "filled-content-trophystar",
    "filled-nav-home",
    "logo",
    "outline-action-close",
];

static REGISTRY: Lazy<IconRegistry> = Lazy::new(|| IconRegistry::from_defs(ICONS));

/// Shared registry over every generated icon.
pub fn registry() -> &'static IconRegistry {
    &REGISTRY
}

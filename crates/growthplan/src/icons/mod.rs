//! Auto-generated icon module index - do not edit manually.

pub mod categories;
pub mod mapping;

pub mod filled_action_add;
pub mod filled_action_love;
pub mod filled_content_trophystar;
pub mod filled_nav_home;
pub mod logo;
pub mod outline_action_close;

pub use self::filled_action_add::FILLED_ACTION_ADD;
pub use self::filled_action_love::FILLED_ACTION_LOVE;
pub use self::filled_content_trophystar::FILLED_CONTENT_TROPHYSTAR;
pub use self::filled_nav_home::FILLED_NAV_HOME;
pub use self::logo::LOGO;
pub use self::mapping::{registry, AVAILABLE_ICONS, ICONS};
pub use self::outline_action_close::OUTLINE_ACTION_CLOSE;

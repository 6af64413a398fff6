//! Theme scopes that resolve GrowthPlan colors for a subtree of consumers.
//!
//! A [`ThemeScope`] holds the active plan tier. Icons rendered without any
//! scope resolve theme-driven color requests to the `currentColor` sentinel
//! instead of failing; see [`crate::icon::render`].

use std::str::FromStr;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tokens::{self, GroupPalette, DEFAULT_COLOR, DEFAULT_CONTRAST};

/// GrowthPlan tiers shipped with the design system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ThemeGroup {
    /// Entry tier and the default scope theme.
    #[default]
    Crystal,
    /// Bronze tier.
    Bronze,
    /// Silver tier.
    Silver,
    /// Gold tier.
    Gold,
    /// Sapphire tier.
    Sapphire,
    /// Diamond tier.
    Diamond,
    /// Top tier above diamond.
    DiamondPlus,
}

impl ThemeGroup {
    /// Every tier in presentation order.
    pub const ALL: &'static [ThemeGroup] = &[
        ThemeGroup::Crystal,
        ThemeGroup::Bronze,
        ThemeGroup::Silver,
        ThemeGroup::Gold,
        ThemeGroup::Sapphire,
        ThemeGroup::Diamond,
        ThemeGroup::DiamondPlus,
    ];

    /// Returns the group's camelCase slug.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ThemeGroup::Crystal => "crystal",
            ThemeGroup::Bronze => "bronze",
            ThemeGroup::Silver => "silver",
            ThemeGroup::Gold => "gold",
            ThemeGroup::Sapphire => "sapphire",
            ThemeGroup::Diamond => "diamond",
            ThemeGroup::DiamondPlus => "diamondPlus",
        }
    }

    /// Looks up a group by its slug.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<ThemeGroup> {
        Self::ALL.iter().copied().find(|group| group.as_str() == slug)
    }
}

/// Error returned when a group slug cannot be parsed.
#[derive(Debug, Error)]
#[error("unknown theme group '{0}'")]
pub struct UnknownGroup(pub String);

impl FromStr for ThemeGroup {
    type Err = UnknownGroup;

    fn from_str(slug: &str) -> Result<Self, Self::Err> {
        ThemeGroup::from_slug(slug).ok_or_else(|| UnknownGroup(slug.to_owned()))
    }
}

/// State holder for the active theme within one scoped region.
///
/// Clones share the same active group, so a scope can be handed to many
/// consumers while `set_theme` stays visible to all of them. Independent
/// scopes never observe each other's state.
#[derive(Debug, Clone)]
pub struct ThemeScope {
    active: Arc<Mutex<ThemeGroup>>,
}

impl Default for ThemeScope {
    fn default() -> Self {
        Self::new(ThemeGroup::Crystal)
    }
}

impl ThemeScope {
    /// Opens a scope with the given initial group.
    #[must_use]
    pub fn new(default_theme: ThemeGroup) -> Self {
        Self {
            active: Arc::new(Mutex::new(default_theme)),
        }
    }

    /// Returns the currently active group.
    #[must_use]
    pub fn current(&self) -> ThemeGroup {
        *self.active.lock().expect("theme mutex poisoned")
    }

    /// Replaces the active group.
    pub fn set_theme(&self, group: ThemeGroup) {
        *self.active.lock().expect("theme mutex poisoned") = group;
    }

    /// Resolves a shade for `group`; total, see [`tokens::get_color`].
    #[must_use]
    pub fn get_color(&self, group: ThemeGroup, variant: Option<&str>) -> &'static str {
        tokens::get_color(group, variant)
    }

    /// Resolves a paired contrast color; total, see
    /// [`tokens::get_contrast_color`].
    #[must_use]
    pub fn get_contrast_color(&self, group: ThemeGroup, variant: Option<&str>) -> &'static str {
        tokens::get_contrast_color(group, variant)
    }

    /// Returns the full palette table for a group.
    #[must_use]
    pub fn colors(&self, group: ThemeGroup) -> &'static GroupPalette {
        tokens::palette(group)
    }
}

/// Resolves a color from a stringly-typed group slug.
///
/// Unknown groups yield [`DEFAULT_COLOR`] rather than an error, since color
/// resolution must never block rendering.
#[must_use]
pub fn color_for(group_slug: &str, variant: Option<&str>) -> &'static str {
    match ThemeGroup::from_slug(group_slug) {
        Some(group) => tokens::get_color(group, variant),
        None => DEFAULT_COLOR,
    }
}

/// Stringly-typed counterpart of [`ThemeScope::get_contrast_color`].
///
/// Unknown groups yield [`DEFAULT_CONTRAST`].
#[must_use]
pub fn contrast_color_for(group_slug: &str, variant: Option<&str>) -> &'static str {
    match ThemeGroup::from_slug(group_slug) {
        Some(group) => tokens::get_contrast_color(group, variant),
        None => DEFAULT_CONTRAST,
    }
}

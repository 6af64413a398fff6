//! GrowthPlan color tables shared by every theme scope.
//!
//! Each plan tier owns one [`GroupPalette`] with five shade variants and a
//! paired `on*` contrast entry per shade. Lookups are total: unknown variant
//! names fall back to the group's `primary` entry so color resolution can
//! never block rendering.

use crate::theme::ThemeGroup;

/// Neutral color returned when a group cannot be resolved at the string
/// boundary.
pub const DEFAULT_COLOR: &str = "#000000";

/// Neutral contrast color used when no `on*` entry is available.
pub const DEFAULT_CONTRAST: &str = "#FFFFFF";

/// Variant names recognized by [`GroupPalette::variant`].
pub const VARIANTS: &[&str] = &[
    "primary",
    "primaryLight",
    "primaryLightest",
    "primaryDark",
    "primaryDarkest",
];

/// Shade and contrast entries for a single GrowthPlan group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupPalette {
    /// Base color of the group.
    pub primary: &'static str,
    /// Lighter shade of the base color.
    pub primary_light: &'static str,
    /// Lightest shade, used for washes and backgrounds.
    pub primary_lightest: &'static str,
    /// Darker shade of the base color.
    pub primary_dark: &'static str,
    /// Darkest shade, used for pressed states.
    pub primary_darkest: &'static str,
    /// Content color atop [`primary`](Self::primary).
    pub on_primary: &'static str,
    /// Content color atop [`primary_light`](Self::primary_light).
    pub on_primary_light: &'static str,
    /// Content color atop [`primary_lightest`](Self::primary_lightest).
    pub on_primary_lightest: &'static str,
    /// Content color atop [`primary_dark`](Self::primary_dark).
    pub on_primary_dark: &'static str,
    /// Content color atop [`primary_darkest`](Self::primary_darkest).
    pub on_primary_darkest: &'static str,
}

impl GroupPalette {
    /// Looks up a shade by its camelCase variant name.
    #[must_use]
    pub fn variant(&self, name: &str) -> Option<&'static str> {
        match name {
            "primary" => Some(self.primary),
            "primaryLight" => Some(self.primary_light),
            "primaryLightest" => Some(self.primary_lightest),
            "primaryDark" => Some(self.primary_dark),
            "primaryDarkest" => Some(self.primary_darkest),
            _ => None,
        }
    }

    /// Looks up the contrast entry paired with a variant name.
    #[must_use]
    pub fn contrast(&self, name: &str) -> Option<&'static str> {
        match name {
            "primary" => Some(self.on_primary),
            "primaryLight" => Some(self.on_primary_light),
            "primaryLightest" => Some(self.on_primary_lightest),
            "primaryDark" => Some(self.on_primary_dark),
            "primaryDarkest" => Some(self.on_primary_darkest),
            _ => None,
        }
    }
}

const CRYSTAL: GroupPalette = GroupPalette {
    primary: "#7FDBE8",
    primary_light: "#A9E8F1",
    primary_lightest: "#D6F5FA",
    primary_dark: "#4FB7C9",
    primary_darkest: "#2B8A9B",
    on_primary: "#0B3A42",
    on_primary_light: "#0B3A42",
    on_primary_lightest: "#0B3A42",
    on_primary_dark: "#F2FCFE",
    on_primary_darkest: "#F2FCFE",
};

const BRONZE: GroupPalette = GroupPalette {
    primary: "#CD7F32",
    primary_light: "#E09C5B",
    primary_lightest: "#F4DFC8",
    primary_dark: "#A05E24",
    primary_darkest: "#6F3F16",
    on_primary: "#FFF8F0",
    on_primary_light: "#3D2410",
    on_primary_lightest: "#3D2410",
    on_primary_dark: "#FFF8F0",
    on_primary_darkest: "#FFF8F0",
};

const SILVER: GroupPalette = GroupPalette {
    primary: "#C0C0C0",
    primary_light: "#D6D6D6",
    primary_lightest: "#EFEFEF",
    primary_dark: "#9A9A9A",
    primary_darkest: "#6E6E6E",
    on_primary: "#202020",
    on_primary_light: "#202020",
    on_primary_lightest: "#202020",
    on_primary_dark: "#FAFAFA",
    on_primary_darkest: "#FAFAFA",
};

const GOLD: GroupPalette = GroupPalette {
    primary: "#D4AF37",
    primary_light: "#E3C65E",
    primary_lightest: "#F7ECC8",
    primary_dark: "#AA8C2C",
    primary_darkest: "#7A6420",
    on_primary: "#2E2508",
    on_primary_light: "#2E2508",
    on_primary_lightest: "#2E2508",
    on_primary_dark: "#FFFBEA",
    on_primary_darkest: "#FFFBEA",
};

const SAPPHIRE: GroupPalette = GroupPalette {
    primary: "#0F52BA",
    primary_light: "#3D74D1",
    primary_lightest: "#D3E0F7",
    primary_dark: "#0B3D8A",
    primary_darkest: "#072B61",
    on_primary: "#F3F7FF",
    on_primary_light: "#F3F7FF",
    on_primary_lightest: "#10294D",
    on_primary_dark: "#F3F7FF",
    on_primary_darkest: "#F3F7FF",
};

const DIAMOND: GroupPalette = GroupPalette {
    primary: "#B9F2FF",
    primary_light: "#D3F8FF",
    primary_lightest: "#ECFCFF",
    primary_dark: "#8CD9EC",
    primary_darkest: "#5FB3C9",
    on_primary: "#0A3740",
    on_primary_light: "#0A3740",
    on_primary_lightest: "#0A3740",
    on_primary_dark: "#0A3740",
    on_primary_darkest: "#F0FBFE",
};

const DIAMOND_PLUS: GroupPalette = GroupPalette {
    primary: "#8E6BE0",
    primary_light: "#AD93EA",
    primary_lightest: "#E4DBF8",
    primary_dark: "#6A48B8",
    primary_darkest: "#49307F",
    on_primary: "#F6F2FF",
    on_primary_light: "#231443",
    on_primary_lightest: "#231443",
    on_primary_dark: "#F6F2FF",
    on_primary_darkest: "#F6F2FF",
};

/// Returns the palette table for a group.
#[must_use]
pub const fn palette(group: ThemeGroup) -> &'static GroupPalette {
    match group {
        ThemeGroup::Crystal => &CRYSTAL,
        ThemeGroup::Bronze => &BRONZE,
        ThemeGroup::Silver => &SILVER,
        ThemeGroup::Gold => &GOLD,
        ThemeGroup::Sapphire => &SAPPHIRE,
        ThemeGroup::Diamond => &DIAMOND,
        ThemeGroup::DiamondPlus => &DIAMOND_PLUS,
    }
}

/// Resolves a shade for `group`, falling back to the group's `primary`
/// entry when `variant` is absent or unknown.
#[must_use]
pub fn get_color(group: ThemeGroup, variant: Option<&str>) -> &'static str {
    let palette = palette(group);
    variant
        .and_then(|name| palette.variant(name))
        .unwrap_or(palette.primary)
}

/// Resolves the contrast entry paired with a shade, falling back to
/// `onPrimary` when `variant` is absent or unknown.
#[must_use]
pub fn get_contrast_color(group: ThemeGroup, variant: Option<&str>) -> &'static str {
    let palette = palette(group);
    variant
        .and_then(|name| palette.contrast(name))
        .unwrap_or(palette.on_primary)
}

/// Checks whether `variant` names a shade within `group`'s palette.
#[must_use]
pub fn is_valid_variant(group: ThemeGroup, variant: &str) -> bool {
    palette(group).variant(variant).is_some()
}

/// Picks a readable content color for an arbitrary hex color by luminance.
///
/// Returns [`DEFAULT_CONTRAST`] when the input is not a six-digit hex color.
#[must_use]
pub fn auto_contrast(hex: &str) -> &'static str {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        return DEFAULT_CONTRAST;
    }
    let Ok(r) = u8::from_str_radix(&hex[0..2], 16) else {
        return DEFAULT_CONTRAST;
    };
    let Ok(g) = u8::from_str_radix(&hex[2..4], 16) else {
        return DEFAULT_CONTRAST;
    };
    let Ok(b) = u8::from_str_radix(&hex[4..6], 16) else {
        return DEFAULT_CONTRAST;
    };
    let luminance =
        (0.299 * f32::from(r) + 0.587 * f32::from(g) + 0.114 * f32::from(b)) / 255.0;
    if luminance > 0.5 {
        "#111111"
    } else {
        "#FFFFFF"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_lookup_is_total() {
        for group in ThemeGroup::ALL {
            for variant in [None, Some("primary"), Some("primaryDarkest"), Some("bogus")] {
                assert!(!get_color(*group, variant).is_empty());
                assert!(!get_contrast_color(*group, variant).is_empty());
            }
        }
    }

    #[test]
    fn unknown_variant_falls_back_to_primary() {
        assert_eq!(get_color(ThemeGroup::Gold, Some("goldLight")), GOLD.primary);
        assert_eq!(
            get_contrast_color(ThemeGroup::Gold, Some("goldLight")),
            GOLD.on_primary
        );
    }

    #[test]
    fn every_variant_name_resolves() {
        for group in ThemeGroup::ALL {
            for variant in VARIANTS {
                assert!(is_valid_variant(*group, variant));
            }
            assert!(!is_valid_variant(*group, "primaryMedium"));
        }
    }

    #[test]
    fn auto_contrast_tracks_luminance() {
        assert_eq!(auto_contrast("#FFFFFF"), "#111111");
        assert_eq!(auto_contrast("#0B3A42"), "#FFFFFF");
        assert_eq!(auto_contrast("not-a-color"), DEFAULT_CONTRAST);
    }

    #[test]
    fn contrast_pairs_differ_from_their_base() {
        for group in ThemeGroup::ALL {
            let palette = palette(*group);
            for variant in VARIANTS {
                assert_ne!(
                    palette.variant(variant).unwrap(),
                    palette.contrast(variant).unwrap()
                );
            }
        }
    }
}

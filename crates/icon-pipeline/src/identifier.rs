//! Lookup key, typed identifier, and category derivation from file stems.

use heck::{ToKebabCase, ToShoutySnakeCase};

/// Category assigned when a key has no second dash segment.
pub const FALLBACK_CATEGORY: &str = "other";

/// Derived names for one icon asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconIdentifier {
    /// Kebab-case lookup key, unique across the asset set.
    pub key: String,
    /// UpperCamelCase identifier, reversible back to the key.
    pub ident: String,
    /// Category token from the key's second dash segment.
    pub category: String,
}

impl IconIdentifier {
    /// Derives all three names from a source file stem.
    #[must_use]
    pub fn from_stem(stem: &str) -> Self {
        let key = stem.to_kebab_case();
        let ident = ident_from_key(&key);
        let category = key
            .split('-')
            .nth(1)
            .unwrap_or(FALLBACK_CATEGORY)
            .to_owned();
        Self {
            key,
            ident,
            category,
        }
    }

    /// Rust module name for the generated component file.
    #[must_use]
    pub fn module_name(&self) -> String {
        self.key.replace('-', "_")
    }

    /// Const name of the generated [`growthplan::IconDef`].
    #[must_use]
    pub fn const_name(&self) -> String {
        self.key.to_shouty_snake_case()
    }
}

/// Capitalizes each dash segment of a key, keeping segment boundaries
/// recoverable by [`key_from_ident`].
///
/// `heck`'s UpperCamelCase is not used here: it merges single-letter
/// segments into acronyms (`a-x` becomes `Ax` on the way back), which
/// breaks the key round trip.
fn ident_from_key(key: &str) -> String {
    key.split('-')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

/// Inverse of the ident derivation: every uppercase letter opens a new
/// kebab segment.
#[must_use]
pub fn key_from_ident(ident: &str) -> String {
    let mut key = String::with_capacity(ident.len() + 4);
    for ch in ident.chars() {
        if ch.is_ascii_uppercase() {
            if !key.is_empty() {
                key.push('-');
            }
            key.push(ch.to_ascii_lowercase());
        } else {
            key.push(ch);
        }
    }
    key
}

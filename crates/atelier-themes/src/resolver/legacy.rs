//! Legacy template-name compatibility table.
//!
//! Before themes had slugs, the persisted setting held one of a handful of
//! template names. Those names are translated here before the persisted
//! source checks whether the theme exists.

use std::collections::BTreeMap;

/// Names shipped with the platform and the slugs that replaced them.
pub const BUILTIN_LEGACY_NAMES: &[(&str, &str)] = &[
    ("default", "default"),
    ("standard", "default"),
    ("template1", "classic"),
    ("template2", "modern"),
    ("template3", "minimal"),
    ("classic", "classic"),
    ("modern", "modern"),
    ("minimal", "minimal"),
];

/// Legacy name -> current slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyNames {
    table: BTreeMap<String, String>,
}

impl Default for LegacyNames {
    fn default() -> Self {
        Self::builtin()
    }
}

impl LegacyNames {
    pub fn builtin() -> Self {
        Self {
            table: BUILTIN_LEGACY_NAMES
                .iter()
                .map(|(name, slug)| (name.to_string(), slug.to_string()))
                .collect(),
        }
    }

    /// The built-in table with `overrides` layered on top.
    pub fn with_overrides(overrides: &BTreeMap<String, String>) -> Self {
        let mut names = Self::builtin();
        for (name, slug) in overrides {
            names.table.insert(name.trim().to_ascii_lowercase(), slug.trim().to_string());
        }
        names
    }

    /// Current slug for `name`; names without an entry pass through.
    pub fn translate<'a>(&'a self, name: &'a str) -> &'a str {
        let name = name.trim();
        self.table
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
            .unwrap_or(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.table.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_names_translate() {
        let names = LegacyNames::builtin();
        assert_eq!(names.translate("template1"), "classic");
        assert_eq!(names.translate("TEMPLATE2"), "modern");
        assert_eq!(names.translate(" standard "), "default");
    }

    #[test]
    fn unknown_names_pass_through() {
        let names = LegacyNames::builtin();
        assert_eq!(names.translate("aurora"), "aurora");
        assert_eq!(names.translate(" aurora "), "aurora");
    }

    #[test]
    fn overrides_replace_and_extend() {
        let overrides = BTreeMap::from([
            ("template1".to_string(), "aurora".to_string()),
            ("Retro".to_string(), "noir".to_string()),
        ]);
        let names = LegacyNames::with_overrides(&overrides);
        assert_eq!(names.translate("template1"), "aurora");
        assert_eq!(names.translate("retro"), "noir");
        assert_eq!(names.translate("template2"), "modern");
    }
}

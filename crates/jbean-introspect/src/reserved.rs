//! Property names that never produce a descriptor.

use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Property names excluded unless configured otherwise.
pub const DEFAULT_RESERVED_NAMES: [&str; 2] = ["class", "metaClass"];

/// Always reserved, regardless of configuration.
const CLASS_PROPERTY: &str = "class";

static GLOBAL: OnceLock<ReservedNames> = OnceLock::new();

/// Property names that never produce a descriptor.
///
/// `"class"` is always part of the set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservedNames {
    names: BTreeSet<String>,
}

impl ReservedNames {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: BTreeSet<String> = names.into_iter().map(Into::into).collect();
        names.insert(CLASS_PROPERTY.to_string());
        Self { names }
    }

    /// The process-wide reserved set.
    ///
    /// Initialised on first use, either from [`ReservedNames::install_global`]
    /// or with [`DEFAULT_RESERVED_NAMES`]. Never changes afterwards.
    pub fn global() -> &'static ReservedNames {
        GLOBAL.get_or_init(ReservedNames::default)
    }

    /// Installs `self` as the process-wide set.
    ///
    /// Returns `self` back if the global set was already initialised.
    pub fn install_global(self) -> Result<(), ReservedNames> {
        GLOBAL.set(self)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }
}

impl Default for ReservedNames {
    fn default() -> Self {
        Self::new(DEFAULT_RESERVED_NAMES)
    }
}

//! Identifier space schema
//!
//! ```ron
//! (
//!     namespace: "book",
//!     permanent: [Live("MINOR_MAGIC"), Retired("TRANSFIGURATIONS"), Live("FEN")],
//!     generated: [(name: "RANDART_LEVEL")],
//!     aliases: [(name: "WAR_CHANTS", target: "FEN", retired: true)],
//! )
//! ```

use bestiary_core::{IdSpace, IdSpaceError, Ident};
use serde::{Deserialize, Serialize};

/// Whether retired ids are compiled into identifier spaces
///
/// Controlled by the `save-compat` feature. Turning it off closes the
/// compatibility window: retired slots disappear and later ordinals shift.
pub const INCLUDE_RETIRED: bool = cfg!(feature = "save-compat");

/// One slot before the generated boundary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IdLine {
    /// Content that ships
    Live(String),
    /// Removed content kept for old saves
    Retired(String),
}

impl IdLine {
    /// The symbolic name on this line
    pub fn name(&self) -> &str {
        match self {
            IdLine::Live(name) | IdLine::Retired(name) => name,
        }
    }
}

/// One slot after the generated boundary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedId {
    pub name: String,
    /// Permanent id whose record backs this one
    #[serde(default)]
    pub template: Option<String>,
}

/// A second name for an existing id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasDef {
    pub name: String,
    pub target: String,
    /// Dropped together with retired ids when the compatibility window closes
    #[serde(default)]
    pub retired: bool,
}

/// Declaration of one identifier space
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdSpaceDef {
    /// Namespace this file declares (`"monster"`, `"book"`)
    pub namespace: String,
    /// Hand-authored ids in ordinal order
    pub permanent: Vec<IdLine>,
    /// Generated/variant ids following the boundary
    #[serde(default)]
    pub generated: Vec<GeneratedId>,
    #[serde(default)]
    pub aliases: Vec<AliasDef>,
}

impl IdSpaceDef {
    /// Build the identifier space for this build's feature set
    pub fn build<I: Ident>(&self) -> Result<IdSpace<I>, IdSpaceError> {
        self.build_with(INCLUDE_RETIRED)
    }

    /// Build the identifier space, choosing explicitly whether retired ids stay
    pub fn build_with<I: Ident>(&self, include_retired: bool) -> Result<IdSpace<I>, IdSpaceError> {
        let mut builder = IdSpace::<I>::builder();
        for line in &self.permanent {
            builder = match line {
                IdLine::Live(name) => builder.permanent(name.as_str()),
                IdLine::Retired(name) if include_retired => builder.retired(name.as_str()),
                IdLine::Retired(_) => builder,
            };
        }
        builder = builder.boundary();
        for generated in &self.generated {
            builder = builder.generated(generated.name.as_str(), generated.template.as_deref());
        }
        for alias in &self.aliases {
            if alias.retired && !include_retired {
                continue;
            }
            builder = builder.alias(alias.name.as_str(), alias.target.as_str());
        }
        builder.build()
    }

    /// Names of the retired lines, whether or not this build keeps them
    pub fn retired_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.permanent.iter().filter_map(|line| match line {
            IdLine::Retired(name) => Some(name.as_str()),
            IdLine::Live(_) => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bestiary_core::BookId;

    const BOOKS: &str = r#"
    (
        namespace: "book",
        permanent: [
            Live("MINOR_MAGIC"),
            Live("CONJURATIONS"),
            Retired("TRANSFIGURATIONS"),
            Live("FEN"),
            Retired("MALEDICT"),
            Live("AIR"),
        ],
        generated: [
            (name: "RANDART_LEVEL"),
            (name: "RANDART_THEME"),
        ],
        aliases: [
            (name: "WAR_CHANTS", target: "FEN", retired: true),
        ],
    )
    "#;

    fn books() -> IdSpaceDef {
        ron::from_str(BOOKS).unwrap()
    }

    #[test]
    fn test_compat_build_keeps_tombstones() {
        let space: IdSpace<BookId> = books().build_with(true).unwrap();
        assert_eq!(space.len(), 8);
        assert_eq!(space.id_of("AIR"), Some(BookId(5)));
        assert!(space.is_tombstoned(BookId(2)));
        assert_eq!(space.id_of("WAR_CHANTS"), space.id_of("FEN"));
        assert_eq!(space.max_permanent_id(), BookId(5));
    }

    #[test]
    fn test_closed_window_drops_tombstones() {
        let space: IdSpace<BookId> = books().build_with(false).unwrap();
        assert_eq!(space.len(), 6);
        assert_eq!(space.id_of("FEN"), Some(BookId(2)));
        assert_eq!(space.id_of("TRANSFIGURATIONS"), None);
        assert_eq!(space.id_of("WAR_CHANTS"), None);
        assert_eq!(space.tombstones().count(), 0);
    }

    #[test]
    fn test_retired_names() {
        let names: Vec<_> = books().retired_names().map(str::to_string).collect();
        assert_eq!(names, vec!["TRANSFIGURATIONS", "MALEDICT"]);
    }
}

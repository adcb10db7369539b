//! Name records for chemicals, polymers and solvents.
//!
//! A name always travels with the search key derived from it. The search key
//! has no setter: it is computed by [`make_name_record`] and recomputed by
//! [`NameInput::rename`], so it cannot drift from the raw name.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::UNKNOWN_NAMING_CONVENTION;
use crate::error::CoreError;
use crate::search_name::make_name_searchable;

/// Which entity a name belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum NameKind {
    Chemical,
    Polymer,
    Solvent,
}

impl NameKind {
    pub const ALL: &'static [NameKind] = &[Self::Chemical, Self::Polymer, Self::Solvent];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Chemical => "chemical",
            Self::Polymer => "polymer",
            Self::Solvent => "solvent",
        }
    }

    /// Table holding names of this kind.
    #[must_use]
    pub const fn table(&self) -> &'static str {
        match self {
            Self::Chemical => "chemical_names",
            Self::Polymer => "polymer_names",
            Self::Solvent => "solvent_names",
        }
    }

    /// Foreign-key column pointing at the owning entity.
    #[must_use]
    pub const fn owner_column(&self) -> &'static str {
        match self {
            Self::Chemical => "chemical_id",
            Self::Polymer => "pol_id",
            Self::Solvent => "sol_id",
        }
    }

    /// Table of the owning entity.
    #[must_use]
    pub const fn owner_table(&self) -> &'static str {
        match self {
            Self::Chemical => "chemicals",
            Self::Polymer => "polymers",
            Self::Solvent => "solvents",
        }
    }
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NameKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "chemical" => Ok(Self::Chemical),
            "polymer" => Ok(Self::Polymer),
            "solvent" => Ok(Self::Solvent),
            other => Err(CoreError::InvalidTag {
                field: "name kind",
                value: other.to_owned(),
                expected: "chemical|polymer|solvent",
            }),
        }
    }
}

/// An unsaved name, ready to be written by a `NameStore`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameInput {
    owner_id: i64,
    name: String,
    search_name: String,
    naming_convention: Option<String>,
    notes: Option<String>,
}

/// Build a name record for `owner_id`, deriving its search key from `raw_name`.
#[must_use]
pub fn make_name_record(
    raw_name: impl Into<String>,
    owner_id: i64,
    naming_convention: Option<&str>,
) -> NameInput {
    let name = raw_name.into();
    let search_name = make_name_searchable(&name);
    NameInput {
        owner_id,
        name,
        search_name,
        naming_convention: naming_convention.map(ToOwned::to_owned),
        notes: None,
    }
}

impl NameInput {
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Same record with a new raw name and its recomputed search key.
    #[must_use]
    pub fn rename(self, raw_name: impl Into<String>) -> Self {
        let name = raw_name.into();
        let search_name = make_name_searchable(&name);
        Self { name, search_name, ..self }
    }

    #[must_use]
    pub const fn owner_id(&self) -> i64 {
        self.owner_id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn search_name(&self) -> &str {
        &self.search_name
    }

    #[must_use]
    pub fn naming_convention(&self) -> Option<&str> {
        self.naming_convention.as_deref()
    }

    /// Naming convention, falling back to `"unknown"`.
    #[must_use]
    pub fn naming_convention_or_unknown(&self) -> &str {
        self.naming_convention.as_deref().unwrap_or(UNKNOWN_NAMING_CONVENTION)
    }

    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
}

/// A stored name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRecord {
    pub id: i64,
    pub kind: NameKind,
    pub owner_id: i64,
    pub name: String,
    pub search_name: String,
    pub naming_convention: Option<String>,
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_derives_search_name() {
        let record = make_name_record("Methanol (HPLC grade)", 7, Some("common"));
        assert_eq!(record.owner_id(), 7);
        assert_eq!(record.name(), "Methanol (HPLC grade)");
        assert_eq!(record.search_name(), make_name_searchable("Methanol (HPLC grade)"));
        assert_eq!(record.naming_convention(), Some("common"));
        assert_eq!(record.notes(), None);
    }

    #[test]
    fn rename_recomputes_search_name() {
        let record = make_name_record("Methanol", 1, Some("common")).with_notes("lab stock");
        let renamed = record.rename("Methyl Alcohol");
        assert_eq!(renamed.name(), "Methyl Alcohol");
        assert_eq!(renamed.search_name(), "methylalcohol");
        assert_eq!(renamed.notes(), Some("lab stock"));
        assert_eq!(renamed.naming_convention(), Some("common"));
    }

    #[test]
    fn empty_name_is_accepted() {
        let record = make_name_record("", 3, None);
        assert_eq!(record.search_name(), "");
        assert_eq!(record.naming_convention_or_unknown(), "unknown");
    }

    #[test]
    fn name_kind_round_trips_through_str() {
        for kind in NameKind::ALL {
            assert_eq!(kind.as_str().parse::<NameKind>().unwrap(), *kind);
        }
        assert!("monomer".parse::<NameKind>().is_err());
    }

    #[test]
    fn name_kind_maps_to_tables() {
        assert_eq!(NameKind::Polymer.table(), "polymer_names");
        assert_eq!(NameKind::Polymer.owner_column(), "pol_id");
        assert_eq!(NameKind::Solvent.owner_table(), "solvents");
        assert_eq!(NameKind::Chemical.owner_column(), "chemical_id");
    }
}

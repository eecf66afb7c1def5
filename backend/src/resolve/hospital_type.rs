//! Hospital type resolution

use crate::models::HospitalType;
use crate::tables::AliasTable;

/// Maps free-text ownership labels to a [`HospitalType`]
#[derive(Debug, Clone, Copy)]
pub struct HospitalTypeResolver<'a> {
    aliases: &'a AliasTable,
}

impl<'a> HospitalTypeResolver<'a> {
    pub fn new(aliases: &'a AliasTable) -> Self {
        Self { aliases }
    }

    /// Absent or unrecognised labels resolve to [`HospitalType::Unknown`]
    pub fn resolve(&self, label: Option<&str>) -> HospitalType {
        label
            .and_then(|l| self.aliases.exact(&l.trim().to_lowercase()))
            .map(HospitalType::from_canonical)
            .unwrap_or(HospitalType::Unknown)
    }
}

//! City resolution

use crate::tables::AliasTable;

/// Case-insensitive exact city comparison, ignoring surrounding whitespace
pub fn same_city(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

/// Maps city spellings to the canonical names used by the city factor table
#[derive(Debug, Clone, Copy)]
pub struct CityResolver<'a> {
    aliases: &'a AliasTable,
}

impl<'a> CityResolver<'a> {
    pub fn new(aliases: &'a AliasTable) -> Self {
        Self { aliases }
    }

    /// Canonical city name, or `None` when the spelling is unknown
    ///
    /// # Example
    /// ```
    /// use medcost_core::resolve::CityResolver;
    /// use medcost_core::tables::AliasTables;
    ///
    /// let cities = CityResolver::new(&AliasTables::builtin().city);
    /// assert_eq!(cities.resolve(" Bombay"), Some("Mumbai"));
    /// assert_eq!(cities.resolve("Pune"), None);
    /// ```
    pub fn resolve(&self, city: &str) -> Option<&'a str> {
        self.aliases.exact(&city.trim().to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_city_is_exact_not_substring() {
        assert!(same_city("Ahmedabad", "AHMEDABAD"));
        assert!(same_city(" mumbai", "Mumbai "));
        assert!(!same_city("New Delhi", "Delhi"));
    }
}

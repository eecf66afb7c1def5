//! Government and insurance scheme links

use crate::models::{AcceptedScheme, SchemeLink};
use crate::tables::AliasTable;

/// Looks up official URLs for scheme names
#[derive(Debug, Clone, Copy)]
pub struct SchemeDirectory<'a> {
    urls: &'a AliasTable,
}

impl<'a> SchemeDirectory<'a> {
    pub fn new(urls: &'a AliasTable) -> Self {
        Self { urls }
    }

    /// Official URL for a scheme name, matched exactly after trimming and
    /// lower-casing
    ///
    /// # Example
    /// ```
    /// use medcost_core::resolve::SchemeDirectory;
    /// use medcost_core::tables::AliasTables;
    ///
    /// let schemes = SchemeDirectory::new(&AliasTables::builtin().scheme_url);
    /// assert_eq!(schemes.url(" CGHS "), Some("https://cghs.gov.in"));
    /// assert_eq!(schemes.url("Unknown Mediclaim"), None);
    /// ```
    pub fn url(&self, scheme_name: &str) -> Option<&'a str> {
        let key = scheme_name.trim().to_lowercase();
        if key.is_empty() {
            return None;
        }
        self.urls.exact(&key)
    }

    pub fn link(&self, scheme: &AcceptedScheme) -> SchemeLink {
        SchemeLink {
            name: scheme.scheme_name.clone(),
            url: self.url(&scheme.scheme_name).map(str::to_string),
        }
    }
}

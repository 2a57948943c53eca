use crate::errors::ViewportError;

/// A remote map style, identified by its fetch URL without the trailing key.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleEntry {
    pub name: String,
    pub url_template: String,
}

impl StyleEntry {
    pub fn new(name: &str, url_template: &str) -> Self {
        Self {
            name: name.to_string(),
            url_template: url_template.to_string(),
        }
    }
}

/// Ordered, immutable list of styles. Insertion order is the cycle order.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleCatalog {
    entries: Vec<StyleEntry>,
}

impl StyleCatalog {
    /// Builds a catalog from `entries`.
    ///
    /// # Errors
    /// - `ViewportError::EmptyCatalog` if `entries` is empty, so that cycling never
    ///   has to deal with a catalog without styles.
    pub fn new(entries: Vec<StyleEntry>) -> Result<Self, ViewportError> {
        if entries.is_empty() {
            return Err(ViewportError::EmptyCatalog);
        }
        Ok(Self { entries })
    }

    /// The MapTiler styles shown by the viewer.
    pub fn maptiler() -> Self {
        let entries = [
            ("Streets", "streets"),
            ("Basic", "basic-v2"),
            ("Bright", "bright-v2"),
            ("Outdoor", "outdoor-v2"),
            ("Satellite", "hybrid"),
            ("Topo", "topo-v2"),
            ("Winter", "winter-v2"),
        ]
        .iter()
        .map(|(name, slug)| {
            StyleEntry::new(
                name,
                &format!("https://api.maptiler.com/maps/{}/style.json?key=", slug),
            )
        })
        .collect();

        Self { entries }
    }

    /// Entry at `index mod len`. Never fails since the catalog is non-empty.
    pub(crate) fn entry_wrapping(&self, index: usize) -> &StyleEntry {
        &self.entries[index % self.entries.len()]
    }

    pub fn get(&self, index: usize) -> Option<&StyleEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false` for a catalog built through `new` or `maptiler`.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StyleEntry> {
        self.entries.iter()
    }
}

impl Default for StyleCatalog {
    fn default() -> Self {
        Self::maptiler()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maptiler_catalog_order() {
        let catalog = StyleCatalog::maptiler();
        let names: Vec<&str> = catalog.iter().map(|e| e.name.as_str()).collect();

        assert_eq!(
            names,
            vec!["Streets", "Basic", "Bright", "Outdoor", "Satellite", "Topo", "Winter"]
        );
    }

    #[test]
    fn test_templates_end_without_key() {
        for entry in StyleCatalog::maptiler().iter() {
            assert!(
                entry.url_template.ends_with("?key="),
                "Template for {} should end with the key parameter, got {}",
                entry.name,
                entry.url_template
            );
        }
    }

    #[test]
    fn test_empty_catalog_is_rejected() {
        assert_eq!(StyleCatalog::new(vec![]), Err(ViewportError::EmptyCatalog));
    }

    #[test]
    fn test_get_out_of_range() {
        let catalog = StyleCatalog::new(vec![StyleEntry::new("Only", "https://a/?key=")]).unwrap();
        assert!(catalog.get(0).is_some());
        assert!(catalog.get(1).is_none());
    }
}

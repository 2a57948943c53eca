use crate::style::{StyleCatalog, StyleEntry};

/// Walks a [`StyleCatalog`] one entry at a time, wrapping from the last entry
/// back to the first.
///
/// The cycler starts with no selection; the first call to [`StyleCycler::advance`]
/// selects entry `0`.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleCycler {
    catalog: StyleCatalog,
    current: Option<usize>,
}

impl StyleCycler {
    pub fn new(catalog: StyleCatalog) -> Self {
        Self {
            catalog,
            current: None,
        }
    }

    /// Moves to the next style and returns it.
    ///
    /// The index becomes `(current + 1) mod len`, where "no selection" counts as `-1`.
    pub fn advance(&mut self) -> &StyleEntry {
        let next = match self.current {
            Some(index) => (index + 1) % self.catalog.len(),
            None => 0,
        };
        self.current = Some(next);
        self.catalog.entry_wrapping(next)
    }

    pub fn current(&self) -> Option<&StyleEntry> {
        self.current.and_then(|index| self.catalog.get(index))
    }

    /// The selected index, or `-1` before the first advance.
    pub fn current_index(&self) -> i64 {
        self.current.map(|index| index as i64).unwrap_or(-1)
    }

    pub fn catalog(&self) -> &StyleCatalog {
        &self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_of(n: usize) -> StyleCatalog {
        let entries = (0..n)
            .map(|i| StyleEntry::new(&format!("style-{}", i), &format!("https://styles/{}?key=", i)))
            .collect();
        StyleCatalog::new(entries).unwrap()
    }

    #[test]
    fn test_starts_without_selection() {
        let cycler = StyleCycler::new(catalog_of(3));
        assert_eq!(cycler.current_index(), -1);
        assert!(cycler.current().is_none());
    }

    #[test]
    fn test_seven_styles_wrap_on_eighth_advance() {
        let mut cycler = StyleCycler::new(catalog_of(7));

        assert_eq!(cycler.advance().name, "style-0");
        for _ in 0..5 {
            cycler.advance();
        }
        assert_eq!(cycler.advance().name, "style-6");
        assert_eq!(cycler.advance().name, "style-0");
        assert_eq!(cycler.current_index(), 0);
    }

    #[test]
    fn test_index_sequence_never_skips() {
        let mut cycler = StyleCycler::new(catalog_of(4));
        let mut previous = cycler.current_index();

        for _ in 0..20 {
            cycler.advance();
            let expected = (previous + 1).rem_euclid(4);
            assert_eq!(cycler.current_index(), expected);
            previous = cycler.current_index();
        }
    }

    #[test]
    fn test_single_entry_catalog_stays_on_it() {
        let mut cycler = StyleCycler::new(catalog_of(1));
        assert_eq!(cycler.advance().name, "style-0");
        assert_eq!(cycler.advance().name, "style-0");
    }
}

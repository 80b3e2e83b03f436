//! Text filters over the master collection.

use crate::model::Product;

/// Which column a filter box applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Name,
    Category,
}

/// How the two filter boxes combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// Only the most recently edited filter is applied; the other box's text is
    /// kept but ignored until it is edited again.
    #[default]
    Latest,
    /// Both non-empty filters must match.
    Intersect,
}

/// Current contents of the two filter boxes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub name: String,
    pub category: String,
}

impl FilterState {
    pub fn set(&mut self, kind: FilterKind, text: impl Into<String>) {
        match kind {
            FilterKind::Name => self.name = text.into(),
            FilterKind::Category => self.category = text.into(),
        }
    }

    pub fn text(&self, kind: FilterKind) -> &str {
        match kind {
            FilterKind::Name => &self.name,
            FilterKind::Category => &self.category,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.category.is_empty()
    }
}

/// Case-insensitive substring match of `needle` against the `kind` column.
pub fn matches(product: &Product, kind: FilterKind, needle: &str) -> bool {
    let haystack = match kind {
        FilterKind::Name => &product.name,
        FilterKind::Category => &product.category,
    };
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Derives the display collection after the `changed` filter box was edited.
///
/// Always starts from `master`, never from the previous display collection.
/// When both boxes are empty the result is `master` itself, in master order.
pub fn derive(
    master: &[Product],
    filters: &FilterState,
    changed: FilterKind,
    mode: FilterMode,
) -> Vec<Product> {
    if filters.is_empty() {
        return master.to_vec();
    }

    match mode {
        FilterMode::Latest => {
            let needle = filters.text(changed);
            master
                .iter()
                .filter(|p| matches(p, changed, needle))
                .cloned()
                .collect()
        }
        FilterMode::Intersect => master
            .iter()
            .filter(|p| {
                [FilterKind::Name, FilterKind::Category]
                    .into_iter()
                    .all(|kind| matches(p, kind, filters.text(kind)))
            })
            .cloned()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Product> {
        vec![
            Product::new(1, "Claw Hammer", "Tools", 12.0, 4),
            Product::new(2, "Sledgehammer", "Demolition", 45.0, 2),
            Product::new(3, "Screwdriver", "TOOLS", 6.5, 30),
            Product::new(4, "Apple", "Food", 0.4, 100),
        ]
    }

    fn ids(products: &[Product]) -> Vec<i64> {
        products.iter().map(|p| p.id.0).collect()
    }

    #[test]
    fn test_name_filter_is_case_insensitive_substring() {
        let mut filters = FilterState::default();
        filters.set(FilterKind::Name, "HAMMER");

        let out = derive(&catalog(), &filters, FilterKind::Name, FilterMode::Latest);
        assert_eq!(ids(&out), vec![1, 2]);
    }

    #[test]
    fn test_latest_mode_ignores_other_filter() {
        let mut filters = FilterState::default();
        filters.set(FilterKind::Category, "tools");
        filters.set(FilterKind::Name, "hammer");

        // Category "tools" would exclude the sledgehammer, but only the name box counts.
        let out = derive(&catalog(), &filters, FilterKind::Name, FilterMode::Latest);
        assert_eq!(ids(&out), vec![1, 2]);

        let out = derive(&catalog(), &filters, FilterKind::Category, FilterMode::Latest);
        assert_eq!(ids(&out), vec![1, 3]);
    }

    #[test]
    fn test_intersect_mode_applies_both() {
        let mut filters = FilterState::default();
        filters.set(FilterKind::Category, "tools");
        filters.set(FilterKind::Name, "hammer");

        let out = derive(&catalog(), &filters, FilterKind::Name, FilterMode::Intersect);
        assert_eq!(ids(&out), vec![1]);
    }

    #[test]
    fn test_empty_filters_restore_master_order() {
        let filters = FilterState::default();
        for mode in [FilterMode::Latest, FilterMode::Intersect] {
            let out = derive(&catalog(), &filters, FilterKind::Category, mode);
            assert_eq!(out, catalog());
        }
    }

    #[test]
    fn test_clearing_latest_box_while_other_is_set_shows_everything() {
        let mut filters = FilterState::default();
        filters.set(FilterKind::Category, "food");
        filters.set(FilterKind::Name, "");

        // The empty needle matches every row.
        let out = derive(&catalog(), &filters, FilterKind::Name, FilterMode::Latest);
        assert_eq!(ids(&out), vec![1, 2, 3, 4]);
    }
}

//! Catalog filtering and sorting for the shop page

use super::models::Artwork;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::cmp::Reverse;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Most recently added first (highest id)
    #[default]
    Newest,
    PriceLowHigh,
    PriceHighLow,
}

/// Shop page filters. Missing values and `"all"` disable a filter.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CatalogQuery {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub color: Option<String>,
    pub theme: Option<String>,
    pub availability: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub sort: SortOrder,
}

impl CatalogQuery {
    pub fn matches(&self, artwork: &Artwork) -> bool {
        let price = artwork.effective_price();

        field_matches(&self.kind, artwork.kind.label())
            && field_matches(&self.color, &artwork.primary_color)
            && field_matches(&self.theme, &artwork.theme)
            && field_matches(&self.availability, artwork.availability.label())
            && self.min_price.map_or(true, |min| price >= min)
            && self.max_price.map_or(true, |max| price <= max)
    }

    /// Keeps the matching artworks, ordered by `sort`.
    pub fn apply(&self, artworks: Vec<Artwork>) -> Vec<Artwork> {
        let mut matched: Vec<Artwork> = artworks.into_iter().filter(|a| self.matches(a)).collect();

        match self.sort {
            SortOrder::Newest => matched.sort_by_key(|a| Reverse(a.id)),
            // Equal prices fall back to newest first.
            SortOrder::PriceLowHigh => {
                matched.sort_by_key(|a| (a.effective_price(), Reverse(a.id)))
            }
            SortOrder::PriceHighLow => {
                matched.sort_by_key(|a| (Reverse(a.effective_price()), Reverse(a.id)))
            }
        }

        matched
    }
}

fn field_matches(filter: &Option<String>, value: &str) -> bool {
    match filter.as_deref().map(str::trim) {
        None | Some("") => true,
        Some(f) if f.eq_ignore_ascii_case("all") => true,
        Some(f) => f.eq_ignore_ascii_case(value),
    }
}

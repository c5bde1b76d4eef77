//! Built-in gallery used when no catalog file is configured

use super::models::{Artwork, ArtworkId, ArtworkKind, Availability};
use rust_decimal::Decimal;

struct SeedArtwork {
    id: ArtworkId,
    title: &'static str,
    statement: &'static str,
    dimensions: &'static str,
    medium: &'static str,
    price_cents: i64,
    discount: Option<i64>,
    availability: Availability,
    kind: ArtworkKind,
    color: &'static str,
    theme: &'static str,
}

const GALLERY: &[SeedArtwork] = &[
    SeedArtwork {
        id: 1,
        title: "Ocean Mandala",
        statement: "Concentric waves drawn from a morning on the coast.",
        dimensions: "24 x 24 in",
        medium: "Acrylic on canvas",
        price_cents: 45000,
        discount: None,
        availability: Availability::Available,
        kind: ArtworkKind::Original,
        color: "Blue",
        theme: "Nature",
    },
    SeedArtwork {
        id: 2,
        title: "Golden Sun",
        statement: "Gold leaf radiating from a hand-painted centre.",
        dimensions: "30 x 30 in",
        medium: "Acrylic and gold leaf on canvas",
        price_cents: 62000,
        discount: Some(10),
        availability: Availability::Available,
        kind: ArtworkKind::Original,
        color: "Yellow",
        theme: "Spiritual",
    },
    SeedArtwork {
        id: 3,
        title: "Crimson Lotus",
        statement: "A lotus unfolding in layered reds.",
        dimensions: "20 x 20 in",
        medium: "Ink on paper",
        price_cents: 38000,
        discount: None,
        availability: Availability::Sold,
        kind: ArtworkKind::Original,
        color: "Red",
        theme: "Floral",
    },
    SeedArtwork {
        id: 4,
        title: "Ocean Mandala (Print)",
        statement: "Giclee reproduction of Ocean Mandala.",
        dimensions: "16 x 16 in",
        medium: "Giclee print on archival paper",
        price_cents: 6500,
        discount: None,
        availability: Availability::Available,
        kind: ArtworkKind::Print,
        color: "Blue",
        theme: "Nature",
    },
    SeedArtwork {
        id: 5,
        title: "Forest Whisper",
        statement: "Greens and ochres traced from a walk under old pines.",
        dimensions: "36 x 24 in",
        medium: "Oil on canvas",
        price_cents: 78000,
        discount: Some(15),
        availability: Availability::Reserved,
        kind: ArtworkKind::Original,
        color: "Green",
        theme: "Nature",
    },
    SeedArtwork {
        id: 6,
        title: "Violet Night",
        statement: "Star geometry over a deep violet ground.",
        dimensions: "12 x 12 in",
        medium: "Giclee print on archival paper",
        price_cents: 4500,
        discount: Some(20),
        availability: Availability::Available,
        kind: ArtworkKind::Print,
        color: "Purple",
        theme: "Abstract",
    },
];

pub fn artworks() -> Vec<Artwork> {
    GALLERY
        .iter()
        .map(|s| Artwork {
            id: s.id,
            title: s.title.to_string(),
            artist_statement: s.statement.to_string(),
            dimensions: s.dimensions.to_string(),
            medium: s.medium.to_string(),
            price: Decimal::new(s.price_cents, 2),
            discount_percentage: s.discount.map(Decimal::from),
            availability: s.availability,
            kind: s.kind,
            primary_color: s.color.to_string(),
            theme: s.theme.to_string(),
            image_url: format!("https://picsum.photos/seed/art{}/600/600", s.id),
            images: (1..=3)
                .map(|n| format!("https://picsum.photos/seed/art{}-{}/1200/1200", s.id, n))
                .collect(),
        })
        .collect()
}

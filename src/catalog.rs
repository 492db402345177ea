use log::{error, info};
use serde::Deserialize;
use std::fmt;
use thiserror::Error;

const GALLERY_JSON: &str = include_str!("../data/gallery.json");
const SERVICES_JSON: &str = include_str!("../data/services.json");
const REVIEWS_JSON: &str = include_str!("../data/reviews.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse {collection} catalog: {source}")]
    Parse {
        collection: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct MediaId(pub String);

impl MediaId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for MediaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    AwardWinners,
    Collision,
    Paint,
    Aluminum,
    Restoration,
    Facility,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::AwardWinners,
        Category::Collision,
        Category::Paint,
        Category::Aluminum,
        Category::Restoration,
        Category::Facility,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            Category::AwardWinners => "award-winners",
            Category::Collision => "collision",
            Category::Paint => "paint",
            Category::Aluminum => "aluminum",
            Category::Restoration => "restoration",
            Category::Facility => "facility",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::AwardWinners => "Award Winners",
            Category::Collision => "Collision Repair",
            Category::Paint => "Paint",
            Category::Aluminum => "Aluminum",
            Category::Restoration => "Restoration",
            Category::Facility => "Our Facility",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.tag() == tag)
    }
}

/// One gallery image. Catalog order is significant: it drives the featured
/// tile and lightbox sequencing.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MediaItem {
    pub id: MediaId,
    pub category: Category,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "src")]
    pub image: String,
}

/// A before/after pair shown in the comparison slider.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Comparison {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub before: String,
    pub after: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceIcon {
    Collision,
    Paint,
    Aluminum,
    Frame,
    Glass,
    Detail,
    #[default]
    #[serde(other)]
    Generic,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Service {
    pub id: String,
    pub title: String,
    #[serde(rename = "shortDesc", default)]
    pub short_description: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub icon: ServiceIcon,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Review {
    pub id: u32,
    pub rating: u8,
    pub text: String,
    pub author: String,
    #[serde(default)]
    pub vehicle: String,
}

impl Review {
    /// Number of filled stars, always within 1..=5.
    pub fn stars(&self) -> u8 {
        self.rating.clamp(1, 5)
    }
}

#[derive(Deserialize)]
struct GalleryFile {
    #[serde(default)]
    images: Vec<MediaItem>,
    #[serde(default)]
    comparisons: Vec<Comparison>,
}

/// Read-only content for every page, loaded once at startup.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    pub media: Vec<MediaItem>,
    pub comparisons: Vec<Comparison>,
    pub services: Vec<Service>,
    pub reviews: Vec<Review>,
}

impl Catalog {
    pub fn from_json(gallery: &str, services: &str, reviews: &str) -> Result<Self, CatalogError> {
        let gallery: GalleryFile = serde_json::from_str(gallery)
            .map_err(|source| CatalogError::Parse { collection: "gallery", source })?;
        let services = serde_json::from_str(services)
            .map_err(|source| CatalogError::Parse { collection: "services", source })?;
        let reviews = serde_json::from_str(reviews)
            .map_err(|source| CatalogError::Parse { collection: "reviews", source })?;

        Ok(Self {
            media: gallery.images,
            comparisons: gallery.comparisons,
            services,
            reviews,
        })
    }

    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(GALLERY_JSON, SERVICES_JSON, REVIEWS_JSON)
    }

    /// Loads the embedded catalog, falling back to an empty one so every page
    /// still renders its empty state.
    pub fn load() -> Self {
        match Self::embedded() {
            Ok(catalog) => {
                info!(
                    "Loaded catalog: {} images, {} services, {} reviews",
                    catalog.media.len(),
                    catalog.services.len(),
                    catalog.reviews.len()
                );
                catalog
            }
            Err(e) => {
                error!("{}", e);
                Self::default()
            }
        }
    }

    pub fn featured_media(&self, count: usize) -> &[MediaItem] {
        &self.media[..count.min(self.media.len())]
    }

    pub fn find_media(&self, id: &MediaId) -> Option<&MediaItem> {
        self.media.iter().find(|item| &item.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalog_parses() {
        let catalog = Catalog::embedded().expect("embedded catalog should parse");
        assert!(!catalog.media.is_empty());
        assert!(!catalog.services.is_empty());
        assert!(!catalog.reviews.is_empty());
    }

    #[test]
    fn test_embedded_media_ids_are_unique() {
        let catalog = Catalog::embedded().unwrap();
        let mut ids: Vec<_> = catalog.media.iter().map(|m| m.id.0.clone()).collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn test_missing_optional_fields_default_to_empty() {
        let gallery = r#"{"images":[{"id":"a","category":"paint","title":"Hood","src":"/a.jpg"}]}"#;
        let services = r#"[{"id":"s","title":"Paint"}]"#;
        let reviews = r#"[{"id":1,"rating":5,"text":"Great","author":"Ann"}]"#;

        let catalog = Catalog::from_json(gallery, services, reviews).unwrap();
        assert_eq!(catalog.media[0].description, "");
        assert!(catalog.comparisons.is_empty());
        assert_eq!(catalog.services[0].short_description, "");
        assert!(catalog.services[0].features.is_empty());
        assert_eq!(catalog.services[0].icon, ServiceIcon::Generic);
        assert_eq!(catalog.reviews[0].vehicle, "");
    }

    #[test]
    fn test_parse_error_names_collection() {
        let err = Catalog::from_json("{}", "not json", "[]").unwrap_err();
        assert!(err.to_string().contains("services"));
    }

    #[test]
    fn test_category_tags_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_tag(category.tag()), Some(category));
        }
        assert_eq!(Category::from_tag("all"), None);
    }

    #[test]
    fn test_review_stars_are_clamped() {
        let mut review = Review {
            id: 1,
            rating: 9,
            text: String::new(),
            author: String::new(),
            vehicle: String::new(),
        };
        assert_eq!(review.stars(), 5);
        review.rating = 0;
        assert_eq!(review.stars(), 1);
    }

    #[test]
    fn test_featured_media_is_bounded() {
        let catalog = Catalog::default();
        assert!(catalog.featured_media(6).is_empty());
    }
}

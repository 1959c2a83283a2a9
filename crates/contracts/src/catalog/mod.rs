//! Catalog document model.
//!
//! Mirrors the `products.json` shape consumed by the frontend. Every
//! sequence defaults to empty so a document with absent fields still
//! deserializes; unknown fields written by other tools are ignored.

use serde::{Deserialize, Serialize};

// ============================================================================
// Document root
// ============================================================================

/// Top-level catalog document: `{ "brands": [...] }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub brands: Vec<Brand>,
}

impl Catalog {
    /// Look up a brand by identifier.
    pub fn brand(&self, id: &str) -> Option<&Brand> {
        self.brands.iter().find(|b| b.id == id)
    }
}

// ============================================================================
// Brand
// ============================================================================

/// Top-level catalog grouping with its own description and categories.
///
/// `description` is rich text inserted verbatim as markup; the document
/// author is responsible for its content.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Brand {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl Brand {
    /// True when at least one category carries an active product. Brands
    /// failing this never produce any output.
    pub fn has_active_products(&self) -> bool {
        self.categories.iter().any(Category::has_active_products)
    }

    /// Categories that get a selector entry and a grid, in document order.
    pub fn active_categories(&self) -> impl Iterator<Item = &Category> {
        self.categories
            .iter()
            .filter(|c| c.has_active_products())
    }

    /// The category selected by default when this brand is clicked.
    pub fn first_active_category(&self) -> Option<&Category> {
        self.active_categories().next()
    }
}

// ============================================================================
// Category
// ============================================================================

/// Grouping of products within a brand, shown as a selectable filter.
/// `id` is unique within its brand.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub products: Vec<Product>,
}

impl Category {
    pub fn has_active_products(&self) -> bool {
        self.products.iter().any(|p| p.active)
    }

    /// Products that render a card, in document order. Inactive products
    /// are invisible to the UI entirely, not soft-hidden.
    pub fn active_products(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.active)
    }
}

// ============================================================================
// Product
// ============================================================================

/// A single catalog entry. `image` is either a full URL, a path already
/// under the static prefix, or a bare filename.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub active: bool,
}

impl Product {
    /// Description for display. Absent and empty descriptions are both
    /// treated as "no description", and the card omits the paragraph.
    pub fn description_text(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }
}

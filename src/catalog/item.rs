//! Catalog items and the property-driven list builder.

use serde::Serialize;

use crate::catalog::{Category, PropertySource};

/// Number of items on one catalog page.
pub const PAGE_SIZE: usize = 9;

/// One catalog card: an image and a description, either of which may be
/// missing from the catalog.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Item {
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
    #[serde(rename = "itemDescription")]
    pub description: Option<String>,
}

impl Item {
    pub fn new(image_url: Option<String>, description: Option<String>) -> Self {
        Self { image_url, description }
    }
}

/// Property key holding the image URL of item `index` in `category`.
pub fn image_url_key(category: Category, index: usize) -> String {
    format!("{}.item{index}ImageUrl", category.key_prefix())
}

/// Property key holding the description of item `index` in `category`.
pub fn description_key(category: Category, index: usize) -> String {
    format!("{}.item{index}Description", category.key_prefix())
}

/// Builds `page_size` items for `category`, in index order.
///
/// Item `i` reads `"{prefix}.item{i}ImageUrl"` and
/// `"{prefix}.item{i}Description"`. A missing property leaves the field
/// empty; the list always has exactly `page_size` entries.
pub fn build_item_list<P>(category: Category, source: &P, page_size: usize) -> Vec<Item>
where
    P: PropertySource + ?Sized,
{
    (0..page_size)
        .map(|i| {
            Item::new(
                source.property(&image_url_key(category, i)).map(str::to_owned),
                source.property(&description_key(category, i)).map(str::to_owned),
            )
        })
        .collect()
}

/// One page of [`PAGE_SIZE`] items for `category`.
///
/// Always starts at the first item; repeated calls return the same page.
pub fn page<P>(category: Category, source: &P) -> Vec<Item>
where
    P: PropertySource + ?Sized,
{
    build_item_list(category, source, PAGE_SIZE)
}

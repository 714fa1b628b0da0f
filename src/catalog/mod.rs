//! Catalog domain: categories, items, and the property source they are read
//! from.

mod category;
mod item;
mod properties;

pub use category::Category;
pub use item::{build_item_list, description_key, image_url_key, page, Item, PAGE_SIZE};
pub use properties::{Properties, PropertySource};

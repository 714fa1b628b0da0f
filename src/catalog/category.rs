//! The four fixed catalog partitions.

use std::fmt;

/// A catalog category.
///
/// The variant says *what* the category is. How it is spelled inside a
/// property key is a separate concern, see [`Category::key_prefix`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Category {
    All,
    Jewelry,
    Shoes,
    Clothing,
}

impl Category {
    /// Every category, in navigation order.
    pub const ALL: [Category; 4] = [Self::All, Self::Jewelry, Self::Shoes, Self::Clothing];

    /// Prefix used to synthesise property keys (`"{prefix}.item{i}ImageUrl"`).
    ///
    /// Catalog files depend on these exact strings.
    pub fn key_prefix(self) -> &'static str {
        match self {
            Self::All      => "all",
            Self::Jewelry  => "jewelry",
            Self::Shoes    => "shoes",
            Self::Clothing => "clothing",
        }
    }

    /// Human-readable page title.
    pub fn page_title(self) -> &'static str {
        match self {
            Self::All      => "All",
            Self::Jewelry  => "Jewelry",
            Self::Shoes    => "Shoes",
            Self::Clothing => "Clothing",
        }
    }

    /// Route serving the category page.
    pub fn route(self) -> &'static str {
        match self {
            Self::All      => "/",
            Self::Jewelry  => "/jewelry",
            Self::Shoes    => "/shoes",
            Self::Clothing => "/clothing",
        }
    }

    /// Name of the fragment view rendering this category's item grid.
    pub fn fragment_view(self) -> &'static str {
        self.key_prefix()
    }

    /// Template identifier the full-page shell embeds (`"all.html"`, ...).
    pub fn fragment_template(self) -> String {
        format!("{}.html", self.fragment_view())
    }

    /// Resolves the `{cardtype}` segment of `/cards/{cardtype}`.
    ///
    /// Matching is exact and case-sensitive. Anything unrecognised falls back
    /// to [`Category::Shoes`]; clients rely on that fallback.
    pub fn from_card_type(card_type: &str) -> Self {
        match card_type {
            "all"      => Self::All,
            "clothing" => Self::Clothing,
            "jewelry"  => Self::Jewelry,
            _          => Self::Shoes,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key_prefix())
    }
}

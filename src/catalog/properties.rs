//! Read-only property source backing the catalog.
//!
//! The catalog file is TOML. Dotted keys flatten back into the flat property
//! keys the item builder asks for:
//!
//! ```toml
//! jewelry.item0ImageUrl    = "https://cdn.example.com/ring.png"
//! jewelry.item0Description = "Silver ring"
//! ```
//!
//! is looked up as `"jewelry.item0ImageUrl"` and `"jewelry.item0Description"`.

use std::collections::HashMap;
use std::path::Path;

use tracing::{info, warn};

use crate::error::Error;

/// A key → string lookup.
pub trait PropertySource {
    /// Returns the value stored under `key`, if any.
    fn property(&self, key: &str) -> Option<&str>;
}

/// Immutable property map, loaded once at start-up.
#[derive(Clone, Debug, Default)]
pub struct Properties {
    values: HashMap<String, String>,
}

impl Properties {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let values = pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Self { values }
    }

    /// Parses TOML text, flattening nested tables into dotted keys.
    pub fn from_toml_str(text: &str) -> Result<Self, Error> {
        let table: toml::Table = text.parse()?;
        let mut values = HashMap::new();
        flatten("", &table, &mut values);
        Ok(Self { values })
    }

    /// Reads and parses the catalog file at `path`.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::Catalog {
            path: path.to_path_buf(),
            source,
        })?;
        let props = Self::from_toml_str(&text)?;
        info!(path = %path.display(), properties = props.len(), "catalog loaded");
        Ok(props)
    }

    pub fn len(&self) -> usize { self.values.len() }
    pub fn is_empty(&self) -> bool { self.values.is_empty() }
}

impl PropertySource for Properties {
    fn property(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

/// Later duplicates win: `"all.x"` at the root and `x` under `[all]` land on
/// the same property key.
fn flatten(prefix: &str, table: &toml::Table, out: &mut HashMap<String, String>) {
    for (key, value) in table {
        let key = if prefix.is_empty() { key.clone() } else { format!("{prefix}.{key}") };
        let value = match value {
            toml::Value::Table(inner) => {
                flatten(&key, inner, out);
                continue;
            }
            toml::Value::String(s)   => s.clone(),
            toml::Value::Integer(n)  => n.to_string(),
            toml::Value::Float(n)    => n.to_string(),
            toml::Value::Boolean(b)  => b.to_string(),
            toml::Value::Datetime(d) => d.to_string(),
            toml::Value::Array(_) => {
                warn!(key = %key, "array values are not supported, skipping");
                continue;
            }
        };
        if out.insert(key.clone(), value).is_some() {
            warn!(key = %key, "duplicate catalog key, later value wins");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dotted_keys_flatten_to_property_keys() {
        let props = Properties::from_toml_str(
            r#"
            jewelry.item0ImageUrl = "http://x/a.png"
            jewelry.item0Description = "Ring"
            "#,
        )
        .unwrap();

        assert_eq!(props.len(), 2);
        assert_eq!(props.property("jewelry.item0ImageUrl"), Some("http://x/a.png"));
        assert_eq!(props.property("jewelry.item0Description"), Some("Ring"));
        assert_eq!(props.property("jewelry.item1Description"), None);
    }

    #[test]
    fn table_headers_and_quoted_keys_flatten_the_same_way() {
        let props = Properties::from_toml_str(
            r#"
            "all.item0Description" = "quoted"

            [shoes]
            item0Description = "Boot"
            "#,
        )
        .unwrap();

        assert_eq!(props.property("all.item0Description"), Some("quoted"));
        assert_eq!(props.property("shoes.item0Description"), Some("Boot"));
    }

    #[test]
    fn scalars_use_their_display_form_and_arrays_are_skipped() {
        let props = Properties::from_toml_str(
            r#"
            misc.count = 3
            misc.enabled = true
            misc.list = ["a", "b"]
            "#,
        )
        .unwrap();

        assert_eq!(props.property("misc.count"), Some("3"));
        assert_eq!(props.property("misc.enabled"), Some("true"));
        assert_eq!(props.property("misc.list"), None);
    }

    #[test]
    fn colliding_spellings_keep_a_single_property() {
        let props = Properties::from_toml_str(
            r#"
            "all.item0Description" = "quoted"

            [all]
            item0Description = "table"
            "#,
        )
        .unwrap();

        assert_eq!(props.len(), 1);
        assert!(matches!(props.property("all.item0Description"), Some("quoted" | "table")));
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let err = Properties::from_toml_str("jewelry.item0ImageUrl = ").unwrap_err();
        assert!(matches!(err, Error::CatalogFormat(_)));
    }

    #[test]
    fn missing_file_reports_its_path() {
        let err = Properties::load(Path::new("does/not/exist.toml")).unwrap_err();
        match err {
            Error::Catalog { path, .. } => assert_eq!(path, Path::new("does/not/exist.toml")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn shipped_catalog_covers_every_category() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("config/catalog.toml");
        let props = Properties::load(&path).unwrap();

        for category in crate::catalog::Category::ALL {
            let key = crate::catalog::image_url_key(category, 0);
            assert!(props.property(&key).is_some(), "missing {key}");
        }
    }
}

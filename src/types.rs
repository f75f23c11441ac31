//! The content document and its entities.
//!
//! Everything here arrives from `content.json` and is only ever read. Field
//! values are kept as loosely typed [`Field`] scalars so that a missing or
//! oddly typed value still renders instead of failing the whole load.

use maud::Render;
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;

/// A scalar value interpolated into markup.
///
/// Rendering follows page-script string interpolation: an absent field reads
/// `undefined`, `null` reads `null`, strings are verbatim and numbers print
/// as the script's number-to-string would (`29.0` reads `29`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Field(Option<Value>);

impl Field {
    /// A field that was not present in the document.
    pub fn missing() -> Self {
        Self(None)
    }

    pub fn is_missing(&self) -> bool {
        self.0.is_none()
    }

    /// Whether an optional fragment keyed on this field should be emitted.
    ///
    /// Absent, `null`, `false`, `0` and `""` are all falsy.
    pub fn is_truthy(&self) -> bool {
        match &self.0 {
            None | Some(Value::Null) => false,
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Array(_)) | Some(Value::Object(_)) => true,
        }
    }

    /// Numeric reading of the field. Numeric strings count, anything else is `None`.
    pub fn as_f64(&self) -> Option<f64> {
        match &self.0 {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

impl From<&str> for Field {
    fn from(s: &str) -> Self {
        Self(Some(Value::String(s.to_string())))
    }
}

impl From<String> for Field {
    fn from(s: String) -> Self {
        Self(Some(Value::String(s)))
    }
}

impl From<i64> for Field {
    fn from(n: i64) -> Self {
        Self(Some(Value::from(n)))
    }
}

impl From<Value> for Field {
    fn from(v: Value) -> Self {
        Self(Some(v))
    }
}

impl<'de> Deserialize<'de> for Field {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // An explicit `null` is kept as a value; only absence (via
        // `#[serde(default)]`) maps to `Field(None)`.
        Value::deserialize(deserializer).map(|v| Self(Some(v)))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            None => f.write_str("undefined"),
            Some(Value::String(s)) => f.write_str(s),
            Some(Value::Array(items)) => {
                let parts: Vec<String> = items
                    .iter()
                    .map(|v| match v {
                        Value::Null => String::new(),
                        v => Field(Some(v.clone())).to_string(),
                    })
                    .collect();
                f.write_str(&parts.join(","))
            }
            Some(Value::Object(_)) => f.write_str("[object Object]"),
            Some(Value::Number(n)) => write_number(f, n),
            Some(other) => write!(f, "{other}"),
        }
    }
}

/// Numbers print the way the page script stringifies them: `29.0` and `1e2`
/// read `29` and `100`, and negative zero reads `0`.
fn write_number(f: &mut fmt::Formatter<'_>, n: &serde_json::Number) -> fmt::Result {
    if n.is_i64() || n.is_u64() {
        return write!(f, "{n}");
    }
    match n.as_f64() {
        Some(x) if x == 0.0 => f.write_str("0"),
        Some(x) => write!(f, "{x}"),
        None => write!(f, "{n}"),
    }
}

impl Render for Field {
    fn render_to(&self, buffer: &mut String) {
        self.to_string().render_to(buffer);
    }
}

/// The whole `content.json` payload. Every section is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDocument {
    #[serde(default, deserialize_with = "lenient_items")]
    pub hero: Option<Vec<HeroItem>>,
    #[serde(default, deserialize_with = "lenient_items")]
    pub collections: Option<Vec<Collection>>,
    #[serde(default, deserialize_with = "lenient_items")]
    pub products: Option<Vec<Product>>,
    #[serde(default, deserialize_with = "lenient_items")]
    pub under25_products: Option<Vec<Product>>,
    #[serde(default, deserialize_with = "lenient_items")]
    pub features: Option<Vec<Feature>>,
    #[serde(default, deserialize_with = "lenient_items")]
    pub blogs: Option<Vec<Blog>>,
    #[serde(default)]
    pub footer: Option<Footer>,
}

/// Read a section list the way the page script reads it.
///
/// The list itself must be an array (or `null`, which counts as absent). A
/// non-object entry has no properties, so it becomes an entity with every
/// field missing. A `null` entry is an error, as property access on it is.
fn lenient_items<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let Some(items) = Option::<Vec<Value>>::deserialize(deserializer)? else {
        return Ok(None);
    };
    items
        .into_iter()
        .map(|item| match item {
            Value::Null => Err(D::Error::custom("null entry in section list")),
            Value::Object(_) => serde_json::from_value(item).map_err(D::Error::custom),
            _ => Ok(T::default()),
        })
        .collect::<Result<Vec<T>, D::Error>>()
        .map(Some)
}

/// One slide of the hero scroller.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeroItem {
    pub image: Field,
    pub title: Field,
    pub text: Field,
    pub price: Field,
    pub button_text: Field,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Collection {
    pub title: Field,
    pub text: Field,
    pub button_text: Field,
    pub image: Field,
}

/// A product card. `badge` and `old_price` are optional fragments.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Product {
    pub image: Field,
    pub title: Field,
    pub badge: Field,
    pub old_price: Field,
    pub price: Field,
    pub rating: Field,
    pub reviews: Field,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Feature {
    pub image: Field,
    pub alt: Field,
    pub title: Field,
    pub text: Field,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Blog {
    pub image: Field,
    pub alt: Field,
    pub title: Field,
    pub link_text: Field,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Footer {
    pub company: Company,
    pub useful_links: Vec<Field>,
    pub information_links: Vec<Field>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Company {
    pub title: Field,
    pub location: Field,
    pub phone: Field,
    pub email: Field,
}

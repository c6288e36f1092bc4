use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::error::{CatalogError, Result};
use crate::catalog::image::ImageNormalizer;

/// Column names the client relies on when rendering or submitting products.
pub const NAME: &str = "name";
pub const PRICE: &str = "price";
pub const QUANTITY: &str = "quantity";
pub const CODE: &str = "code";
pub const CATEGORY: &str = "category";
pub const POPULAR_NAME: &str = "popularName";
pub const IMAGE: &str = "image";

/// Header row plus data rows, as served by the read endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RowTable {
    /// Builds a table from the `data` member of a read envelope. The value
    /// must be an array of arrays; the first one is the header row.
    pub fn from_json(data: &Value) -> Result<Self> {
        let Value::Array(rows) = data else {
            return Err(CatalogError::MalformedTable(
                "expected an array of rows".into(),
            ));
        };

        let mut rows = rows.iter().enumerate().map(|(idx, row)| match row {
            Value::Array(cells) => Ok(cells.iter().map(cell_to_string).collect::<Vec<_>>()),
            other => Err(CatalogError::MalformedTable(format!(
                "row {idx} is not an array: {other}"
            ))),
        });

        let headers = match rows.next() {
            Some(headers) => headers?,
            None => return Ok(Self::default()),
        };
        let rows = rows.collect::<Result<Vec<_>>>()?;

        Ok(Self { headers, rows })
    }

    /// Pairs every data row with the header row. Missing trailing cells
    /// become empty strings; cells past the last header are dropped.
    pub fn into_products(self) -> Vec<Product> {
        let Self { headers, rows } = self;
        rows.into_iter()
            .map(|row| {
                let mut cells = row.into_iter();
                let fields = headers
                    .iter()
                    .map(|header| (header.clone(), cells.next().unwrap_or_default()))
                    .collect();
                Product { fields }
            })
            .collect()
    }
}

fn cell_to_string(cell: &Value) -> String {
    match cell {
        Value::String(value) => value.clone(),
        Value::Null => String::new(),
        Value::Number(value) => value.to_string(),
        Value::Bool(value) => value.to_string(),
        other => other.to_string(),
    }
}

/// One catalog entry, keyed by column name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Product {
    pub fields: BTreeMap<String, String>,
}

impl Product {
    /// Value of `column`, or the empty string when the column is absent.
    pub fn get(&self, column: &str) -> &str {
        self.fields.get(column).map(String::as_str).unwrap_or("")
    }

    pub fn name(&self) -> &str {
        self.get(NAME)
    }

    pub fn price(&self) -> &str {
        self.get(PRICE)
    }

    pub fn quantity(&self) -> &str {
        self.get(QUANTITY)
    }

    pub fn code(&self) -> &str {
        self.get(CODE)
    }

    pub fn category(&self) -> &str {
        self.get(CATEGORY)
    }

    pub fn popular_name(&self) -> &str {
        self.get(POPULAR_NAME)
    }

    pub fn image(&self) -> &str {
        self.get(IMAGE)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Product {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

/// Payload posted to the write endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub price: String,
    pub quantity: String,
    pub code: String,
    pub category: String,
    pub popular_name: String,
    pub image: String,
}

/// Raw values collected from an entry form, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name: Option<String>,
    pub price: Option<String>,
    pub quantity: Option<String>,
    pub code: Option<String>,
    pub category: Option<String>,
    pub popular_name: Option<String>,
    /// Image link as typed by the user; may be a sharing link.
    pub image_link: Option<String>,
}

impl ProductForm {
    /// Checks the required fields and fills in defaults for the optional ones.
    pub fn into_new_product(
        self,
        normalizer: &ImageNormalizer,
        placeholder_image: &str,
    ) -> Result<NewProduct> {
        let image = self
            .image_link
            .as_deref()
            .map(str::trim)
            .filter(|link| !link.is_empty())
            .map(|link| normalizer.normalize(link))
            .filter(|link| !link.is_empty())
            .unwrap_or_else(|| placeholder_image.to_string());

        Ok(NewProduct {
            name: required(self.name, NAME)?,
            price: required(self.price, PRICE)?,
            quantity: required(self.quantity, QUANTITY)?,
            code: required(self.code, CODE)?,
            category: required(self.category, CATEGORY)?,
            popular_name: self.popular_name.unwrap_or_default(),
            image,
        })
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(CatalogError::MissingField(field)),
    }
}

//! Application state - single source of truth
//!
//! Components receive `&AppState` as props; only the reducer mutates it.
//! The form holds string projections of at most one wishlist/item pair.
//! Empty string is the canonical "unset" value for every field.

use serde::Deserialize;

/// A wishlist as the backend serializes it.
///
/// Scalar fields go through [`de_text`] because the backend emits ids as
/// integers and `purchased` as a boolean, while the form only ever holds
/// text.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Wishlist {
    #[serde(default, deserialize_with = "de_text")]
    pub id: String,
    #[serde(default, deserialize_with = "de_text")]
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "de_text")]
    pub kind: String,
    #[serde(default, deserialize_with = "de_text")]
    pub user_id: String,
    #[serde(default, deserialize_with = "de_text")]
    pub created_date: String,
    #[serde(default)]
    pub items: Vec<WishlistItem>,
}

/// An item belonging to a wishlist. `purchased` only ever changes through
/// the purchase action, never through a general update.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct WishlistItem {
    #[serde(default, deserialize_with = "de_text")]
    pub id: String,
    #[serde(default, deserialize_with = "de_text")]
    pub name: String,
    #[serde(default, deserialize_with = "de_text")]
    pub category: String,
    #[serde(default, deserialize_with = "de_text")]
    pub price: String,
    #[serde(default, deserialize_with = "de_text")]
    pub purchased: String,
}

/// Accept string, number, bool or null and render it as form text.
fn de_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(text) => text,
        other => other.to_string(),
    })
}

/// The editable fields, in focus-traversal order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Id,
    Name,
    Kind,
    UserId,
    CreatedDate,
    Items,
    ItemId,
    ItemName,
    ItemCategory,
    ItemPrice,
    ItemPurchased,
}

impl FormField {
    pub const ALL: [FormField; 11] = [
        FormField::Id,
        FormField::Name,
        FormField::Kind,
        FormField::UserId,
        FormField::CreatedDate,
        FormField::Items,
        FormField::ItemId,
        FormField::ItemName,
        FormField::ItemCategory,
        FormField::ItemPrice,
        FormField::ItemPurchased,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Id => "ID",
            FormField::Name => "Name",
            FormField::Kind => "Type",
            FormField::UserId => "User ID",
            FormField::CreatedDate => "Created Date",
            FormField::Items => "Items",
            FormField::ItemId => "Item ID",
            FormField::ItemName => "Item Name",
            FormField::ItemCategory => "Item Category",
            FormField::ItemPrice => "Item Price",
            FormField::ItemPurchased => "Purchased",
        }
    }

    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|field| *field == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let index = Self::ALL.iter().position(|field| *field == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// The form: a mutable projection of at most one wishlist/item pair.
///
/// `items` is the raw text of the items field; it is sent verbatim on
/// Create and never written back from a response.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub user_id: String,
    pub created_date: String,
    pub items: String,
    pub item_id: String,
    pub item_name: String,
    pub item_category: String,
    pub item_price: String,
    pub item_purchased: String,
}

impl FormState {
    pub fn read(&self, field: FormField) -> &str {
        match field {
            FormField::Id => &self.id,
            FormField::Name => &self.name,
            FormField::Kind => &self.kind,
            FormField::UserId => &self.user_id,
            FormField::CreatedDate => &self.created_date,
            FormField::Items => &self.items,
            FormField::ItemId => &self.item_id,
            FormField::ItemName => &self.item_name,
            FormField::ItemCategory => &self.item_category,
            FormField::ItemPrice => &self.item_price,
            FormField::ItemPurchased => &self.item_purchased,
        }
    }

    pub fn write(&mut self, field: FormField, value: String) {
        match field {
            FormField::Id => self.id = value,
            FormField::Name => self.name = value,
            FormField::Kind => self.kind = value,
            FormField::UserId => self.user_id = value,
            FormField::CreatedDate => self.created_date = value,
            FormField::Items => self.items = value,
            FormField::ItemId => self.item_id = value,
            FormField::ItemName => self.item_name = value,
            FormField::ItemCategory => self.item_category = value,
            FormField::ItemPrice => self.item_price = value,
            FormField::ItemPurchased => self.item_purchased = value,
        }
    }

    /// Reset every field. Idempotent; stale values must never leak into a
    /// later request.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Overwrite the wishlist columns from a response record. The nested
    /// items of the response are not projected back into the raw items text.
    pub fn apply_wishlist(&mut self, wishlist: &Wishlist) {
        self.id = wishlist.id.clone();
        self.name = wishlist.name.clone();
        self.kind = wishlist.kind.clone();
        self.user_id = wishlist.user_id.clone();
        self.created_date = wishlist.created_date.clone();
    }

    /// Overwrite the item columns from a response record. Category and price
    /// stay as typed; they are request inputs, not response projections.
    pub fn apply_item(&mut self, item: &WishlistItem) {
        self.item_id = item.id.clone();
        self.item_name = item.name.clone();
        self.item_purchased = item.purchased.clone();
    }
}

/// Severity of the flash slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlashLevel {
    Success,
    Error,
}

/// Single-slot status message; each write replaces the previous one.
#[derive(Clone, Debug, PartialEq)]
pub struct Flash {
    pub level: FlashLevel,
    pub text: String,
}

impl Flash {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Error,
            text: text.into(),
        }
    }
}

/// Everything the UI needs to render.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    pub form: FormState,
    /// Field the editor currently targets.
    pub focus: FormField,
    pub flash: Option<Flash>,
    /// Last search response; replaced wholesale by the next search.
    pub results: Vec<Wishlist>,
    /// Requests issued but not yet completed. Drives the pending marker
    /// only; dispatch is never gated on it.
    pub in_flight: u32,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            form: FormState::default(),
            focus: FormField::Id,
            flash: None,
            results: Vec::new(),
            in_flight: 0,
        }
    }
}

//! Request construction - pure functions of a form snapshot
//!
//! One builder per operation. Builders read the form exactly as it stands
//! at dispatch time and perform no validation and no I/O; a request built
//! from an incomplete form is sent as-is and the server gets to object.

use reqwest::Method;
use serde_json::{Value, json};

use crate::action::Operation;
use crate::query;
use crate::state::FormState;

/// A fully described HTTP request: verb, path relative to the base URL,
/// and optional JSON body.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

pub fn build(op: Operation, form: &FormState) -> ApiRequest {
    match op {
        Operation::Create => create(form),
        Operation::Update => update(form),
        Operation::AddItem => add_item(form),
        Operation::Retrieve => retrieve(form),
        Operation::Delete => delete(form),
        Operation::Search => search(form),
        Operation::Purchase => purchase(form),
    }
}

/// POST /wishlists. The items field is passed through verbatim as typed,
/// not parsed or re-validated.
pub fn create(form: &FormState) -> ApiRequest {
    ApiRequest {
        method: Method::POST,
        path: "/wishlists".into(),
        body: Some(json!({
            "name": form.name,
            "type": form.kind,
            "user_id": form.user_id,
            "created_date": form.created_date,
            "items": form.items,
        })),
    }
}

/// PUT /wishlists/{id}. Items are never resent on update; the endpoint
/// updates wishlist attributes only and always receives an empty list.
pub fn update(form: &FormState) -> ApiRequest {
    ApiRequest {
        method: Method::PUT,
        path: format!("/wishlists/{}", form.id),
        body: Some(json!({
            "name": form.name,
            "type": form.kind,
            "user_id": form.user_id,
            "created_date": form.created_date,
            "items": [],
        })),
    }
}

/// POST /wishlists/{id}/items. An empty wishlist id is not checked here;
/// the server rejects the request.
pub fn add_item(form: &FormState) -> ApiRequest {
    ApiRequest {
        method: Method::POST,
        path: format!("/wishlists/{}/items", form.id),
        body: Some(json!({
            "wishlist_id": form.id,
            "name": form.item_name,
            "category": form.item_category,
            "price": form.item_price,
        })),
    }
}

/// GET /wishlists/{id}.
pub fn retrieve(form: &FormState) -> ApiRequest {
    ApiRequest {
        method: Method::GET,
        path: format!("/wishlists/{}", form.id),
        body: None,
    }
}

/// DELETE /wishlists/{id}.
pub fn delete(form: &FormState) -> ApiRequest {
    ApiRequest {
        method: Method::DELETE,
        path: format!("/wishlists/{}", form.id),
        body: None,
    }
}

/// PUT /wishlists/{id}/items/{item_id}/purchase. A state transition, not a
/// general update; no body.
pub fn purchase(form: &FormState) -> ApiRequest {
    ApiRequest {
        method: Method::PUT,
        path: format!("/wishlists/{}/items/{}/purchase", form.id, form.item_id),
        body: None,
    }
}

/// GET /wishlists with the name/type filters that are currently set. The
/// `?` is omitted entirely when no filter qualifies.
pub fn search(form: &FormState) -> ApiRequest {
    let encoded = query::encode(&[("name", &form.name), ("type", &form.kind)]);
    let path = if encoded.is_empty() {
        "/wishlists".to_string()
    } else {
        format!("/wishlists?{}", encoded)
    };
    ApiRequest {
        method: Method::GET,
        path,
        body: None,
    }
}

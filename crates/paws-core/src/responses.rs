//! Request and response bodies exchanged at the HTTP boundary.
//!
//! Field names are camelCase on the wire to match the browser client
//! (`imageUrl`, not `image_url`).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Product;
use crate::money::Cents;
use crate::notification::Notification;

/// Body of `POST /api/report`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReportSubmission {
    #[serde(default)]
    pub species: String,
    #[serde(default)]
    pub condition: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// `201` response from `POST /api/report`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ReportAccepted {
    pub message: String,
    pub id: u32,
}

/// `200` response from `POST /api/upload`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UploadResponse {
    pub url: String,
}

/// Body of `POST /api/classify`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyRequest {
    #[serde(default)]
    pub image_url: Option<String>,
}

/// `200` response from `POST /api/classify`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Classification {
    pub species: String,
    pub condition: String,
}

/// Body of adoption-request submissions.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AdoptionSubmission {
    pub animal_id: u32,
    pub requester_name: String,
}

/// Body of `POST /api/partners/{id}/contact`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

/// One row of `GET /api/products`.
///
/// `price` is the decimal dollar string the storefront displays; `priceCents`
/// carries the exact integer amount.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProductListing {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub price: String,
    pub price_cents: Cents,
    pub image_ref: String,
}

impl From<Product> for ProductListing {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price.to_string(),
            price_cents: product.price,
            image_ref: product.image_ref,
        }
    }
}

/// Response from any admin mutation that changed state.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ActionResponse<T> {
    pub notification: Notification,
    pub record: T,
}

/// Error body for every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_uses_camel_case() {
        let json = r#"{"species":"Dog","condition":"Injured","location":"Main St","imageUrl":"/x.png"}"#;
        let submission: ReportSubmission = serde_json::from_str(json).unwrap();
        assert_eq!(submission.image_url.as_deref(), Some("/x.png"));
        assert!(submission.description.is_none());
    }

    #[test]
    fn product_listing_carries_dollars_and_cents() {
        let listing = ProductListing::from(crate::seed::products().remove(0));
        let json = serde_json::to_value(&listing).unwrap();
        assert_eq!(json["price"], "29.99");
        assert_eq!(json["priceCents"], 2999);
    }

    #[test]
    fn contact_form_fields_default_to_empty() {
        let form: ContactForm = serde_json::from_str(r#"{"name":"Ana"}"#).unwrap();
        assert_eq!(form.name, "Ana");
        assert!(form.email.is_empty());
        assert!(form.message.is_empty());
    }

    #[test]
    fn classify_request_tolerates_missing_url() {
        let request: ClassifyRequest = serde_json::from_str("{}").unwrap();
        assert!(request.image_url.is_none());
    }
}

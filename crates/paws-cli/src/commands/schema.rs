use anyhow::bail;
use paws_core::entities::{AdoptionRequest, Animal, Partner, Partnership, Product, Report};
use paws_core::notification::Notification;
use paws_core::responses::{Classification, ContactForm, ProductListing, ReportSubmission};
use paws_store::{CartView, OrderReceipt};
use schemars::{Schema, schema_for};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Names accepted by `paws schema`.
pub const SCHEMA_TYPES: &[&str] = &[
    "report",
    "adoption_request",
    "partnership",
    "product",
    "animal",
    "partner",
    "product_listing",
    "contact_form",
    "notification",
    "report_submission",
    "classification",
    "cart_view",
    "order_receipt",
];

/// Handle `paws schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&schema_named(&args.type_name)?, flags.format)
}

fn schema_named(raw: &str) -> anyhow::Result<Schema> {
    let name = raw.trim().to_ascii_lowercase().replace('-', "_");
    let schema = match name.as_str() {
        "report" => schema_for!(Report),
        "adoption_request" => schema_for!(AdoptionRequest),
        "partnership" => schema_for!(Partnership),
        "product" => schema_for!(Product),
        "animal" => schema_for!(Animal),
        "partner" => schema_for!(Partner),
        "product_listing" => schema_for!(ProductListing),
        "contact_form" => schema_for!(ContactForm),
        "notification" => schema_for!(Notification),
        "report_submission" => schema_for!(ReportSubmission),
        "classification" => schema_for!(Classification),
        "cart_view" => schema_for!(CartView),
        "order_receipt" => schema_for!(OrderReceipt),
        _ => bail!(
            "unknown schema type '{raw}'; expected one of: {}",
            SCHEMA_TYPES.join(", ")
        ),
    };
    Ok(schema)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_type_resolves() {
        for name in SCHEMA_TYPES {
            let schema = schema_named(name).expect("listed type should resolve");
            assert!(schema.as_value().is_object(), "{name}");
        }
    }

    #[test]
    fn hyphenated_names_are_accepted() {
        let schema = schema_named("adoption-request").expect("should resolve");
        let properties = schema.get("properties").expect("object schema");
        assert!(properties.get("requester_name").is_some());
    }

    #[test]
    fn unknown_type_lists_choices() {
        let error = schema_named("invoice").unwrap_err();
        assert!(error.to_string().contains("cart_view"));
    }
}

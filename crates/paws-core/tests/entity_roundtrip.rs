//! Serde roundtrip and JsonSchema validation tests for entity and boundary types.

use chrono::Utc;
use schemars::schema_for;
use paws_core::entities::*;
use paws_core::enums::*;
use paws_core::money::Cents;
use paws_core::notification::Notification;
use paws_core::responses::*;
use paws_core::seed;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

roundtrip_and_validate!(
    submitted_report_roundtrip,
    Report,
    Report {
        id: 3,
        species: "Rabbit".into(),
        condition: "Sick".into(),
        location: "Riverside Park".into(),
        status: ReportStatus::Pending,
        description: Some("Hiding under a bench".into()),
        image_url: Some("/placeholder.svg?text=rabbit.jpg".into()),
        reported_at: Some(Utc::now()),
    }
);

roundtrip_and_validate!(seed_reports_roundtrip, Vec<Report>, seed::reports());
roundtrip_and_validate!(
    seed_adoptions_roundtrip,
    Vec<AdoptionRequest>,
    seed::adoption_requests()
);
roundtrip_and_validate!(
    seed_partnerships_roundtrip,
    Vec<Partnership>,
    seed::partnerships()
);
roundtrip_and_validate!(seed_products_roundtrip, Vec<Product>, seed::products());
roundtrip_and_validate!(seed_animals_roundtrip, Vec<Animal>, seed::animals());
roundtrip_and_validate!(seed_partners_roundtrip, Vec<Partner>, seed::partners());

roundtrip_and_validate!(
    report_submission_roundtrip,
    ReportSubmission,
    ReportSubmission {
        species: "Dog".into(),
        condition: "Injured".into(),
        location: "123 Main St".into(),
        description: None,
        image_url: Some("/placeholder.svg".into()),
    }
);

roundtrip_and_validate!(
    action_response_roundtrip,
    ActionResponse<Partnership>,
    ActionResponse {
        notification: Notification::partnership_updated(1),
        record: Partnership {
            id: 1,
            name: "City Animal Shelter".into(),
            status: PartnershipStatus::Inactive,
        },
    }
);

roundtrip_and_validate!(
    contact_form_roundtrip,
    ContactForm,
    ContactForm {
        name: "Ana Ruiz".into(),
        email: "ana@example.org".into(),
        message: "We can foster two cats.".into(),
    }
);

roundtrip_and_validate!(
    product_listing_roundtrip,
    ProductListing,
    ProductListing::from(seed::products().remove(1))
);

roundtrip_and_validate!(
    classification_roundtrip,
    Classification,
    Classification {
        species: "Bird".into(),
        condition: "Healthy".into(),
    }
);

#[test]
fn seed_ids_are_unique_per_list() {
    fn unique<T: Record>(records: &[T]) -> bool {
        let mut ids: Vec<u32> = records.iter().map(Record::id).collect();
        ids.sort_unstable();
        ids.windows(2).all(|pair| pair[0] != pair[1])
    }

    assert!(unique(&seed::reports()));
    assert!(unique(&seed::adoption_requests()));
    assert!(unique(&seed::partnerships()));
    assert!(unique(&seed::products()));
    assert!(unique(&seed::animals()));
    assert!(unique(&seed::partners()));
}

#[test]
fn seed_prices_match_catalog() {
    let prices: Vec<Cents> = seed::products().iter().map(|p| p.price).collect();
    assert_eq!(
        prices,
        vec![Cents::new(2999), Cents::new(1499), Cents::new(999)]
    );
}

#[test]
fn report_wire_format_is_snake_case() {
    let json = serde_json::to_value(&seed::reports()[1]).unwrap();
    assert_eq!(json["status"], "in_progress");
    assert!(json.get("reported_at").is_none());
}

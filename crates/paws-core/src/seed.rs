//! Seed data for the in-memory board and catalog.
//!
//! State is volatile: every process (and every CLI invocation) starts from
//! these lists.

use crate::entities::{AdoptionRequest, Animal, Partner, Partnership, Product, Report};
use crate::enums::{AdoptionStatus, PartnershipStatus, ReportStatus};
use crate::money::Cents;

#[must_use]
pub fn reports() -> Vec<Report> {
    vec![
        report(1, "Dog", "Injured", "123 Main St", ReportStatus::Pending),
        report(2, "Cat", "Healthy", "456 Elm St", ReportStatus::InProgress),
    ]
}

#[must_use]
pub fn adoption_requests() -> Vec<AdoptionRequest> {
    vec![
        AdoptionRequest {
            id: 1,
            animal_name: "Buddy".into(),
            requester_name: "John Doe".into(),
            status: AdoptionStatus::Pending,
        },
        AdoptionRequest {
            id: 2,
            animal_name: "Whiskers".into(),
            requester_name: "Jane Smith".into(),
            status: AdoptionStatus::Approved,
        },
    ]
}

#[must_use]
pub fn partnerships() -> Vec<Partnership> {
    vec![
        Partnership {
            id: 1,
            name: "City Animal Shelter".into(),
            status: PartnershipStatus::Active,
        },
        Partnership {
            id: 2,
            name: "Paws for a Cause".into(),
            status: PartnershipStatus::Inactive,
        },
    ]
}

#[must_use]
pub fn products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Premium Dog Food".into(),
            description: "High-quality, nutritious food for adult dogs".into(),
            price: Cents::new(2999),
            image_ref: "dogfood.png".into(),
        },
        Product {
            id: 2,
            name: "Cat Litter".into(),
            description: "Odor-controlling, clumping cat litter".into(),
            price: Cents::new(1499),
            image_ref: "catfood.png".into(),
        },
        Product {
            id: 3,
            name: "Bird Seed Mix".into(),
            description: "Balanced seed mix for various bird species".into(),
            price: Cents::new(999),
            image_ref: "birdfood.png".into(),
        },
    ]
}

#[must_use]
pub fn animals() -> Vec<Animal> {
    vec![
        Animal {
            id: 1,
            name: "Buddy".into(),
            species: "Dog".into(),
            breed: "Labrador Retriever".into(),
            age_years: 3,
            description: "Friendly and energetic Labrador looking for an active family.".into(),
            image_ref: "labrador.png".into(),
        },
        Animal {
            id: 2,
            name: "Whiskers".into(),
            species: "Cat".into(),
            breed: "Siamese".into(),
            age_years: 5,
            description: "Calm and affectionate Siamese cat seeking a quiet home.".into(),
            image_ref: "siamese.png".into(),
        },
        Animal {
            id: 3,
            name: "Polly".into(),
            species: "Bird".into(),
            breed: "Parrot".into(),
            age_years: 2,
            description: "Colorful and talkative parrot looking for an engaging owner.".into(),
            image_ref: "parrot.png".into(),
        },
    ]
}

fn report(id: u32, species: &str, condition: &str, location: &str, status: ReportStatus) -> Report {
    Report {
        id,
        species: species.into(),
        condition: condition.into(),
        location: location.into(),
        status,
        description: None,
        image_url: None,
        reported_at: None,
    }
}

/// Public partner directory.
#[must_use]
pub fn partners() -> Vec<Partner> {
    vec![
        Partner {
            id: 1,
            name: "City Animal Shelter".into(),
            description: "Local animal shelter providing temporary homes for stray and surrendered animals.".into(),
            image_ref: "animalshelter.png?height=200&width=200".into(),
        },
        Partner {
            id: 2,
            name: "Paws for a Cause".into(),
            description: "Non-profit organization dedicated to animal rescue and welfare education.".into(),
            image_ref: "Paws.png?height=200&width=200".into(),
        },
        Partner {
            id: 3,
            name: "Veterinary Clinic Network".into(),
            description: "A network of veterinary clinics providing discounted services for rescued animals.".into(),
            image_ref: "VeterinaryClinicNetwork.png?height=200&width=200".into(),
        },
    ]
}

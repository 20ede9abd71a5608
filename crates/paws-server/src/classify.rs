//! Image classification seam.
//!
//! `RandomClassifier` stands in for real inference and draws a label pair
//! uniformly at random. It never inspects the image.

use std::sync::{Mutex, PoisonError};

use paws_core::responses::Classification;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const SPECIES_LABELS: [&str; 4] = ["Dog", "Cat", "Bird", "Rabbit"];
pub const CONDITION_LABELS: [&str; 3] = ["Healthy", "Injured", "Sick"];

/// Classify the animal in the image at `image_url`.
pub trait Classifier: Send + Sync {
    fn classify(&self, image_url: &str) -> Classification;
}

#[derive(Debug)]
pub struct RandomClassifier {
    rng: Mutex<StdRng>,
}

impl RandomClassifier {
    /// Seeded from the operating system.
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Deterministic sequence, for tests.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Classifier for RandomClassifier {
    fn classify(&self, image_url: &str) -> Classification {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        let species = SPECIES_LABELS[rng.random_range(0..SPECIES_LABELS.len())];
        let condition = CONDITION_LABELS[rng.random_range(0..CONDITION_LABELS.len())];
        tracing::debug!(image_url, species, condition, "stub classification");

        Classification {
            species: species.to_string(),
            condition: condition.to_string(),
        }
    }
}

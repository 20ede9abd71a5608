use paws_core::notification::Notification;

/// Result of a successful reducer call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reduced<T> {
    /// The full list after the change.
    pub records: Vec<T>,
    /// Index of the record that changed (or was appended).
    pub index: usize,
    /// Notification the owner must deliver.
    pub notification: Notification,
}

impl<T> Reduced<T> {
    /// The record that changed.
    #[must_use]
    pub fn record(&self) -> &T {
        &self.records[self.index]
    }
}

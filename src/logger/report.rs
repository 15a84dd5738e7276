//! Per-destination outcome of one `log` call.

use crate::destination::DestinationKind;

/// Outcome of handing the message to one destination.
#[derive(Debug)]
pub struct Delivery {
    pub destination: String,
    pub kind: DestinationKind,
    pub result: Result<(), crate::Error>,
}

/// What happened to one message, destination by destination, in configured order.
///
/// A failed delivery never fails the `log` call; it shows up here instead.
#[derive(Debug, Default)]
pub struct DeliveryReport {
    skipped: bool,
    deliveries: Vec<Delivery>,
}

impl DeliveryReport {
    /// Blank message: nothing was sent anywhere.
    pub(crate) fn skipped() -> Self {
        Self {
            skipped: true,
            deliveries: Vec::new(),
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            skipped: false,
            deliveries: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, delivery: Delivery) {
        self.deliveries.push(delivery);
    }

    #[must_use]
    pub const fn is_skipped(&self) -> bool {
        self.skipped
    }

    #[must_use]
    pub fn deliveries(&self) -> &[Delivery] {
        &self.deliveries
    }

    /// Number of destinations that accepted the message.
    #[must_use]
    pub fn delivered(&self) -> usize {
        self.deliveries.iter().filter(|d| d.result.is_ok()).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &Delivery> {
        self.deliveries.iter().filter(|d| d.result.is_err())
    }

    #[must_use]
    pub fn all_delivered(&self) -> bool {
        self.deliveries.iter().all(|d| d.result.is_ok())
    }
}

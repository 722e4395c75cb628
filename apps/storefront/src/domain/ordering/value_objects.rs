//! Order status in the lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of an order.
///
/// No transition graph is enforced: any status may replace any other through
/// `OrderRepository::update_order`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Order created, not yet picked.
    #[default]
    Pending,
    /// Order being prepared.
    Processing,
    /// Order handed to the customer.
    Delivered,
}

impl OrderStatus {
    /// All statuses in lifecycle order.
    pub const ALL: [Self; 3] = [Self::Pending, Self::Processing, Self::Delivered];

    /// Returns true once the order has been delivered.
    #[must_use]
    pub const fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Processing => write!(f, "Processing"),
            Self::Delivered => write!(f, "Delivered"),
        }
    }
}

use serde::{Deserialize, Serialize};

/// Booking counts and approved revenue for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySummary {
    pub month: String,
    pub total: usize,
    pub approved: usize,
    pub rejected: usize,
    pub pending: usize,
    pub revenue: f64,
}

use serde::{Deserialize, Serialize};

use super::RentalId;

/// Response of `POST /payments/create-intent/{rentalId}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntent {
    pub client_secret: String,
    pub payment_id: Option<i64>,
    pub publishable_key: Option<String>,
}

/// Response of `GET /payments/status/{rentalId}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentStatus {
    pub payment_id: Option<i64>,
    pub rental_id: RentalId,
    pub status: String,
    pub amount: Option<f64>,
    pub currency: Option<String>,
    pub receipt_url: Option<String>,
    pub customer_email: Option<String>,
}

impl PaymentStatus {
    pub fn is_paid(&self) -> bool {
        self.status.eq_ignore_ascii_case("SUCCEEDED") || self.status.eq_ignore_ascii_case("PAID")
    }
}

//! Payment endpoint request shapes.

use serde::Deserialize;
use serde_with::{serde_as, DisplayFromStr, PickFirst};
use validator::Validate;

fn default_currency() -> String {
    "USD".to_string()
}

#[serde_as]
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProcessPaymentRequest {
    #[validate(length(min = 1))]
    pub booking_id: String,
    /// Accepts a JSON number or a numeric string.
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    #[validate(range(min = 0.01))]
    pub amount: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

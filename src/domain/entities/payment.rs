//! Payments.

use super::user::User;
use crate::schema_struct;

schema_struct! {
    /// A portion of the price.
    pub struct LabeledPrice [] {
        pub label: String,
        /// Price in the smallest units of the currency.
        pub amount: i64,
    }
}

impl LabeledPrice {
    pub fn new(label: impl Into<String>, amount: i64) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }
}

schema_struct! {
    /// Basic information about an invoice.
    pub struct Invoice [] {
        pub title: String,
        pub description: String,
        pub start_parameter: String,
        /// Three-letter ISO 4217 currency code.
        pub currency: String,
        pub total_amount: i64,
    }
}

schema_struct! {
    pub struct ShippingAddress [] {
        pub country_code: String,
        pub state: String,
        pub city: String,
        pub street_line1: String,
        pub street_line2: String,
        pub post_code: String,
    }
}

schema_struct! {
    pub struct OrderInfo [] {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub phone_number: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub email: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub shipping_address: Option<ShippingAddress>,
    }
}

schema_struct! {
    pub struct ShippingOption [] {
        pub id: String,
        pub title: String,
        pub prices: Vec<LabeledPrice>,
    }
}

impl ShippingOption {
    pub fn total(&self) -> i64 {
        self.prices.iter().map(|p| p.amount).sum()
    }
}

schema_struct! {
    pub struct SuccessfulPayment [] {
        pub currency: String,
        pub total_amount: i64,
        pub invoice_payload: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub shipping_option_id: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub order_info: Option<OrderInfo>,
        pub telegram_payment_charge_id: String,
        pub provider_payment_charge_id: String,
    }
}

schema_struct! {
    pub struct ShippingQuery [] {
        pub id: String,
        pub from: User,
        pub invoice_payload: String,
        pub shipping_address: ShippingAddress,
    }
}

schema_struct! {
    pub struct PreCheckoutQuery [] {
        pub id: String,
        pub from: User,
        pub currency: String,
        pub total_amount: i64,
        pub invoice_payload: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub shipping_option_id: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub order_info: Option<OrderInfo>,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipping_option_total() {
        let option = ShippingOption {
            id: "std".into(),
            title: "Standard".into(),
            prices: vec![LabeledPrice::new("Parcel", 500), LabeledPrice::new("Tax", 95)],
        };
        assert_eq!(option.total(), 595);
    }
}

//! Order DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::order::{Order, OrderDetails};
use crate::domain::shared::Timestamp;

/// DTO for creating or fully replacing an order.
///
/// `total` is accepted as a JSON number or a numeric string. A missing
/// `client` is read as empty so it fails validation like a blank one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderCreationDto {
    /// Client name.
    #[serde(default)]
    pub client: String,
    /// Order date.
    pub date: Timestamp,
    /// Order total.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub total: Decimal,
}

impl OrderCreationDto {
    /// Convert to domain details.
    #[must_use]
    pub fn into_details(self) -> OrderDetails {
        OrderDetails::new(self.client, self.date, self.total)
    }
}

/// DTO representing a stored order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDto {
    /// Order ID.
    pub id: String,
    /// Client name.
    pub client: String,
    /// Order date.
    pub date: Timestamp,
    /// Order total, emitted as an exact JSON number.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub total: Decimal,
}

impl OrderDto {
    /// Create from domain Order.
    #[must_use]
    pub fn from_order(order: &Order) -> Self {
        Self {
            id: order.id().to_string(),
            client: order.client().to_string(),
            date: order.date(),
            total: order.total(),
        }
    }
}

impl From<&Order> for OrderDto {
    fn from(order: &Order) -> Self {
        Self::from_order(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn creation_dto_accepts_number_and_date() {
        let json = r#"{"client":"Acme","date":"2024-01-01","total":10.5}"#;
        let dto: OrderCreationDto = serde_json::from_str(json).unwrap();

        assert_eq!(dto.client, "Acme");
        assert_eq!(dto.total, dec!(10.5));
        assert_eq!(dto.date, Timestamp::parse("2024-01-01T00:00:00Z").unwrap());
    }

    #[test]
    fn creation_dto_accepts_string_total() {
        let json = r#"{"client":"Acme","date":"2024-01-01T09:30:00Z","total":"99.99"}"#;
        let dto: OrderCreationDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.total, dec!(99.99));
    }

    #[test]
    fn creation_dto_missing_client_is_empty() {
        let json = r#"{"date":"2024-01-01","total":1}"#;
        let dto: OrderCreationDto = serde_json::from_str(json).unwrap();
        assert!(dto.client.is_empty());
    }

    #[test]
    fn creation_dto_requires_date_and_total() {
        assert!(serde_json::from_str::<OrderCreationDto>(r#"{"client":"Acme","total":1}"#).is_err());
        assert!(
            serde_json::from_str::<OrderCreationDto>(r#"{"client":"Acme","date":"2024-01-01"}"#)
                .is_err()
        );
    }

    #[test]
    fn creation_dto_keeps_every_digit_of_a_number_total() {
        let json = r#"{"client":"Acme","date":"2024-01-01","total":12345678901234.123456789}"#;
        let dto: OrderCreationDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.total, dec!(12345678901234.123456789));
    }

    #[test]
    fn order_dto_emits_total_without_rounding() {
        let dto = OrderDto {
            id: "ord-1".to_string(),
            client: "Acme".to_string(),
            date: Timestamp::parse("2024-01-01").unwrap(),
            total: dec!(12345678901234.123456789),
        };

        let json = serde_json::to_string(&dto).unwrap();
        assert!(json.contains(r#""total":12345678901234.123456789"#));
    }

    #[test]
    fn order_dto_from_order() {
        let order = Order::create(
            OrderCreationDto {
                client: "Acme".to_string(),
                date: Timestamp::parse("2024-01-01").unwrap(),
                total: dec!(10.5),
            }
            .into_details(),
        )
        .unwrap();

        let dto = OrderDto::from(&order);
        assert_eq!(dto.id, order.id().as_str());
        assert_eq!(dto.client, "Acme");
        assert_eq!(dto.total, dec!(10.5));
    }

    #[test]
    fn order_dto_serializes_total_as_number() {
        let dto = OrderDto {
            id: "ord-1".to_string(),
            client: "Acme".to_string(),
            date: Timestamp::parse("2024-01-01").unwrap(),
            total: dec!(10.5),
        };

        let value = serde_json::to_value(&dto).unwrap();
        assert!(value["total"].is_number());
        assert_eq!(value["total"].to_string(), "10.5");
        assert_eq!(value["date"], "2024-01-01T00:00:00Z");
        assert_eq!(value["id"], "ord-1");
    }
}

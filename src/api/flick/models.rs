use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};

use crate::quantity::{cost::Cents, energy::KilowattHours, rate::CentsPerKilowattHour};

#[derive(Deserialize)]
pub struct UserInfo {
    pub authorized_data_contexts: AuthorizedDataContexts,
}

#[derive(Deserialize)]
pub struct AuthorizedDataContexts {
    pub supply_nodes: Vec<String>,
}

#[derive(Deserialize)]
pub struct PriceForecast {
    pub prices: Vec<PricePoint>,
}

impl PriceForecast {
    /// The forecast entry in effect now: the one with the earliest start.
    ///
    /// Equal starts resolve to the first entry in the response.
    #[must_use]
    pub fn current(&self) -> Option<&PricePoint> {
        self.prices.iter().min_by_key(|point| point.starts_at)
    }
}

#[derive(Deserialize)]
pub struct PricePoint {
    pub starts_at: DateTime<Utc>,
    pub price: Price,
    pub components: Vec<PriceComponent>,
}

#[serde_as]
#[derive(Deserialize)]
pub struct Price {
    #[serde_as(as = "DisplayFromStr")]
    pub value: CentsPerKilowattHour,
}

#[serde_as]
#[derive(Deserialize)]
pub struct PriceComponent {
    pub charge_setter: String,
    pub charge_method: String,

    #[serde_as(as = "DisplayFromStr")]
    pub value: CentsPerKilowattHour,
}

impl PriceComponent {
    /// Field name under which the component is recorded.
    #[must_use]
    pub fn field_name(&self) -> String {
        format!("{}_{}", self.charge_setter, self.charge_method)
    }
}

#[derive(Deserialize)]
pub struct UsageBucket {
    pub started_at: DateTime<Utc>,
    pub value: KilowattHours,
}

#[serde_as]
#[derive(Deserialize)]
pub struct DetailedUsageInterval {
    pub started_at: DateTime<Utc>,

    #[serde_as(as = "DisplayFromStr")]
    pub price: CentsPerKilowattHour,

    #[serde_as(as = "DisplayFromStr")]
    pub units: KilowattHours,
}

impl DetailedUsageInterval {
    /// Cost of the interval, derived at write time and never stored.
    #[must_use]
    pub fn total_cost(&self) -> Cents {
        self.price * self.units
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::prelude::*;

    #[test]
    fn user_info_ok() -> Result {
        // language=json
        let body = r#"{
            "id": "123456",
            "authorized_data_contexts": {
                "supply_nodes": ["/network/nz/supply_nodes/ed7617df-4b10-4c8a-a05d-deadbeef0001"]
            }
        }"#;
        let user_info = serde_json::from_str::<UserInfo>(body)?;
        assert_eq!(user_info.authorized_data_contexts.supply_nodes.len(), 1);
        Ok(())
    }

    #[test]
    fn price_forecast_ok() -> Result {
        // language=json
        let body = r#"{
            "prices": [
                {
                    "starts_at": "2026-08-07T15:00:00+12:00",
                    "ends_at": "2026-08-07T15:30:00+12:00",
                    "price": {"value": "12.5", "unit_code": "cents"},
                    "components": []
                },
                {
                    "starts_at": "2026-08-07T14:30:00+12:00",
                    "ends_at": "2026-08-07T15:00:00+12:00",
                    "price": {"value": "3.5", "unit_code": "cents"},
                    "components": [
                        {"charge_setter": "A", "charge_method": "X", "value": "1.5"},
                        {"charge_setter": "B", "charge_method": "Y", "value": "2.0"}
                    ]
                },
                {
                    "starts_at": "2026-08-07T15:30:00+12:00",
                    "ends_at": "2026-08-07T16:00:00+12:00",
                    "price": {"value": "13.1", "unit_code": "cents"},
                    "components": []
                }
            ]
        }"#;
        let forecast = serde_json::from_str::<PriceForecast>(body)?;
        let current = forecast.current().context("empty forecast")?;

        assert_eq!(current.starts_at, "2026-08-07T14:30:00+12:00".parse::<DateTime<Utc>>()?);
        assert_relative_eq!(f64::from(current.price.value), 3.5);
        assert_eq!(current.components[0].field_name(), "A_X");
        assert_eq!(current.components[1].field_name(), "B_Y");
        assert_relative_eq!(f64::from(current.components[0].value), 1.5);
        assert_relative_eq!(f64::from(current.components[1].value), 2.0);
        Ok(())
    }

    #[test]
    fn usage_bucket_normalizes_to_utc() -> Result {
        // language=json
        let body = r#"{"started_at": "2026-08-07T14:30:00+12:00", "value": 0.42}"#;
        let bucket = serde_json::from_str::<UsageBucket>(body)?;
        assert_eq!(bucket.started_at.to_rfc3339(), "2026-08-07T02:30:00+00:00");
        assert_relative_eq!(f64::from(bucket.value), 0.42);
        Ok(())
    }

    #[test]
    fn detailed_interval_total_cost() -> Result {
        // language=json
        let body = r#"{
            "started_at": "2026-08-06T00:00:00+12:00",
            "price": "0.30",
            "units": "5"
        }"#;
        let interval = serde_json::from_str::<DetailedUsageInterval>(body)?;
        assert_relative_eq!(f64::from(interval.total_cost()), 1.50);
        Ok(())
    }
}

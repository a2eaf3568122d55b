use bon::Builder;
use chrono::{DateTime, Utc};
use influxdb::InfluxDbWriteable;

use crate::db::Measurement;

/// One half-hourly consumption bucket.
#[must_use]
#[derive(InfluxDbWriteable, Builder)]
pub struct Bucket {
    pub time: DateTime<Utc>,
    pub usage: f64,
}

impl Measurement for Bucket {
    const SERIES_NAME: &str = "PowerUsage";
}

/// One interval of a day's detailed usage breakdown.
#[must_use]
#[derive(InfluxDbWriteable, Builder)]
pub struct DetailedInterval {
    pub time: DateTime<Utc>,
    pub price: f64,
    pub units: f64,
    pub total_cost: f64,
}

impl Measurement for DetailedInterval {
    const SERIES_NAME: &str = "DetailedPowerUsage";
}

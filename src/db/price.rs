use bon::Builder;
use chrono::{DateTime, Utc};
use influxdb::{InfluxDbWriteable, Timestamp, WriteQuery};

use crate::{
    db::{Db, Measurement},
    prelude::*,
};

/// Per-component breakdown of the current predicted price.
///
/// The field set is dynamic: one field per (charge setter, charge method)
/// pair, so the query is assembled by hand instead of derived.
#[must_use]
#[derive(Builder)]
pub struct Components {
    pub time: DateTime<Utc>,
    pub fields: Vec<(String, f64)>,
}

impl Components {
    pub const SERIES_NAME: &str = "PredictedPrice.Components";

    fn into_write_query(self) -> WriteQuery {
        self.fields.into_iter().fold(
            Timestamp::from(self.time).into_query(Self::SERIES_NAME),
            |query, (name, value)| query.add_field(name, value),
        )
    }

    pub async fn insert_into(self, db: &Db) -> Result {
        db.write(self.into_write_query()).await
    }
}

/// The aggregate current predicted price.
#[must_use]
#[derive(InfluxDbWriteable, Builder)]
pub struct Total {
    pub time: DateTime<Utc>,
    pub total: f64,
}

impl Measurement for Total {
    const SERIES_NAME: &str = "PredictedPrice.Total";
}

#[cfg(test)]
mod tests {
    use influxdb::Query;

    use super::*;

    #[test]
    fn components_query_has_one_field_per_component() -> Result {
        let line = Components::builder()
            .time("2026-08-07T02:30:00Z".parse()?)
            .fields(vec![("A_X".to_string(), 1.5), ("B_Y".to_string(), 2.0)])
            .build()
            .into_write_query()
            .build()?
            .get();
        assert!(line.starts_with(Components::SERIES_NAME));
        assert!(line.contains("A_X=1.5"));
        assert!(line.contains("B_Y=2"));
        Ok(())
    }

    #[test]
    fn total_query_ok() -> Result {
        let line = Total::builder()
            .time("2026-08-07T02:30:00Z".parse()?)
            .total(3.5)
            .build()
            .into_write_query()
            .build()?
            .get();
        assert!(line.starts_with(Total::SERIES_NAME));
        assert!(line.contains("total=3.5"));
        Ok(())
    }
}

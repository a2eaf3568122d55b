pub mod price;
pub mod usage;

use influxdb::{Client, InfluxDbWriteable, WriteQuery};

use crate::{cli::InfluxArgs, prelude::*};

/// InfluxDB writer.
///
/// Construction performs no I/O; every point is written with an individual
/// HTTP request, and dropping the writer releases it.
#[must_use]
pub struct Db(Client);

impl Db {
    pub fn new(args: &InfluxArgs) -> Self {
        let mut client = Client::new(args.uri.to_string(), args.database.as_str());
        if let (Some(username), Some(password)) = (&args.username, &args.password) {
            client = client.with_auth(username.as_str(), password.as_str());
        }
        Self(client)
    }

    pub async fn insert<M: Measurement>(&self, measurement: M) -> Result {
        self.write(measurement.into_write_query()).await
    }

    #[instrument(skip_all)]
    pub async fn write(&self, query: WriteQuery) -> Result {
        self.0.query(query).await.context("failed to write the point to InfluxDB")?;
        Ok(())
    }
}

/// A point in a fixed series.
pub trait Measurement: InfluxDbWriteable + Sized {
    const SERIES_NAME: &str;

    fn into_write_query(self) -> WriteQuery {
        self.into_query(Self::SERIES_NAME)
    }
}

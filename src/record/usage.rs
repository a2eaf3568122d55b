use chrono::{Local, NaiveDate, TimeDelta};

use crate::{
    api::flick,
    cli::Args,
    db::{Db, usage},
    prelude::*,
};

/// Record one batch of half-hourly usage buckets covering the lookback window.
#[instrument(skip_all)]
pub async fn run_simple(args: &Args, db: &Db) -> Result {
    let look_back_days = args.look_back_days()?;

    let api = flick::Api::log_in(&args.flick.username, &args.flick.password).await?;
    let now = Local::now();
    let buckets = api.get_power_usage(now - TimeDelta::days(look_back_days), now).await?;
    for bucket in &buckets {
        db.insert(
            usage::Bucket::builder()
                .time(bucket.started_at)
                .usage(f64::from(bucket.value))
                .build(),
        )
        .await?;
    }

    info!(n_buckets = buckets.len(), "finished recording the power usage");
    Ok(())
}

/// Record per-interval price and usage, one calendar day at a time.
///
/// A failed day is logged and skipped; it never aborts the remaining days.
#[instrument(skip_all)]
pub async fn run_detailed(args: &Args, db: &Db) -> Result {
    let look_back_days = args.look_back_days()?;

    let api = flick::Api::log_in(&args.flick.username, &args.flick.password).await?;
    for date in candidate_days(Local::now().date_naive(), look_back_days) {
        if let Err(error) = record_day(&api, db, date).await {
            warn!(%date, "skipping the day: {error:#}");
        }
    }
    Ok(())
}

/// Candidate days counted down from `look_back_days` ago to today, inclusive.
fn candidate_days(today: NaiveDate, look_back_days: i64) -> impl Iterator<Item = NaiveDate> {
    (0..=look_back_days).rev().map(move |days_back| today - TimeDelta::days(days_back))
}

#[instrument(skip_all, fields(date = %date))]
async fn record_day(api: &flick::Api, db: &Db, date: NaiveDate) -> Result {
    let intervals = api.get_detailed_usage(date).await?;
    for interval in &intervals {
        db.insert(
            usage::DetailedInterval::builder()
                .time(interval.started_at)
                .price(f64::from(interval.price))
                .units(f64::from(interval.units))
                .total_cost(f64::from(interval.total_cost()))
                .build(),
        )
        .await?;
    }
    info!(n_intervals = intervals.len(), "recorded the day");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_days_run_oldest_to_today() -> Result {
        let today = NaiveDate::from_ymd_opt(2026, 8, 7).context("bad date")?;
        let days: Vec<NaiveDate> = candidate_days(today, 2).collect();
        assert_eq!(
            days,
            [
                NaiveDate::from_ymd_opt(2026, 8, 5).context("bad date")?,
                NaiveDate::from_ymd_opt(2026, 8, 6).context("bad date")?,
                today,
            ]
        );
        Ok(())
    }

    #[test]
    fn candidate_days_cover_the_window_inclusively() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        assert_eq!(candidate_days(today, 7).count(), 8);
    }
}

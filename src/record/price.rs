use crate::{
    api::flick,
    cli::FlickArgs,
    db::{Db, price},
    prelude::*,
};

/// Record the current predicted price for the account's first supply node.
#[instrument(skip_all)]
pub async fn run(args: &FlickArgs, db: &Db) -> Result {
    let api = flick::Api::log_in(&args.username, &args.password).await?;
    let user_info = api.get_user_info().await?;
    let supply_node = user_info
        .authorized_data_contexts
        .supply_nodes
        .first()
        .context("the account has no authorized supply nodes")?;

    let forecast = api.get_price_forecast(supply_node).await?;
    let current = forecast.current().context("the price forecast is empty")?;
    info!(starts_at = %current.starts_at, price = %current.price.value, "selected the current price");

    price::Components::builder()
        .time(current.starts_at)
        .fields(
            current
                .components
                .iter()
                .map(|component| (component.field_name(), f64::from(component.value)))
                .collect(),
        )
        .build()
        .insert_into(db)
        .await?;
    db.insert(
        price::Total::builder()
            .time(current.starts_at)
            .total(f64::from(current.price.value))
            .build(),
    )
    .await?;

    info!("finished recording the current power price");
    Ok(())
}

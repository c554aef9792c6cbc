//! One-shot lookup command.

use console::style;

use crate::cli::icons::error;
use crate::config::Settings;
use crate::models::EquipmentQuery;
use crate::server::FrontImageResponse;
use crate::services::EquipmentLookup;

/// Run a lookup and print the same JSON the HTTP endpoint returns.
pub async fn cmd_lookup(settings: &Settings, query: EquipmentQuery) -> anyhow::Result<()> {
    let lookup = EquipmentLookup::from_settings(settings)?;

    eprintln!(
        "{} Looking up {} {} {}",
        style("→").cyan(),
        query.manufacturer,
        query.model_no,
        query.equipment_type
    );

    let outcome = lookup.lookup(&query).await;
    for id in &outcome.unfetched {
        eprintln!("  {} No front image for {}", error(), id);
    }

    let response = FrontImageResponse::from_outcome(&query, outcome);
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}

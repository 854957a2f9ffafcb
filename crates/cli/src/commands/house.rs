use anyhow::Result;
use wifi_dash_client::ApiClient;
use wifi_dash_dashboard::HouseReport;

use crate::render;

pub(crate) async fn run(client: &ApiClient, house_id: &str, json: bool) -> Result<()> {
    let (metrics, recommendation) =
        tokio::join!(client.house_metrics(house_id), client.house_recommendation(house_id));
    let metrics = metrics?;
    let recommendation = recommendation.unwrap_or_else(|e| {
        tracing::warn!(house_id, error = %e, "recommendation unavailable");
        None
    });

    let report = HouseReport::build(house_id, &metrics, recommendation.as_ref());
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render::house_report(&report));
    }
    Ok(())
}

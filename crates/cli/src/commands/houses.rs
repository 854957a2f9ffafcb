use std::fmt::Write as _;

use anyhow::Result;
use wifi_dash_client::ApiClient;
use wifi_dash_core::HouseOption;

pub(crate) async fn run(client: &ApiClient) -> Result<()> {
    let houses = client.list_houses().await?;
    print!("{}", directory(&houses));
    Ok(())
}

/// Registered houses only; the "all houses" selector entry is not a house.
fn directory(houses: &[HouseOption]) -> String {
    let mut out = String::new();
    for house in houses {
        let Some(id) = house.filter() else { continue };
        let (owner, kind) = house.owner_and_kind();
        let _ = writeln!(out, "{id:<12} {owner:<24} {}", kind.unwrap_or("-"));
    }
    if out.is_empty() {
        out.push_str("no registered houses\n");
    }
    out
}

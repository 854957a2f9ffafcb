use anyhow::{Result, bail};
use wifi_dash_client::ApiClient;
use wifi_dash_dashboard::Dashboard;

use crate::render;

pub(crate) async fn run(client: ApiClient, house: Option<String>, page: usize, json: bool) -> Result<()> {
    let dashboard = Dashboard::new(client);
    dashboard.set_filter(house).await?;

    // Cursors are only revealed page by page, so walk up to the target.
    loop {
        let state = dashboard.snapshot().await.state;
        if state.page >= page {
            break;
        }
        if !state.has_next {
            bail!("page {page} does not exist, the listing ends at page {}", state.page);
        }
        dashboard.next_page().await?;
    }

    let snapshot = dashboard.snapshot().await;
    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        println!("{}", render::snapshot(&snapshot));
    }
    Ok(())
}

use std::str::FromStr;

use anyhow::{Result, anyhow};
use tokio::io::{AsyncBufReadExt, BufReader};
use wifi_dash_client::ApiClient;
use wifi_dash_dashboard::{Dashboard, DashboardError, Outcome};

use crate::render;

const HELP: &str = "commands: n(ext) | p(rev) | g <page> | r(efresh) | h <house|all> | q(uit)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PagerCommand {
    Next,
    Prev,
    GoTo(usize),
    Refresh,
    Filter(Option<String>),
    Help,
    Quit,
}

impl FromStr for PagerCommand {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let verb = parts.next().unwrap_or("");
        let arg = parts.next();
        match (verb, arg) {
            ("n" | "next", None) => Ok(Self::Next),
            ("p" | "prev", None) => Ok(Self::Prev),
            ("r" | "refresh", None) => Ok(Self::Refresh),
            ("q" | "quit" | "exit", None) => Ok(Self::Quit),
            ("?" | "help", None) => Ok(Self::Help),
            ("g" | "goto", Some(n)) => {
                n.parse().map(Self::GoTo).map_err(|_| anyhow!("not a page number: {n}"))
            },
            ("h" | "house", Some("all" | "*")) => Ok(Self::Filter(None)),
            ("h" | "house", Some(id)) => Ok(Self::Filter(Some(id.to_owned()))),
            _ => Err(anyhow!("unknown command: {}", line.trim())),
        }
    }
}

pub(crate) async fn run(client: ApiClient, house: Option<String>) -> Result<()> {
    let dashboard = Dashboard::new(client);

    let first = match house {
        None => dashboard.mount().await,
        Some(id) => {
            dashboard.load_houses().await;
            dashboard.set_filter(Some(id)).await
        },
    };
    for option in dashboard.houses().await {
        println!("{:<12} {}", option.filter().unwrap_or("all"), option.label);
    }
    report(&dashboard, first).await?;
    println!("{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let command = match line.parse::<PagerCommand>() {
            Ok(command) => command,
            Err(e) => {
                println!("{e}\n{HELP}");
                continue;
            },
        };
        let result = match command {
            PagerCommand::Quit => break,
            PagerCommand::Help => {
                println!("{HELP}");
                continue;
            },
            PagerCommand::Next => dashboard.next_page().await,
            PagerCommand::Prev => dashboard.prev_page().await,
            PagerCommand::GoTo(n) => dashboard.go_to_page(n).await,
            PagerCommand::Refresh => dashboard.refresh().await,
            PagerCommand::Filter(filter) => dashboard.set_filter(filter).await,
        };
        report(&dashboard, result).await?;
    }
    Ok(())
}

/// Prints the view after an operation. Only cursor invariant violations abort the pager.
async fn report(dashboard: &Dashboard<ApiClient>, result: Result<Outcome, DashboardError>) -> Result<()> {
    match result {
        Ok(_) => println!("{}", render::snapshot(&dashboard.snapshot().await)),
        Err(DashboardError::InvalidPageRequest { requested, current, reason }) => {
            println!("cannot go to page {requested} from page {current}: {reason}");
        },
        Err(e @ DashboardError::TransportFailure(_)) => {
            println!("{}", render::snapshot(&dashboard.snapshot().await));
            println!("{e} (r to retry)");
        },
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

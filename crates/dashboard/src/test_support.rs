//! Scripted [`SignalSource`] for controller tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::oneshot;
use wifi_dash_client::ClientError;
use wifi_dash_core::{Cursor, HouseOption, ListingQuery, SignalPage, SignalRecord};

use crate::source::SignalSource;

/// `count` newest-first records of one house with distinguishable metrics.
pub(crate) fn records(house: &str, count: usize) -> Vec<SignalRecord> {
    (0..count)
        .map(|i| SignalRecord {
            event_id: Some(format!("{house}-{i}")),
            house_id: Some(house.to_owned()),
            room: Some(if i % 2 == 0 { "Salon" } else { "Bedroom" }.to_owned()),
            link_speed_mbps: Some(100.0 + i as f64),
            latency_ms: Some(20.0),
            packet_loss_rate: Some((i % 4) as f64),
            ..SignalRecord::default()
        })
        .collect()
}

pub(crate) fn page_of(house: &str, count: usize, next: Option<&str>) -> SignalPage {
    SignalPage { results: records(house, count), next_cursor: next.map(Cursor::new) }
}

/// Serves fixed datasets per filter the way the listing endpoint pages them.
pub(crate) struct FakeSource {
    data: HashMap<Option<String>, Vec<SignalRecord>>,
    houses: Vec<HouseOption>,
    requests: Mutex<Vec<ListingQuery>>,
    gates: Mutex<HashMap<Option<String>, oneshot::Receiver<()>>>,
    failures: AtomicUsize,
    houses_fail: bool,
}

impl FakeSource {
    pub(crate) fn new() -> Self {
        Self {
            data: HashMap::new(),
            houses: Vec::new(),
            requests: Mutex::new(Vec::new()),
            gates: Mutex::new(HashMap::new()),
            failures: AtomicUsize::new(0),
            houses_fail: false,
        }
    }

    pub(crate) fn with_house(mut self, house: Option<&str>, count: usize) -> Self {
        let name = house.unwrap_or("ALL");
        self.data.insert(house.map(str::to_owned), records(name, count));
        if let Some(id) = house {
            self.houses.push(HouseOption { value: id.to_owned(), label: format!("House {id}") });
        }
        self
    }

    pub(crate) fn with_broken_directory(mut self) -> Self {
        self.houses_fail = true;
        self
    }

    /// Holds the next request for `filter` until the returned sender fires.
    pub(crate) fn gate(&self, filter: Option<&str>) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(filter.map(str::to_owned), rx);
        tx
    }

    /// Makes the next `n` listing requests fail with 503.
    pub(crate) fn fail_next(&self, n: usize) {
        self.failures.store(n, Ordering::SeqCst);
    }

    pub(crate) fn requests(&self) -> Vec<ListingQuery> {
        self.requests.lock().unwrap().clone()
    }

    fn paginate(&self, query: &ListingQuery) -> SignalPage {
        let all = self.data.get(&query.house_id).map(Vec::as_slice).unwrap_or(&[]);
        let offset = query
            .cursor
            .as_ref()
            .and_then(|c| c.as_str().rsplit(':').next())
            .and_then(|o| o.parse::<usize>().ok())
            .unwrap_or(0);
        let end = (offset + query.limit).min(all.len());
        let results = all.get(offset..end).unwrap_or(&[]).to_vec();
        let label = query.house_id.as_deref().unwrap_or("all");
        let next_cursor =
            (results.len() >= query.limit).then(|| Cursor::new(format!("{label}:{end}")));
        SignalPage { results, next_cursor }
    }
}

#[async_trait]
impl SignalSource for FakeSource {
    async fn fetch_page(&self, query: &ListingQuery) -> Result<SignalPage, ClientError> {
        self.requests.lock().unwrap().push(query.clone());
        let gate = self.gates.lock().unwrap().remove(&query.house_id);
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        let failing = self
            .failures
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if failing {
            return Err(ClientError::HttpStatus { code: 503, body: "Service Unavailable".to_owned() });
        }
        Ok(self.paginate(query))
    }

    async fn list_houses(&self) -> Result<Vec<HouseOption>, ClientError> {
        if self.houses_fail {
            return Err(ClientError::HttpStatus { code: 500, body: "boom".to_owned() });
        }
        let mut houses = vec![HouseOption { value: String::new(), label: "All houses".to_owned() }];
        houses.extend(self.houses.iter().cloned());
        Ok(houses)
    }
}

//! Statistics API.

use crate::client::DepotClient;
use crate::error::Result;
use crate::types::DashboardStats;

/// Statistics API client.
pub struct StatisticsApi {
    client: DepotClient,
}

impl StatisticsApi {
    pub(crate) fn new(client: DepotClient) -> Self {
        Self { client }
    }

    /// Dashboard aggregates, optionally narrowed to a date range.
    pub async fn dashboard(
        &self,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> Result<DashboardStats> {
        let mut query: Vec<(&str, &str)> = Vec::new();
        if let Some(start) = start_date {
            query.push(("startDate", start));
        }
        if let Some(end) = end_date {
            query.push(("endDate", end));
        }
        self.client
            .get_with_query("statistics/dashboard", &query)
            .await
    }
}

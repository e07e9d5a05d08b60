use super::{Table, TabularStore};
use crate::common::error::{CatalogError, Result};
use crate::config::StoreConfig;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};

/// Snowflake SQL API (v2) client.
///
/// Each query is submitted synchronously; results spread over several
/// partitions are fetched one by one and concatenated.
pub struct SnowflakeStore {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
    token_type: String,
    config: StoreConfig,
}

#[derive(Debug, Serialize)]
struct StatementRequest<'a> {
    statement: &'a str,
    timeout: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    database: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    schema: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    warehouse: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StatementResponse {
    result_set_meta_data: Option<ResultSetMetaData>,
    #[serde(default)]
    data: Vec<Vec<Option<String>>>,
    statement_handle: Option<String>,
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResultSetMetaData {
    row_type: Vec<ColumnType>,
    #[serde(default)]
    partition_info: Vec<PartitionInfo>,
}

#[derive(Debug, Deserialize)]
struct ColumnType {
    name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PartitionInfo {
    #[serde(default)]
    row_count: u64,
}

#[derive(Debug, Deserialize)]
struct PartitionResponse {
    #[serde(default)]
    data: Vec<Vec<Option<String>>>,
}

impl SnowflakeStore {
    pub fn new(config: StoreConfig, token: Option<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("art_catalog/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let base_url = match &config.base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("https://{}.snowflakecomputing.com", config.account),
        };

        Ok(Self {
            client,
            base_url,
            token,
            token_type: config.token_type.clone(),
            config,
        })
    }

    fn token(&self) -> Result<&str> {
        self.token.as_deref().ok_or_else(|| {
            CatalogError::Config(format!(
                "no Snowflake token; set {}",
                self.config.token_env
            ))
        })
    }

    fn authorized(&self, request: reqwest::RequestBuilder, token: &str) -> reqwest::RequestBuilder {
        request
            .bearer_auth(token)
            .header("X-Snowflake-Authorization-Token-Type", &self.token_type)
            .header(reqwest::header::ACCEPT, "application/json")
    }

    async fn fetch_partition(&self, token: &str, handle: &str, partition: usize) -> Result<Vec<Vec<Option<String>>>> {
        let url = format!("{}/api/v2/statements/{}", self.base_url, handle);
        let response = self
            .authorized(self.client.get(url), token)
            .query(&[("partition", partition)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CatalogError::store(format!(
                "partition {} of statement {} returned {}",
                partition,
                handle,
                response.status()
            )));
        }

        let body: PartitionResponse = response.json().await?;
        Ok(body.data)
    }
}

/// Turn the first page of a statement response into a table.
/// Returns the statement handle and partition count when more pages exist.
fn decode_statement(response: StatementResponse) -> Result<(Table, Option<(String, usize)>)> {
    let meta = response.result_set_meta_data.ok_or_else(|| {
        CatalogError::store(format!(
            "statement returned no result set: {}",
            response.message.unwrap_or_default()
        ))
    })?;

    let columns = meta.row_type.into_iter().map(|c| c.name).collect();
    let table = Table {
        columns,
        rows: response.data,
    };

    let partitions = meta.partition_info.len();
    let remaining = match response.statement_handle {
        Some(handle) if partitions > 1 => Some((handle, partitions)),
        _ => None,
    };

    debug!(
        "Decoded {} rows across {} partitions (expected {})",
        table.len(),
        partitions.max(1),
        meta.partition_info.iter().map(|p| p.row_count).sum::<u64>()
    );
    Ok((table, remaining))
}

#[async_trait]
impl TabularStore for SnowflakeStore {
    #[instrument(skip(self))]
    async fn query(&self, sql: &str) -> Result<Table> {
        let token = self.token()?;
        let request = StatementRequest {
            statement: sql,
            timeout: self.config.timeout_seconds,
            database: self.config.database.as_deref(),
            schema: self.config.schema.as_deref(),
            warehouse: self.config.warehouse.as_deref(),
            role: self.config.role.as_deref(),
        };

        let url = format!("{}/api/v2/statements", self.base_url);
        let response = self
            .authorized(self.client.post(url), token)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::ACCEPTED {
            return Err(CatalogError::store(
                "statement still executing after the request timeout",
            ));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<StatementResponse>(&body)
                .ok()
                .and_then(|r| r.message)
                .unwrap_or(body);
            return Err(CatalogError::store(format!("{}: {}", status, message)));
        }

        let body: StatementResponse = response.json().await?;
        let (mut table, remaining) = decode_statement(body)?;

        if let Some((handle, partitions)) = remaining {
            for partition in 1..partitions {
                let rows = self.fetch_partition(token, &handle, partition).await?;
                table.rows.extend(rows);
            }
        }

        debug!("Query returned {} rows", table.len());
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> StatementResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_decode_single_partition() {
        let response = parse(json!({
            "code": "090001",
            "statementHandle": "01b2-0000",
            "message": "Statement executed successfully.",
            "resultSetMetaData": {
                "numRows": 2,
                "rowType": [
                    {"name": "DANCE_NAME_SF", "type": "text"},
                    {"name": "DANCE_REGION_STATE", "type": "text"},
                    {"name": "DANCE_DESC", "type": "text"}
                ],
                "partitionInfo": [{"rowCount": 2, "uncompressedSize": 120}]
            },
            "data": [
                ["Bihu", "Assam", "Folk dance of the Assamese new year."],
                ["Garba", "Gujarat", null]
            ]
        }));

        let (table, remaining) = decode_statement(response).unwrap();
        assert_eq!(table.columns, vec!["DANCE_NAME_SF", "DANCE_REGION_STATE", "DANCE_DESC"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[1][2], None);
        assert!(remaining.is_none());
    }

    #[test]
    fn test_decode_reports_extra_partitions() {
        let response = parse(json!({
            "statementHandle": "01b2-0001",
            "resultSetMetaData": {
                "rowType": [{"name": "CRAFT_NAME_SF"}],
                "partitionInfo": [{"rowCount": 1}, {"rowCount": 1}, {"rowCount": 1}]
            },
            "data": [["Dhokra"]]
        }));

        let (table, remaining) = decode_statement(response).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(remaining, Some(("01b2-0001".to_string(), 3)));
    }

    #[test]
    fn test_decode_without_result_set_fails() {
        let response = parse(json!({
            "code": "002003",
            "message": "SQL compilation error: Object 'DANCE' does not exist."
        }));

        let err = decode_statement(response).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[tokio::test]
    async fn test_query_without_token_fails_before_network() {
        let store = SnowflakeStore::new(StoreConfig::default(), None).unwrap();
        let err = store.query("SELECT 1").await.unwrap_err();
        assert!(matches!(err, CatalogError::Config(_)));
    }

    #[test]
    fn test_base_url_from_account() {
        let config = StoreConfig {
            account: "xy12345.ap-south-1".to_string(),
            ..StoreConfig::default()
        };
        let store = SnowflakeStore::new(config, None).unwrap();
        assert_eq!(store.base_url, "https://xy12345.ap-south-1.snowflakecomputing.com");
    }
}

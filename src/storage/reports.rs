//! Pool report files

use anyhow::Result;
use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use crate::{
    errors::{EngineError, EngineResult},
    types::{HistoricalDataPoint, PoolMetrics, RawPool},
    validation::parse_pool,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolReport<'a> {
    pub generated_at: chrono::DateTime<Utc>,
    pub pool_count: usize,
    pub pools: &'a [PoolMetrics],
}

fn read_json(path: &Path) -> EngineResult<Value> {
    let content = fs::read_to_string(path).map_err(|source| EngineError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| EngineError::DataParsing {
        context: format!("{} is not valid JSON", path.display()),
        source,
    })
}

/// Load a JSON array of pools. Entries that are not pool-shaped objects are skipped.
pub fn load_pools(path: &Path) -> EngineResult<Vec<RawPool>> {
    let entries = match read_json(path)? {
        Value::Array(entries) => entries,
        Value::Object(mut wrapper) => match wrapper.remove("pools") {
            Some(Value::Array(entries)) => entries,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    };

    let total = entries.len();
    let pools: Vec<RawPool> = entries.iter().filter_map(parse_pool).collect();
    if pools.len() < total {
        warn!("Skipped {} malformed pool entries in {}", total - pools.len(), path.display());
    }
    Ok(pools)
}

/// Load historical series keyed by pool id.
pub fn load_history(path: &Path) -> EngineResult<HashMap<String, Vec<HistoricalDataPoint>>> {
    let value = read_json(path)?;
    serde_json::from_value(value).map_err(|source| EngineError::DataParsing {
        context: format!("{} must map pool ids to historical data points", path.display()),
        source,
    })
}

pub fn save_report(dir: &Path, metrics: &[PoolMetrics]) -> Result<PathBuf> {
    let generated_at = Utc::now();
    let filename = dir.join(format!(
        "pool_metrics_{}.json",
        generated_at.format("%Y-%m-%d_%H%M%S")
    ));

    let report = PoolReport {
        generated_at,
        pool_count: metrics.len(),
        pools: metrics,
    };
    fs::write(&filename, serde_json::to_string_pretty(&report)?)?;

    info!(
        path = %filename.display(),
        pools = metrics.len(),
        "Saved pool metrics report"
    );

    Ok(filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("pool-rentability-{}-{}", std::process::id(), name));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn loads_pool_array_skipping_garbage() {
        let path = temp_file(
            "pools.json",
            r#"[{"id": "a", "address": "0x1", "totalValueLockedUSD": "10"}, 42, null, {"id": "b"}]"#,
        );
        let pools = load_pools(&path).unwrap();
        assert_eq!(pools.len(), 2);
        assert_eq!(pools[0].id(), "a");
        fs::remove_file(path).ok();
    }

    #[test]
    fn loads_wrapped_pool_list() {
        let path = temp_file("wrapped.json", r#"{"pools": [{"id": "a"}]}"#);
        assert_eq!(load_pools(&path).unwrap().len(), 1);
        fs::remove_file(path).ok();
    }

    #[test]
    fn loads_history_by_pool_id() {
        let path = temp_file(
            "history.json",
            r#"{"a": [{"timestamp": "1700000000000", "feesInUSD": "1", "volumeInUSD": "2", "totalValueLockedInUSD": "3"}]}"#,
        );
        let history = load_history(&path).unwrap();
        assert_eq!(history["a"].len(), 1);
        fs::remove_file(path).ok();
    }

    #[test]
    fn saves_dated_report_into_given_dir() {
        let dir = std::env::temp_dir().join(format!("pool-rentability-reports-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();

        let path = save_report(&dir, &[]).unwrap();
        assert!(path.starts_with(&dir));
        let saved: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved["poolCount"], 0);
        assert!(saved["generatedAt"].is_string());
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn reports_missing_and_invalid_files() {
        let missing = std::env::temp_dir().join("pool-rentability-does-not-exist.json");
        assert!(matches!(load_pools(&missing), Err(EngineError::Io { .. })));

        let path = temp_file("broken.json", "{not json");
        assert!(matches!(load_history(&path), Err(EngineError::DataParsing { .. })));
        fs::remove_file(path).ok();
    }
}

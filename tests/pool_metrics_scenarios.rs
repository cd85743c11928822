use pool_rentability::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::json;
use std::collections::HashMap;

fn pool(value: serde_json::Value) -> RawPool {
    serde_json::from_value(value).unwrap()
}

fn weth_usdc_pool() -> RawPool {
    pool(json!({
        "id": "weth-usdc-030",
        "address": "0x88e6a0c2ddd26feeb64f039a2c41296fcb3f5640",
        "chain": {"id": 8453, "name": "base"},
        "provider": {"name": "uniswap-v3"},
        "fee": 0.3,
        "totalValueLockedUSD": "100000",
        "tokens": [
            {"symbol": "weth", "name": "Wrapped Ether", "address": "0x42", "decimals": 18, "poolShareInPercentage": 60},
            {"symbol": "usdc", "name": "USD Coin", "address": "0x83", "decimals": 6, "poolShareInPercentage": 40}
        ],
        "stats": {"rangeInDays": 30, "feesInUSD": "500", "volumeInUSD": "20000", "transactionsCount": 1200}
    }))
}

#[test]
fn end_to_end_stats_scenario() {
    let metrics = process_pool_metrics(&weth_usdc_pool());

    assert_eq!(metrics.tvl, dec!(100000));
    assert!((metrics.fees_24h - dec!(16.67)).abs() < dec!(0.01));
    assert!((metrics.volume_24h - dec!(666.67)).abs() < dec!(0.01));
    let expected_apr = dec!(500) * dec!(365) / (dec!(100000) * dec!(30)) * dec!(100);
    assert!((metrics.apr - expected_apr).abs() < dec!(0.000001));
    assert!(metrics.formatted.composition.contains("(60.00%)"));
    assert!(metrics.formatted.composition.contains("(40.00%)"));
    assert_eq!(metrics.composition.token0.symbol, "WETH");
}

#[test]
fn validator_is_total() {
    assert!(!is_valid_pool_value(&serde_json::Value::Null));
    assert!(!is_valid_pool_value(&json!({})));
    assert!(!is_valid_pool_value(&json!({"id": "x", "address": "0x1", "totalValueLockedUSD": "5"})));
    assert!(!is_valid_pool(&RawPool::default()));
    assert!(is_valid_pool(&weth_usdc_pool()));
}

#[test]
fn composition_defaults() {
    let expected = PoolComposition {
        token0: TokenShare { symbol: "TOKEN1".into(), percentage: dec!(50) },
        token1: TokenShare { symbol: "TOKEN2".into(), percentage: dec!(50) },
    };
    assert_eq!(calculate_pool_composition(&[]), expected);
    assert_eq!(calculate_pool_composition(RawPool::default().tokens()), expected);
}

#[test]
fn formatter_reference_values() {
    assert_eq!(format_currency(dec!(1_500_000)), "$1.5M");
    assert_eq!(format_currency(dec!(2_500)), "$2.5K");
    assert_eq!(format_currency(dec!(42.5)), "$42.50");
    assert_eq!(format_currency(dec!(0.005)), "$0.0050");
    assert_eq!(format_currency(Decimal::ZERO), "$0.00");
    assert_eq!(format_currency(dec!(-5)), "$0.00");
    assert_eq!(format_percentage(dec!(6.0833)), "6.08%");
}

#[test]
fn historical_tier_wins_over_stats() {
    let mut pool = weth_usdc_pool();
    pool.stats = Some(PoolStats {
        fees_in_usd: Some("999".into()),
        ..PoolStats::default()
    });
    let history: Vec<HistoricalDataPoint> = serde_json::from_value(json!([
        {"feesInUSD": "10", "volumeInUSD": "100", "totalValueLockedInUSD": "1000", "timestamp": "1700000000000"}
    ]))
    .unwrap();

    let result = calculate_pool_rentability(&pool, Some(history.as_slice()));
    assert_eq!(result.calculation_method, CalculationMethod::Historical);
    assert_eq!(result.total_fees, dec!(10));
    assert_eq!(result.average_tvl, dec!(1000));
}

#[test]
fn rentability_tiers_degrade_in_order() {
    let with_stats = weth_usdc_pool();
    assert_eq!(
        calculate_pool_rentability(&with_stats, None).calculation_method,
        CalculationMethod::Estimated
    );

    let mut volume_only = weth_usdc_pool();
    volume_only.stats = Some(PoolStats {
        volume_in_usd: Some("30000".into()),
        ..PoolStats::default()
    });
    let fallback = calculate_pool_rentability(&volume_only, None);
    assert_eq!(fallback.calculation_method, CalculationMethod::Fallback);
    // 1000/day volume at 0.3% on 100k TVL
    assert!((fallback.apr - dec!(1.095)).abs() < dec!(0.000001));
}

#[test]
fn sort_keeps_tied_pools_in_input_order() {
    let mut first = weth_usdc_pool();
    first.id = Some("first".into());
    let mut second = weth_usdc_pool();
    second.id = Some("second".into());

    let metrics = vec![process_pool_metrics(&first), process_pool_metrics(&second)];
    let sorted = sort_pools(metrics, SortBy::Apr, SortOrder::Desc);
    assert_eq!(sorted[0].id, "first");
    assert_eq!(sorted[1].id, "second");
}

#[test]
fn serialized_metrics_use_camel_case() {
    let metrics = build_pool_metrics(&[weth_usdc_pool()], &HashMap::new(), &EngineConfig::default());
    let value = serde_json::to_value(&metrics[0]).unwrap();
    assert!(value.get("volume24h").is_some());
    assert!(value.get("fees24h").is_some());
    assert_eq!(value["formatted"]["tvl"], "$100.0K");
    assert_eq!(value["composition"]["token1"]["symbol"], "USDC");
}

//! Token-pair composition of a pool

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use crate::{
    types::{PoolComposition, RawToken, TokenShare, ToNumber},
    utils::fixed,
};

const PLACEHOLDER_SYMBOLS: [&str; 2] = ["TOKEN1", "TOKEN2"];
const EVEN_SHARE: Decimal = dec!(50);

/// Split between the first two tokens, by position.
///
/// Shares are passed through as reported; they are not forced to sum to 100.
pub fn calculate_pool_composition(tokens: &[RawToken]) -> PoolComposition {
    if tokens.len() < 2 {
        return PoolComposition {
            token0: placeholder_share(0),
            token1: placeholder_share(1),
        };
    }

    PoolComposition {
        token0: token_share(&tokens[0], 0),
        token1: token_share(&tokens[1], 1),
    }
}

fn placeholder_share(position: usize) -> TokenShare {
    TokenShare {
        symbol: PLACEHOLDER_SYMBOLS[position].to_string(),
        percentage: EVEN_SHARE,
    }
}

fn token_share(token: &RawToken, position: usize) -> TokenShare {
    let symbol = token
        .symbol
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(str::to_uppercase)
        .unwrap_or_else(|| PLACEHOLDER_SYMBOLS[position].to_string());

    let percentage = match &token.pool_share_in_percentage {
        Some(share) if share.is_truthy() => share.to_number(),
        _ => EVEN_SHARE,
    };

    TokenShare { symbol, percentage }
}

/// `"weth (60.00%) / usdc (40.00%)"`
pub fn format_composition(composition: &PoolComposition) -> String {
    format!(
        "{} ({}%) / {} ({}%)",
        composition.token0.symbol.to_lowercase(),
        fixed(composition.token0.percentage, 2),
        composition.token1.symbol.to_lowercase(),
        fixed(composition.token1.percentage, 2),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(symbol: Option<&str>, share: Option<f64>) -> RawToken {
        RawToken {
            symbol: symbol.map(str::to_string),
            pool_share_in_percentage: share.map(Into::into),
            ..Default::default()
        }
    }

    #[test]
    fn defaults_to_even_split() {
        let composition = calculate_pool_composition(&[]);
        assert_eq!(composition.token0, TokenShare { symbol: "TOKEN1".into(), percentage: dec!(50) });
        assert_eq!(composition.token1, TokenShare { symbol: "TOKEN2".into(), percentage: dec!(50) });

        let single = calculate_pool_composition(&[token(Some("weth"), Some(100.0))]);
        assert_eq!(single, composition);
    }

    #[test]
    fn uses_position_and_uppercases_symbols() {
        let tokens = [token(Some("usdc"), Some(40.0)), token(Some("weth"), Some(60.0))];
        let composition = calculate_pool_composition(&tokens);
        assert_eq!(composition.token0.symbol, "USDC");
        assert_eq!(composition.token0.percentage, dec!(40));
        assert_eq!(composition.token1.symbol, "WETH");
        assert_eq!(composition.token1.percentage, dec!(60));
    }

    #[test]
    fn fills_missing_fields_per_token() {
        let tokens = [token(None, None), token(Some("dai"), Some(70.0))];
        let composition = calculate_pool_composition(&tokens);
        assert_eq!(composition.token0.symbol, "TOKEN1");
        assert_eq!(composition.token0.percentage, dec!(50));
    }

    #[test]
    fn does_not_renormalize_shares() {
        let tokens = [token(Some("a"), Some(70.0)), token(Some("b"), Some(45.0))];
        let composition = calculate_pool_composition(&tokens);
        assert_eq!(composition.token0.percentage + composition.token1.percentage, dec!(115));
    }

    #[test]
    fn formats_lowercase_with_two_decimals() {
        let tokens = [token(Some("WETH"), Some(60.0)), token(Some("USDC"), Some(40.0))];
        let formatted = format_composition(&calculate_pool_composition(&tokens));
        assert_eq!(formatted, "weth (60.00%) / usdc (40.00%)");
    }
}

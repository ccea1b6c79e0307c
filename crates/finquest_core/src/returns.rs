//! Return model: stochastic monthly returns per asset category

use crate::config::{ReturnBand, ReturnTable};
use crate::model::{AssetCategory, CategoryAmounts};
use crate::random::RandomSource;

/// Draw a monthly rate from `band`.
pub fn sample_rate<R: RandomSource + ?Sized>(band: ReturnBand, rng: &mut R) -> f64 {
    if band.is_flat() {
        return band.low;
    }
    rng.uniform(band.low, band.high)
}

/// Return earned on `principal` in `category` for one month.
///
/// Savings always returns exactly zero and consumes no draw.
pub fn compute_return<R: RandomSource + ?Sized>(
    principal: f64,
    category: AssetCategory,
    table: &ReturnTable,
    rng: &mut R,
) -> f64 {
    match table.band(category) {
        Some(band) => principal * sample_rate(band, rng),
        None => 0.0,
    }
}

/// Returns for every funded (positive balance) category, drawn in `AssetCategory::ALL` order.
pub fn sample_returns<R: RandomSource + ?Sized>(
    portfolio: &CategoryAmounts,
    table: &ReturnTable,
    rng: &mut R,
) -> CategoryAmounts {
    CategoryAmounts::from_fn(|category| {
        let principal = portfolio.get(category);
        if principal > 0.0 {
            compute_return(principal, category, table, rng)
        } else {
            0.0
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{ScriptedRandom, SeededRandom};

    #[test]
    fn test_rates_stay_within_bands() {
        let table = ReturnTable::default();
        let mut rng = SeededRandom::new(7);
        for category in AssetCategory::ALL {
            let Some(band) = table.band(category) else {
                continue;
            };
            for _ in 0..2_000 {
                let r = compute_return(1.0, category, &table, &mut rng);
                assert!(
                    r >= band.low && r < band.high,
                    "{category} rate {r} outside [{}, {})",
                    band.low,
                    band.high
                );
            }
        }
    }

    #[test]
    fn test_band_edges_follow_draw() {
        let table = ReturnTable::default();

        let mut low = ScriptedRandom::constant(0.0);
        assert!((compute_return(1_000.0, AssetCategory::Stocks, &table, &mut low) + 50.0).abs() < 1e-9);

        let mut mid = ScriptedRandom::constant(0.5);
        let sip = compute_return(10_000.0, AssetCategory::Sip, &table, &mut mid);
        assert!((sip - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_savings_never_returns_and_draws_nothing() {
        let table = ReturnTable::default();
        let mut rng = ScriptedRandom::constant(0.9);
        for balance in [0.0, 1.0, 1_000_000.0, -50.0] {
            assert_eq!(
                compute_return(balance, AssetCategory::Savings, &table, &mut rng),
                0.0
            );
        }
        assert_eq!(rng.consumed(), 0);
    }

    #[test]
    fn test_negative_principal_follows_formula() {
        let table = ReturnTable::default();
        let mut rng = ScriptedRandom::constant(0.5);
        let r = compute_return(-1_000.0, AssetCategory::Sip, &table, &mut rng);
        assert!((r + 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_only_funded_categories_draw() {
        let table = ReturnTable::default();
        let portfolio = CategoryAmounts::default()
            .with(AssetCategory::Gold, 1_000.0)
            .with(AssetCategory::Savings, 5_000.0);
        let mut rng = ScriptedRandom::constant(0.25);

        let returns = sample_returns(&portfolio, &table, &mut rng);

        assert_eq!(rng.consumed(), 1);
        assert!((returns.gold - 1_000.0 * (-0.01 + 0.04 * 0.25)).abs() < 1e-9);
        assert_eq!(returns.savings, 0.0);
        assert_eq!(returns.sip, 0.0);
    }
}

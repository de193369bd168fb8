//! Parallel batch analysis.
//!
//! Analyses are independent per contract: no component reads or
//! writes shared mutable state, so a batch fans out across the rayon
//! thread pool with no synchronisation. Realised volatility is
//! estimated once per underlying history and shared by every contract
//! in the batch.

use rayon::prelude::*;

use vol_core::types::{MarketSnapshot, OptionContract};

use crate::analyzer::{VolAnalysis, VolSpreadStrategy};

impl VolSpreadStrategy {
    /// Analyses a batch of contracts against one underlying.
    ///
    /// Results are returned in the contracts' input order.
    pub fn analyze_batch(
        &self,
        options: &[OptionContract],
        market: &MarketSnapshot,
        historical_prices: &[f64],
    ) -> Vec<VolAnalysis> {
        let realized = self.estimator().estimate(historical_prices);
        options
            .par_iter()
            .map(|option| self.analyze_with_realized(option, market, realized))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vol_core::types::OptionKind;

    const HISTORY: [f64; 5] = [100.0, 102.0, 101.0, 103.0, 99.0];

    fn demo_market() -> MarketSnapshot {
        MarketSnapshot::new(100.0, 0.01, 0.0).unwrap()
    }

    fn demo_contracts() -> Vec<OptionContract> {
        vec![
            OptionContract::new(100.0, 0.25, OptionKind::Call, 3.50).unwrap(),
            OptionContract::new(100.0, 0.25, OptionKind::Put, 2.00).unwrap(),
            OptionContract::new(105.0, 0.5, OptionKind::Call, 2.80).unwrap(),
        ]
    }

    // ==========================================================
    // Batch Analysis Tests
    // ==========================================================

    #[test]
    fn test_empty_batch() {
        let strategy = VolSpreadStrategy::with_defaults();
        let results = strategy.analyze_batch(&[], &demo_market(), &HISTORY);
        assert!(results.is_empty());
    }

    #[test]
    fn test_batch_preserves_input_order() {
        let market = demo_market();
        let contracts = demo_contracts();
        let strategy = VolSpreadStrategy::with_defaults();

        let results = strategy.analyze_batch(&contracts, &market, &HISTORY);

        assert_eq!(results.len(), contracts.len());
        for (contract, result) in contracts.iter().zip(&results) {
            let expected = strategy.analyze(contract, &market, &HISTORY);
            assert_eq!(*result, expected);
        }
    }

    #[test]
    fn test_batch_matches_sequential_at_scale() {
        let market = demo_market();
        let strategy = VolSpreadStrategy::with_defaults();

        let contracts: Vec<OptionContract> = (0..64)
            .map(|i| {
                let strike = 90.0 + (i as f64) * 0.5;
                let kind = if i % 2 == 0 {
                    OptionKind::Call
                } else {
                    OptionKind::Put
                };
                OptionContract::new(strike, 0.25, kind, 2.0 + (i as f64) * 0.05).unwrap()
            })
            .collect();

        let parallel = strategy.analyze_batch(&contracts, &market, &HISTORY);
        let sequential: Vec<VolAnalysis> = contracts
            .iter()
            .map(|c| strategy.analyze(c, &market, &HISTORY))
            .collect();

        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_batch_shares_realized_estimate() {
        let market = demo_market();
        let results = VolSpreadStrategy::with_defaults().analyze_batch(
            &demo_contracts(),
            &market,
            &HISTORY,
        );

        let first = results[0].realized;
        assert!(results.iter().all(|r| r.realized == first));
    }
}

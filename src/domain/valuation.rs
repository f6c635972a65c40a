//! Portfolio valuation aggregation over current holdings.

use std::collections::BTreeMap;

use super::position::{AssetType, Position};

/// Current value summed per asset type.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeValueRow {
    pub asset_type: AssetType,
    pub total_value: f64,
}

/// Current value summed per (asset type, account); feeds a two-level
/// hierarchical breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct SunburstRow {
    pub asset_type: AssetType,
    pub portfolio_name: String,
    pub total_value: f64,
}

/// Quantity and current value summed per (sector, instrument name).
#[derive(Debug, Clone, PartialEq)]
pub struct TreemapRow {
    pub sector: String,
    pub name: String,
    pub total_quantity: f64,
    pub total_value: f64,
}

/// Per-instrument roll-up across accounts. Prices are means over duplicate
/// rows for the same ticker, which assumes near-equal values across accounts.
#[derive(Debug, Clone, PartialEq)]
pub struct TickerRow {
    pub ticker: String,
    pub name: String,
    pub asset_type: AssetType,
    pub total_quantity: f64,
    pub average_price: f64,
    pub current_price: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValuationReport {
    pub total_value: f64,
    pub total_return_pct: f64,
    pub by_type: Vec<TypeValueRow>,
    pub sunburst: Vec<SunburstRow>,
    pub treemap: Vec<TreemapRow>,
    pub by_ticker: Vec<TickerRow>,
}

fn account_selected(account_filter: &[String], portfolio_name: &str) -> bool {
    account_filter.is_empty() || account_filter.iter().any(|a| a == portfolio_name)
}

/// Aggregate current holdings into portfolio totals and grouped roll-ups.
///
/// An empty `account_filter` means all accounts. Empty filtered input is not
/// an error: sums default to zero, grouped outputs are empty and the return
/// percentage falls to its zero guard.
pub fn aggregate_portfolio(positions: &[Position], account_filter: &[String]) -> ValuationReport {
    let mut total_current = 0.0_f64;
    let mut total_invested = 0.0_f64;

    let mut by_type: BTreeMap<AssetType, f64> = BTreeMap::new();
    let mut sunburst: BTreeMap<(AssetType, String), f64> = BTreeMap::new();
    let mut treemap: BTreeMap<(String, String), (f64, f64)> = BTreeMap::new();
    // (ticker, name, type) → (quantity, avg price sum, cur price sum, rows)
    let mut by_ticker: BTreeMap<(String, String, AssetType), (f64, f64, f64, usize)> =
        BTreeMap::new();

    for pos in positions {
        if !account_selected(account_filter, &pos.portfolio_name) {
            continue;
        }

        let current = pos.current_value();
        total_current += current;
        total_invested += pos.investment_value();

        *by_type.entry(pos.asset_type).or_default() += current;
        *sunburst
            .entry((pos.asset_type, pos.portfolio_name.clone()))
            .or_default() += current;

        let cell = treemap
            .entry((pos.sector.clone(), pos.name.clone()))
            .or_insert((0.0, 0.0));
        cell.0 += pos.quantity;
        cell.1 += current;

        let cell = by_ticker
            .entry((pos.ticker.clone(), pos.name.clone(), pos.asset_type))
            .or_insert((0.0, 0.0, 0.0, 0));
        cell.0 += pos.quantity;
        cell.1 += pos.average_price;
        cell.2 += pos.current_price;
        cell.3 += 1;
    }

    let total_return_pct = if total_invested > 0.0 {
        (total_current - total_invested) / total_invested * 100.0
    } else {
        0.0
    };

    ValuationReport {
        total_value: total_current,
        total_return_pct,
        by_type: by_type
            .into_iter()
            .map(|(asset_type, total_value)| TypeValueRow {
                asset_type,
                total_value,
            })
            .collect(),
        sunburst: sunburst
            .into_iter()
            .map(|((asset_type, portfolio_name), total_value)| SunburstRow {
                asset_type,
                portfolio_name,
                total_value,
            })
            .collect(),
        treemap: treemap
            .into_iter()
            .map(|((sector, name), (total_quantity, total_value))| TreemapRow {
                sector,
                name,
                total_quantity,
                total_value,
            })
            .collect(),
        by_ticker: by_ticker
            .into_iter()
            .map(|((ticker, name, asset_type), (quantity, avg_sum, cur_sum, rows))| {
                let n = rows as f64;
                TickerRow {
                    ticker,
                    name,
                    asset_type,
                    total_quantity: quantity,
                    average_price: avg_sum / n,
                    current_price: cur_sum / n,
                }
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sector::classify_sector;

    fn pos(
        account: &str,
        ticker: &str,
        name: &str,
        asset_type: AssetType,
        quantity: f64,
        average_price: f64,
        current_price: f64,
    ) -> Position {
        Position {
            portfolio_id: "1".into(),
            portfolio_name: account.into(),
            isin: "RU000TEST".into(),
            ticker: ticker.into(),
            name: name.into(),
            asset_type,
            sector: classify_sector(ticker, asset_type, name).into(),
            quantity,
            average_price,
            current_price,
            expected_yield: 0.0,
        }
    }

    #[test]
    fn single_position_totals_and_return() {
        let positions = vec![pos("ИИС", "SBER", "Сбер Банк", AssetType::Share, 10.0, 200.0, 250.0)];
        let report = aggregate_portfolio(&positions, &[]);
        assert!((report.total_value - 2500.0).abs() < 1e-9);
        assert!((report.total_return_pct - 25.0).abs() < 1e-9);
    }

    #[test]
    fn return_pct_zero_guard() {
        // Zero cost basis: guard kicks in regardless of current value.
        let positions = vec![pos("ИИС", "SBER", "Сбер Банк", AssetType::Share, 10.0, 0.0, 250.0)];
        let report = aggregate_portfolio(&positions, &[]);
        assert!((report.total_return_pct - 0.0).abs() < f64::EPSILON);

        // Negative basis hits the guard too.
        let positions = vec![pos("ИИС", "SBER", "Сбер Банк", AssetType::Share, -10.0, 200.0, 250.0)];
        let report = aggregate_portfolio(&positions, &[]);
        assert!((report.total_return_pct - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn by_type_groups_current_value() {
        let positions = vec![
            pos("ИИС", "SBER", "Сбер Банк", AssetType::Share, 10.0, 200.0, 250.0),
            pos("ИИС", "LKOH", "Лукойл", AssetType::Share, 1.0, 6000.0, 7000.0),
            pos("ИИС", "SU26238RMFS4", "ОФЗ 26238", AssetType::Bond, 5.0, 700.0, 650.0),
        ];
        let report = aggregate_portfolio(&positions, &[]);

        assert_eq!(report.by_type.len(), 2);
        let shares = report
            .by_type
            .iter()
            .find(|r| r.asset_type == AssetType::Share)
            .unwrap();
        assert!((shares.total_value - 9500.0).abs() < 1e-9);
        let bonds = report
            .by_type
            .iter()
            .find(|r| r.asset_type == AssetType::Bond)
            .unwrap();
        assert!((bonds.total_value - 3250.0).abs() < 1e-9);
    }

    #[test]
    fn sunburst_splits_by_account() {
        let positions = vec![
            pos("ИИС", "SBER", "Сбер Банк", AssetType::Share, 10.0, 200.0, 250.0),
            pos("Основной", "SBER", "Сбер Банк", AssetType::Share, 4.0, 210.0, 250.0),
        ];
        let report = aggregate_portfolio(&positions, &[]);
        assert_eq!(report.sunburst.len(), 2);
        let iis = report
            .sunburst
            .iter()
            .find(|r| r.portfolio_name == "ИИС")
            .unwrap();
        assert!((iis.total_value - 2500.0).abs() < 1e-9);
    }

    #[test]
    fn treemap_groups_by_sector_then_name() {
        let positions = vec![
            pos("ИИС", "SBER", "Сбер Банк", AssetType::Share, 10.0, 200.0, 250.0),
            pos("Основной", "SBER", "Сбер Банк", AssetType::Share, 4.0, 210.0, 250.0),
            pos("ИИС", "LKOH", "Лукойл", AssetType::Share, 1.0, 6000.0, 7000.0),
        ];
        let report = aggregate_portfolio(&positions, &[]);
        assert_eq!(report.treemap.len(), 2);

        let sber = report.treemap.iter().find(|r| r.name == "Сбер Банк").unwrap();
        assert_eq!(sber.sector, "Финансовый");
        assert!((sber.total_quantity - 14.0).abs() < 1e-9);
        assert!((sber.total_value - 3500.0).abs() < 1e-9);
    }

    #[test]
    fn by_ticker_sums_quantity_and_averages_prices() {
        let positions = vec![
            pos("ИИС", "SBER", "Сбер Банк", AssetType::Share, 10.0, 200.0, 250.0),
            pos("Основной", "SBER", "Сбер Банк", AssetType::Share, 4.0, 220.0, 250.0),
        ];
        let report = aggregate_portfolio(&positions, &[]);
        assert_eq!(report.by_ticker.len(), 1);

        let row = &report.by_ticker[0];
        assert!((row.total_quantity - 14.0).abs() < 1e-9);
        assert!((row.average_price - 210.0).abs() < 1e-9);
        assert!((row.current_price - 250.0).abs() < 1e-9);
    }

    #[test]
    fn filter_applies_before_grouping() {
        // Same ticker held across two accounts: filtering the input before
        // aggregation must differ from slicing a full-table aggregate.
        let positions = vec![
            pos("ИИС", "SBER", "Сбер Банк", AssetType::Share, 10.0, 200.0, 250.0),
            pos("Основной", "SBER", "Сбер Банк", AssetType::Share, 4.0, 220.0, 250.0),
        ];
        let filter = vec!["ИИС".to_string()];
        let filtered = aggregate_portfolio(&positions, &filter);
        let full = aggregate_portfolio(&positions, &[]);

        assert!((filtered.by_ticker[0].total_quantity - 10.0).abs() < 1e-9);
        assert!(
            (filtered.by_ticker[0].total_quantity - full.by_ticker[0].total_quantity).abs() > 1e-9
        );
        assert!((filtered.by_ticker[0].average_price - 200.0).abs() < 1e-9);
    }

    #[test]
    fn empty_input_yields_defaults() {
        let report = aggregate_portfolio(&[], &[]);
        assert_eq!(report, ValuationReport::default());
    }

    #[test]
    fn filter_matching_nothing_yields_defaults() {
        let positions = vec![pos("ИИС", "SBER", "Сбер Банк", AssetType::Share, 10.0, 200.0, 250.0)];
        let filter = vec!["Несуществующий".to_string()];
        let report = aggregate_portfolio(&positions, &filter);
        assert_eq!(report, ValuationReport::default());
    }
}

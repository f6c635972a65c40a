//! Plain-text report adapter implementing ReportPort.
//!
//! Renders the derived bundle as aligned text tables, one section per
//! dashboard view. Chart layout itself belongs to an external rendering
//! layer; this adapter is the minimal built-in surface.

use std::fs;

use crate::domain::dashboard::Dashboard;
use crate::domain::error::PortfelError;
use crate::ports::report_port::ReportPort;

pub struct TextReportAdapter;

impl TextReportAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextReportAdapter {
    fn default() -> Self {
        Self::new()
    }
}

fn pad(value: &str, width: usize) -> String {
    let len = value.chars().count();
    format!("{}{}", value, " ".repeat(width.saturating_sub(len)))
}

fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header_line: Vec<String> = headers
        .iter()
        .zip(&widths)
        .map(|(h, &w)| pad(h, w))
        .collect();
    out.push_str(&header_line.join("  "));
    out.push('\n');
    out.push_str(&"-".repeat(widths.iter().sum::<usize>() + 2 * (widths.len() - 1)));
    out.push('\n');

    for row in rows {
        let line: Vec<String> = row.iter().zip(&widths).map(|(c, &w)| pad(c, w)).collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }
    out
}

fn money(value: f64) -> String {
    format!("{value:.2}")
}

fn render(dashboard: &Dashboard) -> String {
    let cash = &dashboard.cash_flow;
    let val = &dashboard.valuation;
    let mut out = String::new();

    out.push_str("Анализ инвестиционного портфеля\n");
    out.push_str("===============================\n\n");
    out.push_str(&format!("Стоимость портфеля: {} руб.\n", money(val.total_value)));
    out.push_str(&format!("Доходность:         {:.2}%\n", val.total_return_pct));
    out.push_str(&format!("Купоны:             {} руб.\n", money(cash.summary.total_coupons)));
    out.push_str(&format!("Дивиденды:          {} руб.\n", money(cash.summary.total_dividends)));
    out.push_str(&format!("Введено:            {} руб.\n", money(cash.summary.total_deposits)));
    out.push_str(&format!("Выведено:           {} руб.\n", money(cash.summary.total_withdrawals)));
    out.push_str(&format!("Налоги:             {} руб.\n", money(cash.total_taxes)));
    out.push_str(&format!("Комиссии:           {} руб.\n", money(cash.total_commissions)));

    out.push_str("\nВыплаты по годам\n\n");
    let rows: Vec<Vec<String>> = cash
        .payments_by_year
        .iter()
        .map(|r| vec![r.year.to_string(), r.kind.label().to_string(), money(r.amount)])
        .collect();
    out.push_str(&render_table(&["Год", "Тип", "Сумма"], &rows));

    out.push_str("\nПополнение и вывод средств\n\n");
    let rows: Vec<Vec<String>> = cash
        .cash_movements
        .iter()
        .map(|r| {
            vec![
                r.year.to_string(),
                r.kind.label().to_string(),
                r.account.clone(),
                money(r.amount),
            ]
        })
        .collect();
    out.push_str(&render_table(&["Год", "Тип", "Счёт", "Сумма"], &rows));

    out.push_str("\nСтоимость по типам активов\n\n");
    let rows: Vec<Vec<String>> = val
        .by_type
        .iter()
        .map(|r| vec![r.asset_type.as_str().to_string(), money(r.total_value)])
        .collect();
    out.push_str(&render_table(&["Тип", "Сумма"], &rows));

    out.push_str("\nТипы активов по счетам\n\n");
    let rows: Vec<Vec<String>> = val
        .sunburst
        .iter()
        .map(|r| {
            vec![
                r.asset_type.as_str().to_string(),
                r.portfolio_name.clone(),
                money(r.total_value),
            ]
        })
        .collect();
    out.push_str(&render_table(&["Тип", "Счёт", "Сумма"], &rows));

    out.push_str("\nСостав портфеля\n\n");
    let rows: Vec<Vec<String>> = val
        .treemap
        .iter()
        .map(|r| {
            vec![
                r.sector.clone(),
                r.name.clone(),
                format!("{:.2}", r.total_quantity),
                money(r.total_value),
            ]
        })
        .collect();
    out.push_str(&render_table(&["Сектор", "Название", "Кол-во", "Сумма"], &rows));

    out.push_str("\nТекущие и средние цены\n\n");
    let rows: Vec<Vec<String>> = val
        .by_ticker
        .iter()
        .map(|r| {
            vec![
                r.ticker.clone(),
                r.name.clone(),
                r.asset_type.as_str().to_string(),
                format!("{:.2}", r.total_quantity),
                money(r.average_price),
                money(r.current_price),
            ]
        })
        .collect();
    out.push_str(&render_table(
        &["Тикер", "Название", "Тип", "Кол-во", "Средняя", "Текущая"],
        &rows,
    ));

    out
}

impl ReportPort for TextReportAdapter {
    fn write(&self, dashboard: &Dashboard, output_path: &str) -> Result<(), PortfelError> {
        let rendered = render(dashboard);
        if output_path == "-" {
            print!("{rendered}");
            return Ok(());
        }
        fs::write(output_path, rendered).map_err(|e| PortfelError::Report {
            reason: format!("failed to write {}: {}", output_path, e),
        })
    }
}

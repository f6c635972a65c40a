//! Sector classification for held instruments.
//!
//! Static-table lookup: ETFs are mixed by definition, government bonds are
//! spotted by the ОФЗ marker in the instrument name, shares resolve through
//! the ticker table. Each ticker must appear in at most one sector list for
//! the table to be well-defined; that is a structural invariant of the data,
//! not something checked at runtime.

use super::position::AssetType;

pub const SECTOR_MIXED: &str = "Смешанный";
pub const SECTOR_SOVEREIGN: &str = "Государственный";
pub const SECTOR_OTHER: &str = "Другое";

const SOVEREIGN_BOND_MARKER: &str = "ОФЗ";

/// Sector name → tickers of shares in that sector.
pub const SHARE_SECTORS: [(&str, &[&str]); 12] = [
    (
        "Нефтегазовый",
        &["LKOH", "ROSN", "NVTK", "GAZP", "SIBN", "SNGSP", "TATNP"],
    ),
    ("Электроэнергетика", &["FEES", "UPRO", "HYDR"]),
    ("Финансовый", &["MOEX", "SBER", "SBERP", "T", "VTBR"]),
    (
        "Металлургический",
        &["CHMF", "TRMK", "ALRS", "MAGN", "NLMK"],
    ),
    ("Телекоммуникаций", &["MTSS", "RTKM", "RTKMP"]),
    ("Химический", &["PHOR", "NKNC", "NKNCP"]),
    ("Золотодобытчиков", &["PLZL"]),
    ("Строительный", &["PIKK", "ETLN"]),
    ("Потребительский", &["MGNT", "MVID", "LSRG", "OZON"]),
    ("Транспортный", &["FLOT", "NMTP", "FIVE", "AGRO"]),
    ("Здравоохранения", &["MDMG"]),
    ("ИТ", &["YDEX"]),
];

/// Resolve the sector label for an instrument. Any combination the tables
/// do not cover falls back to [`SECTOR_OTHER`].
pub fn classify_sector(ticker: &str, asset_type: AssetType, name: &str) -> &'static str {
    match asset_type {
        AssetType::Etf => SECTOR_MIXED,
        AssetType::Bond if name.contains(SOVEREIGN_BOND_MARKER) => SECTOR_SOVEREIGN,
        AssetType::Share => SHARE_SECTORS
            .iter()
            .find(|(_, tickers)| tickers.contains(&ticker))
            .map(|(sector, _)| *sector)
            .unwrap_or(SECTOR_OTHER),
        _ => SECTOR_OTHER,
    }
}

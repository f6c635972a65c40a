//! Portfolio holding row representation.

/// Asset class of a held instrument. Unknown export values map to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AssetType {
    Share,
    Bond,
    Etf,
    Other,
}

impl AssetType {
    pub fn parse(value: &str) -> Self {
        match value {
            "share" => AssetType::Share,
            "bond" => AssetType::Bond,
            "etf" => AssetType::Etf,
            _ => AssetType::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::Share => "share",
            AssetType::Bond => "bond",
            AssetType::Etf => "etf",
            AssetType::Other => "other",
        }
    }
}

/// One row of the current-holdings export.
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    pub portfolio_id: String,
    pub portfolio_name: String,
    pub isin: String,
    pub ticker: String,
    pub name: String,
    pub asset_type: AssetType,
    pub sector: String,
    pub quantity: f64,
    pub average_price: f64,
    pub current_price: f64,
    pub expected_yield: f64,
}

impl Position {
    /// quantity * current_price
    pub fn current_value(&self) -> f64 {
        self.quantity * self.current_price
    }

    /// quantity * average_price (cost basis)
    pub fn investment_value(&self) -> f64 {
        self.quantity * self.average_price
    }
}

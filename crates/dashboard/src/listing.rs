use common::models::PriceTicker;
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    None,
    /// High to low
    Desc,
    /// Low to high
    Asc,
}

impl SortOrder {
    pub const ALL: [SortOrder; 3] = [Self::None, Self::Desc, Self::Asc];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Desc => "desc",
            Self::Asc => "asc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Desc => "High to Low",
            Self::Asc => "Low to High",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PriceRow {
    pub symbol: String,
    pub price: f64,
}

/// Pairs quoted in `quote_suffix`, narrowed by an optional case-insensitive
/// substring, then ordered by price. Unparseable prices are skipped.
pub fn build_listing(
    tickers: Vec<PriceTicker>,
    quote_suffix: &str,
    search: Option<&str>,
    sort: SortOrder,
) -> Vec<PriceRow> {
    let suffix = quote_suffix.to_uppercase();
    let needle = search
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_uppercase);

    let mut rows: Vec<PriceRow> = tickers
        .into_iter()
        .filter(|t| t.symbol.ends_with(&suffix))
        .filter(|t| needle.as_ref().is_none_or(|n| t.symbol.contains(n.as_str())))
        .filter_map(|t| match t.price_value() {
            Some(price) => Some(PriceRow {
                symbol: t.symbol,
                price,
            }),
            None => {
                debug!("Skipping {} with price '{}'", t.symbol, t.price);
                None
            }
        })
        .collect();

    match sort {
        SortOrder::None => {}
        SortOrder::Desc => rows.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortOrder::Asc => rows.sort_by(|a, b| a.price.total_cmp(&b.price)),
    }

    rows
}

/// Number of pairs quoted in `quote_suffix`, before any search.
pub fn count_quoted(tickers: &[PriceTicker], quote_suffix: &str) -> usize {
    let suffix = quote_suffix.to_uppercase();
    tickers.iter().filter(|t| t.symbol.ends_with(&suffix)).count()
}

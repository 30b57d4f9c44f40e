use std::fmt::Write;

use chrono::{DateTime, Utc};
use common::models::{Signal, SignalReport};

use crate::api_client::{CoinInfo, LivePrice};
use crate::listing::{PriceRow, SortOrder};

const STYLE: &str = r#"
    body { font-family: 'Courier New', monospace; background: #0a0a0a; color: #e0e0e0;
           padding: 32px; max-width: 960px; margin: 0 auto; }
    h1 { border-bottom: 2px solid #00ff00; padding-bottom: 10px; color: #00ff00; }
    .card { background: #111; border: 1px solid #333; padding: 16px 20px; margin: 20px 0; border-radius: 4px; }
    .metrics { display: flex; gap: 24px; }
    .metric .label { color: #888; display: block; }
    .metric .value { font-size: 1.4em; font-weight: bold; }
    .error { border-color: #ff4444; color: #ff4444; }
    .success { border-color: #00ff00; color: #00ff00; }
    .buy { color: #00ff00; } .sell { color: #ff4444; } .hold { color: #ffff00; }
    table { width: 100%; border-collapse: collapse; }
    th, td { text-align: left; padding: 4px 8px; border-bottom: 1px solid #222; }
    td.num { text-align: right; }
    footer { color: #555; font-size: 0.8em; }
"#;

/// Inputs echoed back into the page forms.
#[derive(Debug, Default)]
pub struct FormState<'a> {
    pub coin: &'a str,
    pub search: &'a str,
    pub sort: SortOrder,
}

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn page(
    form: &FormState<'_>,
    quote_suffix: &str,
    panel: &str,
    refresh_secs: u64,
    rendered_at: DateTime<Utc>,
) -> String {
    let refresh = if refresh_secs > 0 {
        format!(r#"<meta http-equiv="refresh" content="{}">"#, refresh_secs)
    } else {
        String::new()
    };

    let mut sort_options = String::new();
    for order in SortOrder::ALL {
        let selected = if order == form.sort { " selected" } else { "" };
        let _ = write!(
            sort_options,
            r#"<option value="{}"{}>{}</option>"#,
            order.as_str(),
            selected,
            order.label()
        );
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Crypto Live Dashboard</title>
    <meta charset="utf-8">
    {refresh}
    <style>{STYLE}</style>
</head>
<body>
    <h1>Crypto Live Dashboard</h1>

    <div class="card">
        <form method="get" action="/">
            <input name="coin" value="{coin}" placeholder="Enter coin (example: BTCUSDT)">
            <button name="view" value="price">Live Price</button>
            <button name="view" value="info">Full Info</button>
            <button name="view" value="signal">Signal</button>
        </form>
    </div>

    <div class="card">
        <form method="get" action="/">
            <input type="hidden" name="view" value="all">
            <input name="search" value="{search}" placeholder="Search coin">
            <label>Sort by price <select name="sort">{sort_options}</select></label>
            <button>Show All {suffix} Coins</button>
        </form>
    </div>

    {panel}

    <footer>Rendered {rendered}</footer>
</body>
</html>
"#,
        refresh = refresh,
        STYLE = STYLE,
        coin = escape(form.coin),
        search = escape(form.search),
        sort_options = sort_options,
        suffix = escape(quote_suffix),
        panel = panel,
        rendered = rendered_at.format("%Y-%m-%d %H:%M:%S UTC"),
    )
}

pub fn error_banner(message: &str) -> String {
    format!(r#"<div class="card error">{}</div>"#, escape(message))
}

pub fn live_price(price: &LivePrice) -> String {
    format!(
        r#"<div class="card success">{} Price: {}</div>"#,
        escape(&price.symbol),
        escape(&price.live_price)
    )
}

fn metric(label: &str, value: &str, class: &str) -> String {
    format!(
        r#"<div class="metric"><span class="label">{}</span><span class="value {}">{}</span></div>"#,
        escape(label),
        class,
        escape(value)
    )
}

pub fn coin_info(info: &CoinInfo) -> String {
    format!(
        r#"<div class="card"><h3>{} Details</h3><div class="metrics">{}{}{}</div><p>High: {}</p><p>Low: {}</p></div>"#,
        escape(&info.symbol),
        metric("Price", &info.live_price, ""),
        metric("24h Change %", &info.change_percent_24h, ""),
        metric("Volume", &info.volume_24h, ""),
        escape(&info.high_24h),
        escape(&info.low_24h),
    )
}

pub fn signal(report: &SignalReport) -> String {
    let class = match report.signal {
        Signal::Buy => "buy",
        Signal::Sell => "sell",
        Signal::Hold => "hold",
    };

    format!(
        r#"<div class="card"><h3>{} Signal</h3><div class="metrics">{}{}{}{}{}</div></div>"#,
        escape(&report.symbol),
        metric("Signal", report.signal.as_str(), class),
        metric("RSI", &format!("{:.2}", report.rsi), ""),
        metric("Short MA", &report.short_ma.to_string(), ""),
        metric("Long MA", &report.long_ma.to_string(), ""),
        metric("Last Price", &report.last_price.to_string(), ""),
    )
}

pub fn price_table(rows: &[PriceRow], quoted_total: usize, quote_suffix: &str) -> String {
    let mut body = String::new();
    for row in rows {
        let _ = write!(
            body,
            r#"<tr><td>{}</td><td class="num">{}</td></tr>"#,
            escape(&row.symbol),
            row.price
        );
    }

    format!(
        r#"<div class="card"><div class="success">Total {suffix} Coins: {total}</div><p>Showing {shown}</p><table><thead><tr><th>Symbol</th><th>Price</th></tr></thead><tbody>{body}</tbody></table></div>"#,
        suffix = escape(quote_suffix),
        total = quoted_total,
        shown = rows.len(),
        body = body,
    )
}

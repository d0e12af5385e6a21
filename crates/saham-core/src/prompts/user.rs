//! User message builders
//!
//! Section order is fixed: identity/capital header, fundamentals block,
//! market-structure block, then the raw intelligence verbatim. Every value
//! is interpolated exactly as entered.

use crate::input::StockAnalysisInput;
use std::fmt::Write;

/// Build the user message for an analysis call
pub fn analysis_prompt(input: &StockAnalysisInput) -> String {
    let mut prompt = String::new();

    let _ = writeln!(prompt, "=== ANALYSIS REQUEST ===");
    let _ = writeln!(prompt, "Ticker: {}", input.ticker);
    let _ = writeln!(prompt, "Current Price: {}", input.price);
    let _ = writeln!(prompt, "Investable Capital: {}", input.capital);
    let _ = writeln!(
        prompt,
        "Capital Tier: {}",
        enum_wire_name(&input.capital_tier)
    );
    let _ = writeln!(
        prompt,
        "Risk Profile: {}",
        enum_wire_name(&input.risk_profile)
    );

    let _ = writeln!(prompt, "\n=== FUNDAMENTALS ===");
    for (name, value) in input.fundamentals.fields() {
        let _ = writeln!(prompt, "{name}: {value}");
    }

    let bandar = &input.bandarmology;
    let _ = writeln!(prompt, "\n=== MARKET STRUCTURE ===");
    let _ = writeln!(prompt, "Top Brokers: {}", bandar.top_brokers);
    let _ = writeln!(prompt, "Accumulation Duration: {}", bandar.duration);
    let _ = writeln!(prompt, "Dealer Avg Price: {}", bandar.avg_price);
    let _ = writeln!(prompt, "Sentiment Score: {}", bandar.sentiment_score);
    let _ = writeln!(prompt, "Order Book Bid: {}", bandar.order_book_bid);
    let _ = writeln!(prompt, "Order Book Ask: {}", bandar.order_book_ask);
    let _ = writeln!(prompt, "Aggressive Bid Flow: {}", bandar.aggressive_bid);
    let _ = writeln!(prompt, "Aggressive Ask Flow: {}", bandar.aggressive_ask);

    let _ = writeln!(prompt, "\n=== RAW INTELLIGENCE ===");
    prompt.push_str(&input.raw_intelligence);

    prompt
}

/// Build the user message for a trend-consistency call
///
/// `serialized_history` is the full time-ordered verdict history, oldest
/// first, already serialized by the caller.
pub fn consistency_prompt(ticker: &str, serialized_history: &str) -> String {
    format!(
        "=== VERDICT HISTORY FOR {ticker} ===\n\
         Ordered oldest to newest.\n\n\
         {serialized_history}"
    )
}

/// Wire-format name of a unit enum variant, e.g. `HIGH_NET`
fn enum_wire_name<T: serde::Serialize>(value: &T) -> String {
    match serde_json::to_value(value) {
        Ok(serde_json::Value::String(name)) => name,
        _ => String::new(),
    }
}

//! Prose rendering of collected records
//!
//! Each intent gets its own template. Slots holding a failure marker render
//! as "currently unavailable" prose; the record itself is always complete by
//! the time it reaches this module (the service refuses partial records).

use crate::router::ChatIntent;
use stockchat_core::{Sentiment, StockState};

/// How many headlines to quote back in sentiment prose
const MAX_HEADLINES: usize = 3;

pub fn greeting() -> &'static str {
    "Hi! I'm your Stock Chatbot. Ask me about any stock (e.g., 'Price of AAPL' or 'Is TSLA a good buy?')."
}

pub fn no_symbol_reply() -> &'static str {
    "Please include a valid stock symbol (e.g., TSLA, AAPL)."
}

pub fn invalid_reply() -> &'static str {
    "Sorry, I didn't understand your request. Try asking about a stock's price, financials, sentiment, or overall analysis."
}

/// Render the record as prose for one intent
pub fn render(intent: ChatIntent, report: &StockState) -> String {
    match intent {
        ChatIntent::Price => price_reply(report),
        ChatIntent::Financials => financials_reply(report),
        ChatIntent::Sentiment => sentiment_reply(report),
        ChatIntent::Analysis => analysis_reply(report),
        ChatIntent::Invalid => invalid_reply().to_string(),
    }
}

fn price_reply(report: &StockState) -> String {
    match report.price.value() {
        Some(price) => format!(
            "The current price of {} is ${price:.2}.",
            report.symbol
        ),
        None => format!(
            "The current price of {} is unavailable right now.",
            report.symbol
        ),
    }
}

fn financials_reply(report: &StockState) -> String {
    match report.financials.value() {
        Some(financials) => format!(
            "Financial metrics for {}:\n- Market Cap: ${}\n- Revenue: ${}\n- Earnings: ${}",
            report.symbol,
            format_amount(&financials.market_cap),
            format_amount(&financials.revenue),
            format_amount(&financials.earnings),
        ),
        None => format!(
            "Financial metrics for {} are unavailable right now.",
            report.symbol
        ),
    }
}

fn sentiment_reply(report: &StockState) -> String {
    match report.sentiment.value() {
        Some(sentiment) => {
            let mut reply = format!(
                "The sentiment for {} is {}.",
                report.symbol, sentiment.summary
            );
            reply.push_str(&headlines(sentiment));
            reply
        }
        None => format!(
            "News sentiment for {} is unavailable right now.",
            report.symbol
        ),
    }
}

fn analysis_reply(report: &StockState) -> String {
    let price = match report.price.value() {
        Some(price) => format!("${price:.2}"),
        None => "unavailable".to_string(),
    };

    let financials = match report.financials.value() {
        Some(financials) => format!(
            "\n  - Market Cap: ${}\n  - Revenue: ${}\n  - Earnings: ${}",
            format_amount(&financials.market_cap),
            format_amount(&financials.revenue),
            format_amount(&financials.earnings),
        ),
        None => " unavailable".to_string(),
    };

    let sentiment = match report.sentiment.value() {
        Some(sentiment) => format!("{}{}", sentiment.summary, headlines(sentiment)),
        None => "unavailable".to_string(),
    };

    format!(
        "Here's an analysis of {}:\n- **Price**: {}\n- **Financials**:{}\n- **Sentiment**: {}",
        report.symbol, price, financials, sentiment,
    )
}

/// Top headlines with their labels, or nothing when there are none
fn headlines(sentiment: &Sentiment) -> String {
    if sentiment.details.is_empty() {
        return String::new();
    }

    let lines: Vec<String> = sentiment
        .details
        .iter()
        .take(MAX_HEADLINES)
        .map(|detail| format!("- {} ({})", detail.title, detail.sentiment))
        .collect();

    format!("\nRecent news:\n{}", lines.join("\n"))
}

/// Insert thousands separators into a numeric string
///
/// Provider figures arrive as digit strings; anything unparseable is shown
/// verbatim.
fn format_amount(raw: &str) -> String {
    let Ok(value) = raw.parse::<i128>() else {
        return raw.to_string();
    };

    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

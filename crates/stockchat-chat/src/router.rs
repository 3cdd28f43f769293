//! Free-text query routing
//!
//! Turns a chat message into a (symbol, intent) pair using purely lexical
//! means: an uppercase-word scan with a stop-word filter for the symbol, and
//! keyword sets for the intent.

use regex::Regex;
use std::sync::LazyLock;

/// What the user wants to know about the symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChatIntent {
    /// Current price only
    Price,
    /// Market cap, revenue, earnings
    Financials,
    /// News sentiment
    Sentiment,
    /// Everything at once
    Analysis,
    /// The query could not be understood
    Invalid,
}

/// Keywords for intent classification
mod keywords {
    pub const PRICE: &[&str] = &[
        "price",
        "stock value",
        "how much is",
        "current price",
        "latest price",
        "quote",
        "trading at",
        "worth",
    ];

    pub const FINANCIALS: &[&str] = &[
        "financial",
        "fundamental",
        "market cap",
        "revenue",
        "earnings",
        "valuation",
        "metrics",
    ];

    pub const SENTIMENT: &[&str] = &[
        "sentiment",
        "news",
        "headline",
        "mood",
        "feeling",
        "opinion",
    ];

    pub const ANALYSIS: &[&str] = &[
        "analysis",
        "analyze",
        "overview",
        "summary",
        "good buy",
        "should i buy",
        "tell me about",
    ];
}

/// Short uppercase words that look like tickers but never are
const STOP_WORDS: &[&str] = &[
    "WHAT", "IS", "THE", "PRICE", "OF", "FOR", "IN", "A", "AN", "AND", "GIVE", "ME", "LATEST",
    "STOCK", "VALUE", "NEWS", "BUY", "SELL", "GOOD",
];

static SYMBOL_AFTER_KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:OF|FOR|PRICE|VALUE)\s+([A-Z]{1,5})\b").expect("valid symbol regex")
});

static UPPER_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z]{1,5}\b").expect("valid word regex"));

/// Lexical router from chat text to symbol and intent
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryRouter;

impl QueryRouter {
    pub fn new() -> Self {
        Self
    }

    /// Extract the ticker symbol from a query
    ///
    /// The query is uppercased first, so "price of aapl" works. Words that
    /// directly follow of/for/price/value win; otherwise the first 1-5 letter
    /// word that is not a stop word is taken.
    pub fn extract_symbol(&self, query: &str) -> Option<String> {
        let upper = query.to_uppercase();

        for caps in SYMBOL_AFTER_KEYWORD.captures_iter(&upper) {
            let candidate = &caps[1];
            if !STOP_WORDS.contains(&candidate) {
                return Some(candidate.to_string());
            }
        }

        UPPER_WORD
            .find_iter(&upper)
            .map(|m| m.as_str())
            .find(|word| !STOP_WORDS.contains(word))
            .map(str::to_string)
    }

    /// Classify the intent of a query
    ///
    /// Price patterns are checked first. A query that matches no keyword set
    /// but is a bare ticker mention ("AAPL?", "how is TSLA") still maps to
    /// `Analysis`, the most complete answer; anything else un-understood is
    /// `Invalid`.
    pub fn classify(&self, query: &str) -> ChatIntent {
        let lower = query.to_lowercase();
        let matches_any = |terms: &[&str]| terms.iter().any(|term| lower.contains(term));

        if matches_any(keywords::PRICE) {
            ChatIntent::Price
        } else if matches_any(keywords::FINANCIALS) {
            ChatIntent::Financials
        } else if matches_any(keywords::SENTIMENT) {
            ChatIntent::Sentiment
        } else if matches_any(keywords::ANALYSIS) || bare_mention(query) {
            ChatIntent::Analysis
        } else {
            ChatIntent::Invalid
        }
    }
}

/// True when the query is nothing beyond a ticker mention and filler words
fn bare_mention(query: &str) -> bool {
    query
        .to_uppercase()
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .all(|word| word.len() <= 5 || STOP_WORDS.contains(&word))
}

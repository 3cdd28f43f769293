//! Keyword-lexicon sentiment scoring over article text

use stockchat_core::{
    Article, ArticleSentiment, Result, Sentiment, SentimentLabel, SentimentScorer,
    SentimentSummary,
};

/// Scores past which an article stops being neutral
const NEUTRAL_BAND: f64 = 0.05;

/// Market-news terms that read positive
mod positive {
    pub const TERMS: &[&str] = &[
        "beat",
        "beats",
        "surge",
        "soar",
        "rally",
        "record",
        "growth",
        "profit",
        "upgrade",
        "outperform",
        "strong",
        "gain",
        "jump",
        "bullish",
        "optimistic",
        "expand",
        "boost",
        "breakthrough",
    ];
}

/// Market-news terms that read negative
mod negative {
    pub const TERMS: &[&str] = &[
        "miss",
        "misses",
        "fall",
        "drop",
        "plunge",
        "slump",
        "loss",
        "lawsuit",
        "downgrade",
        "underperform",
        "weak",
        "decline",
        "layoff",
        "recall",
        "bearish",
        "fraud",
        "probe",
        "warns",
        "cuts",
    ];
}

/// Lexicon-based sentiment scorer
///
/// Each article is scored by the balance of positive and negative term hits
/// in its title and description; the summary is a majority vote over the
/// per-article labels.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconScorer;

impl LexiconScorer {
    pub fn new() -> Self {
        Self
    }

    /// Score a single piece of text into [-1.0, 1.0]
    fn score_text(text: &str) -> f64 {
        let text = text.to_lowercase();
        let hits = |terms: &[&str]| terms.iter().filter(|term| text.contains(*term)).count();

        let positive = hits(positive::TERMS);
        let negative = hits(negative::TERMS);
        let total = positive + negative;

        if total == 0 {
            return 0.0;
        }
        (positive as f64 - negative as f64) / total as f64
    }

    fn label(score: f64) -> SentimentLabel {
        if score > NEUTRAL_BAND {
            SentimentLabel::Positive
        } else if score < -NEUTRAL_BAND {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

impl SentimentScorer for LexiconScorer {
    fn score(&self, articles: &[Article]) -> Result<Sentiment> {
        if articles.is_empty() {
            return Ok(Sentiment::no_articles());
        }

        let details: Vec<ArticleSentiment> = articles
            .iter()
            .map(|article| {
                let text = format!("{} {}", article.title, article.description);
                ArticleSentiment {
                    title: article.title.clone(),
                    sentiment: Self::label(Self::score_text(&text)),
                }
            })
            .collect();

        let positive = details
            .iter()
            .filter(|d| d.sentiment == SentimentLabel::Positive)
            .count();
        let negative = details
            .iter()
            .filter(|d| d.sentiment == SentimentLabel::Negative)
            .count();

        let summary = if positive > negative {
            SentimentSummary::Positive
        } else if negative > positive {
            SentimentSummary::Negative
        } else {
            SentimentSummary::Neutral
        };

        Ok(Sentiment { summary, details })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: &str, description: &str) -> Article {
        Article {
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_empty_batch_yields_no_articles_verdict() {
        let sentiment = LexiconScorer::new().score(&[]).unwrap();
        assert_eq!(sentiment.summary, SentimentSummary::NoArticles);
        assert!(sentiment.details.is_empty());
    }

    #[test]
    fn test_positive_article() {
        let articles = [article(
            "Shares surge after record quarter",
            "Revenue growth beats estimates",
        )];
        let sentiment = LexiconScorer::new().score(&articles).unwrap();
        assert_eq!(sentiment.summary, SentimentSummary::Positive);
        assert_eq!(sentiment.details[0].sentiment, SentimentLabel::Positive);
    }

    #[test]
    fn test_negative_article() {
        let articles = [article(
            "Stock plunges on earnings miss",
            "Analysts downgrade after weak guidance",
        )];
        let sentiment = LexiconScorer::new().score(&articles).unwrap();
        assert_eq!(sentiment.summary, SentimentSummary::Negative);
        assert_eq!(sentiment.details[0].sentiment, SentimentLabel::Negative);
    }

    #[test]
    fn test_neutral_when_balanced() {
        let articles = [
            article("Shares surge on strong growth", ""),
            article("Lawsuit drags shares to a weak close", ""),
        ];
        let sentiment = LexiconScorer::new().score(&articles).unwrap();
        assert_eq!(sentiment.summary, SentimentSummary::Neutral);
    }

    #[test]
    fn test_majority_wins() {
        let articles = [
            article("Record profit and strong growth", ""),
            article("Upgrade lifts shares, bullish outlook", ""),
            article("Probe weighs on weak quarter", ""),
        ];
        let sentiment = LexiconScorer::new().score(&articles).unwrap();
        assert_eq!(sentiment.summary, SentimentSummary::Positive);
        assert_eq!(sentiment.details.len(), 3);
    }

    #[test]
    fn test_no_lexicon_hits_is_neutral() {
        let articles = [article("Company schedules annual meeting", "Details inside")];
        let sentiment = LexiconScorer::new().score(&articles).unwrap();
        assert_eq!(sentiment.summary, SentimentSummary::Neutral);
        assert_eq!(sentiment.details[0].sentiment, SentimentLabel::Neutral);
    }
}

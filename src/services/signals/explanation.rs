//! Natural-language rationale for a classified signal.

use crate::services::signals::classifier::{RSI_OVERBOUGHT, RSI_OVERSOLD};
use crate::types::{Explanation, IndicatorBundle, SentimentBundle, SignalType};

/// Substituted when no technical clause applies.
pub const DEFAULT_TECHNICAL_REASON: &str = "Technical analysis shows no clear direction at the moment.";
/// Substituted when sentiment does not back the signal.
pub const DEFAULT_SENTIMENT_REASON: &str = "Market sentiment remains neutral.";

/// Build the explanation for a signal.
///
/// Each contributing technical condition adds one clause. Sentiment is only
/// cited when it points the same way as the signal.
pub fn generate_explanation(
    signal_type: SignalType,
    technical: &IndicatorBundle,
    sentiment: &SentimentBundle,
) -> Explanation {
    let (summary, clauses, sentiment_reason) = match signal_type {
        SignalType::Buy => (
            "The BUY signal was generated by a combination of oversold technical indicators \
             and positive market sentiment."
                .to_string(),
            buy_clauses(technical),
            (sentiment.overall > 0.0).then(|| {
                format!(
                    "Overall sentiment is positive ({}) based on news and social media analysis.{}",
                    format_percent(sentiment.overall),
                    keyword_suffix(&sentiment.keywords),
                )
            }),
        ),
        SignalType::Sell => (
            "The SELL signal was generated by overbought technical indicators and negative \
             market sentiment."
                .to_string(),
            sell_clauses(technical),
            (sentiment.overall < 0.0).then(|| {
                format!(
                    "Negative sentiment ({}) detected across multiple sources.{}",
                    format_percent(sentiment.overall),
                    keyword_suffix(&sentiment.keywords),
                )
            }),
        ),
        SignalType::Neutral => (
            "Mixed signals across technical indicators and sentiment analysis suggest waiting \
             for a clearer direction."
                .to_string(),
            vec!["Technical indicators show no clear consensus for a specific direction.".to_string()],
            Some("Market sentiment remains neutral with no significant catalysts.".to_string()),
        ),
    };

    let technical_reason = if clauses.is_empty() {
        DEFAULT_TECHNICAL_REASON.to_string()
    } else {
        clauses.join(" ")
    };

    Explanation {
        summary,
        technical_reason,
        sentiment_reason: sentiment_reason.unwrap_or_else(|| DEFAULT_SENTIMENT_REASON.to_string()),
    }
}

fn buy_clauses(technical: &IndicatorBundle) -> Vec<String> {
    let mut clauses = Vec::new();
    if technical.rsi < RSI_OVERSOLD {
        clauses.push(format!(
            "RSI in oversold territory ({:.1}) points to a potential reversal.",
            technical.rsi
        ));
    }
    if technical.macd > technical.macd_signal {
        clauses.push("MACD shows a bullish crossover.".to_string());
    }
    if technical.ma_50 > technical.ma_200 {
        clauses.push("Golden Cross detected (MA50 > MA200).".to_string());
    }
    clauses
}

fn sell_clauses(technical: &IndicatorBundle) -> Vec<String> {
    let mut clauses = Vec::new();
    if technical.rsi > RSI_OVERBOUGHT {
        clauses.push(format!(
            "RSI in overbought territory ({:.1}) points to a possible correction.",
            technical.rsi
        ));
    }
    if technical.macd < technical.macd_signal {
        clauses.push("MACD shows a bearish divergence.".to_string());
    }
    if technical.ma_50 < technical.ma_200 {
        clauses.push("Death Cross detected (MA50 < MA200).".to_string());
    }
    clauses
}

/// Sentiment score as a whole percentage, e.g. 0.456 -> "46%".
fn format_percent(score: f64) -> String {
    format!("{}%", (score * 100.0).round() as i64)
}

fn keyword_suffix(keywords: &[String]) -> String {
    if keywords.is_empty() {
        String::new()
    } else {
        format!(" Keywords detected: {}.", keywords.join(", "))
    }
}

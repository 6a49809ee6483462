/// Coarse grouping of the labels the sentiment pipeline writes back.
/// Used for styling only; the table always shows the raw label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentClass {
    Positive,
    Neutral,
    Negative,
    NoSentiment,
    Pending,
    Unknown,
}

impl SentimentClass {
    pub fn from_label(label: Option<&str>) -> Self {
        match label {
            None | Some("PENDING") => SentimentClass::Pending,
            Some("P+") | Some("P") => SentimentClass::Positive,
            Some("NEU") => SentimentClass::Neutral,
            Some("N") | Some("N+") => SentimentClass::Negative,
            Some("NONE") => SentimentClass::NoSentiment,
            Some(_) => SentimentClass::Unknown,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            SentimentClass::Positive => "sentiment-positive",
            SentimentClass::Neutral => "sentiment-neutral",
            SentimentClass::Negative => "sentiment-negative",
            SentimentClass::NoSentiment => "sentiment-none",
            SentimentClass::Pending => "sentiment-pending",
            SentimentClass::Unknown => "sentiment-unknown",
        }
    }
}

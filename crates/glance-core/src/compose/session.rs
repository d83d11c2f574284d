//! In-memory conversation transcript.
//!
//! A session lives for one process run and is reset on restart; nothing is
//! persisted. The caller owns the session and passes it mutably into each
//! composition, which appends one exchange on success.

/// One question/answer pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    pub question: String,
    pub answer: String,
}

/// Ordered transcript of exchanges within one run.
#[derive(Debug, Default)]
pub struct Session {
    exchanges: Vec<Exchange>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an exchange to the transcript.
    pub fn record(&mut self, question: impl Into<String>, answer: impl Into<String>) {
        self.exchanges.push(Exchange {
            question: question.into(),
            answer: answer.into(),
        });
    }

    /// All exchanges, oldest first.
    pub fn exchanges(&self) -> &[Exchange] {
        &self.exchanges
    }

    /// The most recent `limit` exchanges, oldest first.
    pub fn recent(&self, limit: usize) -> &[Exchange] {
        let start = self.exchanges.len().saturating_sub(limit);
        &self.exchanges[start..]
    }

    pub fn len(&self) -> usize {
        self.exchanges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exchanges.is_empty()
    }

    /// Forget the transcript without dropping the session.
    pub fn clear(&mut self) {
        self.exchanges.clear();
    }
}

//! Bet amount input: a text buffer with a submit-and-reset lifecycle.

use thiserror::Error;

/// Why a bet buffer could not be submitted. The message is shown next to the
/// input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BetError {
    #[error("Enter a bet amount")]
    Empty,
    #[error("\"{0}\" is not a number")]
    NotANumber(String),
    #[error("Bet amount must be a finite number")]
    NotFinite,
    #[error("Bet amount must be greater than zero")]
    NotPositive,
}

/// A parsed bet: finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct BetAmount(f64);

impl BetAmount {
    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<&str> for BetAmount {
    type Error = BetError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(BetError::Empty);
        }
        let value: f64 = trimmed
            .parse()
            .map_err(|_| BetError::NotANumber(trimmed.to_string()))?;
        if !value.is_finite() {
            return Err(BetError::NotFinite);
        }
        if value <= 0.0 {
            return Err(BetError::NotPositive);
        }
        Ok(BetAmount(value))
    }
}

/// Owns the text the user is typing into the bet field.
///
/// Only two transitions touch the buffer: [`BetInput::set_text`] and
/// [`BetInput::submit_and_reset`].
#[derive(Clone, Debug, Default)]
pub struct BetInput {
    buffer: String,
    error: Option<BetError>,
}

impl BetInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Replace the buffer verbatim. Any previous submit error is cleared.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
        self.error = None;
    }

    /// The Bet button is enabled for any non-empty buffer, numeric or not.
    pub fn can_submit(&self) -> bool {
        !self.buffer.is_empty()
    }

    /// Parse the buffer. On success the buffer is cleared and the amount is
    /// returned for dispatch; on failure the buffer is kept and the error is
    /// remembered until the next edit.
    pub fn submit_and_reset(&mut self) -> Result<BetAmount, BetError> {
        match BetAmount::try_from(self.buffer.as_str()) {
            Ok(amount) => {
                self.buffer.clear();
                self.error = None;
                Ok(amount)
            }
            Err(e) => {
                self.error = Some(e.clone());
                Err(e)
            }
        }
    }

    pub fn error(&self) -> Option<&BetError> {
        self.error.as_ref()
    }
}

use std::{fmt, str::FromStr};

use jiff::SignedDuration;
use serde_with::{DeserializeFromStr, SerializeDisplay};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ApiDurationError {
    #[error("duration {0:?} is missing the 's' suffix")]
    MissingUnit(String),

    #[error("invalid duration {0:?}")]
    Invalid(String),
}

/// A duration in the API's JSON form: decimal seconds followed by `s`, e.g. `"300s"`.
#[derive(SerializeDisplay, DeserializeFromStr, Debug, Copy, Clone, PartialEq, Eq)]
pub struct ApiDuration(SignedDuration);

impl ApiDuration {
    pub fn from_secs(secs: i64) -> Self {
        ApiDuration(SignedDuration::from_secs(secs))
    }

    pub fn as_signed_duration(&self) -> SignedDuration {
        self.0
    }
}

impl From<SignedDuration> for ApiDuration {
    fn from(value: SignedDuration) -> Self {
        ApiDuration(value)
    }
}

impl fmt::Display for ApiDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.subsec_nanos() == 0 {
            write!(f, "{}s", self.0.as_secs())
        } else {
            write!(f, "{}s", self.0.as_secs_f64())
        }
    }
}

impl FromStr for ApiDuration {
    type Err = ApiDurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let seconds = s
            .strip_suffix('s')
            .ok_or_else(|| ApiDurationError::MissingUnit(s.to_owned()))?;

        if let Ok(seconds) = seconds.parse::<i64>() {
            return Ok(ApiDuration::from_secs(seconds));
        }

        seconds
            .parse::<f64>()
            .ok()
            .and_then(|seconds| SignedDuration::try_from_secs_f64(seconds).ok())
            .map(ApiDuration)
            .ok_or_else(|| ApiDurationError::Invalid(s.to_owned()))
    }
}

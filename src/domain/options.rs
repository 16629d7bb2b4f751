use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A code that is not part of one of the fixed option lists.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {kind} code: {code}")]
pub struct UnknownCode {
    pub kind: &'static str,
    pub code: String,
}

impl UnknownCode {
    pub fn new(kind: &'static str, code: &str) -> Self {
        Self {
            kind,
            code: code.to_string(),
        }
    }
}

/// Relative recency window appended to keyword and site fragments as `when:<code>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeFilter {
    #[default]
    #[serde(rename = "none")]
    None,
    #[serde(rename = "1h")]
    PastHour,
    #[serde(rename = "3h")]
    Past3Hours,
    #[serde(rename = "12h")]
    Past12Hours,
    #[serde(rename = "1d")]
    PastDay,
    #[serde(rename = "7d")]
    PastWeek,
    #[serde(rename = "30d")]
    PastMonth,
    #[serde(rename = "1y")]
    PastYear,
}

impl TimeFilter {
    pub const ALL: [TimeFilter; 8] = [
        TimeFilter::None,
        TimeFilter::PastHour,
        TimeFilter::Past3Hours,
        TimeFilter::Past12Hours,
        TimeFilter::PastDay,
        TimeFilter::PastWeek,
        TimeFilter::PastMonth,
        TimeFilter::PastYear,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            TimeFilter::None => "none",
            TimeFilter::PastHour => "1h",
            TimeFilter::Past3Hours => "3h",
            TimeFilter::Past12Hours => "12h",
            TimeFilter::PastDay => "1d",
            TimeFilter::PastWeek => "7d",
            TimeFilter::PastMonth => "30d",
            TimeFilter::PastYear => "1y",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeFilter::None => "No filter",
            TimeFilter::PastHour => "Past hour",
            TimeFilter::Past3Hours => "Past 3 hours",
            TimeFilter::Past12Hours => "Past 12 hours",
            TimeFilter::PastDay => "Past day",
            TimeFilter::PastWeek => "Past week",
            TimeFilter::PastMonth => "Past month",
            TimeFilter::PastYear => "Past year",
        }
    }

    pub fn is_none(&self) -> bool {
        *self == TimeFilter::None
    }
}

impl fmt::Display for TimeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for TimeFilter {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.code() == s)
            .ok_or_else(|| UnknownCode::new("time filter", s))
    }
}

/// Google search operator prefixed to a keyword fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SearchOperator {
    #[default]
    #[serde(rename = "none")]
    None,
    #[serde(rename = "allintext:")]
    AllInText,
    #[serde(rename = "intitle:")]
    InTitle,
    #[serde(rename = "allintitle:")]
    AllInTitle,
    #[serde(rename = "inurl:")]
    InUrl,
    #[serde(rename = "allinurl:")]
    AllInUrl,
}

impl SearchOperator {
    pub const ALL: [SearchOperator; 6] = [
        SearchOperator::None,
        SearchOperator::AllInText,
        SearchOperator::InTitle,
        SearchOperator::AllInTitle,
        SearchOperator::InUrl,
        SearchOperator::AllInUrl,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            SearchOperator::None => "none",
            SearchOperator::AllInText => "allintext:",
            SearchOperator::InTitle => "intitle:",
            SearchOperator::AllInTitle => "allintitle:",
            SearchOperator::InUrl => "inurl:",
            SearchOperator::AllInUrl => "allinurl:",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SearchOperator::None => "Normal search",
            SearchOperator::AllInText => "allintext: (All words in text)",
            SearchOperator::InTitle => "intitle: (Word in title)",
            SearchOperator::AllInTitle => "allintitle: (All words in title)",
            SearchOperator::InUrl => "inurl: (Word in URL)",
            SearchOperator::AllInUrl => "allinurl: (All words in URL)",
        }
    }

    pub fn is_none(&self) -> bool {
        *self == SearchOperator::None
    }
}

impl fmt::Display for SearchOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for SearchOperator {
    type Err = UnknownCode;

    /// Accepts the operator with or without its trailing colon.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.code() == s || op.code().trim_end_matches(':') == s)
            .ok_or_else(|| UnknownCode::new("search operator", s))
    }
}

use super::RecordType;
use std::fmt;

/// DNS response code (RFC 1035 §4.1.1, RFC 6895).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseStatus {
    NoError,
    FormErr,
    ServFail,
    NXDomain,
    NotImp,
    Refused,
    Other(u16),
}

impl ResponseStatus {
    pub fn from_code(code: u16) -> Self {
        match code {
            0 => ResponseStatus::NoError,
            1 => ResponseStatus::FormErr,
            2 => ResponseStatus::ServFail,
            3 => ResponseStatus::NXDomain,
            4 => ResponseStatus::NotImp,
            5 => ResponseStatus::Refused,
            other => ResponseStatus::Other(other),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ResponseStatus::NoError)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseStatus::NoError => "NOERROR",
            ResponseStatus::FormErr => "FORMERR",
            ResponseStatus::ServFail => "SERVFAIL",
            ResponseStatus::NXDomain => "NXDOMAIN",
            ResponseStatus::NotImp => "NOTIMP",
            ResponseStatus::Refused => "REFUSED",
            ResponseStatus::Other(_) => "UNKNOWN",
        }
    }
}

impl fmt::Display for ResponseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseStatus::Other(code) => write!(f, "RCODE{}", code),
            known => write!(f, "{}", known.as_str()),
        }
    }
}

/// One resource record from the answer section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    /// `None` when the answer carries a type outside the lookup set.
    pub record_type: Option<RecordType>,
    /// Whole record in presentation format: `name ttl class type rdata`.
    pub presentation: String,
    /// Just the rdata in presentation format.
    pub data: String,
}

impl AnswerRecord {
    pub fn new(
        record_type: Option<RecordType>,
        presentation: impl Into<String>,
        data: impl Into<String>,
    ) -> Self {
        Self {
            record_type,
            presentation: presentation.into(),
            data: data.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeResponse {
    pub status: ResponseStatus,
    pub answers: Vec<AnswerRecord>,
    pub truncated: bool,
}

impl ExchangeResponse {
    pub fn new(status: ResponseStatus, answers: Vec<AnswerRecord>) -> Self {
        Self {
            status,
            answers,
            truncated: false,
        }
    }

    /// True when the reply carries data worth reporting: NOERROR with at least one answer.
    pub fn has_answers(&self) -> bool {
        self.status.is_success() && !self.answers.is_empty()
    }

    pub fn presentations(&self) -> Vec<String> {
        self.answers.iter().map(|a| a.presentation.clone()).collect()
    }
}

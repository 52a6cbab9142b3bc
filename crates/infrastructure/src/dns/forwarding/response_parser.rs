use super::record_type_map::RecordTypeMapper;
use dnsdump_domain::{AnswerRecord, DomainError, ExchangeResponse, ResponseStatus};
use hickory_proto::op::{Message, ResponseCode};
use tracing::debug;

pub struct ResponseParser;

impl ResponseParser {
    /// Message ID from the first two header bytes.
    pub fn response_id(response_bytes: &[u8]) -> Option<u16> {
        match response_bytes {
            [hi, lo, ..] => Some(u16::from_be_bytes([*hi, *lo])),
            _ => None,
        }
    }

    pub fn parse(response_bytes: &[u8]) -> Result<ExchangeResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        let status = Self::status(message.response_code());
        let truncated = message.truncated();

        let answers: Vec<AnswerRecord> = message
            .answers()
            .iter()
            .map(|record| {
                AnswerRecord::new(
                    RecordTypeMapper::from_hickory(record.record_type()),
                    record.to_string(),
                    record.data().to_string(),
                )
            })
            .collect();

        debug!(
            rcode = %status,
            answers = answers.len(),
            truncated = truncated,
            "DNS response parsed"
        );

        Ok(ExchangeResponse {
            status,
            answers,
            truncated,
        })
    }

    fn status(rcode: ResponseCode) -> ResponseStatus {
        ResponseStatus::from_code(u16::from(rcode))
    }
}

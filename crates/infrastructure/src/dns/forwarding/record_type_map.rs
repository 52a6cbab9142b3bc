//! Mapping between `dnsdump_domain::RecordType` and `hickory_proto::rr::RecordType`

use dnsdump_domain::RecordType;
use hickory_proto::rr::RecordType as HickoryRecordType;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Domain → hickory (for building queries)
    pub fn to_hickory(record_type: RecordType) -> HickoryRecordType {
        match record_type {
            RecordType::A => HickoryRecordType::A,
            RecordType::AAAA => HickoryRecordType::AAAA,
            RecordType::MX => HickoryRecordType::MX,
            RecordType::TXT => HickoryRecordType::TXT,
            RecordType::NS => HickoryRecordType::NS,
            RecordType::SOA => HickoryRecordType::SOA,
            RecordType::SRV => HickoryRecordType::SRV,
            RecordType::PTR => HickoryRecordType::PTR,
            RecordType::CAA => HickoryRecordType::CAA,
            RecordType::NAPTR => HickoryRecordType::NAPTR,
            RecordType::CNAME => HickoryRecordType::CNAME,
        }
    }

    /// Hickory → domain (for answers). `None` for types outside the lookup set.
    pub fn from_hickory(hickory_type: HickoryRecordType) -> Option<RecordType> {
        RecordType::from_u16(u16::from(hickory_type))
    }
}

use super::error::DecodeError;
use super::wire::{UnknownFields, WireField, WireRecord};
use crate::document_model::domain::{Member, Metadata, Service};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The record shapes the codec understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Member,
    Metadata,
    Service,
}

impl RecordKind {
    pub const ALL: [RecordKind; 3] = [RecordKind::Member, RecordKind::Metadata, RecordKind::Service];

    /// Serialization name table of this kind
    pub fn fields(self) -> &'static [WireField] {
        match self {
            RecordKind::Member => Member::FIELDS,
            RecordKind::Metadata => Metadata::FIELDS,
            RecordKind::Service => Service::FIELDS,
        }
    }

    /// Unknown-field policy declared by the record type
    pub fn default_unknown_fields(self) -> UnknownFields {
        match self {
            RecordKind::Member => Member::UNKNOWN_FIELDS,
            RecordKind::Metadata => Metadata::UNKNOWN_FIELDS,
            RecordKind::Service => Service::UNKNOWN_FIELDS,
        }
    }

    /// Detects the record kind from the top-level keys of a document.
    ///
    /// A kind is a candidate when all of its required wire keys are present.
    /// Among several candidates the one with the most required keys wins, so a
    /// service document carrying a stray `timestamp` is still a service. No
    /// candidate at all is an error.
    pub fn detect(object: &Map<String, Value>) -> Result<RecordKind, DecodeError> {
        let candidates = RecordKind::ALL
            .iter()
            .filter_map(|kind| {
                let required: Vec<&WireField> =
                    kind.fields().iter().filter(|f| f.required).collect();
                required
                    .iter()
                    .all(|f| object.contains_key(f.wire))
                    .then_some((*kind, required.len()))
            })
            .collect();

        pick_candidate(candidates)
    }
}

/// Picks the candidate with strictly the most required keys.
///
/// The current field tables have distinct required counts (7, 4, 1), so a tie
/// cannot come out of `detect` today; it is reported as ambiguous should a
/// future record kind share a count with an existing one.
fn pick_candidate(mut candidates: Vec<(RecordKind, usize)>) -> Result<RecordKind, DecodeError> {
    candidates.sort_by(|a, b| b.1.cmp(&a.1));

    match candidates.as_slice() {
        [] => Err(DecodeError::UndetectedKind { candidates: vec![] }),
        [(kind, _)] => Ok(*kind),
        [(first, a), (_, b), ..] if a > b => Ok(*first),
        [(_, best), ..] => {
            let best = *best;
            Err(DecodeError::UndetectedKind {
                candidates: candidates
                    .iter()
                    .filter(|(_, n)| *n == best)
                    .map(|(k, _)| *k)
                    .collect(),
            })
        }
    }
}

impl std::str::FromStr for RecordKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "member" => Ok(RecordKind::Member),
            "metadata" => Ok(RecordKind::Metadata),
            "service" => Ok(RecordKind::Service),
            _ => Err(format!(
                "Invalid record kind: {}. Please specify 'member', 'metadata' or 'service'",
                s
            )),
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordKind::Member => write!(f, "member"),
            RecordKind::Metadata => write!(f, "metadata"),
            RecordKind::Service => write!(f, "service"),
        }
    }
}

/// Any decoded record.
///
/// Serializes as the bare inner record, without a kind tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Record {
    Member(Member),
    Metadata(Metadata),
    Service(Service),
}

impl Record {
    pub fn kind(&self) -> RecordKind {
        match self {
            Record::Member(_) => RecordKind::Member,
            Record::Metadata(_) => RecordKind::Metadata,
            Record::Service(_) => RecordKind::Service,
        }
    }

    /// The value a human would use to identify this record in a report
    pub fn display_key(&self) -> &str {
        match self {
            Record::Member(m) => m.username(),
            Record::Metadata(m) => m.timestamp(),
            Record::Service(s) => s.bom_ref(),
        }
    }

    pub fn as_service(&self) -> Option<&Service> {
        match self {
            Record::Service(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_metadata(&self) -> Option<&Metadata> {
        match self {
            Record::Metadata(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_member(&self) -> Option<&Member> {
        match self {
            Record::Member(m) => Some(m),
            _ => None,
        }
    }
}

impl From<Member> for Record {
    fn from(member: Member) -> Self {
        Record::Member(member)
    }
}

impl From<Metadata> for Record {
    fn from(metadata: Metadata) -> Self {
        Record::Metadata(metadata)
    }
}

impl From<Service> for Record {
    fn from(service: Service) -> Self {
        Record::Service(service)
    }
}

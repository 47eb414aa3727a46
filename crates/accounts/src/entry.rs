use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use finledger_core::{Amount, Entity, EntryId};

/// Direction of a ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Credit,
    Debit,
}

/// One recorded credit or debit (immutable once appended).
///
/// Credits carry the description supplied with the deposit; debits never have
/// one, and the field is left out of the JSON entirely when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    id: EntryId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    amount: Amount,
    #[serde(rename = "type")]
    kind: EntryKind,
    created_at: DateTime<Utc>,
}

impl LedgerEntry {
    pub fn credit(description: Option<String>, amount: Amount, created_at: DateTime<Utc>) -> Self {
        Self {
            id: EntryId::new(),
            description,
            amount,
            kind: EntryKind::Credit,
            created_at,
        }
    }

    pub fn debit(amount: Amount, created_at: DateTime<Utc>) -> Self {
        Self {
            id: EntryId::new(),
            description: None,
            amount,
            kind: EntryKind::Debit,
            created_at,
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Entity for LedgerEntry {
    type Id = EntryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn debit_json_has_no_description() {
        let at = Utc.with_ymd_and_hms(2024, 1, 5, 12, 0, 0).unwrap();
        let json = serde_json::to_value(LedgerEntry::debit(Amount::from(20), at)).unwrap();

        assert!(json.get("description").is_none());
        assert_eq!(json["type"], "debit");
        assert_eq!(json["amount"].as_f64(), Some(20.0));
        assert_eq!(json["created_at"], "2024-01-05T12:00:00Z");
    }

    #[test]
    fn credit_json_carries_description() {
        let at = Utc.with_ymd_and_hms(2024, 1, 5, 12, 0, 0).unwrap();
        let entry = LedgerEntry::credit(Some("salary".to_string()), Amount::from(500), at);
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["description"], "salary");
        assert_eq!(json["type"], "credit");
        assert_eq!(json["id"], entry.id().to_string());
    }
}

//! Types for visitor registration and island entry

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Payment state of a registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Unpaid,
    Paid,
}

/// A visitor registration for island entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisitorRegistration {
    /// The registration id
    pub id: i64,

    /// Backend-generated code used for QR lookup and check-in
    #[serde(rename = "unique_code")]
    pub unique_code: String,

    /// Name of the group leader
    #[serde(rename = "leader_name", alias = "name")]
    pub leader_name: Option<String>,

    /// Planned visit date (ISO 8601)
    #[serde(rename = "visit_date")]
    pub visit_date: Option<String>,

    /// Payment state
    pub status: PaymentStatus,

    /// Total entry fee for the group
    #[serde(rename = "total_fee")]
    pub total_fee: Option<f64>,

    /// When the group checked in, if it has
    #[serde(rename = "checked_in_at")]
    pub checked_in_at: Option<String>,

    /// Creation timestamp
    #[serde(rename = "created_at")]
    pub created_at: Option<String>,
}

/// A member of a registered group
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupMember {
    /// The member id, once persisted
    pub id: Option<i64>,

    /// Full name
    pub name: String,

    /// Age
    pub age: Option<u32>,

    /// Sex
    pub sex: Option<String>,

    /// Nationality
    pub nationality: Option<String>,
}

/// A registration together with its group members, as returned by the
/// island-entry lookup endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IslandEntryRecord {
    /// The registration
    pub registration: VisitorRegistration,

    /// Group members covered by the registration
    #[serde(default)]
    pub members: Vec<GroupMember>,
}

impl IslandEntryRecord {
    /// Whether the group may be checked in: payment must be settled and the
    /// group must not already be inside.
    pub fn can_check_in(&self) -> bool {
        self.registration.status == PaymentStatus::Paid
            && self.registration.checked_in_at.is_none()
    }

    /// Whether the mark-as-paid action applies
    pub fn needs_payment(&self) -> bool {
        self.registration.status == PaymentStatus::Unpaid
    }
}

/// Member fields for a registration draft
#[derive(Debug, Clone, Serialize)]
pub struct MemberDraft {
    /// Full name
    pub name: String,

    /// Age
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,

    /// Sex
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex: Option<String>,

    /// Nationality
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
}

/// Fields for registering a visitor group
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationDraft {
    /// Name of the group leader
    #[serde(rename = "leader_name")]
    pub leader_name: String,

    /// Planned visit date (ISO 8601)
    #[serde(rename = "visit_date")]
    pub visit_date: String,

    /// Group members
    pub members: Vec<MemberDraft>,
}

impl RegistrationDraft {
    /// Reject incomplete drafts before any request goes out
    pub fn validate(&self) -> Result<(), Error> {
        if self.leader_name.trim().is_empty() {
            return Err(Error::validation("leader name is required"));
        }
        if self.visit_date.trim().is_empty() {
            return Err(Error::validation("visit date is required"));
        }
        if self.members.is_empty() {
            return Err(Error::validation("at least one group member is required"));
        }
        if self.members.iter().any(|m| m.name.trim().is_empty()) {
            return Err(Error::validation("every group member needs a name"));
        }
        Ok(())
    }
}

/// How to look a registration up at the entry point
#[derive(Debug, Clone)]
pub enum LookupQuery {
    /// By the backend-generated unique code (scanned from a QR)
    UniqueCode(String),

    /// By the group leader's name (manual fallback at the desk)
    LeaderName(String),
}

//! # Domain models for registered users and board tasks
//!
//! These types are `Serialize + Deserialize` and persist camelCase field
//! names, so the JSON written to the storage slot round-trips the layout the
//! listing and edit views expect (`firstName`, `phoneNumbers`,
//! `addresses[].zip`, ...). The draft counterpart of [`UserRecord`] lives in
//! [`crate::draft`]; only finished, validated records use these types.

use serde::{Deserialize, Serialize};
use time::Date;

/// A fully validated, persisted user registration.
///
/// `id` is assigned once at creation (millisecond timestamp, bumped on
/// collision by the record store) and never changes. The confirm-password
/// value checked at submit time is draft-only and is not part of this type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub gender: Gender,
    pub dob: Date,
    pub profile_type: ProfileType,
    pub phone_numbers: Vec<String>,
    pub addresses: Vec<Address>,
    pub relatives: Vec<Relative>,
    #[serde(default)]
    pub documents: Documents,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(()),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileType {
    #[default]
    Personal,
    Business,
}

impl ProfileType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileType::Personal => "personal",
            ProfileType::Business => "business",
        }
    }
}

impl std::str::FromStr for ProfileType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "personal" => Ok(ProfileType::Personal),
            "business" => Ok(ProfileType::Business),
            _ => Err(()),
        }
    }
}

/// A postal address. All fields required; `zip` is a validated string of at
/// most six characters, never a number (leading zeros must survive).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relationship {
    #[default]
    Parent,
    Sibling,
    Child,
    Married,
}

impl Relationship {
    pub fn as_str(&self) -> &'static str {
        match self {
            Relationship::Parent => "parent",
            Relationship::Sibling => "sibling",
            Relationship::Child => "child",
            Relationship::Married => "married",
        }
    }
}

impl std::str::FromStr for Relationship {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "parent" => Ok(Relationship::Parent),
            "sibling" => Ok(Relationship::Sibling),
            "child" => Ok(Relationship::Child),
            "married" => Ok(Relationship::Married),
            _ => Err(()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Relative {
    pub name: String,
    pub relationship: Relationship,
    pub age: u32,
}

/// Fixed document-upload slots. Each slot optionally holds an opaque file
/// descriptor (the selected file's name); blob bytes are never stored here.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Documents {
    #[serde(default)]
    pub license: Option<String>,
    #[serde(default)]
    pub national_id: Option<String>,
    #[serde(default)]
    pub birth_certificate: Option<String>,
    #[serde(default)]
    pub marriage_certificate: Option<String>,
}

impl Documents {
    pub fn get(&self, slot: DocumentSlot) -> Option<&str> {
        match slot {
            DocumentSlot::License => self.license.as_deref(),
            DocumentSlot::NationalId => self.national_id.as_deref(),
            DocumentSlot::BirthCertificate => self.birth_certificate.as_deref(),
            DocumentSlot::MarriageCertificate => self.marriage_certificate.as_deref(),
        }
    }

    pub fn set(&mut self, slot: DocumentSlot, file_name: Option<String>) {
        match slot {
            DocumentSlot::License => self.license = file_name,
            DocumentSlot::NationalId => self.national_id = file_name,
            DocumentSlot::BirthCertificate => self.birth_certificate = file_name,
            DocumentSlot::MarriageCertificate => self.marriage_certificate = file_name,
        }
    }
}

/// Visibility tag for one document slot; see [`crate::draft::RecordDraft::visible_slots`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentSlot {
    License,
    NationalId,
    BirthCertificate,
    MarriageCertificate,
}

impl DocumentSlot {
    pub fn label(&self) -> &'static str {
        match self {
            DocumentSlot::License => "Driving License",
            DocumentSlot::NationalId => "National ID",
            DocumentSlot::BirthCertificate => "Birth Certificate",
            DocumentSlot::MarriageCertificate => "Marriage Certificate",
        }
    }
}

/// A task on the board. `title` is immutable after creation; `status` changes
/// only through [`crate::board::apply_drag`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub status: TaskStatus,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [
        TaskStatus::Todo,
        TaskStatus::InProgress,
        TaskStatus::Completed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "inprogress",
            TaskStatus::Completed => "completed",
        }
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "todo" => Ok(TaskStatus::Todo),
            "inprogress" => Ok(TaskStatus::InProgress),
            "completed" => Ok(TaskStatus::Completed),
            _ => Err(()),
        }
    }
}

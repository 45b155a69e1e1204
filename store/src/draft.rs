//! # Registration draft — the form controller's state
//!
//! [`RecordDraft`] holds one in-progress registration exactly as entered:
//! every field is a string (selects included), so partially filled and
//! invalid states are representable. The creation form starts from
//! [`RecordDraft::default`]; the edit form seeds from
//! [`RecordDraft::from_record`]. [`RecordDraft::finish`] runs the schema and
//! produces a typed [`UserRecord`] only when every rule passes.
//!
//! The three repeating sections grow through [`RecordDraft::append`] and
//! shrink through [`RecordDraft::remove`], which refuses to drop the last
//! element so each list always keeps at least one entry.

use crate::models::{
    Address, DocumentSlot, Documents, Gender, ProfileType, Relationship, Relative, UserRecord,
};
use crate::validate::{age_on, parse_dob, validate, ValidationErrors};
use time::Date;

/// One relative row as entered; `age` stays a string until submit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RelativeDraft {
    pub name: String,
    pub relationship: String,
    pub age: String,
}

/// The variable-length sections of the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListField {
    PhoneNumbers,
    Addresses,
    Relatives,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RecordDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub gender: String,
    pub dob: String,
    pub profile_type: String,
    pub phone_numbers: Vec<String>,
    pub addresses: Vec<Address>,
    pub relatives: Vec<RelativeDraft>,
    pub documents: Documents,
}

impl Default for RecordDraft {
    /// Empty creation draft: one blank entry in each repeating section.
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            gender: String::new(),
            dob: String::new(),
            profile_type: String::new(),
            phone_numbers: vec![String::new()],
            addresses: vec![Address::default()],
            relatives: vec![RelativeDraft::default()],
            documents: Documents::default(),
        }
    }
}

impl RecordDraft {
    /// Full copy of an existing record for editing. The confirm-password
    /// field is pre-filled so the equality rule holds until the user touches
    /// either password input.
    pub fn from_record(record: &UserRecord) -> Self {
        Self {
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            email: record.email.clone(),
            password: record.password.clone(),
            confirm_password: record.password.clone(),
            gender: record.gender.as_str().to_string(),
            dob: record.dob.to_string(),
            profile_type: record.profile_type.as_str().to_string(),
            phone_numbers: record.phone_numbers.clone(),
            addresses: record.addresses.clone(),
            relatives: record
                .relatives
                .iter()
                .map(|r| RelativeDraft {
                    name: r.name.clone(),
                    relationship: r.relationship.as_str().to_string(),
                    age: r.age.to_string(),
                })
                .collect(),
            documents: record.documents.clone(),
        }
    }

    /// Append a blank entry to the given section.
    pub fn append(&mut self, field: ListField) {
        match field {
            ListField::PhoneNumbers => self.phone_numbers.push(String::new()),
            ListField::Addresses => self.addresses.push(Address::default()),
            ListField::Relatives => self.relatives.push(RelativeDraft::default()),
        }
    }

    /// Remove the entry at `index`. A no-op when only one entry remains or
    /// the index is out of range.
    pub fn remove(&mut self, field: ListField, index: usize) {
        match field {
            ListField::PhoneNumbers => {
                if self.phone_numbers.len() > 1 && index < self.phone_numbers.len() {
                    self.phone_numbers.remove(index);
                }
            }
            ListField::Addresses => {
                if self.addresses.len() > 1 && index < self.addresses.len() {
                    self.addresses.remove(index);
                }
            }
            ListField::Relatives => {
                if self.relatives.len() > 1 && index < self.relatives.len() {
                    self.relatives.remove(index);
                }
            }
        }
    }

    pub fn list_len(&self, field: ListField) -> usize {
        match field {
            ListField::PhoneNumbers => self.phone_numbers.len(),
            ListField::Addresses => self.addresses.len(),
            ListField::Relatives => self.relatives.len(),
        }
    }

    /// Which document slots the form should render, derived fresh from the
    /// current draft on every call:
    ///
    /// - age >= 18 reveals the license and national-ID slots;
    /// - age < 18 reveals the birth-certificate slot;
    /// - an empty or unparseable dob reveals neither group;
    /// - a relative with relationship `married` reveals the
    ///   marriage-certificate slot regardless of age.
    pub fn visible_slots(&self, today: Date) -> Vec<DocumentSlot> {
        let mut slots = Vec::new();
        if let Some(dob) = parse_dob(&self.dob) {
            if age_on(dob, today) >= 18 {
                slots.push(DocumentSlot::License);
                slots.push(DocumentSlot::NationalId);
            } else {
                slots.push(DocumentSlot::BirthCertificate);
            }
        }
        if self.relatives.iter().any(|r| r.relationship == "married") {
            slots.push(DocumentSlot::MarriageCertificate);
        }
        slots
    }

    /// Validate and build the finished record. `id` is the fresh id for a new
    /// registration or the existing id when editing. On failure nothing is
    /// built and the per-field errors come back for rendering.
    pub fn finish(&self, id: u64, today: Date) -> Result<UserRecord, ValidationErrors> {
        let errors = validate(self, today);
        if !errors.is_empty() {
            return Err(errors);
        }

        let Some(dob) = parse_dob(&self.dob) else {
            let mut errors = ValidationErrors::default();
            errors.insert("dob", "Date of birth is required");
            return Err(errors);
        };

        Ok(UserRecord {
            id,
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            gender: self.gender.parse::<Gender>().unwrap_or_default(),
            dob,
            profile_type: self.profile_type.parse::<ProfileType>().unwrap_or_default(),
            phone_numbers: self
                .phone_numbers
                .iter()
                .map(|p| p.trim().to_string())
                .collect(),
            addresses: self
                .addresses
                .iter()
                .map(|a| Address {
                    street: a.street.trim().to_string(),
                    city: a.city.trim().to_string(),
                    state: a.state.trim().to_string(),
                    zip: a.zip.trim().to_string(),
                })
                .collect(),
            relatives: self
                .relatives
                .iter()
                .map(|r| Relative {
                    name: r.name.trim().to_string(),
                    relationship: r.relationship.parse::<Relationship>().unwrap_or_default(),
                    age: r.age.trim().parse().unwrap_or_default(),
                })
                .collect(),
            documents: self.documents.clone(),
        })
    }
}

/// A complete, rule-satisfying draft for tests.
#[cfg(test)]
pub(crate) fn sample_draft() -> RecordDraft {
    RecordDraft {
        first_name: "Jane".into(),
        last_name: "Doe".into(),
        email: "jane.doe@example.com".into(),
        password: "Secret1!".into(),
        confirm_password: "Secret1!".into(),
        gender: "female".into(),
        dob: "1998-04-12".into(),
        profile_type: "personal".into(),
        phone_numbers: vec!["9876543210".into()],
        addresses: vec![Address {
            street: "12 MG Road".into(),
            city: "Bengaluru".into(),
            state: "Karnataka".into(),
            zip: "560001".into(),
        }],
        relatives: vec![RelativeDraft {
            name: "Asha Doe".into(),
            relationship: "parent".into(),
            age: "52".into(),
        }],
        documents: Documents::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    const TODAY: Date = date!(2026 - 08 - 27);

    #[test]
    fn remove_keeps_at_least_one_entry() {
        let mut draft = RecordDraft::default();
        for field in [ListField::PhoneNumbers, ListField::Addresses, ListField::Relatives] {
            draft.remove(field, 0);
            assert_eq!(draft.list_len(field), 1, "{field:?} dropped below one");

            draft.append(field);
            assert_eq!(draft.list_len(field), 2);
            draft.remove(field, 0);
            assert_eq!(draft.list_len(field), 1);
        }
    }

    #[test]
    fn minor_sees_birth_certificate_only() {
        let mut draft = sample_draft();
        draft.dob = "2016-08-27".into(); // ten years old
        let slots = draft.visible_slots(TODAY);
        assert_eq!(slots, vec![DocumentSlot::BirthCertificate]);
    }

    #[test]
    fn adult_sees_license_and_national_id() {
        let mut draft = sample_draft();
        draft.dob = "2001-08-27".into(); // twenty-five years old
        let slots = draft.visible_slots(TODAY);
        assert!(slots.contains(&DocumentSlot::License));
        assert!(slots.contains(&DocumentSlot::NationalId));
        assert!(!slots.contains(&DocumentSlot::BirthCertificate));
    }

    #[test]
    fn blank_dob_reveals_no_age_slots() {
        let mut draft = sample_draft();
        draft.dob.clear();
        assert!(draft.visible_slots(TODAY).is_empty());
    }

    #[test]
    fn married_relative_reveals_marriage_certificate() {
        let mut draft = sample_draft();
        draft.dob = "2016-08-27".into();
        draft.relatives.push(RelativeDraft {
            name: "Sam".into(),
            relationship: "married".into(),
            age: "30".into(),
        });
        let slots = draft.visible_slots(TODAY);
        assert!(slots.contains(&DocumentSlot::BirthCertificate));
        assert!(slots.contains(&DocumentSlot::MarriageCertificate));
    }

    #[test]
    fn finish_builds_a_typed_record() {
        let record = sample_draft().finish(42, TODAY).expect("valid draft");
        assert_eq!(record.id, 42);
        assert_eq!(record.gender, Gender::Female);
        assert_eq!(record.dob, date!(1998 - 04 - 12));
        assert_eq!(record.relatives[0].age, 52);
        assert_eq!(record.relatives[0].relationship, Relationship::Parent);
    }

    #[test]
    fn finish_rejects_invalid_drafts() {
        let mut draft = sample_draft();
        draft.email = "nope".into();
        let errors = sample_draft_err(&draft);
        assert_eq!(errors.len(), 1);
        assert!(errors.get("email").is_some());
    }

    fn sample_draft_err(draft: &RecordDraft) -> ValidationErrors {
        match draft.finish(1, TODAY) {
            Ok(_) => panic!("draft should not validate"),
            Err(e) => e,
        }
    }

    #[test]
    fn from_record_round_trips_through_finish() {
        let original = sample_draft().finish(7, TODAY).expect("valid draft");
        let rebuilt = RecordDraft::from_record(&original)
            .finish(7, TODAY)
            .expect("edited draft");
        assert_eq!(rebuilt, original);
    }
}

//! SubjectRegistry: the in-memory subject collection and its id counter.

use crate::domain::subject::{coerce_credits, Subject, SubjectDraft};
use thiserror::Error;

/// The two failures a registry operation can surface. The `Display`
/// strings are exactly the message bodies returned over HTTP.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Subject not found")]
    NotFound,
    #[error("All fields are required")]
    MissingFields,
}

/// Ordered collection of subjects plus a monotonically increasing id
/// counter. Ids are never reused, even after deletion. The list keeps
/// insertion order; after deletions it is not guaranteed sorted by id.
pub struct SubjectRegistry {
    subjects: Vec<Subject>,
    next_id: u64,
}

impl SubjectRegistry {
    /// Creates an empty registry; the first assigned id is 1.
    pub fn new() -> Self {
        Self {
            subjects: Vec::new(),
            next_id: 1,
        }
    }

    /// Registry pre-populated with the two sample records the server
    /// starts with.
    pub fn seeded() -> Self {
        Self {
            subjects: vec![
                Subject {
                    id: 1,
                    subject_code: "CS101".to_string(),
                    subject_name: "Data Structures".to_string(),
                    credits: Some(4),
                    faculty: "Dr. Smith".to_string(),
                    semester: "Fall 2024".to_string(),
                },
                Subject {
                    id: 2,
                    subject_code: "CS102".to_string(),
                    subject_name: "Algorithms".to_string(),
                    credits: Some(3),
                    faculty: "Dr. Johnson".to_string(),
                    semester: "Spring 2024".to_string(),
                },
            ],
            next_id: 3,
        }
    }

    /// The full sequence, in insertion order. No pagination, no filtering.
    pub fn list(&self) -> &[Subject] {
        &self.subjects
    }

    /// Looks up a subject by id.
    pub fn get(&self, id: u64) -> Result<&Subject, RegistryError> {
        self.subjects
            .iter()
            .find(|s| s.id == id)
            .ok_or(RegistryError::NotFound)
    }

    /// Validates and appends a new subject, assigning the next id.
    ///
    /// All five fields must be present (see `SubjectDraft::has_all_fields`).
    /// On failure nothing is mutated and the caller gets a single
    /// all-fields-required error with no per-field detail.
    pub fn create(&mut self, draft: SubjectDraft) -> Result<Subject, RegistryError> {
        if !draft.has_all_fields() {
            return Err(RegistryError::MissingFields);
        }
        let subject = Subject {
            id: self.next_id,
            subject_code: draft.subject_code.unwrap_or_default(),
            subject_name: draft.subject_name.unwrap_or_default(),
            credits: draft.credits.as_ref().and_then(coerce_credits),
            faculty: draft.faculty.unwrap_or_default(),
            semester: draft.semester.unwrap_or_default(),
        };
        self.next_id += 1;
        self.subjects.push(subject.clone());
        Ok(subject)
    }

    /// Replaces every field of an existing subject, keeping its id.
    ///
    /// Unlike `create` this performs no validation: absent text fields are
    /// stored as empty strings and absent or unparseable credits as null.
    /// The asymmetry with create is intentional.
    pub fn update(&mut self, id: u64, draft: SubjectDraft) -> Result<Subject, RegistryError> {
        let slot = self
            .subjects
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(RegistryError::NotFound)?;
        *slot = Subject {
            id,
            subject_code: draft.subject_code.unwrap_or_default(),
            subject_name: draft.subject_name.unwrap_or_default(),
            credits: draft.credits.as_ref().and_then(coerce_credits),
            faculty: draft.faculty.unwrap_or_default(),
            semester: draft.semester.unwrap_or_default(),
        };
        Ok(slot.clone())
    }

    /// Removes the subject with the given id, preserving the relative
    /// order of the rest. The id is not reused afterwards.
    pub fn remove(&mut self, id: u64) -> Result<(), RegistryError> {
        let index = self
            .subjects
            .iter()
            .position(|s| s.id == id)
            .ok_or(RegistryError::NotFound)?;
        self.subjects.remove(index);
        Ok(())
    }

    /// Case-insensitive substring search over subject code, name and
    /// faculty. An empty query matches every record; no match returns an
    /// empty vector, not an error.
    pub fn search(&self, query: &str) -> Vec<Subject> {
        let needle = query.to_lowercase();
        self.subjects
            .iter()
            .filter(|s| s.matches(&needle))
            .cloned()
            .collect()
    }
}

impl Default for SubjectRegistry {
    fn default() -> Self {
        Self::new()
    }
}

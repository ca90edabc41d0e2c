//! Person use-case service.
//!
//! # Responsibility
//! - Apply the count policy (defaults, absolute maximum) that sits above
//!   the repository, then delegate persistence to it.
//! - Stay storage-agnostic: any [`PersonRepository`] implementation works.
//!
//! # Invariants
//! - The repository receives an already-clamped count; it applies whatever
//!   it is given literally.
//! - Delegated calls never reinterpret repository results or errors.

use crate::model::person::{Person, PersonId};
use crate::repo::person_repo::{PersonRepository, RepoResult};
use log::warn;

/// Absolute maximum number of records returned by any read.
pub const MAX_COUNT: u32 = 10;
/// Count used by [`PersonService::list_persons`] when the caller gives none.
pub const DEFAULT_LIST_COUNT: u32 = 10;
/// Count used by [`PersonService::get_persons_from_id`] when the caller
/// gives none.
pub const DEFAULT_GET_COUNT: u32 = 1;

/// Use-case service wrapper for person CRUD operations.
pub struct PersonService<R: PersonRepository> {
    repo: R,
}

impl<R: PersonRepository> PersonService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists records, defaulting the count to [`DEFAULT_LIST_COUNT`] and
    /// clamping it to [`MAX_COUNT`].
    pub fn list_persons(&self, count: Option<u32>) -> RepoResult<Vec<Person>> {
        let count = clamp_count(count.unwrap_or(DEFAULT_LIST_COUNT));
        self.repo.list_persons(count)
    }

    /// Reads up to `count` records starting at `id`, defaulting the count
    /// to [`DEFAULT_GET_COUNT`] and clamping it to [`MAX_COUNT`].
    pub fn get_persons_from_id(
        &self,
        id: PersonId,
        count: Option<u32>,
    ) -> RepoResult<Vec<Person>> {
        let count = clamp_count(count.unwrap_or(DEFAULT_GET_COUNT));
        self.repo.get_persons_from_id(id, count)
    }

    /// Creates a record and returns its store-assigned id.
    pub fn add_person(&self, person: &Person) -> RepoResult<PersonId> {
        self.repo.add_person(person)
    }

    /// Rewrites the record matching `id`; succeeds even when no row matches.
    pub fn update_person(&self, person: &Person, id: PersonId) -> RepoResult<()> {
        self.repo.update_person(person, id)
    }

    /// Removes the record matching `id`; succeeds even when no row matches.
    pub fn delete_person(&self, id: PersonId) -> RepoResult<()> {
        self.repo.delete_person(id)
    }
}

fn clamp_count(requested: u32) -> u32 {
    if requested > MAX_COUNT {
        warn!(
            "event=count_clamped module=service requested={} returned={}",
            requested, MAX_COUNT
        );
        return MAX_COUNT;
    }
    requested
}

#[cfg(test)]
mod tests {
    use super::{clamp_count, DEFAULT_GET_COUNT, DEFAULT_LIST_COUNT, MAX_COUNT};

    #[test]
    fn clamp_count_caps_at_max() {
        assert_eq!(clamp_count(100), MAX_COUNT);
        assert_eq!(clamp_count(MAX_COUNT + 1), MAX_COUNT);
    }

    #[test]
    fn clamp_count_passes_small_values_through() {
        assert_eq!(clamp_count(0), 0);
        assert_eq!(clamp_count(3), 3);
        assert_eq!(clamp_count(MAX_COUNT), MAX_COUNT);
    }

    #[test]
    fn defaults_stay_within_the_maximum() {
        assert!(DEFAULT_LIST_COUNT <= MAX_COUNT);
        assert!(DEFAULT_GET_COUNT <= MAX_COUNT);
    }
}

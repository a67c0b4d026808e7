//! Review use-case service.
//!
//! # Invariants
//! - Records reach the repository only after `Review::new` validated them.
//! - Repository errors are returned unchanged.

use crate::model::employee::{EmployeeId, EmployeeLookup};
use crate::model::review::{Review, ReviewId};
use crate::repo::review_repo::ReviewRepository;
use crate::repo::RepoResult;

/// Review entry points over a repository and an employee lookup.
pub struct ReviewService<R: ReviewRepository, L: EmployeeLookup> {
    repo: R,
    employees: L,
}

impl<R: ReviewRepository, L: EmployeeLookup> ReviewService<R, L> {
    pub fn new(repo: R, employees: L) -> Self {
        Self { repo, employees }
    }

    pub fn create_table(&self) -> RepoResult<()> {
        self.repo.create_table()
    }

    pub fn drop_table(&self) -> RepoResult<()> {
        self.repo.drop_table()
    }

    /// Validates a new review and persists it immediately.
    ///
    /// # Contract
    /// - Nothing is written when validation fails.
    /// - The returned review carries its storage-assigned id.
    pub fn create(
        &self,
        year: i64,
        summary: impl Into<String>,
        employee_id: EmployeeId,
    ) -> RepoResult<Review> {
        let mut review = Review::new(year, summary, employee_id, &self.employees)?;
        self.repo.save(&mut review)?;
        Ok(review)
    }

    /// Re-targets `review` at another employee using this service's lookup.
    pub fn set_employee_id(
        &self,
        review: &mut Review,
        employee_id: EmployeeId,
    ) -> RepoResult<()> {
        Ok(review.set_employee_id(employee_id, &self.employees)?)
    }

    pub fn save(&self, review: &mut Review) -> RepoResult<ReviewId> {
        self.repo.save(review)
    }

    pub fn find_by_id(&self, id: ReviewId) -> RepoResult<Option<Review>> {
        self.repo.find_by_id(id)
    }

    pub fn update(&self, review: &Review) -> RepoResult<()> {
        self.repo.update(review)
    }

    pub fn delete(&self, review: &mut Review) -> RepoResult<()> {
        self.repo.delete(review)
    }

    pub fn get_all(&self) -> RepoResult<Vec<Review>> {
        self.repo.get_all()
    }
}

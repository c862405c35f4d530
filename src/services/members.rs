//! Member management service

use chrono::Utc;
use validator::Validate;

use crate::{
    error::AppResult,
    models::{
        borrowed_book::BorrowedBook,
        member::{CreateMember, Member, UpdateMember},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct MembersService {
    repository: Repository,
}

impl MembersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Member>> {
        self.repository.members.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Member> {
        self.repository.members.get_by_id(id).await
    }

    /// Create a member, joining today unless a date is given
    pub async fn create(&self, data: &CreateMember) -> AppResult<Member> {
        data.validate()?;
        let join_date = data.join_date.unwrap_or_else(|| Utc::now().date_naive());
        let member = self.repository.members.create(data, join_date).await?;
        tracing::info!("Created member {} ({})", member.member_id, member.email);
        Ok(member)
    }

    pub async fn update(&self, id: i32, data: &UpdateMember) -> AppResult<Member> {
        data.validate()?;
        self.repository.members.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.members.delete(id).await?;
        tracing::info!("Deleted member {}", id);
        Ok(())
    }

    /// Borrow records of a member
    pub async fn borrowed_books(&self, id: i32) -> AppResult<Vec<BorrowedBook>> {
        // Verify member exists
        self.repository.members.get_by_id(id).await?;
        self.repository.borrowed_books.list_for_member(id).await
    }
}

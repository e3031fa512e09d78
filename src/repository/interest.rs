use diesel::prelude::*;

use crate::domain::interest::{Interest, NewInterest, UpdateInterest};
use crate::domain::types::InterestId;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, InterestListQuery, InterestReader, InterestWriter};

impl InterestReader for DieselRepository {
    fn get_interest_by_id(&self, id: InterestId) -> RepositoryResult<Option<Interest>> {
        use crate::models::interest::Interest as DbInterest;
        use crate::schema::interests;

        let mut conn = self.conn()?;
        let interest = interests::table
            .find(id.get())
            .first::<DbInterest>(&mut conn)
            .optional()?;

        Ok(interest.map(Into::into))
    }

    fn list_interests(
        &self,
        query: InterestListQuery,
    ) -> RepositoryResult<(usize, Vec<Interest>)> {
        use crate::models::interest::Interest as DbInterest;
        use crate::schema::interests;

        let mut conn = self.conn()?;

        let build = |query: &InterestListQuery| {
            let mut stmt = interests::table.into_boxed();
            if let Some(term) = &query.search {
                stmt = stmt.filter(interests::name.like(format!("%{term}%")));
            }
            if let Some(is_active) = query.is_active {
                stmt = stmt.filter(interests::is_active.eq(is_active));
            }
            stmt
        };

        let total: i64 = build(&query).count().get_result(&mut conn)?;

        let mut stmt = build(&query).order(interests::name.asc());
        if let Some(pagination) = &query.pagination {
            stmt = stmt.limit(pagination.limit()).offset(pagination.offset());
        }

        let items = stmt
            .load::<DbInterest>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok((total as usize, items))
    }
}

impl InterestWriter for DieselRepository {
    fn create_interest(&self, new_interest: &NewInterest) -> RepositoryResult<Interest> {
        use crate::models::interest::{Interest as DbInterest, NewInterest as DbNewInterest};
        use crate::schema::interests;

        let mut conn = self.conn()?;
        let insertable: DbNewInterest = new_interest.into();
        let created = diesel::insert_into(interests::table)
            .values(&insertable)
            .get_result::<DbInterest>(&mut conn)?;

        Ok(created.into())
    }

    fn update_interest(
        &self,
        interest_id: InterestId,
        updates: &UpdateInterest,
    ) -> RepositoryResult<Interest> {
        use crate::models::interest::{Interest as DbInterest, UpdateInterest as DbUpdateInterest};
        use crate::schema::interests;

        let mut conn = self.conn()?;
        let db_updates: DbUpdateInterest = updates.into();

        let updated = diesel::update(interests::table.find(interest_id.get()))
            .set(&db_updates)
            .get_result::<DbInterest>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_interest(&self, interest_id: InterestId) -> RepositoryResult<()> {
        use crate::schema::interests;

        let mut conn = self.conn()?;
        let affected =
            diesel::delete(interests::table.find(interest_id.get())).execute(&mut conn)?;
        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

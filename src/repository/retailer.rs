use diesel::prelude::*;

use crate::domain::retailer::{NewRetailer, Retailer, UpdateRetailer};
use crate::domain::types::RetailerId;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, RetailerListQuery, RetailerReader, RetailerWriter};

impl RetailerReader for DieselRepository {
    fn get_retailer_by_id(&self, id: RetailerId) -> RepositoryResult<Option<Retailer>> {
        use crate::models::retailer::Retailer as DbRetailer;
        use crate::schema::retailers;

        let mut conn = self.conn()?;
        let retailer = retailers::table
            .find(id.get())
            .first::<DbRetailer>(&mut conn)
            .optional()?;

        retailer
            .map(|r| r.try_into().map_err(RepositoryError::from))
            .transpose()
    }

    fn list_retailers(
        &self,
        query: RetailerListQuery,
    ) -> RepositoryResult<(usize, Vec<Retailer>)> {
        use crate::models::retailer::Retailer as DbRetailer;
        use crate::schema::retailers;

        let mut conn = self.conn()?;

        let build = |query: &RetailerListQuery| {
            let mut stmt = retailers::table.into_boxed();
            if let Some(term) = &query.search {
                let pattern = format!("%{term}%");
                stmt = stmt.filter(
                    retailers::name
                        .like(pattern.clone())
                        .or(retailers::email.like(pattern.clone()))
                        .or(retailers::phone.like(pattern)),
                );
            }
            if let Some(status) = query.status {
                stmt = stmt.filter(retailers::status.eq(status.to_string()));
            }
            stmt
        };

        let total: i64 = build(&query).count().get_result(&mut conn)?;

        let mut stmt = build(&query).order(retailers::name.asc());
        if let Some(pagination) = &query.pagination {
            stmt = stmt.limit(pagination.limit()).offset(pagination.offset());
        }

        let items = stmt
            .load::<DbRetailer>(&mut conn)?
            .into_iter()
            .map(|r| r.try_into().map_err(RepositoryError::from))
            .collect::<RepositoryResult<Vec<Retailer>>>()?;

        Ok((total as usize, items))
    }
}

impl RetailerWriter for DieselRepository {
    fn create_retailer(&self, new_retailer: &NewRetailer) -> RepositoryResult<Retailer> {
        use crate::models::retailer::{NewRetailer as DbNewRetailer, Retailer as DbRetailer};
        use crate::schema::retailers;

        let mut conn = self.conn()?;
        let insertable: DbNewRetailer = new_retailer.into();
        let created = diesel::insert_into(retailers::table)
            .values(&insertable)
            .get_result::<DbRetailer>(&mut conn)?;

        Ok(created.try_into()?)
    }

    fn update_retailer(
        &self,
        retailer_id: RetailerId,
        updates: &UpdateRetailer,
    ) -> RepositoryResult<Retailer> {
        use crate::models::retailer::{Retailer as DbRetailer, UpdateRetailer as DbUpdateRetailer};
        use crate::schema::retailers;

        let mut conn = self.conn()?;
        let db_updates: DbUpdateRetailer = updates.into();

        let updated = diesel::update(retailers::table.find(retailer_id.get()))
            .set(&db_updates)
            .get_result::<DbRetailer>(&mut conn)?;

        Ok(updated.try_into()?)
    }

    fn delete_retailer(&self, retailer_id: RetailerId) -> RepositoryResult<()> {
        use crate::schema::{payments, retailers};

        let mut conn = self.conn()?;

        // Payments keep history; deleting a retailer with payment records is a
        // foreign key violation surfaced to the caller.
        let has_payments: i64 = payments::table
            .filter(payments::retailer_id.eq(retailer_id.get()))
            .count()
            .get_result(&mut conn)?;
        if has_payments > 0 {
            return Err(RepositoryError::ConstraintViolation(
                "retailer has payment records".to_string(),
            ));
        }

        let affected =
            diesel::delete(retailers::table.find(retailer_id.get())).execute(&mut conn)?;
        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

use diesel::prelude::*;

use crate::domain::category::{Category, NewCategory, UpdateCategory};
use crate::domain::types::CategoryId;
use crate::repository::errors::RepositoryResult;
use crate::repository::{CategoryListQuery, CategoryReader, CategoryWriter, DieselRepository};

impl CategoryReader for DieselRepository {
    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>> {
        use crate::models::category::Category as DbCategory;
        use crate::schema::categories;

        let mut conn = self.conn()?;
        let category = categories::table
            .find(id.get())
            .first::<DbCategory>(&mut conn)
            .optional()?;

        Ok(category.map(Into::into))
    }

    fn list_categories(
        &self,
        query: CategoryListQuery,
    ) -> RepositoryResult<(usize, Vec<Category>)> {
        use crate::models::category::Category as DbCategory;
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let build = |query: &CategoryListQuery| {
            let mut stmt = categories::table.into_boxed();
            if let Some(term) = &query.search {
                let pattern = format!("%{term}%");
                stmt = stmt.filter(
                    categories::name
                        .like(pattern.clone())
                        .or(categories::slug.like(pattern)),
                );
            }
            if let Some(is_active) = query.is_active {
                stmt = stmt.filter(categories::is_active.eq(is_active));
            }
            stmt
        };

        let total: i64 = build(&query).count().get_result(&mut conn)?;

        let mut stmt = build(&query).order(categories::name.asc());
        if let Some(pagination) = &query.pagination {
            stmt = stmt.limit(pagination.limit()).offset(pagination.offset());
        }

        let items = stmt
            .load::<DbCategory>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok((total as usize, items))
    }
}

impl CategoryWriter for DieselRepository {
    fn create_category(&self, new_category: &NewCategory) -> RepositoryResult<Category> {
        use crate::models::category::{Category as DbCategory, NewCategory as DbNewCategory};
        use crate::schema::categories;

        let mut conn = self.conn()?;
        let insertable: DbNewCategory = new_category.into();
        let created = diesel::insert_into(categories::table)
            .values(&insertable)
            .get_result::<DbCategory>(&mut conn)?;

        Ok(created.into())
    }

    fn update_category(
        &self,
        category_id: CategoryId,
        updates: &UpdateCategory,
    ) -> RepositoryResult<Category> {
        use crate::models::category::{Category as DbCategory, UpdateCategory as DbUpdateCategory};
        use crate::schema::categories;

        let mut conn = self.conn()?;
        let db_updates: DbUpdateCategory = updates.into();

        let updated = diesel::update(categories::table.find(category_id.get()))
            .set(&db_updates)
            .get_result::<DbCategory>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_category(&self, category_id: CategoryId) -> RepositoryResult<()> {
        use crate::schema::categories;

        let mut conn = self.conn()?;
        let affected =
            diesel::delete(categories::table.find(category_id.get())).execute(&mut conn)?;
        if affected == 0 {
            return Err(crate::repository::errors::RepositoryError::NotFound);
        }
        Ok(())
    }
}

use diesel::prelude::*;

use crate::domain::template::{NewTemplate, NotificationTemplate, UpdateTemplate};
use crate::domain::types::TemplateId;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, TemplateListQuery, TemplateReader, TemplateWriter};

impl TemplateReader for DieselRepository {
    fn get_template_by_id(
        &self,
        id: TemplateId,
    ) -> RepositoryResult<Option<NotificationTemplate>> {
        use crate::models::template::NotificationTemplate as DbTemplate;
        use crate::schema::notification_templates;

        let mut conn = self.conn()?;
        let template = notification_templates::table
            .find(id.get())
            .first::<DbTemplate>(&mut conn)
            .optional()?;

        template
            .map(|t| t.try_into().map_err(RepositoryError::from))
            .transpose()
    }

    fn list_templates(
        &self,
        query: TemplateListQuery,
    ) -> RepositoryResult<(usize, Vec<NotificationTemplate>)> {
        use crate::models::template::NotificationTemplate as DbTemplate;
        use crate::schema::notification_templates;

        let mut conn = self.conn()?;

        let build = |query: &TemplateListQuery| {
            let mut stmt = notification_templates::table.into_boxed();
            if let Some(tag) = query.tag {
                stmt = stmt.filter(notification_templates::tag.eq(tag.to_string()));
            }
            if let Some(is_active) = query.is_active {
                stmt = stmt.filter(notification_templates::is_active.eq(is_active));
            }
            stmt
        };

        let total: i64 = build(&query).count().get_result(&mut conn)?;

        let mut stmt = build(&query).order(notification_templates::name.asc());
        if let Some(pagination) = &query.pagination {
            stmt = stmt.limit(pagination.limit()).offset(pagination.offset());
        }

        let items = stmt
            .load::<DbTemplate>(&mut conn)?
            .into_iter()
            .map(|t| t.try_into().map_err(RepositoryError::from))
            .collect::<RepositoryResult<Vec<NotificationTemplate>>>()?;

        Ok((total as usize, items))
    }
}

impl TemplateWriter for DieselRepository {
    fn create_template(
        &self,
        new_template: &NewTemplate,
    ) -> RepositoryResult<NotificationTemplate> {
        use crate::models::template::{
            NewTemplate as DbNewTemplate, NotificationTemplate as DbTemplate,
        };
        use crate::schema::notification_templates;

        let mut conn = self.conn()?;
        let insertable: DbNewTemplate = new_template.into();
        let created = diesel::insert_into(notification_templates::table)
            .values(&insertable)
            .get_result::<DbTemplate>(&mut conn)?;

        Ok(created.try_into()?)
    }

    fn update_template(
        &self,
        template_id: TemplateId,
        updates: &UpdateTemplate,
    ) -> RepositoryResult<NotificationTemplate> {
        use crate::models::template::{
            NotificationTemplate as DbTemplate, UpdateTemplate as DbUpdateTemplate,
        };
        use crate::schema::notification_templates;

        let mut conn = self.conn()?;
        let db_updates: DbUpdateTemplate = updates.into();

        let updated = diesel::update(notification_templates::table.find(template_id.get()))
            .set(&db_updates)
            .get_result::<DbTemplate>(&mut conn)?;

        Ok(updated.try_into()?)
    }

    fn delete_template(&self, template_id: TemplateId) -> RepositoryResult<()> {
        use crate::schema::notification_templates;

        let mut conn = self.conn()?;
        let affected = diesel::delete(notification_templates::table.find(template_id.get()))
            .execute(&mut conn)?;
        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

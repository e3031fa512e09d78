use serde::Deserialize;
use validator::Validate;

use crate::domain::category::{NewCategory, UpdateCategory};
use crate::domain::types::TypeConstraintError;
use crate::forms::checkbox;

#[derive(Deserialize, Validate)]
/// Form data for creating a category.
pub struct AddCategoryForm {
    #[validate(length(min = 1))]
    pub name: String,
    /// Optional explicit slug; derived from the name when blank.
    pub slug: Option<String>,
}

impl TryFrom<AddCategoryForm> for NewCategory {
    type Error = TypeConstraintError;

    fn try_from(form: AddCategoryForm) -> Result<Self, Self::Error> {
        NewCategory::try_new(form.name, form.slug, true)
    }
}

#[derive(Deserialize, Validate)]
/// Form data for updating an existing category.
pub struct SaveCategoryForm {
    pub id: i32,
    #[validate(length(min = 1))]
    pub name: String,
    pub slug: Option<String>,
    #[serde(default)]
    pub is_active: Option<String>,
}

impl TryFrom<&SaveCategoryForm> for UpdateCategory {
    type Error = TypeConstraintError;

    fn try_from(form: &SaveCategoryForm) -> Result<Self, Self::Error> {
        UpdateCategory::try_new(form.name.clone(), form.slug.clone(), checkbox(&form.is_active))
    }
}

#[derive(Deserialize)]
/// Form data posted by the confirmed delete dialog.
pub struct DeleteCategoryForm {
    pub id: i32,
}

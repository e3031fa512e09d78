use chrono::NaiveDate;

use crate::db::DbPool;
use crate::domain::application::{ApplicationStatus, OnboardingApplication};
use crate::domain::category::{Category, NewCategory, UpdateCategory};
use crate::domain::interest::{Interest, NewInterest, UpdateInterest};
use crate::domain::payment::{Payment, PaymentMethod, PaymentStatus};
use crate::domain::retailer::{NewRetailer, Retailer, RetailerStatus, UpdateRetailer};
use crate::domain::template::{NewTemplate, NotificationTemplate, TemplateTag, UpdateTemplate};
use crate::domain::types::{ApplicationId, CategoryId, InterestId, PaymentId, RetailerId, TemplateId};
use crate::repository::errors::RepositoryResult;

pub mod application;
pub mod category;
pub mod errors;
pub mod interest;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod payment;
pub mod retailer;
pub mod template;

#[derive(Debug, Clone, Copy)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Pagination {
    pub(crate) fn offset(&self) -> i64 {
        let page = if self.page == 0 { 1 } else { self.page };
        ((page - 1) * self.per_page) as i64
    }

    pub(crate) fn limit(&self) -> i64 {
        self.per_page as i64
    }
}

macro_rules! paginate_builder {
    () => {
        pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
            self.pagination = Some(Pagination { page, per_page });
            self
        }
    };
}

#[derive(Debug, Clone, Default)]
pub struct CategoryListQuery {
    pub search: Option<String>,
    pub is_active: Option<bool>,
    pub pagination: Option<Pagination>,
}

impl CategoryListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    paginate_builder!();
}

#[derive(Debug, Clone, Default)]
pub struct InterestListQuery {
    pub search: Option<String>,
    pub is_active: Option<bool>,
    pub pagination: Option<Pagination>,
}

impl InterestListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    paginate_builder!();
}

#[derive(Debug, Clone, Default)]
pub struct RetailerListQuery {
    pub search: Option<String>,
    pub status: Option<RetailerStatus>,
    pub pagination: Option<Pagination>,
}

impl RetailerListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn status(mut self, status: RetailerStatus) -> Self {
        self.status = Some(status);
        self
    }

    paginate_builder!();
}

#[derive(Debug, Clone, Default)]
pub struct PaymentListQuery {
    pub search: Option<String>,
    pub status: Option<PaymentStatus>,
    pub method: Option<PaymentMethod>,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
    pub pagination: Option<Pagination>,
}

impl PaymentListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn status(mut self, status: PaymentStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn method(mut self, method: PaymentMethod) -> Self {
        self.method = Some(method);
        self
    }

    pub fn from_date(mut self, date: NaiveDate) -> Self {
        self.from_date = Some(date);
        self
    }

    pub fn to_date(mut self, date: NaiveDate) -> Self {
        self.to_date = Some(date);
        self
    }

    paginate_builder!();
}

#[derive(Debug, Clone, Default)]
pub struct ApplicationListQuery {
    pub status: Option<ApplicationStatus>,
    pub pagination: Option<Pagination>,
}

impl ApplicationListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: ApplicationStatus) -> Self {
        self.status = Some(status);
        self
    }

    paginate_builder!();
}

#[derive(Debug, Clone, Default)]
pub struct TemplateListQuery {
    pub tag: Option<TemplateTag>,
    pub is_active: Option<bool>,
    pub pagination: Option<Pagination>,
}

impl TemplateListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tag(mut self, tag: TemplateTag) -> Self {
        self.tag = Some(tag);
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    paginate_builder!();
}

pub trait CategoryReader {
    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>>;
    fn list_categories(&self, query: CategoryListQuery) -> RepositoryResult<(usize, Vec<Category>)>;
}

pub trait CategoryWriter {
    fn create_category(&self, new_category: &NewCategory) -> RepositoryResult<Category>;
    fn update_category(
        &self,
        category_id: CategoryId,
        updates: &UpdateCategory,
    ) -> RepositoryResult<Category>;
    fn delete_category(&self, category_id: CategoryId) -> RepositoryResult<()>;
}

pub trait InterestReader {
    fn get_interest_by_id(&self, id: InterestId) -> RepositoryResult<Option<Interest>>;
    fn list_interests(&self, query: InterestListQuery) -> RepositoryResult<(usize, Vec<Interest>)>;
}

pub trait InterestWriter {
    fn create_interest(&self, new_interest: &NewInterest) -> RepositoryResult<Interest>;
    fn update_interest(
        &self,
        interest_id: InterestId,
        updates: &UpdateInterest,
    ) -> RepositoryResult<Interest>;
    fn delete_interest(&self, interest_id: InterestId) -> RepositoryResult<()>;
}

pub trait RetailerReader {
    fn get_retailer_by_id(&self, id: RetailerId) -> RepositoryResult<Option<Retailer>>;
    fn list_retailers(&self, query: RetailerListQuery) -> RepositoryResult<(usize, Vec<Retailer>)>;
}

pub trait RetailerWriter {
    fn create_retailer(&self, new_retailer: &NewRetailer) -> RepositoryResult<Retailer>;
    fn update_retailer(
        &self,
        retailer_id: RetailerId,
        updates: &UpdateRetailer,
    ) -> RepositoryResult<Retailer>;
    fn delete_retailer(&self, retailer_id: RetailerId) -> RepositoryResult<()>;
}

pub trait PaymentReader {
    fn get_payment_by_id(&self, id: PaymentId)
    -> RepositoryResult<Option<(Payment, Retailer)>>;
    fn list_payments(&self, query: PaymentListQuery) -> RepositoryResult<(usize, Vec<Payment>)>;
}

pub trait ApplicationReader {
    fn get_application_by_id(
        &self,
        id: ApplicationId,
    ) -> RepositoryResult<Option<OnboardingApplication>>;
    fn list_applications(
        &self,
        query: ApplicationListQuery,
    ) -> RepositoryResult<(usize, Vec<OnboardingApplication>)>;
}

pub trait ApplicationWriter {
    /// Marks the application approved and creates the retailer row in one
    /// transaction.
    fn approve_application(&self, application_id: ApplicationId) -> RepositoryResult<Retailer>;
    fn reject_application(
        &self,
        application_id: ApplicationId,
    ) -> RepositoryResult<OnboardingApplication>;
}

pub trait TemplateReader {
    fn get_template_by_id(
        &self,
        id: TemplateId,
    ) -> RepositoryResult<Option<NotificationTemplate>>;
    fn list_templates(
        &self,
        query: TemplateListQuery,
    ) -> RepositoryResult<(usize, Vec<NotificationTemplate>)>;
}

pub trait TemplateWriter {
    fn create_template(&self, new_template: &NewTemplate)
    -> RepositoryResult<NotificationTemplate>;
    fn update_template(
        &self,
        template_id: TemplateId,
        updates: &UpdateTemplate,
    ) -> RepositoryResult<NotificationTemplate>;
    fn delete_template(&self, template_id: TemplateId) -> RepositoryResult<()>;
}

/// Diesel implementation of every repository trait, shared via `web::Data`.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub(crate) fn conn(&self) -> RepositoryResult<crate::db::DbConnection> {
        Ok(self.pool.get()?)
    }
}

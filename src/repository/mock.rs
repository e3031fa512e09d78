//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::application::OnboardingApplication;
use crate::domain::category::{Category, NewCategory, UpdateCategory};
use crate::domain::interest::{Interest, NewInterest, UpdateInterest};
use crate::domain::payment::Payment;
use crate::domain::retailer::{NewRetailer, Retailer, UpdateRetailer};
use crate::domain::template::{NewTemplate, NotificationTemplate, UpdateTemplate};
use crate::domain::types::{
    ApplicationId, CategoryId, InterestId, PaymentId, RetailerId, TemplateId,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    ApplicationListQuery, ApplicationReader, ApplicationWriter, CategoryListQuery, CategoryReader,
    CategoryWriter, InterestListQuery, InterestReader, InterestWriter, PaymentListQuery,
    PaymentReader, RetailerListQuery, RetailerReader, RetailerWriter, TemplateListQuery,
    TemplateReader, TemplateWriter,
};

mock! {
    pub Repository {}

    impl CategoryReader for Repository {
        fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>>;
        fn list_categories(&self, query: CategoryListQuery) -> RepositoryResult<(usize, Vec<Category>)>;
    }

    impl CategoryWriter for Repository {
        fn create_category(&self, new_category: &NewCategory) -> RepositoryResult<Category>;
        fn update_category(
            &self,
            category_id: CategoryId,
            updates: &UpdateCategory,
        ) -> RepositoryResult<Category>;
        fn delete_category(&self, category_id: CategoryId) -> RepositoryResult<()>;
    }

    impl InterestReader for Repository {
        fn get_interest_by_id(&self, id: InterestId) -> RepositoryResult<Option<Interest>>;
        fn list_interests(&self, query: InterestListQuery) -> RepositoryResult<(usize, Vec<Interest>)>;
    }

    impl InterestWriter for Repository {
        fn create_interest(&self, new_interest: &NewInterest) -> RepositoryResult<Interest>;
        fn update_interest(
            &self,
            interest_id: InterestId,
            updates: &UpdateInterest,
        ) -> RepositoryResult<Interest>;
        fn delete_interest(&self, interest_id: InterestId) -> RepositoryResult<()>;
    }

    impl RetailerReader for Repository {
        fn get_retailer_by_id(&self, id: RetailerId) -> RepositoryResult<Option<Retailer>>;
        fn list_retailers(&self, query: RetailerListQuery) -> RepositoryResult<(usize, Vec<Retailer>)>;
    }

    impl RetailerWriter for Repository {
        fn create_retailer(&self, new_retailer: &NewRetailer) -> RepositoryResult<Retailer>;
        fn update_retailer(
            &self,
            retailer_id: RetailerId,
            updates: &UpdateRetailer,
        ) -> RepositoryResult<Retailer>;
        fn delete_retailer(&self, retailer_id: RetailerId) -> RepositoryResult<()>;
    }

    impl PaymentReader for Repository {
        fn get_payment_by_id(&self, id: PaymentId) -> RepositoryResult<Option<(Payment, Retailer)>>;
        fn list_payments(&self, query: PaymentListQuery) -> RepositoryResult<(usize, Vec<Payment>)>;
    }

    impl ApplicationReader for Repository {
        fn get_application_by_id(
            &self,
            id: ApplicationId,
        ) -> RepositoryResult<Option<OnboardingApplication>>;
        fn list_applications(
            &self,
            query: ApplicationListQuery,
        ) -> RepositoryResult<(usize, Vec<OnboardingApplication>)>;
    }

    impl ApplicationWriter for Repository {
        fn approve_application(&self, application_id: ApplicationId) -> RepositoryResult<Retailer>;
        fn reject_application(
            &self,
            application_id: ApplicationId,
        ) -> RepositoryResult<OnboardingApplication>;
    }

    impl TemplateReader for Repository {
        fn get_template_by_id(&self, id: TemplateId) -> RepositoryResult<Option<NotificationTemplate>>;
        fn list_templates(
            &self,
            query: TemplateListQuery,
        ) -> RepositoryResult<(usize, Vec<NotificationTemplate>)>;
    }

    impl TemplateWriter for Repository {
        fn create_template(&self, new_template: &NewTemplate) -> RepositoryResult<NotificationTemplate>;
        fn update_template(
            &self,
            template_id: TemplateId,
            updates: &UpdateTemplate,
        ) -> RepositoryResult<NotificationTemplate>;
        fn delete_template(&self, template_id: TemplateId) -> RepositoryResult<()>;
    }
}

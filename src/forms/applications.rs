use serde::Deserialize;

#[derive(Deserialize)]
/// Form data for approving or rejecting an onboarding application.
pub struct DecideApplicationForm {
    pub id: i32,
}

//! Create Advertisement Use Case
//!
//! Validates and stores an advertisement on behalf of an authenticated user.

use std::sync::Arc;

use crate::domain::entity::advertisement::Advertisement;
use crate::domain::repository::AdsRepository;
use crate::domain::value_object::validate_advertisement;
use crate::error::AdsResult;

/// Create advertisement input
pub struct CreateAdvertisementInput {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
    /// Login resolved from the caller's token
    pub owner_login: String,
}

/// Create advertisement output
#[derive(Debug)]
pub struct CreateAdvertisementOutput {
    pub advertisement: Advertisement,
}

pub struct CreateAdvertisementUseCase<R>
where
    R: AdsRepository,
{
    repo: Arc<R>,
}

impl<R> CreateAdvertisementUseCase<R>
where
    R: AdsRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        input: CreateAdvertisementInput,
    ) -> AdsResult<CreateAdvertisementOutput> {
        let fields = validate_advertisement(
            input.title,
            input.description,
            input.price,
            input.image_url,
        )?;

        let advertisement = Advertisement::new(fields, input.owner_login);
        self.repo.create(&advertisement).await?;

        tracing::info!(
            owner = %advertisement.owner_login,
            price = %advertisement.price,
            "Advertisement created"
        );

        Ok(CreateAdvertisementOutput { advertisement })
    }
}

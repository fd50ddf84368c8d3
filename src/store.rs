use crate::donor::DonorProvidedDetails;
use crate::error::StoreError;
use async_trait::async_trait;

/// Persists the donor's details once an address page completes.
#[async_trait]
pub trait DonorStore: Send + Sync {
    async fn put(&self, donor: &DonorProvidedDetails) -> Result<(), StoreError>;
}

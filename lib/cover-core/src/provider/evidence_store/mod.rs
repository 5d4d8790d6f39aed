use async_trait::async_trait;
use thiserror::Error;

use crate::model::claim::{EvidenceFile, EvidenceReference};

#[derive(Debug, Error)]
pub enum EvidenceStoreError {
    #[error("Evidence upload failed: `{0}`")]
    UploadFailed(String),
}

/// External artifact storage for claim proof.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EvidenceStore {
    async fn upload(&self, file: EvidenceFile) -> Result<EvidenceReference, EvidenceStoreError>;
}

use std::sync::Arc;

use async_trait::async_trait;
use rstest::rstest;
use time::OffsetDateTime;
use time::macros::date;
use tokio::sync::Notify;
use uuid::Uuid;

use super::ClaimService;
use super::dto::CreateClaimRequestDTO;
use super::validator::can_file_claim;
use crate::config::core_config::CoreConfig;
use crate::model::claim::{Claim, ClaimStateEnum, EvidenceFile, EvidenceReference};
use crate::model::policy::{Policy, PolicyId, PolicyStatusEnum};
use crate::model::session::AccountId;
use crate::provider::evidence_store::{EvidenceStoreError, MockEvidenceStore};
use crate::provider::policy_ledger::{MockPolicyLedger, PolicyLedger, PolicyLedgerError};
use crate::service::common_dto::LoadOutcome;
use crate::service::error::{
    BusinessLogicError, EntityNotFoundError, ServiceError, ValidationError,
};
use crate::service::policy::PolicyService;

fn account() -> AccountId {
    AccountId::new("0xABC0000000000000000000000000000000001234")
}

fn active_policy() -> Policy {
    Policy {
        id: Uuid::new_v4(),
        flight_number: "AA123".to_string(),
        airline: "Delta".to_string(),
        departure_date: date!(2031 - 06 - 01),
        coverage_amount: 500,
        premium: 50,
        status: PolicyStatusEnum::Active,
    }
}

fn pending_claim(policy_id: PolicyId) -> Claim {
    Claim {
        id: Uuid::new_v4(),
        policy_id,
        delay_duration_hours: 3,
        evidence_reference: EvidenceReference::new("ipfs://QmEvidence"),
        status: ClaimStateEnum::Pending,
        created_date: OffsetDateTime::now_utc(),
    }
}

fn evidence() -> EvidenceFile {
    EvidenceFile {
        file_name: "delay-notification.png".to_string(),
        content: b"screenshot bytes".to_vec(),
    }
}

fn claim_request(policy_id: PolicyId) -> CreateClaimRequestDTO {
    CreateClaimRequestDTO {
        policy_id,
        delay_duration_hours: 3,
        evidence: evidence(),
    }
}

/// Builds a claim service whose registry already holds `policies` for the
/// test account.
async fn setup_service(
    mut policy_ledger: MockPolicyLedger,
    evidence_store: MockEvidenceStore,
    policies: Vec<Policy>,
) -> ClaimService {
    policy_ledger
        .expect_list_policies()
        .times(1)
        .return_once(move |_| Ok(policies));

    let config = Arc::new(CoreConfig::default());
    let policy_ledger: Arc<dyn PolicyLedger + Send + Sync> = Arc::new(policy_ledger);
    let policy_service = Arc::new(PolicyService::new(policy_ledger.clone(), config.clone()));
    policy_service.load_policies(&account()).await.unwrap();

    ClaimService::new(
        policy_service,
        policy_ledger,
        Arc::new(evidence_store),
        config,
    )
}

#[tokio::test]
async fn test_submit_claim_success_creates_pending_claim() {
    let policy = active_policy();
    let policy_id = policy.id;

    let mut evidence_store = MockEvidenceStore::default();
    evidence_store
        .expect_upload()
        .times(1)
        .withf(|file| file.file_name == "delay-notification.png" && !file.content.is_empty())
        .returning(|_| Ok(EvidenceReference::new("ipfs://QmEvidence")));

    let mut policy_ledger = MockPolicyLedger::default();
    policy_ledger
        .expect_submit_claim()
        .times(1)
        .withf(move |request| {
            request.policy_id == policy_id
                && request.delay_duration_hours == 3
                && request.evidence_reference.as_str() == "ipfs://QmEvidence"
        })
        .returning(move |request| {
            Ok(Claim {
                id: Uuid::new_v4(),
                policy_id: request.policy_id,
                delay_duration_hours: request.delay_duration_hours,
                evidence_reference: request.evidence_reference,
                status: ClaimStateEnum::Pending,
                created_date: OffsetDateTime::now_utc(),
            })
        });

    let service = setup_service(policy_ledger, evidence_store, vec![policy]).await;
    let claim = service
        .submit_claim(&account(), claim_request(policy_id))
        .await
        .unwrap();

    assert_eq!(policy_id, claim.policy_id);
    assert_eq!(ClaimStateEnum::Pending, claim.status);

    let claims = service.get_claims(&account()).await.unwrap();
    assert_eq!(1, claims.len());
    assert_eq!(claim, claims[0]);
}

#[tokio::test]
async fn test_submit_claim_unknown_policy_fails() {
    let service = setup_service(
        MockPolicyLedger::default(),
        MockEvidenceStore::default(),
        vec![active_policy()],
    )
    .await;

    let unknown = Uuid::new_v4();
    let result = service.submit_claim(&account(), claim_request(unknown)).await;

    assert!(matches!(
        result,
        Err(ServiceError::EntityNotFound(EntityNotFoundError::Policy(id))) if id == unknown
    ));
}

#[tokio::test]
async fn test_submit_claim_against_expired_policy_is_ineligible() {
    let mut policy = active_policy();
    policy.status = PolicyStatusEnum::Expired;
    let policy_id = policy.id;

    let service = setup_service(
        MockPolicyLedger::default(),
        MockEvidenceStore::default(),
        vec![policy],
    )
    .await;

    let result = service
        .submit_claim(&account(), claim_request(policy_id))
        .await;

    assert!(matches!(
        result,
        Err(ServiceError::BusinessLogic(BusinessLogicError::IneligiblePolicy(id))) if id == policy_id
    ));
}

#[tokio::test]
async fn test_second_submit_while_pending_is_ineligible_without_upload() {
    let policy = active_policy();
    let policy_id = policy.id;

    let mut evidence_store = MockEvidenceStore::default();
    evidence_store
        .expect_upload()
        .times(1)
        .returning(|_| Ok(EvidenceReference::new("ipfs://QmEvidence")));

    let mut policy_ledger = MockPolicyLedger::default();
    policy_ledger
        .expect_submit_claim()
        .times(1)
        .returning(move |request| {
            Ok(Claim {
                id: Uuid::new_v4(),
                policy_id: request.policy_id,
                delay_duration_hours: request.delay_duration_hours,
                evidence_reference: request.evidence_reference,
                status: ClaimStateEnum::Pending,
                created_date: OffsetDateTime::now_utc(),
            })
        });

    let service = setup_service(policy_ledger, evidence_store, vec![policy]).await;
    service
        .submit_claim(&account(), claim_request(policy_id))
        .await
        .unwrap();

    let second = service
        .submit_claim(&account(), claim_request(policy_id))
        .await;

    assert!(matches!(
        second,
        Err(ServiceError::BusinessLogic(
            BusinessLogicError::IneligiblePolicy(_)
        ))
    ));
    assert_eq!(1, service.get_claims(&account()).await.unwrap().len());
}

#[tokio::test]
async fn test_delay_below_threshold_fails_before_upload() {
    let policy = active_policy();
    let policy_id = policy.id;

    let service = setup_service(
        MockPolicyLedger::default(),
        MockEvidenceStore::default(),
        vec![policy],
    )
    .await;

    let result = service
        .submit_claim(
            &account(),
            CreateClaimRequestDTO {
                delay_duration_hours: 1,
                ..claim_request(policy_id)
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(ServiceError::Validation(
            ValidationError::DelayBelowThreshold { got: 1, threshold: 2 }
        ))
    ));
}

#[tokio::test]
async fn test_empty_evidence_fails_before_upload() {
    let policy = active_policy();
    let policy_id = policy.id;

    let service = setup_service(
        MockPolicyLedger::default(),
        MockEvidenceStore::default(),
        vec![policy],
    )
    .await;

    let result = service
        .submit_claim(
            &account(),
            CreateClaimRequestDTO {
                evidence: EvidenceFile {
                    file_name: "empty.png".to_string(),
                    content: vec![],
                },
                ..claim_request(policy_id)
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(ServiceError::Validation(ValidationError::EvidenceMissing))
    ));
}

#[tokio::test]
async fn test_upload_failure_creates_no_claim() {
    let policy = active_policy();
    let policy_id = policy.id;

    let mut evidence_store = MockEvidenceStore::default();
    evidence_store
        .expect_upload()
        .times(1)
        .returning(|_| Err(EvidenceStoreError::UploadFailed("gateway timeout".to_string())));

    let service = setup_service(MockPolicyLedger::default(), evidence_store, vec![policy]).await;
    let result = service
        .submit_claim(&account(), claim_request(policy_id))
        .await;

    assert!(matches!(
        result,
        Err(ServiceError::EvidenceStore(
            EvidenceStoreError::UploadFailed(_)
        ))
    ));
    assert!(service.get_claims(&account()).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_ledger_rejection_after_upload_creates_no_claim() {
    let policy = active_policy();
    let policy_id = policy.id;

    let mut evidence_store = MockEvidenceStore::default();
    evidence_store
        .expect_upload()
        .times(1)
        .returning(|_| Ok(EvidenceReference::new("ipfs://QmEvidence")));

    let mut policy_ledger = MockPolicyLedger::default();
    policy_ledger
        .expect_submit_claim()
        .times(1)
        .returning(|_| Err(PolicyLedgerError::SubmissionFailed("contract reverted".to_string())));

    let service = setup_service(policy_ledger, evidence_store, vec![policy]).await;
    let result = service
        .submit_claim(&account(), claim_request(policy_id))
        .await;

    assert!(matches!(
        result,
        Err(ServiceError::PolicyLedger(
            PolicyLedgerError::SubmissionFailed(_)
        ))
    ));
    assert!(service.get_claims(&account()).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_load_claims_replaces_view() {
    let policy = active_policy();
    let claim = pending_claim(policy.id);

    let mut policy_ledger = MockPolicyLedger::default();
    {
        let claim = claim.clone();
        policy_ledger
            .expect_list_claims()
            .times(1)
            .return_once(move |_| Ok(vec![claim]));
    }

    let service = setup_service(policy_ledger, MockEvidenceStore::default(), vec![policy]).await;

    assert_eq!(
        LoadOutcome::Applied,
        service.load_claims(&account()).await.unwrap()
    );
    let claims = service.get_claims(&account()).await.unwrap();
    assert_eq!(1, claims.len());
    assert_eq!(claim.id, claims[0].id);
    assert_eq!(ClaimStateEnum::Pending, claims[0].status);
}

struct BlockingLedger {
    started: Arc<Notify>,
    release: Arc<Notify>,
    claims: Vec<Claim>,
}

#[async_trait]
impl PolicyLedger for BlockingLedger {
    async fn list_policies(&self, _account: &AccountId) -> Result<Vec<Policy>, PolicyLedgerError> {
        unimplemented!()
    }

    async fn list_claims(&self, _account: &AccountId) -> Result<Vec<Claim>, PolicyLedgerError> {
        self.started.notify_one();
        self.release.notified().await;
        Ok(self.claims.clone())
    }

    async fn purchase_policy(
        &self,
        _account: &AccountId,
        _request: crate::provider::policy_ledger::dto::PurchasePolicyRequest,
    ) -> Result<Policy, PolicyLedgerError> {
        unimplemented!()
    }

    async fn submit_claim(
        &self,
        _request: crate::provider::policy_ledger::dto::SubmitClaimRequest,
    ) -> Result<Claim, PolicyLedgerError> {
        unimplemented!()
    }
}

#[tokio::test]
async fn test_invalidated_claim_load_discards_result_without_mutation() {
    let started = Arc::new(Notify::new());
    let release = Arc::new(Notify::new());

    let config = Arc::new(CoreConfig::default());
    let policy_service = Arc::new(PolicyService::new(
        Arc::new(MockPolicyLedger::default()),
        config.clone(),
    ));
    let service = Arc::new(ClaimService::new(
        policy_service,
        Arc::new(BlockingLedger {
            started: started.clone(),
            release: release.clone(),
            claims: vec![pending_claim(Uuid::new_v4())],
        }),
        Arc::new(MockEvidenceStore::default()),
        config,
    ));

    let load = tokio::spawn({
        let service = service.clone();
        async move { service.load_claims(&account()).await }
    });

    // navigate away while the ledger call is parked
    started.notified().await;
    service.invalidate_pending_loads().await;
    release.notify_one();

    assert_eq!(LoadOutcome::Superseded, load.await.unwrap().unwrap());
    assert!(service.get_claims(&account()).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_can_file_claim_offered_for_active_policy_only() {
    let policy = active_policy();
    let policy_id = policy.id;

    let service = setup_service(
        MockPolicyLedger::default(),
        MockEvidenceStore::default(),
        vec![policy],
    )
    .await;

    assert!(service.can_file_claim(&account(), &policy_id).await.unwrap());

    let unknown = Uuid::new_v4();
    let result = service.can_file_claim(&account(), &unknown).await;
    assert!(matches!(
        result,
        Err(ServiceError::EntityNotFound(EntityNotFoundError::Policy(_)))
    ));
}

#[rstest]
#[case(PolicyStatusEnum::Active, true)]
#[case(PolicyStatusEnum::Expired, false)]
#[case(PolicyStatusEnum::Claimed, false)]
fn test_can_file_claim_requires_active_status(
    #[case] status: PolicyStatusEnum,
    #[case] expected: bool,
) {
    let mut policy = active_policy();
    policy.status = status;

    assert_eq!(expected, can_file_claim(&policy, &[]));
}

#[rstest]
#[case(ClaimStateEnum::Pending, false)]
#[case(ClaimStateEnum::Approved, true)]
#[case(ClaimStateEnum::Rejected, true)]
fn test_can_file_claim_blocked_only_by_pending_claims(
    #[case] claim_state: ClaimStateEnum,
    #[case] expected: bool,
) {
    let policy = active_policy();
    let mut claim = pending_claim(policy.id);
    claim.status = claim_state;

    assert_eq!(expected, can_file_claim(&policy, &[claim]));
}

#[test]
fn test_can_file_claim_ignores_claims_of_other_policies() {
    let policy = active_policy();
    let other = pending_claim(Uuid::new_v4());

    assert!(can_file_claim(&policy, &[other]));
}

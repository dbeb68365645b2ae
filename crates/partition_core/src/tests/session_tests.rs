use super::*;
use crate::test_support::{selector, DialogEffect, RecordingDialog, ScriptedCreator};
use crate::{controller::SubmissionState, dialog::PartitionAlert};
use shared::domain::CreatePartitionOutcome;

fn session_with(
    outcome: CreatePartitionOutcome,
) -> (
    PartitionDialogSession,
    Arc<ScriptedCreator>,
    Arc<RecordingDialog>,
) {
    let creator = Arc::new(ScriptedCreator::outcome(outcome));
    let dialog = Arc::new(RecordingDialog::default());
    let controller = Arc::new(SubmissionController::new(creator.clone(), dialog.clone()));
    let session = PartitionDialogSession::new(controller, selector(), Some("months".into()));
    (session, creator, dialog)
}

#[test]
fn submit_is_disabled_for_empty_and_invalid_names() {
    let (mut session, _, _) = session_with(CreatePartitionOutcome::Unrecognized);

    assert!(session.is_valid());
    assert!(!session.can_submit());

    session.set_candidate("a b");
    assert!(!session.is_valid());
    assert!(!session.violations().is_empty());
    assert!(session.validation().tooltip().is_some());
    assert!(!session.can_submit());

    session.set_candidate("march_2024");
    assert!(session.can_submit());
    assert!(session.violations().is_empty());
}

#[tokio::test]
async fn empty_name_is_not_sent() {
    let (mut session, creator, dialog) = session_with(CreatePartitionOutcome::Unrecognized);

    let report = session.on_submit().await;

    assert_eq!(report, SubmitReport::Rejected(RejectReason::EmptyName));
    assert!(creator.requests().await.is_empty());
    assert!(dialog.effects().await.is_empty());
}

#[tokio::test]
async fn invalid_name_triggered_anyway_is_not_sent() {
    let (mut session, creator, _) = session_with(CreatePartitionOutcome::Unrecognized);
    session.set_candidate("a b");

    let report = session.on_submit().await;

    assert!(matches!(
        report,
        SubmitReport::Rejected(RejectReason::InvalidName(_))
    ));
    assert!(creator.requests().await.is_empty());
    assert_eq!(session.candidate(), "a b");
}

#[tokio::test]
async fn success_clears_the_candidate() {
    let (mut session, creator, dialog) = session_with(CreatePartitionOutcome::Success {
        partition_set_name: "months".into(),
        partition_key: "march_2024".into(),
    });
    session.set_candidate("march_2024");

    let report = session.on_submit().await;

    assert_eq!(
        report,
        SubmitReport::Created {
            partition_key: "march_2024".into()
        }
    );
    assert_eq!(session.candidate(), "");
    assert_eq!(creator.requests().await[0].partition_set_name, "months");
    assert_eq!(
        dialog.effects().await,
        vec![
            DialogEffect::Selected("march_2024".into()),
            DialogEffect::CloseRequested,
        ]
    );
}

#[tokio::test]
async fn duplicate_keeps_the_candidate_for_retry() {
    let (mut session, _, dialog) = session_with(CreatePartitionOutcome::DuplicateName);
    session.set_candidate("march_2024");

    let report = session.on_submit().await;

    assert_eq!(report, SubmitReport::Alerted(PartitionAlert::DuplicateName));
    assert_eq!(session.candidate(), "march_2024");
    assert!(!session.is_submitting());
    assert!(session.can_submit());
    assert!(!dialog
        .effects()
        .await
        .contains(&DialogEffect::CloseRequested));
    assert_eq!(session.controller.state(), SubmissionState::Idle);
}

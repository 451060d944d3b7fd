//! End-to-end batch scenarios over the mock client

use forkshift::bridge::{GhError, MockCall, MockRepoClient, RepoClient};
use forkshift::{filter_forks, is_affirmative, transfer_forks, Repo, TransferStatus};

fn olduser_repos() -> Vec<Repo> {
    vec![
        Repo::new("a", "olduser/a", false),
        Repo::new("b", "olduser/b", true),
        Repo::new("c", "olduser/c", true),
    ]
}

#[tokio::test]
async fn full_batch_succeeds() {
    let mock = MockRepoClient::new().with_repos(olduser_repos());

    let repos = mock.list_repos("olduser").await.unwrap();
    let forks = filter_forks(repos);
    let names: Vec<&str> = forks.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["b", "c"]);

    let report = transfer_forks(&mock, "olduser", "newuser", forks).await;

    assert_eq!(report.success_count(), 2);
    assert_eq!(report.fail_count(), 0);
    assert_eq!(
        mock.calls(),
        vec![
            MockCall::ListRepos {
                account: "olduser".to_string(),
            },
            MockCall::TransferRepo {
                owner: "olduser".to_string(),
                name: "b".to_string(),
                new_owner: "newuser".to_string(),
            },
            MockCall::TransferRepo {
                owner: "olduser".to_string(),
                name: "c".to_string(),
                new_owner: "newuser".to_string(),
            },
        ]
    );
}

#[tokio::test]
async fn one_failure_does_not_stop_the_batch() {
    let mock = MockRepoClient::new()
        .with_repos(olduser_repos())
        .with_failing_transfer("b");

    let forks = filter_forks(mock.list_repos("olduser").await.unwrap());
    let report = transfer_forks(&mock, "olduser", "newuser", forks).await;

    assert_eq!(report.success_count(), 1);
    assert_eq!(report.fail_count(), 1);

    // "c" was still attempted, in order, after "b" failed
    assert_eq!(mock.transfer_calls(), 2);
    assert_eq!(report.outcomes[0].repo.name, "b");
    assert_eq!(report.outcomes[0].status, TransferStatus::Failed);
    assert_eq!(report.outcomes[1].repo.name, "c");
    assert_eq!(report.outcomes[1].status, TransferStatus::Succeeded);
}

#[tokio::test]
async fn no_forks_means_no_transfers() {
    let mock = MockRepoClient::new().with_repos(vec![
        Repo::new("a", "olduser/a", false),
        Repo::new("d", "olduser/d", false),
    ]);

    let forks = filter_forks(mock.list_repos("olduser").await.unwrap());
    assert!(forks.is_empty());

    // The run stops at the empty filter; no confirmation, no transfers.
    assert_eq!(mock.transfer_calls(), 0);
}

#[tokio::test]
async fn declined_confirmation_gates_every_transfer() {
    let mock = MockRepoClient::new().with_repos(olduser_repos());
    let forks = filter_forks(mock.list_repos("olduser").await.unwrap());
    assert_eq!(forks.len(), 2);

    // Every non-"y" answer declines, and a decline means the transfer
    // loop is never entered.
    for answer in ["", "n", "N", "no", "yes", "q\n"] {
        assert!(!is_affirmative(answer), "{answer:?} should decline");
    }
    assert_eq!(mock.transfer_calls(), 0);
}

#[tokio::test]
async fn listing_failure_aborts_before_any_transfer() {
    let mock = MockRepoClient::new().with_list_error("HTTP 502 from api.github.com");

    let result = mock.list_repos("olduser").await;
    assert!(matches!(result, Err(GhError::CommandFailed { .. })));

    // Nothing was mutated, so the whole run is safe to retry.
    assert_eq!(mock.transfer_calls(), 0);
}

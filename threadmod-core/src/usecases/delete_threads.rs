use super::{prelude::*, validate_batch::*};
use crate::{
    batch::{aggregate, ItemOutcome, ProcessingOrder},
    visibility,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteThreads {
    /// Ordered by descending id, i.e. in the order
    /// they have to be deleted.
    pub threads: Vec<Thread>,
}

/// Validates the deletion of many threads at once.
///
/// Threads that don't exist (anymore) or are invisible are skipped
/// while every denied thread is reported.
pub fn delete_threads<R>(ctx: &Context<R>, threads: Option<Vec<ThreadId>>) -> Result<DeleteThreads>
where
    R: ThreadRepo,
{
    let kind = ActionKind::DeleteThreads;
    let ids = requested_ids(kind, threads)?;
    check_limit(kind, ctx.limits.threads, ids.len())?;
    log::debug!("Validating {} thread(s) to be deleted", ids.len());

    let requested = ids.len();
    let result = aggregate(ids, ProcessingOrder::Descending, |id| -> Result<ItemOutcome<_, _>> {
        let Some(thread) = visibility::load_visible_thread(ctx.repo, ctx.acl, ctx.user, id)? else {
            log::debug!("Skipping thread {id} that could not be found");
            return Ok(ItemOutcome::Skipped);
        };
        Ok(match authorize_all(DELETE_THREAD, ctx.acl, ctx.user, &thread) {
            Ok(()) => ItemOutcome::Accepted(thread),
            Err(denial) => ItemOutcome::Rejected(ItemDenial {
                id: thread.id,
                title: thread.title,
                reason: denial.reason().to_owned(),
            }),
        })
    })?;

    if result.has_rejections() {
        return Err(Error::PerItemDenied(result.rejected));
    }
    if result.accepted.len() != requested {
        return Err(Error::ItemsNotFound(kind));
    }
    log::info!("Authorized deletion of {} thread(s)", result.accepted.len());
    Ok(DeleteThreads {
        threads: result.accepted,
    })
}

#[cfg(test)]
mod tests {
    use super::{super::tests::*, *};

    fn fixture(ids: &[IdValue]) -> Fixture {
        let fixture = Fixture::default();
        fixture.db.add_category(Category::new(1, "General"));
        for id in ids {
            fixture.db.add_thread(
                Thread::build()
                    .id(*id)
                    .category(1)
                    .title(&format!("Thread {id}"))
                    .finish(),
            );
        }
        fixture
    }

    #[test]
    fn delete_threads_in_descending_order() {
        let fixture = fixture(&[1, 2, 3]);
        let result = delete_threads(&fixture.ctx(), thread_ids(&[2, 3, 1, 3])).unwrap();
        let ids: Vec<_> = result.threads.iter().map(|t| t.id.value()).collect();
        assert_eq!(vec![3, 2, 1], ids);
    }

    #[test]
    fn empty_or_missing_threads() {
        let fixture = fixture(&[1]);
        for ids in [None, thread_ids(&[])] {
            let err = delete_threads(&fixture.ctx(), ids).unwrap_err();
            assert_eq!(
                "You have to specify at least one thread to delete.",
                err.to_string()
            );
        }
    }

    #[test]
    fn limit_is_checked_before_authorization() {
        let mut fixture = fixture(&[1, 2, 3]);
        fixture.limits.threads = 2;
        let err = delete_threads(&fixture.ctx(), thread_ids(&[1, 2, 3])).unwrap_err();
        assert_eq!(
            "No more than 2 threads can be deleted at single time.",
            err.to_string()
        );
        assert_eq!(0, fixture.acl.checks());
    }

    #[test]
    fn collect_all_denials_and_skip_missing_threads() {
        let mut fixture = fixture(&[3, 5]);
        fixture.acl = MockAcl::default().deny("delete_thread", 3, "This thread is closed.");
        let err = delete_threads(&fixture.ctx(), thread_ids(&[5, 3, 9])).unwrap_err();
        let Error::PerItemDenied(denials) = err else {
            panic!("Expected per item denials");
        };
        assert_eq!(
            vec![ItemDenial {
                id: ThreadId::new(3),
                title: "Thread 3".into(),
                reason: "This thread is closed.".into(),
            }],
            denials
        );
        // Every thread has been checked
        assert_eq!(2, fixture.acl.checks());
    }

    #[test]
    fn denials_are_reported_in_processing_order() {
        let mut fixture = fixture(&[1, 2, 3]);
        fixture.acl = MockAcl::default()
            .deny("delete_thread", 1, "first")
            .deny("delete_thread", 3, "third");
        let err = delete_threads(&fixture.ctx(), thread_ids(&[1, 2, 3])).unwrap_err();
        let Error::PerItemDenied(denials) = err else {
            panic!("Expected per item denials");
        };
        let ids: Vec<_> = denials.iter().map(|d| d.id.value()).collect();
        assert_eq!(vec![3, 1], ids);
    }

    #[test]
    fn skipped_threads_are_not_found() {
        let mut fixture = fixture(&[1, 2]);
        fixture.acl.invisible_threads.push(ThreadId::new(2));
        for ids in [&[1, 2][..], &[1, 7][..]] {
            let err = delete_threads(&fixture.ctx(), thread_ids(ids)).unwrap_err();
            assert!(matches!(err, Error::ItemsNotFound(ActionKind::DeleteThreads)));
            assert_eq!(
                "One or more threads to delete could not be found.",
                err.to_string()
            );
        }
    }

    #[test]
    fn private_threads_are_not_found() {
        let fixture = fixture(&[1]);
        fixture.db.add_private_thread(5, 2);
        let err = delete_threads(&fixture.ctx(), thread_ids(&[1, 5])).unwrap_err();
        assert!(matches!(err, Error::ItemsNotFound(ActionKind::DeleteThreads)));
        assert_eq!(1, fixture.acl.checks());
    }

    #[test]
    fn validation_is_idempotent() {
        let fixture = fixture(&[1, 2]);
        let first = delete_threads(&fixture.ctx(), thread_ids(&[1, 2])).unwrap();
        let second = delete_threads(&fixture.ctx(), thread_ids(&[2, 1])).unwrap();
        assert_eq!(first, second);
    }
}

//! Reconciliation of the local snippet set with a remote copy.
//!
//! Both sides are keyed by snippet id. When both hold the same snippet
//! the copy with the higher [`Snippet::revision_ms`] wins; on a tie the
//! local copy is kept. Soft-deleted snippets take part like any other
//! record so that deletions propagate.

use std::collections::BTreeMap;

use crate::ids::SnippetId;
use crate::snippet::Snippet;

/// Counts shown in the sync toast.
///
/// `new_*` counts records that side did not have before; `dropped_*`
/// counts records on that side that were replaced by a newer revision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub new_local: usize,
    pub new_remote: usize,
    pub dropped_local: usize,
    pub dropped_remote: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergePlan {
    /// Records to write into local storage.
    pub local_writes: Vec<Snippet>,
    /// Full set to publish to the remote.
    pub merged: Vec<Snippet>,
    pub report: SyncReport,
}

pub fn merge(local: &[Snippet], remote: &[Snippet]) -> MergePlan {
    let local_by_id: BTreeMap<&SnippetId, &Snippet> = local.iter().map(|s| (&s.id, s)).collect();
    let remote_by_id: BTreeMap<&SnippetId, &Snippet> = remote.iter().map(|s| (&s.id, s)).collect();

    let mut plan = MergePlan::default();

    for snippet in local {
        match remote_by_id.get(&snippet.id) {
            None => {
                plan.report.new_remote += 1;
                plan.merged.push(snippet.clone());
            }
            Some(theirs) if theirs.revision_ms() > snippet.revision_ms() => {
                plan.report.dropped_local += 1;
                plan.local_writes.push((*theirs).clone());
                plan.merged.push((*theirs).clone());
            }
            Some(theirs) => {
                if snippet != *theirs {
                    plan.report.dropped_remote += 1;
                }
                plan.merged.push(snippet.clone());
            }
        }
    }

    for snippet in remote {
        if !local_by_id.contains_key(&snippet.id) {
            plan.report.new_local += 1;
            plan.local_writes.push(snippet.clone());
            plan.merged.push(snippet.clone());
        }
    }

    plan
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snippet(id: &str, created: i64) -> Snippet {
        Snippet::new(SnippetId::from(id), id, "content", created)
    }

    #[test]
    fn disjoint_sets_are_unioned() {
        let plan = merge(&[snippet("a", 1)], &[snippet("b", 2)]);

        assert_eq!(
            plan.report,
            SyncReport {
                new_local: 1,
                new_remote: 1,
                ..SyncReport::default()
            }
        );
        assert_eq!(plan.local_writes, vec![snippet("b", 2)]);
        assert_eq!(plan.merged.len(), 2);
    }

    #[test]
    fn newer_remote_revision_replaces_local() {
        let local = snippet("a", 1);
        let mut remote = snippet("a", 1);
        remote.apply_edit("a".into(), "edited elsewhere".into(), 50);

        let plan = merge(&[local], &[remote.clone()]);
        assert_eq!(plan.report.dropped_local, 1);
        assert_eq!(plan.local_writes, vec![remote.clone()]);
        assert_eq!(plan.merged, vec![remote]);
    }

    #[test]
    fn newer_local_revision_replaces_remote() {
        let mut local = snippet("a", 1);
        local.soft_delete(80);
        let remote = snippet("a", 1);

        let plan = merge(&[local.clone()], &[remote]);
        assert_eq!(plan.report.dropped_remote, 1);
        assert!(plan.local_writes.is_empty());
        assert_eq!(plan.merged, vec![local]);
    }

    #[test]
    fn identical_sets_report_nothing() {
        let set = vec![snippet("a", 1), snippet("b", 2)];
        let plan = merge(&set, &set);
        assert_eq!(plan.report, SyncReport::default());
        assert!(plan.local_writes.is_empty());
        assert_eq!(plan.merged, set);
    }
}

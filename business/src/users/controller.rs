//! Paginated user list with confirmed deletion.
//!
//! `UserListController` owns the [`PageState`] shown by a list view and drives
//! three flows against a [`UserDirectory`]:
//!
//! - fetch: ask for `{page, per_page}`, then replace the whole state with the
//!   server's answer (the server decides the final `page`/`per_page`);
//! - navigate: remember the requested page, then fetch;
//! - delete: ask a [`ConfirmationService`], delete only on an explicit yes,
//!   then refetch the page that is currently shown.
//!
//! Failures leave the state exactly as it was and are returned to the caller.
//! Overlapping fetches are not sequenced: whichever response lands last is
//! the state that stays.
//!
//! Several operations may be in flight at once. [`ControllerPhase`] reports
//! the most significant outstanding one (`Deleting`, then `ConfirmPending`,
//! then `Fetching`) and only returns to `Idle` once all of them are done.

use tokio::sync::watch;

use super::confirm::{ConfirmRequest, ConfirmationService};
use super::directory::UserDirectory;
use super::pagination::{PageDescriptor, PageState};
use super::types::{SearchQuery, User};
use crate::BusinessConfig;
use crate::config::DEFAULT_PER_PAGE;
use crate::error::TransportResult;

/// What the controller is currently waiting on.
///
/// When operations overlap, the highest of `Deleting`, `ConfirmPending` and
/// `Fetching` wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControllerPhase {
    #[default]
    Idle,
    Fetching,
    ConfirmPending,
    Deleting,
}

/// Result of [`UserListController::delete_user`] when nothing failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The prompt was declined. No request was sent.
    Declined,
    /// The user was deleted and the current page reloaded.
    Deleted,
}

#[derive(Debug, Clone, Copy)]
enum Busy {
    Fetch,
    Confirm,
    Delete,
}

/// Operations currently in flight, per kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Activity {
    fetching: usize,
    confirming: usize,
    deleting: usize,
}

impl Activity {
    fn slot(&mut self, busy: Busy) -> &mut usize {
        match busy {
            Busy::Fetch => &mut self.fetching,
            Busy::Confirm => &mut self.confirming,
            Busy::Delete => &mut self.deleting,
        }
    }

    fn phase(self) -> ControllerPhase {
        if self.deleting > 0 {
            ControllerPhase::Deleting
        } else if self.confirming > 0 {
            ControllerPhase::ConfirmPending
        } else if self.fetching > 0 {
            ControllerPhase::Fetching
        } else {
            ControllerPhase::Idle
        }
    }
}

/// Counts one operation as in flight until dropped, including when the
/// owning future is cancelled.
struct BusyGuard<'a> {
    activity: &'a watch::Sender<Activity>,
    busy: Busy,
}

impl<'a> BusyGuard<'a> {
    fn enter(activity: &'a watch::Sender<Activity>, busy: Busy) -> Self {
        activity.send_modify(|a| *a.slot(busy) += 1);
        Self { activity, busy }
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        let busy = self.busy;
        self.activity.send_modify(|a| {
            let slot = a.slot(busy);
            *slot = slot.saturating_sub(1);
        });
    }
}

pub struct UserListController<D, C> {
    directory: D,
    confirmer: C,
    state: watch::Sender<PageState>,
    activity: watch::Sender<Activity>,
}

impl<D, C> std::fmt::Debug for UserListController<D, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserListController")
            .field("state", &*self.state.borrow())
            .field("activity", &*self.activity.borrow())
            .finish_non_exhaustive()
    }
}

impl<D, C> UserListController<D, C>
where
    D: UserDirectory,
    C: ConfirmationService,
{
    /// Controller with an empty state and the default page size.
    ///
    /// Nothing is fetched until [`initialize`](Self::initialize) (or a
    /// navigation) runs.
    pub fn new(directory: D, confirmer: C) -> Self {
        Self::with_per_page(directory, confirmer, DEFAULT_PER_PAGE)
    }

    pub fn with_per_page(directory: D, confirmer: C, per_page: u32) -> Self {
        let (state, _) = watch::channel(PageState::empty(per_page.max(1)));
        let (activity, _) = watch::channel(Activity::default());
        Self {
            directory,
            confirmer,
            state,
            activity,
        }
    }

    pub fn from_config(directory: D, confirmer: C, config: &BusinessConfig) -> Self {
        Self::with_per_page(directory, confirmer, config.default_per_page)
    }

    /// Loads the first page. Call once after construction.
    pub async fn initialize(&self) -> TransportResult<()> {
        log::debug!("Loading initial users page");
        self.fetch_page().await
    }

    /// Requests the current `{page, per_page}` and replaces the state with the answer.
    pub async fn fetch_page(&self) -> TransportResult<()> {
        let query = {
            let state = self.state.borrow();
            SearchQuery {
                page: state.page,
                per_page: state.per_page,
            }
        };

        let result = {
            let _fetching = BusyGuard::enter(&self.activity, Busy::Fetch);
            self.directory.search(query).await
        };

        let result = result.inspect_err(|e| {
            log::warn!(
                "Fetching users page {} (per page {}) failed: {e}",
                query.page,
                query.per_page
            );
        })?;

        let next = PageState::from_search(result);
        log::debug!(
            "Loaded users page {}/{} ({} users)",
            next.page,
            next.total_pages,
            next.users.len()
        );
        self.state.send_replace(next);
        Ok(())
    }

    /// Same as [`fetch_page`](Self::fetch_page); reloads what is on screen.
    pub async fn refresh(&self) -> TransportResult<()> {
        self.fetch_page().await
    }

    /// Switches to `descriptor.page` and fetches it.
    ///
    /// The page number is not range-checked; the backend decides what an
    /// out-of-range page means.
    pub async fn navigate_to_page(&self, descriptor: PageDescriptor) -> TransportResult<()> {
        // Only the requested page changes here; observers are notified once
        // the fetch replaces the whole state.
        self.state.send_if_modified(|state| {
            state.page = descriptor.page;
            false
        });
        self.fetch_page().await
    }

    /// Deletes `user` after explicit confirmation, then reloads the current page.
    ///
    /// A failed delete leaves the cached list untouched. If the delete lands
    /// but the reload fails, the reload error is returned and the cached list
    /// still shows the deleted user until the next successful fetch.
    pub async fn delete_user(&self, user: &User) -> TransportResult<DeleteOutcome> {
        let confirmed = {
            let _confirming = BusyGuard::enter(&self.activity, Busy::Confirm);
            self.confirmer
                .confirm(ConfirmRequest::delete_user(&user.login))
                .await
        };

        if !confirmed {
            log::debug!("Deletion of {} ({}) declined", user.login, user.id);
            return Ok(DeleteOutcome::Declined);
        }

        let deleted = {
            let _deleting = BusyGuard::enter(&self.activity, Busy::Delete);
            self.directory.delete(user.id).await
        };
        if let Err(e) = deleted {
            log::warn!("Deleting {} ({}) failed: {e}", user.login, user.id);
            return Err(e);
        }

        log::debug!("Deleted {} ({}), reloading page", user.login, user.id);
        self.fetch_page().await?;
        Ok(DeleteOutcome::Deleted)
    }

    /// Copy of the whole current state.
    pub fn snapshot(&self) -> PageState {
        self.state.borrow().clone()
    }

    /// Receiver that sees every full state replacement.
    pub fn subscribe(&self) -> watch::Receiver<PageState> {
        self.state.subscribe()
    }

    pub fn phase(&self) -> ControllerPhase {
        self.activity.borrow().phase()
    }

    pub fn page(&self) -> u32 {
        self.state.borrow().page
    }

    pub fn per_page(&self) -> u32 {
        self.state.borrow().per_page
    }

    pub fn total_pages(&self) -> u32 {
        self.state.borrow().total_pages
    }

    pub fn users(&self) -> Vec<User> {
        self.state.borrow().users.clone()
    }

    pub fn pages(&self) -> Vec<PageDescriptor> {
        self.state.borrow().pages.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_prefers_the_most_significant_operation() {
        let mut activity = Activity::default();
        assert_eq!(activity.phase(), ControllerPhase::Idle);

        activity.fetching = 2;
        assert_eq!(activity.phase(), ControllerPhase::Fetching);

        activity.confirming = 1;
        assert_eq!(activity.phase(), ControllerPhase::ConfirmPending);

        activity.deleting = 1;
        assert_eq!(activity.phase(), ControllerPhase::Deleting);
    }

    #[test]
    fn test_guards_release_on_drop() {
        let (activity, _) = watch::channel(Activity::default());

        let first = BusyGuard::enter(&activity, Busy::Fetch);
        let second = BusyGuard::enter(&activity, Busy::Fetch);
        assert_eq!(activity.borrow().fetching, 2);

        drop(first);
        assert_eq!(activity.borrow().phase(), ControllerPhase::Fetching);

        drop(second);
        assert_eq!(*activity.borrow(), Activity::default());
    }
}

//! Account-change notifications from the external provider.
//!
//! The provider glue pushes each ordered account set it observes through an
//! [`AccountFeed`]; the registry consumes them from the paired
//! [`AccountWatcher`]. Notifications carry no deduplication guarantee, so
//! consecutive identical sets are delivered as-is and the consumer re-syncs
//! idempotently.

use chaindrive_types::AccountId;
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Create a connected feed/watcher pair.
pub fn account_channel() -> (AccountFeed, AccountWatcher) {
    let (tx, rx) = mpsc::unbounded_channel();
    let handle = AccountHandle {
        current: Arc::new(RwLock::new(None)),
    };
    (
        AccountFeed { tx },
        AccountWatcher { handle, rx },
    )
}

/// Producer side, held by the provider glue.
#[derive(Clone, Debug)]
pub struct AccountFeed {
    tx: mpsc::UnboundedSender<Vec<AccountId>>,
}

impl AccountFeed {
    /// Push a newly observed account set. Returns false once the watcher
    /// has been dropped.
    pub fn publish(&self, accounts: Vec<AccountId>) -> bool {
        self.tx.send(accounts).is_ok()
    }
}

/// Shared read/apply access to the active account identity.
#[derive(Clone, Debug)]
pub struct AccountHandle {
    current: Arc<RwLock<Option<AccountId>>>,
}

impl AccountHandle {
    /// The active identity: first entry of the most recently applied set.
    /// `None` before the provider has resolved any account.
    pub fn current(&self) -> Option<AccountId> {
        self.current.read().clone()
    }

    /// Re-derive the active identity from a notification's account set.
    pub fn apply(&self, accounts: &[AccountId]) -> Option<AccountId> {
        let active = accounts.first().cloned();
        *self.current.write() = active.clone();
        active
    }
}

/// Consumer side: the stream of provider account-set notifications.
pub struct AccountWatcher {
    handle: AccountHandle,
    rx: mpsc::UnboundedReceiver<Vec<AccountId>>,
}

impl AccountWatcher {
    /// Clonable handle to the active-identity state.
    pub fn handle(&self) -> AccountHandle {
        self.handle.clone()
    }

    pub fn current(&self) -> Option<AccountId> {
        self.handle.current()
    }

    /// Next raw notification, or `None` once every feed is dropped.
    pub async fn changed(&mut self) -> Option<Vec<AccountId>> {
        self.rx.recv().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_is_first_entry() {
        let (_feed, watcher) = account_channel();
        let handle = watcher.handle();

        assert_eq!(handle.current(), None);

        let applied = handle.apply(&[AccountId::from("0xa"), AccountId::from("0xb")]);
        assert_eq!(applied, Some(AccountId::from("0xa")));
        assert_eq!(watcher.current(), Some(AccountId::from("0xa")));
    }

    #[test]
    fn test_empty_set_clears_current() {
        let (_feed, watcher) = account_channel();
        let handle = watcher.handle();

        handle.apply(&[AccountId::from("0xa")]);
        assert!(handle.current().is_some());

        handle.apply(&[]);
        assert_eq!(watcher.current(), None);
    }

    #[tokio::test]
    async fn test_notifications_arrive_in_order() {
        let (feed, mut watcher) = account_channel();

        assert!(feed.publish(vec![AccountId::from("0xa")]));
        assert!(feed.publish(vec![AccountId::from("0xb")]));

        assert_eq!(
            watcher.changed().await,
            Some(vec![AccountId::from("0xa")])
        );
        assert_eq!(
            watcher.changed().await,
            Some(vec![AccountId::from("0xb")])
        );
    }

    #[tokio::test]
    async fn test_changed_ends_when_feed_dropped() {
        let (feed, mut watcher) = account_channel();
        drop(feed);
        assert_eq!(watcher.changed().await, None);
    }

    #[tokio::test]
    async fn test_duplicate_sets_are_not_deduplicated() {
        let (feed, mut watcher) = account_channel();

        feed.publish(vec![AccountId::from("0xa")]);
        feed.publish(vec![AccountId::from("0xa")]);

        assert!(watcher.changed().await.is_some());
        assert!(watcher.changed().await.is_some());
    }
}

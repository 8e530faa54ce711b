//! Multicast callback binding
//!
//! A [`MulticastDelegate`] is an ordered list of subscribers. Broadcasting
//! invokes every subscriber, in the order they subscribed, with a shared
//! reference to the payload.

use std::fmt;
use std::sync::Arc;

/// Subscriber function type
///
/// `Send + Sync` because completions run on runtime worker threads.
pub type Subscriber<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Handle returned by [`MulticastDelegate::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Ordered multicast callback list
pub struct MulticastDelegate<T> {
    subscribers: Vec<(SubscriptionId, Subscriber<T>)>,
    next_id: u64,
}

impl<T> Default for MulticastDelegate<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for MulticastDelegate<T> {
    fn clone(&self) -> Self {
        Self {
            subscribers: self.subscribers.clone(),
            next_id: self.next_id,
        }
    }
}

impl<T> fmt::Debug for MulticastDelegate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MulticastDelegate")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl<T> MulticastDelegate<T> {
    /// Create a delegate with no subscribers
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    /// Append a subscriber
    pub fn subscribe<F>(&mut self, f: F) -> SubscriptionId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Arc::new(f)));
        id
    }

    /// Remove a subscriber; returns false if it was not subscribed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Whether at least one subscriber is bound
    pub fn is_bound(&self) -> bool {
        !self.subscribers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    /// Drop all subscribers
    pub fn clear(&mut self) {
        self.subscribers.clear();
    }

    /// Invoke every subscriber in subscription order
    pub fn broadcast(&self, payload: &T) {
        for (_, subscriber) in &self.subscribers {
            subscriber(payload);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_broadcast_in_subscription_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut delegate = MulticastDelegate::<String>::new();

        for tag in ["first", "second", "third"] {
            let log = log.clone();
            delegate.subscribe(move |msg: &String| {
                log.lock().unwrap().push(format!("{tag}:{msg}"));
            });
        }

        delegate.broadcast(&"hello".to_string());

        assert_eq!(
            *log.lock().unwrap(),
            vec!["first:hello", "second:hello", "third:hello"]
        );
    }

    #[test]
    fn test_unsubscribe() {
        let hits = Arc::new(Mutex::new(0));
        let mut delegate = MulticastDelegate::<u32>::new();

        let keep = {
            let hits = hits.clone();
            delegate.subscribe(move |n| *hits.lock().unwrap() += *n)
        };
        let drop_me = {
            let hits = hits.clone();
            delegate.subscribe(move |n| *hits.lock().unwrap() += *n * 100)
        };

        assert!(delegate.unsubscribe(drop_me));
        assert!(!delegate.unsubscribe(drop_me));
        assert_eq!(delegate.len(), 1);

        delegate.broadcast(&2);
        assert_eq!(*hits.lock().unwrap(), 2);

        assert!(delegate.unsubscribe(keep));
        assert!(!delegate.is_bound());
    }

    #[test]
    fn test_is_bound() {
        let mut delegate = MulticastDelegate::<()>::default();
        assert!(!delegate.is_bound());
        assert!(delegate.is_empty());

        delegate.subscribe(|_| {});
        assert!(delegate.is_bound());

        delegate.clear();
        assert!(!delegate.is_bound());
    }

    #[test]
    fn test_ids_are_not_reused_after_unsubscribe() {
        let mut delegate = MulticastDelegate::<()>::new();
        let a = delegate.subscribe(|_| {});
        delegate.unsubscribe(a);
        let b = delegate.subscribe(|_| {});
        assert_ne!(a, b);
    }
}

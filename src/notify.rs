use std::{
    sync::{Arc, Mutex, PoisonError},
    time::Duration,
};

use crate::timing::Scheduler;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    pub fn icon_class(self) -> &'static str {
        match self {
            NotificationKind::Success => "fas fa-check-circle",
            NotificationKind::Error | NotificationKind::Info => "fas fa-exclamation-circle",
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            NotificationKind::Success => "notification success",
            NotificationKind::Error => "notification error",
            NotificationKind::Info => "notification info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
    /// Playing its exit animation.
    pub leaving: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationList {
    items: Vec<Notification>,
    next_id: u64,
}

impl NotificationList {
    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notification {
            id,
            kind,
            message: message.into(),
            leaving: false,
        });
        id
    }

    /// Returns false if the notification is already gone or leaving.
    pub fn begin_dismiss(&mut self, id: u64) -> bool {
        match self.items.iter_mut().find(|n| n.id == id && !n.leaving) {
            Some(n) => {
                n.leaving = true;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

pub trait Notifier {
    fn notify(&self, kind: NotificationKind, message: &str);
}

struct ToasterState {
    list: NotificationList,
    on_change: Box<dyn Fn(&NotificationList) + Send + Sync>,
}

/// Owns the visible notifications and retires them on a timer.
/// `on_change` receives a snapshot after every mutation. Clones share one
/// list and may live on any thread.
pub struct Toaster<S: Scheduler> {
    state: Arc<Mutex<ToasterState>>,
    scheduler: S,
    lifetime: Duration,
    exit: Duration,
}

impl<S: Scheduler + Clone + 'static> Clone for Toaster<S> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            scheduler: self.scheduler.clone(),
            lifetime: self.lifetime,
            exit: self.exit,
        }
    }
}

impl<S: Scheduler + Clone + 'static> Toaster<S> {
    pub fn new(
        scheduler: S,
        lifetime: Duration,
        exit: Duration,
        on_change: impl Fn(&NotificationList) + Send + Sync + 'static,
    ) -> Self {
        Self {
            state: Arc::new(Mutex::new(ToasterState {
                list: NotificationList::default(),
                on_change: Box::new(on_change),
            })),
            scheduler,
            lifetime,
            exit,
        }
    }

    fn mutate<T>(state: &Mutex<ToasterState>, f: impl FnOnce(&mut NotificationList) -> T) -> T {
        let mut s = state.lock().unwrap_or_else(PoisonError::into_inner);
        let out = f(&mut s.list);
        (s.on_change)(&s.list);
        out
    }

    pub fn push(&self, kind: NotificationKind, message: &str) -> u64 {
        let id = Self::mutate(&self.state, |list| list.push(kind, message));
        let toaster = self.clone();
        self.scheduler
            .after(self.lifetime, Box::new(move || toaster.dismiss(id)));
        id
    }

    /// Starts the exit animation and removes the entry once it finishes.
    pub fn dismiss(&self, id: u64) {
        if !Self::mutate(&self.state, |list| list.begin_dismiss(id)) {
            return;
        }
        let state = self.state.clone();
        self.scheduler.after(
            self.exit,
            Box::new(move || Self::mutate(&state, |list| list.remove(id))),
        );
    }

    pub fn snapshot(&self) -> NotificationList {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .list
            .clone()
    }
}

impl<S: Scheduler + Clone + 'static> Notifier for Toaster<S> {
    fn notify(&self, kind: NotificationKind, message: &str) {
        self.push(kind, message);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::timing::{Task, VirtualClock};

    fn toaster(clock: &VirtualClock) -> (Toaster<VirtualClock>, Arc<AtomicUsize>) {
        let changes = Arc::new(AtomicUsize::new(0));
        let counter = changes.clone();
        let toaster = Toaster::new(
            clock.clone(),
            Duration::from_secs(5),
            Duration::from_millis(300),
            move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            },
        );
        (toaster, changes)
    }

    #[derive(Clone)]
    struct Dropping;

    impl Scheduler for Dropping {
        fn after(&self, _delay: Duration, _task: Task) {}
    }

    fn assert_send_sync<T: Send + Sync + 'static>(_: &T) {}

    #[test]
    fn test_toaster_moves_across_threads() {
        let toaster = Toaster::new(
            Dropping,
            Duration::from_secs(5),
            Duration::from_millis(300),
            |_| {},
        );
        assert_send_sync(&toaster);
        toaster.push(NotificationKind::Info, "from the render thread");

        let handle = toaster.clone();
        let len = std::thread::spawn(move || {
            handle.push(NotificationKind::Info, "from another thread");
            handle.snapshot().len()
        })
        .join()
        .expect("toaster thread should not panic");
        assert_eq!(len, 2);
        drop(toaster);
    }

    #[test]
    fn test_list_ids_and_dismiss() {
        let mut list = NotificationList::default();
        let a = list.push(NotificationKind::Info, "a");
        let b = list.push(NotificationKind::Error, "b");
        assert_ne!(a, b);
        assert!(list.begin_dismiss(a));
        assert!(!list.begin_dismiss(a));
        list.remove(a);
        assert_eq!(list.len(), 1);
        assert!(!list.begin_dismiss(a));
        assert_eq!(list.iter().next().map(|n| n.id), Some(b));
    }

    #[test]
    fn test_auto_dismiss_after_lifetime() {
        let clock = VirtualClock::new();
        let (toaster, changes) = toaster(&clock);
        toaster.notify(NotificationKind::Success, "sent");
        assert_eq!(toaster.snapshot().len(), 1);

        clock.advance(Duration::from_millis(4999));
        assert!(!toaster.snapshot().iter().any(|n| n.leaving));

        clock.advance(Duration::from_millis(1));
        assert!(toaster.snapshot().iter().all(|n| n.leaving));

        clock.advance(Duration::from_millis(300));
        assert!(toaster.snapshot().is_empty());
        // push, leaving, removed
        assert_eq!(changes.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_early_dismiss_then_timer_is_noop() {
        let clock = VirtualClock::new();
        let (toaster, _) = toaster(&clock);
        let id = toaster.push(NotificationKind::Error, "oops");
        let keep = toaster.push(NotificationKind::Info, "hello");

        clock.advance(Duration::from_secs(1));
        toaster.dismiss(id);
        clock.advance(Duration::from_millis(300));
        assert_eq!(
            toaster.snapshot().iter().map(|n| n.id).collect::<Vec<_>>(),
            vec![keep]
        );

        clock.advance(Duration::from_secs(10));
        assert!(toaster.snapshot().is_empty());
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn test_kind_styles() {
        assert_eq!(NotificationKind::Success.icon_class(), "fas fa-check-circle");
        assert_eq!(NotificationKind::Error.class_name(), "notification error");
    }
}

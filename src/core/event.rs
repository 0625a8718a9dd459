//! Synchronous multicast event for per-instance change notification.
//!
//! Architecture:
//! - Listeners subscribe with callbacks and get a [`ListenerId`] back
//! - raise() invokes every listener in-line, before it returns
//! - No queue and no deferred processing: delivery is immediate
//!
//! Callback order: FIFO (first-subscribed, first-called).
//!
//! Dispatch runs over a snapshot of the listener list, so a callback may
//! subscribe or unsubscribe while the event is being raised. A listener
//! removed mid-dispatch is skipped for the rest of that dispatch; a listener
//! added mid-dispatch first fires on the next raise().
//!
//! Single-threaded by construction (`Rc`/`RefCell`), so an `Event` is `!Send`.
//! A panicking listener unwinds through raise() to whoever triggered it.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use log::warn;

/// Type-erased callback: receives the sender and the event args.
type Callback<S, A> = Rc<dyn Fn(&S, &A)>;

/// Handle returned by [`Event::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

struct Listener<S, A> {
    id: ListenerId,
    /// Cleared on unsubscribe so in-flight snapshots skip it.
    active: Rc<Cell<bool>>,
    callback: Callback<S, A>,
}

impl<S, A> Clone for Listener<S, A> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            active: Rc::clone(&self.active),
            callback: Rc::clone(&self.callback),
        }
    }
}

/// Observer list owned by a single sender.
///
/// `S` is the sender type passed to every listener, `A` the event args.
pub struct Event<S, A> {
    listeners: RefCell<Vec<Listener<S, A>>>,
    next_id: Cell<u64>,
}

impl<S, A> Default for Event<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, A> fmt::Debug for Event<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl<S, A> Event<S, A> {
    pub fn new() -> Self {
        Self {
            listeners: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        }
    }

    /// Subscribe a listener.
    ///
    /// Callback is invoked on every raise() until unsubscribed.
    /// Use `Rc<RefCell<State>>` in the callback for state mutations.
    ///
    /// # Example
    /// ```ignore
    /// let seen = Rc::new(Cell::new(0));
    /// let s = Rc::clone(&seen);
    /// polygon.property_changed().subscribe(move |_, _| s.set(s.get() + 1));
    /// ```
    pub fn subscribe<F>(&self, callback: F) -> ListenerId
    where
        F: Fn(&S, &A) + 'static,
    {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push(Listener {
            id,
            active: Rc::new(Cell::new(true)),
            callback: Rc::new(callback),
        });
        id
    }

    /// Remove a listener. Returns false if `id` was not subscribed.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        match listeners.iter().position(|l| l.id == id) {
            Some(idx) => {
                let removed = listeners.remove(idx);
                removed.active.set(false);
                true
            }
            None => {
                warn!("Event: unsubscribe of unknown listener {:?}", id);
                false
            }
        }
    }

    /// Invoke every listener, in subscription order, before returning.
    pub fn raise(&self, sender: &S, args: &A) {
        // Snapshot so callbacks can (un)subscribe without a RefCell conflict
        let snapshot: Vec<Listener<S, A>> = self.listeners.borrow().clone();
        for listener in &snapshot {
            if listener.active.get() {
                (listener.callback)(sender, args);
            }
        }
    }

    /// Check if at least one listener is subscribed
    pub fn has_subscribers(&self) -> bool {
        !self.listeners.borrow().is_empty()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Drop all listeners
    pub fn clear(&self) {
        for listener in self.listeners.borrow_mut().drain(..) {
            listener.active.set(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Sender {
        name: &'static str,
    }

    #[test]
    fn test_subscribe_raise_immediate() {
        let event: Event<Sender, i32> = Event::new();
        let total = Rc::new(Cell::new(0));
        let t = Rc::clone(&total);

        event.subscribe(move |_, v| t.set(t.get() + *v));

        let sender = Sender { name: "a" };
        event.raise(&sender, &10);
        // Callback ran before raise() returned
        assert_eq!(total.get(), 10);

        event.raise(&sender, &5);
        assert_eq!(total.get(), 15);
    }

    #[test]
    fn test_sender_passed_through() {
        let event: Event<Sender, ()> = Event::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = Rc::clone(&seen);

        event.subscribe(move |sender, _| s.borrow_mut().push(sender.name));

        event.raise(&Sender { name: "left" }, &());
        event.raise(&Sender { name: "right" }, &());
        assert_eq!(*seen.borrow(), vec!["left", "right"]);
    }

    #[test]
    fn test_listeners_called_in_subscription_order() {
        let event: Event<(), ()> = Event::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        for n in 0..4 {
            let o = Rc::clone(&order);
            event.subscribe(move |_, _| o.borrow_mut().push(n));
        }

        event.raise(&(), &());
        assert_eq!(*order.borrow(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_unsubscribe() {
        let event: Event<(), i32> = Event::new();
        let total = Rc::new(Cell::new(0));
        let t = Rc::clone(&total);

        let id = event.subscribe(move |_, v| t.set(t.get() + *v));
        assert!(event.has_subscribers());

        event.raise(&(), &10);
        assert!(event.unsubscribe(id));
        assert!(!event.has_subscribers());

        event.raise(&(), &10);
        // Counter unchanged - no subscriber
        assert_eq!(total.get(), 10);

        // Second removal of the same id is reported
        assert!(!event.unsubscribe(id));
    }

    #[test]
    fn test_listener_ids_are_unique() {
        let event: Event<(), ()> = Event::new();
        let a = event.subscribe(|_, _| {});
        let b = event.subscribe(|_, _| {});
        event.unsubscribe(a);
        let c = event.subscribe(|_, _| {});

        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_ne!(b, c);
        assert_eq!(event.listener_count(), 2);
    }

    #[test]
    fn test_unsubscribe_during_raise_skips_removed() {
        let event: Rc<Event<(), ()>> = Rc::new(Event::new());
        let calls = Rc::new(RefCell::new(Vec::new()));
        let second_id = Rc::new(Cell::new(None));

        let ev = Rc::clone(&event);
        let c = Rc::clone(&calls);
        let victim = Rc::clone(&second_id);
        event.subscribe(move |_, _| {
            c.borrow_mut().push("first");
            if let Some(id) = victim.get() {
                ev.unsubscribe(id);
            }
        });

        let c = Rc::clone(&calls);
        second_id.set(Some(event.subscribe(move |_, _| c.borrow_mut().push("second"))));

        event.raise(&(), &());
        assert_eq!(*calls.borrow(), vec!["first"]);
        assert_eq!(event.listener_count(), 1);
    }

    #[test]
    fn test_subscribe_during_raise_fires_next_time() {
        let event: Rc<Event<(), ()>> = Rc::new(Event::new());
        let late_calls = Rc::new(Cell::new(0));

        let ev = Rc::clone(&event);
        let late = Rc::clone(&late_calls);
        let added = Cell::new(false);
        event.subscribe(move |_, _| {
            if !added.replace(true) {
                let l = Rc::clone(&late);
                ev.subscribe(move |_, _| l.set(l.get() + 1));
            }
        });

        event.raise(&(), &());
        assert_eq!(late_calls.get(), 0);

        event.raise(&(), &());
        assert_eq!(late_calls.get(), 1);
    }

    #[test]
    fn test_clear() {
        let event: Event<(), ()> = Event::new();
        event.subscribe(|_, _| {});
        event.subscribe(|_, _| {});
        event.clear();
        assert!(!event.has_subscribers());
        assert_eq!(format!("{:?}", event), "Event { listeners: 0 }");
    }

    #[test]
    #[should_panic(expected = "listener failed")]
    fn test_panicking_listener_propagates() {
        let event: Event<(), ()> = Event::new();
        event.subscribe(|_, _| panic!("listener failed"));
        event.raise(&(), &());
    }
}

// Copyright 2026 the Mapmax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed state-change notification and listener bookkeeping.

use alloc::boxed::Box;
use core::fmt;

use smallvec::SmallVec;

/// Notification that a controller finished a maximize or restore transition.
///
/// Carries the resulting state so consumers never need to call back into the
/// controller from inside a listener.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MaximizedStateChanged {
    /// `true` after a maximize transition, `false` after a restore.
    pub maximized: bool,
}

/// Handle identifying a subscribed state-change listener.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type ListenerFn = Box<dyn FnMut(&MaximizedStateChanged)>;

/// The controller's listener set.
///
/// The expected population is small and explicit (a size-recompute hook, a
/// key-listener manager, perhaps a page callback), hence the inline capacity.
pub(crate) struct Listeners {
    entries: SmallVec<[(ListenerId, ListenerFn); 2]>,
    next_id: u64,
}

impl Listeners {
    pub(crate) fn new() -> Self {
        Self {
            entries: SmallVec::new(),
            next_id: 0,
        }
    }

    pub(crate) fn subscribe(
        &mut self,
        listener: impl FnMut(&MaximizedStateChanged) + 'static,
    ) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(listener)));
        id
    }

    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub(crate) fn emit(&mut self, event: &MaximizedStateChanged) {
        for (_, listener) in self.entries.iter_mut() {
            listener(event);
        }
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("len", &self.entries.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

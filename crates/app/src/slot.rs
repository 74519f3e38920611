/// Identity of one mount of the widget.
///
/// Asynchronous work started for a mount carries its id and checks it is
/// still current before touching the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MountId(u64);

impl MountId {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Holds at most one live widget instance.
#[derive(Debug)]
pub struct WidgetSlot<T> {
    next_id: u64,
    current: Option<(MountId, T)>,
}

impl<T> Default for WidgetSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> WidgetSlot<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next_id: 1,
            current: None,
        }
    }

    /// Installs `instance` under a fresh id and hands back the instance it
    /// displaced, which the caller must tear down.
    pub fn replace(&mut self, instance: T) -> (MountId, Option<T>) {
        let id = MountId(self.next_id);
        self.next_id += 1;
        let previous = self.current.replace((id, instance)).map(|(_, old)| old);
        (id, previous)
    }

    #[must_use]
    pub fn is_current(&self, id: MountId) -> bool {
        self.current_id() == Some(id)
    }

    #[must_use]
    pub fn current_id(&self) -> Option<MountId> {
        self.current.as_ref().map(|(id, _)| *id)
    }

    /// Removes the instance if `id` still names it.
    pub fn take(&mut self, id: MountId) -> Option<T> {
        if self.is_current(id) {
            self.current.take().map(|(_, instance)| instance)
        } else {
            None
        }
    }

    pub fn clear(&mut self) -> Option<T> {
        self.current.take().map(|(_, instance)| instance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_returns_previous_instance() {
        let mut slot = WidgetSlot::new();
        let (first, previous) = slot.replace("a");
        assert!(previous.is_none());

        let (second, previous) = slot.replace("b");
        assert_eq!(previous, Some("a"));
        assert_ne!(first, second);
        assert!(slot.is_current(second));
        assert!(!slot.is_current(first));
    }

    #[test]
    fn stale_id_cannot_reach_newer_instance() {
        let mut slot = WidgetSlot::new();
        let (stale, _) = slot.replace(1);
        let (live, _) = slot.replace(2);

        assert_eq!(slot.take(stale), None);
        assert!(slot.is_current(live));
        assert_eq!(slot.take(live), Some(2));
    }

    #[test]
    fn take_empties_the_slot() {
        let mut slot = WidgetSlot::new();
        let (id, _) = slot.replace("widget");

        assert_eq!(slot.take(id), Some("widget"));
        assert_eq!(slot.current_id(), None);
        assert_eq!(slot.take(id), None);
    }

    #[test]
    fn ids_keep_increasing_after_clear() {
        let mut slot = WidgetSlot::new();
        let (first, _) = slot.replace(());
        slot.clear();
        let (second, _) = slot.replace(());
        assert!(second.value() > first.value());
    }
}

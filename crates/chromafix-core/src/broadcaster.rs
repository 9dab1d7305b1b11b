//! Fan-out of the fix-enabled flag to every registered material selector.

use crate::context::FixWriter;
use crate::selector::MaterialSelector;
use crate::sink::RenderTarget;

/// Registration handle returned by [`Broadcaster::register`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SelectorId(u64);

#[derive(Debug)]
struct Entry<M, T> {
    id: SelectorId,
    selector: MaterialSelector<M>,
    target: Option<T>,
}

/// Owns the fix flag's write handle and the set of selectors it drives.
///
/// Selectors are independent, so the order they are visited in carries
/// no meaning.
#[derive(Debug)]
pub struct Broadcaster<M, T> {
    fix: FixWriter,
    entries: Vec<Entry<M, T>>,
    next_id: u64,
}

impl<M, T> Broadcaster<M, T>
where
    M: Clone + PartialEq,
    T: RenderTarget<M>,
{
    pub fn new(fix: FixWriter) -> Self {
        Self {
            fix,
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Startup pass: register every selector found in the scene and
    /// apply the current flag to all of them.
    pub fn discover<I>(&mut self, found: I) -> Vec<SelectorId>
    where
        I: IntoIterator<Item = (MaterialSelector<M>, Option<T>)>,
    {
        let ids: Vec<_> = found
            .into_iter()
            .map(|(selector, target)| self.register(selector, target))
            .collect();
        tracing::debug!("Discovered {} material selectors", ids.len());
        ids
    }

    /// Track a selector and bring its target in line with the current flag.
    pub fn register(&mut self, selector: MaterialSelector<M>, mut target: Option<T>) -> SelectorId {
        let id = SelectorId(self.next_id);
        self.next_id += 1;

        if let Some(target) = target.as_mut() {
            selector.apply_fix(self.fix.get(), target);
        }
        self.entries.push(Entry {
            id,
            selector,
            target,
        });
        id
    }

    /// Stop tracking `id`, handing the selector and its target back.
    pub fn unregister(&mut self, id: SelectorId) -> Option<(MaterialSelector<M>, Option<T>)> {
        let index = self.entries.iter().position(|entry| entry.id == id)?;
        let entry = self.entries.swap_remove(index);
        Some((entry.selector, entry.target))
    }

    /// Flip the flag and re-apply every selector. Returns the new flag.
    pub fn toggle_fix(&mut self) -> bool {
        let enabled = self.fix.toggle();
        self.apply_all(enabled);
        enabled
    }

    /// Set the flag explicitly and re-apply every selector.
    pub fn set_fix(&mut self, enabled: bool) {
        self.fix.set(enabled);
        self.apply_all(enabled);
    }

    /// Re-apply the current flag, e.g. after the mode changed.
    ///
    /// Returns how many targets received a different material.
    pub fn refresh(&mut self) -> usize {
        self.apply_all(self.fix.get())
    }

    pub fn fix_enabled(&self) -> bool {
        self.fix.get()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn selector(&self, id: SelectorId) -> Option<&MaterialSelector<M>> {
        self.entry(id).map(|entry| &entry.selector)
    }

    pub fn target(&self, id: SelectorId) -> Option<&T> {
        self.entry(id).and_then(|entry| entry.target.as_ref())
    }

    fn entry(&self, id: SelectorId) -> Option<&Entry<M, T>> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    fn apply_all(&mut self, enabled: bool) -> usize {
        self.entries
            .iter_mut()
            .filter_map(|entry| {
                let target = entry.target.as_mut()?;
                entry.selector.apply_fix(enabled, target).then_some(())
            })
            .count()
    }
}

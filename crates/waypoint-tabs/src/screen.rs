//! Screen instance tracking
//!
//! Destinations compare by value, so two pushes of the same destination are
//! indistinguishable. Each push or presentation therefore also mints a
//! `ScreenId`, letting late async results check whether the screen that
//! asked for them is still showing.

use serde::Serialize;

use crate::tab::Tab;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ScreenId {
    tab: Tab,
    seq: u64,
}

impl ScreenId {
    /// The tab's root screen. It is never popped.
    pub fn root(tab: Tab) -> Self {
        Self { tab, seq: 0 }
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn is_root(&self) -> bool {
        self.seq == 0
    }
}

impl std::fmt::Display for ScreenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.tab, self.seq)
    }
}

/// Live screen ids, kept parallel to the stack and overlay of one tab
#[derive(Debug)]
pub(crate) struct ScreenLedger {
    tab: Tab,
    next: u64,
    stack: Vec<ScreenId>,
    overlay: Option<ScreenId>,
}

impl ScreenLedger {
    pub(crate) fn new(tab: Tab) -> Self {
        Self {
            tab,
            next: 0,
            stack: Vec::new(),
            overlay: None,
        }
    }

    fn mint(&mut self) -> ScreenId {
        self.next += 1;
        ScreenId {
            tab: self.tab,
            seq: self.next,
        }
    }

    pub(crate) fn push(&mut self) -> ScreenId {
        let id = self.mint();
        self.stack.push(id);
        id
    }

    pub(crate) fn pop(&mut self) -> Option<ScreenId> {
        self.stack.pop()
    }

    pub(crate) fn clear_stack(&mut self) {
        self.stack.clear();
    }

    /// Replaces whatever overlay screen was live
    pub(crate) fn present(&mut self) -> ScreenId {
        let id = self.mint();
        self.overlay = Some(id);
        id
    }

    pub(crate) fn dismiss(&mut self) -> Option<ScreenId> {
        self.overlay.take()
    }

    pub(crate) fn overlay(&self) -> Option<ScreenId> {
        self.overlay
    }

    pub(crate) fn stack_screen(&self, depth: usize) -> Option<ScreenId> {
        self.stack.get(depth).copied()
    }

    pub(crate) fn visible(&self) -> ScreenId {
        self.overlay
            .or_else(|| self.stack.last().copied())
            .unwrap_or_else(|| ScreenId::root(self.tab))
    }

    pub(crate) fn is_live(&self, id: ScreenId) -> bool {
        id.tab == self.tab
            && (id.is_root() || self.overlay == Some(id) || self.stack.contains(&id))
    }
}

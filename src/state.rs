use crate::{
    data::StudentStore,
    render::{Renderer, View},
};
use maud::Markup;

/// Shared by every handler. Both halves are injected, so tests can swap in fakes.
#[derive(Clone, Debug)]
pub struct RosterState<S, R> {
    store: S,
    renderer: R,
}

impl<S: StudentStore, R: Renderer> RosterState<S, R> {
    pub const fn new(store: S, renderer: R) -> Self {
        Self { store, renderer }
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    pub fn render(&self, view: View<'_>) -> Markup {
        self.renderer.render(view)
    }
}

//! Per-table list state: fetched records, search term, page, and modal mode.
//!
//! DESIGN
//! ======
//! `TableState<E>` is plain data held in one `RwSignal` by the table
//! component. Every transition keeps the current page inside
//! `1..=max(total_pages, 1)` so the view never renders past the last page.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use crate::net::types::Entity;
use crate::util::paging::{clamp_page, page_slice, total_pages};
use crate::util::search::filter_records;

/// Which dialog the table is showing.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ModalMode<E> {
    #[default]
    Closed,
    Create,
    Edit(E),
    View(E),
    /// Confirmation before deleting this record.
    Delete(E),
}

#[derive(Clone, Debug, PartialEq)]
pub struct TableState<E: Entity> {
    pub items: Vec<E>,
    pub search: String,
    /// 1-based current page.
    pub page: usize,
    pub loading: bool,
    /// A create/update/toggle/delete request is in flight.
    pub saving: bool,
    pub modal: ModalMode<E>,
}

impl<E: Entity> Default for TableState<E> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            search: String::new(),
            page: 1,
            loading: true,
            saving: false,
            modal: ModalMode::Closed,
        }
    }
}

impl<E: Entity> TableState<E> {
    /// Records matching the current search term.
    pub fn filtered(&self) -> Vec<E> {
        filter_records(&self.items, &self.search)
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered().len(), E::PAGE_SIZE)
    }

    /// Records on the current page.
    pub fn visible(&self) -> Vec<E> {
        page_slice(&self.filtered(), self.page, E::PAGE_SIZE).to_vec()
    }

    /// Update the search term and return to the first page.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = clamp_page(page, self.total_pages());
    }

    /// Install a freshly fetched list, ordered by sort key when the entity has one.
    pub fn replace_items(&mut self, mut items: Vec<E>) {
        items.sort_by_key(|record| record.sort_key().unwrap_or(i64::MAX));
        self.items = items;
        self.loading = false;
        self.clamp();
    }

    /// Drop the record with `id` after a successful delete.
    pub fn remove(&mut self, id: &str) {
        self.items.retain(|record| record.id() != id);
        self.clamp();
    }

    pub fn open(&mut self, modal: ModalMode<E>) {
        self.modal = modal;
    }

    pub fn close(&mut self) {
        self.modal = ModalMode::Closed;
    }

    fn clamp(&mut self) {
        self.page = clamp_page(self.page, self.total_pages());
    }
}

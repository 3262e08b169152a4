//! Summary figures shown on the dashboard cards.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::net::types::{ContactLead, Entity, LeadStatus};

/// Load state of one dashboard card.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CardStatus {
    #[default]
    Loading,
    Ready(ResourceSummary),
    Failed(String),
}

impl CardStatus {
    /// Card state for a fetch that is still pending (`None`) or has finished.
    /// `Err` carries the user-facing failure message.
    pub fn from_load<E: Entity>(load: Option<&Result<Vec<E>, String>>) -> Self {
        match load {
            None => Self::Loading,
            Some(Ok(items)) => Self::Ready(summarize(items)),
            Some(Err(message)) => Self::Failed(message.clone()),
        }
    }
}

/// Record counts for one resource.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResourceSummary {
    pub total: usize,
    /// Active records, for resources with an `is_active` flag.
    pub active: Option<usize>,
}

impl ResourceSummary {
    /// Secondary line under the total, e.g. `"3 active, 1 inactive"`.
    pub fn caption(&self) -> Option<String> {
        self.active
            .map(|active| format!("{active} active, {} inactive", self.total.saturating_sub(active)))
    }
}

/// Count total and active records of `items`.
pub fn summarize<E: Entity>(items: &[E]) -> ResourceSummary {
    let flags: Vec<bool> = items.iter().filter_map(Entity::is_active).collect();
    let active = (E::default().is_active().is_some()).then(|| flags.iter().filter(|on| **on).count());
    ResourceSummary { total: items.len(), active }
}

/// Lead counts per follow-up status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LeadBreakdown {
    pub new: usize,
    pub contacted: usize,
}

impl LeadBreakdown {
    pub fn from_leads(leads: &[ContactLead]) -> Self {
        leads.iter().fold(Self::default(), |mut acc, lead| {
            match lead.status {
                LeadStatus::New => acc.new += 1,
                LeadStatus::Contacted => acc.contacted += 1,
            }
            acc
        })
    }

    /// Share of leads already contacted, as a whole percentage.
    pub fn contacted_percent(&self) -> usize {
        let total = self.new + self.contacted;
        if total == 0 { 0 } else { self.contacted * 100 / total }
    }
}

use std::collections::BTreeMap;

use crate::core::{ElementId, SubscriptionId};

/// Qualification policy for one visibility registration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewPolicy {
    /// Minimum intersection ratio of the region, 0..=1.
    pub min_ratio: f64,
    /// The region's top edge must be at least this many pixels above the
    /// viewport's lower edge before the event qualifies.
    pub bottom_margin_px: u32,
}

impl ViewPolicy {
    /// Reveal policy: 10% intersection, 100px inside the lower edge, so
    /// elements reveal slightly before full entry.
    pub fn reveal() -> Self {
        Self {
            min_ratio: 0.1,
            bottom_margin_px: 100,
        }
    }

    /// Timeline trigger policy: half the trigger region visible.
    pub fn timeline() -> Self {
        Self {
            min_ratio: 0.5,
            bottom_margin_px: 0,
        }
    }

    pub fn qualifies(&self, ratio: f64, edge_distance_px: u32) -> bool {
        ratio >= self.min_ratio && edge_distance_px >= self.bottom_margin_px
    }
}

/// The visibility observer capability. Delivery is host-driven: the host
/// calls back into the presentation with the qualifying subscription id.
/// Events may keep arriving for a subscription until it is cancelled.
pub trait VisibilityObserver {
    fn observe(&mut self, region: ElementId, policy: ViewPolicy) -> SubscriptionId;
    fn cancel(&mut self, subscription: SubscriptionId);
}

/// Observer implementation for hosts and tests that report viewport
/// movement explicitly instead of wiring a platform observer.
#[derive(Debug, Default)]
pub struct ManualViewport {
    next_id: u64,
    active: BTreeMap<SubscriptionId, (ElementId, ViewPolicy)>,
}

impl ManualViewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn is_active(&self, subscription: SubscriptionId) -> bool {
        self.active.contains_key(&subscription)
    }

    /// Reports that `region` is intersecting with the given ratio and
    /// distance above the viewport's lower edge. Returns the subscriptions
    /// whose policy qualifies, in registration order. Subscriptions stay
    /// live until cancelled, so a repeated report returns them again.
    pub fn enter(
        &mut self,
        region: &ElementId,
        ratio: f64,
        edge_distance_px: u32,
    ) -> Vec<SubscriptionId> {
        self.active
            .iter()
            .filter(|(_, (r, policy))| r == region && policy.qualifies(ratio, edge_distance_px))
            .map(|(sub, _)| *sub)
            .collect()
    }
}

impl VisibilityObserver for ManualViewport {
    fn observe(&mut self, region: ElementId, policy: ViewPolicy) -> SubscriptionId {
        let sub = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.active.insert(sub, (region, policy));
        sub
    }

    fn cancel(&mut self, subscription: SubscriptionId) {
        self.active.remove(&subscription);
    }
}

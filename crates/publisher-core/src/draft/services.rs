use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::types::ServiceId;

/// Flip membership of `service`. Returns whether it is selected afterwards.
pub fn toggle_service(services: &mut BTreeSet<ServiceId>, service: ServiceId) -> bool {
    if services.remove(&service) {
        false
    } else {
        services.insert(service);
        true
    }
}

/// Remaining-characters indicator shown while cross-posting is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharCounter {
    /// Tightest limit among the selected services, if any is known.
    pub limit: Option<u32>,
    /// `limit` minus the text length; negative when over the limit.
    pub remaining: Option<i64>,
}

impl CharCounter {
    /// Indicator for the current selection, or `None` when no service is selected.
    pub fn compute<F>(services: &BTreeSet<ServiceId>, text: &str, limit_for: F) -> Option<Self>
    where
        F: Fn(&ServiceId) -> Option<u32>,
    {
        if services.is_empty() {
            return None;
        }

        let limit = services.iter().filter_map(limit_for).min();
        let used = text.chars().count() as i64;

        Some(Self {
            limit,
            remaining: limit.map(|limit| i64::from(limit) - used),
        })
    }

    pub fn is_exceeded(&self) -> bool {
        self.remaining.is_some_and(|remaining| remaining < 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits(service: &ServiceId) -> Option<u32> {
        match service.as_str() {
            "twitter" => Some(280),
            "tumblr" => Some(1000),
            _ => None,
        }
    }

    #[test]
    fn test_toggle_twice_restores_membership() {
        let mut services = BTreeSet::new();
        assert!(toggle_service(&mut services, ServiceId::from("facebook")));
        assert!(services.contains(&ServiceId::from("facebook")));
        assert!(!toggle_service(&mut services, ServiceId::from("facebook")));
        assert!(services.is_empty());
    }

    #[test]
    fn test_toggle_leaves_other_services_alone() {
        let mut services = BTreeSet::new();
        toggle_service(&mut services, ServiceId::from("facebook"));
        toggle_service(&mut services, ServiceId::from("twitter"));
        toggle_service(&mut services, ServiceId::from("facebook"));
        assert_eq!(
            services.into_iter().collect::<Vec<_>>(),
            vec![ServiceId::from("twitter")]
        );
    }

    #[test]
    fn test_toggle_is_symmetric_difference() {
        let sequence = ["a", "b", "a", "c", "b", "b"];
        let mut services = BTreeSet::new();
        for id in sequence {
            toggle_service(&mut services, ServiceId::from(id));
        }
        // a: 2 toggles, b: 3, c: 1
        let expected: BTreeSet<ServiceId> = ["b", "c"].into_iter().map(ServiceId::from).collect();
        assert_eq!(services, expected);
    }

    #[test]
    fn test_no_indicator_without_services() {
        assert!(CharCounter::compute(&BTreeSet::new(), "hello", limits).is_none());
    }

    #[test]
    fn test_indicator_uses_tightest_limit() {
        let services: BTreeSet<ServiceId> =
            ["tumblr", "twitter"].into_iter().map(ServiceId::from).collect();
        let counter = CharCounter::compute(&services, "hello", limits).unwrap();
        assert_eq!(counter.limit, Some(280));
        assert_eq!(counter.remaining, Some(275));
        assert!(!counter.is_exceeded());
    }

    #[test]
    fn test_indicator_without_known_limit() {
        let services: BTreeSet<ServiceId> = ["facebook"].into_iter().map(ServiceId::from).collect();
        let counter = CharCounter::compute(&services, "hello", limits).unwrap();
        assert_eq!(counter.limit, None);
        assert_eq!(counter.remaining, None);
    }

    #[test]
    fn test_indicator_exceeded() {
        let services: BTreeSet<ServiceId> = ["twitter"].into_iter().map(ServiceId::from).collect();
        let text = "x".repeat(281);
        let counter = CharCounter::compute(&services, &text, limits).unwrap();
        assert_eq!(counter.remaining, Some(-1));
        assert!(counter.is_exceeded());
    }
}

use std::collections::BTreeSet;

use crate::{
    core::{DelayMs, ElementId},
    error::{AperioError, AperioResult},
    surface::CosmeticEffect,
};

/// Everything the presentation sequences on one page: reveal targets, an
/// optional step timeline, an optional entrance overlay, and the cosmetic
/// effects to install. Transient, per-page-load; nothing persists.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct PageSpec {
    pub reveals: Vec<RevealTarget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline: Option<TimelineSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entrance: Option<EntranceSpec>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub effects: Vec<CosmeticEffect>,
}

/// One element tagged for scroll-triggered reveal.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct RevealTarget {
    pub id: ElementId,
    /// Applied between the visibility event and the reveal itself.
    #[serde(default)]
    pub delay: DelayMs,
}

/// A fixed-length step sequence driven from a single trigger region.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct TimelineSpec {
    pub trigger: ElementId,
    pub steps: Vec<ElementId>,
}

/// The entrance overlay played once at page load.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct EntranceSpec {
    pub overlay: ElementId,
}

impl PageSpec {
    pub fn from_json(s: &str) -> AperioResult<Self> {
        let page: PageSpec =
            serde_json::from_str(s).map_err(|e| AperioError::serde(e.to_string()))?;
        page.validate()?;
        Ok(page)
    }

    pub fn validate(&self) -> AperioResult<()> {
        let mut seen = BTreeSet::new();
        for target in &self.reveals {
            if target.id.as_str().trim().is_empty() {
                return Err(AperioError::validation("reveal target id must be non-empty"));
            }
            if !seen.insert(&target.id) {
                return Err(AperioError::validation(format!(
                    "duplicate reveal target id '{}'",
                    target.id
                )));
            }
        }

        if let Some(timeline) = &self.timeline {
            if timeline.trigger.as_str().trim().is_empty() {
                return Err(AperioError::validation("timeline trigger must be non-empty"));
            }
            // One region, one owner: a trigger shared with a reveal target
            // would subscribe the same region twice.
            if seen.contains(&timeline.trigger) {
                return Err(AperioError::validation(format!(
                    "timeline trigger '{}' is already a reveal target",
                    timeline.trigger
                )));
            }
            let mut steps = BTreeSet::new();
            for step in &timeline.steps {
                if step.as_str().trim().is_empty() {
                    return Err(AperioError::validation("timeline step id must be non-empty"));
                }
                if !steps.insert(step) {
                    return Err(AperioError::validation(format!(
                        "duplicate timeline step id '{step}'"
                    )));
                }
            }
            if steps.contains(&timeline.trigger) {
                return Err(AperioError::validation(format!(
                    "timeline trigger '{}' is also a timeline step",
                    timeline.trigger
                )));
            }
        }

        if let Some(entrance) = &self.entrance {
            if entrance.overlay.as_str().trim().is_empty() {
                return Err(AperioError::validation("entrance overlay must be non-empty"));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn basic_page() -> PageSpec {
        PageSpec {
            reveals: vec![
                RevealTarget {
                    id: "hero".into(),
                    delay: DelayMs(0),
                },
                RevealTarget {
                    id: "card-1".into(),
                    delay: DelayMs(300),
                },
            ],
            timeline: Some(TimelineSpec {
                trigger: "process".into(),
                steps: vec!["step-1".into(), "step-2".into(), "step-3".into()],
            }),
            entrance: Some(EntranceSpec {
                overlay: "door-overlay".into(),
            }),
            effects: vec![CosmeticEffect::SmoothScroll, CosmeticEffect::Parallax],
        }
    }

    #[test]
    fn json_roundtrip() {
        let page = basic_page();
        let s = serde_json::to_string_pretty(&page).unwrap();
        let de = PageSpec::from_json(&s).unwrap();
        assert_eq!(de.reveals.len(), 2);
        assert_eq!(de.reveals[1].delay, DelayMs(300));
        assert_eq!(de.timeline.unwrap().steps.len(), 3);
    }

    #[test]
    fn delay_defaults_to_zero() {
        let page = PageSpec::from_json(r#"{ "reveals": [ { "id": "a" } ] }"#).unwrap();
        assert_eq!(page.reveals[0].delay, DelayMs(0));
        assert!(page.timeline.is_none());
        assert!(page.effects.is_empty());
    }

    #[test]
    fn validate_rejects_duplicate_reveal_id() {
        let mut page = basic_page();
        page.reveals.push(RevealTarget {
            id: "hero".into(),
            delay: DelayMs(0),
        });
        assert!(page.validate().is_err());
    }

    #[test]
    fn validate_rejects_trigger_reusing_reveal_id() {
        let mut page = basic_page();
        page.timeline.as_mut().unwrap().trigger = "hero".into();
        assert!(page.validate().is_err());
    }

    #[test]
    fn validate_rejects_trigger_listed_as_step() {
        let mut page = basic_page();
        page.timeline.as_mut().unwrap().trigger = "step-2".into();
        assert!(page.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_step_id() {
        let mut page = basic_page();
        page.timeline.as_mut().unwrap().steps.push("".into());
        assert!(page.validate().is_err());
    }

    #[test]
    fn validate_rejects_blank_overlay() {
        let mut page = basic_page();
        page.entrance = Some(EntranceSpec {
            overlay: "  ".into(),
        });
        assert!(page.validate().is_err());
    }
}

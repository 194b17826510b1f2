//! Shallow, template-wins merging of manifest sections
//!
//! The merge policy is a plain key-value union per designated section: host
//! entries are retained, template entries override on key collision. There is
//! no deep merge, no array concatenation and no semver conflict resolution;
//! collisions are reported separately by [`section_conflicts`] for the
//! operator to review.

use serde_json::{Map, Value};

use crate::manifest::{DESIGNATED_SECTIONS, Manifest};

/// Shallow union of two sections; `update` entries win on key collision
fn merge_section(base: &Map<String, Value>, update: &Map<String, Value>) -> Map<String, Value> {
    let mut merged = base.clone();
    for (key, value) in update {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

/// Merge a template manifest into a host manifest.
///
/// All top-level keys of the host pass through unchanged, except the four
/// designated sections, which each become the shallow union of host and
/// template with template values winning. The section keys are always present
/// in the result, as an empty object when neither side defines them. Template
/// keys outside the designated sections are ignored.
pub fn merge_manifests(host: &Manifest, template: &Manifest) -> Manifest {
    let mut merged = host.0.clone();

    for section in DESIGNATED_SECTIONS {
        let combined = merge_section(&host.section(section), &template.section(section));
        merged.insert(section.to_string(), Value::Object(combined));
    }

    Manifest(merged)
}

/// A key both manifests define in the same section with different values
#[derive(Debug, Clone, PartialEq)]
pub struct SectionConflict {
    pub section: &'static str,
    pub key: String,
    pub host_value: Value,
    pub template_value: Value,
}

/// Collisions that [`merge_manifests`] resolves in the template's favor.
///
/// Keys with identical values on both sides are not conflicts.
pub fn section_conflicts(host: &Manifest, template: &Manifest) -> Vec<SectionConflict> {
    let mut conflicts = Vec::new();

    for section in DESIGNATED_SECTIONS {
        let host_section = host.section(section);
        for (key, template_value) in &template.section(section) {
            if let Some(host_value) = host_section.get(key) {
                if host_value != template_value {
                    conflicts.push(SectionConflict {
                        section,
                        key: key.clone(),
                        host_value: host_value.clone(),
                        template_value: template_value.clone(),
                    });
                }
            }
        }
    }

    conflicts
}

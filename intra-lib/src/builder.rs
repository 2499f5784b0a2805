//! Canonical path construction from identifier bundles.

use std::fmt::Display;

use crate::ids::{ActivityId, EventId, ModuleId};

/// Joins `segments` into an absolute path, percent-encoding every segment on its own.
///
/// A `/` or `?` smuggled into a caller supplied code is escaped and cannot alter the
/// structure of the resulting path.
pub fn escape_path<S: Display>(segments: &[S]) -> String {
    let mut path = String::new();
    for segment in segments {
        path.push('/');
        path.push_str(&urlencoding::encode(&segment.to_string()));
    }
    path
}

pub fn module_path(id: ModuleId<'_>) -> String {
    let scolaryear = id.scolaryear.to_string();
    escape_path(&["module", scolaryear.as_str(), id.module, id.instance])
}

pub fn activity_path(id: ActivityId<'_>) -> String {
    format!("{}{}", module_path(id.module()), escape_path(&[id.activity]))
}

pub fn project_path(id: ActivityId<'_>) -> String {
    format!("{}/project", activity_path(id))
}

pub fn event_path(id: EventId<'_>) -> String {
    format!("{}{}", activity_path(id.activity()), escape_path(&[id.event]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::{is_activity_path, is_event_path, is_module_path, is_project_path};

    const MODULE: ModuleId<'static> = ModuleId {
        scolaryear: 2021,
        module: "B-PRO-300",
        instance: "RUN-3-1",
    };

    #[test]
    fn builds_canonical_paths() {
        let activity = MODULE.activity("acti-458897");

        assert_eq!(module_path(MODULE), "/module/2021/B-PRO-300/RUN-3-1");
        assert_eq!(
            activity_path(activity),
            "/module/2021/B-PRO-300/RUN-3-1/acti-458897"
        );
        assert_eq!(
            project_path(activity),
            "/module/2021/B-PRO-300/RUN-3-1/acti-458897/project"
        );
        assert_eq!(
            event_path(activity.event("event-1234")),
            "/module/2021/B-PRO-300/RUN-3-1/acti-458897/event-1234"
        );
    }

    #[test]
    fn built_paths_are_recognized() {
        for (year, module, instance, acti) in [
            (2019, "G-EPI-001", "PAR-0-1", "acti-1"),
            (2021, "B-PRO-300", "RUN-3-1", "acti-458897"),
            (2024, "T-WEB-600", "LYN-6-12", "acti-42"),
        ] {
            let id = ModuleId::new(year, module, instance);
            assert!(is_module_path(&module_path(id)));
            assert!(is_activity_path(&activity_path(id.activity(acti))));
            assert!(is_project_path(&project_path(id.activity(acti))));
            assert!(is_event_path(&event_path(
                id.activity(acti).event("event-7")
            )));
        }
    }

    #[test]
    fn segments_are_escaped_independently() {
        let id = ModuleId::new(2021, "B-PRO-300/../x", "RUN 3?1");
        assert_eq!(
            module_path(id),
            "/module/2021/B-PRO-300%2F..%2Fx/RUN%203%3F1"
        );
        assert!(!is_module_path(&module_path(id)));
    }
}

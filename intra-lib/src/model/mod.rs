//! Typed records of the payloads returned by the intranet.
//!
//! Records are inert data, decoded as returned. Numbers sent as strings stay strings,
//! missing fields decode to their default and nullable fields are `Option`s.

mod activity;
mod dashboard;
mod event;
mod internship;
mod module;
mod planning;
mod project;
mod user;

pub use activity::{Activity, ActivityEvent, StudentRegistration};
pub use dashboard::{
    Dashboard, DashboardActivity, DashboardBoard, DashboardCurrentModule, DashboardHistory,
    DashboardHistoryUser, DashboardInfos, DashboardInternship, DashboardMark, DashboardModule,
    DashboardProject,
};
pub use event::{Event, EventRegisteredUser};
pub use internship::{Internship, InternshipOutput};
pub use module::{
    ActivityAppointment, AppointmentEvent, AppointmentGroup, AppointmentMember,
    AppointmentProject, AppointmentSlot, AppointmentSlots, CourseFilterOutput, Module,
    ModuleActivity, ModuleActivityEvent, ModuleActivityProject, ModuleBoardActivity,
    ModuleRegisteredUser, ModuleSummary,
};
pub use planning::PlanningElement;
pub use project::{
    FileModifier, FileRights, Project, ProjectFile, ProjectGroup, ProjectGroupMember,
    ProjectRegisteredGroup, ProjectRegisteredUser, ProjectUnregisteredUser,
};
pub use user::{
    User, UserAbsence, UserAbsencesOutput, UserDetails, UserEducationalUpdate, UserEvent,
    UserFlag, UserFlags, UserFlagsModule, UserGpa, UserGroup, UserListHistory, UserNote,
    UserNsStat, UserPartner, UserPartnerIdentity, UserPartnersOutput,
};

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses the `YYYY-MM-DD hh:mm:ss` timestamps used throughout the intranet.
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, DATETIME_FORMAT).ok()
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// Whether a `"0"`/`"1"`, `"true"`/`"false"`, number or boolean flag is set.
pub fn is_literal_true(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Bool(flag) => *flag,
        serde_json::Value::Number(number) => number.as_i64() == Some(1),
        serde_json::Value::String(text) => text == "1" || text == "true",
        _ => false,
    }
}

/// An assistant or participant, either a single user or a whole group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Member {
    Group {
        login: String,
    },
    User {
        login: String,
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        picture: Option<String>,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Room {
    /// `country/city/room`, e.g. `FR/RUN/Epitech/Hub`.
    pub code: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub seats: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_intranet_timestamps() {
        let parsed = parse_datetime("2021-09-01 08:30:00").unwrap();
        assert_eq!(parsed.to_string(), "2021-09-01 08:30:00");
        assert!(parse_datetime("01/09/2021, 08:30").is_none());
        assert_eq!(
            parse_date("2022-01-16"),
            NaiveDate::from_ymd_opt(2022, 1, 16)
        );
    }

    #[test]
    fn literal_flags() {
        for value in [json!("1"), json!("true"), json!(1), json!(true)] {
            assert!(is_literal_true(&value));
        }
        for value in [json!("0"), json!("false"), json!(0), json!(false), json!(null)] {
            assert!(!is_literal_true(&value));
        }
    }

    #[test]
    fn members_are_tagged_by_type() {
        let members: Vec<Member> = serde_json::from_value(json!([
            { "type": "group", "login": "g-42" },
            { "type": "user", "login": "jane.doe@epitech.eu", "title": "Jane Doe" }
        ]))
        .unwrap();
        assert_eq!(
            members[0],
            Member::Group {
                login: "g-42".to_owned()
            }
        );
        assert!(matches!(&members[1], Member::User { picture: None, .. }));
    }
}

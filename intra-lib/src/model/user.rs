use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserGroup {
    pub title: String,
    pub name: String,
    pub count: u32,
}

/// A missed event.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserEvent {
    pub id_event_failed: String,
    pub id_user: String,
    pub begin: String,
    pub id_activite_failed: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserGpa {
    /// Decimal number, e.g. `3.42`.
    pub gpa: String,
    pub cycle: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserNsStat {
    pub active: f64,
    pub idle: f64,
    pub out_active: f64,
    pub out_idle: f64,
    pub nslog_norm: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub login: String,
    pub title: String,
    pub internal_email: String,
    pub lastname: String,
    pub firstname: String,
    pub userinfo: Value,
    pub referent_used: bool,
    pub picture: Option<String>,
    pub picture_fun: Option<String>,
    pub scolaryear: String,
    pub promo: u32,
    pub semester: u32,
    /// `country/city`, e.g. `FR/RUN`.
    pub location: String,
    pub userdocs: Value,
    pub shell: Value,
    pub close: bool,
    pub ctime: String,
    pub mtime: String,
    pub id_promo: String,
    pub id_history: String,
    pub course_code: String,
    pub semester_code: String,
    pub school_id: String,
    pub school_code: String,
    pub school_title: String,
    pub old_id_promo: String,
    pub old_id_location: String,
    pub rights: Value,
    pub invited: bool,
    pub studentyear: u32,
    pub admin: bool,
    pub editable: bool,
    pub restrictprofiles: bool,
    pub groups: Vec<UserGroup>,
    pub events: Vec<UserEvent>,
    pub credits: u32,
    pub gpa: Vec<UserGpa>,
    pub spice: Value,
    pub nsstat: Option<UserNsStat>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPartner {
    pub login: String,
    pub picture: Option<String>,
    /// Comma separated titles of the shared activities.
    pub activities: String,
    pub id_activities: String,
    pub nb_activities: String,
    pub weight: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPartnerIdentity {
    pub login: String,
    pub picture: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPartnersOutput {
    pub user: UserPartnerIdentity,
    pub binomes: Vec<UserPartner>,
}

/// An entry of the educational history scraped from the profile page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserEducationalUpdate {
    pub scolaryear: u32,
    pub date: String,
    pub location: String,
    pub promo: u32,
    pub course_code: String,
    pub semester: u32,
    pub special: Value,
    pub modifier: String,
    pub comment: String,
    pub course_title: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserListHistory {
    pub scolaryear: u32,
    pub date: String,
    pub location: String,
    pub promo: u32,
    pub course_code: String,
    pub semester: u32,
    pub special: Value,
    pub modifier: String,
    pub comment: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserAbsence {
    pub module_title: String,
    pub acti_title: String,
    pub link_module: String,
    pub link_event: String,
    /// `"0"` or `"1"`.
    pub recent: String,
    pub begin: String,
    pub end: String,
    pub categ_title: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserAbsencesOutput {
    pub recents: Vec<UserAbsence>,
    pub others: Vec<UserAbsence>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserFlagsModule {
    pub scolaryear: u32,
    pub id_user_history: String,
    pub codemodule: String,
    pub codeinstance: String,
    pub title: String,
    pub id_instance: String,
    pub date_ins: String,
    pub cycle: String,
    /// A letter grade, `Acquis`, `Echec`, `-` or `N/A`. `None` before grading.
    pub grade: Option<String>,
    pub credits: u32,
    pub flags: String,
    pub barrage: u8,
    pub instance_id: String,
    pub module_rating: Value,
    pub semester: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserFlag {
    pub value: i64,
    pub label: String,
    pub modules: Vec<UserFlagsModule>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserFlags {
    pub ghost: UserFlag,
    pub difficulty: UserFlag,
    pub remarkable: UserFlag,
    pub medal: UserFlag,
    /// Any flag the intranet adds beyond the four above.
    #[serde(flatten)]
    pub other: BTreeMap<String, UserFlag>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserNote {
    pub scolaryear: u32,
    pub codemodule: String,
    pub codeinstance: String,
    pub codeacti: String,
    pub title: String,
    pub date: String,
    pub final_note: f64,
}

/// The printable profile, a [`User`] with its whole academic record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserDetails {
    #[serde(flatten)]
    pub user: User,
    pub flags: UserFlags,
    pub partners: UserPartnersOutput,
    pub list_history: Vec<UserListHistory>,
    pub missed: Vec<UserAbsence>,
    pub modules: Vec<UserFlagsModule>,
    pub notes: Vec<UserNote>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_details_around_the_user() {
        let details: UserDetails = serde_json::from_value(json!({
            "login": "jane.doe@epitech.eu",
            "title": "Jane Doe",
            "picture": null,
            "gpa": [{ "gpa": "3.42", "cycle": "bachelor" }],
            "nsstat": null,
            "flags": {
                "ghost": { "value": 0, "label": "Ghost", "modules": [] },
                "medal": { "value": 1, "label": "Medal", "modules": [] },
                "custom": { "value": 2, "label": "Custom", "modules": [] }
            },
            "notes": [{ "codeacti": "acti-1", "final_note": 12.5 }]
        }))
        .unwrap();

        assert_eq!(details.user.login, "jane.doe@epitech.eu");
        assert_eq!(details.user.gpa[0].gpa, "3.42");
        assert!(details.user.nsstat.is_none());
        assert_eq!(details.flags.medal.value, 1);
        assert_eq!(details.flags.other["custom"].label, "Custom");
        assert_eq!(details.notes[0].final_note, 12.5);
    }

    #[test]
    fn ungraded_modules_decode() {
        let modules: Vec<UserFlagsModule> = serde_json::from_value(json!([
            { "codemodule": "B-PRO-300", "grade": null, "credits": 6 },
            { "codemodule": "B-YEP-400", "grade": "B", "credits": 3 }
        ]))
        .unwrap();

        assert_eq!(modules[0].grade, None);
        assert_eq!(modules[1].grade.as_deref(), Some("B"));
    }
}

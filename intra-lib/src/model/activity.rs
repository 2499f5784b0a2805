use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{parse_datetime, Member};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityEvent {
    /// e.g. `event-1234`.
    pub code: String,
    pub num_event: String,
    pub seats: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub nb_inscrits: String,
    pub begin: Option<String>,
    pub end: Option<String>,
    pub id_activite: String,
    pub location: Option<String>,
    pub nb_max_students_projet: Option<u32>,
    pub already_register: Option<String>,
    /// `registered`, `present`, `absent` or `false`.
    pub user_status: Value,
    pub allow_token: String,
    pub assistants: Vec<Member>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StudentRegistration {
    pub registered: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Activity {
    pub scolaryear: String,
    pub codemodule: String,
    pub codeinstance: String,
    pub codeacti: String,
    pub call_ihk: Option<String>,
    pub slug: Option<String>,
    pub instance_location: String,
    pub module_title: String,
    pub title: String,
    pub description: String,
    pub type_title: String,
    pub type_code: String,
    pub begin: Option<String>,
    pub start: Option<String>,
    pub end_register: Option<String>,
    pub deadline: Option<String>,
    pub end: Option<String>,
    pub nb_hours: Option<String>,
    pub nb_group: u32,
    pub num: u32,
    pub register: String,
    pub register_by_bloc: String,
    pub register_prof: String,
    pub title_location_type: Option<String>,
    pub is_projet: bool,
    pub id_projet: Option<String>,
    pub project_title: Option<String>,
    pub is_note: bool,
    pub nb_notes: Option<u32>,
    pub is_blocins: bool,
    pub rdv_status: String,
    pub id_bareme: Option<String>,
    pub title_bareme: Option<String>,
    pub archive: String,
    pub hash_elearning: Option<String>,
    pub ged_node_adm: Value,
    pub nb_planified: Option<u32>,
    pub hidden: bool,
    pub project: Value,
    pub student_registered: Option<StudentRegistration>,
    pub events: Vec<ActivityEvent>,
}

impl Activity {
    pub fn begin_at(&self) -> Option<NaiveDateTime> {
        self.begin.as_deref().and_then(parse_datetime)
    }

    pub fn end_at(&self) -> Option<NaiveDateTime> {
        self.end.as_deref().and_then(parse_datetime)
    }
}

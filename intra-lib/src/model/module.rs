use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::parse_date;

/// An activity of the module board, spanning every registered module.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleBoardActivity {
    pub title_module: String,
    pub codemodule: String,
    pub scolaryear: String,
    pub codeinstance: String,
    pub code_location: String,
    pub begin_event: Option<String>,
    pub end_event: Option<String>,
    pub seats: Option<String>,
    pub num_event: Option<String>,
    pub type_acti: String,
    pub type_acti_code: String,
    pub codeacti: String,
    pub acti_title: String,
    pub num: String,
    pub begin_acti: Option<String>,
    pub end_acti: Option<String>,
    pub registered: u8,
    pub info_creneau: Option<String>,
    pub project: String,
    pub rights: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleSummary {
    pub id: u64,
    pub title_cn: Option<String>,
    pub semester: u32,
    pub num: String,
    pub begin: String,
    pub end: String,
    pub end_register: Option<String>,
    pub scolaryear: u32,
    pub code: String,
    pub codeinstance: String,
    pub location_title: String,
    pub instance_location: String,
    pub flags: String,
    pub credits: String,
    pub rights: Vec<String>,
    /// `valid`, `fail` or `ongoing`.
    pub status: String,
    pub waiting_grades: Value,
    pub active_promo: String,
    pub open: String,
    pub title: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CourseFilterOutput {
    /// `(id, semester, location, course, title)` tuples.
    pub preload: Vec<(i64, i64, String, String, String)>,
    pub items: Vec<ModuleSummary>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleActivityProject {
    pub id: u64,
    pub scolaryear: String,
    pub codemodule: String,
    pub codeinstance: String,
    pub title: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleActivityEvent {
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
    pub nb_max_students_projet: Option<String>,
    pub already_register: Option<String>,
    pub user_status: Option<String>,
    pub allow_token: String,
    pub assistants: Vec<Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleActivity {
    pub codeacti: String,
    pub call_ihk: Option<String>,
    pub slug: Option<String>,
    pub instance_location: String,
    pub module_title: String,
    pub title: String,
    pub description: Option<String>,
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
    pub register_by_prof: String,
    pub title_location_type: Option<String>,
    pub is_projet: bool,
    pub id_projet: Option<String>,
    pub project_title: Option<String>,
    pub is_note: bool,
    pub nb_notes: Option<u32>,
    pub is_blocins: bool,
    pub rdv_status: String,
    pub id_bareme: Option<u64>,
    pub title_bareme: Option<String>,
    pub archive: String,
    pub hash_elearning: Option<String>,
    pub ged_code_abm: Option<String>,
    pub nb_planified: Option<u32>,
    pub hidden: bool,
    pub project: Option<ModuleActivityProject>,
    pub events: Vec<ModuleActivityEvent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Module {
    pub scolaryear: String,
    pub codemodule: String,
    pub codeinstance: String,
    pub semester: u32,
    pub scolaryear_template: String,
    pub title: String,
    pub begin: String,
    pub end: String,
    pub end_register: Option<String>,
    pub past: String,
    pub closed: String,
    pub opened: String,
    pub user_credits: Option<String>,
    pub credits: u32,
    pub description: Option<String>,
    pub competence: Option<String>,
    pub flags: String,
    pub instance_flags: String,
    pub max_ins: Value,
    pub instance_location: String,
    pub hidden: String,
    pub old_acl_backup: Value,
    pub resp: Vec<Value>,
    pub assistant: Vec<Value>,
    pub rights: Value,
    pub template_resp: Vec<Value>,
    pub allow_register: u8,
    pub date_ins: Option<String>,
    pub student_registered: u8,
    /// A letter grade, `Acquis`, `Echec` or `N/A`.
    pub student_grade: String,
    pub student_credits: u32,
    pub color: String,
    pub student_flags: String,
    pub current_resp: bool,
    pub activites: Vec<ModuleActivity>,
}

impl Module {
    pub fn begin_date(&self) -> Option<NaiveDate> {
        parse_date(&self.begin)
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        parse_date(&self.end)
    }

    /// Activities that carry a project.
    pub fn project_activities(&self) -> impl Iterator<Item = &ModuleActivity> + '_ {
        self.activites.iter().filter(|activity| activity.is_projet)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppointmentEvent {
    pub id: String,
    pub nb_registered: String,
    pub begin: Option<String>,
    pub register: String,
    pub num_event: String,
    pub end: Option<String>,
    pub location: Option<String>,
    pub title: Option<String>,
    pub date_ins: Option<String>,
    pub date_modif: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppointmentMember {
    pub login: String,
    pub title: String,
    pub picture: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppointmentSlot {
    pub acti_title: String,
    pub date: Option<String>,
    pub duration: u32,
    /// `open` or `close`.
    pub status: String,
    pub bloc_status: String,
    pub id_team: Option<String>,
    pub id_user: Option<String>,
    pub date_ins: Option<String>,
    pub code: Option<String>,
    pub title: Option<String>,
    pub module_title: String,
    pub members_pictures: Value,
    pub past: u8,
    pub master: Option<AppointmentMember>,
    pub members: Vec<AppointmentMember>,
    pub id: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppointmentSlots {
    pub id: u64,
    pub title: String,
    pub bloc_status: String,
    pub room: Option<String>,
    pub slots: Vec<AppointmentSlot>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppointmentGroup {
    pub id: u64,
    pub code: String,
    pub title: String,
    pub inscrit: bool,
    pub master: String,
    pub members: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppointmentProject {
    pub title: String,
    pub codeacti: String,
    pub id_projet: String,
}

/// The appointment (`rdv`) page of an activity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityAppointment {
    pub scolaryear: String,
    pub codemodule: String,
    pub codeinstance: String,
    pub codeacti: String,
    pub nb_notes: u32,
    pub register_by_bloc: bool,
    pub group: Option<AppointmentGroup>,
    pub projects: Vec<AppointmentProject>,
    pub events: Vec<AppointmentEvent>,
    pub title: String,
    pub description: Option<String>,
    pub instance_location: String,
    pub student_registered: Option<bool>,
    pub module_title: String,
    pub project: Option<ModuleActivityProject>,
    pub with_project: bool,
    pub nb_registered: u32,
    pub nb_slots_full: u32,
    pub slots: Vec<AppointmentSlots>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleRegisteredUser {
    pub login: String,
    pub picture: Option<String>,
    pub title: String,
    pub location: Option<String>,
    pub promo: u32,
    pub course_code: String,
    pub grade: Option<String>,
    pub cycle: String,
    pub date_ins: Option<String>,
    pub credits: u32,
    pub flags: Vec<Value>,
    pub semester: String,
}

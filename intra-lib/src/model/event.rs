use serde::{Deserialize, Serialize};

use super::Room;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Event {
    pub scolaryear: String,
    pub codemodule: String,
    pub codeinstance: String,
    pub codeacti: String,
    pub codeevent: String,
    pub semester: u32,
    pub instance_location: String,
    pub module_title: String,
    pub acti_title: String,
    pub acti_description: String,
    pub type_title: String,
    pub type_code: String,
    pub allowed_planning_start: Option<String>,
    pub allowed_planning_end: Option<String>,
    pub nb_hours: Option<String>,
    pub nb_group: u32,
    pub has_exam_subject: bool,
    pub begin: Option<String>,
    pub end: Option<String>,
    pub num_event: u32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub nb_registered: u32,
    pub id_dir: String,
    pub room: Room,
    pub seats: Option<u32>,
    pub desc_webservice: String,
    pub name_bocal: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EventRegisteredUser {
    pub id: String,
    pub login: String,
    pub title: Option<String>,
    pub picture: Option<String>,
    /// `present`, `absent`, `refused`, `excused` or `N/A`.
    pub present: String,
    pub token_trace: Option<String>,
    pub can_token: String,
    pub registered: String,
    pub date_ins: Option<String>,
    pub date_modif: Option<String>,
}

use serde::{Deserialize, Serialize};
use serde_json::Value;

// Dashboard dates are `DD/MM/YYYY, hh:mm`, and absent ones are sent as `false`.

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardProject {
    pub title: String,
    pub title_link: String,
    pub timeline_start: String,
    pub timeline_end: String,
    pub timeline_barre: String,
    pub date_inscription: Value,
    pub id_activite: String,
    pub soutenance_name: Value,
    pub soutenance_link: Value,
    pub soutenance_date: Value,
    pub soutenance_salle: Value,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardModule {
    pub title: String,
    pub title_link: String,
    pub timeline_start: String,
    pub timeline_end: String,
    pub timeline_barre: String,
    pub date_inscription: Value,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardMark {
    pub title: String,
    pub title_link: String,
    pub note: String,
    pub noteur: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardActivity {
    pub title: String,
    pub module: String,
    pub module_link: String,
    pub module_code: String,
    pub title_link: String,
    pub timeline_start: String,
    pub timeline_end: String,
    pub timeline_barre: String,
    pub date_inscription: Value,
    pub salle: String,
    pub intervenant: String,
    pub token: Option<String>,
    pub token_link: String,
    pub register_link: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardHistoryUser {
    pub picture: Option<String>,
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardHistory {
    pub title: String,
    pub user: DashboardHistoryUser,
    /// HTML fragment.
    pub content: String,
    pub date: String,
    pub id: String,
    pub visible: String,
    pub id_activite: String,
    pub class: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardCurrentModule {
    pub credits_min: String,
    pub credits_norm: String,
    pub credits_obj: String,
    pub credits: String,
    pub grade: String,
    pub cycle: String,
    pub code_module: String,
    pub current_cycle: String,
    pub semester_code: String,
    pub semester_num: String,
    pub active_log: Value,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardInternship {
    pub company: String,
    pub link: String,
    pub timeline_start: String,
    pub timeline_end: String,
    pub timeline_barre: String,
    pub can_note: bool,
    /// `waiting` or `confirmed`.
    pub status: String,
    pub mandatory: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardBoard {
    pub projets: Vec<DashboardProject>,
    pub notes: Vec<DashboardMark>,
    pub susies: Vec<Value>,
    pub modules: Vec<DashboardModule>,
    pub stages: Vec<DashboardInternship>,
    pub tickets: Vec<Value>,
    pub activites: Vec<DashboardActivity>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardInfos {
    pub location: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Dashboard {
    pub ip: String,
    pub board: DashboardBoard,
    pub history: Vec<DashboardHistory>,
    pub infos: DashboardInfos,
    pub current: Vec<DashboardCurrentModule>,
}

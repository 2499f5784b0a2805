use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectGroupMember {
    pub login: String,
    pub date_ins: Option<String>,
    pub date_modif: Option<String>,
    /// `pending`, `requesting` or `confirmed`.
    pub status: String,
    pub picture: Option<String>,
    pub title: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectUnregisteredUser {
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
    pub flags: Vec<String>,
    pub semester: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectGroup {
    pub id: String,
    pub title: String,
    pub code: String,
    pub final_note: Option<String>,
    pub repository: Option<String>,
    pub closed: bool,
    pub master: ProjectGroupMember,
    pub members: Vec<ProjectGroupMember>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub scolaryear: String,
    pub codemodule: String,
    pub codeinstance: String,
    pub codeacti: String,
    pub instancelocation: String,
    pub module_title: String,
    pub id_activite: String,
    pub project_title: String,
    pub type_title: String,
    pub type_code: String,
    pub register: bool,
    pub register_by_bloc: String,
    pub register_prof: String,
    pub nb_min: u32,
    pub nb_max: u32,
    pub begin: Option<String>,
    pub end: Option<String>,
    pub end_register: Option<String>,
    pub deadline: Option<String>,
    pub is_rdv: bool,
    pub instance_allowed: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub closed: bool,
    pub over: i64,
    pub over_deadline: Value,
    pub date_access: bool,
    pub instance_registered: String,
    pub user_project_status: Option<String>,
    pub root_slug: Option<String>,
    pub forum_path: Option<String>,
    pub slug: Option<String>,
    pub call_ihk: Option<String>,
    pub nb_notes: Option<u32>,
    pub user_project_master: Option<String>,
    /// Code of the current user's group, if any.
    pub user_project_code: Option<String>,
    pub user_project_title: Option<String>,
    pub registered_instance: u32,
    pub registered: Vec<ProjectGroup>,
    pub notregistered: Vec<ProjectUnregisteredUser>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectRegisteredUser {
    pub login: String,
    pub date_ins: Option<String>,
    pub date_modif: Option<String>,
    /// `confirmed`, `requesting`, `unconfirmed`, `deleting` or `deleted`.
    pub status: String,
    pub picture: Option<String>,
    pub title: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectRegisteredGroup {
    pub id: String,
    pub title: String,
    pub code: String,
    pub final_note: Option<f64>,
    pub repository: Option<String>,
    pub project_title: String,
    pub closed: bool,
    pub master: ProjectRegisteredUser,
    pub members: Vec<ProjectRegisteredUser>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRights {
    pub ged_read: u8,
    pub ged_write: u8,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModifier {
    pub login: String,
    pub title: String,
    pub picture: Option<String>,
}

/// A file or directory of a project's storage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectFile {
    #[serde(rename = "type")]
    pub kind: String,
    pub slug: String,
    pub title: String,
    pub secure: bool,
    pub synchro: bool,
    pub archive: bool,
    pub language: Option<String>,
    pub size: u64,
    pub ctime: Option<String>,
    pub mtime: Option<String>,
    pub mime: String,
    #[serde(rename = "isLeaf")]
    pub is_leaf: bool,
    #[serde(rename = "noFolder")]
    pub no_folder: bool,
    pub rights: FileRights,
    pub modifier: FileModifier,
    /// Path of the file, usable with `download_file`.
    pub fullpath: String,
}

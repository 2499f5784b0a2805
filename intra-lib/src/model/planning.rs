use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Room;

/// An entry of the planning. Only the fields shared by every kind of entry are typed,
/// the rest is kept in `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanningElement {
    pub scolaryear: Option<String>,
    pub codemodule: Option<String>,
    pub codeinstance: Option<String>,
    pub codeacti: Option<String>,
    pub codeevent: Option<String>,
    pub semester: Option<u32>,
    pub titlemodule: Option<String>,
    pub acti_title: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub type_title: Option<String>,
    pub type_code: Option<String>,
    pub room: Option<Room>,
    pub module_registered: Value,
    pub event_registered: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

use serde::{Deserialize, Serialize};

// Most of these come back as strings, numbers included.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Internship {
    pub begin: String,
    pub end: String,
    pub date_diff: String,
    pub duration: String,
    pub login: String,
    pub school_year: String,
    pub location: String,
    pub deal_type: String,
    pub mandatory: String,
    pub pay: String,
    pub pay_period: String,
    pub subject: String,
    pub jury: String,
    pub time_work: String,
    pub nb_hours_week: String,
    pub presence_day: String,
    pub address: String,
    pub city: String,
    pub area_code: String,
    pub holidays: String,
    pub special_cases: String,
    pub status: String,
    pub stage_obligatoire: String,
    pub stage_note: String,
    pub refusal_reason: Option<String>,
    pub last_modification: Option<String>,
    pub date_creation: Option<String>,
    pub country: String,
    pub company_id: String,
    pub company_name: String,
    pub company_sector: String,
    pub company_phone: String,
    pub company_cell: String,
    pub company_email: String,
    pub company_address: String,
    pub company_area_code: String,
    pub company_city: String,
    pub company_workforce: String,
    pub company_country: String,
    pub company_ape: String,
    pub company_siret: String,
    pub master_id: String,
    pub master_lastname: String,
    pub master_firstname: String,
    pub master_activity: String,
    pub master_phone: String,
    pub master_cell: String,
    pub master_email: String,
    pub signatory_id: String,
    pub signatory_lastname: String,
    pub signatory_firstname: String,
    pub signatory_activity: String,
    pub signatory_phone: String,
    pub signatory_cell: String,
    pub signatory_email: String,
    pub trainee_fullname: String,
    pub trainee_address: String,
    pub trainee_area_code: String,
    pub trainee_city: String,
    pub trainee_email: String,
    pub trainee_country: String,
    pub desc_company: Option<String>,
    pub desc_work_placement: Option<String>,
    pub desc_personal_feeling: Option<String>,
    pub id_validated: Option<String>,
    pub login_validated: Option<String>,
    pub id_confirmed: Option<String>,
    pub login_confirmed: Option<String>,
    pub id_selected: Option<String>,
    pub login_selected: Option<String>,
    pub id_refused: Option<String>,
    pub login_refused: Option<String>,
    pub id_tutor: Option<String>,
    pub login_tutor: Option<String>,
    pub status_student: String,
    pub status_tutor: String,
    pub ws_id: Option<String>,
    pub status_signatory: String,
    pub status_master: String,
    pub tutor_name: String,
    pub hash: String,
    pub over_notation: String,
    pub promo: String,
    pub nb_stage_current: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InternshipOutput {
    pub items: Vec<Internship>,
}

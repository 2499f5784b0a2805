use intra_lib::model::{User, UserFlagsModule};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct GradedModule {
    pub module: String,
    pub grade: u8,
    pub credits: u32,
}

#[derive(Debug, Serialize)]
pub struct GpaReport {
    /// `None` when no graded module carries credits.
    pub gpa: Option<f64>,
    pub credits: u32,
    /// As computed by the intranet.
    pub intranet_gpa: Option<String>,
    pub intranet_credits: u32,
    pub modules: Vec<GradedModule>,
}

// `Acquis` and `-` are not graded, neither is anything unknown or missing.
fn grade_points(grade: &str) -> Option<u8> {
    match grade {
        "A" => Some(4),
        "B" => Some(3),
        "C" => Some(2),
        "D" => Some(1),
        "E" | "Echec" => Some(0),
        _ => None,
    }
}

pub fn compute(user: &User, modules: &[UserFlagsModule]) -> GpaReport {
    let modules: Vec<_> = modules
        .iter()
        .filter(|module| module.credits > 0)
        .filter_map(|module| {
            Some(GradedModule {
                module: module.codemodule.clone(),
                grade: grade_points(module.grade.as_deref()?)?,
                credits: module.credits,
            })
        })
        .collect();

    let credits = modules.iter().map(|module| module.credits).sum::<u32>();
    let points = modules
        .iter()
        .map(|module| module.credits * u32::from(module.grade))
        .sum::<u32>();
    let gpa = (credits > 0).then(|| (f64::from(points) / f64::from(credits) * 100.0).round() / 100.0);

    GpaReport {
        gpa,
        credits,
        intranet_gpa: user.gpa.first().map(|gpa| gpa.gpa.clone()),
        intranet_credits: user.credits,
        modules,
    }
}

use std::time::Duration;

use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    auth::{autologin_path, CredentialProvider, Credentials, CREDENTIAL_COOKIE},
    builder::{activity_path, escape_path, event_path, module_path, project_path},
    ids::{ActivityId, EventId, ModuleId},
    model::{
        Activity, ActivityAppointment, CourseFilterOutput, Dashboard, EventRegisteredUser,
        InternshipOutput, Module, ModuleBoardActivity, ModuleRegisteredUser, PlanningElement,
        Project, ProjectFile, ProjectRegisteredGroup, User, UserAbsencesOutput, UserDetails,
        UserEducationalUpdate, UserPartnersOutput,
    },
    parser::{parse_educational_history, ParseError},
    path::ResourceKind,
    query::{sanitize_login, CourseFilters, DateRange},
    resolver::{resolve, ResolveError, ResolvedPath},
    session::{looks_like_intra_error, Form, Session, SessionError, DEFAULT_HOST},
    transport::{ByteStream, Transport, DEFAULT_TIMEOUT},
};

const TIMEZONE_COOKIE: &str = "tz";
const INTERNSHIPS_PATH: &str = "/stage/load?offset=0&number=120";

/// Everything needed to build an [`Intra`] client.
#[derive(Debug)]
pub struct IntraConfig {
    pub credentials: Credentials,
    /// Sent as the `tz` cookie, e.g. `Europe/Paris`.
    pub timezone: Option<String>,
    /// Raise service error envelopes instead of returning them.
    pub throw_intra_error: bool,
    /// Scheme and host, without a trailing slash.
    pub host: String,
    /// Only read by [`connect`](crate::connect), a transport built by hand carries its
    /// own timeout.
    pub timeout: Duration,
}

impl IntraConfig {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            timezone: None,
            throw_intra_error: true,
            host: DEFAULT_HOST.to_owned(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn autologin(autologin: impl Into<String>) -> Self {
        Self::new(Credentials::autologin(autologin))
    }

    pub fn timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }

    pub fn throw_intra_error(mut self, throw_intra_error: bool) -> Self {
        self.throw_intra_error = throw_intra_error;
        self
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// A typed client of the intranet.
///
/// Methods taking identifier bundles build their path, `*_by_url` methods resolve any
/// intranet URL to the expected resource first. Payloads are returned as sent.
pub struct Intra<T> {
    session: Session<T>,
    provider: Option<Box<dyn CredentialProvider>>,
}

impl<T> Intra<T> {
    pub fn new(transport: T, config: IntraConfig) -> Result<Self, IntraError> {
        let host = config.host.trim_end_matches('/');
        let (endpoint, provider) = match config.credentials {
            Credentials::Autologin(autologin) => {
                (format!("{host}{}", autologin_path(&autologin)?), None)
            }
            Credentials::Provider(provider) => (host.to_owned(), Some(provider)),
        };

        let mut session = Session::new(transport, endpoint);
        if let Some(timezone) = &config.timezone {
            session.set_cookie(TIMEZONE_COOKIE, timezone);
        }
        if !config.throw_intra_error {
            session.disable_throw_intra_error();
        }

        Ok(Self { session, provider })
    }

    pub fn session(&self) -> &Session<T> {
        &self.session
    }

    pub fn set_timezone(&mut self, timezone: &str) {
        self.session.set_cookie(TIMEZONE_COOKIE, timezone);
    }

    pub fn set_cookie(&mut self, key: &str, value: &str) {
        self.session.set_cookie(key, value);
    }

    pub fn disable_throw_intra_error(&mut self) {
        self.session.disable_throw_intra_error();
    }

    /// Resolves `url` into a canonical path of one of the `accepted` kinds.
    pub fn resolve(&self, url: &str, accepted: &[ResourceKind]) -> Result<ResolvedPath, ResolveError> {
        resolve(url, accepted)
    }
}

impl<T> Intra<T>
where
    T: Transport,
{
    /// Asks the credential provider for a new credential and sends it from then on.
    ///
    /// Returns `false` without doing anything for autologin clients.
    pub async fn refresh_credentials(&mut self) -> Result<bool, IntraError> {
        let Some(provider) = &self.provider else {
            return Ok(false);
        };
        let credential = provider.refresh().await?;
        self.session.set_cookie(CREDENTIAL_COOKIE, &credential);
        info!("refreshed credentials");
        Ok(true)
    }

    pub async fn dashboard(&self) -> Result<Dashboard, IntraError> {
        self.json("/").await
    }

    /// The user behind `login`, or the current user.
    pub async fn user(&self, login: Option<&str>) -> Result<User, IntraError> {
        let path = match login.map(sanitize_login).filter(|login| !login.is_empty()) {
            Some(login) => user_path(&login, ""),
            None => "/user/".to_owned(),
        };
        self.json(&path).await
    }

    /// Log time per day, as `[timestamp, active, idle, out_active, out_idle, norm]`.
    pub async fn user_netsoul(&self, login: &str) -> Result<Vec<[f64; 6]>, IntraError> {
        self.json(&user_path(&sanitize_login(login), "netsoul")).await
    }

    pub async fn user_partners(&self, login: &str) -> Result<UserPartnersOutput, IntraError> {
        self.json(&user_path(&sanitize_login(login), "binome")).await
    }

    /// Scrapes the educational history off the profile page, it has no JSON form.
    pub async fn user_educational_overview(
        &self,
        login: &str,
    ) -> Result<Vec<UserEducationalUpdate>, IntraError> {
        let html = self
            .session
            .get_html(&user_path(&sanitize_login(login), ""))
            .await?;
        Ok(parse_educational_history(&html)?)
    }

    pub async fn user_absences(&self, login: &str) -> Result<UserAbsencesOutput, IntraError> {
        self.json(&user_path(&sanitize_login(login), "notification/missed/"))
            .await
    }

    pub async fn user_details(&self, login: &str) -> Result<UserDetails, IntraError> {
        self.json(&user_path(&sanitize_login(login), "print/")).await
    }

    /// Planned events, only those of `range` when one is given.
    pub async fn planning(
        &self,
        range: Option<DateRange>,
    ) -> Result<Vec<PlanningElement>, IntraError> {
        let path = match range {
            Some(range) => format!("/planning/load?{}", range.query()),
            None => "/planning/load".to_owned(),
        };
        self.json(&path).await
    }

    pub async fn module_board(&self, range: DateRange) -> Result<Vec<ModuleBoardActivity>, IntraError> {
        self.json(&format!("/module/board/?{}", range.query())).await
    }

    pub async fn filter_courses(
        &self,
        filters: &CourseFilters,
    ) -> Result<CourseFilterOutput, IntraError> {
        self.json(&format!("/course/filter?{}", filters.query())).await
    }

    pub async fn module(&self, id: ModuleId<'_>) -> Result<Module, IntraError> {
        self.json(&format!("{}/", module_path(id))).await
    }

    pub async fn module_by_url(&self, url: &str) -> Result<Module, IntraError> {
        self.json(resolve(url, &[ResourceKind::Module])?.as_str())
            .await
    }

    pub async fn module_registered(
        &self,
        id: ModuleId<'_>,
    ) -> Result<Vec<ModuleRegisteredUser>, IntraError> {
        self.json(&format!("{}/registered", module_path(id))).await
    }

    pub async fn module_registered_by_url(
        &self,
        url: &str,
    ) -> Result<Vec<ModuleRegisteredUser>, IntraError> {
        let module = resolve(url, &[ResourceKind::Module])?;
        self.json(&format!("{module}/registered")).await
    }

    pub async fn activity(&self, id: ActivityId<'_>) -> Result<Activity, IntraError> {
        self.json(&format!("{}/", activity_path(id))).await
    }

    pub async fn activity_by_url(&self, url: &str) -> Result<Activity, IntraError> {
        self.json(resolve(url, &[ResourceKind::Activity])?.as_str())
            .await
    }

    pub async fn activity_appointments(
        &self,
        id: ActivityId<'_>,
    ) -> Result<ActivityAppointment, IntraError> {
        self.json(&format!("{}/rdv/", activity_path(id))).await
    }

    pub async fn activity_appointments_by_url(
        &self,
        url: &str,
    ) -> Result<ActivityAppointment, IntraError> {
        let activity = resolve(url, &[ResourceKind::Activity])?;
        self.json(&format!("{activity}/rdv/")).await
    }

    pub async fn project(&self, id: ActivityId<'_>) -> Result<Project, IntraError> {
        self.json(&project_path(id)).await
    }

    /// Accepts the URL of the project or of anything under it, including its activity.
    pub async fn project_by_url(&self, url: &str) -> Result<Project, IntraError> {
        self.json(resolve(url, &[ResourceKind::Project])?.as_str())
            .await
    }

    pub async fn project_registered(
        &self,
        id: ActivityId<'_>,
    ) -> Result<Vec<ProjectRegisteredGroup>, IntraError> {
        self.json(&format!("{}/registered", project_path(id))).await
    }

    pub async fn project_registered_by_url(
        &self,
        url: &str,
    ) -> Result<Vec<ProjectRegisteredGroup>, IntraError> {
        let project = resolve(url, &[ResourceKind::Project])?;
        self.json(&format!("{project}/registered")).await
    }

    /// Logins of the students not registered to the project.
    pub async fn project_unregistered(&self, id: ActivityId<'_>) -> Result<Vec<String>, IntraError> {
        self.unregistered_at(&project_path(id)).await
    }

    pub async fn project_unregistered_by_url(&self, url: &str) -> Result<Vec<String>, IntraError> {
        let project = resolve(url, &[ResourceKind::Project])?;
        self.unregistered_at(project.as_str()).await
    }

    /// Lists the project files under `path`, relative to the project's file root.
    pub async fn project_files(
        &self,
        id: ActivityId<'_>,
        path: &str,
    ) -> Result<Vec<ProjectFile>, IntraError> {
        self.project_files_by_url(&format!("{}/file/{path}", project_path(id)))
            .await
    }

    /// Lists a project directory, or describes a single file.
    ///
    /// The directory form (with a trailing slash) is tried first. Should the intranet
    /// answer with a service error, even one passed through, the bare form is tried.
    pub async fn project_files_by_url(&self, url: &str) -> Result<Vec<ProjectFile>, IntraError> {
        let resolved = resolve(url, &[ResourceKind::ProjectFile])?;
        let path = resolved.as_str().trim_end_matches('/');

        let payload = match self.session.get_json(&format!("{path}/")).await {
            Ok(payload) if !looks_like_intra_error(&payload) => payload,
            Ok(_) | Err(SessionError::Intra { .. } | SessionError::InvalidResponse(_)) => {
                debug!(path, "not a directory, retrying as a file");
                self.session.get_json(path).await?
            }
            Err(err) => return Err(err.into()),
        };
        decode(payload)
    }

    /// Streams any intranet file, the URL is not classified.
    pub async fn download_file(&self, url: &str) -> Result<ByteStream, IntraError> {
        let path = resolve(url, &[ResourceKind::All])?;
        Ok(self.session.get_stream(path.as_str()).await?)
    }

    pub async fn event_registered(
        &self,
        id: EventId<'_>,
    ) -> Result<Vec<EventRegisteredUser>, IntraError> {
        self.json(&format!("{}/registered", event_path(id))).await
    }

    pub async fn event_registered_by_url(
        &self,
        url: &str,
    ) -> Result<Vec<EventRegisteredUser>, IntraError> {
        let event = resolve(url, &[ResourceKind::Event])?;
        self.json(&format!("{event}/registered")).await
    }

    pub async fn internships(&self) -> Result<InternshipOutput, IntraError> {
        self.json(INTERNSHIPS_PATH).await
    }

    /// The current user's autologin link.
    pub async fn autologin(&self) -> Result<String, IntraError> {
        #[derive(Deserialize)]
        struct Autolog {
            autologin: String,
        }

        let output: Autolog = self.json("/admin/autolog").await?;
        Ok(output.autologin)
    }

    pub async fn register_event_by_url(&self, url: &str) -> Result<Value, IntraError> {
        let event = resolve(url, &[ResourceKind::Event])?;
        self.post(&format!("{event}/register"), None).await
    }

    pub async fn unregister_event_by_url(&self, url: &str) -> Result<Value, IntraError> {
        let event = resolve(url, &[ResourceKind::Event])?;
        self.post(&format!("{event}/unregister"), None).await
    }

    /// Registers the current user alone.
    pub async fn register_project_by_url(&self, url: &str) -> Result<Value, IntraError> {
        let project = resolve(url, &[ResourceKind::Project])?;
        self.post(&format!("{project}/register"), None).await
    }

    /// Creates a group named `title` and invites `members`, by login.
    pub async fn register_project_group_by_url<S: AsRef<str>>(
        &self,
        url: &str,
        title: &str,
        members: &[S],
    ) -> Result<Value, IntraError> {
        let project = resolve(url, &[ResourceKind::Project])?;
        let form = Form::new()
            .fields("members", members.iter().map(|member| member.as_ref()))
            .field("title", title)
            .field("force", false);
        self.post(&format!("{project}/register"), Some(form)).await
    }

    /// Destroys `group_code`, or the current user's group of the project.
    pub async fn destroy_project_group_by_url(
        &self,
        url: &str,
        group_code: Option<&str>,
    ) -> Result<Value, IntraError> {
        let project = resolve(url, &[ResourceKind::Project])?;
        let group_code = match group_code {
            Some(code) => code.to_owned(),
            None => self
                .json::<Project>(project.as_str())
                .await?
                .user_project_code
                .filter(|code| !code.is_empty())
                .ok_or(IntraError::NoGroup)?,
        };

        let form = Form::new().field("code", group_code);
        self.post(&format!("{project}/destroygroup"), Some(form))
            .await
    }

    /// Accepts an invitation on behalf of `login`, the current user by default.
    pub async fn join_group_by_url(&self, url: &str, login: Option<&str>) -> Result<Value, IntraError> {
        let project = resolve(url, &[ResourceKind::Project])?;
        let form = Form::new().field("login", self.login_or_current(login).await?);
        self.post(&format!("{project}/confirmjoingroup"), Some(form))
            .await
    }

    pub async fn decline_join_group_by_url(&self, url: &str) -> Result<Value, IntraError> {
        let project = resolve(url, &[ResourceKind::Project])?;
        self.post(&format!("{project}/declinejoingroup"), None).await
    }

    pub async fn leave_group_by_url(&self, url: &str, login: Option<&str>) -> Result<Value, IntraError> {
        let project = resolve(url, &[ResourceKind::Project])?;
        let form = Form::new().field("login", self.login_or_current(login).await?);
        self.post(&format!("{project}/confirmleavegroup"), Some(form))
            .await
    }

    async fn json<D: DeserializeOwned>(&self, path: &str) -> Result<D, IntraError> {
        decode(self.session.get_json(path).await?)
    }

    async fn post(&self, path: &str, form: Option<Form>) -> Result<Value, IntraError> {
        Ok(self.session.post(path, form).await?)
    }

    async fn unregistered_at(&self, project: &str) -> Result<Vec<String>, IntraError> {
        let text = self
            .session
            .get_text(&format!("{project}/exportunregistered"))
            .await?;
        Ok(text.lines().map(str::to_owned).collect())
    }

    async fn login_or_current(&self, login: Option<&str>) -> Result<String, IntraError> {
        match login {
            Some(login) => Ok(login.to_owned()),
            None => Ok(self.user(None).await?.login),
        }
    }
}

fn decode<D: DeserializeOwned>(payload: Value) -> Result<D, IntraError> {
    serde_json::from_value(payload).map_err(IntraError::Decode)
}

/// `/user/<login>/<rest>`, the login escaped as a single segment.
fn user_path(login: &str, rest: &str) -> String {
    format!("{}/{rest}", escape_path(&["user", login]))
}

/// Represents errors that can occur using the intranet client.
#[derive(Debug, Error)]
pub enum IntraError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The payload does not have the shape of the expected record.
    #[error("could not decode the intranet response")]
    Decode(#[source] serde_json::Error),
    /// The current user has no group to act upon.
    #[error("user does not have a group")]
    NoGroup,
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use hyper::Method;

    use super::*;
    use crate::transport::mock::MockTransport;

    const AUTOLOGIN: &str = "https://intra.epitech.eu/auth-abc123";
    const ENDPOINT: &str = "https://intra.epitech.eu/auth-abc123";
    const PROJECT: &str = "/module/2021/B-PRO-300/RUN-3-1/acti-458897/project";

    fn intra(transport: MockTransport) -> Intra<MockTransport> {
        Intra::new(transport, IntraConfig::autologin(AUTOLOGIN)).unwrap()
    }

    fn uris(intra: &Intra<MockTransport>) -> Vec<String> {
        intra
            .session()
            .transport()
            .requests()
            .into_iter()
            .map(|request| request.uri)
            .collect()
    }

    #[test]
    fn rejects_invalid_autologin() {
        let result = Intra::new(
            MockTransport::default(),
            IntraConfig::autologin("https://intra.epitech.eu/module"),
        );
        assert!(matches!(
            result,
            Err(IntraError::Session(SessionError::InvalidAutologin(_)))
        ));
    }

    #[test]
    fn config_sets_endpoint_and_cookies() {
        let intra = Intra::new(
            MockTransport::default(),
            IntraConfig::autologin("auth-abc123")
                .host("http://localhost:1234/")
                .timezone("Europe/Paris")
                .throw_intra_error(false),
        )
        .unwrap();
        assert_eq!(intra.session().endpoint(), "http://localhost:1234/auth-abc123");
        assert_eq!(intra.session().cookies().get("tz"), Some("Europe/Paris"));
        assert!(!intra.session().throws_intra_error());
    }

    #[tokio::test]
    async fn user_paths_are_sanitized() {
        let intra = intra(
            MockTransport::default()
                .respond(200, r#"{"login":"me@epitech.eu"}"#)
                .respond(200, r#"{"login":"jane.doe@epitech.eu"}"#)
                .respond(200, r#"{"recents":[],"others":[]}"#),
        );
        assert_eq!(intra.user(None).await.unwrap().login, "me@epitech.eu");
        intra.user(Some("jane.doe@epitech.eu/../#")).await.unwrap();
        intra.user_absences("jane.doe@epitech.eu").await.unwrap();

        assert_eq!(
            uris(&intra),
            [
                format!("{ENDPOINT}/user/?format=json"),
                format!("{ENDPOINT}/user/jane.doe%40epitech.eu../?format=json"),
                format!("{ENDPOINT}/user/jane.doe%40epitech.eu/notification/missed/?format=json"),
            ]
        );
    }

    #[tokio::test]
    async fn planning_and_board_queries() {
        let intra = intra(
            MockTransport::default()
                .respond(200, "[]")
                .respond(200, "[]")
                .respond(200, r#"{"preload":[],"items":[]}"#),
        );
        let range = DateRange::new(
            NaiveDate::from_ymd_opt(2022, 1, 3).unwrap(),
            NaiveDate::from_ymd_opt(2022, 1, 9).unwrap(),
        );
        intra.planning(Some(range)).await.unwrap();
        intra.module_board(range).await.unwrap();
        intra
            .filter_courses(&CourseFilters::new().location("FR/RUN"))
            .await
            .unwrap();

        assert_eq!(
            uris(&intra),
            [
                format!("{ENDPOINT}/planning/load?start=2022-1-3&end=2022-1-9&format=json"),
                format!("{ENDPOINT}/module/board/?start=2022-1-3&end=2022-1-9&format=json"),
                format!("{ENDPOINT}/course/filter?preload=0&location[]=FR%2FRUN&format=json"),
            ]
        );
    }

    #[tokio::test]
    async fn identifiers_and_urls_reach_the_same_resources() {
        let intra = intra(
            MockTransport::default()
                .respond(200, r#"{"codemodule":"B-PRO-300"}"#)
                .respond(200, r#"{"codemodule":"B-PRO-300"}"#)
                .respond(200, r#"{"codeacti":"acti-458897"}"#)
                .respond(200, r#"{"codeacti":"acti-458897"}"#),
        );
        let module = ModuleId::new(2021, "B-PRO-300", "RUN-3-1");

        intra.module(module).await.unwrap();
        intra
            .module_by_url("https://intra.epitech.eu/module/2021/B-PRO-300/RUN-3-1/#!/all")
            .await
            .unwrap();
        intra.project(module.activity("acti-458897")).await.unwrap();
        let project = intra
            .project_by_url("/module/2021/B-PRO-300/RUN-3-1/acti-458897/")
            .await
            .unwrap();
        assert_eq!(project.codeacti, "acti-458897");

        assert_eq!(
            uris(&intra),
            [
                format!("{ENDPOINT}/module/2021/B-PRO-300/RUN-3-1/?format=json"),
                format!("{ENDPOINT}/module/2021/B-PRO-300/RUN-3-1?format=json"),
                format!("{ENDPOINT}{PROJECT}?format=json"),
                format!("{ENDPOINT}{PROJECT}?format=json"),
            ]
        );
    }

    #[tokio::test]
    async fn by_url_rejects_wrong_resources() {
        let intra = intra(MockTransport::default());
        let err = intra.activity_by_url("/module/2021/B-PRO-300").await.unwrap_err();
        assert!(matches!(
            err,
            IntraError::Resolve(ResolveError::UnexpectedPath { .. })
        ));
        assert!(uris(&intra).is_empty());
    }

    #[tokio::test]
    async fn project_files_fall_back_to_the_bare_path() {
        let intra = intra(
            MockTransport::default()
                .respond(200, r#"{"error":"Not a directory"}"#)
                .respond(200, r#"[{"slug":"report.pdf","fullpath":"/report.pdf"}]"#),
        );
        let files = intra
            .project_files_by_url(&format!("{PROJECT}/file/report.pdf"))
            .await
            .unwrap();
        assert_eq!(files[0].slug, "report.pdf");
        assert_eq!(
            uris(&intra),
            [
                format!("{ENDPOINT}{PROJECT}/file/report.pdf/?format=json"),
                format!("{ENDPOINT}{PROJECT}/file/report.pdf?format=json"),
            ]
        );
    }

    #[tokio::test]
    async fn project_files_fall_back_without_error_detection() {
        let mut intra = intra(
            MockTransport::default()
                .respond(200, r#"{"error":"Not a directory"}"#)
                .respond(200, "[]"),
        );
        intra.disable_throw_intra_error();
        let files = intra
            .project_files(
                ModuleId::new(2021, "B-PRO-300", "RUN-3-1").activity("acti-458897"),
                "",
            )
            .await
            .unwrap();
        assert!(files.is_empty());
        assert_eq!(
            uris(&intra),
            [
                format!("{ENDPOINT}{PROJECT}/file/?format=json"),
                format!("{ENDPOINT}{PROJECT}/file?format=json"),
            ]
        );
    }

    #[tokio::test]
    async fn unregistered_is_split_by_line() {
        let intra = intra(MockTransport::default().respond(200, "a@epitech.eu\nb@epitech.eu\n"));
        let logins = intra.project_unregistered_by_url(PROJECT).await.unwrap();
        assert_eq!(logins, ["a@epitech.eu", "b@epitech.eu"]);
        assert_eq!(uris(&intra), [format!("{ENDPOINT}{PROJECT}/exportunregistered")]);
    }

    #[tokio::test]
    async fn group_registration_form() {
        let intra = intra(MockTransport::default().respond(200, "{}"));
        intra
            .register_project_group_by_url(PROJECT, "zappy", &["a@epitech.eu", "b@epitech.eu"])
            .await
            .unwrap();

        let request = &intra.session().transport().requests()[0];
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.uri, format!("{ENDPOINT}{PROJECT}/register?format=json"));
        assert_eq!(
            request.body.as_deref(),
            Some("members=a%40epitech.eu&members=b%40epitech.eu&title=zappy&force=false")
        );
    }

    #[tokio::test]
    async fn destroying_a_group_looks_up_its_code() {
        let intra = intra(
            MockTransport::default()
                .respond(200, r#"{"user_project_code":"group-42"}"#)
                .respond(200, "{}"),
        );
        intra.destroy_project_group_by_url(PROJECT, None).await.unwrap();

        let requests = intra.session().transport().requests();
        assert_eq!(requests[0].method, Method::GET);
        assert_eq!(requests[1].uri, format!("{ENDPOINT}{PROJECT}/destroygroup?format=json"));
        assert_eq!(requests[1].body.as_deref(), Some("code=group-42"));
    }

    #[tokio::test]
    async fn destroying_without_a_group_fails() {
        let intra = intra(MockTransport::default().respond(200, r#"{"user_project_code":null}"#));
        let err = intra
            .destroy_project_group_by_url(PROJECT, None)
            .await
            .unwrap_err();
        assert!(matches!(err, IntraError::NoGroup));
        assert_eq!(intra.session().transport().requests().len(), 1);
    }

    #[tokio::test]
    async fn joining_defaults_to_the_current_user() {
        let intra = intra(
            MockTransport::default()
                .respond(200, r#"{"login":"me@epitech.eu"}"#)
                .respond(200, "{}")
                .respond(200, "{}"),
        );
        intra.join_group_by_url(PROJECT, None).await.unwrap();
        intra
            .leave_group_by_url(PROJECT, Some("jane.doe@epitech.eu"))
            .await
            .unwrap();

        let requests = intra.session().transport().requests();
        assert_eq!(requests[1].uri, format!("{ENDPOINT}{PROJECT}/confirmjoingroup?format=json"));
        assert_eq!(requests[1].body.as_deref(), Some("login=me%40epitech.eu"));
        assert_eq!(requests[2].uri, format!("{ENDPOINT}{PROJECT}/confirmleavegroup?format=json"));
        assert_eq!(requests[2].body.as_deref(), Some("login=jane.doe%40epitech.eu"));
    }

    #[tokio::test]
    async fn event_registration() {
        let event = "/module/2021/B-PRO-300/RUN-3-1/acti-458897/event-1234";
        let intra = intra(MockTransport::default().respond(200, "{}").respond(200, "{}"));
        intra
            .register_event_by_url(&format!("{event}/registered"))
            .await
            .unwrap();
        intra.unregister_event_by_url(event).await.unwrap();
        assert_eq!(
            uris(&intra),
            [
                format!("{ENDPOINT}{event}/register?format=json"),
                format!("{ENDPOINT}{event}/unregister?format=json"),
            ]
        );
    }

    #[tokio::test]
    async fn service_errors_surface_from_writes() {
        let intra = intra(
            MockTransport::default().respond(200, r#"{"message":"Registration closed","error":"403"}"#),
        );
        let err = intra.register_project_by_url(PROJECT).await.unwrap_err();
        assert!(matches!(
            err,
            IntraError::Session(SessionError::Intra { message: Some(message), .. })
                if message == "Registration closed"
        ));
    }

    #[tokio::test]
    async fn autologin_is_read_from_its_field() {
        let intra = intra(
            MockTransport::default()
                .respond(200, r#"{"autologin":"https://intra.epitech.eu/auth-def456"}"#),
        );
        assert_eq!(
            intra.autologin().await.unwrap(),
            "https://intra.epitech.eu/auth-def456"
        );
        assert_eq!(uris(&intra), [format!("{ENDPOINT}/admin/autolog?format=json")]);
    }

    struct StaticProvider;

    #[async_trait::async_trait]
    impl CredentialProvider for StaticProvider {
        async fn refresh(&self) -> Result<String, SessionError> {
            Ok("fresh".to_owned())
        }
    }

    #[tokio::test]
    async fn providers_set_the_credential_cookie() {
        let mut intra = Intra::new(
            MockTransport::default().respond(200, "{}"),
            IntraConfig::new(Credentials::provider(StaticProvider)),
        )
        .unwrap();
        assert_eq!(intra.session().endpoint(), DEFAULT_HOST);
        assert!(intra.refresh_credentials().await.unwrap());
        intra.dashboard().await.unwrap();

        let request = &intra.session().transport().requests()[0];
        assert_eq!(request.uri, format!("{DEFAULT_HOST}/?format=json"));
        assert_eq!(request.headers["cookie"], "user=fresh");
    }

    #[tokio::test]
    async fn autologin_clients_do_not_refresh() {
        let mut intra = intra(MockTransport::default());
        assert!(!intra.refresh_credentials().await.unwrap());
    }
}

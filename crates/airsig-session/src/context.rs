//! The application context: one isolated instance of the whole app state.

use crate::navigation::{self, Navigation, NavigationContext, PageEffect};
use crate::{
    AuthResult, AuthSimulator, CameraLease, Capabilities, ContextSettings, DashboardSnapshot,
    EnrollmentStage, EnrollmentTracker, SaveOutcome, SessionManager, UserDirectory,
};

use airsig_core::{Account, AirsigError, AirsigResult, Page, Session, Severity, SignatureSample};
use airsig_store::{KeyValueStore, LoadResult, Persistence};
use log::{debug, info, warn};

/// Owns the directory, session, persistence and per-page state.
///
/// Every operation that fails reports the error through the notifier and
/// returns it. Every mutation is written through to the store; a failed
/// write is reported as a warning and the in-memory state is kept.
#[derive(Debug)]
pub struct AppContext {
    directory: UserDirectory,
    sessions: SessionManager,
    persistence: Persistence,
    capabilities: Capabilities,
    settings: ContextSettings,
    simulator: AuthSimulator,
    page: Page,
    enrollment: Option<EnrollmentTracker>,
    auth_camera: Option<CameraLease>,
    last_auth_result: Option<AuthResult>,
    dashboard: Option<DashboardSnapshot>,
}

impl AppContext {
    pub fn initialize(
        store: Box<dyn KeyValueStore>,
        capabilities: Capabilities,
        settings: ContextSettings,
    ) -> Self {
        let persistence = Persistence::new(store);
        let LoadResult { state, load_error } = persistence.load();

        let directory = UserDirectory::from_pairs(state.users.clone());
        let sessions = SessionManager::restore(&state, &directory);
        let simulator = AuthSimulator::new(
            settings.attempt_delay,
            capabilities.random.clone(),
            capabilities.clock.clone(),
        );

        let context = Self {
            directory,
            sessions,
            persistence,
            capabilities,
            settings,
            simulator,
            page: Page::Home,
            enrollment: None,
            auth_camera: None,
            last_auth_result: None,
            dashboard: None,
        };

        if let Some(error) = load_error {
            warn!("Starting with empty state: {error}");
            context.notify(
                "Saved data could not be loaded. Starting fresh.",
                Severity::Warning,
            );
        }

        info!(
            "Context initialized: {} account(s), session {}",
            context.directory.len(),
            context.sessions.current_username().unwrap_or("none")
        );
        context
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn session(&self) -> &Session {
        self.sessions.session()
    }

    pub fn is_authenticated(&self) -> bool {
        self.sessions.is_authenticated()
    }

    pub fn current_account(&self) -> Option<&Account> {
        self.sessions.current(&self.directory)
    }

    pub fn directory(&self) -> &UserDirectory {
        &self.directory
    }

    /// Look up an account by username or email.
    pub fn find(&self, identifier: &str) -> Option<&Account> {
        self.directory.find(identifier)
    }

    pub fn enrollment(&self) -> Option<&EnrollmentTracker> {
        self.enrollment.as_ref()
    }

    pub fn enrollment_stage(&self) -> Option<EnrollmentStage> {
        self.enrollment.as_ref().map(EnrollmentTracker::stage)
    }

    pub fn last_auth_result(&self) -> Option<&AuthResult> {
        self.last_auth_result.as_ref()
    }

    pub fn dashboard(&self) -> Option<&DashboardSnapshot> {
        self.dashboard.as_ref()
    }

    /// Whether any page currently holds the camera.
    pub fn holds_camera(&self) -> bool {
        self.auth_camera.is_some() || self.enrollment.as_ref().is_some_and(|t| t.has_camera())
    }

    // ---------------------------------------------------------------------- //

    /// Create an account and make it the active session.
    pub fn register(
        &mut self,
        username: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> AirsigResult<Account> {
        let now = self.capabilities.clock.now();
        let result = self
            .directory
            .register(username, email, password, confirm_password, now)
            .cloned();
        let account = self.surface(result)?;

        self.reset_account_views();
        self.sessions.begin(&account);
        self.persist();
        self.notify(
            &format!("Welcome, {}! Registration successful.", account.username),
            Severity::Success,
        );
        Ok(account)
    }

    /// Password login by username or email.
    pub fn login(&mut self, identifier: &str, password: &str) -> AirsigResult<Account> {
        let now = self.capabilities.clock.now();
        let result = self.directory.login(identifier, password, now).cloned();

        match result {
            Ok(account) => {
                self.reset_account_views();
                self.sessions.begin(&account);
                self.persist();
                self.notify(
                    &format!("Welcome back, {}!", account.username),
                    Severity::Success,
                );
                Ok(account)
            }
            Err(e) => {
                // A wrong password still appends to the account's history
                if matches!(e, AirsigError::Auth { .. }) {
                    self.persist();
                }
                self.surface(Err(e))
            }
        }
    }

    /// End the session and return home. Returns the username that was active.
    pub fn logout(&mut self) -> Option<String> {
        self.reset_account_views();
        let previous = self.sessions.end();
        self.page = Page::Home;
        self.persist();

        if let Some(username) = &previous {
            info!("Logged out '{username}'");
            self.notify("You have been logged out", Severity::Info);
        }
        previous
    }

    pub fn navigate(&mut self, requested: Page) -> Navigation {
        let ctx = NavigationContext::new(self.page, self.current_account());
        let navigation = navigation::resolve(&ctx, requested);

        for effect in &navigation.effects {
            self.apply_effect(*effect);
        }
        self.page = navigation.page;

        if let Some(reason) = redirect_reason(requested, navigation.page) {
            self.notify(reason, Severity::Info);
        }
        debug!("Now on {}", self.page);
        navigation
    }

    // ---------------------------------------------------------------------- //

    pub async fn start_camera(&mut self) -> AirsigResult<()> {
        let camera = self.capabilities.camera.clone();
        let result = match self.enrollment.as_mut() {
            Some(tracker) => tracker.start_camera(camera).await,
            None => Err(enrollment_not_open()),
        };
        self.surface(result)?;

        self.notify("Camera ready. Record your air signature.", Severity::Info);
        Ok(())
    }

    pub async fn start_recording(&mut self) -> AirsigResult<()> {
        let clock = self.capabilities.clock.clone();
        let result = match self.enrollment.as_mut() {
            Some(tracker) => tracker.start_recording(clock.as_ref()).await,
            None => Err(enrollment_not_open()),
        };
        self.surface(result)
    }

    pub async fn stop_recording(&mut self) -> AirsigResult<SignatureSample> {
        let clock = self.capabilities.clock.clone();
        let result = match self.enrollment.as_mut() {
            Some(tracker) => tracker.stop_recording(clock.as_ref()).await,
            None => Err(enrollment_not_open()),
        };
        let sample = self.surface(result)?;

        self.notify(
            "Signature recorded. Save it or record again.",
            Severity::Info,
        );
        Ok(sample)
    }

    pub fn save_recording(&mut self) -> AirsigResult<SaveOutcome> {
        let username = self.sessions.current_username().map(str::to_owned);

        let result = match (username, self.enrollment.as_mut()) {
            (_, None) => Err(enrollment_not_open()),
            (None, Some(_)) => Err(AirsigError::precondition("Log in to enroll signatures")),
            (Some(username), Some(tracker)) => match self.directory.get_mut(&username) {
                Some(account) => tracker.save_recording(account),
                None => Err(AirsigError::precondition("Log in to enroll signatures")),
            },
        };
        let outcome = self.surface(result)?;

        self.persist();
        if outcome.completed {
            self.notify(
                "Enrollment complete! You can now test gesture authentication.",
                Severity::Success,
            );
        } else {
            self.notify(
                &format!("Signature {}/{} saved", outcome.saved, outcome.required),
                Severity::Success,
            );
        }
        Ok(outcome)
    }

    /// Throw away the recorded clip so it can be retaken.
    pub fn discard_recording(&mut self) -> AirsigResult<()> {
        let result = match self.enrollment.as_mut() {
            Some(tracker) => tracker.discard_recording(),
            None => Err(enrollment_not_open()),
        };
        self.surface(result)
    }

    /// Run one simulated gesture authentication from the auth-test page.
    ///
    /// The camera is acquired on the first attempt and held until the page
    /// is left.
    pub async fn authenticate(&mut self) -> AirsigResult<AuthResult> {
        let username = self.sessions.current_username().map(str::to_owned);
        let ready = match &username {
            None => Err(AirsigError::precondition("Log in to test authentication")),
            Some(_) if self.page != Page::AuthTest => Err(AirsigError::precondition(
                "Open the authentication test page first",
            )),
            Some(username) => match self.directory.get(username) {
                Some(account) => AuthSimulator::check_ready(account),
                None => Err(AirsigError::precondition("Log in to test authentication")),
            },
        };
        self.surface(ready)?;

        if self.auth_camera.is_none() {
            let lease = CameraLease::acquire(self.capabilities.camera.clone()).await;
            self.auth_camera = Some(self.surface(lease)?);
        }

        self.notify("Analyzing gesture...", Severity::Info);
        let result = match username.as_deref().and_then(|u| self.directory.get_mut(u)) {
            Some(account) => self.simulator.attempt(account).await,
            None => Err(AirsigError::precondition("Log in to test authentication")),
        };
        let auth = self.surface(result)?;

        self.persist();
        let severity = if auth.success {
            Severity::Success
        } else {
            Severity::Error
        };
        self.notify(&auth.message, severity);
        self.last_auth_result = Some(auth.clone());
        Ok(auth)
    }

    // ---------------------------------------------------------------------- //

    /// Hidden pages give up the camera.
    pub fn on_visibility_change(&mut self, hidden: bool) {
        if hidden {
            debug!("Page hidden, releasing camera");
            self.release_camera();
        }
    }

    pub fn on_unload(&mut self) {
        self.release_camera();
        self.persist();
    }

    /// Release the camera and write a final snapshot.
    pub fn shutdown(mut self) {
        self.on_unload();
        info!("Context shut down");
    }

    // ---------------------------------------------------------------------- //

    fn apply_effect(&mut self, effect: PageEffect) {
        match effect {
            PageEffect::ReleaseCamera => self.release_camera(),
            PageEffect::RefreshDashboard => {
                self.dashboard = self.current_account().map(DashboardSnapshot::from_account);
            }
            PageEffect::ResetEnrollment => {
                self.enrollment = self.current_account().map(EnrollmentTracker::for_account);
            }
            PageEffect::ResetAuthResult => self.last_auth_result = None,
        }
    }

    fn release_camera(&mut self) {
        if let Some(tracker) = self.enrollment.as_mut() {
            tracker.release_camera();
        }
        self.auth_camera = None;
    }

    /// Drop per-page state tied to the previous account.
    fn reset_account_views(&mut self) {
        self.enrollment = None;
        self.auth_camera = None;
        self.last_auth_result = None;
        self.dashboard = None;
    }

    fn persist(&mut self) {
        let current = self.sessions.current(&self.directory);
        let result = self
            .persistence
            .save_users(self.directory.accounts())
            .and_then(|()| self.persistence.save_session(current));

        if let Err(e) = result {
            warn!("Failed to persist state: {e}");
            let error = AirsigError::from(e);
            self.notify(&error.user_message(), Severity::Warning);
        }
    }

    fn surface<T>(&self, result: AirsigResult<T>) -> AirsigResult<T> {
        if let Err(e) = &result {
            warn!("{} {e}", e.error_code());
            self.notify(&e.user_message(), Severity::Error);
        }
        result
    }

    fn notify(&self, message: &str, severity: Severity) {
        let duration = match severity {
            Severity::Error => self.settings.error_notify_duration,
            _ => self.settings.notify_duration,
        };
        self.capabilities.notifier.show(message, severity, duration);
    }
}

fn enrollment_not_open() -> AirsigError {
    AirsigError::precondition("Open the enrollment page first")
}

fn redirect_reason(requested: Page, shown: Page) -> Option<&'static str> {
    match (requested, shown) {
        (Page::Dashboard | Page::Enrollment | Page::AuthTest, Page::Login) => {
            Some("Please log in to continue")
        }
        (Page::AuthTest, Page::Enrollment) => {
            Some("Complete enrollment before testing authentication")
        }
        _ => None,
    }
}

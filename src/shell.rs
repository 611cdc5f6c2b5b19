//! Session shell: the login screen, the dashboard screen, and the transitions
//! between them. The current screen is the `ShellState` value owned here.

use crate::dashboard::{Action, Dashboard, Submission};
use crate::db::{Database, DeleteOutcome};
use crate::error::StockroomError;
use crate::service::CredentialVerifier;
use crate::types::{ResourceForm, Role, Session};
use crate::ui::{Console, Notice, render};
use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::{info, warn};

const QUIT: &str = "quit";

pub enum ShellState {
    LoggedOut,
    LoggedIn(Box<Dashboard>),
}

enum Turn {
    Stay,
    Logout,
    Quit,
}

/// Outcome of a multi-field prompt.
enum Answer<T> {
    Given(T),
    Cancelled,
    Closed,
}

pub struct Shell<R, W> {
    console: Console<R, W>,
    db: Database,
    verifier: Box<dyn CredentialVerifier>,
    quiet_request_failures: bool,
    state: ShellState,
}

impl<R, W> Shell<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(
        console: Console<R, W>,
        db: Database,
        verifier: Box<dyn CredentialVerifier>,
        quiet_request_failures: bool,
    ) -> Self {
        Self {
            console,
            db,
            verifier,
            quiet_request_failures,
            state: ShellState::LoggedOut,
        }
    }

    pub fn state(&self) -> &ShellState {
        &self.state
    }

    pub fn dashboard(&self) -> Option<&Dashboard> {
        match &self.state {
            ShellState::LoggedIn(dashboard) => Some(dashboard),
            ShellState::LoggedOut => None,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self.state, ShellState::LoggedIn(_))
    }

    /// `LoggedOut -> LoggedIn` when the credentials check out. Has no effect
    /// while a session is already active.
    pub fn login(&mut self, username: &str, password: &str) -> Option<Role> {
        if self.is_logged_in() {
            return None;
        }
        let Some(role) = self.verifier.verify(username, password) else {
            warn!(username = %username, "login rejected");
            return None;
        };
        info!(username = %username, role = %role, "login succeeded");
        let session = Session::new(username, role);
        let dashboard = Dashboard::new(session, &self.db, self.quiet_request_failures);
        self.state = ShellState::LoggedIn(Box::new(dashboard));
        Some(role)
    }

    /// `LoggedIn -> LoggedOut`, discarding the dashboard.
    pub fn logout(&mut self) -> Option<Session> {
        match std::mem::replace(&mut self.state, ShellState::LoggedOut) {
            ShellState::LoggedIn(dashboard) => {
                info!(username = %dashboard.session().username, "logged out");
                Some(dashboard.session().clone())
            }
            ShellState::LoggedOut => None,
        }
    }

    /// Drive screens until the input closes or the user types `quit`.
    pub async fn run(&mut self) -> Result<(), StockroomError> {
        loop {
            let keep_going = match self.state {
                ShellState::LoggedOut => self.login_screen().await?,
                ShellState::LoggedIn(_) => self.dashboard_screen().await?,
            };
            if !keep_going {
                return Ok(());
            }
        }
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    async fn login_screen(&mut self) -> Result<bool, StockroomError> {
        self.console.write_block("== Login ==").await?;
        let Some(username) = self.console.prompt("Username").await? else {
            return Ok(false);
        };
        if username.trim().eq_ignore_ascii_case(QUIT) {
            return Ok(false);
        }
        let Some(password) = self.console.prompt_secret("Password").await? else {
            return Ok(false);
        };

        if self.login(&username, &password).is_none() {
            self.console
                .notice(&Notice::error("Invalid credentials."))
                .await?;
            return Ok(true);
        }
        if let ShellState::LoggedIn(dashboard) = &mut self.state {
            show_table(&mut self.console, dashboard).await?;
        }
        Ok(true)
    }

    async fn dashboard_screen(&mut self) -> Result<bool, StockroomError> {
        let ShellState::LoggedIn(dashboard) = &mut self.state else {
            return Ok(true);
        };
        match dashboard_turn(&mut self.console, dashboard).await? {
            Turn::Stay => Ok(true),
            Turn::Logout => {
                self.logout();
                Ok(true)
            }
            Turn::Quit => Ok(false),
        }
    }
}

/// Resolve a menu answer: 1-based position or action keyword.
fn pick_action(choice: &str, actions: &[Action]) -> Option<Action> {
    match choice.parse::<usize>() {
        Ok(n) => n.checked_sub(1).and_then(|i| actions.get(i)).copied(),
        Err(_) => Action::from_key(choice),
    }
}

async fn dashboard_turn<R, W>(
    console: &mut Console<R, W>,
    dashboard: &mut Dashboard,
) -> Result<Turn, StockroomError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let actions = dashboard.actions();
    let menu = render::menu(dashboard.title(), &dashboard.session().username, &actions);
    console.write_block(&menu).await?;

    let Some(choice) = console.prompt("Action").await? else {
        return Ok(Turn::Quit);
    };
    let choice = choice.trim();
    if choice.is_empty() {
        return Ok(Turn::Stay);
    }
    if choice.eq_ignore_ascii_case(QUIT) {
        return Ok(Turn::Quit);
    }
    let Some(action) = pick_action(choice, &actions) else {
        console
            .notice(&Notice::error(format!("Unknown action: {choice}")))
            .await?;
        return Ok(Turn::Stay);
    };
    if let Err(e) = dashboard.ensure_allowed(action) {
        console.notice(&Notice::error(e)).await?;
        return Ok(Turn::Stay);
    }

    match action {
        Action::ViewResources => show_table(console, dashboard).await?,
        Action::InsertResource => {
            let form = match insert_form(console).await? {
                Answer::Given(form) => form,
                Answer::Cancelled => return Ok(Turn::Stay),
                Answer::Closed => return Ok(Turn::Quit),
            };
            match dashboard.insert_resource(&form).await {
                Ok(_) => {
                    console.notice(&Notice::info("Resource added.")).await?;
                    show_table(console, dashboard).await?;
                }
                Err(e) => console.notice(&Notice::error(e)).await?,
            }
        }
        Action::DeleteResource => {
            let Some(input) = console.prompt("Resource ID to delete").await? else {
                return Ok(Turn::Quit);
            };
            if input.trim().is_empty() {
                return Ok(Turn::Stay);
            }
            match dashboard.delete_resource(&input).await {
                Ok(outcome) => {
                    let notice = match outcome {
                        DeleteOutcome::Deleted => Notice::info("Deleted."),
                        DeleteOutcome::NotFound => Notice::warning("ID not found."),
                    };
                    console.notice(&notice).await?;
                    show_table(console, dashboard).await?;
                }
                Err(e) => console.notice(&Notice::error(e)).await?,
            }
        }
        Action::ViewRequests => match dashboard.view_requests().await {
            Ok(requests) => console.write_block(&render::request_list(&requests)).await?,
            Err(e) => console.notice(&Notice::error(e)).await?,
        },
        Action::RequestAccess => {
            let notice = match dashboard.request_access().await {
                Ok(Submission::Sent) => Notice::info("Request sent to admin."),
                Ok(Submission::Recorded) => Notice::info("Request recorded."),
                Err(e) => Notice::error(e),
            };
            console.notice(&notice).await?;
        }
        Action::Logout => return Ok(Turn::Logout),
    }
    Ok(Turn::Stay)
}

async fn insert_form<R, W>(console: &mut Console<R, W>) -> Result<Answer<ResourceForm>, StockroomError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut fields: [String; 4] = Default::default();
    for (slot, label) in fields.iter_mut().zip(["Name", "Timeline", "Quantity", "Cost"]) {
        match console.prompt(label).await? {
            Some(value) => *slot = value,
            None => return Ok(Answer::Closed),
        }
    }
    let Some(confirm) = console.prompt("Save resource? (y/n)").await? else {
        return Ok(Answer::Closed);
    };
    if !matches!(confirm.trim().to_ascii_lowercase().as_str(), "y" | "yes") {
        return Ok(Answer::Cancelled);
    }

    let [name, timeline, quantity, cost] = fields;
    Ok(Answer::Given(ResourceForm::new(name, timeline, quantity, cost)))
}

async fn show_table<R, W>(
    console: &mut Console<R, W>,
    dashboard: &mut Dashboard,
) -> Result<(), StockroomError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    match dashboard.refresh().await {
        Ok(rows) => console.write_block(&render::resource_table(rows)).await,
        Err(e) => {
            warn!(error = %e, "resource refresh failed; keeping previous view");
            console.notice(&Notice::error(e)).await
        }
    }
}

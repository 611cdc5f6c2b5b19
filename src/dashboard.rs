//! Role-gated actions over the resource store and the access request log.
//!
//! The dashboard owns the session and the last good table snapshot. Each
//! method is one database round trip; prompting and rendering live in `ui`.

use crate::db::{AccessRequest, AccessRequestLog, Database, DeleteOutcome, Resource, ResourceStore};
use crate::error::StockroomError;
use crate::types::{ResourceForm, Role, Session, parse_resource_id};
use std::fmt;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    ViewResources,
    InsertResource,
    DeleteResource,
    ViewRequests,
    RequestAccess,
    Logout,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::ViewResources,
        Action::InsertResource,
        Action::DeleteResource,
        Action::ViewRequests,
        Action::RequestAccess,
        Action::Logout,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Action::ViewResources => "View Resources",
            Action::InsertResource => "Insert Resource",
            Action::DeleteResource => "Delete Resource",
            Action::ViewRequests => "View Requests",
            Action::RequestAccess => "Request Access",
            Action::Logout => "Logout",
        }
    }

    /// Menu keyword typed at the action prompt.
    pub fn key(self) -> &'static str {
        match self {
            Action::ViewResources => "view",
            Action::InsertResource => "insert",
            Action::DeleteResource => "delete",
            Action::ViewRequests => "requests",
            Action::RequestAccess => "request",
            Action::Logout => "logout",
        }
    }

    pub fn from_key(key: &str) -> Option<Action> {
        let key = key.trim();
        Action::ALL
            .into_iter()
            .find(|a| a.key().eq_ignore_ascii_case(key))
    }

    pub fn allowed_for(self, role: Role) -> bool {
        match self {
            Action::ViewResources | Action::Logout => true,
            Action::InsertResource | Action::DeleteResource | Action::ViewRequests => {
                role.is_admin()
            }
            Action::RequestAccess => !role.is_admin(),
        }
    }

    /// Actions offered to `role`, in menu order.
    pub fn available(role: Role) -> Vec<Action> {
        Action::ALL
            .into_iter()
            .filter(|a| a.allowed_for(role))
            .collect()
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of an access request as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    Sent,
    /// Storage failed but quiet mode reports success anyway.
    Recorded,
}

pub struct Dashboard {
    session: Session,
    resources: ResourceStore,
    requests: AccessRequestLog,
    table: Vec<Resource>,
    quiet_request_failures: bool,
}

impl Dashboard {
    pub fn new(session: Session, db: &Database, quiet_request_failures: bool) -> Self {
        Self {
            session,
            resources: db.resources(),
            requests: db.requests(),
            table: Vec::new(),
            quiet_request_failures,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn role(&self) -> Role {
        self.session.role
    }

    pub fn title(&self) -> &'static str {
        if self.role().is_admin() {
            "Admin Dashboard"
        } else {
            "User Dashboard"
        }
    }

    /// Rows from the last successful refresh.
    pub fn table(&self) -> &[Resource] {
        &self.table
    }

    pub fn actions(&self) -> Vec<Action> {
        Action::available(self.role())
    }

    pub fn ensure_allowed(&self, action: Action) -> Result<(), StockroomError> {
        if action.allowed_for(self.role()) {
            Ok(())
        } else {
            warn!(username = %self.session.username, action = %action, "action refused for role");
            Err(StockroomError::Forbidden(action))
        }
    }

    /// Fetch first, swap after: a failed fetch keeps the previous rows.
    pub async fn refresh(&mut self) -> Result<&[Resource], StockroomError> {
        let rows = self.resources.list_all().await?;
        self.table = rows;
        Ok(&self.table)
    }

    pub async fn insert_resource(&mut self, form: &ResourceForm) -> Result<i64, StockroomError> {
        self.ensure_allowed(Action::InsertResource)?;
        let resource = form.parse()?;
        let id = self.resources.insert(&resource).await?;
        info!(
            username = %self.session.username,
            resource_id = id,
            name = %resource.name,
            "resource inserted"
        );
        Ok(id)
    }

    pub async fn delete_resource(&mut self, id_text: &str) -> Result<DeleteOutcome, StockroomError> {
        self.ensure_allowed(Action::DeleteResource)?;
        let id = parse_resource_id(id_text)?;
        let outcome = self.resources.delete_by_id(id).await?;
        info!(
            username = %self.session.username,
            resource_id = id,
            outcome = ?outcome,
            "resource delete"
        );
        Ok(outcome)
    }

    pub async fn view_requests(&self) -> Result<Vec<AccessRequest>, StockroomError> {
        self.ensure_allowed(Action::ViewRequests)?;
        self.requests.list_requests().await
    }

    pub async fn request_access(&self) -> Result<Submission, StockroomError> {
        self.ensure_allowed(Action::RequestAccess)?;
        match self.requests.submit(&self.session.username).await {
            Ok(()) => {
                info!(username = %self.session.username, "access request submitted");
                Ok(Submission::Sent)
            }
            Err(e) if self.quiet_request_failures => {
                warn!(username = %self.session.username, error = %e, "access request not stored");
                Ok(Submission::Recorded)
            }
            Err(e) => Err(e),
        }
    }
}

//! Page rendering over an embedded minijinja environment.

use crate::comment::domain::Comment;
use crate::identity::domain::{EmailAddress, SessionState};
use crate::task::domain::Task;
use minijinja::{Environment, context};
use serde::Serialize;
use thiserror::Error;

/// Errors raised while rendering pages.
#[derive(Debug, Error)]
pub enum PageError {
    /// Template compilation or rendering failed.
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}

/// Session state as seen by templates.
///
/// The header affordance is a pure function of this value: `loading`
/// renders nothing, `authenticated` renders the greeting and sign-out
/// action, `anonymous` renders the sign-in action.
#[derive(Debug, Serialize)]
pub struct SessionView {
    /// One of `loading`, `authenticated`, or `anonymous`.
    pub status: &'static str,
    /// Display name when authenticated.
    pub name: Option<String>,
}

impl SessionView {
    /// Projects the domain session state for templates.
    #[must_use]
    pub fn from_state(state: &SessionState) -> Self {
        match state {
            SessionState::Loading => Self {
                status: "loading",
                name: None,
            },
            SessionState::Authenticated(session) => Self {
                status: "authenticated",
                name: Some(session.profile().name().as_str().to_owned()),
            },
            SessionState::Anonymous => Self {
                status: "anonymous",
                name: None,
            },
        }
    }
}

/// One task row on the dashboard.
#[derive(Debug, Serialize)]
pub struct TaskView {
    /// Task identifier, used to build action URLs.
    pub id: String,
    /// Pre-escaped HTML fragment of the task text.
    pub body_html: String,
    /// Whether the PÚBLICO badge and share affordance render.
    pub is_public: bool,
}

impl TaskView {
    /// Projects a task for the dashboard list.
    #[must_use]
    pub fn from_task(task: &Task) -> Self {
        Self {
            id: task.id().to_string(),
            body_html: task.body().to_html(),
            is_public: task.is_public(),
        }
    }
}

/// Share confirmation banner on the dashboard.
#[derive(Debug, Serialize)]
pub struct ShareNotice {
    /// Canonical public URL of the shared task.
    pub url: String,
}

/// The single task on the public task page.
///
/// The text renders verbatim here; the line-break marker convention
/// applies to the dashboard list only.
#[derive(Debug, Serialize)]
pub struct PublicTaskView {
    /// Task identifier, used to build the comment form URLs.
    pub id: String,
    /// Raw task text.
    pub text: String,
    /// Creation date formatted for display.
    pub created: String,
}

impl PublicTaskView {
    /// Projects a task for the public page.
    #[must_use]
    pub fn from_task(task: &Task) -> Self {
        Self {
            id: task.id().to_string(),
            text: task.body().as_str().to_owned(),
            created: task.created_at().format("%d/%m/%Y").to_string(),
        }
    }
}

/// One comment on the public task page.
#[derive(Debug, Serialize)]
pub struct CommentView {
    /// Comment identifier, used to build the delete URL.
    pub id: String,
    /// Author display name as captured at comment creation.
    pub name: String,
    /// Raw comment text.
    pub text: String,
    /// Whether the delete affordance renders for the current viewer.
    pub can_delete: bool,
}

impl CommentView {
    /// Projects a comment for the given viewer.
    ///
    /// The delete affordance is only offered to the comment's author.
    #[must_use]
    pub fn from_comment(comment: &Comment, viewer: Option<&EmailAddress>) -> Self {
        Self {
            id: comment.id().to_string(),
            name: comment.author_name().as_str().to_owned(),
            text: comment.body().as_str().to_owned(),
            can_delete: viewer.is_some_and(|email| comment.authored_by(email)),
        }
    }
}

/// Renders the application's pages from embedded templates.
#[derive(Debug)]
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    /// Builds the renderer with all templates loaded.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Template`] if any embedded template fails to
    /// compile.
    pub fn new() -> Result<Self, PageError> {
        let mut env = Environment::new();
        env.add_template("header.html", include_str!("../../templates/header.html"))?;
        env.add_template("home.html", include_str!("../../templates/home.html"))?;
        env.add_template(
            "dashboard.html",
            include_str!("../../templates/dashboard.html"),
        )?;
        env.add_template("task.html", include_str!("../../templates/task.html"))?;
        Ok(Self { env })
    }

    /// Renders the home page.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Template`] when rendering fails.
    pub fn home(&self, session: &SessionState) -> Result<String, PageError> {
        let template = self.env.get_template("home.html")?;
        Ok(template.render(context! {
            session => SessionView::from_state(session),
        })?)
    }

    /// Renders the private dashboard with the owner's task list.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Template`] when rendering fails.
    pub fn dashboard(
        &self,
        session: &SessionState,
        tasks: &[TaskView],
        share_notice: Option<&ShareNotice>,
    ) -> Result<String, PageError> {
        let template = self.env.get_template("dashboard.html")?;
        Ok(template.render(context! {
            session => SessionView::from_state(session),
            tasks => tasks,
            share_notice => share_notice,
        })?)
    }

    /// Renders the public task page with its comment thread.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Template`] when rendering fails.
    pub fn public_task(
        &self,
        session: &SessionState,
        task: &PublicTaskView,
        comments: &[CommentView],
    ) -> Result<String, PageError> {
        let template = self.env.get_template("task.html")?;
        Ok(template.render(context! {
            session => SessionView::from_state(session),
            task => task,
            comments => comments,
        })?)
    }
}

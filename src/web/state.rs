//! Shared application state for the web layer.

use crate::comment::ports::CommentRepository;
use crate::comment::services::CommentThreadService;
use crate::identity::ports::IdentityProvider;
use crate::task::ports::TaskRepository;
use crate::task::services::TaskBoardService;
use crate::web::pages::PageRenderer;
use mockable::DefaultClock;
use std::sync::Arc;

/// Task board service over dynamic ports, as wired by the web layer.
pub type WebTaskService = TaskBoardService<dyn TaskRepository, DefaultClock>;

/// Comment thread service over dynamic ports, as wired by the web layer.
pub type WebCommentService = CommentThreadService<dyn CommentRepository, DefaultClock>;

/// State shared by every request handler.
pub struct AppState {
    identity: Arc<dyn IdentityProvider>,
    tasks: WebTaskService,
    comments: WebCommentService,
    pages: PageRenderer,
}

impl AppState {
    /// Assembles the application state.
    #[must_use]
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        tasks: WebTaskService,
        comments: WebCommentService,
        pages: PageRenderer,
    ) -> Self {
        Self {
            identity,
            tasks,
            comments,
            pages,
        }
    }

    /// Returns the identity provider port.
    #[must_use]
    pub fn identity(&self) -> &dyn IdentityProvider {
        self.identity.as_ref()
    }

    /// Returns the task board service.
    #[must_use]
    pub const fn tasks(&self) -> &WebTaskService {
        &self.tasks
    }

    /// Returns the comment thread service.
    #[must_use]
    pub const fn comments(&self) -> &WebCommentService {
        &self.comments
    }

    /// Returns the page renderer.
    #[must_use]
    pub const fn pages(&self) -> &PageRenderer {
        &self.pages
    }
}

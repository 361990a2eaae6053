//! HTTP routes for the task board's page surface.
//!
//! View policy lives here: entry guards redirect instead of rendering,
//! empty input is a silent no-op, and store failures are logged for the
//! operator but never surfaced to the end user.

use axum::{
    Form, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{
        Html, IntoResponse, Redirect, Response,
        sse::{Event, KeepAlive, Sse},
    },
    routing::{get, post},
};
use futures_util::stream;
use serde::Deserialize;
use std::convert::Infallible;
use std::sync::Arc;
use uuid::Uuid;

use crate::comment::domain::CommentId;
use crate::comment::services::CommentThreadError;
use crate::task::domain::TaskId;
use crate::task::services::TaskBoardError;
use crate::web::pages::{CommentView, PageError, PublicTaskView, ShareNotice, TaskView};
use crate::web::session::{clear_session_cookie, resolve_session, session_cookie, session_token};
use crate::web::state::AppState;

/// Builds the application router over the shared state.
#[must_use]
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(home_page))
        .route("/auth/sign-in", post(sign_in))
        .route("/auth/sign-out", post(sign_out))
        .route("/dashboard", get(dashboard_page))
        .route("/dashboard/feed", get(dashboard_feed))
        .route("/dashboard/tasks", post(create_task))
        .route("/dashboard/tasks/{id}/delete", post(delete_task))
        .route("/dashboard/tasks/{id}/share", get(share_task))
        .route("/task/{id}", get(public_task_page))
        .route("/task/{id}/comments", post(post_comment))
        .route(
            "/task/{id}/comments/{comment_id}/delete",
            post(delete_comment),
        )
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct SignInForm {
    provider: String,
}

#[derive(Debug, Deserialize)]
struct NewTaskForm {
    tarefa: String,
    #[serde(default)]
    public: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CommentForm {
    comment: String,
}

#[derive(Debug, Deserialize)]
struct DashboardQuery {
    shared: Option<String>,
}

fn parse_task_id(raw: &str) -> Option<TaskId> {
    Uuid::parse_str(raw).ok().map(TaskId::from_uuid)
}

fn parse_comment_id(raw: &str) -> Option<CommentId> {
    Uuid::parse_str(raw).ok().map(CommentId::from_uuid)
}

fn render_page(result: Result<String, PageError>) -> Response {
    match result {
        Ok(html) => Html(html).into_response(),
        Err(error) => {
            tracing::error!(%error, "page rendering failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

fn redirect_with_cookie(location: &str, cookie: &str) -> Response {
    let mut response = Redirect::to(location).into_response();
    match HeaderValue::from_str(cookie) {
        Ok(value) => {
            response.headers_mut().insert(header::SET_COOKIE, value);
        }
        Err(error) => tracing::error!(%error, "session cookie value rejected"),
    }
    response
}

async fn home_page(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    let session = resolve_session(state.identity(), &headers).await;
    render_page(state.pages().home(&session))
}

async fn sign_in(
    State(state): State<Arc<AppState>>,
    Form(form): Form<SignInForm>,
) -> Response {
    match state.identity().sign_in(&form.provider).await {
        Ok(signed_in) => {
            tracing::info!(user = %signed_in.session.profile().email(), "user signed in");
            redirect_with_cookie("/dashboard", &session_cookie(&signed_in.token))
        }
        Err(error) => {
            tracing::warn!(%error, "sign-in failed");
            Redirect::to("/").into_response()
        }
    }
}

async fn sign_out(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    if let Some(token) = session_token(&headers) {
        if let Err(error) = state.identity().sign_out(&token).await {
            tracing::error!(%error, "sign-out failed");
        }
    }
    redirect_with_cookie("/", &clear_session_cookie())
}

async fn dashboard_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DashboardQuery>,
    headers: HeaderMap,
) -> Response {
    let session_state = resolve_session(state.identity(), &headers).await;
    let Some(session) = session_state.session() else {
        return Redirect::to("/").into_response();
    };

    let tasks = match state.tasks().watch_owned(session.profile().email()).await {
        Ok(feed) => feed.current(),
        Err(error) => {
            tracing::error!(%error, "task list lookup failed");
            Vec::new()
        }
    };
    let task_views: Vec<TaskView> = tasks.iter().map(TaskView::from_task).collect();

    let share_notice = query
        .shared
        .as_deref()
        .and_then(parse_task_id)
        .map(|id| ShareNotice {
            url: state.tasks().share_url(id),
        });

    render_page(
        state
            .pages()
            .dashboard(&session_state, &task_views, share_notice.as_ref()),
    )
}

async fn dashboard_feed(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    let session_state = resolve_session(state.identity(), &headers).await;
    let Some(session) = session_state.session() else {
        return Redirect::to("/").into_response();
    };

    let feed = match state.tasks().watch_owned(session.profile().email()).await {
        Ok(feed) => feed,
        Err(error) => {
            tracing::error!(%error, "task feed subscription failed");
            return Redirect::to("/").into_response();
        }
    };

    // Emit the current list immediately, then the full replacement list on
    // every change. The feed handle is dropped with the stream, which
    // releases the store-side listener.
    let events = stream::unfold((feed, true), |(mut feed, first)| async move {
        if !first && feed.changed().await.is_err() {
            return None;
        }
        let event = match Event::default().event("tasks").json_data(feed.current()) {
            Ok(event) => event,
            Err(error) => {
                tracing::error!(%error, "task feed serialisation failed");
                return None;
            }
        };
        Some((Ok::<Event, Infallible>(event), (feed, false)))
    });

    Sse::new(events).keep_alive(KeepAlive::default()).into_response()
}

async fn create_task(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Form(form): Form<NewTaskForm>,
) -> Response {
    let session_state = resolve_session(state.identity(), &headers).await;
    let Some(session) = session_state.session() else {
        return Redirect::to("/").into_response();
    };

    let owner = session.profile().email().clone();
    match state
        .tasks()
        .create(owner, form.tarefa, form.public.is_some())
        .await
    {
        Ok(task) => tracing::debug!(task = %task.id(), "task created"),
        // Empty input is silently ignored.
        Err(TaskBoardError::Domain(_)) => {}
        Err(error) => tracing::error!(%error, "task creation failed"),
    }
    Redirect::to("/dashboard").into_response()
}

async fn delete_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    let session_state = resolve_session(state.identity(), &headers).await;
    if session_state.session().is_none() {
        return Redirect::to("/").into_response();
    }

    if let Some(task_id) = parse_task_id(&id) {
        if let Err(error) = state.tasks().delete(task_id).await {
            tracing::error!(%error, "task deletion failed");
        }
    }
    Redirect::to("/dashboard").into_response()
}

async fn share_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    let session_state = resolve_session(state.identity(), &headers).await;
    if session_state.session().is_none() {
        return Redirect::to("/").into_response();
    }

    parse_task_id(&id).map_or_else(
        || Redirect::to("/dashboard").into_response(),
        |task_id| Redirect::to(&format!("/dashboard?shared={task_id}")).into_response(),
    )
}

async fn public_task_page(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    let session_state = resolve_session(state.identity(), &headers).await;
    let Some(task_id) = parse_task_id(&id) else {
        return Redirect::to("/").into_response();
    };

    // Entry guard: a missing or private task never renders partial
    // content; the visitor lands back on the home page.
    let task = match state.tasks().find(task_id).await {
        Ok(Some(task)) => task,
        Ok(None) => return Redirect::to("/").into_response(),
        Err(error) => {
            tracing::error!(%error, "task lookup failed");
            return Redirect::to("/").into_response();
        }
    };
    if !task.is_public() {
        return Redirect::to("/").into_response();
    }

    let comments = match state.comments().find_by_task(task_id).await {
        Ok(comments) => comments,
        Err(error) => {
            tracing::error!(%error, "comment lookup failed");
            return Redirect::to("/").into_response();
        }
    };

    let viewer = session_state.session().map(|s| s.profile().email());
    let comment_views: Vec<CommentView> = comments
        .iter()
        .map(|comment| CommentView::from_comment(comment, viewer))
        .collect();

    render_page(state.pages().public_task(
        &session_state,
        &PublicTaskView::from_task(&task),
        &comment_views,
    ))
}

async fn post_comment(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Form(form): Form<CommentForm>,
) -> Response {
    let Some(task_id) = parse_task_id(&id) else {
        return Redirect::to("/").into_response();
    };
    let back = format!("/task/{task_id}");

    let session_state = resolve_session(state.identity(), &headers).await;
    // Posting without a session is silently ignored, mirroring the
    // disabled form control.
    let Some(session) = session_state.session() else {
        return Redirect::to(&back).into_response();
    };

    match state.comments().post(task_id, session, form.comment).await {
        Ok(comment) => tracing::debug!(comment = %comment.id(), "comment posted"),
        // Empty input is silently ignored.
        Err(CommentThreadError::Domain(_)) => {}
        Err(error) => tracing::error!(%error, "comment post failed"),
    }
    Redirect::to(&back).into_response()
}

async fn delete_comment(
    State(state): State<Arc<AppState>>,
    Path((id, comment_id)): Path<(String, String)>,
) -> Response {
    let Some(task_id) = parse_task_id(&id) else {
        return Redirect::to("/").into_response();
    };
    let back = format!("/task/{task_id}");

    // The delete affordance is only rendered for the comment's author;
    // the handler itself deletes by id and leaves enforcement to the
    // store's access rules.
    if let Some(target) = parse_comment_id(&comment_id) {
        if let Err(error) = state.comments().delete(target).await {
            tracing::error!(%error, "comment deletion failed");
        }
    }
    Redirect::to(&back).into_response()
}

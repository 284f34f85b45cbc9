//! Action dispatcher.

use std::sync::Arc;

use axum::http::header::ORIGIN;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use tracing::{debug, error, info, warn};

use pytutor_client::CompletionClient;
use pytutor_types::{CompletionError, CompletionResult, WidgetConfig};

use super::action::Action;
use super::completer::Completer;
use super::cors;
use super::envelope::ResponseEnvelope;
use super::fields::{FieldSchema, LessonFields, ProfileFields, SnippetFields, TutorFields};
use super::form::{self, FormFields};
use super::request::RequestContext;
use crate::content::{curriculum, escape_html, markup, render, ChatExchange};
use crate::error::{WidgetError, WidgetResult};

/// The widget handler. Cheap to clone; holds only read-only state.
#[derive(Clone)]
pub struct Widget {
    config: Arc<WidgetConfig>,
    completer: Arc<dyn Completer>,
}

#[derive(Serialize)]
struct ProfileRecord<'a> {
    #[serde(flatten)]
    profile: &'a ProfileFields,
    updated_at: String,
}

#[derive(Serialize)]
struct SnippetRecord<'a> {
    code: &'a str,
    saved_at: String,
}

/// Fixed example record; no real progress is stored anywhere.
#[derive(Serialize)]
struct ProgressExport {
    current: u32,
    completed: [u32; 2],
    exported_at: String,
}

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl Widget {
    /// Build a widget backed by the real completion client.
    pub fn new(config: WidgetConfig) -> CompletionResult<Self> {
        let client = CompletionClient::new(config.completion.clone())?;
        Ok(Self::with_completer(config, Arc::new(client)))
    }

    pub fn with_completer(config: WidgetConfig, completer: Arc<dyn Completer>) -> Self {
        Self { config: Arc::new(config), completer }
    }

    /// Handle one request. Always yields a complete envelope.
    pub async fn handle(&self, ctx: &RequestContext) -> ResponseEnvelope {
        let headers = cors::response_headers(ctx.header(ORIGIN.as_str()), &self.config.allow_origins);

        if ctx.is_preflight() {
            debug!("Answering CORS preflight");
            return ResponseEnvelope::preflight(headers);
        }

        let action = Action::parse(ctx.query_param("action").as_deref());
        let form = form::decode(ctx);

        info!(action = action.as_str(), "Dispatching widget action");

        match self.dispatch(&action, &form).await {
            Ok(fragment) => ResponseEnvelope::ok(headers, render(&fragment)),
            Err(e) => {
                match &e {
                    WidgetError::Completion(CompletionError::MissingCredential) => {
                        warn!(action = action.as_str(), "Completion credential is not configured");
                    },
                    WidgetError::Completion(upstream) => {
                        error!(
                            action = action.as_str(),
                            status = ?upstream.upstream_status(),
                            "Completion call failed: {}",
                            upstream
                        );
                    },
                    other => error!(action = action.as_str(), "Widget action failed: {}", other),
                }
                let fragment = markup::error_card(&escape_html(&e.to_string()));
                ResponseEnvelope::internal_error(headers, render(&fragment))
            },
        }
    }

    async fn dispatch(&self, action: &Action, form: &FormFields) -> WidgetResult<String> {
        match action {
            Action::Lesson => Ok(lesson(&LessonFields::from_form(form))),
            Action::Tutor => self.tutor(&TutorFields::from_form(form)).await,
            Action::Quiz => self.quiz(&LessonFields::from_form(form)).await,
            Action::SaveProfile => save_profile(&ProfileFields::from_form(form)),
            Action::SaveSnippet => save_snippet(&SnippetFields::from_form(form)),
            Action::ExportProgress => export_progress(),
            Action::ImportProgress => Ok(markup::notice_card(
                "Import",
                "Import received (demo only; not persisted).",
            )),
            Action::ResetProgress => {
                Ok(markup::notice_card("Progress Reset", "Progress cleared (demo)."))
            },
            Action::Unrecognized(_) => Ok(markup::noop_card()),
        }
    }

    async fn tutor(&self, fields: &TutorFields) -> WidgetResult<String> {
        let entry = curriculum::lookup(&fields.lesson_id);
        let exchange = ChatExchange::tutor(&fields.lesson_id, entry, &fields.user_text);
        let reply = self.completer.complete(&exchange.system, &exchange.user).await?;
        Ok(markup::tutor_card(&escape_html(&reply)))
    }

    async fn quiz(&self, fields: &LessonFields) -> WidgetResult<String> {
        let entry = curriculum::lookup(&fields.lesson_id);
        let exchange = ChatExchange::quiz(entry);
        let quiz = self.completer.complete(&exchange.system, &exchange.user).await?;
        Ok(markup::quiz_card(&escape_html(&quiz)))
    }
}

fn lesson(fields: &LessonFields) -> String {
    let entry = curriculum::lookup(&fields.lesson_id);
    markup::lesson_card(&escape_html(&fields.lesson_id), entry)
}

fn save_profile(profile: &ProfileFields) -> WidgetResult<String> {
    let record = ProfileRecord { profile, updated_at: timestamp() };
    let json = serde_json::to_string_pretty(&record)?;
    Ok(markup::record_card(
        "Profile Saved",
        &escape_html(&json),
        Some("Copy this JSON if you want to keep a local record."),
    ))
}

fn save_snippet(snippet: &SnippetFields) -> WidgetResult<String> {
    let record = SnippetRecord { code: &snippet.code, saved_at: timestamp() };
    let json = serde_json::to_string_pretty(&record)?;
    Ok(markup::record_card("Snippet Saved", &escape_html(&json), None))
}

fn export_progress() -> WidgetResult<String> {
    let record = ProgressExport { current: 1, completed: [1, 2], exported_at: timestamp() };
    let json = serde_json::to_string_pretty(&record)?;
    Ok(markup::record_card(
        "Export",
        &escape_html(&json),
        Some("This demo does not persist server-side."),
    ))
}

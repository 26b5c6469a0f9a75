use crate::models::Topic;
use crate::startup::AppState;
use askama::Template;
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use service_core::error::AppError;

#[derive(Deserialize)]
pub struct TopicQuery {
    pub topic: String,
}

#[derive(Template)]
#[template(path = "partials/topic_info.html")]
pub struct TopicInfoTemplate {
    pub label: &'static str,
    pub body: String,
}

#[derive(Template)]
#[template(path = "partials/topic_error.html")]
pub struct TopicErrorTemplate {
    pub message: String,
}

/// Fetch explanatory text for a topic selected in the information guide.
///
/// Each selection is an independent, idempotent request; chat history is
/// never touched.
pub async fn topic_info(
    State(state): State<AppState>,
    Query(query): Query<TopicQuery>,
) -> Result<Response, AppError> {
    let topic = Topic::from_label(&query.topic)
        .ok_or_else(|| AppError::BadRequest(anyhow::anyhow!("Unknown topic: {}", query.topic)))?;

    match state.prompt_dispatcher.topic_info(topic).await {
        Ok(completion) => Ok(TopicInfoTemplate {
            label: topic.label(),
            body: completion.text,
        }
        .into_response()),
        Err(e) => {
            tracing::error!(topic = topic.label(), error = %e, "Error generating information");
            Ok(TopicErrorTemplate {
                message: format!("Error generating information: {}", e),
            }
            .into_response())
        }
    }
}

//! Scripted walkthrough: sign in as johndoe, share a post, like it, sign out.

use crate::ConsoleFormatter;
use photofeed_application::{FeedError, FeedUseCase, SessionError, SessionUseCase};
use photofeed_domain::{OutputFormat, Post};
use thiserror::Error;

const DEMO_EMAIL: &str = "john@example.com";
const DEMO_PASSWORD: &str = "password";
const DEMO_IMAGE: &str =
    "https://images.unsplash.com/photo-1500530855697-b586d89ba3ee?auto=format&fit=crop&w=1080&q=80";
const DEMO_CAPTION: &str = "Golden hour on the ridge #travel";

#[derive(Error, Debug)]
pub enum DemoError {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Feed(#[from] FeedError),
}

/// What the walkthrough did, and the post it ended on
#[derive(Debug)]
pub struct DemoReport {
    pub steps: Vec<String>,
    pub post: Post,
}

impl DemoReport {
    /// Step lines followed by the post; JSON output is the post alone.
    pub fn render(&self, format: OutputFormat) -> String {
        if format == OutputFormat::Json {
            return ConsoleFormatter::format_json(&self.post);
        }
        format!(
            "{}\n\n{}",
            self.steps.join("\n"),
            ConsoleFormatter::format_post(&self.post, format)
        )
    }
}

pub async fn run_demo(
    sessions: &SessionUseCase,
    feed: &FeedUseCase,
) -> Result<DemoReport, DemoError> {
    let mut steps = Vec::new();

    let identity = sessions.authenticate(DEMO_EMAIL, DEMO_PASSWORD).await?;
    steps.push(format!(
        "1. Signed in as {}",
        ConsoleFormatter::format_identity(&identity)
    ));

    let created = feed.create(DEMO_CAPTION, DEMO_IMAGE).await?;
    steps.push(format!("2. Shared post #{}", created.id));

    let post = feed.like(&created.id).await?;
    steps.push(format!("3. Liked post #{} ({} likes)", post.id, post.likes));

    sessions.deauthenticate().await;
    steps.push("4. Signed out".to_string());

    Ok(DemoReport { steps, post })
}

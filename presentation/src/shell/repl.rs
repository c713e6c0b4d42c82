//! REPL (Read-Eval-Print Loop) for the interactive shell

use super::command::ShellCommand;
use crate::ConsoleFormatter;
use photofeed_application::{FeedUseCase, SessionUseCase};
use photofeed_domain::{ErrorKind, OutputFormat};
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::io;
use std::sync::Arc;

const HISTORY_CAPACITY: usize = 1000;

/// Interactive shell over a single session
pub struct FeedShell {
    sessions: Arc<SessionUseCase>,
    feed: Arc<FeedUseCase>,
    format: OutputFormat,
}

impl FeedShell {
    pub fn new(sessions: Arc<SessionUseCase>, feed: Arc<FeedUseCase>) -> Self {
        Self {
            sessions,
            feed,
            format: OutputFormat::default(),
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> io::Result<()> {
        let mut line_editor =
            Reedline::create().with_history_exclusion_prefix(Some(" ".to_string()));

        let history_path = dirs::data_dir().map(|p| p.join("photofeed").join("history.txt"));

        if let Some(path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            if let Ok(history) = FileBackedHistory::with_file(HISTORY_CAPACITY, path) {
                line_editor = line_editor.with_history(Box::new(history));
            }
        }

        self.print_welcome();

        loop {
            match line_editor.read_line(&self.prompt())? {
                Signal::Success(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    if !line.starts_with('/') {
                        println!("Commands start with '/'. Type /help for available commands");
                        continue;
                    }

                    match ShellCommand::parse(line) {
                        Ok(ShellCommand::Quit) => {
                            println!("Bye!");
                            break;
                        }
                        Ok(command) => println!("{}", self.execute(command).await),
                        Err(usage) => println!("{}", usage),
                    }
                }
                Signal::CtrlD => {
                    println!("Bye!");
                    break;
                }
                _ => {
                    println!("^C");
                    continue;
                }
            }
        }

        Ok(())
    }

    fn prompt(&self) -> DefaultPrompt {
        let label = match self.sessions.current_identity() {
            Some(identity) => identity.username,
            None => "photofeed".to_string(),
        };
        DefaultPrompt::new(
            DefaultPromptSegment::Basic(label),
            DefaultPromptSegment::Empty,
        )
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│            Photofeed - Shell Mode           │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Demo accounts: john@example.com, jane@example.com");
        println!("Type /help for available commands");
        println!("Start a line with a space to keep it out of history");
        println!();
    }

    fn help() -> String {
        [
            "Commands:",
            "  /login <email> <password>              - Sign in",
            "  /signup <username> <email> <password>  - Create an account",
            "  /logout                                - Sign out",
            "  /whoami                                - Show the signed-in user",
            "  /feed                                  - Show all posts",
            "  /profile [username]                    - Show a profile",
            "  /like <post-id>                        - Like a post",
            "  /unlike <post-id>                      - Remove a like",
            "  /toggle <post-id>                      - Like or unlike",
            "  /comment <post-id> <text>              - Add a comment",
            "  /post <image-url> <caption>            - Share a photo",
            "  /help, /h, /?                          - Show this help",
            "  /quit, /exit, /q                       - Exit",
        ]
        .join("\n")
    }

    /// Run one command and render its outcome
    pub async fn execute(&self, command: ShellCommand) -> String {
        let format = self.format;
        let result = match command {
            ShellCommand::Login { email, password } => self
                .sessions
                .authenticate(&email, &password)
                .await
                .map(|identity| format!("Welcome back, {}!", identity.username))
                .map_err(|e| (e.kind(), e.to_string())),
            ShellCommand::Signup {
                username,
                email,
                password,
            } => self
                .sessions
                .register(&username, &email, &password)
                .await
                .map(|identity| format!("Account created. Welcome, {}!", identity.username))
                .map_err(|e| (e.kind(), e.to_string())),
            ShellCommand::Logout => {
                self.sessions.deauthenticate().await;
                Ok("Signed out.".to_string())
            }
            ShellCommand::Whoami => Ok(match self.sessions.current_identity() {
                Some(identity) => ConsoleFormatter::format_identity(&identity),
                None => "Not signed in.".to_string(),
            }),
            ShellCommand::Feed => self
                .feed
                .list_all()
                .await
                .map(|posts| ConsoleFormatter::format_feed(&posts, format))
                .map_err(|e| (e.kind(), e.to_string())),
            ShellCommand::Profile { handle } => self.profile(handle).await,
            ShellCommand::Like(post_id) => self
                .feed
                .like(&post_id)
                .await
                .map(|post| ConsoleFormatter::format_post(&post, format))
                .map_err(|e| (e.kind(), e.to_string())),
            ShellCommand::Unlike(post_id) => self
                .feed
                .unlike(&post_id)
                .await
                .map(|post| ConsoleFormatter::format_post(&post, format))
                .map_err(|e| (e.kind(), e.to_string())),
            ShellCommand::Toggle(post_id) => self
                .feed
                .toggle_like(&post_id)
                .await
                .map(|post| ConsoleFormatter::format_post(&post, format))
                .map_err(|e| (e.kind(), e.to_string())),
            ShellCommand::Comment { post_id, text } => self
                .feed
                .add_comment_and_fetch(&post_id, &text)
                .await
                .map(|(_, post)| ConsoleFormatter::format_post(&post, OutputFormat::Full))
                .map_err(|e| (e.kind(), e.to_string())),
            ShellCommand::Post { image_url, caption } => self
                .feed
                .create(&caption, &image_url)
                .await
                .map(|post| {
                    format!(
                        "Your post has been shared.\n{}",
                        ConsoleFormatter::format_post(&post, format)
                    )
                })
                .map_err(|e| (e.kind(), e.to_string())),
            ShellCommand::Help => Ok(Self::help()),
            ShellCommand::Quit => Ok("Bye!".to_string()),
        };

        result.unwrap_or_else(|(kind, message)| ConsoleFormatter::format_error(kind, &message))
    }

    async fn profile(&self, handle: Option<String>) -> Result<String, (ErrorKind, String)> {
        let identity = match handle {
            Some(handle) => self
                .sessions
                .find_by_handle(&handle)
                .await
                .map_err(|e| (e.kind(), e.to_string()))?
                .ok_or_else(|| (ErrorKind::NotFound, format!("No user named '{}'", handle)))?,
            None => self.sessions.current_identity().ok_or_else(|| {
                (
                    ErrorKind::Unauthenticated,
                    "Sign in or name a user: /profile <username>".to_string(),
                )
            })?,
        };

        self.feed
            .profile(&identity.id)
            .await
            .map(|profile| ConsoleFormatter::format_profile(&profile, self.format))
            .map_err(|e| (e.kind(), e.to_string()))
    }
}

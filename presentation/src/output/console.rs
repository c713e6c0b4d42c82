//! Console output formatter for feed entities

use colored::Colorize;
use photofeed_domain::{Comment, ErrorKind, Identity, OutputFormat, Post, ProfileView};
use serde::Serialize;

/// Formats posts, comments and profiles for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Force colored output on or off, overriding terminal detection
    pub fn set_color(enabled: bool) {
        colored::control::set_override(enabled);
    }

    /// Format a list of posts
    pub fn format_feed(posts: &[Post], format: OutputFormat) -> String {
        if format == OutputFormat::Json {
            return Self::format_json(&posts);
        }
        if posts.is_empty() {
            return format!("{}\n", "No posts yet.".dimmed());
        }
        posts
            .iter()
            .map(|post| Self::format_post(post, format))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format a single post
    pub fn format_post(post: &Post, format: OutputFormat) -> String {
        if format == OutputFormat::Json {
            return Self::format_json(post);
        }

        let mut output = String::new();
        output.push_str(&format!(
            "{} {} {}\n",
            format!("#{}", post.id).dimmed(),
            post.user.username.bold(),
            Self::display_timestamp(&post.created_at).dimmed()
        ));
        output.push_str(&format!("  {} {}\n", "image:".dimmed(), post.image_url));
        if !post.caption.is_empty() {
            output.push_str(&format!("  {}\n", post.caption));
        }

        let heart = if post.liked {
            "♥".red().to_string()
        } else {
            "♡".to_string()
        };
        output.push_str(&format!(
            "  {} {} {}\n",
            heart,
            Self::count(post.likes as usize, "like", "likes"),
            Self::count(post.comments.len(), "comment", "comments").dimmed()
        ));

        if format == OutputFormat::Full {
            for comment in &post.comments {
                output.push_str(&Self::indent(&Self::format_comment(comment), "    "));
                output.push('\n');
            }
        }

        output
    }

    /// Format a comment as `username: text`
    pub fn format_comment(comment: &Comment) -> String {
        format!("{} {}", format!("{}:", comment.user.username).bold(), comment.text)
    }

    /// Format a profile header followed by the owner's posts
    pub fn format_profile(profile: &ProfileView, format: OutputFormat) -> String {
        if format == OutputFormat::Json {
            return Self::format_json(profile);
        }

        let identity = &profile.identity;
        let mut output = String::new();
        output.push_str(&Self::header(&identity.username));
        output.push('\n');
        if let Some(bio) = &identity.bio {
            output.push_str(&format!("{}\n", bio));
        }
        output.push_str(&format!(
            "{}  {}  {}\n",
            Self::count(profile.post_count(), "post", "posts").cyan(),
            Self::count(identity.followers as usize, "follower", "followers").cyan(),
            format!("{} following", identity.following).cyan()
        ));
        output.push_str(&Self::footer());
        output.push('\n');

        if profile.posts.is_empty() {
            output.push_str(&format!("{}\n", "No posts yet.".dimmed()));
        } else {
            output.push_str(&Self::format_feed(&profile.posts, format));
        }
        output
    }

    /// One-line summary of the signed-in identity
    pub fn format_identity(identity: &Identity) -> String {
        format!(
            "{} {}",
            identity.username.green().bold(),
            format!("<{}>", identity.email).dimmed()
        )
    }

    /// Format as JSON
    pub fn format_json<T: Serialize + ?Sized>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format a failed operation, titled by its error kind
    pub fn format_error(kind: ErrorKind, message: &str) -> String {
        let title = match kind {
            ErrorKind::InvalidCredentials => "Sign in failed",
            ErrorKind::Validation => "Invalid input",
            ErrorKind::Conflict => "Sign up failed",
            ErrorKind::NotFound => "Not found",
            ErrorKind::Unauthenticated => "Sign in required",
            ErrorKind::Storage => "Something went wrong",
        };
        format!("{} {}", format!("{}:", title).red().bold(), message)
    }

    fn count(n: usize, singular: &str, plural: &str) -> String {
        format!("{} {}", n, if n == 1 { singular } else { plural })
    }

    /// `2024-02-26T10:30:00.000Z` -> `2024-02-26 10:30`
    fn display_timestamp(timestamp: &str) -> String {
        timestamp
            .get(..16)
            .map(|prefix| prefix.replacen('T', " ", 1))
            .unwrap_or_else(|| timestamp.to_string())
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(40);
        format!("{}\n{:^40}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn footer() -> String {
        "-".repeat(40)
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

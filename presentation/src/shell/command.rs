//! Slash-command parsing for the interactive shell

use photofeed_domain::PostId;

/// A parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Login { email: String, password: String },
    Signup { username: String, email: String, password: String },
    Logout,
    Whoami,
    Feed,
    /// Without a handle, shows the signed-in user's profile
    Profile { handle: Option<String> },
    Like(PostId),
    Unlike(PostId),
    Toggle(PostId),
    Comment { post_id: PostId, text: String },
    Post { image_url: String, caption: String },
    Help,
    Quit,
}

impl ShellCommand {
    /// Parse a line starting with `/`. The error is a usage message.
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (name, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();
        let args: Vec<&str> = rest.split_whitespace().collect();

        match name {
            "/login" => match args.as_slice() {
                [email, password] => Ok(Self::Login {
                    email: email.to_string(),
                    password: password.to_string(),
                }),
                _ => Err("Usage: /login <email> <password>".to_string()),
            },
            "/signup" => match args.as_slice() {
                [username, email, password] => Ok(Self::Signup {
                    username: username.to_string(),
                    email: email.to_string(),
                    password: password.to_string(),
                }),
                _ => Err("Usage: /signup <username> <email> <password>".to_string()),
            },
            "/logout" => Ok(Self::Logout),
            "/whoami" => Ok(Self::Whoami),
            "/feed" => Ok(Self::Feed),
            "/profile" => match args.as_slice() {
                [] => Ok(Self::Profile { handle: None }),
                [handle] => Ok(Self::Profile {
                    handle: Some(handle.to_string()),
                }),
                _ => Err("Usage: /profile [username]".to_string()),
            },
            "/like" | "/unlike" | "/toggle" => {
                let [post_id] = args.as_slice() else {
                    return Err(format!("Usage: {} <post-id>", name));
                };
                let post_id = PostId::from(*post_id);
                Ok(match name {
                    "/like" => Self::Like(post_id),
                    "/unlike" => Self::Unlike(post_id),
                    _ => Self::Toggle(post_id),
                })
            }
            "/comment" => {
                let usage = || "Usage: /comment <post-id> <text>".to_string();
                let (post_id, text) = rest.split_once(char::is_whitespace).ok_or_else(usage)?;
                let text = text.trim();
                if text.is_empty() {
                    return Err(usage());
                }
                Ok(Self::Comment {
                    post_id: PostId::from(post_id),
                    text: text.to_string(),
                })
            }
            "/post" => {
                let (image_url, caption) =
                    rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                let caption = caption.trim();
                if image_url.is_empty() || caption.is_empty() {
                    return Err(
                        "Please add a caption and image URL. Usage: /post <image-url> <caption>"
                            .to_string(),
                    );
                }
                Ok(Self::Post {
                    image_url: image_url.to_string(),
                    caption: caption.to_string(),
                })
            }
            "/help" | "/h" | "/?" => Ok(Self::Help),
            "/quit" | "/exit" | "/q" => Ok(Self::Quit),
            _ => Err(format!(
                "Unknown command: {}\nType /help for available commands",
                name
            )),
        }
    }
}

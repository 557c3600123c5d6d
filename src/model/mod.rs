mod config;
mod de;
mod post;
mod user;

pub use self::config::{ClientConfig, DEFAULT_AUTH_URL, DEFAULT_POSTS_URL, Endpoints};
pub use self::post::{CreatedPost, LikeCount, Post};
pub use self::user::{AuthResponse, Session, User};

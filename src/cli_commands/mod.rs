use clap::Subcommand;

pub(crate) mod config;
pub(crate) mod feed;
pub(crate) mod session;

pub(crate) use self::config::ConfigCommands;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Create an account and start a session
    Register(session::RegisterArgs),

    /// Log in and store the session locally
    Login(session::LoginArgs),

    /// Forget the stored session
    Logout,

    /// Show the stored session user
    Whoami(session::WhoamiArgs),

    /// List the latest posts
    Feed(feed::FeedArgs),

    /// Publish a post as the logged-in user
    Post(feed::PostArgs),

    /// Like a post
    Like(feed::LikeArgs),

    /// Show or change endpoint configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

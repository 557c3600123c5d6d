use clap::Args;

#[derive(Args)]
pub(crate) struct FeedArgs {
    /// Show at most this many posts
    #[arg(long)]
    pub(crate) limit: Option<usize>,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct PostArgs {
    /// Post text
    pub(crate) content: String,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct LikeArgs {
    pub(crate) post_id: i64,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

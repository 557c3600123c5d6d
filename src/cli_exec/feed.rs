use super::*;

use crate::cli_commands::feed::{FeedArgs, LikeArgs, PostArgs};

pub(super) fn handle_feed_command(settings: &Settings, args: FeedArgs) -> Result<()> {
    let client = settings.remote_client()?;
    let mut posts = client.list_posts()?;
    if let Some(n) = args.limit {
        posts.truncate(n);
    }

    if args.json {
        return print_json(&posts, "posts");
    }
    if posts.is_empty() {
        println!("No posts yet");
        return Ok(());
    }
    for p in posts {
        let badge = if p.is_creator { " ✓" } else { "" };
        println!(
            "#{} {}{} (@{}) {}",
            p.id,
            p.author(),
            badge,
            p.username,
            p.created_at
        );
        for line in p.content.lines() {
            println!("    {}", line);
        }
        println!("    likes={} comments={}", p.likes, p.comments);
    }
    Ok(())
}

pub(super) fn handle_post_command(settings: &Settings, args: PostArgs) -> Result<()> {
    if args.content.trim().is_empty() {
        anyhow::bail!("post content is empty");
    }
    let (user, _token) = crate::cli_runtime::require_session(&settings.session_store()?)?;
    let client = settings.remote_client()?;
    let created = client.create_post(user.id, &args.content)?;
    if args.json {
        print_json(&created, "created post")?;
    } else {
        println!("{} (id {})", created.message, created.id);
    }
    Ok(())
}

pub(super) fn handle_like_command(settings: &Settings, args: LikeArgs) -> Result<()> {
    let client = settings.remote_client()?;
    let count = client.like_post(args.post_id)?;
    if args.json {
        print_json(&count, "like")?;
    } else {
        println!("likes: {}", count.likes);
    }
    Ok(())
}

use super::*;

impl RemoteClient {
    pub fn list_posts(&self) -> Result<Vec<Post>> {
        let resp = self.get(&self.endpoints.posts_url, "list posts")?;
        let posts: Vec<Post> = self
            .ensure_ok(resp, ErrorDetail::Fixed("Failed to load posts"), "list posts")?
            .json()
            .context("parse list posts response")?;
        tracing::debug!(count = posts.len(), "loaded posts");
        Ok(posts)
    }

    pub fn create_post(&self, user_id: i64, content: &str) -> Result<CreatedPost> {
        let body = PostsRequest::Create { user_id, content };
        let resp = self.post_json(&self.endpoints.posts_url, &body, "create post")?;
        let created: CreatedPost = self
            .ensure_ok(
                resp,
                ErrorDetail::ServerOr("Failed to create post"),
                "create post",
            )?
            .json()
            .context("parse create post response")?;
        tracing::info!(post_id = created.id, "post created");
        Ok(created)
    }

    /// Returns the server's like count as-is.
    pub fn like_post(&self, post_id: i64) -> Result<LikeCount> {
        let body = PostsRequest::Like { post_id };
        let resp = self.post_json(&self.endpoints.posts_url, &body, "like post")?;
        let count: LikeCount = self
            .ensure_ok(resp, ErrorDetail::Fixed("Failed to like post"), "like post")?
            .json()
            .context("parse like post response")?;
        tracing::debug!(post_id, likes = count.likes, "post liked");
        Ok(count)
    }
}

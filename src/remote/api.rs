use super::*;

/// The gateway operations the shell and CLI need. `RemoteClient` is the real
/// implementation; tests substitute fakes.
pub trait SocialApi {
    fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<AuthResponse>;
    fn login(&self, username: &str, password: &str) -> Result<AuthResponse>;
    fn list_posts(&self) -> Result<Vec<Post>>;
    fn create_post(&self, user_id: i64, content: &str) -> Result<CreatedPost>;
    fn like_post(&self, post_id: i64) -> Result<LikeCount>;
}

impl SocialApi for RemoteClient {
    fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<AuthResponse> {
        RemoteClient::register(self, username, email, password, full_name)
    }

    fn login(&self, username: &str, password: &str) -> Result<AuthResponse> {
        RemoteClient::login(self, username, password)
    }

    fn list_posts(&self) -> Result<Vec<Post>> {
        RemoteClient::list_posts(self)
    }

    fn create_post(&self, user_id: i64, content: &str) -> Result<CreatedPost> {
        RemoteClient::create_post(self, user_id, content)
    }

    fn like_post(&self, post_id: i64) -> Result<LikeCount> {
        RemoteClient::like_post(self, post_id)
    }
}

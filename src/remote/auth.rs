use super::*;

impl RemoteClient {
    pub fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<AuthResponse> {
        let body = AuthRequest::Register {
            username,
            email,
            password,
            full_name,
        };
        let resp = self.post_json(&self.endpoints.auth_url, &body, "register")?;
        let out: AuthResponse = self
            .ensure_ok(resp, ErrorDetail::ServerOr("Registration failed"), "register")?
            .json()
            .context("parse register response")?;
        tracing::info!(user_id = out.user.id, username = %out.user.username, "registered");
        Ok(out)
    }

    pub fn login(&self, username: &str, password: &str) -> Result<AuthResponse> {
        let body = AuthRequest::Login { username, password };
        let resp = self.post_json(&self.endpoints.auth_url, &body, "login")?;
        let out: AuthResponse = self
            .ensure_ok(resp, ErrorDetail::ServerOr("Login failed"), "login")?
            .json()
            .context("parse login response")?;
        tracing::info!(user_id = out.user.id, username = %out.user.username, "logged in");
        Ok(out)
    }
}

//! Request bodies. The `action` field selects the server-side operation.

#[derive(Debug, serde::Serialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub(super) enum AuthRequest<'a> {
    Register {
        username: &'a str,
        email: &'a str,
        password: &'a str,
        full_name: &'a str,
    },
    Login {
        username: &'a str,
        password: &'a str,
    },
}

#[derive(Debug, serde::Serialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub(super) enum PostsRequest<'a> {
    Create { user_id: i64, content: &'a str },
    Like { post_id: i64 },
}

#[cfg(test)]
#[path = "../tests/remote/types_tests.rs"]
mod tests;

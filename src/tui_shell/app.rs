use anyhow::Result;

use crate::model::{Post, User};
use crate::remote::SocialApi;
use crate::session::SessionStore;

use super::input::Input;
use super::tiles::{TILES, TileId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Screen {
    Auth,
    Tiles,
    Section(TileId),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum StatusKind {
    Info,
    Error,
}

#[derive(Clone, Debug)]
pub(super) struct Status {
    pub(super) kind: StatusKind,
    pub(super) text: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum AuthMode {
    Login,
    Register,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum AuthField {
    Username,
    Email,
    Password,
    FullName,
}

impl AuthField {
    pub(super) fn label(self) -> &'static str {
        match self {
            AuthField::Username => "username",
            AuthField::Email => "email",
            AuthField::Password => "password",
            AuthField::FullName => "full name",
        }
    }
}

#[derive(Clone, Debug)]
pub(super) struct AuthForm {
    pub(super) mode: AuthMode,
    pub(super) focus: AuthField,
    pub(super) username: Input,
    pub(super) email: Input,
    pub(super) password: Input,
    pub(super) full_name: Input,
}

impl Default for AuthForm {
    fn default() -> Self {
        Self {
            mode: AuthMode::Login,
            focus: AuthField::Username,
            username: Input::default(),
            email: Input::default(),
            password: Input::default(),
            full_name: Input::default(),
        }
    }
}

impl AuthForm {
    pub(super) fn fields(&self) -> &'static [AuthField] {
        match self.mode {
            AuthMode::Login => &[AuthField::Username, AuthField::Password],
            AuthMode::Register => &[
                AuthField::Username,
                AuthField::Email,
                AuthField::Password,
                AuthField::FullName,
            ],
        }
    }

    pub(super) fn input(&self, field: AuthField) -> &Input {
        match field {
            AuthField::Username => &self.username,
            AuthField::Email => &self.email,
            AuthField::Password => &self.password,
            AuthField::FullName => &self.full_name,
        }
    }

    pub(super) fn focused_mut(&mut self) -> &mut Input {
        match self.focus {
            AuthField::Username => &mut self.username,
            AuthField::Email => &mut self.email,
            AuthField::Password => &mut self.password,
            AuthField::FullName => &mut self.full_name,
        }
    }

    fn focus_index(&self) -> usize {
        self.fields()
            .iter()
            .position(|f| *f == self.focus)
            .unwrap_or(0)
    }

    pub(super) fn focus_next(&mut self) {
        let fields = self.fields();
        self.focus = fields[(self.focus_index() + 1) % fields.len()];
    }

    pub(super) fn focus_prev(&mut self) {
        let fields = self.fields();
        let n = fields.len();
        self.focus = fields[(self.focus_index() + n - 1) % n];
    }

    pub(super) fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        };
        if !self.fields().contains(&self.focus) {
            self.focus = AuthField::Username;
        }
    }

    /// Full name is optional; everything else shown in the current mode is required.
    pub(super) fn missing_fields(&self) -> Vec<&'static str> {
        self.fields()
            .iter()
            .filter(|f| **f != AuthField::FullName)
            .filter(|f| self.input(**f).buf.trim().is_empty())
            .map(|f| f.label())
            .collect()
    }
}

#[derive(Clone, Debug, Default)]
pub(super) struct FeedState {
    pub(super) posts: Vec<Post>,
    pub(super) selected: usize,
    pub(super) draft: Input,
    pub(super) loaded: bool,
}

impl FeedState {
    pub(super) fn selected_post(&self) -> Option<&Post> {
        self.posts.get(self.selected)
    }

    pub(super) fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub(super) fn move_down(&mut self) {
        if self.selected + 1 < self.posts.len() {
            self.selected += 1;
        }
    }
}

pub(super) struct App {
    api: Box<dyn SocialApi>,
    session: SessionStore,

    pub(super) user: Option<User>,
    pub(super) screen: Screen,
    pub(super) tile_selected: usize,
    pub(super) auth: AuthForm,
    pub(super) feed: FeedState,
    pub(super) status: Option<Status>,
    pub(super) quit: bool,
}

impl App {
    pub(super) fn new(api: Box<dyn SocialApi>, session: SessionStore) -> Result<Self> {
        let active = session.read()?.into_active();
        let (user, screen) = match active {
            Some((user, _token)) => (Some(user), Screen::Tiles),
            None => (None, Screen::Auth),
        };
        Ok(Self {
            api,
            session,
            user,
            screen,
            tile_selected: 0,
            auth: AuthForm::default(),
            feed: FeedState::default(),
            status: None,
            quit: false,
        })
    }

    pub(super) fn info(&mut self, text: impl Into<String>) {
        self.status = Some(Status {
            kind: StatusKind::Info,
            text: text.into(),
        });
    }

    pub(super) fn error(&mut self, err: &anyhow::Error) {
        tracing::warn!(error = %format!("{err:#}"), "action failed");
        self.status = Some(Status {
            kind: StatusKind::Error,
            text: err.to_string(),
        });
    }

    pub(super) fn select_next_tile(&mut self) {
        self.tile_selected = (self.tile_selected + 1) % TILES.len();
    }

    pub(super) fn select_prev_tile(&mut self) {
        self.tile_selected = (self.tile_selected + TILES.len() - 1) % TILES.len();
    }

    pub(super) fn open_selected_tile(&mut self) {
        let id = TILES[self.tile_selected.min(TILES.len() - 1)].id;
        self.open_tile(id);
    }

    /// Opening the section that is already active goes back to the grid.
    pub(super) fn open_tile(&mut self, id: TileId) {
        if self.screen == Screen::Section(id) {
            self.screen = Screen::Tiles;
            return;
        }
        self.screen = Screen::Section(id);
        if id == TileId::Feed {
            self.refresh_feed();
        }
    }

    pub(super) fn back(&mut self) {
        if matches!(self.screen, Screen::Section(_)) {
            self.screen = Screen::Tiles;
        }
    }

    pub(super) fn submit_auth(&mut self) {
        let missing = self.auth.missing_fields();
        if !missing.is_empty() {
            self.error(&anyhow::anyhow!("Fill in: {}", missing.join(", ")));
            return;
        }

        let username = self.auth.username.buf.trim().to_string();
        let password = self.auth.password.buf.clone();
        let res = match self.auth.mode {
            AuthMode::Login => self.api.login(&username, &password),
            AuthMode::Register => self.api.register(
                &username,
                self.auth.email.buf.trim(),
                &password,
                self.auth.full_name.buf.trim(),
            ),
        };

        let resp = match res {
            Ok(resp) => resp,
            Err(err) => {
                self.error(&err);
                return;
            }
        };

        if let Err(err) = self.session.save(&resp.user, &resp.token) {
            self.error(&err);
            return;
        }

        self.info(format!("Welcome, {}", resp.user.display_name()));
        self.user = Some(resp.user);
        self.auth = AuthForm::default();
        self.screen = Screen::Tiles;
        self.tile_selected = 0;
    }

    pub(super) fn refresh_feed(&mut self) {
        match self.api.list_posts() {
            Ok(posts) => {
                self.feed.posts = posts;
                self.feed.loaded = true;
                if self.feed.selected >= self.feed.posts.len() {
                    self.feed.selected = self.feed.posts.len().saturating_sub(1);
                }
            }
            Err(err) => self.error(&err),
        }
    }

    /// Blank drafts are ignored. On success the draft is cleared and the feed re-fetched.
    pub(super) fn submit_draft(&mut self) {
        if self.feed.draft.buf.trim().is_empty() {
            return;
        }
        let Some(user_id) = self.user.as_ref().map(|u| u.id) else {
            self.error(&anyhow::anyhow!("Log in to publish posts"));
            return;
        };

        match self.api.create_post(user_id, &self.feed.draft.buf) {
            Ok(created) => {
                self.feed.draft.clear();
                self.info(created.message);
                self.feed.selected = 0;
                self.refresh_feed();
            }
            Err(err) => self.error(&err),
        }
    }

    pub(super) fn like_selected(&mut self) {
        let Some(post_id) = self.feed.selected_post().map(|p| p.id) else {
            return;
        };
        match self.api.like_post(post_id) {
            Ok(count) => {
                if let Some(post) = self.feed.posts.iter_mut().find(|p| p.id == post_id) {
                    post.likes = count.likes;
                }
            }
            Err(err) => self.error(&err),
        }
    }

    pub(super) fn logout(&mut self) {
        if let Err(err) = self.session.clear() {
            self.error(&err);
            return;
        }
        self.user = None;
        self.feed = FeedState::default();
        self.auth = AuthForm::default();
        self.screen = Screen::Auth;
        self.info("Logged out");
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/app_tests.rs"]
mod tests;

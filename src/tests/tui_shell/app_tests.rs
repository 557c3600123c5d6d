use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Context;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::*;
use crate::model::{AuthResponse, CreatedPost, LikeCount};
use crate::session::MemoryStorage;
use crate::tui_shell::event_loop::handle_key;

#[derive(Default)]
struct FakeState {
    posts: Vec<Post>,
    calls: Vec<String>,
    fail_login: Option<&'static str>,
    fail_list: bool,
    like_result: i64,
}

#[derive(Clone, Default)]
struct FakeApi(Rc<RefCell<FakeState>>);

fn user(id: i64, username: &str) -> User {
    User {
        id,
        username: username.to_string(),
        email: format!("{username}@example.com"),
        full_name: String::new(),
        avatar: String::new(),
        is_creator: false,
    }
}

fn post(id: i64, content: &str, likes: i64) -> Post {
    Post {
        id,
        content: content.to_string(),
        likes,
        comments: 0,
        created_at: "2024-05-01 10:00:00".to_string(),
        username: "anna".to_string(),
        full_name: "Anna".to_string(),
        avatar: "AN".to_string(),
        is_creator: false,
    }
}

impl SocialApi for FakeApi {
    fn register(
        &self,
        username: &str,
        email: &str,
        _password: &str,
        full_name: &str,
    ) -> Result<AuthResponse> {
        self.0
            .borrow_mut()
            .calls
            .push(format!("register {username} {email} {full_name}"));
        Ok(AuthResponse {
            user: user(2, username),
            token: "reg-token".to_string(),
        })
    }

    fn login(&self, username: &str, _password: &str) -> Result<AuthResponse> {
        let mut st = self.0.borrow_mut();
        st.calls.push(format!("login {username}"));
        if let Some(msg) = st.fail_login {
            anyhow::bail!(msg);
        }
        Ok(AuthResponse {
            user: user(1, username),
            token: "login-token".to_string(),
        })
    }

    fn list_posts(&self) -> Result<Vec<Post>> {
        let mut st = self.0.borrow_mut();
        st.calls.push("list".to_string());
        if st.fail_list {
            anyhow::bail!("Failed to load posts");
        }
        Ok(st.posts.clone())
    }

    fn create_post(&self, user_id: i64, content: &str) -> Result<CreatedPost> {
        let mut st = self.0.borrow_mut();
        st.calls.push(format!("create {user_id} {content}"));
        let id = st.posts.len() as i64 + 100;
        st.posts.insert(0, post(id, content, 0));
        Ok(CreatedPost {
            id,
            message: "Post created".to_string(),
        })
    }

    fn like_post(&self, post_id: i64) -> Result<LikeCount> {
        let mut st = self.0.borrow_mut();
        st.calls.push(format!("like {post_id}"));
        Ok(LikeCount {
            likes: st.like_result,
        })
    }
}

fn app_with(fake: &FakeApi, logged_in: Option<User>) -> App {
    let session = SessionStore::new(Box::new(MemoryStorage::new()));
    if let Some(u) = logged_in {
        session.save(&u, "tok").expect("seed session");
    }
    App::new(Box::new(fake.clone()), session).expect("build app")
}

fn press(app: &mut App, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

fn ctrl(app: &mut App, c: char) {
    handle_key(app, KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

#[test]
fn starts_on_auth_form_without_session_and_on_tiles_with_one() {
    let fake = FakeApi::default();
    assert_eq!(app_with(&fake, None).screen, Screen::Auth);
    assert_eq!(app_with(&fake, Some(user(1, "anna"))).screen, Screen::Tiles);
}

#[test]
fn login_form_saves_session_and_shows_tiles() -> Result<()> {
    let fake = FakeApi::default();
    let mut app = app_with(&fake, None);

    type_text(&mut app, "anna");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "secret");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.screen, Screen::Tiles);
    assert_eq!(app.user.as_ref().map(|u| u.username.as_str()), Some("anna"));
    let (saved, token) = app.session.read()?.into_active().context("no session")?;
    assert_eq!(saved.username, "anna");
    assert_eq!(token, "login-token");
    assert!(app.auth.password.buf.is_empty());
    Ok(())
}

#[test]
fn login_failure_shows_server_message_and_keeps_form() -> Result<()> {
    let fake = FakeApi::default();
    fake.0.borrow_mut().fail_login = Some("Invalid credentials");
    let mut app = app_with(&fake, None);

    type_text(&mut app, "anna");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "wrong");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.screen, Screen::Auth);
    let status = app.status.as_ref().context("status missing")?;
    assert_eq!(status.kind, StatusKind::Error);
    assert_eq!(status.text, "Invalid credentials");
    assert!(!app.session.read()?.is_active());
    Ok(())
}

#[test]
fn missing_fields_are_reported_without_calling_the_server() -> Result<()> {
    let fake = FakeApi::default();
    let mut app = app_with(&fake, None);
    press(&mut app, KeyCode::F(2));
    type_text(&mut app, "anna");
    press(&mut app, KeyCode::Enter);

    let status = app.status.as_ref().context("status missing")?;
    assert_eq!(status.text, "Fill in: email, password");
    assert!(fake.0.borrow().calls.is_empty());
    Ok(())
}

#[test]
fn register_mode_sends_all_fields() {
    let fake = FakeApi::default();
    let mut app = app_with(&fake, None);
    press(&mut app, KeyCode::F(2));
    assert_eq!(app.auth.mode, AuthMode::Register);

    type_text(&mut app, "elena");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "e@x.io");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "pw");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "Elena I");
    press(&mut app, KeyCode::Enter);

    assert_eq!(fake.0.borrow().calls, vec!["register elena e@x.io Elena I"]);
    assert_eq!(app.screen, Screen::Tiles);
}

#[test]
fn toggling_mode_back_to_login_moves_focus_off_hidden_fields() {
    let fake = FakeApi::default();
    let mut app = app_with(&fake, None);
    press(&mut app, KeyCode::F(2));
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.auth.focus, AuthField::Email);
    press(&mut app, KeyCode::F(2));
    assert_eq!(app.auth.focus, AuthField::Username);
}

#[test]
fn opening_the_active_tile_again_returns_to_grid() {
    let fake = FakeApi::default();
    let mut app = app_with(&fake, Some(user(1, "anna")));

    app.open_tile(TileId::Messages);
    assert_eq!(app.screen, Screen::Section(TileId::Messages));
    app.open_tile(TileId::Messages);
    assert_eq!(app.screen, Screen::Tiles);
}

#[test]
fn feed_loads_on_open_and_escape_goes_back() {
    let fake = FakeApi::default();
    fake.0.borrow_mut().posts = vec![post(1, "hello", 3)];
    let mut app = app_with(&fake, Some(user(1, "anna")));

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.screen, Screen::Section(TileId::Feed));
    assert_eq!(app.feed.posts.len(), 1);
    assert!(app.feed.loaded);

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.screen, Screen::Tiles);
}

#[test]
fn feed_load_failure_is_shown_in_status() -> Result<()> {
    let fake = FakeApi::default();
    fake.0.borrow_mut().fail_list = true;
    let mut app = app_with(&fake, Some(user(1, "anna")));
    app.open_tile(TileId::Feed);

    let status = app.status.as_ref().context("status missing")?;
    assert_eq!(status.text, "Failed to load posts");
    assert!(!app.feed.loaded);
    Ok(())
}

#[test]
fn blank_draft_is_not_published() {
    let fake = FakeApi::default();
    let mut app = app_with(&fake, Some(user(1, "anna")));
    app.open_tile(TileId::Feed);
    type_text(&mut app, "   ");
    press(&mut app, KeyCode::Enter);

    assert!(!fake.0.borrow().calls.iter().any(|c| c.starts_with("create")));
}

#[test]
fn publishing_clears_draft_and_refetches() {
    let fake = FakeApi::default();
    let mut app = app_with(&fake, Some(user(7, "anna")));
    app.open_tile(TileId::Feed);
    type_text(&mut app, "hello");
    press(&mut app, KeyCode::Enter);

    let calls = fake.0.borrow().calls.clone();
    assert_eq!(calls, vec!["list", "create 7 hello", "list"]);
    assert!(app.feed.draft.buf.is_empty());
    assert_eq!(app.feed.posts.len(), 1);
    assert_eq!(app.feed.posts[0].content, "hello");
}

#[test]
fn like_updates_only_the_selected_post_with_server_count() {
    let fake = FakeApi::default();
    {
        let mut st = fake.0.borrow_mut();
        st.posts = vec![post(1, "a", 3), post(2, "b", 10)];
        st.like_result = 99;
    }
    let mut app = app_with(&fake, Some(user(1, "anna")));
    app.open_tile(TileId::Feed);
    press(&mut app, KeyCode::Down);
    ctrl(&mut app, 'l');

    assert_eq!(fake.0.borrow().calls.last().map(String::as_str), Some("like 2"));
    assert_eq!(app.feed.posts[0].likes, 3);
    assert_eq!(app.feed.posts[1].likes, 99);
}

#[test]
fn selection_stays_in_bounds() {
    let fake = FakeApi::default();
    fake.0.borrow_mut().posts = vec![post(1, "a", 0), post(2, "b", 0)];
    let mut app = app_with(&fake, Some(user(1, "anna")));
    app.open_tile(TileId::Feed);
    for _ in 0..5 {
        press(&mut app, KeyCode::Down);
    }
    assert_eq!(app.feed.selected, 1);
    for _ in 0..5 {
        press(&mut app, KeyCode::Up);
    }
    assert_eq!(app.feed.selected, 0);
}

#[test]
fn logout_from_profile_clears_session_and_returns_to_form() -> Result<()> {
    let fake = FakeApi::default();
    let mut app = app_with(&fake, Some(user(1, "anna")));
    app.open_tile(TileId::Profile);
    ctrl(&mut app, 'o');

    assert_eq!(app.screen, Screen::Auth);
    assert!(app.user.is_none());
    assert_eq!(app.session.read()?, crate::model::Session::default());
    Ok(())
}

#[test]
fn q_on_grid_and_ctrl_c_anywhere_quit() {
    let fake = FakeApi::default();
    let mut app = app_with(&fake, Some(user(1, "anna")));
    press(&mut app, KeyCode::Char('q'));
    assert!(app.quit);

    let mut app = app_with(&fake, None);
    type_text(&mut app, "q");
    assert!(!app.quit);
    ctrl(&mut app, 'c');
    assert!(app.quit);
}

#[test]
fn tile_selection_wraps() {
    let fake = FakeApi::default();
    let mut app = app_with(&fake, Some(user(1, "anna")));
    press(&mut app, KeyCode::Left);
    assert_eq!(app.tile_selected, TILES.len() - 1);
    press(&mut app, KeyCode::Right);
    assert_eq!(app.tile_selected, 0);
}

pub(super) mod auth_form;
pub(super) mod feed;
pub(super) mod placeholder;
pub(super) mod profile;
pub(super) mod tiles;

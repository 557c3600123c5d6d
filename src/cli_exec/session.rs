use super::*;

use crate::cli_commands::session::{LoginArgs, RegisterArgs};

pub(super) fn handle_register_command(settings: &Settings, args: RegisterArgs) -> Result<()> {
    let client = settings.remote_client()?;
    let resp = client.register(&args.username, &args.email, &args.password, &args.full_name)?;
    settings
        .session_store()?
        .save(&resp.user, &resp.token)
        .context("save session")?;
    println!("Registered and logged in as {}", resp.user.username);
    Ok(())
}

pub(super) fn handle_login_command(settings: &Settings, args: LoginArgs) -> Result<()> {
    let client = settings.remote_client()?;
    let resp = client.login(&args.username, &args.password)?;
    settings
        .session_store()?
        .save(&resp.user, &resp.token)
        .context("save session")?;
    println!("Logged in as {}", resp.user.username);
    Ok(())
}

pub(super) fn handle_logout_command(settings: &Settings) -> Result<()> {
    settings
        .session_store()?
        .clear()
        .context("clear session")?;
    println!("Logged out");
    Ok(())
}

pub(super) fn handle_whoami_command(settings: &Settings, json: bool) -> Result<()> {
    let (user, _token) = crate::cli_runtime::require_session(&settings.session_store()?)?;
    if json {
        print_json(&user, "whoami")?;
    } else {
        println!("id: {}", user.id);
        println!("username: {}", user.username);
        println!("email: {}", user.email);
        if !user.full_name.is_empty() {
            println!("full_name: {}", user.full_name);
        }
        println!("creator: {}", user.is_creator);
    }
    Ok(())
}

//! Session CLI commands: login, logout, whoami

use crate::api::{ApiClient, Transport};
use crate::auth;
use crate::error::AdminResult;
use crate::storage::SessionStore;

use super::{prompt_line, prompt_password, read_password_stdin};

/// Log in and persist the token pair
///
/// Prompts for whatever was not given on the command line.
pub fn handle_login<T: Transport>(
    client: &mut ApiClient<T>,
    store: &SessionStore,
    username: Option<String>,
    password_stdin: bool,
) -> AdminResult<()> {
    let username = match username {
        Some(name) => name,
        None => prompt_line("Usuario: ")?,
    };
    let password = if password_stdin {
        read_password_stdin()?
    } else {
        prompt_password("Contrasena: ")?
    };

    let session = auth::login(client, store, &username, &password)?;
    println!("Sesion iniciada como {}.", session.username);
    Ok(())
}

pub fn handle_logout<T: Transport>(client: &mut ApiClient<T>, store: &SessionStore) -> AdminResult<()> {
    auth::logout(client, store)?;
    println!("Sesion cerrada.");
    Ok(())
}

pub fn handle_whoami<T: Transport>(client: &ApiClient<T>) -> AdminResult<()> {
    match client.session().session() {
        Some(session) => println!(
            "{} (desde {})",
            session.username,
            session.logged_in_at.format("%Y-%m-%d %H:%M UTC")
        ),
        None => println!("Sin sesion activa."),
    }
    Ok(())
}

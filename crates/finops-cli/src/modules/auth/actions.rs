use finops_client::models::{NewUser, User};

use crate::cli_args::{LoginArgs, RegisterArgs};
use crate::modules::system::CommandContext;
use crate::{prompt_line, prompt_password};

pub(crate) async fn handle_login(args: LoginArgs, ctx: &CommandContext<'_>) -> anyhow::Result<()> {
    let username = match args.username {
        Some(username) => username,
        None => prompt_line("Username: ")?,
    };
    if username.is_empty() {
        anyhow::bail!("username is required");
    }
    let password = match args.password {
        Some(password) => password,
        None => prompt_password("Password: ")?,
    };

    let auth = ctx.client.auth();
    auth.login(&username, &password).await?;
    match auth.load_user().await? {
        Some(user) => println!("Logged in as {}", describe(&user)),
        None => println!("Logged in as {username}"),
    }
    Ok(())
}

pub(crate) async fn handle_register(
    args: RegisterArgs,
    ctx: &CommandContext<'_>,
) -> anyhow::Result<()> {
    let password = match args.password {
        Some(password) => password,
        None => {
            let password = prompt_password("Password: ")?;
            let confirmation = prompt_password("Confirm password: ")?;
            if password != confirmation {
                anyhow::bail!("passwords do not match");
            }
            password
        }
    };
    let new_user = NewUser {
        username: args.username,
        email: args.email,
        password_confirmation: password.clone(),
        password,
        first_name: args.first_name,
        last_name: args.last_name,
        role: args.role,
    };
    let user = ctx.client.auth().register_and_login(&new_user).await?;
    println!("Registered and logged in as {}", describe(&user));
    Ok(())
}

pub(crate) fn handle_logout(ctx: &CommandContext<'_>) {
    ctx.client.auth().logout();
    println!("Logged out");
}

pub(crate) async fn handle_whoami(ctx: &CommandContext<'_>) -> anyhow::Result<()> {
    if ctx.client.session().access_token()?.is_none() {
        anyhow::bail!("not logged in; run `finops login`");
    }
    let user = ctx.client.auth().current_user().await?;
    ctx.client.session().cache_user(&user)?;
    println!("{}", serde_json::to_string_pretty(&user)?);
    Ok(())
}

fn describe(user: &User) -> String {
    match user.role.as_deref() {
        Some(role) if !role.is_empty() => format!("{} ({role})", user.username),
        _ => user.username.clone(),
    }
}

use super::{app_context, require_session};
use anyhow::Result;
use colored::Colorize;
use reporta_api::AuthClient;
use reporta_application::AuthFlow;
use reporta_core::guard::LandingRoute;

pub async fn login(email: &str, password: &str) -> Result<()> {
    let ctx = app_context().await?;
    let flow = AuthFlow::new(AuthClient::new(&ctx.config.server_url), ctx.session.clone());

    let outcome = flow.sign_in(email, password).await?;

    println!(
        "{} Signed in as user {} ({}).",
        "✓".green(),
        outcome.session.id,
        outcome.session.role_type
    );
    match outcome.landing {
        LandingRoute::Reports => {
            println!("You manage reports: start with `reporta report list`.")
        }
        LandingRoute::Menu => {
            println!("Submit a report with `reporta report create`.")
        }
    }

    Ok(())
}

pub async fn register(name: &str, email: &str, password: &str) -> Result<()> {
    let ctx = app_context().await?;
    let flow = AuthFlow::new(AuthClient::new(&ctx.config.server_url), ctx.session.clone());

    flow.register(name, email, password).await?;

    println!("{} Account created. You can now sign in.", "✓".green());
    Ok(())
}

pub async fn logout() -> Result<()> {
    let ctx = app_context().await?;
    let flow = AuthFlow::new(AuthClient::new(&ctx.config.server_url), ctx.session.clone());

    flow.sign_out().await?;

    println!("{} Signed out; stored credentials removed.", "✓".green());
    Ok(())
}

pub async fn whoami() -> Result<()> {
    let ctx = app_context().await?;
    let session = require_session(&ctx).await?;

    println!("user id:  {}", session.id);
    println!("role:     {} (role id {})", session.role_type, session.role_id);
    Ok(())
}

//! Maps one CLI command onto an [`AppContext`] and renders the result.

use crate::commands::Commands;
use crate::error::Result as CliErrorResult;

use std::time::Duration;

use airsig_core::{AirsigError, Page, REQUIRED_SIGNATURES};
use airsig_session::{AppContext, EnrollmentStage};
use log::debug;
use serde_json::{Value, json};

pub async fn execute(context: &mut AppContext, command: Commands) -> CliErrorResult<Value> {
    debug!("Executing {command:?}");

    match command {
        Commands::Register {
            username,
            email,
            password,
            confirm_password,
        } => {
            let account = context.register(&username, &email, &password, &confirm_password)?;
            Ok(json!({
                "username": account.username,
                "email": account.email,
                "created_at": account.created_at,
                "authenticated": true,
            }))
        }

        Commands::Login {
            identifier,
            password,
        } => {
            let account = context.login(&identifier, &password)?;
            Ok(json!({
                "username": account.username,
                "last_login": account.last_login,
                "enrollment_complete": account.enrollment_complete,
            }))
        }

        Commands::Logout => {
            let previous = context.logout();
            Ok(json!({ "logged_out": previous }))
        }

        Commands::Navigate { page } => {
            let page: Page = page.parse()?;
            let navigation = context.navigate(page);
            Ok(serde_json::to_value(&navigation)?)
        }

        Commands::Enroll { takes, hold_ms } => {
            enroll(context, takes, Duration::from_millis(hold_ms)).await
        }

        Commands::Authenticate => {
            open_page(context, Page::AuthTest)?;
            let result = context.authenticate().await?;
            Ok(serde_json::to_value(&result)?)
        }

        Commands::Dashboard => {
            open_page(context, Page::Dashboard)?;
            match context.dashboard() {
                Some(snapshot) => Ok(serde_json::to_value(snapshot)?),
                None => Err(AirsigError::precondition("Log in to view the dashboard").into()),
            }
        }

        Commands::Status => Ok(status(context)),
    }
}

async fn enroll(
    context: &mut AppContext,
    takes: Option<usize>,
    hold: Duration,
) -> CliErrorResult<Value> {
    open_page(context, Page::Enrollment)?;

    let mut saved = 0;
    if context.enrollment_stage() != Some(EnrollmentStage::Complete) {
        context.start_camera().await?;

        let remaining = context
            .current_account()
            .map(|account| account.signatures_remaining())
            .unwrap_or(REQUIRED_SIGNATURES);
        let target = takes.unwrap_or(remaining).min(remaining);

        for _ in 0..target {
            context.start_recording().await?;
            tokio::time::sleep(hold).await;
            context.stop_recording().await?;
            context.save_recording()?;
            saved += 1;
        }

        // Done for this run either way
        context.navigate(Page::Home);
    }

    let account = context.current_account();
    Ok(json!({
        "saved": saved,
        "signature_count": account.map(|a| a.signature_count()),
        "required": REQUIRED_SIGNATURES,
        "enrollment_complete": account.is_some_and(|a| a.enrollment_complete),
    }))
}

/// Navigate to `page`, failing if a guard redirected elsewhere.
fn open_page(context: &mut AppContext, page: Page) -> CliErrorResult<()> {
    let navigation = context.navigate(page);
    if navigation.page == page {
        return Ok(());
    }

    let message = match navigation.page {
        Page::Login => format!("Log in before opening {page}"),
        Page::Enrollment => "Complete enrollment before testing authentication".to_string(),
        other => format!("Cannot open {page} (redirected to {other})"),
    };
    Err(AirsigError::precondition(message).into())
}

fn status(context: &AppContext) -> Value {
    let account = context.current_account();
    json!({
        "authenticated": context.is_authenticated(),
        "username": account.map(|a| a.username.clone()),
        "signature_count": account.map(|a| a.signature_count()),
        "required": REQUIRED_SIGNATURES,
        "enrollment_complete": account.is_some_and(|a| a.enrollment_complete),
        "accounts": context.directory().len(),
    })
}

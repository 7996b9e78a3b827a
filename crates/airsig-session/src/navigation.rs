//! Page routing with access guards.
//!
//! Guards are re-applied to each redirect target until none fires:
//!
//! | page        | guard                        | redirect     |
//! |-------------|------------------------------|--------------|
//! | `dashboard` | not authenticated            | `login`      |
//! | `login`     | authenticated                | `dashboard`  |
//! | `enrollment`| not authenticated            | `login`      |
//! | `auth-test` | enrollment not complete      | `enrollment` |

use airsig_core::{Account, Page};
use log::debug;
use serde::Serialize;

/// What the router needs to know about the current context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationContext {
    pub current: Page,
    pub authenticated: bool,
    pub enrollment_complete: bool,
}

impl NavigationContext {
    pub fn new(current: Page, account: Option<&Account>) -> Self {
        Self {
            current,
            authenticated: account.is_some(),
            enrollment_complete: account.is_some_and(|a| a.enrollment_complete),
        }
    }
}

/// Side effects the caller applies after a navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageEffect {
    /// Leaving a page that may hold the camera
    ReleaseCamera,
    RefreshDashboard,
    ResetEnrollment,
    ResetAuthResult,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigation {
    pub requested: Page,
    /// Page actually shown
    pub page: Page,
    /// Pages a guard redirected away from, in order
    pub redirects: Vec<Page>,
    pub effects: Vec<PageEffect>,
}

impl Navigation {
    pub fn was_redirected(&self) -> bool {
        !self.redirects.is_empty()
    }
}

fn guard(ctx: &NavigationContext, page: Page) -> Option<Page> {
    match page {
        Page::Dashboard | Page::Enrollment if !ctx.authenticated => Some(Page::Login),
        Page::Login if ctx.authenticated => Some(Page::Dashboard),
        Page::AuthTest if !ctx.authenticated || !ctx.enrollment_complete => Some(Page::Enrollment),
        _ => None,
    }
}

/// Resolve `requested` against the guards and list the effects to apply.
pub fn resolve(ctx: &NavigationContext, requested: Page) -> Navigation {
    let mut page = requested;
    let mut redirects = Vec::new();

    while let Some(next) = guard(ctx, page) {
        if redirects.len() >= Page::ALL.len() {
            debug!("Redirect chain from {requested} did not settle, stopping at {page}");
            break;
        }
        redirects.push(page);
        page = next;
    }

    let mut effects = Vec::new();
    if ctx.current.uses_camera() && ctx.current != page {
        effects.push(PageEffect::ReleaseCamera);
    }
    match page {
        Page::Dashboard => effects.push(PageEffect::RefreshDashboard),
        Page::Enrollment => effects.push(PageEffect::ResetEnrollment),
        Page::AuthTest => effects.push(PageEffect::ResetAuthResult),
        Page::Home | Page::Login | Page::Register => {}
    }

    if !redirects.is_empty() {
        debug!("Navigation to {requested} redirected to {page}");
    }

    Navigation {
        requested,
        page,
        redirects,
        effects,
    }
}

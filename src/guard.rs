//! Navigation gate: decides whether each view transition may proceed.
//!
//! SYSTEM CONTEXT
//! ==============
//! The router adapter builds one [`NavigationRequest`] per attempted
//! transition and awaits [`Gate::evaluate`] for its decision. The gate reads
//! the session token but never writes it.
//!
//! DESIGN
//! ======
//! Evaluation is split into a synchronous [`Gate::assess`] and an async
//! wrapper. Assessment either decides outright or asks for one deferred
//! recheck. The recheck covers a single race: login just navigated away from
//! the login view but its token write has not landed yet. It fires only for
//! requests whose origin is the login view, and never more than once.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::config::GateConfig;
use crate::routes::{self, path_of};
use crate::state::session::{SessionReader, TokenStore};
use crate::util::delay::Delay;

/// A proposed transition between views. Consumed by a single evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationRequest {
    /// Full destination path, query included.
    pub destination: String,
    pub requires_auth: bool,
    /// Path of the view the transition starts from.
    pub origin_path: String,
}

impl NavigationRequest {
    pub fn new(destination: impl Into<String>, requires_auth: bool, origin_path: impl Into<String>) -> Self {
        Self { destination: destination.into(), requires_auth, origin_path: origin_path.into() }
    }

    /// Build a request whose `requires_auth` flag comes from the route table.
    pub fn for_destination(destination: &str, origin_path: &str) -> Self {
        Self::new(destination, routes::requires_auth(destination), origin_path)
    }
}

/// The gate's resolution of one request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigationDecision {
    /// Let the transition through unchanged.
    Proceed,
    /// Send the user to `target`, optionally carrying the original destination.
    RedirectTo { target: String, redirect: Option<String> },
}

impl NavigationDecision {
    /// Location to navigate to, with the preserved destination as a query
    /// parameter. `None` for [`NavigationDecision::Proceed`].
    pub fn href(&self, config: &GateConfig) -> Option<String> {
        match self {
            Self::Proceed => None,
            Self::RedirectTo { target, redirect: None } => Some(target.clone()),
            Self::RedirectTo { target, redirect: Some(original) } => {
                let query = url::form_urlencoded::Serializer::new(String::new())
                    .append_pair(&config.redirect_param, original)
                    .finish();
                Some(format!("{target}?{query}"))
            }
        }
    }
}

/// Outcome of the synchronous evaluation step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Assessment {
    Decided(NavigationDecision),
    /// Wait out the recheck delay, then call [`Gate::settle_recheck`].
    PendingRecheck,
}

#[derive(Clone, Debug, Default)]
pub struct Gate {
    config: GateConfig,
}

impl Gate {
    pub fn new(config: GateConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    /// Decide a request from the currently observed auth state.
    pub fn assess(&self, request: &NavigationRequest, authenticated: bool) -> Assessment {
        if request.requires_auth {
            if authenticated {
                return Assessment::Decided(NavigationDecision::Proceed);
            }
            if path_of(&request.origin_path) == self.config.login_path {
                return Assessment::PendingRecheck;
            }
            return Assessment::Decided(self.redirect_to_login(request));
        }

        if authenticated && self.config.is_auth_page(path_of(&request.destination)) {
            return Assessment::Decided(NavigationDecision::RedirectTo {
                target: self.config.home_path.clone(),
                redirect: None,
            });
        }

        Assessment::Decided(NavigationDecision::Proceed)
    }

    /// Resolve a pending recheck from the auth state observed after the delay.
    pub fn settle_recheck(&self, request: &NavigationRequest, authenticated: bool) -> NavigationDecision {
        if authenticated {
            NavigationDecision::Proceed
        } else {
            self.redirect_to_login(request)
        }
    }

    /// Evaluate a request to exactly one decision.
    ///
    /// Suspends at most once, for `recheck_delay`, and only when the request
    /// follows the login view while no token is committed yet.
    pub async fn evaluate<S, D>(
        &self,
        request: NavigationRequest,
        session: &SessionReader<S>,
        delay: &D,
    ) -> NavigationDecision
    where
        S: TokenStore,
        D: Delay,
    {
        let decision = match self.assess(&request, session.is_authenticated()) {
            Assessment::Decided(decision) => decision,
            Assessment::PendingRecheck => {
                log::debug!(
                    "gate: {} follows login without a token; rechecking in {:?}",
                    request.destination,
                    self.config.recheck_delay
                );
                delay.sleep(self.config.recheck_delay).await;
                self.settle_recheck(&request, session.is_authenticated())
            }
        };

        match &decision {
            NavigationDecision::Proceed => {
                log::debug!("gate: proceed to {}", request.destination);
            }
            NavigationDecision::RedirectTo { target, redirect: Some(original) } => {
                log::info!("gate: {original} requires login; redirecting to {target}");
            }
            NavigationDecision::RedirectTo { target, redirect: None } => {
                log::debug!("gate: {} redirected to {target}", request.destination);
            }
        }
        decision
    }

    fn redirect_to_login(&self, request: &NavigationRequest) -> NavigationDecision {
        NavigationDecision::RedirectTo {
            target: self.config.login_path.clone(),
            redirect: Some(request.destination.clone()),
        }
    }
}

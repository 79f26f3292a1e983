use aff_api::{AffiliateClient, PostalClient};
use aff_auth::{AuthError, HttpAuthApi, JsonClient, Outcome, SessionManager, SessionStore};
use aff_config::AffConfig;
use aff_core::{Session, View};

use crate::adapter::CliAdapter;
use crate::bootstrap;
use crate::cli::GlobalFlags;

pub type Manager = SessionManager<Box<dyn SessionStore>, HttpAuthApi>;

/// Everything a command handler needs, built once per invocation.
pub struct AppContext {
    pub config: AffConfig,
    pub manager: Manager,
    pub client: AffiliateClient,
    pub postal: PostalClient,
    pub adapter: CliAdapter,
}

impl AppContext {
    pub fn init(config: AffConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let api_url = config.api.normalized_base_url()?;
        let http = JsonClient::new(&api_url, config.api.timeout()?)?;

        let postal_url = config.postal.normalized_base_url()?;
        let postal = PostalClient::new(&postal_url, config.postal.timeout()?)?;

        let store = bootstrap::open_store(&config.storage)?;
        let manager = SessionManager::new(store, HttpAuthApi::new(http.clone()));

        Ok(Self {
            client: AffiliateClient::new(http),
            postal,
            manager,
            adapter: CliAdapter::new(flags.quiet),
            config,
        })
    }

    /// Hand an outcome to the adapter. `None` means the command must stop;
    /// the run is then marked failed.
    pub fn settle<T>(&self, outcome: Outcome<T>) -> Option<T> {
        let value = outcome.resolve(&self.adapter);
        if value.is_none() {
            self.adapter.mark_failed();
        }
        value
    }

    /// Follow an operation whose success is "go to this view".
    /// Returns whether it succeeded.
    pub fn follow(&self, result: Result<View, AuthError>) -> bool {
        let succeeded = result.is_ok();
        Outcome::from_navigation(result).resolve(&self.adapter);
        if !succeeded {
            self.adapter.mark_failed();
        }
        succeeded
    }

    /// Guard for protected commands. `None` means the caller must stop: the
    /// login hint was printed and the run is marked failed.
    pub fn guard(&self) -> Option<Session> {
        let session = self.settle(self.manager.require_session().into());
        if session.is_none() {
            eprintln!("afl: not logged in");
        }
        session
    }
}

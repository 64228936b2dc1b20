//! Fetch worker: runs network and storage side effects requested by the
//! UI and reports the results back as [`AppEvent`]s.

use std::sync::mpsc::Sender;

use tokio::sync::mpsc;

use crate::api::{ApiError, StorefrontClient};
use crate::catalog::{CategoryProvider, GroupedPreview, ProductKey};
use crate::session::{Credentials, SessionKeeper};
use crate::ui::events::{AppEvent, ProductOutcome};

/// Requests the UI sends to the worker.
#[derive(Debug)]
pub enum UiCommand {
    Login(Credentials),
    LoadCategories,
    LoadProducts { limit: usize },
    LoadPreview { limit: usize, per_category: usize },
    LoadProduct { key: ProductKey },
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Capacity of the command channel. Commands are small and the worker
/// spawns a task per command, so this only bounds bursts of key presses.
pub const COMMAND_BUFFER: usize = 32;

#[derive(Clone)]
pub struct Worker {
    client: StorefrontClient,
    categories: CategoryProvider,
    sessions: SessionKeeper,
    events: Sender<AppEvent>,
}

impl Worker {
    pub fn new(
        client: StorefrontClient,
        categories: CategoryProvider,
        sessions: SessionKeeper,
        events: Sender<AppEvent>,
    ) -> Self {
        Self {
            client,
            categories,
            sessions,
            events,
        }
    }

    /// Serves commands until every sender is dropped. Each command runs in
    /// its own task; results arrive in completion order.
    pub async fn run(self, mut receiver: mpsc::Receiver<UiCommand>) {
        while let Some(command) = receiver.recv().await {
            let worker = self.clone();
            tokio::spawn(async move { worker.handle(command).await });
        }
        tracing::debug!("Command channel closed; worker stopping");
    }

    pub async fn handle(&self, command: UiCommand) {
        let event = match command {
            UiCommand::Login(credentials) => self.login(credentials).await,
            UiCommand::LoadCategories => {
                self.categories.load(&self.client).await;
                AppEvent::CategoriesReady
            }
            UiCommand::LoadProducts { limit } => AppEvent::ProductsLoaded(
                self.client
                    .products(limit)
                    .await
                    .map_err(|err| report("products", &err)),
            ),
            UiCommand::LoadPreview {
                limit,
                per_category,
            } => AppEvent::PreviewLoaded(
                self.client
                    .products(limit)
                    .await
                    .map(|products| GroupedPreview::from_products(products, per_category))
                    .map_err(|err| report("preview", &err)),
            ),
            UiCommand::LoadProduct { key } => {
                let outcome = match self.client.product(&key).await {
                    Ok(product) => ProductOutcome::Found(product),
                    Err(err) if err.is_not_found() => {
                        tracing::info!(%key, "Product not found");
                        ProductOutcome::NotFound
                    }
                    Err(err) => ProductOutcome::Failed(report("product", &err)),
                };
                AppEvent::ProductLoaded { key, outcome }
            }
        };

        if self.events.send(event).is_err() {
            tracing::trace!("UI event receiver gone; dropping result");
        }
    }

    async fn login(&self, credentials: Credentials) -> AppEvent {
        match self.client.login(&credentials).await {
            Ok(session) => {
                if let Err(err) = self.sessions.save(&session) {
                    // The user stays signed in for this run.
                    tracing::warn!(error = %err, "Failed to persist session");
                }
                AppEvent::LoginSucceeded(session)
            }
            Err(err) => AppEvent::LoginFailed(report("login", &err)),
        }
    }
}

fn report(operation: &'static str, err: &ApiError) -> String {
    tracing::warn!(
        operation,
        error_type = err.error_type(),
        error = %err,
        "Request failed"
    );
    err.user_message().to_string()
}

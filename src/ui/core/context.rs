use crate::api::Api;
use crate::dialog::DialogCoordinator;
use crate::logger::Logger;
use crate::session::SessionContext;

/// Services shared by the UI and its background operations.
#[derive(Clone)]
pub struct AppContext {
    pub api: Api,
    pub session: SessionContext,
    pub dialogs: DialogCoordinator,
    pub logger: Logger,
}

impl AppContext {
    pub fn new(base_url: &str, session: SessionContext, dialogs: DialogCoordinator, logger: Logger) -> Self {
        Self {
            api: Api::new(base_url, session.clone()),
            session,
            dialogs,
            logger,
        }
    }
}

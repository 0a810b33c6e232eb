use std::sync::Arc;

use twilight_http::Client;
use twilight_model::id::{Id, marker::UserMarker};
use twilight_standby::Standby;

use rawi_lookup::BiographyClient;

/// Shared application context passed into command handlers.
///
/// Cheap to clone because it only stores reference-counted shared state.
#[derive(Clone)]
pub struct Context {
    pub http: Arc<Client>,
    pub standby: Arc<Standby>,
    pub lookup: BiographyClient,
    pub bot_user_id: Id<UserMarker>,
}

impl Context {
    /// Create a new application context.
    pub fn new(
        http: Arc<Client>,
        standby: Arc<Standby>,
        lookup: BiographyClient,
        bot_user_id: Id<UserMarker>,
    ) -> Self {
        Self {
            http,
            standby,
            lookup,
            bot_user_id,
        }
    }
}

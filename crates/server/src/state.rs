use std::sync::Arc;

use models::property::Property;
use service::{aggregator::AggregatorClient, file::review_store::ReviewStore};

/// Shared application state handed to every handler. The property catalog
/// is fixed for the process lifetime; moderation state lives in the store.
#[derive(Clone)]
pub struct ServerState {
    pub reviews: Arc<ReviewStore>,
    pub properties: Arc<Vec<Property>>,
    pub aggregator: Arc<AggregatorClient>,
}

use salvo::async_trait;
use std::sync::Arc;

use crate::error::AppResult;
use identifini_core::error::CoreError;
use identifini_db::db::CardRepository;

pub type SharedCardRepository = Arc<dyn CardRepository>;

pub struct CardRepositoryHandler<T: CardRepository + Clone> {
    pub repository: T,
}

#[async_trait]
impl<T: CardRepository + Clone + 'static> salvo::Handler for CardRepositoryHandler<T> {
    #[tracing::instrument(skip(self, _req, depot, _res, _ctrl))]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        let repository: SharedCardRepository = Arc::new(self.repository.clone());
        depot.inject(repository);
    }
}

/// ## Summary
/// Retrieves the card repository from the depot.
///
/// ## Errors
/// Returns an error if the repository is not found in the depot.
pub fn get_cards_from_depot(depot: &salvo::Depot) -> AppResult<SharedCardRepository> {
    depot
        .obtain::<SharedCardRepository>()
        .cloned()
        .map_err(|_err| CoreError::InvariantViolation("Card repository not found in depot").into())
}

use crate::domain::entities::ErrorView;
use crate::domain::ports::RequestIdSource;

// Builds the error page model for one request.
pub struct BuildErrorViewUseCase<R> {
    pub request_ids: R,
}

impl<R> BuildErrorViewUseCase<R>
where
    R: RequestIdSource,
{
    // A supplied header wins even when empty; only a missing one is minted.
    pub fn execute(&self, header: Option<String>) -> ErrorView {
        let request_id = header.unwrap_or_else(|| self.request_ids.next_id());
        ErrorView::new(Some(request_id))
    }
}

//! Use cases over the seeded in-memory stores, with no latency.

use photofeed_application::{FeedUseCase, Session, SessionUseCase, SimulatedLatency};
use photofeed_infrastructure::{
    InMemoryIdentityRepository, InMemoryLikeRepository, InMemoryPostRepository, system_ports,
};
use std::sync::Arc;

pub(crate) fn seeded_use_cases() -> (Arc<SessionUseCase>, Arc<FeedUseCase>) {
    let session = Session::new();
    let system = system_ports();
    let identities = Arc::new(InMemoryIdentityRepository::seeded());

    let sessions = SessionUseCase::new(identities.clone(), session.clone(), system.clone())
        .with_latency(SimulatedLatency::none());
    let feed = FeedUseCase::new(
        Arc::new(InMemoryPostRepository::seeded()),
        Arc::new(InMemoryLikeRepository::new()),
        identities,
        session,
        system,
    )
    .with_latency(SimulatedLatency::none());

    (Arc::new(sessions), Arc::new(feed))
}

use sqlx::PgPool;

use crate::error::Result;
use crate::models::{Festival, FestivalEvent};
use crate::repository::event::EventRepository;
use crate::repository::festival::FestivalRepository;

/// Snapshot of the globally active festival and its active event.
///
/// Derived fresh on every call rather than cached: the original system
/// learned the hard way that caching a failed resolution serves a stale
/// "none" after the identity changes.
#[derive(Debug, Clone)]
pub struct ActiveContext {
    pub festival: Option<Festival>,
    pub event: Option<FestivalEvent>,
}

/// Resolve the active festival, then the active event derived from it.
/// An empty read at either step yields `None` for that step and everything
/// downstream of it.
pub async fn active_context(pool: &PgPool) -> Result<ActiveContext> {
    let festival = FestivalRepository::new(pool).find_active().await?;

    let event = match &festival {
        Some(festival) => {
            EventRepository::new(pool)
                .find_active(festival.festival_id)
                .await?
        }
        None => None,
    };

    Ok(ActiveContext { festival, event })
}

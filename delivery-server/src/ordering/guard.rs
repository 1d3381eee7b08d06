//! Creation guard for unique entities
//!
//! Every create path goes through [`create_if_absent`]: look the
//! uniqueness key up first, refuse with a kind-specific conflict error
//! if it is taken, otherwise run the save exactly once. The storage
//! layer keeps a UNIQUE index per key as the backstop for the
//! check-then-act window.

use std::future::Future;

use shared::error::AppResult;

use super::error::{EntityKind, OrderingError};

/// Create an entity only if its uniqueness key is not already taken.
///
/// `lookup` resolves the key to an existing record; `save` persists the
/// candidate. If the lookup finds a record, `save` is never called and
/// the candidate is discarded.
pub async fn create_if_absent<T, L, LFut, S, SFut>(
    kind: EntityKind,
    key: &str,
    lookup: L,
    candidate: T,
    save: S,
) -> AppResult<T>
where
    L: FnOnce() -> LFut,
    LFut: Future<Output = AppResult<Option<T>>>,
    S: FnOnce(T) -> SFut,
    SFut: Future<Output = AppResult<T>>,
{
    if lookup().await?.is_some() {
        return Err(OrderingError::AlreadyExists {
            kind,
            key: key.to_string(),
        }
        .into());
    }
    save(candidate).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;
    use std::cell::Cell;

    #[tokio::test]
    async fn test_absent_key_saves_once() {
        let saves = Cell::new(0);
        let saves = &saves;

        let created = create_if_absent(
            EntityKind::City,
            "Madrid",
            || async { Ok(None) },
            "candidate",
            |candidate| async move {
                saves.set(saves.get() + 1);
                Ok(candidate)
            },
        )
        .await
        .unwrap();

        assert_eq!(created, "candidate");
        assert_eq!(saves.get(), 1);
    }

    #[tokio::test]
    async fn test_present_key_never_saves() {
        let saves = Cell::new(0);
        let saves = &saves;

        let err = create_if_absent(
            EntityKind::City,
            "Madrid",
            || async { Ok(Some("existing")) },
            "candidate",
            |candidate| async move {
                saves.set(saves.get() + 1);
                Ok(candidate)
            },
        )
        .await
        .unwrap_err();

        assert_eq!(err.code, ErrorCode::CityNameExists);
        assert_eq!(err.message, "City 'Madrid' already exists in the db");
        assert_eq!(saves.get(), 0);
    }

    #[tokio::test]
    async fn test_lookup_failure_propagates() {
        let saves = Cell::new(0);
        let saves = &saves;

        let err = create_if_absent(
            EntityKind::Role,
            "admin",
            || async { Err(shared::error::AppError::database("connection lost")) },
            "candidate",
            |candidate| async move {
                saves.set(saves.get() + 1);
                Ok(candidate)
            },
        )
        .await
        .unwrap_err();

        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert_eq!(saves.get(), 0);
    }
}

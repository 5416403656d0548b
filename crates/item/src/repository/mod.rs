mod command;
mod query;

use crate::model::item::Item as ItemModel;
use chrono::{NaiveDateTime, TimeDelta};
use shared::utils::{Clock, DynClock};
use std::{collections::BTreeMap, fmt};
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct StoreState {
    // Ids are issued in increasing order, so key order is creation order.
    items: BTreeMap<i64, ItemModel>,
    last_id: i64,
}

/// In-memory item store. The map and the id counter live behind one lock,
/// so every operation is applied as a single step.
pub struct ItemStore {
    state: RwLock<StoreState>,
    clock: DynClock,
}

impl fmt::Debug for ItemStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemStore")
            .field("state", &self.state)
            .field("clock", &"DynClock")
            .finish()
    }
}

impl ItemStore {
    pub fn new(clock: DynClock) -> Self {
        Self {
            state: RwLock::new(StoreState::default()),
            clock,
        }
    }

    fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }
}

/// `updated_at` must move forward on every update, even when the clock
/// has not.
fn next_update_stamp(now: NaiveDateTime, previous: NaiveDateTime) -> NaiveDateTime {
    now.max(previous + TimeDelta::microseconds(1))
}


#[cfg(test)]
mod tests {
    use super::test_support::ManualClock;
    use super::*;
    use crate::{
        abstract_trait::item::repository::{
            ItemCommandRepositoryTrait, ItemQueryRepositoryTrait,
        },
        domain::requests::item::{CreateItemRequest, UpdateItemRequest},
    };
    use shared::{errors::RepositoryError, utils::Clock};
    use std::{collections::HashSet, sync::Arc};

    fn store_with_clock() -> (Arc<ItemStore>, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new());
        let store = Arc::new(ItemStore::new(clock.clone()));
        (store, clock)
    }

    fn create_req(name: &str, price: f64) -> CreateItemRequest {
        CreateItemRequest {
            name: name.to_string(),
            description: None,
            price,
            quantity: 0,
        }
    }

    #[tokio::test]
    async fn widget_lifecycle() {
        let (store, clock) = store_with_clock();

        let created = store.create_item(&create_req("Widget", 9.99)).await.unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(created.quantity, 0);
        assert_eq!(created.description, None);
        assert_eq!(created.created_at, created.updated_at);

        clock.advance(TimeDelta::seconds(1));

        let updated = store
            .update_item(
                1,
                &UpdateItemRequest {
                    name: "Widget2".into(),
                    description: None,
                    price: 12.50,
                    quantity: 3,
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.id, 1);
        assert_eq!(updated.name, "Widget2");
        assert_eq!(updated.price, 12.50);
        assert_eq!(updated.quantity, 3);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > created.updated_at);

        let deleted = store.delete_item(1).await.unwrap();
        assert_eq!(deleted, updated);

        assert_eq!(store.find_by_id(1).await.unwrap(), None);
        assert_eq!(store.delete_item(1).await, Err(RepositoryError::NotFound));
    }

    #[tokio::test]
    async fn ids_are_never_reused_after_delete() {
        let (store, _) = store_with_clock();

        let a = store.create_item(&create_req("a", 1.0)).await.unwrap();
        let b = store.create_item(&create_req("b", 1.0)).await.unwrap();
        store.delete_item(b.id).await.unwrap();
        store.delete_item(a.id).await.unwrap();
        let c = store.create_item(&create_req("c", 1.0)).await.unwrap();

        assert_eq!((a.id, b.id, c.id), (1, 2, 3));
    }

    #[tokio::test]
    async fn find_all_keeps_creation_order_among_survivors() {
        let (store, _) = store_with_clock();

        for name in ["first", "second", "third", "fourth", "fifth"] {
            store.create_item(&create_req(name, 2.0)).await.unwrap();
        }
        store.delete_item(2).await.unwrap();
        store.delete_item(4).await.unwrap();

        let names: Vec<String> = store
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|item| item.name)
            .collect();

        assert_eq!(names, vec!["first", "third", "fifth"]);
        assert_eq!(store.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn update_replaces_fields_wholesale() {
        let (store, _) = store_with_clock();

        let created = store
            .create_item(&CreateItemRequest {
                name: "Lamp".into(),
                description: Some("Desk lamp".into()),
                price: 20.0,
                quantity: 4,
            })
            .await
            .unwrap();

        let updated = store
            .update_item(
                created.id,
                &UpdateItemRequest {
                    name: "Lamp".into(),
                    description: None,
                    price: 18.0,
                    quantity: 0,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.description, None);
        assert_eq!(updated.quantity, 0);
        assert_eq!(updated.price, 18.0);
    }

    #[tokio::test]
    async fn update_moves_updated_at_forward_even_if_clock_stalls() {
        let (store, clock) = store_with_clock();

        let created = store.create_item(&create_req("Stalled", 1.0)).await.unwrap();

        let req = UpdateItemRequest {
            name: "Stalled".into(),
            description: None,
            price: 1.0,
            quantity: 1,
        };
        let first = store.update_item(created.id, &req).await.unwrap();
        assert!(first.updated_at > created.updated_at);

        clock.set(created.created_at - TimeDelta::hours(1));
        let second = store.update_item(created.id, &req).await.unwrap();
        assert!(second.updated_at > first.updated_at);
        assert!(second.created_at <= second.updated_at);
    }

    #[tokio::test]
    async fn missing_ids_are_not_found() {
        let (store, _) = store_with_clock();

        let req = UpdateItemRequest {
            name: "ghost".into(),
            description: None,
            price: 0.0,
            quantity: 0,
        };

        assert_eq!(store.find_by_id(42).await.unwrap(), None);
        assert_eq!(
            store.update_item(42, &req).await,
            Err(RepositoryError::NotFound)
        );
        assert_eq!(store.delete_item(42).await, Err(RepositoryError::NotFound));
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn accepts_unvalidated_input() {
        let (store, _) = store_with_clock();

        let item = store
            .create_item(&CreateItemRequest {
                name: String::new(),
                description: None,
                price: -5.0,
                quantity: -2,
            })
            .await
            .unwrap();

        assert_eq!(item.name, "");
        assert_eq!(item.price, -5.0);
        assert_eq!(item.quantity, -2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_creates_get_distinct_ids() {
        let (store, _) = store_with_clock();

        let handles: Vec<_> = (0..64)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    store
                        .create_item(&create_req(&format!("item-{i}"), 1.0))
                        .await
                        .unwrap()
                        .id
                })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            ids.insert(handle.await.unwrap());
        }

        assert_eq!(ids.len(), 64);
        assert_eq!(ids.iter().copied().max(), Some(64));
        assert_eq!(store.count().await.unwrap(), 64);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn delete_racing_update_removes_one_consistent_record() {
        let (store, _) = store_with_clock();

        let update = UpdateItemRequest {
            name: "raced".into(),
            description: Some("after".into()),
            price: 2.0,
            quantity: 9,
        };

        for round in 0..50 {
            let original = store
                .create_item(&create_req(&format!("round-{round}"), 1.0))
                .await
                .unwrap();
            let id = original.id;

            let updater = {
                let store = store.clone();
                let update = update.clone();
                tokio::spawn(async move { store.update_item(id, &update).await })
            };
            let deleter = {
                let store = store.clone();
                tokio::spawn(async move { store.delete_item(id).await })
            };

            let updated = updater.await.unwrap();
            let deleted = deleter.await.unwrap().expect("delete always finds the item");

            match updated {
                // update ran first, so the delete removed the replaced record
                Ok(updated) => assert_eq!(deleted, updated),
                Err(err) => {
                    assert_eq!(err, RepositoryError::NotFound);
                    assert_eq!(deleted, original);
                }
            }

            assert_eq!(store.find_by_id(id).await.unwrap(), None);
        }

        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn delete_racing_lookup_sees_whole_record_or_nothing() {
        let (store, _) = store_with_clock();

        for round in 0..50 {
            let original = store
                .create_item(&create_req(&format!("round-{round}"), 1.0))
                .await
                .unwrap();
            let id = original.id;

            let reader = {
                let store = store.clone();
                tokio::spawn(async move { store.find_by_id(id).await })
            };
            let deleter = {
                let store = store.clone();
                tokio::spawn(async move { store.delete_item(id).await })
            };

            let seen = reader.await.unwrap().unwrap();
            let deleted = deleter.await.unwrap().expect("delete always finds the item");

            assert_eq!(deleted, original);
            if let Some(seen) = seen {
                assert_eq!(seen, original);
            }

            assert_eq!(store.find_by_id(id).await.unwrap(), None);
        }
    }

    #[test]
    fn next_update_stamp_prefers_the_later_clock_reading() {
        let clock = ManualClock::new();
        let base = clock.now();
        let later = base + TimeDelta::seconds(3);

        assert_eq!(next_update_stamp(later, base), later);
        assert_eq!(
            next_update_stamp(base, base),
            base + TimeDelta::microseconds(1)
        );
    }
}

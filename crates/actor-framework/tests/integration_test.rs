use actor_framework::{ActorEntity, FrameworkError, ResourceActor};
use async_trait::async_trait;

// --- Test Entity ---

/// A rack holds bins; bins are addressable through the rack.
#[derive(Clone, Debug, PartialEq)]
struct Rack {
    id: String,
    label: String,
    count: i32,
    bins: Vec<Rack>,
}

#[derive(Debug)]
struct Relabel {
    label: Option<String>,
}

#[derive(Debug)]
enum RackAction {
    Add(i32),
}

#[derive(Debug, thiserror::Error, PartialEq)]
enum RackError {
    #[error("label must not be empty")]
    EmptyLabel,
    #[error("racks holding bins cannot be counted directly")]
    NotABin,
}

#[async_trait]
impl ActorEntity for Rack {
    type Id = String;
    type Update = Relabel;
    type Action = RackAction;
    type ActionResult = i32;
    type Context = ();
    type Error = RackError;

    fn id(&self) -> &String {
        &self.id
    }

    fn find(&self, id: &String) -> Option<&Self> {
        if &self.id == id {
            return Some(self);
        }
        self.bins.iter().find_map(|bin| bin.find(id))
    }

    fn find_mut(&mut self, id: &String) -> Option<&mut Self> {
        if &self.id == id {
            return Some(self);
        }
        self.bins.iter_mut().find_map(|bin| bin.find_mut(id))
    }

    async fn on_create(&mut self, _ctx: &()) -> Result<(), RackError> {
        if self.label.is_empty() {
            return Err(RackError::EmptyLabel);
        }
        Ok(())
    }

    async fn on_update(&mut self, update: Relabel, _ctx: &()) -> Result<(), RackError> {
        if let Some(label) = update.label {
            if label.is_empty() {
                return Err(RackError::EmptyLabel);
            }
            self.label = label;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: RackAction, _ctx: &()) -> Result<i32, RackError> {
        if !self.bins.is_empty() {
            return Err(RackError::NotABin);
        }
        match action {
            RackAction::Add(n) => {
                self.count += n;
                Ok(self.count)
            }
        }
    }
}

fn bin(id: &str, count: i32) -> Rack {
    Rack {
        id: id.to_string(),
        label: id.to_uppercase(),
        count,
        bins: vec![],
    }
}

fn rack(id: &str, bins: Vec<Rack>) -> Rack {
    Rack {
        id: id.to_string(),
        label: id.to_uppercase(),
        count: 0,
        bins,
    }
}

fn seeded() -> Vec<Rack> {
    vec![
        bin("loose", 4),
        rack("north", vec![bin("n1", 10), bin("n2", 20)]),
        bin("tail", 1),
    ]
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    actor_framework::tracing::setup_test_tracing();
    let (actor, client) = ResourceActor::new(10);
    tokio::spawn(actor.run(()));

    // 1. Insert
    let id = client.insert(bin("a", 0)).await.unwrap();
    assert_eq!(id, "a");

    // 2. Action
    let count = client
        .perform_action(id.clone(), RackAction::Add(3))
        .await
        .unwrap();
    assert_eq!(count, 3);

    // 3. Update
    let updated = client
        .update(
            id.clone(),
            Relabel {
                label: Some("Alpha".into()),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.label, "Alpha");
    assert_eq!(updated.count, 3);

    // 4. Delete
    let removed = client.delete(id.clone()).await.unwrap();
    assert_eq!(removed.map(|r| r.label), Some("Alpha".to_string()));
    assert!(client.get(id.clone()).await.unwrap().is_none());

    // Deleting again is a no-op
    assert!(client.delete(id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_list_preserves_insertion_order() {
    let (actor, client) = ResourceActor::<Rack>::new(10);
    tokio::spawn(actor.run(()));

    for id in ["c", "a", "b"] {
        client.insert(bin(id, 0)).await.unwrap();
    }
    client.delete("a".to_string()).await.unwrap();
    client.insert(bin("d", 0)).await.unwrap();

    let ids: Vec<String> = client
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, ["c", "b", "d"]);
}

#[tokio::test]
async fn test_nested_records_are_addressable() {
    let (actor, client) = ResourceActor::with_items(10, seeded());
    tokio::spawn(actor.run(()));

    let n2 = client.get("n2".to_string()).await.unwrap().unwrap();
    assert_eq!(n2.count, 20);

    let count = client
        .perform_action("n2".to_string(), RackAction::Add(-25))
        .await
        .unwrap();
    assert_eq!(count, -5);

    let forest = client.list().await.unwrap();
    assert_eq!(forest[1].bins[1].count, -5);
    assert_eq!(forest[1].bins[0].count, 10);
    assert_eq!(forest[0].count, 4);
    assert_eq!(forest[2].count, 1);
}

#[tokio::test]
async fn test_unknown_id_leaves_store_untouched() {
    let (actor, client) = ResourceActor::with_items(10, seeded());
    tokio::spawn(actor.run(()));

    let result = client
        .perform_action("ghost".to_string(), RackAction::Add(1))
        .await;
    assert!(matches!(result, Err(FrameworkError::NotFound(id)) if id == "ghost"));

    let result = client
        .update("ghost".to_string(), Relabel { label: None })
        .await;
    assert!(matches!(result, Err(FrameworkError::NotFound(_))));

    assert_eq!(client.list().await.unwrap(), seeded());
}

#[tokio::test]
async fn test_hook_errors_are_forwarded_and_state_kept() {
    let (actor, client) = ResourceActor::with_items(10, seeded());
    tokio::spawn(actor.run(()));

    let err = client
        .perform_action("north".to_string(), RackAction::Add(1))
        .await
        .unwrap_err();
    assert_eq!(err.into_entity_error::<RackError>().unwrap(), RackError::NotABin);

    let err = client
        .update(
            "n1".to_string(),
            Relabel {
                label: Some(String::new()),
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.into_entity_error::<RackError>().unwrap(), RackError::EmptyLabel);

    let mut unlabelled = bin("x", 0);
    unlabelled.label.clear();
    let err = client.insert(unlabelled).await.unwrap_err();
    assert!(matches!(err, FrameworkError::EntityError(_)));

    assert_eq!(client.list().await.unwrap(), seeded());
}

#[tokio::test]
async fn test_duplicate_ids_are_rejected_at_any_depth() {
    let (actor, client) = ResourceActor::with_items(10, seeded());
    tokio::spawn(actor.run(()));

    let top = client.insert(bin("loose", 0)).await;
    assert!(matches!(top, Err(FrameworkError::DuplicateId(id)) if id == "loose"));

    let nested = client.insert(bin("n1", 0)).await;
    assert!(matches!(nested, Err(FrameworkError::DuplicateId(_))));

    assert_eq!(client.list().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_delete_is_top_level_only() {
    let (actor, client) = ResourceActor::with_items(10, seeded());
    tokio::spawn(actor.run(()));

    assert!(client.delete("n1".to_string()).await.unwrap().is_none());
    assert_eq!(client.list().await.unwrap(), seeded());

    let removed = client.delete("north".to_string()).await.unwrap().unwrap();
    assert_eq!(removed.bins.len(), 2);
    assert!(client.get("n1".to_string()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_replace_all_and_loading_flag() {
    let (actor, client) = ResourceActor::with_items(10, seeded());
    tokio::spawn(actor.run(()));

    assert!(!client.is_loading().await.unwrap());
    client.set_loading(true).await.unwrap();
    assert!(client.is_loading().await.unwrap());

    client.replace_all(vec![bin("only", 9)]).await.unwrap();
    let all = client.list().await.unwrap();
    assert_eq!(all, vec![bin("only", 9)]);

    // the flag has no effect on the data
    assert!(client.is_loading().await.unwrap());
    client.set_loading(false).await.unwrap();
    assert!(!client.is_loading().await.unwrap());
}

#[tokio::test]
async fn test_client_errors_once_actor_is_gone() {
    let (actor, client) = ResourceActor::<Rack>::new(10);
    drop(actor);

    let result = client.list().await;
    assert!(matches!(result, Err(FrameworkError::ActorClosed)));
}

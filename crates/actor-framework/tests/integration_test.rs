use actor_framework::{ActorEntity, FrameworkError, ResourceActor, ResourceClient};
use async_trait::async_trait;

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Bin {
    id: u32,
    label: String,
    count: u32,
    sealed: bool,
}

#[derive(Debug)]
struct BinCreate {
    label: String,
    count: u32,
}

#[derive(Debug)]
struct BinUpdate {
    count: u32,
}

#[derive(Debug)]
enum BinAction {
    Seal,
}

#[derive(Debug, thiserror::Error)]
enum BinError {
    #[error("Bin is sealed")]
    Sealed,
    #[error("Label must not be empty")]
    EmptyLabel,
}

#[async_trait]
impl ActorEntity for Bin {
    type Id = u32;
    type Create = BinCreate;
    type Update = BinUpdate;
    type Action = BinAction;
    type ActionResult = bool;
    type Context = ();
    type Error = BinError;

    fn from_create_params(id: u32, params: BinCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            label: params.label,
            count: params.count,
            sealed: false,
        })
    }

    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        if self.label.is_empty() {
            return Err(BinError::EmptyLabel);
        }
        Ok(())
    }

    async fn on_update(
        &mut self,
        update: BinUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        if self.sealed {
            return Err(BinError::Sealed);
        }
        self.count = update.count;
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: BinAction,
        _ctx: &Self::Context,
    ) -> Result<bool, Self::Error> {
        match action {
            BinAction::Seal => {
                let changed = !self.sealed;
                self.sealed = true;
                Ok(changed)
            }
        }
    }
}

fn spawn_bins() -> ResourceClient<Bin> {
    let mut next = 0;
    let (actor, client) = ResourceActor::new(10, move || {
        next += 1;
        next
    });
    tokio::spawn(actor.run(()));
    client
}

async fn create_bin(client: &ResourceClient<Bin>, label: &str, count: u32) -> Bin {
    client
        .create(BinCreate {
            label: label.into(),
            count,
        })
        .await
        .unwrap()
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let client = spawn_bins();

    let bin = create_bin(&client, "screws", 3).await;
    assert_eq!(bin.id, 1);
    assert_eq!(bin.count, 3);

    let updated = client.update(bin.id, BinUpdate { count: 9 }).await.unwrap();
    assert_eq!(updated.count, 9);

    let changed = client.perform_action(bin.id, BinAction::Seal).await.unwrap();
    assert!(changed);
    let changed_again = client.perform_action(bin.id, BinAction::Seal).await.unwrap();
    assert!(!changed_again);

    client.delete(bin.id).await.unwrap();
    assert!(client.get(bin.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_on_create_rejection_is_not_stored() {
    let client = spawn_bins();

    let result = client
        .create(BinCreate {
            label: String::new(),
            count: 1,
        })
        .await;
    assert!(matches!(result, Err(FrameworkError::EntityError(_))));

    // The rejected create still consumed id 1.
    assert!(client.get(1).await.unwrap().is_none());
}

#[tokio::test]
async fn test_get_many_skips_unknown_ids_and_keeps_request_order() {
    let client = spawn_bins();
    let a = create_bin(&client, "a", 1).await;
    let b = create_bin(&client, "b", 2).await;

    let found = client.get_many(vec![b.id, 42, a.id]).await.unwrap();
    assert_eq!(found, vec![b, a]);

    let none = client.get_many(Vec::new()).await.unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn test_update_many_commits_every_update() {
    let client = spawn_bins();
    let a = create_bin(&client, "a", 1).await;
    let b = create_bin(&client, "b", 2).await;

    let updated = client
        .update_many(vec![(a.id, BinUpdate { count: 10 }), (b.id, BinUpdate { count: 20 })])
        .await
        .unwrap();
    assert_eq!(updated.len(), 2);

    assert_eq!(client.get(a.id).await.unwrap().unwrap().count, 10);
    assert_eq!(client.get(b.id).await.unwrap().unwrap().count, 20);
}

#[tokio::test]
async fn test_update_many_with_unknown_id_changes_nothing() {
    let client = spawn_bins();
    let a = create_bin(&client, "a", 1).await;

    let result = client
        .update_many(vec![(a.id, BinUpdate { count: 10 }), (99, BinUpdate { count: 0 })])
        .await;
    assert!(matches!(result, Err(FrameworkError::NotFound(id)) if id == "99"));

    assert_eq!(client.get(a.id).await.unwrap().unwrap().count, 1);
}

#[tokio::test]
async fn test_update_many_rolls_back_when_a_hook_fails() {
    let client = spawn_bins();
    let open = create_bin(&client, "open", 1).await;
    let sealed = create_bin(&client, "sealed", 2).await;
    client.perform_action(sealed.id, BinAction::Seal).await.unwrap();

    let result = client
        .update_many(vec![
            (open.id, BinUpdate { count: 10 }),
            (sealed.id, BinUpdate { count: 20 }),
        ])
        .await;
    assert!(matches!(result, Err(FrameworkError::EntityError(_))));

    assert_eq!(client.get(open.id).await.unwrap().unwrap().count, 1);
    assert_eq!(client.get(sealed.id).await.unwrap().unwrap().count, 2);
}

#[tokio::test]
async fn test_closed_actor_reports_actor_closed() {
    let (actor, client) = ResourceActor::<Bin>::new(1, || 0);
    drop(actor);

    let result = client.get(1).await;
    assert!(matches!(result, Err(FrameworkError::ActorClosed)));
}

//! Target management tools.
//!
//! One file per tool, each mapping to a single myshoes API call:
//! - `list`: `list_target`
//! - `get`: `get_target`
//! - `create`: `create_target`
//! - `update`: `update_target`
//! - `delete`: `delete_target`

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

pub use create::{CreateTargetInput, CreateTargetTool};
pub use delete::{DeleteTargetInput, DeleteTargetTool};
pub use get::{GetTargetInput, GetTargetTool};
pub use list::{ListTargetInput, ListTargetTool};
pub use update::{UpdateTargetInput, UpdateTargetTool};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::targets::fake::FakeTargetClient;
    use crate::domains::targets::{ResourceType, Target};
    use crate::domains::tools::definitions::common::result_text;

    const GET_ID: &str = "11111111-1111-4111-8111-111111111111";
    const UPDATE_ID: &str = "22222222-2222-4222-8222-222222222222";
    const DELETE_ID: &str = "33333333-3333-4333-8333-333333333333";

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_calls_do_not_interfere() {
        let client = FakeTargetClient::new()
            .with_target(GET_ID, "octocat/get", ResourceType::Nano)
            .with_target(UPDATE_ID, "octocat/update", ResourceType::Micro)
            .with_target(DELETE_ID, "octocat/delete", ResourceType::Small);

        let get = GetTargetInput {
            target_id: GET_ID.to_string(),
        };
        let update = UpdateTargetInput {
            target_id: UPDATE_ID.to_string(),
            resource_type: Some("xlarge".to_string()),
            provider_url: None,
        };
        let delete = DeleteTargetInput {
            target_id: DELETE_ID.to_string(),
        };

        let (got, updated, deleted) = tokio::join!(
            GetTargetTool::execute(&get, &client),
            UpdateTargetTool::execute(&update, &client),
            DeleteTargetTool::execute(&delete, &client),
        );

        let got: Target = serde_json::from_str(result_text(&got.unwrap())).unwrap();
        assert_eq!(got.id, GET_ID);
        assert_eq!(got.scope, "octocat/get");
        assert_eq!(got.resource_type, ResourceType::Nano);

        let updated: Target = serde_json::from_str(result_text(&updated.unwrap())).unwrap();
        assert_eq!(updated.id, UPDATE_ID);
        assert_eq!(updated.scope, "octocat/update");
        assert_eq!(updated.resource_type, ResourceType::XLarge);

        let deleted = deleted.unwrap();
        let message = result_text(&deleted);
        assert!(message.contains(DELETE_ID));
        assert!(!message.contains(GET_ID) && !message.contains(UPDATE_ID));

        assert!(client.get(GET_ID).is_some());
        assert!(client.get(DELETE_ID).is_none());
    }
}

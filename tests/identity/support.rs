#[path = "support/fakes.rs"]
pub mod fakes;

pub use fakes::{FakePermissionQueryService, FakePermissionRepository, RecordingListener};
pub use fixtures::{
    ALICE, BOB, GHOST, delete_command, get_permission_request, put_command,
    raw_get_permission_request,
};
pub use harness::{
    create_action_harness, create_command_harness, create_query_harness, create_router,
    send_request,
};

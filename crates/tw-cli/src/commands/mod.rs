pub mod check;
pub mod map;
pub mod play;

use tw_fiction::{Session, story};

/// Build a session over the bundled story, mapping configuration errors
/// into the CLI's error channel.
fn load_story() -> Result<Session, String> {
    story::session().map_err(|e| format!("the bundled story failed to load: {e}"))
}

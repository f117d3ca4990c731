pub fn config_loaded(path: &str) -> String {
    format!("Loaded configuration from {path}")
}

pub const STARTING: &str = "Starting cinebot...";

pub fn logged_in(user: &str) -> String {
    format!("Logged in as {user}")
}

pub fn setting_display_name(name: &str) -> String {
    format!("Setting display name to: {name}")
}

pub fn set_display_name_fail(err: &str) -> String {
    format!("Failed to set display name: {err}")
}

pub const SYNC_LOOP_START: &str = "Starting sync loop...";

pub fn sync_loop_fail(err: &str) -> String {
    format!("Sync loop failed: {err}")
}

pub const ANNOUNCE_TIMEOUT: &str =
    "Startup announcement timed out: no joined rooms found after 60s.";

pub fn announce_fail(room: &str, err: &str) -> String {
    format!("Failed to send startup announcement to room {room}: {err}")
}

pub fn invite_received(room_id: &str) -> String {
    format!("💌 Received invite for room {room_id:?}")
}

pub fn invite_join_fail(room_id: &str, err: &str) -> String {
    format!("Failed to join room {room_id}: {err}")
}

pub fn incoming_message(room: &str, sender: &str, body: &str) -> String {
    format!("[{room}]{sender}: \"{body}\"")
}

pub fn route_fail(err: &str) -> String {
    format!("Failed to route message: {err}")
}

pub fn catalog_fail(err: &str) -> String {
    format!("Catalog lookup failed: {err}")
}

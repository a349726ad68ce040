mod admin_panel;
mod broadcast;
mod create_group;
mod logs;

pub use admin_panel::admin_panel;
pub use broadcast::broadcast_email;
pub use create_group::create_group;
pub use logs::download_logs;

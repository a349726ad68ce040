mod admin_panel;
mod create_group;
mod health_check;

pub mod action_name;

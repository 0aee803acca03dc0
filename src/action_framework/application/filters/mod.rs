pub mod disabled_actions_filter;

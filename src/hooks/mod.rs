pub mod use_auto_refresh;

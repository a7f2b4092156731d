// src/ui/elements/popups/mod.rs
pub mod delete_column_popup;

pub use delete_column_popup::show_delete_column_popup;

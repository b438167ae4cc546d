//! Message list components

mod action_menu;
mod code_block;
mod delete_dialog;
mod message_bubble;
mod message_container;

pub use action_menu::ActionMenu;
pub use code_block::CodeBlock;
pub use delete_dialog::DeleteDialog;
pub use message_bubble::MessageBubble;
pub use message_container::MessageContainer;

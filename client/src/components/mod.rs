//! Shell chrome and small presentation components shared by the pages.

pub mod badge;
pub mod empty_state;
pub mod layout;
pub mod notices;
pub mod sidebar;
pub mod stat_card;
pub mod top_nav;

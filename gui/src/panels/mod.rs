mod actions;
mod gun_list;
mod loadout_list;

pub use actions::{Action, ActionsPanel};
pub use gun_list::{GunListEvent, GunListPanel};
pub use loadout_list::LoadoutListPanel;

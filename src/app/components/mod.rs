pub mod icon;
pub mod nav_item;
pub mod navigation_menu;
pub mod sidebar;

pub use icon::Icon;
pub use nav_item::NavItem;
pub use navigation_menu::NavigationMenu;
pub use sidebar::Sidebar;

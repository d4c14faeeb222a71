mod collider_type;
mod character_controller;

pub use self::collider_type::ColliderType;
pub use self::character_controller::CharacterControllerType;

pub use super::app_user::Entity as AppUser;
pub use super::delivery_order::Entity as DeliveryOrder;
pub use super::driver::Entity as Driver;
pub use super::fleet::Entity as Fleet;
pub use super::manager::Entity as Manager;
pub use super::vehicle::Entity as Vehicle;
pub use super::vehicle_exception::Entity as VehicleException;

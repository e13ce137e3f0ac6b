//! CLI command implementations.
//!
//! - `init`: Create the data directory and database
//! - `add_vehicle` / `list_vehicles`: Vehicle registry
//! - `add_availability` / `remove_availability`: Change availability
//! - `list_availability`: Show stored or merged availability
//! - `free_windows`: Availability minus booked spans
//! - `add_event`: Record a scheduled pickup or dropoff
//! - `insertions`: Where a request fits into a tour
//! - `completions`: Shell completion scripts

pub mod add_availability;
pub mod add_event;
pub mod add_vehicle;
pub mod completions;
pub mod free_windows;
pub mod init;
pub mod insertions;
pub mod list_availability;
pub mod list_vehicles;
pub mod remove_availability;

pub use add_availability::AddAvailabilityCommand;
pub use add_event::AddEventCommand;
pub use add_vehicle::AddVehicleCommand;
pub use completions::CompletionsCommand;
pub use free_windows::FreeWindowsCommand;
pub use init::InitCommand;
pub use insertions::InsertionsCommand;
pub use list_availability::ListAvailabilityCommand;
pub use list_vehicles::ListVehiclesCommand;
pub use remove_availability::RemoveAvailabilityCommand;

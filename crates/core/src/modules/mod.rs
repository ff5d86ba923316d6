//! Calculation modules - the three stateless strategies and their registry.

mod basic_module;
mod engineering_module;
mod finance_module;
mod module_registry;
mod module_traits;

pub use basic_module::BasicModule;
pub use engineering_module::{EngineeringModule, Trajectory, GRAVITY};
pub use finance_module::FinanceModule;
pub use module_registry::ModuleRegistry;
pub use module_traits::{CalcModuleTrait, ModuleKind};

use std::sync::Arc;

use crate::errors::Result;
use crate::settings::CalculatorSettings;

use super::basic_module::BasicModule;
use super::engineering_module::EngineeringModule;
use super::finance_module::FinanceModule;
use super::module_traits::{CalcModuleTrait, ModuleKind};

/// The fixed set of calculation modules, built once at startup.
#[derive(Clone)]
pub struct ModuleRegistry {
    basic: Arc<dyn CalcModuleTrait>,
    finance: Arc<dyn CalcModuleTrait>,
    engineering: Arc<dyn CalcModuleTrait>,
}

impl ModuleRegistry {
    pub fn new(settings: &CalculatorSettings) -> Self {
        Self {
            basic: Arc::new(BasicModule::new()),
            finance: Arc::new(FinanceModule::new(settings.currency.clone())),
            engineering: Arc::new(EngineeringModule::new(settings.distance_unit.clone())),
        }
    }

    pub fn get(&self, kind: ModuleKind) -> Arc<dyn CalcModuleTrait> {
        match kind {
            ModuleKind::Basic => self.basic.clone(),
            ModuleKind::Finance => self.finance.clone(),
            ModuleKind::Engineering => self.engineering.clone(),
        }
    }

    /// Looks a module up by key or display name.
    pub fn resolve(&self, name: &str) -> Result<Arc<dyn CalcModuleTrait>> {
        let kind: ModuleKind = name.parse()?;
        Ok(self.get(kind))
    }

    pub fn kinds(&self) -> Vec<ModuleKind> {
        ModuleKind::ALL
            .into_iter()
            .map(|kind| self.get(kind).kind())
            .collect()
    }
}

impl Default for ModuleRegistry {
    fn default() -> Self {
        Self::new(&CalculatorSettings::default())
    }
}

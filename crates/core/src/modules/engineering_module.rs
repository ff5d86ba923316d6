use crate::errors::CalculationError;

use super::module_traits::{parse_fields, CalcModuleTrait, ModuleKind};

/// Gravitational acceleration, m/s².
pub const GRAVITY: f64 = 9.81;

const USAGE: &str = "Speed, Angle (e.g. 50, 45)";

/// Range and peak height of a projectile launched from ground level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trajectory {
    pub range: f64,
    pub max_height: f64,
}

impl Trajectory {
    pub fn compute(speed: f64, angle_deg: f64) -> Self {
        let angle = angle_deg.to_radians();
        let speed_sq = speed.powi(2);
        Self {
            range: speed_sq * (2.0 * angle).sin() / GRAVITY,
            max_height: speed_sq * angle.sin().powi(2) / (2.0 * GRAVITY),
        }
    }
}

/// Projectile ballistics without air resistance.
#[derive(Debug, Clone)]
pub struct EngineeringModule {
    distance_unit: String,
}

impl EngineeringModule {
    pub fn new(distance_unit: impl Into<String>) -> Self {
        Self {
            distance_unit: distance_unit.into(),
        }
    }
}

impl CalcModuleTrait for EngineeringModule {
    fn kind(&self) -> ModuleKind {
        ModuleKind::Engineering
    }

    fn evaluate(&self, input: &str) -> Result<String, CalculationError> {
        let fields = parse_fields(input, 2, USAGE)?;
        let (speed, angle_deg) = (fields[0], fields[1]);

        if angle_deg < 0.0 || angle_deg > 90.0 {
            return Err(CalculationError::AngleOutOfRange(angle_deg));
        }
        // Zero speed is allowed and yields a zero trajectory.
        if speed < 0.0 {
            return Err(CalculationError::NegativeSpeed(speed));
        }

        let trajectory = Trajectory::compute(speed, angle_deg);
        Ok(format!(
            "Range: {:.1} {unit} | Height: {:.1} {unit}",
            trajectory.range,
            trajectory.max_height,
            unit = self.distance_unit
        ))
    }
}

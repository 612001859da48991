//! Параметры BehaviorController + загрузка из RON

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Что делать со state контроллера при повторной активации из пула
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReactivationPolicy {
    /// State, patrol точка и cooldown переживают pool reuse (перерол только статов)
    #[default]
    Preserve,
    /// Сброс: Patrol, без patrol точки, без cooldown
    Reset,
}

/// Параметры AI зомби
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Радиус атаки (метры)
    pub attack_range: f32,
    /// Радиус обзора (метры). Перезаписывается TypeProfile при активации
    pub sight_range: f32,
    /// Максимальный offset patrol точки по X/Z от текущей позиции
    pub patrol_point_range: f32,
    /// Cooldown между атаками (секунды)
    pub time_between_attacks: f32,
    /// Радиус NavMesh snap при валидации patrol точки
    pub patrol_snap_radius: f32,
    /// Patrol точка считается достигнутой ближе этой дистанции
    pub patrol_arrival_distance: f32,
    pub reactivation: ReactivationPolicy,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            attack_range: 2.0,
            sight_range: 10.0,
            patrol_point_range: 10.0,
            time_between_attacks: 1.5,
            patrol_snap_radius: 1.0,
            patrol_arrival_distance: 0.7,
            reactivation: ReactivationPolicy::Preserve,
        }
    }
}

impl ControllerConfig {
    /// Парсит RON и валидирует
    ///
    /// ```ron
    /// (attack_range: 1.5, time_between_attacks: 2.0, reactivation: Reset)
    /// ```
    pub fn from_ron_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_ron_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("attack_range", self.attack_range),
            ("sight_range", self.sight_range),
            ("patrol_snap_radius", self.patrol_snap_radius),
            ("patrol_arrival_distance", self.patrol_arrival_distance),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!("{name} must be positive, got {value}")));
            }
        }

        let non_negative = [
            ("patrol_point_range", self.patrol_point_range),
            ("time_between_attacks", self.time_between_attacks),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!("{name} must be >= 0, got {value}")));
            }
        }

        Ok(())
    }
}

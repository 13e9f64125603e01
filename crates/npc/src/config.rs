//! Agent configuration constants and tunable parameters.
//!
//! [`AgentConfig`] is expressed in physical units (meters, km/h).
//! [`AgentConfig::tuning`] validates it and converts everything to world units
//! once, so the per-tick code never repeats the unit conversion.

use crate::{AgentError, Point, Result};

/// Where the wander branch takes its next target from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WanderMode {
    /// A uniformly random point inside [`WanderBounds`].
    #[default]
    Random,
    /// The next waypoint of the patrol route, cycling.
    Patrol,
}

/// Axis-aligned rectangle random wander targets are drawn from.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WanderBounds {
    pub min: Point,
    pub max: Point,
}

impl WanderBounds {
    pub const fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, point: Point) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

impl Default for WanderBounds {
    fn default() -> Self {
        Self::new(
            Point::new(AgentConfig::DEFAULT_BOUNDS_MIN.0, AgentConfig::DEFAULT_BOUNDS_MIN.1),
            Point::new(AgentConfig::DEFAULT_BOUNDS_MAX.0, AgentConfig::DEFAULT_BOUNDS_MAX.1),
        )
    }
}

/// Tunable parameters of a chasing NPC.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AgentConfig {
    /// World units per meter.
    pub pixels_per_meter: f64,
    /// Movement speed while walking.
    pub run_speed_kmph: f64,
    /// The quarry must be closer than this for chase or flee to trigger.
    pub chase_radius_m: f64,
    /// Approach actions succeed once this close to their goal.
    pub arrive_radius_m: f64,
    /// Fleeing succeeds once the quarry is at least this far away.
    ///
    /// Must not exceed `chase_radius_m`, or fleeing could never complete.
    pub flee_clear_radius_m: f64,
    pub wander: WanderMode,
    pub wander_bounds: WanderBounds,
    pub patrol_route: Vec<Point>,
}

impl AgentConfig {
    /// 10 pixels per 30 cm.
    pub const DEFAULT_PIXELS_PER_METER: f64 = 10.0 / 0.3;
    pub const DEFAULT_RUN_SPEED_KMPH: f64 = 10.0;
    pub const DEFAULT_CHASE_RADIUS_M: f64 = 7.0;
    pub const DEFAULT_ARRIVE_RADIUS_M: f64 = 0.5;
    pub const DEFAULT_FLEE_CLEAR_RADIUS_M: f64 = 7.0;
    pub const DEFAULT_BOUNDS_MIN: (f64, f64) = (100.0, 100.0);
    pub const DEFAULT_BOUNDS_MAX: (f64, f64) = (1100.0, 924.0);
    pub const DEFAULT_PATROL_ROUTE: [(f64, f64); 7] = [
        (43.0, 274.0),
        (1118.0, 274.0),
        (1050.0, 494.0),
        (575.0, 804.0),
        (235.0, 991.0),
        (575.0, 804.0),
        (1050.0, 494.0),
    ];

    pub fn new() -> Self {
        Self {
            pixels_per_meter: Self::DEFAULT_PIXELS_PER_METER,
            run_speed_kmph: Self::DEFAULT_RUN_SPEED_KMPH,
            chase_radius_m: Self::DEFAULT_CHASE_RADIUS_M,
            arrive_radius_m: Self::DEFAULT_ARRIVE_RADIUS_M,
            flee_clear_radius_m: Self::DEFAULT_FLEE_CLEAR_RADIUS_M,
            wander: WanderMode::default(),
            wander_bounds: WanderBounds::default(),
            patrol_route: Self::DEFAULT_PATROL_ROUTE
                .iter()
                .map(|&(x, y)| Point::new(x, y))
                .collect(),
        }
    }

    pub fn with_wander(mut self, wander: WanderMode) -> Self {
        self.wander = wander;
        self
    }

    pub fn with_patrol_route(mut self, route: Vec<Point>) -> Self {
        self.patrol_route = route;
        self
    }

    /// Converts a distance in meters to world units.
    #[inline]
    pub fn meters(&self, meters: f64) -> f64 {
        meters * self.pixels_per_meter
    }

    /// Walking speed in world units per second.
    pub fn run_speed(&self) -> f64 {
        let meters_per_second = self.run_speed_kmph * 1000.0 / 60.0 / 60.0;
        self.meters(meters_per_second)
    }

    /// Checks every field for usable values.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("pixels_per_meter", self.pixels_per_meter),
            ("run_speed_kmph", self.run_speed_kmph),
            ("chase_radius_m", self.chase_radius_m),
            ("arrive_radius_m", self.arrive_radius_m),
            ("flee_clear_radius_m", self.flee_clear_radius_m),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(AgentError::InvalidConfig(format!(
                    "{field} must be positive and finite, got {value}"
                )));
            }
        }

        let WanderBounds { min, max } = self.wander_bounds;
        if !(min.is_finite() && max.is_finite()) || min.cmpgt(max).any() {
            return Err(AgentError::InvalidConfig(format!(
                "wander bounds {min} .. {max} are empty or not finite"
            )));
        }

        if self.flee_clear_radius_m > self.chase_radius_m {
            return Err(AgentError::InvalidConfig(format!(
                "flee_clear_radius_m ({}) must not exceed chase_radius_m ({}): \
                 the flee branch stops being eligible at the chase radius",
                self.flee_clear_radius_m, self.chase_radius_m
            )));
        }

        if let Some(bad) = self.patrol_route.iter().find(|p| !p.is_finite()) {
            return Err(AgentError::InvalidConfig(format!(
                "patrol waypoint {bad} is not finite"
            )));
        }
        if self.wander == WanderMode::Patrol && self.patrol_route.is_empty() {
            return Err(AgentError::EmptyPatrolRoute);
        }

        Ok(())
    }

    /// Validates the config and resolves it into world units.
    pub fn tuning(&self) -> Result<Tuning> {
        self.validate()?;
        Ok(Tuning {
            speed: self.run_speed(),
            chase_radius: self.meters(self.chase_radius_m),
            arrive_radius: self.meters(self.arrive_radius_m),
            flee_clear_radius: self.meters(self.flee_clear_radius_m),
            wander: self.wander,
            wander_bounds: self.wander_bounds,
        })
    }

    /// Load a config from a RON file.
    ///
    /// Missing fields take their default values.
    #[cfg(feature = "serde")]
    pub fn load_from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_ron(&content)
    }

    /// Parse a config from RON text.
    #[cfg(feature = "serde")]
    pub fn from_ron(content: &str) -> Result<Self> {
        let config: Self =
            ron::from_str(content).map_err(|e| AgentError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Config values resolved to world units, captured by the tree's leaves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tuning {
    /// World units per second.
    pub speed: f64,
    pub chase_radius: f64,
    pub arrive_radius: f64,
    pub flee_clear_radius: f64,
    pub wander: WanderMode,
    pub wander_bounds: WanderBounds,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_resolve_to_pixels() {
        let tuning = AgentConfig::default().tuning().unwrap();

        let ppm = 10.0 / 0.3;
        assert!((tuning.chase_radius - 7.0 * ppm).abs() < 1e-9);
        assert!((tuning.arrive_radius - 0.5 * ppm).abs() < 1e-9);
        assert!((tuning.speed - 10.0 / 3.6 * ppm).abs() < 1e-9);
        assert_eq!(tuning.wander, WanderMode::Random);
    }

    #[test]
    fn default_route_has_seven_waypoints() {
        let config = AgentConfig::default();
        assert_eq!(config.patrol_route.len(), 7);
        assert_eq!(config.patrol_route[0], Point::new(43.0, 274.0));
    }

    #[test]
    fn rejects_non_positive_radius() {
        let config = AgentConfig {
            arrive_radius_m: 0.0,
            ..AgentConfig::default()
        };

        let err = config.tuning().unwrap_err();
        assert!(matches!(err, AgentError::InvalidConfig(msg) if msg.contains("arrive_radius_m")));
    }

    #[test]
    fn rejects_nan_speed() {
        let config = AgentConfig {
            run_speed_kmph: f64::NAN,
            ..AgentConfig::default()
        };
        assert!(matches!(config.validate(), Err(AgentError::InvalidConfig(_))));
    }

    #[test]
    fn flee_clear_radius_cannot_exceed_chase_radius() {
        let config = AgentConfig {
            flee_clear_radius_m: 8.0,
            ..AgentConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, AgentError::InvalidConfig(msg) if msg.contains("flee_clear_radius_m")));

        let config = AgentConfig {
            flee_clear_radius_m: 4.0,
            ..AgentConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_inverted_bounds() {
        let config = AgentConfig {
            wander_bounds: WanderBounds::new(Point::new(500.0, 0.0), Point::new(100.0, 10.0)),
            ..AgentConfig::default()
        };
        assert!(matches!(config.validate(), Err(AgentError::InvalidConfig(_))));
    }

    #[test]
    fn patrol_needs_waypoints() {
        let config = AgentConfig::default()
            .with_wander(WanderMode::Patrol)
            .with_patrol_route(Vec::new());
        assert!(matches!(config.validate(), Err(AgentError::EmptyPatrolRoute)));

        // Random wandering does not use the route.
        let config = config.with_wander(WanderMode::Random);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn bounds_contain_their_corners() {
        let bounds = WanderBounds::default();
        assert!(bounds.contains(bounds.min));
        assert!(bounds.contains(bounds.max));
        assert!(!bounds.contains(Point::new(99.0, 500.0)));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_ron_keeps_defaults() {
        let config = AgentConfig::from_ron("(chase_radius_m: 3.0, wander: Patrol)").unwrap();

        assert_eq!(config.chase_radius_m, 3.0);
        assert_eq!(config.wander, WanderMode::Patrol);
        assert_eq!(config.run_speed_kmph, AgentConfig::DEFAULT_RUN_SPEED_KMPH);
        assert_eq!(config.patrol_route.len(), 7);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn malformed_ron_is_a_parse_error() {
        let err = AgentConfig::from_ron("(chase_radius_m: \"far\")").unwrap_err();
        assert!(matches!(err, AgentError::Parse(_)));
    }
}

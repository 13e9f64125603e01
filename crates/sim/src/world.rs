//! Headless stand-in for the play mode.
//!
//! A scripted quarry walks a circle around the level, and collectibles are
//! credited to the quarry and the agent in turn so the agent cycles through
//! chasing, fleeing and wandering.

use behavior_tree::Status;
use npc::{Agent, Point, Tracked};

/// The tracked entity: walks a fixed circle.
#[derive(Clone, Debug)]
pub struct Boy {
    center: Point,
    radius: f64,
    /// Radians per second.
    angular_speed: f64,
    angle: f64,
    position: Point,
    pub score: u32,
}

impl Boy {
    pub const LEVEL_CENTER: (f64, f64) = (600.0, 512.0);
    pub const ORBIT_RADIUS: f64 = 300.0;
    pub const ANGULAR_SPEED: f64 = 0.25;

    pub fn new(center: Point, radius: f64, angular_speed: f64) -> Self {
        Self {
            center,
            radius,
            angular_speed,
            angle: 0.0,
            position: center + Point::new(radius, 0.0),
            score: 0,
        }
    }

    pub fn step(&mut self, dt: f64) {
        self.angle = (self.angle + self.angular_speed * dt) % std::f64::consts::TAU;
        self.position = self.center + Point::from_angle(self.angle) * self.radius;
    }
}

impl Default for Boy {
    fn default() -> Self {
        Self::new(
            Point::new(Self::LEVEL_CENTER.0, Self::LEVEL_CENTER.1),
            Self::ORBIT_RADIUS,
            Self::ANGULAR_SPEED,
        )
    }
}

impl Tracked for Boy {
    fn position(&self) -> Point {
        self.position
    }

    fn score(&self) -> u32 {
        self.score
    }
}

/// Who received the most recent collectible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pickup {
    Boy,
    Zombie,
}

pub struct World {
    pub boy: Boy,
    pub zombie: Agent,
    frame: u64,
    pickup_interval: u64,
    next_pickup: Pickup,
}

impl World {
    pub fn new(zombie: Agent, boy: Boy, pickup_interval: u64) -> Self {
        Self {
            boy,
            zombie,
            frame: 0,
            pickup_interval: pickup_interval.max(1),
            next_pickup: Pickup::Boy,
        }
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Advances one frame and returns the agent's root status.
    pub fn step(&mut self, dt: f64) -> npc::Result<Status> {
        self.frame += 1;
        self.boy.step(dt);

        if let Some(pickup) = self.pickup_due() {
            match pickup {
                Pickup::Boy => self.boy.score += 1,
                Pickup::Zombie => self.zombie.record_pickup(),
            }
            tracing::info!(
                frame = self.frame,
                ?pickup,
                boy = self.boy.score,
                zombie = self.zombie.score(),
                "collectible consumed"
            );
        }

        self.zombie.update(dt, &self.boy)
    }

    fn pickup_due(&mut self) -> Option<Pickup> {
        if self.frame % self.pickup_interval != 0 {
            return None;
        }
        let pickup = self.next_pickup;
        self.next_pickup = match pickup {
            Pickup::Boy => Pickup::Zombie,
            Pickup::Zombie => Pickup::Boy,
        };
        Some(pickup)
    }
}

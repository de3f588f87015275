//! Eased values and damped springs.
//!
//! Two kinds of motion drive the bar. Color and alpha fades use eased
//! [`Animation`] values; everything positional (entrance, exit, the
//! normal/options choreography) uses [`Spring`] physics so the settle has
//! the oscillating character the bar is known for.

/// Easing function for [`Animation`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Linear interpolation.
    Linear,
    /// Exponential ease-out (fast snap to target).
    #[default]
    ExponentialOut,
    /// Exponential ease-in (accelerating).
    ExponentialIn,
    /// Instant (no animation).
    Instant,
}

impl Easing {
    /// Applies the easing function to a progress value in `[0, 1]`.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::ExponentialOut => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2.0_f32.powf(-10.0 * t)
                }
            }
            Self::ExponentialIn => {
                if t <= 0.0 {
                    0.0
                } else {
                    2.0_f32.powf(10.0 * (t - 1.0))
                }
            }
            Self::Instant => 1.0,
        }
    }
}

/// A single eased scalar value.
#[derive(Debug, Clone)]
pub struct Animation {
    current: f32,
    target: f32,
    start: f32,
    progress: f32,
    duration: f32,
    easing: Easing,
}

impl Animation {
    /// Default animation duration in seconds.
    pub const DEFAULT_DURATION: f32 = 0.4;

    /// Creates a new animation resting at the given value.
    #[must_use]
    pub fn new(value: f32, easing: Easing) -> Self {
        Self {
            current: value,
            target: value,
            start: value,
            progress: 1.0,
            duration: Self::DEFAULT_DURATION,
            easing,
        }
    }

    /// Sets a custom duration in seconds.
    #[must_use]
    pub fn with_duration(mut self, duration: f32) -> Self {
        self.duration = duration;
        self
    }

    /// Returns the current value.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.current
    }

    /// Returns the target value.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Returns true once the value has reached its target.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }

    /// Starts animating from the current value toward a new target.
    pub fn set_target(&mut self, target: f32) {
        if (target - self.target).abs() > f32::EPSILON {
            self.start = self.current;
            self.target = target;
            self.progress = 0.0;
        }
    }

    /// Jumps to a value without animating.
    pub fn set_immediate(&mut self, value: f32) {
        self.current = value;
        self.target = value;
        self.start = value;
        self.progress = 1.0;
    }

    /// Advances the animation by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        if self.progress >= 1.0 {
            return;
        }
        if self.duration > 0.0 {
            self.progress += dt / self.duration;
        } else {
            self.progress = 1.0;
        }
        self.progress = self.progress.min(1.0);

        let eased = self.easing.apply(self.progress);
        self.current = self.start + (self.target - self.start) * eased;
        if self.progress >= 1.0 {
            self.current = self.target;
        }
    }
}

impl Default for Animation {
    fn default() -> Self {
        Self::new(0.0, Easing::ExponentialOut)
    }
}

/// A damped-spring scalar value.
///
/// Integrated with semi-implicit Euler: `F = -k*x - c*v`. The defaults are
/// slightly underdamped so targets are approached with a visible overshoot
/// and settle, matching the bar's entrance and transition curves.
#[derive(Debug, Clone)]
pub struct Spring {
    current: f32,
    target: f32,
    velocity: f32,
    stiffness: f32,
    damping: f32,
    mass: f32,
    settled: bool,
}

impl Spring {
    /// Default spring stiffness.
    pub const DEFAULT_STIFFNESS: f32 = 170.0;
    /// Default damping coefficient (underdamped).
    pub const DEFAULT_DAMPING: f32 = 18.0;
    /// Displacement/velocity threshold below which the spring settles.
    pub const SETTLE_THRESHOLD: f32 = 0.05;

    /// Creates a spring resting at the given value.
    #[must_use]
    pub fn new(value: f32) -> Self {
        Self {
            current: value,
            target: value,
            velocity: 0.0,
            stiffness: Self::DEFAULT_STIFFNESS,
            damping: Self::DEFAULT_DAMPING,
            mass: 1.0,
            settled: true,
        }
    }

    /// Sets the spring stiffness (higher is faster).
    #[must_use]
    pub fn with_stiffness(mut self, stiffness: f32) -> Self {
        self.stiffness = stiffness;
        self
    }

    /// Sets the damping coefficient (lower oscillates more).
    #[must_use]
    pub fn with_damping(mut self, damping: f32) -> Self {
        self.damping = damping;
        self
    }

    /// Sets an initial velocity, kicking the spring even at its target.
    #[must_use]
    pub fn with_velocity(mut self, velocity: f32) -> Self {
        self.velocity = velocity;
        self.settled = false;
        self
    }

    /// Returns the current value.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.current
    }

    /// Returns the target value.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Returns true once the spring has come to rest at its target.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Retargets the spring, keeping current value and velocity.
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
        self.settled = false;
    }

    /// Jumps to a value at rest, without animating.
    pub fn set_immediate(&mut self, value: f32) {
        self.current = value;
        self.target = value;
        self.velocity = 0.0;
        self.settled = true;
    }

    /// Advances the physics by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        if self.settled {
            return;
        }

        let displacement = self.current - self.target;
        let spring_force = -self.stiffness * displacement;
        let damping_force = -self.damping * self.velocity;
        let acceleration = (spring_force + damping_force) / self.mass;

        self.velocity += acceleration * dt;
        self.current += self.velocity * dt;

        if (self.current - self.target).abs() < Self::SETTLE_THRESHOLD
            && self.velocity.abs() < Self::SETTLE_THRESHOLD
        {
            self.current = self.target;
            self.velocity = 0.0;
            self.settled = true;
        }
    }
}

/// A spring-animated 2D position.
#[derive(Debug, Clone)]
pub struct Spring2D {
    /// X component spring.
    pub x: Spring,
    /// Y component spring.
    pub y: Spring,
}

impl Spring2D {
    /// Creates a 2D spring resting at the given position.
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x: Spring::new(x),
            y: Spring::new(y),
        }
    }

    /// Applies stiffness to both components.
    #[must_use]
    pub fn with_stiffness(mut self, stiffness: f32) -> Self {
        self.x = self.x.with_stiffness(stiffness);
        self.y = self.y.with_stiffness(stiffness);
        self
    }

    /// Applies damping to both components.
    #[must_use]
    pub fn with_damping(mut self, damping: f32) -> Self {
        self.x = self.x.with_damping(damping);
        self.y = self.y.with_damping(damping);
        self
    }

    /// Returns the current position.
    #[must_use]
    pub fn value(&self) -> (f32, f32) {
        (self.x.value(), self.y.value())
    }

    /// Retargets both components.
    pub fn set_target(&mut self, x: f32, y: f32) {
        self.x.set_target(x);
        self.y.set_target(y);
    }

    /// Jumps both components to a resting position.
    pub fn set_immediate(&mut self, x: f32, y: f32) {
        self.x.set_immediate(x);
        self.y.set_immediate(y);
    }

    /// Advances both components by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        self.x.update(dt);
        self.y.update(dt);
    }

    /// Returns true once both components are at rest.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.x.is_settled() && self.y.is_settled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animation_reaches_target() {
        let mut anim = Animation::new(0.0, Easing::ExponentialOut);
        anim.set_target(100.0);

        for _ in 0..60 {
            anim.update(1.0 / 60.0);
        }

        assert!((anim.value() - 100.0).abs() < 0.01);
        assert!(anim.is_complete());
    }

    #[test]
    fn test_spring_settles_at_target() {
        let mut spring = Spring::new(0.0);
        spring.set_target(50.0);

        for _ in 0..600 {
            spring.update(1.0 / 60.0);
        }

        assert!(spring.is_settled());
        assert!((spring.value() - 50.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_spring_overshoots_before_settling() {
        let mut spring = Spring::new(0.0).with_damping(8.0);
        spring.set_target(10.0);

        let mut max = 0.0_f32;
        for _ in 0..600 {
            spring.update(1.0 / 60.0);
            max = max.max(spring.value());
        }

        assert!(max > 10.0, "underdamped spring should overshoot: {max}");
        assert!(spring.is_settled());
    }

    #[test]
    fn test_spring_retarget_keeps_momentum() {
        let mut spring = Spring::new(0.0);
        spring.set_target(100.0);
        for _ in 0..5 {
            spring.update(1.0 / 60.0);
        }
        let midway = spring.value();

        spring.set_target(0.0);
        assert!(!spring.is_settled());
        assert!((spring.value() - midway).abs() < f32::EPSILON);
    }

    #[test]
    fn test_set_immediate_rests() {
        let mut spring = Spring::new(0.0);
        spring.set_target(30.0);
        spring.set_immediate(30.0);
        assert!(spring.is_settled());
        assert!((spring.value() - 30.0).abs() < f32::EPSILON);
    }
}

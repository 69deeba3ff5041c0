use log::debug;

use crate::math::transform::{PoseSnapshot, Transform};

/// Holds the last pose that passed validation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformCommitter {
    last_known_good: PoseSnapshot,
}

impl TransformCommitter {
    /// Seed with the initial, post-centering pose
    pub fn new(initial: &Transform) -> Self {
        Self {
            last_known_good: initial.pose(),
        }
    }

    pub fn last_known_good(&self) -> &PoseSnapshot {
        &self.last_known_good
    }

    /// Record an accepted transform as the new last-known-good pose
    pub fn commit(&mut self, accepted: &Transform) {
        self.last_known_good = accepted.pose();
    }

    /// Put the last-known-good position and rotation back on `target`.
    /// Scale is left alone.
    pub fn restore(&self, target: &mut Transform) {
        debug!(
            "restoring pose {:?} over rejected {:?}",
            self.last_known_good.position, target.position
        );
        target.apply_pose(&self.last_known_good);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{Rad, Vector3};
    use rand::Rng;

    #[test]
    fn test_restore_is_exact() {
        let mut rng = rand::rng();
        for _ in 0..100 {
            let mut good = Transform::from_position(Vector3::new(
                rng.random_range(-3.0..3.0),
                0.0,
                rng.random_range(-3.0..3.0),
            ));
            good.set_yaw(Rad(rng.random_range(-3.0..3.0)));
            let committer = TransformCommitter::new(&good);

            let mut proposed = good;
            proposed.position.x += rng.random_range(0.1..10.0);
            proposed.set_yaw(Rad(rng.random_range(-3.0..3.0)));
            committer.restore(&mut proposed);

            assert_eq!(proposed.pose(), good.pose());
        }
    }

    #[test]
    fn test_commit_replaces_snapshot() {
        let mut committer = TransformCommitter::new(&Transform::identity());
        let mut accepted = Transform::from_position(Vector3::new(1.0, 0.0, 2.0));
        accepted.set_uniform_scale(4.0);
        committer.commit(&accepted);

        let mut other = Transform::identity();
        committer.restore(&mut other);
        assert_eq!(other.position, accepted.position);
        assert_eq!(other.uniform_scale(), 1.0);
    }
}

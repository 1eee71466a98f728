//! Unit tests for criterion latching against `SimWorld`.

use sr_core::{ActorId, ActorRole, Tick, Transform, Vec2};
use sr_world::{ActorFactory, LaneMap, SimWorld, WorldControl, WorldError};

use crate::criterion::{Criterion, Verdict};

fn world_with_pair() -> (SimWorld, ActorId, ActorId) {
    let mut world = SimWorld::builder()
        .map(LaneMap::highway(2))
        .default_catalog()
        .build();
    let a = world
        .spawn("vehicle.tesla.model3", Transform::at(0.0, 0.0), ActorRole::Ego)
        .unwrap();
    let b = world
        .spawn("vehicle.toyota.prius", Transform::at(30.0, 0.0), ActorRole::Scenario)
        .unwrap();
    (world, a, b)
}

#[cfg(test)]
mod collision {
    use super::*;

    #[test]
    fn passes_while_actors_are_apart() {
        let (world, ego, _) = world_with_pair();
        let mut c = Criterion::collision(ego);

        c.check(Tick(1), &world).unwrap();
        assert_eq!(*c.verdict(), Verdict::Passing);
        assert!(!c.failed());
    }

    #[test]
    fn latches_on_box_overlap() {
        let (mut world, ego, other) = world_with_pair();
        world.set_transform(other, Transform::at(4.0, 0.0)).unwrap();

        let mut c = Criterion::collision(ego);
        c.check(Tick(7), &world).unwrap();

        match c.verdict() {
            Verdict::Failed { at, detail } => {
                assert_eq!(*at, Tick(7));
                assert!(detail.contains("ActorId(1)"), "detail was {detail:?}");
            }
            Verdict::Passing => panic!("overlap not detected"),
        }
    }

    #[test]
    fn touching_boxes_count_as_contact() {
        // Half extents are 2.4 m, so centres 4.8 m apart just touch.
        let (mut world, ego, other) = world_with_pair();
        world.set_transform(other, Transform::at(4.8, 0.0)).unwrap();

        let mut c = Criterion::collision(ego);
        c.check(Tick(1), &world).unwrap();
        assert!(c.failed());
    }

    #[test]
    fn verdict_survives_separation() {
        let (mut world, ego, other) = world_with_pair();
        world.set_transform(other, Transform::at(4.0, 0.0)).unwrap();

        let mut c = Criterion::collision(ego);
        c.check(Tick(3), &world).unwrap();
        assert!(c.failed());

        // Contact is history; the verdict must not be.
        world.set_transform(other, Transform::at(200.0, 0.0)).unwrap();
        c.check(Tick(4), &world).unwrap();
        match c.verdict() {
            Verdict::Failed { at, .. } => assert_eq!(*at, Tick(3)),
            Verdict::Passing => panic!("criterion un-failed"),
        }
    }

    #[test]
    fn latched_criterion_skips_world_queries() {
        let (mut world, ego, other) = world_with_pair();
        world.set_transform(other, Transform::at(4.0, 0.0)).unwrap();

        let mut c = Criterion::collision(ego);
        c.check(Tick(3), &world).unwrap();
        assert!(c.failed());

        // Even with the watched actor gone, a latched check is a no-op.
        world.destroy(ego).unwrap();
        assert!(c.check(Tick(4), &world).is_ok());
    }

    #[test]
    fn missing_actor_is_an_error() {
        let (world, _, _) = world_with_pair();
        let mut c = Criterion::collision(ActorId(99));

        assert!(matches!(
            c.check(Tick(1), &world),
            Err(WorldError::ActorNotFound(ActorId(99)))
        ));
    }
}

#[cfg(test)]
mod speed_limit {
    use super::*;

    #[test]
    fn latches_above_the_limit() {
        let (mut world, ego, _) = world_with_pair();
        world.set_velocity(ego, Vec2::new(12.0, 0.0)).unwrap();

        let mut c = Criterion::speed_limit(ego, 10.0);
        c.check(Tick(5), &world).unwrap();

        match c.verdict() {
            Verdict::Failed { at, detail } => {
                assert_eq!(*at, Tick(5));
                assert!(detail.contains("12.00"), "detail was {detail:?}");
            }
            Verdict::Passing => panic!("overspeed not detected"),
        }
    }

    #[test]
    fn exactly_at_the_limit_passes() {
        let (mut world, ego, _) = world_with_pair();
        world.set_velocity(ego, Vec2::new(10.0, 0.0)).unwrap();

        let mut c = Criterion::speed_limit(ego, 10.0);
        c.check(Tick(1), &world).unwrap();
        assert!(!c.failed());
    }

    #[test]
    fn report_carries_kind_and_actor() {
        let (world, ego, _) = world_with_pair();
        let mut c = Criterion::speed_limit(ego, 10.0);
        c.check(Tick(1), &world).unwrap();

        let report = c.report();
        assert_eq!(report.name, "speed_limit");
        assert_eq!(report.actor, ego);
        assert_eq!(report.verdict, Verdict::Passing);
    }
}

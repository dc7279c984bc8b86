use std::time::Duration;

use cgmath::{InnerSpace, Vector3, Zero, vec3};
use rand::{Rng, SeedableRng, rngs::StdRng};

use parkourvr::{
    Effect, GameConfig, Hand, Head, InputContext, ParkourSession, PullLocomotion, Time, Transform,
    gameplay::{ParkourCounter, ProgressTracker},
    locomotion::{HapticConfig, PullConfig, RespawnConfig},
    triggers::{TriggerRouter, TriggerVolume, TriggerVolumeKind, VolumeId},
};

fn tick(seconds: f32) -> Time {
    Time::from_delta_secs(seconds, Duration::ZERO)
}

fn random_vec(rng: &mut StdRng, extent: f32) -> Vector3<f32> {
    vec3(
        rng.gen_range(-extent..extent),
        rng.gen_range(-extent..extent),
        rng.gen_range(-extent..extent),
    )
}

fn random_input(rng: &mut StdRng, left_trigger: f32, right_trigger: f32) -> InputContext {
    let forward = loop {
        let candidate = random_vec(rng, 1.0);
        if candidate.magnitude() > 0.1 {
            break candidate;
        }
    };
    InputContext {
        head: Head::facing(random_vec(rng, 5.0), forward),
        left_hand: Hand::at(random_vec(rng, 1.0)).with_trigger(left_trigger),
        right_hand: Hand::at(random_vec(rng, 1.0)).with_trigger(right_trigger),
    }
}

fn moved_to(effects: &[Effect]) -> Option<Vector3<f32>> {
    effects.iter().find_map(|effect| match effect {
        Effect::SetPlayerPosition { position, .. } => Some(*position),
        _ => None,
    })
}

#[test]
fn test_released_triggers_never_move_player() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut locomotion = PullLocomotion::with_default_config();
    let player = Transform::at(vec3(1.0, 3.0, -2.0));

    for _ in 0..200 {
        let left = rng.gen_range(0.0..=0.95);
        let right = rng.gen_range(0.0..=0.95);
        let input = random_input(&mut rng, left, right);
        let effects = locomotion.advance(&tick(rng.gen_range(0.001..0.1)), &input, &player, None);

        assert!(!locomotion.state().is_pulling);
        assert!(moved_to(&effects).is_none());
    }
}

#[test]
fn test_pulling_respects_height_band() {
    let mut rng = StdRng::seed_from_u64(11);
    let config = PullConfig {
        min_height: 0.5,
        max_height: 3.0,
        speed_multiplier: 20.0,
        vertical_influence: 1.0,
        ..PullConfig::default()
    };
    let mut locomotion = PullLocomotion::new(config, HapticConfig::default(), RespawnConfig::default());
    let mut player = Transform::at(vec3(0.0, 1.0, 0.0));

    for _ in 0..500 {
        let (left, right) = match rng.gen_range(0..3) {
            0 => (1.0, 0.0),
            1 => (0.0, 1.0),
            _ => (0.97, 0.99),
        };
        let input = random_input(&mut rng, left, right);
        let effects = locomotion.advance(&tick(rng.gen_range(0.001..0.1)), &input, &player, None);
        player.apply_effects(&effects);

        assert!(locomotion.state().is_pulling);
        assert!(player.position.y >= 0.5 && player.position.y <= 3.0, "{:?}", player.position);
        assert!(player.position.x.is_finite() && player.position.z.is_finite());
    }
}

#[test]
fn test_damping_decays_monotonically() {
    let mut locomotion = PullLocomotion::with_default_config();
    locomotion.set_velocity(vec3(3.0, -1.0, 2.0));
    let player = Transform::default();
    let input = InputContext::default();

    let mut previous = locomotion.state().velocity.magnitude();
    for _ in 0..100 {
        locomotion.advance(&tick(0.011), &input, &player, None);
        let speed = locomotion.state().velocity.magnitude();
        assert!(speed < previous);
        assert!((speed - previous * 0.98).abs() < 1.0e-4);
        previous = speed;
    }
}

#[test]
fn test_both_hands_average_wins() {
    // Head looks along +X so the thrust magnitude is easy to read back
    let head = Head::facing(vec3(0.0, 1.7, 0.0), vec3(1.0, 0.0, 0.0));
    let origin = vec3(0.0, 0.0, 0.0);
    let mut locomotion = PullLocomotion::with_default_config();
    locomotion.prime(&InputContext {
        head: head.clone(),
        left_hand: Hand::at(origin),
        right_hand: Hand::at(origin),
    });

    let input = InputContext {
        head,
        left_hand: Hand::at(vec3(0.0, 0.0, 0.2)).with_trigger(1.0),
        right_hand: Hand::at(vec3(0.0, 0.6, 0.0)).with_trigger(1.0),
    };
    locomotion.advance(&tick(0.1), &input, &Transform::default(), None);

    // (0,0,2) and (0,6,0) average to (0,3,1); x5 multiplier
    let expected_speed = vec3(0.0, 3.0, 1.0).magnitude() * 5.0;
    assert!((locomotion.state().velocity.magnitude() - expected_speed).abs() < 1.0e-3);
}

#[test]
fn test_scenario_two_hand_pull_head_forward() {
    let head = Head::facing(vec3(0.0, 1.7, 0.0), vec3(0.0, 0.0, 1.0));
    let origin = vec3(0.0, 0.0, 0.0);
    let mut locomotion = PullLocomotion::with_default_config();
    locomotion.prime(&InputContext {
        head: head.clone(),
        left_hand: Hand::at(origin),
        right_hand: Hand::at(origin),
    });

    let input = InputContext {
        head,
        left_hand: Hand::at(vec3(1.0, 0.0, 0.0)).with_trigger(1.0),
        right_hand: Hand::at(vec3(3.0, 0.0, 0.0)).with_trigger(1.0),
    };
    let effects = locomotion.advance(&tick(1.0), &input, &Transform::at(vec3(0.0, 1.0, 0.0)), None);

    assert!((locomotion.state().velocity - vec3(0.0, 0.0, 10.0)).magnitude() < 1.0e-3);
    let position = moved_to(&effects).unwrap();
    assert!((position - vec3(0.0, 1.0, 10.0)).magnitude() < 1.0e-3);

    // Vibration saturates at this speed
    assert!(effects.iter().any(|effect| matches!(
        effect,
        Effect::Vibrate { amplitude, .. } if (*amplitude - 1.0).abs() < 1.0e-6
    )));
}

#[test]
fn test_scenario_release_damps_once() {
    let mut locomotion = PullLocomotion::with_default_config();
    locomotion.set_velocity(vec3(2.0, 0.0, 0.0));
    let mut player = Transform::at(vec3(1.0, 2.0, 3.0));

    let effects = locomotion.advance(&tick(1.0), &InputContext::default(), &player, None);
    player.apply_effects(&effects);

    assert!((locomotion.state().velocity - vec3(1.96, 0.0, 0.0)).magnitude() < 1.0e-5);
    assert_eq!(player.position, vec3(1.0, 2.0, 3.0));
}

#[test]
fn test_scenario_height_clamp_floor() {
    let config = PullConfig {
        min_height: 0.5,
        ..PullConfig::default()
    };
    let mut locomotion = PullLocomotion::new(config, HapticConfig::default(), RespawnConfig::default());
    let head = Head::facing(vec3(0.0, 1.7, 0.0), vec3(0.0, -1.0, 1.0));
    let origin = vec3(0.0, 0.0, 0.0);
    locomotion.prime(&InputContext {
        head: head.clone(),
        left_hand: Hand::at(origin),
        right_hand: Hand::at(origin),
    });

    // Speed 20 looking down: vertical share is -0.25 * 20 = -5 from y = 4
    let input = InputContext {
        head,
        left_hand: Hand::at(vec3(4.0, 0.0, 0.0)).with_trigger(1.0),
        right_hand: Hand::at(origin),
    };
    let effects = locomotion.advance(&tick(1.0), &input, &Transform::at(vec3(0.0, 4.0, 0.0)), None);
    assert_eq!(moved_to(&effects).unwrap().y, 0.5);
}

#[test]
fn test_respawn_gate() {
    let head = Head::facing(vec3(0.0, 1.7, 0.0), vec3(0.0, 0.0, 1.0));
    let input = InputContext {
        head,
        left_hand: Hand::default().with_secondary(true),
        right_hand: Hand::default(),
    };
    let mut counter = ParkourCounter::new();
    counter.set_checkpoint(vec3(10.0, 2.0, -4.0));

    let mut locomotion = PullLocomotion::with_default_config();
    let mut player = Transform::at(vec3(0.0, 1.0, 0.0));

    let effects = locomotion.advance(&tick(0.02), &input, &player, Some(&counter));
    player.apply_effects(&effects);
    assert_eq!(player.position, vec3(0.0, 1.0, 0.0));

    counter.start(vec3(10.0, 2.0, -4.0));
    for _ in 0..3 {
        let effects = locomotion.advance(&tick(0.02), &input, &player, Some(&counter));
        player.apply_effects(&effects);
        assert_eq!(player.position, counter.respawn_position());
        assert!((player.forward() - vec3(0.0, 0.0, -1.0)).magnitude() < 1.0e-4);
        player.position = vec3(0.0, 1.0, 0.0);
    }
}

#[test]
fn test_collectible_counts_once() {
    let router = TriggerRouter::with_default_config();
    let mut counter = ParkourCounter::new();
    let mut coin = TriggerVolume::new(
        VolumeId(3),
        "coin_3",
        TriggerVolumeKind::from_tag("coin"),
        vec3(2.0, 1.0, 0.0),
    );
    let input = InputContext::default();

    for _ in 0..4 {
        router.on_enter(&mut coin, &input, Some(&mut counter), None);
    }
    assert_eq!(counter.coin_count(), 1);
    assert!(!coin.active);
}

#[test]
fn test_session_course_run() {
    let config = GameConfig::default();
    let mut session = ParkourSession::new(&config, vec3(0.0, 1.0, 0.0));
    session.add_volume(TriggerVolume::new(
        VolumeId(1),
        "Stage1",
        TriggerVolumeKind::StageMarker,
        vec3(0.0, 1.0, 1.0),
    ));
    session.add_volume(TriggerVolume::new(
        VolumeId(2),
        "coin_a",
        TriggerVolumeKind::Collectible,
        vec3(0.0, 1.0, 2.0),
    ));

    let head = Head::facing(vec3(0.0, 2.7, 0.0), vec3(0.0, 0.0, 1.0));
    let mut input = InputContext {
        head,
        left_hand: Hand::at(vec3(0.0, 0.0, 0.0)),
        right_hand: Hand::at(vec3(0.0, 0.0, 0.0)),
    };
    session.locomotion.prime(&input);

    // Swing the right hand back 10cm per frame while pulling
    input.right_hand.trigger_value = 1.0;
    for frame in 1..=10 {
        input.right_hand.position = vec3(0.0, 0.0, -0.1 * frame as f32);
        let entered: Vec<VolumeId> = match frame {
            2 => vec![VolumeId(1)],
            5 => vec![VolumeId(2)],
            _ => Vec::new(),
        };
        session.tick(&tick(0.1), &input, &entered);
    }

    assert!(session.player.position.z > 1.0);
    assert_eq!(session.progress.current_stage, "Stage1");
    assert!(session.progress.take_stage_change());
    assert_eq!(session.progress.coin_count, 1);

    // Let go: velocity keeps decaying, position holds
    input.right_hand.trigger_value = 0.0;
    let held = session.player.position;
    for _ in 0..5 {
        session.tick(&tick(0.1), &input, &[]);
    }
    assert_eq!(session.player.position, held);
    assert!(session.locomotion.state().velocity.magnitude() > 0.0);
    assert!(session.locomotion.state().velocity != Vector3::zero());
}

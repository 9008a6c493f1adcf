use super::*;
use crate::behavior::BehaviorOrder;

const JSON: &str = r##"[
    {"type":"moveSpeedStatic","config":{"min":1,"max":1}},
    {"type":"color","config":{"color":[{"value":"#ff0000","time":0},{"value":"#0000ff","time":1}]}},
    {"type":"scale","config":{"pickScale":{"list":[{"value":[1,2],"time":0},{"value":[3,4],"time":1}]}}}
]"##;

#[test]
fn behaviors_are_sorted_by_order_stably() {
    let set = BehaviorSet::from_json(JSON, 1).unwrap();
    let kinds: Vec<&str> = set.behaviors().iter().map(|b| b.kind()).collect();
    assert_eq!(kinds, ["color", "scale", "moveSpeedStatic"]);
    let orders: Vec<BehaviorOrder> = set.behaviors().iter().map(|b| b.order()).collect();
    assert!(orders.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn retire_clears_private_state_and_releases_slot() {
    let mut set = BehaviorSet::from_json(JSON, 1).unwrap();
    let mut pool = ParticlePool::new();
    let wave = pool.acquire_wave(3);
    set.initialize_wave(&mut pool, &wave);
    assert_eq!(set.cached_timelines(), 3);

    assert!(set.retire(&mut pool, wave[1]));
    assert!(!set.retire(&mut pool, wave[1]));
    assert_eq!(set.cached_timelines(), 2);
    assert_eq!(pool.len(), 2);
}

#[test]
fn update_runs_every_behavior_on_live_particles() {
    let mut set = BehaviorSet::from_json(JSON, 1).unwrap();
    let mut pool = ParticlePool::new();
    let wave = pool.acquire_wave(2);
    set.initialize_wave(&mut pool, &wave);
    for &id in &wave {
        pool.get_mut(id).unwrap().age_percent = 1.0;
    }
    set.update(&mut pool, 2.0);

    for &id in &wave {
        let p = pool.get(id).unwrap();
        assert_eq!(p.tint, 0x00_00_FF);
        assert!((3.0..4.0).contains(&p.scale.x));
        assert_eq!(p.position.x, 2.0);
    }
    assert_eq!(set.missed_lookups(), 0);
}

#[test]
fn same_seed_is_deterministic() {
    let run = |seed: u64| {
        let mut set = BehaviorSet::from_json(JSON, seed).unwrap();
        let mut pool = ParticlePool::new();
        let wave = pool.acquire_wave(4);
        set.initialize_wave(&mut pool, &wave);
        wave.iter()
            .map(|&id| pool.get(id).unwrap().scale.x)
            .collect::<Vec<_>>()
    };
    assert_eq!(run(9), run(9));
    assert_ne!(run(9), run(10));
}

#[test]
fn bad_json_surfaces_serde_error() {
    let err = BehaviorSet::from_json("{", 0).unwrap_err();
    assert!(matches!(err, crate::EmberError::Serde(_)));
}

#[test]
fn retiring_a_pick_wave_leaves_no_cached_timelines() {
    let json = r#"[{"type":"scale","config":{"pickScale":{"list":[{"value":[1,2],"time":0}]}}}]"#;
    let mut set = BehaviorSet::from_json(json, 4).unwrap();
    let mut pool = ParticlePool::new();
    let wave = pool.acquire_wave(4);
    set.initialize_wave(&mut pool, &wave);
    assert_eq!(set.cached_timelines(), 4);

    for &id in &wave {
        assert!(set.retire(&mut pool, id));
    }
    assert_eq!(set.cached_timelines(), 0);
    assert!(pool.is_empty());

    let next = pool.acquire_wave(4);
    set.initialize_wave(&mut pool, &next);
    assert_eq!(set.cached_timelines(), 4);
}

#[test]
fn shared_timeline_ignores_visit_order() {
    let json = r#"[{"type":"scale","config":{"scale":[{"value":0,"time":0},{"value":20,"time":1}]}}]"#;
    let run = |ages: [f64; 3]| {
        let mut set = BehaviorSet::from_json(json, 0).unwrap();
        let mut pool = ParticlePool::new();
        let wave = pool.acquire_wave(3);
        set.initialize_wave(&mut pool, &wave);
        for (&id, age) in wave.iter().zip(ages) {
            pool.get_mut(id).unwrap().age_percent = age;
        }
        set.update(&mut pool, 0.016);
        wave.iter()
            .map(|&id| pool.get(id).unwrap().scale.x)
            .collect::<Vec<_>>()
    };

    let forward = run([0.9, 0.1, 0.6]);
    let mut reverse = run([0.6, 0.1, 0.9]);
    reverse.reverse();
    let expected = [18.0, 2.0, 12.0];
    for (got, want) in forward.iter().zip(expected) {
        assert!((got - want).abs() < 1e-9, "{forward:?}");
    }
    assert_eq!(forward, reverse);
}

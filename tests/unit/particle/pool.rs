use super::*;

#[test]
fn released_slots_are_reused_with_new_generation() {
    let mut pool = ParticlePool::new();
    let a = pool.acquire();
    let b = pool.acquire();
    assert_eq!(pool.len(), 2);

    assert!(pool.release(a));
    assert!(!pool.release(a));
    assert!(!pool.contains(a));

    let c = pool.acquire();
    assert_eq!(c.index, a.index);
    assert_ne!(c.generation, a.generation);
    assert!(pool.get(a).is_none());
    assert!(pool.get(c).is_some());
    assert!(pool.contains(b));
    assert_eq!(pool.capacity(), 2);
}

#[test]
fn recycled_particle_starts_from_default() {
    let mut pool = ParticlePool::with_capacity(1);
    let a = pool.acquire();
    pool.get_mut(a).unwrap().tint = 0x12_34_56;
    pool.release(a);
    let b = pool.acquire();
    assert_eq!(pool.get(b).unwrap(), &Particle::default());
}

#[test]
fn live_ids_skip_released_slots() {
    let mut pool = ParticlePool::new();
    let wave = pool.acquire_wave(4);
    pool.release(wave[1]);
    pool.release(wave[3]);
    assert_eq!(pool.live_ids(), vec![wave[0], wave[2]]);
    assert_eq!(pool.len(), 2);
    assert!(!pool.is_empty());
}

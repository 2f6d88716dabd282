//! Tests for towers.

use super::*;

fn tower_with(id: usize, disk_ids: &[usize]) -> Tower {
    let mut tower = Tower::new(TowerId::new(id));
    // Pushed largest first so the first entry ends up on top.
    for &disk in disk_ids.iter().rev() {
        tower.push(Disk::new(DiskId::new(disk)));
    }
    tower
}

#[test]
fn test_new_tower_is_empty() {
    let tower = Tower::new(TowerId::new(1));

    assert!(tower.is_empty());
    assert_eq!(tower.disk_count(), 0);
    assert!(tower.peek_top().is_none());
    assert!(tower.is_ordered());
}

#[test]
fn test_push_places_disk_on_top() {
    let mut tower = tower_with(2, &[3]);
    tower.push(Disk::new(DiskId::new(1)));

    assert_eq!(tower.disk_count(), 2);
    assert_eq!(tower.peek_top().map(Disk::id), Some(DiskId::new(1)));
    assert_eq!(tower.disk_ids(), vec![DiskId::new(1), DiskId::new(3)]);
}

#[test]
fn test_pop_returns_top_disk() {
    let mut tower = tower_with(1, &[1, 2, 3]);

    let disk = tower.pop().unwrap();
    assert_eq!(disk.id(), DiskId::new(1));
    assert_eq!(tower.disk_count(), 2);
    assert_eq!(tower.peek_top().map(Disk::id), Some(DiskId::new(2)));
}

#[test]
fn test_pop_empty_tower_fails() {
    let mut tower = Tower::new(TowerId::new(4));

    assert_eq!(tower.pop(), Err(HanoiError::EmptyTower(TowerId::new(4))));
    assert!(tower.is_empty());
}

#[test]
fn test_disks_iterate_top_to_bottom() {
    let tower = tower_with(1, &[2, 5, 9]);
    let ids: Vec<usize> = tower.disks().map(|d| d.id().get()).collect();

    assert_eq!(ids, vec![2, 5, 9]);
    assert!(tower.is_ordered());
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "pushed onto smaller disk")]
fn test_push_larger_disk_panics_in_debug() {
    let mut tower = tower_with(1, &[1]);
    tower.push(Disk::new(DiskId::new(2)));
}

#[test]
fn test_disk_fits_on_larger_only() {
    let small = Disk::new(DiskId::new(1));
    let large = Disk::new(DiskId::new(2));

    assert!(small.fits_on(&large));
    assert!(!large.fits_on(&small));
    assert!(!small.fits_on(&Disk::new(DiskId::new(1))));
}

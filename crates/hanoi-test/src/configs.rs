//! Puzzle sizes for exhaustive tests.

/// Largest traditional pass, in disks, that [`bounded_configurations`] admits.
pub const MAX_RESIDUAL_DISKS: usize = 12;

/// Disks left on the source for the traditional pass of a puzzle.
///
/// With three towers every disk takes part. Up to the buffer capacity no
/// disk does. Beyond it, piles on towers 2..=T-2 hold 3 + ... + (T-1) disks
/// and the rest is moved traditionally.
pub fn residual_disks(tower_count: usize, disk_count: usize) -> usize {
    if tower_count <= 3 {
        return disk_count;
    }
    if disk_count <= tower_count * (tower_count - 1) / 2 {
        return 0;
    }
    let buffered = (tower_count - 1) * tower_count / 2 - 3;
    disk_count.saturating_sub(buffered)
}

/// All supported (towers, disks) pairs whose traditional pass stays within
/// [`MAX_RESIDUAL_DISKS`], plus a few three-tower puzzles.
pub fn bounded_configurations() -> Vec<(usize, usize)> {
    let mut configs: Vec<(usize, usize)> = (1..=8).map(|disks| (3, disks)).collect();
    for towers in 5..=10 {
        for disks in 3..=40 {
            if residual_disks(towers, disks) <= MAX_RESIDUAL_DISKS {
                configs.push((towers, disks));
            }
        }
    }
    configs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_residual_disks() {
        assert_eq!(residual_disks(3, 7), 7);
        assert_eq!(residual_disks(5, 4), 0);
        assert_eq!(residual_disks(6, 15), 0);
        assert_eq!(residual_disks(5, 12), 5);
        assert_eq!(residual_disks(10, 40), 0);
    }

    #[test]
    fn test_bounded_configurations_cover_every_tower_count() {
        let configs = bounded_configurations();

        for towers in 5..=10 {
            assert!(configs.iter().any(|&(t, _)| t == towers));
        }
        assert!(configs.contains(&(5, 3)));
        assert!(configs.contains(&(10, 40)));
        assert!(!configs.contains(&(5, 40)));
    }
}

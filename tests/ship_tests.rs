use battleship_ai::{Ship, ShipType};

#[test]
fn test_register_hits_until_sunk() {
    let mut ship = Ship::new(ShipType::new("Test", 3));
    assert!(!ship.is_sunk());
    assert!(ship.register_hit(0, 2, 3));
    assert!(ship.register_hit(1, 3, 3));
    assert!(!ship.is_sunk());
    assert!(ship.register_hit(2, 4, 3));
    assert!(ship.is_sunk());
    assert_eq!(ship.hit_coordinates(), &[(2, 3), (3, 3), (4, 3)]);
}

#[test]
fn test_invalid_index_is_rejected() {
    let mut ship = Ship::new(ShipType::new("Test", 2));
    assert!(!ship.register_hit(2, 0, 0));
    assert_eq!(ship.hits(), &[false, false]);
    assert!(ship.hit_coordinates().is_empty());
    assert!(!ship.is_sunk());
}

#[test]
fn test_repeated_index_never_overcounts() {
    let mut ship = Ship::new(ShipType::new("Test", 2));
    assert!(ship.register_hit(0, 1, 1));
    assert!(ship.register_hit(0, 1, 1));
    assert_eq!(ship.hits().iter().filter(|&&h| h).count(), 1);
    assert!(!ship.is_sunk());
}

#[test]
fn test_single_cell_ship() {
    let mut ship = Ship::new(ShipType::new("Buoy", 1));
    assert!(!ship.is_sunk());
    assert!(ship.register_hit(0, 9, 9));
    assert!(ship.is_sunk());
}

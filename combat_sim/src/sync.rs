//! Sync-rate check: one vehicle across pilot sync levels

use combat_core::{assemble_unit_stats, BalanceConfig, PilotRecord, VehicleRecord};

fn test_vehicle() -> VehicleRecord {
    VehicleRecord {
        name: "Striker".to_string(),
        hp: 1000,
        attack: 100,
        defense: 50,
        speed: 100,
    }
}

pub fn run(balance: &BalanceConfig, levels: &[i32]) {
    println!("{}", "=".repeat(40));
    println!("   SYNC RATE CHECK");
    println!("{}", "=".repeat(40));

    let vehicle = test_vehicle();
    for &level in levels {
        let pilot = PilotRecord {
            sync_level: level,
            ..Default::default()
        };
        let stats = assemble_unit_stats(Some(&vehicle), &[], Some(&pilot), balance);

        println!("\n[Sync Level {level}]");
        println!("Base Attack: {} -> Effective Attack: {}", vehicle.attack, stats.base_attack);
        println!("Base Defense: {} -> Effective Defense: {}", vehicle.defense, stats.target_defense);
        println!("Expected Multiplier: {:.2}", balance.sync_rate(level));
    }
}
